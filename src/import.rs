//! Player catalog import from CSV (`name,position,price,house`, optional `id`).

use crate::models::{House, Player, PlayerId, Position};
use serde::Deserialize;
use std::collections::HashSet;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that stop an import as a whole. Bad individual rows are skipped instead.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to open player file {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error("failed to read csv header: {0}")]
    Header(#[source] csv::Error),
    #[error("csv is missing required column '{0}'")]
    MissingColumn(&'static str),
}

const REQUIRED_COLUMNS: [&str; 4] = ["name", "position", "price", "house"];

#[derive(Debug, Deserialize)]
struct PlayerRow {
    #[serde(default)]
    id: Option<PlayerId>,
    name: String,
    position: String,
    price: u32,
    house: String,
}

impl PlayerRow {
    fn into_player(self, id: PlayerId) -> Result<Player, String> {
        let position: Position = self.position.parse().map_err(|e| format!("{e}"))?;
        let house: House = self.house.parse().map_err(|e| format!("{e}"))?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err("empty name".to_string());
        }
        if self.price == 0 {
            return Err("price must be positive".to_string());
        }
        Ok(Player::new(id, name, position, self.price, house))
    }
}

/// Read players from CSV. Rows without an `id` get the next unused id, counting
/// from 1. Rows that fail to parse or reuse an id are logged and skipped.
pub fn read_players<R: io::Read>(reader: R) -> Result<Vec<Player>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(ImportError::Header)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ImportError::MissingColumn(column));
        }
    }

    let mut players = Vec::new();
    let mut next_id: PlayerId = 1;
    let mut taken: HashSet<PlayerId> = HashSet::new();
    for (idx, result) in rdr.deserialize::<PlayerRow>().enumerate() {
        let line = idx + 2; // 1-indexed, skip header
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("line {}: skipping player row: {}", line, e);
                continue;
            }
        };
        let id = match row.id {
            Some(id) if taken.contains(&id) => {
                log::warn!("line {}: skipping player row: id {} already used", line, id);
                continue;
            }
            Some(id) => id,
            None => {
                while taken.contains(&next_id) {
                    next_id = next_id.saturating_add(1);
                }
                next_id
            }
        };
        match row.into_player(id) {
            Ok(player) => {
                taken.insert(id);
                next_id = next_id.max(id.saturating_add(1));
                players.push(player);
            }
            Err(reason) => log::warn!("line {}: skipping player row: {}", line, reason),
        }
    }
    log::info!("Imported {} player(s)", players.len());
    Ok(players)
}

/// Read players from a CSV file.
pub fn load_players(path: impl AsRef<Path>) -> Result<Vec<Player>, ImportError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| ImportError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_players(file)
}
