//! Shared fixtures: an eleven-player catalog that fits "4-4-2" within budget
//! and covers every house, plus a few spare players for swapping in.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use fantasy_league::{House, Player, PlayerId, Position, Roster, RosterEntry};

pub fn catalog() -> Vec<Player> {
    use House::*;
    use Position::*;
    vec![
        Player::new(1, "Arjun", Goalkeeper, 8, Hyderabad),
        Player::new(2, "Dev", Defender, 9, Jaipur),
        Player::new(3, "Kabir", Defender, 9, Kashmir),
        Player::new(4, "Om", Defender, 8, Oberoi),
        Player::new(5, "Tarun", Defender, 8, Tata),
        Player::new(6, "Harsh", Midfielder, 9, Hyderabad),
        Player::new(7, "Jai", Midfielder, 9, Jaipur),
        Player::new(8, "Karan", Midfielder, 9, Kashmir),
        Player::new(9, "Ojas", Midfielder, 9, Oberoi),
        Player::new(10, "Tanay", Attacker, 10, Tata),
        Player::new(11, "Hriday", Attacker, 10, Hyderabad),
        // spares
        Player::new(12, "Hemant", Defender, 5, Hyderabad),
        Player::new(13, "Himmat", Defender, 5, Hyderabad),
        Player::new(14, "Jeet", Attacker, 5, Jaipur),
        Player::new(15, "Mehul", Midfielder, 4, Kashmir),
    ]
}

/// Ids of the default "4-4-2" selection (total price 98).
pub const STARTING_XI: [PlayerId; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Roster over `ids` in "4-4-2", captained by `captain`.
pub fn roster(ids: &[PlayerId], captain: PlayerId) -> Roster {
    roster_in("4-4-2", ids, captain)
}

pub fn roster_in(formation: &str, ids: &[PlayerId], captain: PlayerId) -> Roster {
    let entries = ids
        .iter()
        .map(|&id| RosterEntry {
            player_id: id,
            is_captain: id == captain,
        })
        .collect();
    Roster::new(formation, entries)
}

/// `STARTING_XI` with `out` replaced by `inn`, pairwise.
pub fn swapped(out: &[PlayerId], inn: &[PlayerId]) -> Vec<PlayerId> {
    STARTING_XI
        .iter()
        .map(|id| match out.iter().position(|o| o == id) {
            Some(i) => inn[i],
            None => *id,
        })
        .collect()
}

pub fn match_day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, 15, 0, 0).unwrap()
}
