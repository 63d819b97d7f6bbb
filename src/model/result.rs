use serde::Serialize;

use super::MapSlug;

/// A single finished match as shown in the results listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub id: u32,
    pub teams: TeamPair,
    /// Final score exactly as rendered, e.g. `2 - 1`.
    pub result: String,
    pub event: Event,
    pub map: Option<MapSlug>,
    pub format: Option<String>,
    pub stars: u8,
    /// Milliseconds since the Unix epoch, as published by the listing.
    /// `None` if the listing's value is missing or not numeric.
    pub date: Option<i64>,
}

/// Both sides of a match, in the listing's left/right order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPair {
    pub home: Team,
    pub away: Team,
}

/// Team reference. `id` is 0 when the logo file name is not a number,
/// as happens for teams without a logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
}

/// Event reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// `None` when the event logo file name is not a number.
    pub id: Option<u32>,
    pub name: String,
}
