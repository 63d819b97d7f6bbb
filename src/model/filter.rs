use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use strum_macros::{EnumString, FromRepr};

/// Where the match was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
pub enum MatchType {
    Lan,
    Online,
}

/// Minimum star rating of listed matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FromRepr)]
#[repr(u8)]
pub enum Stars {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Display for Stars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// A playable map, displayed as its `de_*` slug.
///
/// Parsing also accepts the bare map name and the short codes used in result
/// listings, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, strum_macros::Display)]
#[strum(ascii_case_insensitive)]
pub enum MapSlug {
    #[strum(to_string = "de_cache", serialize = "cache", serialize = "cch")]
    Cache,
    #[strum(to_string = "de_season", serialize = "season", serialize = "ssn")]
    Season,
    #[strum(to_string = "de_dust2", serialize = "dust2", serialize = "d2")]
    Dust2,
    #[strum(to_string = "de_mirage", serialize = "mirage", serialize = "mrg")]
    Mirage,
    #[strum(to_string = "de_inferno", serialize = "inferno", serialize = "inf")]
    Inferno,
    #[strum(to_string = "de_nuke", serialize = "nuke")]
    Nuke,
    #[strum(to_string = "de_train", serialize = "train", serialize = "trn")]
    Train,
    #[strum(to_string = "de_cobblestone", serialize = "cobblestone", serialize = "cbl")]
    Cobblestone,
    #[strum(to_string = "de_overpass", serialize = "overpass", serialize = "ovp")]
    Overpass,
    #[strum(to_string = "de_tuscan", serialize = "tuscan", serialize = "tsc")]
    Tuscan,
    #[strum(to_string = "de_vertigo", serialize = "vertigo", serialize = "vtg")]
    Vertigo,
}

impl MapSlug {
    /// Recognise a map from a slug, a map name or a listing short code.
    pub fn from_label(label: &str) -> Option<Self> {
        label.trim().parse().ok()
    }
}

impl Serialize for MapSlug {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Restricts results to matches that have the given content attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentFilter {
    Highlights,
    Demo,
    Vod,
    Stats,
    /// Any other tag, passed to the site verbatim.
    Other(String),
}

impl Display for ContentFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentFilter::Highlights => write!(f, "highlights"),
            ContentFilter::Demo => write!(f, "demo"),
            ContentFilter::Vod => write!(f, "vod"),
            ContentFilter::Stats => write!(f, "stats"),
            ContentFilter::Other(tag) => write!(f, "{tag}"),
        }
    }
}

/// Constraints applied to the results listing. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsFilter {
    pub team_id: Option<u32>,
    pub event_id: Option<u32>,
    pub player_id: Option<u32>,
    pub stars: Option<Stars>,
    pub match_type: Option<MatchType>,
    pub map: Option<MapSlug>,
    /// Only applied together with `end_date`.
    pub start_date: Option<NaiveDate>,
    /// Only applied together with `start_date`.
    pub end_date: Option<NaiveDate>,
    pub content_filters: Vec<ContentFilter>,
}

impl ResultsFilter {
    pub fn event_scope(&self) -> EventScope {
        match self.event_id {
            Some(id) => EventScope::SingleEvent(id),
            None => EventScope::MultiEvent,
        }
    }
}

/// Options for a results query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsQuery {
    /// Number of listing pages (100 results each) to walk. Must be at least 1.
    pub pages: u32,
    pub filter: ResultsFilter,
}

impl Default for ResultsQuery {
    fn default() -> Self {
        Self {
            pages: 1,
            filter: ResultsFilter::default(),
        }
    }
}

/// Which part of a listing page carries event name and date.
///
/// When the listing is filtered to one event, entries no longer repeat the
/// event, and the page header holds it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventScope {
    SingleEvent(u32),
    MultiEvent,
}
