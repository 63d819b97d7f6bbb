use ::scraper::ElementRef;

use crate::model::MapSlug;

/// Map and series format read from a listing's map label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MapAndFormat {
    pub map: Option<MapSlug>,
    pub format: Option<String>,
}

/// Last `/`-delimited segment of the element's `src`, extension included.
pub(crate) fn pop_slash_source<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    element
        .value()
        .attr("src")
        .and_then(|src| src.rsplit('/').next())
        .filter(|segment| !segment.is_empty())
}

/// [`pop_slash_source`] up to the first `.`.
pub(crate) fn slash_source_stem<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    pop_slash_source(element).and_then(|segment| segment.split('.').next())
}

/// Interpret a map label such as `bo3`, `nuke` or `def`.
///
/// Single maps are only shown for best-of-one matches, so a recognised map
/// implies that format.
pub(crate) fn get_match_format_and_map(label: &str) -> MapAndFormat {
    let label = label.trim();
    if label.is_empty() {
        return MapAndFormat::default();
    }

    let lowercase = label.to_ascii_lowercase();
    if let Some(count) = lowercase
        .strip_prefix("bo")
        .filter(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    {
        return MapAndFormat {
            map: None,
            format: Some(format!("Best of {count}")),
        };
    }

    if lowercase == "def" {
        return MapAndFormat {
            map: None,
            format: Some("Default".to_string()),
        };
    }

    match MapSlug::from_label(&lowercase) {
        Some(map) => MapAndFormat {
            map: Some(map),
            format: Some("Best of 1".to_string()),
        },
        None => MapAndFormat {
            map: None,
            format: Some(label.to_string()),
        },
    }
}
