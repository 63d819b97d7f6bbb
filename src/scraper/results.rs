use itertools::Itertools;
use ::scraper::{ElementRef, Selector};
use tracing::{debug, instrument};

use crate::diagnostics::Diagnostics;
use crate::error::{HltvError, Result};
use crate::model::{Event, EventScope, MatchResult, ResultsFilter, ResultsQuery, Team, TeamPair};
use crate::scraper::parsing::{get_match_format_and_map, slash_source_stem};
use crate::scraper::{self, select_text, Html, PageLoader};

const RESULTS_PER_PAGE: u32 = 100;
const RESULT_ENTRY_SELECTOR: &str =
    ".results-holder > .results-all > .results-sublist .result-con .a-reset";

/// Build the listing URL for one page of results.
pub(crate) fn results_url(base_url: &str, filter: &ResultsFilter, page: u32) -> String {
    let mut url = format!("{base_url}/results?offset={}", page * RESULTS_PER_PAGE);

    if let Some(team_id) = filter.team_id {
        url += &format!("&team={team_id}");
    }
    if let Some(event_id) = filter.event_id {
        url += &format!("&event={event_id}");
    }
    if let Some(player_id) = filter.player_id {
        url += &format!("&player={player_id}");
    }
    if let Some(stars) = filter.stars {
        url += &format!("&stars={stars}");
    }
    if let Some(match_type) = filter.match_type {
        url += &format!("&matchType={match_type}");
    }
    if let Some(map) = filter.map {
        url += &format!("&map={map}");
    }
    if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
        url += &format!(
            "&startDate={}&endDate={}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );
    }
    for content in &filter.content_filters {
        url += &format!("&content={content}");
    }

    url
}

/// Walk `query.pages` listing pages in order and collect every result.
#[instrument(skip(loader, diagnostics))]
pub(crate) async fn get_results(
    base_url: &str,
    loader: &dyn PageLoader,
    diagnostics: &dyn Diagnostics,
    query: &ResultsQuery,
) -> Result<Vec<MatchResult>> {
    if query.pages < 1 {
        diagnostics.warn("get_results: pages cannot be less than 1");
        return Ok(vec![]);
    }

    let scope = query.filter.event_scope();
    let mut results = vec![];
    for page in 0..query.pages {
        let url = results_url(base_url, &query.filter, page);
        let document = scraper::fetch_page(&url, loader).await?;
        let page_results = parse_results(&document, scope)?;
        debug!(count = page_results.len(), page, "parsed results page");
        results.extend(page_results);
    }
    Ok(results)
}

pub(crate) fn parse_results(document: &Html, scope: EventScope) -> Result<Vec<MatchResult>> {
    let selector = Selector::parse(RESULT_ENTRY_SELECTOR)?;
    document
        .select(&selector)
        .map(|entry| parse_result(&entry, document, scope))
        .collect()
}

fn parse_result(entry: &ElementRef, document: &Html, scope: EventScope) -> Result<MatchResult> {
    let href = entry
        .value()
        .attr("href")
        .ok_or(HltvError::ElementNotFound {
            context: "result link href",
        })?;
    let id = href
        .split('/')
        .nth(2)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| HltvError::MalformedMatchLink {
            href: href.to_string(),
        })?
        .parse()?;

    let stars_selector = Selector::parse(".stars i")?;
    let stars = u8::try_from(entry.select(&stars_selector).count()).unwrap_or(u8::MAX);

    let logo_selector = Selector::parse("img.team-logo")?;
    let name_selector = Selector::parse("div.team")?;
    let logos = entry.select(&logo_selector).collect_vec();
    let names = entry.select(&name_selector).collect_vec();
    let teams = TeamPair {
        home: parse_team(logos.first(), names.first()),
        away: parse_team(logos.last(), names.last()),
    };

    let score_selector = Selector::parse(".result-score")?;
    let result = select_text(entry, &score_selector);

    let map_text_selector = Selector::parse(".map-text")?;
    let map_and_format = get_match_format_and_map(&select_text(entry, &map_text_selector));

    let (event, date) = match scope {
        EventScope::MultiEvent => (parse_entry_event(entry)?, parse_entry_date(entry)),
        EventScope::SingleEvent(event_id) => parse_page_event(document, event_id)?,
    };

    Ok(MatchResult {
        id,
        teams,
        result,
        event,
        map: map_and_format.map,
        format: map_and_format.format,
        stars,
        date,
    })
}

fn parse_team(logo: Option<&ElementRef>, name: Option<&ElementRef>) -> Team {
    let id = logo
        .and_then(slash_source_stem)
        .and_then(|stem| stem.parse().ok())
        .unwrap_or_default();
    let name = name
        .map(|n| n.text().collect::<String>().trim().to_string())
        .unwrap_or_default();
    Team { id, name }
}

fn parse_entry_event(entry: &ElementRef) -> Result<Event> {
    let logo_selector = Selector::parse(".event-logo")?;
    let logo = entry
        .select(&logo_selector)
        .next()
        .ok_or(HltvError::ElementNotFound {
            context: "event logo (.event-logo)",
        })?;

    let id = slash_source_stem(&logo).and_then(|stem| stem.parse().ok());
    let name = logo
        .value()
        .attr("alt")
        .ok_or(HltvError::ElementNotFound {
            context: "event logo alt text",
        })?
        .to_string();

    Ok(Event { id, name })
}

/// Timestamp shared by every entry of a day, stored on the grouping container.
fn parse_entry_date(entry: &ElementRef) -> Option<i64> {
    entry
        .parent()
        .and_then(ElementRef::wrap)
        .and_then(|group| group.value().attr("data-zonedgrouping-entry-unix"))
        .and_then(|unix| unix.trim().parse().ok())
}

fn parse_page_event(document: &Html, event_id: u32) -> Result<(Event, Option<i64>)> {
    let name_selector = Selector::parse(".eventname")?;
    let name = document
        .select(&name_selector)
        .map(|e| e.text().collect::<String>())
        .collect::<String>()
        .trim()
        .to_string();

    let date_selector = Selector::parse(".eventdate span")?;
    let date = document
        .select(&date_selector)
        .next()
        .and_then(|e| e.value().attr("data-unix"))
        .and_then(|unix| unix.trim().parse().ok());

    let event = Event {
        id: Some(event_id),
        name,
    };
    Ok((event, date))
}
