pub mod html;
pub mod records;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::logger::TracingLogger;
use crate::model::registry::{RsvpCandidate, RsvpRegistry};
use records::{GameEvent, Player, ReportError, RsvpRecord};

/// One rendered line of the report: an event and its confirmed roster.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub event_id: String,
    pub event_name: String,
    pub attendees: Vec<String>,
    pub confirmed: usize,
}

/// Load the three record sets, join them, and render the document.
pub fn generate(
    players_path: &Path,
    events_path: &Path,
    rsvps_path: &Path,
) -> Result<String, ReportError> {
    let players = records::load_players(players_path)?;
    let events = records::load_events(events_path)?;
    let rsvps = records::load_rsvps(rsvps_path)?;

    Ok(html::render(&build_rows(&players, &events, &rsvps)))
}

/// Join players, events, and RSVPs into report rows, ordered by numeric
/// event id (non-numeric ids sort after, lexically). Each event's RSVP rows
/// are bulk-loaded into their own registry, so raw statuses get the same
/// validation runtime upserts do. Unresolved references warn and render as
/// placeholders instead of aborting.
pub fn build_rows(players: &[Player], events: &[GameEvent], rsvps: &[RsvpRecord]) -> Vec<ReportRow> {
    let player_names: HashMap<&str, &str> = players
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();
    let event_names: HashMap<&str, &str> = events
        .iter()
        .map(|e| (e.id.as_str(), e.name.as_str()))
        .collect();

    let mut event_ids: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for event in events {
        if seen.insert(event.id.as_str()) {
            event_ids.push(event.id.clone());
        }
    }
    for rsvp in rsvps {
        if !event_names.contains_key(rsvp.event_id.as_str()) && seen.insert(rsvp.event_id.as_str()) {
            tracing::warn!(
                "rsvp references unknown event {:?} (player {:?})",
                rsvp.event_id,
                rsvp.player_id
            );
            event_ids.push(rsvp.event_id.clone());
        }
    }

    event_ids.sort_by_key(|id| match id.parse::<u64>() {
        Ok(n) => (0u8, n, String::new()),
        Err(_) => (1u8, 0, id.clone()),
    });

    let mut by_event: HashMap<&str, Vec<RsvpCandidate>> = HashMap::new();
    for rsvp in rsvps {
        by_event
            .entry(rsvp.event_id.as_str())
            .or_default()
            .push(RsvpCandidate::new(
                rsvp.player_id.clone(),
                rsvp.status.clone(),
            ));
    }

    event_ids
        .into_iter()
        .map(|event_id| {
            let candidates = by_event.remove(event_id.as_str()).unwrap_or_default();
            let registry = RsvpRegistry::with_entries(TracingLogger, candidates);

            let mut attendees: Vec<String> = registry
                .confirmed_attendees()
                .into_iter()
                .map(|player_id| match player_names.get(player_id.as_str()) {
                    Some(name) => (*name).to_string(),
                    None => {
                        tracing::warn!(
                            "confirmed rsvp references unknown player {player_id:?} (event {event_id:?})"
                        );
                        "(unknown player)".to_string()
                    }
                })
                .collect();
            attendees.sort();

            let confirmed = attendees.len();
            let event_name = event_names
                .get(event_id.as_str())
                .map_or_else(|| "(unknown event)".to_string(), |name| (*name).to_string());

            ReportRow {
                event_id,
                event_name,
                attendees,
                confirmed,
            }
        })
        .collect()
}
