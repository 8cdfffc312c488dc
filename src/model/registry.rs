use std::collections::HashMap;

use crate::logger::Logger;
use crate::model::status::RsvpStatus;

/// A candidate entry at the construction boundary. The status is whatever
/// the data feed carried — validity is re-checked, never assumed.
#[derive(Debug, Clone)]
pub struct RsvpCandidate {
    pub player_id: String,
    pub status: Option<String>,
}

impl RsvpCandidate {
    pub fn new(player_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            status: Some(status.into()),
        }
    }
}

/// Derived tally over the current entries. Recomputed on demand, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RsvpCounts {
    pub total: usize,
    pub confirmed: usize,
    pub declined: usize,
    pub maybe: usize,
}

/// Owns the player → status mapping for one event roster.
///
/// All mutation goes through [`upsert`](Self::upsert); invalid input is
/// logged at error severity and discarded, never raised. The registry stays
/// usable after a rejected call. Not internally synchronized — hosts that
/// share one across threads must serialize access themselves.
pub struct RsvpRegistry<L: Logger> {
    entries: HashMap<String, RsvpStatus>,
    logger: L,
}

impl<L: Logger> RsvpRegistry<L> {
    pub fn new(logger: L) -> Self {
        logger.log("rsvp registry: initializing empty");
        Self {
            entries: HashMap::new(),
            logger,
        }
    }

    /// Bulk-loads candidates through the same path runtime upserts take,
    /// with the per-call added/updated logs suppressed. Candidates missing
    /// an identifier or a status are warned about and skipped; candidates
    /// with an unrecognized status fall through to upsert validation.
    pub fn with_entries(logger: L, candidates: impl IntoIterator<Item = RsvpCandidate>) -> Self {
        let candidates: Vec<RsvpCandidate> = candidates.into_iter().collect();
        logger.log(&format!(
            "rsvp registry: initializing with {} entries",
            candidates.len()
        ));

        let mut registry = Self {
            entries: HashMap::new(),
            logger,
        };

        for candidate in candidates {
            let Some(status) = candidate.status.as_deref() else {
                registry.logger.warn(&format!(
                    "rsvp registry: skipping candidate without a status: {:?}",
                    candidate.player_id
                ));
                continue;
            };

            if candidate.player_id.is_empty() {
                registry.logger.warn(&format!(
                    "rsvp registry: skipping candidate with empty player id (status {status:?})"
                ));
                continue;
            }

            registry.apply(&candidate.player_id, status, true);
        }

        registry
    }

    /// Insert-or-update, last-write-wins. `status` is validated against the
    /// closed set here; rejected calls change nothing.
    ///
    /// An upsert that re-asserts the current status overwrites silently —
    /// "updated" is only logged on an actual change.
    pub fn upsert(&mut self, player_id: &str, status: &str) {
        self.apply(player_id, status, false);
    }

    fn apply(&mut self, player_id: &str, status: &str, during_init: bool) {
        if player_id.is_empty() {
            self.logger
                .error("rsvp registry: rejected upsert with empty player id");
            return;
        }

        let Some(status) = RsvpStatus::parse(status) else {
            self.logger.error(&format!(
                "rsvp registry: rejected invalid status {status:?} for player {player_id:?}"
            ));
            return;
        };

        let prior = self.entries.insert(player_id.to_string(), status);

        if during_init {
            return;
        }

        match prior {
            None => self
                .logger
                .log(&format!("rsvp registry: added {player_id:?} as {status}")),
            Some(prev) if prev != status => self.logger.log(&format!(
                "rsvp registry: updated {player_id:?} from {prev} to {status}"
            )),
            Some(_) => {}
        }
    }

    /// Players currently answering `Yes`, in map iteration order. Callers
    /// must not depend on the ordering.
    pub fn confirmed_attendees(&self) -> Vec<String> {
        let confirmed: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, status)| **status == RsvpStatus::Yes)
            .map(|(id, _)| id.clone())
            .collect();

        self.logger.log(&format!(
            "rsvp registry: {} confirmed attendee(s)",
            confirmed.len()
        ));
        confirmed
    }

    /// Single pass over the entries. `total` always equals
    /// `confirmed + declined + maybe`.
    pub fn counts(&self) -> RsvpCounts {
        let mut counts = RsvpCounts {
            total: self.entries.len(),
            ..RsvpCounts::default()
        };

        for status in self.entries.values() {
            match status {
                RsvpStatus::Yes => counts.confirmed += 1,
                RsvpStatus::No => counts.declined += 1,
                RsvpStatus::Maybe => counts.maybe += 1,
            }
        }

        self.logger.log(&format!(
            "rsvp registry: counts total={} confirmed={} declined={} maybe={}",
            counts.total, counts.confirmed, counts.declined, counts.maybe
        ));
        counts
    }

    /// Unknown identifiers are an expected outcome, not an error — no
    /// logging, no validation path.
    pub fn status_of(&self, player_id: &str) -> Option<RsvpStatus> {
        self.entries.get(player_id).copied()
    }
}
