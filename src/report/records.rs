use std::fs;
use std::path::Path;

use thiserror::Error;

/// A missing source file is fatal to the report run. Everything row-level
/// (bad column count, unresolved references) is warned about and skipped.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot read {path}")]
    MissingSource {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct GameEvent {
    pub id: String,
    pub name: String,
}

/// Raw RSVP row. The status stays a string here — the registry re-validates
/// it during bulk load.
#[derive(Debug, Clone)]
pub struct RsvpRecord {
    pub event_id: String,
    pub player_id: String,
    pub status: String,
}

pub fn load_players(path: &Path) -> Result<Vec<Player>, ReportError> {
    Ok(read_rows(path, 2)?
        .into_iter()
        .map(|mut row| Player {
            name: row.pop().unwrap_or_default(),
            id: row.pop().unwrap_or_default(),
        })
        .collect())
}

pub fn load_events(path: &Path) -> Result<Vec<GameEvent>, ReportError> {
    Ok(read_rows(path, 2)?
        .into_iter()
        .map(|mut row| GameEvent {
            name: row.pop().unwrap_or_default(),
            id: row.pop().unwrap_or_default(),
        })
        .collect())
}

pub fn load_rsvps(path: &Path) -> Result<Vec<RsvpRecord>, ReportError> {
    Ok(read_rows(path, 3)?
        .into_iter()
        .map(|mut row| RsvpRecord {
            status: row.pop().unwrap_or_default(),
            player_id: row.pop().unwrap_or_default(),
            event_id: row.pop().unwrap_or_default(),
        })
        .collect())
}

/// Minimal comma-separated reader: header row dropped, blank lines skipped,
/// fields trimmed. No quoting support — the source files are plain exports.
fn read_rows(path: &Path, columns: usize) -> Result<Vec<Vec<String>>, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::MissingSource {
        path: path.display().to_string(),
        source,
    })?;

    let mut rows = Vec::new();
    for line in text.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<String> = line.split(',').map(|f| f.trim().to_string()).collect();
        if fields.len() != columns {
            tracing::warn!(
                "{}: skipping row with {} field(s), expected {columns}: {line:?}",
                path.display(),
                fields.len()
            );
            continue;
        }

        rows.push(fields);
    }

    Ok(rows)
}
