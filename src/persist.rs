//! Best-score file.
//!
//! JSON, versioned:
//! `{"version":1,"entries":[{"size":3,"moves":42,"seconds":61}]}`.
//! Unset fields are omitted.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaquinError};
use crate::stats::BestScores;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ScoreEntry {
    size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    moves: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScoreFile {
    version: u32,
    #[serde(default)]
    entries: Vec<ScoreEntry>,
}

pub fn scores_to_json(best: &BestScores) -> Result<String> {
    let entries = best
        .iter()
        .filter(|(_, moves, seconds)| moves.is_some() || seconds.is_some())
        .map(|(size, moves, seconds)| ScoreEntry {
            size,
            moves,
            seconds,
        })
        .collect();
    let file = ScoreFile {
        version: FORMAT_VERSION,
        entries,
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

pub fn scores_from_json(s: &str) -> Result<BestScores> {
    let file: ScoreFile = serde_json::from_str(s)?;
    if file.version != FORMAT_VERSION {
        return Err(TaquinError::UnsupportedVersion(file.version));
    }
    let mut best = BestScores::default();
    for entry in file.entries {
        if !best.set(entry.size, entry.moves, entry.seconds) {
            log::warn!("skipping best score for unsupported size {}", entry.size);
        }
    }
    Ok(best)
}

/// Reads the best-score table; a missing file is an empty table.
pub fn load_scores<P: AsRef<Path>>(path: P) -> Result<BestScores> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => {
            let best = scores_from_json(&contents)?;
            log::info!("loaded best scores from {}", path.display());
            Ok(best)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("no best scores at {}, starting fresh", path.display());
            Ok(BestScores::default())
        }
        Err(e) => Err(TaquinError::io(path, e)),
    }
}

pub fn save_scores<P: AsRef<Path>>(path: P, best: &BestScores) -> Result<()> {
    let path = path.as_ref();
    let contents = scores_to_json(best)?;
    fs::write(path, contents).map_err(|e| TaquinError::io(path, e))?;
    log::info!("saved best scores to {}", path.display());
    Ok(())
}
