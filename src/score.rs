use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::HISTORY_LIMIT;
use crate::error::HistoryError;

const APP_DIR_NAME: &str = "grid-snake";
const HISTORY_FILE_NAME: &str = "history.json";

const NAME_PREFIXES: [&str; 7] = ["Neo", "Swift", "Shadow", "Storm", "Vibe", "Turbo", "Nova"];
const NAME_SUFFIXES: [&str; 7] = ["Rider", "Fox", "Blaze", "Drift", "Knight", "Scout", "Ace"];

/// One finished game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub score: u32,
    /// Unix time in milliseconds.
    pub played_at: u64,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub avatar_hue: Option<u16>,
}

impl HistoryEntry {
    /// Builds an entry whose display identity is derived from `played_at`.
    #[must_use]
    pub fn new(score: u32, played_at: u64) -> Self {
        Self {
            score,
            played_at,
            player_name: Some(generate_player_name(played_at)),
            avatar_hue: Some((played_at % 360) as u16),
        }
    }

    /// Reads one stored entry without trusting its shape. Numeric strings
    /// count as scores, anything else unusable scores 0, and a missing
    /// timestamp becomes `now`.
    fn from_json(item: &Value, now: u64) -> Self {
        let score = item
            .get("score")
            .and_then(loose_number)
            .filter(|n| n.is_finite() && *n > 0.0)
            .map_or(0, |n| n.min(f64::from(u32::MAX)) as u32);
        let played_at = item
            .get("playedAt")
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map_or(now, |n| n as u64);
        let player_name = item
            .get("playerName")
            .and_then(Value::as_str)
            .map(str::to_owned);
        let avatar_hue = item
            .get("avatarHue")
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite())
            .map(|n| n.rem_euclid(360.0) as u16);

        Self {
            score,
            played_at,
            player_name,
            avatar_hue,
        }
        .normalized()
    }

    fn normalized(mut self) -> Self {
        self.player_name = self
            .player_name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty());
        self.avatar_hue = self.avatar_hue.map(|hue| hue % 360);
        self
    }
}

/// A leaderboard row: an entry with its display name and rank resolved.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RankedEntry {
    pub rank: usize,
    pub player_name: String,
    pub initials: String,
    pub avatar_hue: u16,
    pub score: u32,
    pub played_at: u64,
}

/// Finished games, most recent first, capped at a fixed length.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScoreHistory {
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl Default for ScoreHistory {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl ScoreHistory {
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Prepends `entry` and drops whatever falls past the cap.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest recorded score, or 0 when empty.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.entries.iter().map(|entry| entry.score).max().unwrap_or(0)
    }

    /// Entries ordered by score, highest first; ties keep recency order.
    #[must_use]
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let mut sorted: Vec<&HistoryEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));

        sorted
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let rank = index + 1;
                let player_name = entry
                    .player_name
                    .clone()
                    .unwrap_or_else(|| format!("Player {rank}"));
                let avatar_hue = entry
                    .avatar_hue
                    .unwrap_or(((index * 47) % 360) as u16);
                RankedEntry {
                    rank,
                    initials: initials(&player_name),
                    player_name,
                    avatar_hue,
                    score: entry.score,
                    played_at: entry.played_at,
                }
            })
            .collect()
    }

    /// Loads history from `path`.
    ///
    /// A missing file is a first run and yields an empty history, and so does
    /// valid JSON that is not a list. Individual entries are coerced rather
    /// than rejected. A file that cannot be read or is not JSON at all is an
    /// error.
    pub fn load_from_path(path: &Path) -> Result<Self, HistoryError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no score history yet");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let value: Value = serde_json::from_str(&raw)?;
        let history = Self::from_json_value(&value, unix_millis());
        debug!(path = %path.display(), entries = history.len(), "score history loaded");
        Ok(history)
    }

    fn from_json_value(value: &Value, now: u64) -> Self {
        let Value::Array(items) = value else {
            warn!("score history is not a list, starting empty");
            return Self::default();
        };

        let entries = items
            .iter()
            .take(HISTORY_LIMIT)
            .map(|item| HistoryEntry::from_json(item, now))
            .collect();

        Self {
            entries,
            limit: HISTORY_LIMIT,
        }
    }

    /// Saves history to `path`, creating parent directories when needed.
    pub fn save_to_path(&self, path: &Path) -> Result<(), HistoryError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), entries = self.len(), "score history saved");
        Ok(())
    }
}

/// Current Unix time in milliseconds, 0 if the clock is before the epoch.
#[must_use]
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

fn loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Returns the platform-correct history file path.
#[must_use]
pub fn history_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(HISTORY_FILE_NAME);
    base
}

/// Deterministic two-word display name derived from `seed`.
#[must_use]
pub fn generate_player_name(seed: u64) -> String {
    let first = NAME_PREFIXES[(seed % NAME_PREFIXES.len() as u64) as usize];
    let second = NAME_SUFFIXES[((seed / 7) % NAME_SUFFIXES.len() as u64) as usize];
    format!("{first} {second}")
}

/// Upper-cased first letters of the first two words (`P`/`L` when missing).
#[must_use]
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next()).unwrap_or('P');
    let second = words.next().and_then(|w| w.chars().next()).unwrap_or('L');
    format!("{first}{second}").to_uppercase()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use serde_json::json;

    use crate::error::HistoryError;

    use super::{generate_player_name, initials, HistoryEntry, ScoreHistory};

    #[test]
    fn record_keeps_most_recent_first_and_caps() {
        let mut history = ScoreHistory::with_limit(3);
        for score in 1..=5 {
            history.record(HistoryEntry::new(score, u64::from(score)));
        }

        let scores: Vec<u32> = history.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![5, 4, 3]);
        assert_eq!(history.best_score(), 5);
    }

    #[test]
    fn ranking_sorts_by_score_and_labels_unnamed_players() {
        let mut history = ScoreHistory::default();
        history.record(HistoryEntry {
            score: 4,
            played_at: 10,
            player_name: None,
            avatar_hue: None,
        });
        history.record(HistoryEntry::new(9, 20));
        history.record(HistoryEntry::new(4, 30));

        let ranked = history.ranked();
        let scores: Vec<u32> = ranked.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![9, 4, 4]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].played_at, 30);
        assert_eq!(ranked[2].player_name, "Player 3");
        assert_eq!(ranked[2].initials, "P3");
        assert_eq!(ranked[2].avatar_hue, 94);
    }

    #[test]
    fn player_names_follow_the_seed() {
        assert_eq!(generate_player_name(0), "Neo Rider");
        assert_eq!(generate_player_name(8), "Swift Fox");
        assert_eq!(generate_player_name(47), "Turbo Ace");
        assert_eq!(HistoryEntry::new(1, 725).avatar_hue, Some(5));
    }

    #[test]
    fn initials_default_missing_words() {
        assert_eq!(initials("storm drift"), "SD");
        assert_eq!(initials("Nova"), "NL");
        assert_eq!(initials(""), "PL");
    }

    #[test]
    fn history_persists_round_trip() {
        let path = unique_test_path("round_trip");
        let mut history = ScoreHistory::default();
        history.record(HistoryEntry::new(3, 1_700_000_000_000));
        history.record(HistoryEntry::new(7, 1_700_000_060_000));

        history.save_to_path(&path).expect("history save should succeed");
        let loaded = ScoreHistory::load_from_path(&path).expect("load should succeed");

        assert_eq!(loaded, history);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_history_file_is_empty() {
        let path = unique_test_path("missing");
        let loaded = ScoreHistory::load_from_path(&path).expect("missing file should load");
        assert!(loaded.is_empty());
    }

    #[test]
    fn malformed_history_file_returns_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(matches!(
            ScoreHistory::load_from_path(&path),
            Err(HistoryError::Parse(_))
        ));

        cleanup_test_path(&path);
    }

    #[test]
    fn loading_normalizes_and_truncates() {
        let path = unique_test_path("normalize");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        let mut raw = String::from(r#"[{"score":2,"playedAt":5,"playerName":"   "},"#);
        for i in 0..12 {
            raw.push_str(&format!(r#"{{"score":{i},"playedAt":{i},"playerName":" Ace "}},"#));
        }
        raw.push_str(r#"{"score":1,"playedAt":1}]"#);
        fs::write(&path, raw).expect("test file write should succeed");

        let loaded = ScoreHistory::load_from_path(&path).expect("load should succeed");

        assert_eq!(loaded.len(), 10);
        assert_eq!(loaded.entries()[0].player_name, None);
        assert_eq!(loaded.entries()[1].player_name.as_deref(), Some("Ace"));
        cleanup_test_path(&path);
    }

    #[test]
    fn loose_entries_are_coerced_instead_of_rejected() {
        let value = json!([
            {"score": "4", "playerName": " Kai "},
            {"score": "lots", "playedAt": 12, "avatarHue": 400},
            {"score": -3, "playedAt": 8, "avatarHue": -20},
            7
        ]);

        let history = ScoreHistory::from_json_value(&value, 99);
        let entries = history.entries();

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].score, 4);
        assert_eq!(entries[0].played_at, 99);
        assert_eq!(entries[0].player_name.as_deref(), Some("Kai"));
        assert_eq!(entries[1].score, 0);
        assert_eq!(entries[1].played_at, 12);
        assert_eq!(entries[1].avatar_hue, Some(40));
        assert_eq!(entries[2].score, 0);
        assert_eq!(entries[2].avatar_hue, Some(340));
        assert_eq!(entries[3].score, 0);
        assert_eq!(entries[3].player_name, None);
    }

    #[test]
    fn history_file_without_timestamps_still_loads() {
        let path = unique_test_path("loose");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, r#"[{"score":"4"},{"score":9,"playedAt":3}]"#)
            .expect("test file write should succeed");

        let loaded = ScoreHistory::load_from_path(&path).expect("loose file should load");

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.entries()[0].score, 4);
        assert!(loaded.entries()[0].played_at > 0);
        assert_eq!(loaded.best_score(), 9);
        cleanup_test_path(&path);
    }

    #[test]
    fn non_list_history_file_is_empty() {
        let path = unique_test_path("object");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, r#"{"score":3}"#).expect("test file write should succeed");

        let loaded = ScoreHistory::load_from_path(&path).expect("non-list file should load");

        assert!(loaded.is_empty());
        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-history-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
