//! One finished session, as written to the result log.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Format of the `"Date"` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Summary of a completed session. Field names on disk match the log
/// written by earlier versions of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Local time the session finished, to the second.
    #[serde(rename = "Date", with = "date_format")]
    pub timestamp: NaiveDateTime,
    /// Player name.
    #[serde(rename = "Player")]
    pub player_name: String,
    /// Number of scored rounds played.
    #[serde(rename = "Number of rounds")]
    pub round_count: u32,
    /// Final signed score.
    #[serde(rename = "Total score")]
    pub final_score: i64,
}

impl SessionSummary {
    /// Summarise a session finishing now.
    pub fn new(player_name: &str, round_count: u32, final_score: i64) -> Self {
        let now = Local::now().naive_local();
        Self::at(
            now.with_nanosecond(0).unwrap_or(now),
            player_name,
            round_count,
            final_score,
        )
    }

    /// Summarise a session that finished at `timestamp`.
    pub fn at(
        timestamp: NaiveDateTime,
        player_name: &str,
        round_count: u32,
        final_score: i64,
    ) -> Self {
        Self {
            timestamp,
            player_name: player_name.to_string(),
            round_count,
            final_score,
        }
    }

    /// The timestamp as it appears in the log.
    pub fn date_string(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }
}

mod date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
