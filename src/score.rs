//! Score submission payload
//!
//! Scores leave the game as a URL suffix. Each field is hex-encoded and
//! terminated by `00`, then a two-digit XOR parity over the encoded text is
//! appended. This only cloaks the values; it is not tamper-proof.

use serde::{Deserialize, Serialize};

/// Minimum number of non-whitespace characters in a player name
pub const MIN_NAME_CHARS: usize = 3;

/// Field terminator in the encoded payload
const FIELD_END: &str = "00";

/// One finished run, ready to submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub score: u64,
    /// Level title
    pub level: String,
    /// Player name
    pub name: String,
}

impl ScoreSubmission {
    pub fn new(score: u64, level: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            score,
            level: level.into(),
            name: name.into(),
        }
    }

    /// Encoded payload
    pub fn encode(&self) -> String {
        encode_submission(self.score, &self.level, &self.name)
    }

    /// Payload appended to a base URL
    pub fn url(&self, base: &str) -> String {
        submission_url(base, self.score, &self.level, &self.name)
    }
}

fn push_field(out: &mut String, field: &str) {
    for byte in field.bytes() {
        out.push_str(&format!("{byte:02x}"));
    }
    out.push_str(FIELD_END);
}

/// Hex-encode score, level and name, then append the parity byte
pub fn encode_submission(score: u64, level: &str, name: &str) -> String {
    let mut payload = String::new();
    push_field(&mut payload, &score.to_string());
    push_field(&mut payload, level);
    push_field(&mut payload, name);

    let parity = payload.bytes().fold(0u8, |acc, b| acc ^ b);
    payload.push_str(&format!("{parity:02x}"));
    payload
}

pub fn submission_url(base: &str, score: u64, level: &str, name: &str) -> String {
    format!("{base}{}", encode_submission(score, level, name))
}

/// A name needs at least three visible characters
pub fn name_is_valid(name: &str) -> bool {
    name.chars().filter(|c| !c.is_whitespace()).count() >= MIN_NAME_CHARS
}
