use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::PickerError;

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// A single user-provided item after normalisation.
///
/// Always trimmed and never empty. Two entries with the same text are still
/// separate items: they occupy different slots in the list they came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Entry(String);

impl Entry {
    /// Trim `raw`; returns `None` when nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Entry(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Entry {
    type Error = PickerError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Entry::new(&raw).ok_or(PickerError::BlankEntry)
    }
}

impl From<Entry> for String {
    fn from(entry: Entry) -> Self {
        entry.0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Entry {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Entry {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

/// How a list is split into teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionMode {
    /// `value` is the number of teams; members are dealt round-robin.
    #[serde(rename = "byCount", alias = "byTeams")]
    ByCount,
    /// `value` is the team size; the last team takes the remainder.
    #[serde(rename = "bySize")]
    BySize,
}

impl fmt::Display for PartitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionMode::ByCount => write!(f, "by team count"),
            PartitionMode::BySize  => write!(f, "by team size"),
        }
    }
}

impl FromStr for PartitionMode {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" | "by-count" | "bycount" | "teams" | "byteams" => Ok(PartitionMode::ByCount),
            "size"  | "by-size"  | "bysize"                        => Ok(PartitionMode::BySize),
            _ => Err(PickerError::UnknownMode(s.to_string())),
        }
    }
}

/// What happens to a picked entry in a [`PickerSession`](crate::PickerSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickMode {
    /// Pick once and keep the entry in the list.
    #[default]
    Once,
    /// Pick and remove the drawn slot, for multi-round draws.
    Remove,
}

impl fmt::Display for PickMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickMode::Once   => write!(f, "Pick Once (keep in list)"),
            PickMode::Remove => write!(f, "Pick and Remove"),
        }
    }
}

// ---------------------------------------------------------------------------
// Pick request / result
// ---------------------------------------------------------------------------

/// Upper bound on draws a caller may ask for where the count is not capped by
/// the list length: picks with replacement and keep-mode session rounds.
pub const MAX_DRAWS: usize = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickRequest {
    pub entries: Vec<Entry>,
    /// Number of draws. Negative values are treated as zero.
    pub count: i64,
    pub with_replacement: bool,
    pub rng_seed: Option<u64>,
}

impl PickRequest {
    /// One draw, without replacement, from OS entropy.
    pub fn new(entries: Vec<Entry>) -> Self {
        PickRequest {
            entries,
            count: 1,
            with_replacement: false,
            rng_seed: None,
        }
    }

    /// Reject counts that cannot be drawn in memory.
    ///
    /// Without replacement any count is fine since draws stop at the list
    /// length. With replacement the count must stay within [`MAX_DRAWS`].
    pub fn validate(&self) -> Result<(), PickerError> {
        if self.with_replacement && self.count > MAX_DRAWS as i64 {
            return Err(PickerError::TooManyDraws { requested: self.count, max: MAX_DRAWS });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickResult {
    pub draw_id: String,
    pub picks: Vec<Entry>,
    /// Draw count after clamping; may exceed `picks.len()` without replacement.
    pub requested: usize,
    pub pool_size: usize,
    pub with_replacement: bool,
}

impl PickResult {
    /// First pick, the "winner" in a single draw.
    pub fn winner(&self) -> Option<&Entry> {
        self.picks.first()
    }
}

impl fmt::Display for PickResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pick) in self.picks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{pick}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Team request / result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRequest {
    pub entries: Vec<Entry>,
    pub mode: PartitionMode,
    /// Team count or team size depending on `mode`. Values below 1 yield no teams.
    pub value: i64,
    pub rng_seed: Option<u64>,
}

impl TeamRequest {
    pub fn new(entries: Vec<Entry>, mode: PartitionMode, value: i64) -> Self {
        TeamRequest { entries, mode, value, rng_seed: None }
    }

    /// Reject more teams than there are entries to fill them.
    ///
    /// Team sizes are unbounded; a size above the list length is one team.
    pub fn validate(&self) -> Result<(), PickerError> {
        if self.mode == PartitionMode::ByCount && self.value > self.entries.len() as i64 {
            return Err(PickerError::TooManyTeams {
                requested: self.value,
                entries: self.entries.len(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// 1-based, for display.
    pub number: usize,
    pub members: Vec<Entry>,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.members.iter().map(Entry::as_str).collect();
        write!(f, "Team {}: {}", self.number, names.join(", "))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSet {
    pub draw_id: String,
    pub mode: PartitionMode,
    pub value: usize,
    pub teams: Vec<Team>,
}

impl TeamSet {
    /// Total members across all teams; equals the input length whenever `value >= 1`.
    pub fn member_count(&self) -> usize {
        self.teams.iter().map(|t| t.members.len()).sum()
    }
}

impl fmt::Display for TeamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, team) in self.teams.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{team}")?;
        }
        Ok(())
    }
}
