use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three fixed per-user tasks.
///
/// The index domain is closed; anything outside 1..=3 is rejected at the
/// text boundary and is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskIndex {
    First,
    Second,
    Third,
}

impl TaskIndex {
    pub const ALL: [TaskIndex; 3] = [Self::First, Self::Second, Self::Third];

    /// Parse a task index from its textual form ("1", "2" or "3").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Self::First),
            "2" => Some(Self::Second),
            "3" => Some(Self::Third),
            _ => None,
        }
    }

    /// The numeric form used in replies and the wire format.
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

impl fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Completion state of one user's three tasks.
///
/// Serializes to the on-disk shape `{"1": bool, "2": bool, "3": bool}`;
/// a record always carries exactly three flags. The default record is
/// all-false (every task pending).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "1", default)]
    first: bool,
    #[serde(rename = "2", default)]
    second: bool,
    #[serde(rename = "3", default)]
    third: bool,
}

impl TaskRecord {
    pub fn get(&self, index: TaskIndex) -> bool {
        match index {
            TaskIndex::First => self.first,
            TaskIndex::Second => self.second,
            TaskIndex::Third => self.third,
        }
    }

    pub fn set(&mut self, index: TaskIndex, completed: bool) {
        match index {
            TaskIndex::First => self.first = completed,
            TaskIndex::Second => self.second = completed,
            TaskIndex::Third => self.third = completed,
        }
    }

    /// Whether every task is marked completed.
    pub fn all_completed(&self) -> bool {
        self.first && self.second && self.third
    }
}
