// gap classification states
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::Level;

/// Per-skill verdict of acquired vs required.
///
/// | status         | condition                 |
/// |----------------|---------------------------|
/// | `NotRequired`  | `required == 0`           |
/// | `Deficit`      | `required > 0 && gap < 0` |
/// | `Met`          | `required > 0 && gap == 0`|
/// | `Excess`       | `required > 0 && gap > 0` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapStatus {
    NotRequired,
    Deficit,
    Met,
    Excess,
}

impl GapStatus {
    /// Total over `required >= 0`. A negative requirement falls through to the
    /// gap comparison like any other non-zero value.
    pub fn classify(required: Level, gap: Level) -> Self {
        if required == 0 {
            GapStatus::NotRequired
        } else if gap < 0 {
            GapStatus::Deficit
        } else if gap == 0 {
            GapStatus::Met
        } else {
            GapStatus::Excess
        }
    }

    pub fn is_shortfall(&self) -> bool {
        matches!(self, GapStatus::Deficit)
    }

    //met or exceeded a real requirement
    pub fn is_satisfied(&self) -> bool {
        matches!(self, GapStatus::Met | GapStatus::Excess)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GapStatus::NotRequired => "not-required",
            GapStatus::Deficit => "deficit",
            GapStatus::Met => "met",
            GapStatus::Excess => "excess",
        }
    }
}

impl fmt::Display for GapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display names for the conventional 1..=3 levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillRank {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
}

impl SkillRank {
    pub const ALL: [SkillRank; 3] = [SkillRank::Beginner, SkillRank::Intermediate, SkillRank::Advanced];

    pub fn from_level(level: Level) -> Option<Self> {
        match level {
            1 => Some(SkillRank::Beginner),
            2 => Some(SkillRank::Intermediate),
            3 => Some(SkillRank::Advanced),
            _ => None,
        }
    }

    pub fn level(self) -> Level {
        self as Level
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillRank::Beginner => "Beginner",
            SkillRank::Intermediate => "Intermediate",
            SkillRank::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for SkillRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
