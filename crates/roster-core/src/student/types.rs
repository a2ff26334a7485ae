//! Student variant definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bonus added to an honors student's average unless configured otherwise
pub const DEFAULT_HONORS_BONUS: f64 = 5.0;

/// Upper bound for a bonus-adjusted average
pub const MAX_AVERAGE: f64 = 100.0;

/// Which averaging policy a student uses
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StudentKind {
    /// Plain arithmetic mean
    #[default]
    Regular,
    /// Mean plus a bonus, clamped to [`MAX_AVERAGE`]
    Honors { bonus_points: f64 },
}

impl StudentKind {
    /// Honors variant with the default bonus
    pub fn honors() -> Self {
        StudentKind::Honors {
            bonus_points: DEFAULT_HONORS_BONUS,
        }
    }

    pub fn is_honors(&self) -> bool {
        matches!(self, StudentKind::Honors { .. })
    }
}

impl fmt::Display for StudentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentKind::Regular => write!(f, "regular"),
            StudentKind::Honors { .. } => write!(f, "honors"),
        }
    }
}
