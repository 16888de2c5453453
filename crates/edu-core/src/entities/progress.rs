use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Credits a student moves through per semester when projecting the remainder.
const PENDING_PER_SEMESTER: u32 = 5;

/// Academic progress summary from `/progreso`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Progress {
    #[serde(rename = "creditos_completados")]
    pub completed_credits: u32,
    #[serde(rename = "creditos_totales")]
    pub total_credits: u32,
    #[serde(rename = "promedio")]
    pub average: f64,
    #[serde(rename = "pendientes")]
    pub pending: u32,
}

impl Progress {
    /// Completed share of the programme, rounded to a whole percent.
    #[must_use]
    pub fn percent_complete(&self) -> u32 {
        if self.total_credits == 0 {
            return 0;
        }
        let completed = u64::from(self.completed_credits);
        let total = u64::from(self.total_credits);
        let rounded = ((completed * 100 + total / 2) / total).min(100);
        u32::try_from(rounded).unwrap_or(100)
    }

    /// Projected semesters left at the current pace.
    #[must_use]
    pub const fn semesters_remaining(&self) -> u32 {
        self.pending.div_ceil(PENDING_PER_SEMESTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(completed: u32, total: u32, pending: u32) -> Progress {
        Progress {
            completed_credits: completed,
            total_credits: total,
            average: 4.2,
            pending,
        }
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(progress(48, 160, 28).percent_complete(), 30);
        assert_eq!(progress(24, 36, 4).percent_complete(), 67);
    }

    #[test]
    fn percent_handles_huge_credit_counts() {
        assert_eq!(progress(u32::MAX, u32::MAX, 0).percent_complete(), 100);
        assert_eq!(progress(50_000_000, 100_000_000, 0).percent_complete(), 50);
    }

    #[test]
    fn percent_is_zero_without_total() {
        assert_eq!(progress(10, 0, 0).percent_complete(), 0);
    }

    #[test]
    fn semesters_remaining_rounds_up() {
        assert_eq!(progress(48, 160, 28).semesters_remaining(), 6);
        assert_eq!(progress(0, 0, 5).semesters_remaining(), 1);
        assert_eq!(progress(0, 0, 0).semesters_remaining(), 0);
    }
}
