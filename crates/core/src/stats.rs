//! Dashboard statistics.

use serde::{Deserialize, Serialize};

/// Job counts for a single scheduling period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStats {
    pub activations: u32,
    pub modifications: u32,
    pub assurances: u32,
    pub total_jobs: u32,
    pub assigned_jobs: u32,
    pub unassigned_jobs: u32,
}

impl PeriodStats {
    /// Whether the derived totals line up with the category counts.
    ///
    /// Well-formed backend data satisfies both identities, but the console
    /// renders whatever it receives; this is a diagnostic, not a gate.
    pub fn is_consistent(&self) -> bool {
        self.total_jobs == self.activations + self.modifications + self.assurances
            && self.total_jobs == self.assigned_jobs + self.unassigned_jobs
    }
}

/// Job counts per period, as served by the dashboard-stats endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub today: PeriodStats,
    pub tomorrow: PeriodStats,
    pub future: PeriodStats,
}

impl DashboardStats {
    pub fn is_consistent(&self) -> bool {
        self.today.is_consistent() && self.tomorrow.is_consistent() && self.future.is_consistent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistency_holds_for_balanced_counts() {
        let period = PeriodStats {
            activations: 16,
            modifications: 4,
            assurances: 6,
            total_jobs: 26,
            assigned_jobs: 6,
            unassigned_jobs: 20,
        };
        assert!(period.is_consistent());
    }

    #[test]
    fn consistency_flags_mismatched_totals() {
        // The seeded demo data itself carries off-by-one totals; the check
        // must report that without failing the caller.
        let period = PeriodStats {
            activations: 16,
            modifications: 4,
            assurances: 6,
            total_jobs: 28,
            assigned_jobs: 6,
            unassigned_jobs: 23,
        };
        assert!(!period.is_consistent());
    }
}
