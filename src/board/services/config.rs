//! Board behaviour configuration.

use crate::board::domain::CapacityStatus;

/// Tunables for a [`BoardStore`](super::BoardStore).
///
/// # Examples
///
/// ```
/// use taskboard::board::services::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.near_capacity_percent, 80);
/// assert!(!config.reconcile_status_on_update);
///
/// let reconciling = BoardConfig::reconciling();
/// assert!(reconciling.reconcile_status_on_update);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Percentage of a column's `max_tasks` at which it reports
    /// [`CapacityStatus::Near`].
    pub near_capacity_percent: u8,
    /// When `true`, a status change passed to `update_task` moves the task to
    /// the end of the named column in the same transition. When `false` the
    /// status field is written as-is and column membership is left alone.
    pub reconcile_status_on_update: bool,
}

impl BoardConfig {
    /// Configuration that keeps column membership in step with status edits.
    #[must_use]
    pub const fn reconciling() -> Self {
        Self {
            near_capacity_percent: CapacityStatus::DEFAULT_NEAR_PERCENT,
            reconcile_status_on_update: true,
        }
    }

    /// Overrides the near-capacity threshold.
    #[must_use]
    pub const fn with_near_capacity_percent(mut self, percent: u8) -> Self {
        self.near_capacity_percent = percent;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            near_capacity_percent: CapacityStatus::DEFAULT_NEAR_PERCENT,
            reconcile_status_on_update: false,
        }
    }
}
