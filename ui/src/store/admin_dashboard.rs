use super::Reducer;
use crate::types::{AdminDashboardStats, UserMetric};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboardState {
    pub stats: AdminDashboardStats,
    pub user_metrics: Vec<UserMetric>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminDashboardAction {
    SetLoading(bool),
    SetStats(AdminDashboardStats),
    SetUserMetrics(Vec<UserMetric>),
    SetError(Option<String>),
}

impl Reducer for AdminDashboardState {
    type Action = AdminDashboardAction;

    fn reduce(&mut self, action: AdminDashboardAction) {
        match action {
            AdminDashboardAction::SetLoading(loading) => self.loading = loading,
            AdminDashboardAction::SetStats(stats) => self.stats = stats,
            AdminDashboardAction::SetUserMetrics(metrics) => self.user_metrics = metrics,
            AdminDashboardAction::SetError(error) => self.error = error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_health_starts_full() {
        let state = AdminDashboardState::default();
        assert_eq!(state.stats.system_health, 100);
        assert!(state.user_metrics.is_empty());
    }
}
