use super::Reducer;
use crate::types::{ActivityEntry, UserDashboardStats};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDashboardState {
    pub stats: UserDashboardStats,
    pub recent_activity: Vec<ActivityEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserDashboardAction {
    SetLoading(bool),
    SetStats(UserDashboardStats),
    SetRecentActivity(Vec<ActivityEntry>),
    SetError(Option<String>),
}

impl Reducer for UserDashboardState {
    type Action = UserDashboardAction;

    fn reduce(&mut self, action: UserDashboardAction) {
        match action {
            UserDashboardAction::SetLoading(loading) => self.loading = loading,
            UserDashboardAction::SetStats(stats) => self.stats = stats,
            UserDashboardAction::SetRecentActivity(activity) => self.recent_activity = activity,
            UserDashboardAction::SetError(error) => self.error = error,
        }
    }
}
