use super::Reducer;
use crate::types::AdminProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminAuthState {
    pub admin: Option<AdminProfile>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminAuthAction {
    SetLoading(bool),
    SetAdmin(Option<AdminProfile>),
    SetError(Option<String>),
    Logout,
}

impl Reducer for AdminAuthState {
    type Action = AdminAuthAction;

    fn reduce(&mut self, action: AdminAuthAction) {
        match action {
            AdminAuthAction::SetLoading(loading) => self.loading = loading,
            AdminAuthAction::SetAdmin(admin) => {
                self.is_authenticated = admin.is_some();
                self.admin = admin;
            }
            AdminAuthAction::SetError(error) => self.error = error,
            AdminAuthAction::Logout => {
                self.admin = None;
                self.is_authenticated = false;
                self.error = None;
            }
        }
    }
}

impl AdminAuthState {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.admin
            .as_ref()
            .is_some_and(|a| a.permissions.iter().any(|p| p == permission || p == "*"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_admin_and_permissions() {
        let mut state = AdminAuthState::default();
        assert!(!state.has_permission("plans"));

        state.reduce(AdminAuthAction::SetAdmin(Some(AdminProfile {
            id: "a-1".to_string(),
            email: "admin@seomaster.pro".to_string(),
            name: "Admin".to_string(),
            permissions: vec!["plans".to_string(), "payments".to_string()],
        })));

        assert!(state.is_authenticated);
        assert!(state.has_permission("plans"));
        assert!(!state.has_permission("users"));

        state.reduce(AdminAuthAction::Logout);
        assert!(!state.is_authenticated);
        assert!(!state.has_permission("plans"));
    }
}
