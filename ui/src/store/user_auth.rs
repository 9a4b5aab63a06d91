use super::Reducer;
use crate::types::UserProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAuthState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    /// Email handed from sign-up to the OTP page.
    pub pending_email: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserAuthAction {
    SetLoading(bool),
    SetUser(Option<UserProfile>),
    SetPendingEmail(Option<String>),
    SetError(Option<String>),
    Logout,
}

impl Reducer for UserAuthState {
    type Action = UserAuthAction;

    fn reduce(&mut self, action: UserAuthAction) {
        match action {
            UserAuthAction::SetLoading(loading) => self.loading = loading,
            UserAuthAction::SetUser(user) => {
                self.is_authenticated = user.is_some();
                self.user = user;
            }
            UserAuthAction::SetPendingEmail(email) => self.pending_email = email,
            UserAuthAction::SetError(error) => self.error = error,
            UserAuthAction::Logout => {
                self.user = None;
                self.is_authenticated = false;
                self.error = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            email: "jane@example.com".to_string(),
            name: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn test_set_user_tracks_authentication() {
        let mut state = UserAuthState::default();

        state.reduce(UserAuthAction::SetUser(Some(jane())));
        assert!(state.is_authenticated);

        state.reduce(UserAuthAction::SetUser(None));
        assert!(!state.is_authenticated);
        assert_eq!(state.user, None);
    }

    #[test]
    fn test_logout_keeps_loading_flag() {
        let mut state = UserAuthState::default();
        state.reduce(UserAuthAction::SetUser(Some(jane())));
        state.reduce(UserAuthAction::SetError(Some("Invalid code".to_string())));
        state.reduce(UserAuthAction::SetLoading(true));

        state.reduce(UserAuthAction::Logout);

        assert_eq!(state.user, None);
        assert!(!state.is_authenticated);
        assert_eq!(state.error, None);
        assert!(state.loading);
    }
}
