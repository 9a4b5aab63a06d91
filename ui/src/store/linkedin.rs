use super::Reducer;
use crate::types::{LinkedInProfile, ProfileAnalysis};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedInState {
    pub profile: Option<LinkedInProfile>,
    pub analysis: Option<ProfileAnalysis>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LinkedInAction {
    SetLoading(bool),
    SetProfile(Option<LinkedInProfile>),
    SetAnalysis(Option<ProfileAnalysis>),
    SetError(Option<String>),
    /// Drops the profile together with its analysis.
    ClearProfile,
}

impl Reducer for LinkedInState {
    type Action = LinkedInAction;

    fn reduce(&mut self, action: LinkedInAction) {
        match action {
            LinkedInAction::SetLoading(loading) => self.loading = loading,
            LinkedInAction::SetProfile(profile) => self.profile = profile,
            LinkedInAction::SetAnalysis(analysis) => self.analysis = analysis,
            LinkedInAction::SetError(error) => self.error = error,
            LinkedInAction::ClearProfile => {
                self.profile = None;
                self.analysis = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_profile_drops_analysis() {
        let mut state = LinkedInState::default();
        state.reduce(LinkedInAction::SetProfile(Some(LinkedInProfile {
            id: "li-1".to_string(),
            name: "Jane Doe".to_string(),
            headline: "Software Engineer".to_string(),
            summary: String::new(),
            experience: vec![],
            skills: vec!["Rust".to_string()],
        })));
        state.reduce(LinkedInAction::SetAnalysis(Some(ProfileAnalysis {
            score: 78,
            suggestions: vec![],
            strengths: vec![],
            weaknesses: vec![],
        })));
        state.reduce(LinkedInAction::SetError(Some("stale".to_string())));

        state.reduce(LinkedInAction::ClearProfile);

        assert_eq!(state.profile, None);
        assert_eq!(state.analysis, None);
        assert_eq!(state.error.as_deref(), Some("stale"));
    }
}
