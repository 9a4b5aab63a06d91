use super::Reducer;
use crate::types::SeoAnalysis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoState {
    pub analysis: Option<SeoAnalysis>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeoAction {
    SetLoading(bool),
    SetAnalysis(Option<SeoAnalysis>),
    SetError(Option<String>),
    ClearAnalysis,
}

impl Reducer for SeoState {
    type Action = SeoAction;

    fn reduce(&mut self, action: SeoAction) {
        match action {
            SeoAction::SetLoading(loading) => self.loading = loading,
            SeoAction::SetAnalysis(analysis) => self.analysis = analysis,
            SeoAction::SetError(error) => self.error = error,
            SeoAction::ClearAnalysis => self.analysis = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_analysis() {
        let mut state = SeoState::default();
        state.reduce(SeoAction::SetAnalysis(Some(SeoAnalysis {
            url: "https://example.com".to_string(),
            score: 64,
            issues: vec![],
            keywords: vec![],
            competitors: vec![],
        })));
        assert!(state.analysis.is_some());

        state.reduce(SeoAction::ClearAnalysis);
        assert_eq!(state.analysis, None);
    }
}
