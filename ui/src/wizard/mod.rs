// LinkedIn optimizer step controller
//
// Connect -> Target Info -> Analysis -> Results -> Modules. Every state
// carries only the data produced by the steps before it, so a later step
// can never be reached without its inputs.
use crate::catalog::ExtraModule;
use std::collections::BTreeSet;
use thiserror::Error;

pub mod report;

pub use report::{
    AnalysisReport, AnalysisRequest, CompetitorProfiles, ExperienceLevel, GapAnalysis, KeywordMap,
    OptimizedContent, ProfileSnapshot, ScoreBreakdown, SeoScore, TargetInfo, TargetInfoDraft,
};

pub const STEP_LABELS: [&str; 5] = ["Connect", "Target Info", "Analysis", "Results", "Modules"];

pub const EXIT_ROUTE: &str = "/user/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionMethod {
    LinkedIn,
    Manual,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionChoice {
    LinkedIn(ProfileSnapshot),
    Manual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub method: ConnectionMethod,
    pub snapshot: Option<ProfileSnapshot>,
}

/// Identifies one analysis run. Outcomes carrying an older ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Success(AnalysisReport),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisProgress {
    Running(AnalysisTicket),
    Complete(Box<AnalysisReport>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    Connect,
    TargetInfo {
        connection: Connection,
        draft: TargetInfoDraft,
    },
    Analysis {
        connection: Connection,
        target: TargetInfo,
        manual_profile: Option<ProfileSnapshot>,
        progress: AnalysisProgress,
    },
    Results {
        connection: Connection,
        target: TargetInfo,
        manual_profile: Option<ProfileSnapshot>,
        report: Box<AnalysisReport>,
    },
    Modules {
        connection: Connection,
        target: TargetInfo,
        manual_profile: Option<ProfileSnapshot>,
        report: Box<AnalysisReport>,
        activated: BTreeSet<ExtraModule>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("target role, location, industry and experience level are required")]
    IncompleteTargetInfo,
    #[error("action is not available at step {0}")]
    WrongStep(u8),
    #[error("analysis is still running")]
    Busy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkedInWizard {
    state: WizardState,
    next_ticket: u64,
    // Target info typed before stepping back to Connect
    kept_draft: Option<TargetInfoDraft>,
}

impl Default for LinkedInWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedInWizard {
    pub fn new() -> Self {
        Self {
            state: WizardState::Connect,
            next_ticket: 1,
            kept_draft: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> u8 {
        match self.state {
            WizardState::Connect => 1,
            WizardState::TargetInfo { .. } => 2,
            WizardState::Analysis { .. } => 3,
            WizardState::Results { .. } => 4,
            WizardState::Modules { .. } => 5,
        }
    }

    pub fn step_label(&self) -> &'static str {
        STEP_LABELS[usize::from(self.step() - 1)]
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.state,
            WizardState::Analysis {
                progress: AnalysisProgress::Running(_),
                ..
            }
        )
    }

    pub fn connection(&self) -> Option<&Connection> {
        match &self.state {
            WizardState::Connect => None,
            WizardState::TargetInfo { connection, .. }
            | WizardState::Analysis { connection, .. }
            | WizardState::Results { connection, .. }
            | WizardState::Modules { connection, .. } => Some(connection),
        }
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.state {
            WizardState::Analysis {
                progress: AnalysisProgress::Complete(report),
                ..
            }
            | WizardState::Results { report, .. }
            | WizardState::Modules { report, .. } => Some(&**report),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&TargetInfoDraft> {
        match &self.state {
            WizardState::TargetInfo { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn activated_modules(&self) -> Option<&BTreeSet<ExtraModule>> {
        match &self.state {
            WizardState::Modules { activated, .. } => Some(activated),
            _ => None,
        }
    }

    /// Moves forward when the next step's data already exists.
    pub fn advance(&mut self) -> bool {
        let next = match std::mem::replace(&mut self.state, WizardState::Connect) {
            WizardState::Analysis {
                connection,
                target,
                manual_profile,
                progress: AnalysisProgress::Complete(report),
            } => Ok(WizardState::Results {
                connection,
                target,
                manual_profile,
                report,
            }),
            WizardState::Results {
                connection,
                target,
                manual_profile,
                report,
            } => Ok(WizardState::Modules {
                connection,
                target,
                manual_profile,
                report,
                activated: BTreeSet::new(),
            }),
            unchanged => Err(unchanged),
        };
        self.settle(next, "advance")
    }

    /// Moves back one step. Refused while the analysis is running.
    pub fn retreat(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }

        let previous = match std::mem::replace(&mut self.state, WizardState::Connect) {
            WizardState::Connect => Err(WizardState::Connect),
            WizardState::TargetInfo { draft, .. } => {
                self.kept_draft = Some(draft);
                Ok(WizardState::Connect)
            }
            WizardState::Analysis {
                connection,
                target,
                manual_profile,
                ..
            } => Ok(WizardState::TargetInfo {
                draft: TargetInfoDraft::from_target(&target, manual_profile.as_ref()),
                connection,
            }),
            WizardState::Results {
                connection,
                target,
                manual_profile,
                report,
            } => Ok(WizardState::Analysis {
                connection,
                target,
                manual_profile,
                progress: AnalysisProgress::Complete(report),
            }),
            WizardState::Modules {
                connection,
                target,
                manual_profile,
                report,
                ..
            } => Ok(WizardState::Results {
                connection,
                target,
                manual_profile,
                report,
            }),
        };
        self.settle(previous, "retreat")
    }

    fn settle(&mut self, result: Result<WizardState, WizardState>, op: &str) -> bool {
        match result {
            Ok(state) => {
                self.state = state;
                log::debug!("wizard {} -> step {} ({})", op, self.step(), self.step_label());
                true
            }
            Err(state) => {
                self.state = state;
                false
            }
        }
    }

    pub fn choose_connection_method(&mut self, choice: ConnectionChoice) -> Result<(), WizardError> {
        if !matches!(self.state, WizardState::Connect) {
            return Err(WizardError::WrongStep(self.step()));
        }

        let connection = match choice {
            ConnectionChoice::LinkedIn(snapshot) => Connection {
                method: ConnectionMethod::LinkedIn,
                snapshot: Some(snapshot),
            },
            ConnectionChoice::Manual => Connection {
                method: ConnectionMethod::Manual,
                snapshot: None,
            },
        };
        log::debug!("wizard connected via {:?}", connection.method);

        self.state = WizardState::TargetInfo {
            connection,
            draft: self.kept_draft.take().unwrap_or_default(),
        };
        Ok(())
    }

    /// Records what the user has typed on the target info step so far.
    pub fn update_draft(&mut self, typed: TargetInfoDraft) {
        if let WizardState::TargetInfo { draft, .. } = &mut self.state {
            *draft = typed;
        }
    }

    /// Starts the analysis. The caller runs the returned request and reports
    /// back through [`finish_analysis`](Self::finish_analysis).
    pub fn submit_target_info(
        &mut self,
        draft: TargetInfoDraft,
    ) -> Result<(AnalysisRequest, AnalysisTicket), WizardError> {
        if self.is_busy() {
            return Err(WizardError::Busy);
        }
        let WizardState::TargetInfo { connection, .. } = &self.state else {
            return Err(WizardError::WrongStep(self.step()));
        };
        let target = draft.to_target().ok_or(WizardError::IncompleteTargetInfo)?;

        let connection = connection.clone();
        let manual_profile = match connection.method {
            ConnectionMethod::Manual => draft.manual_snapshot(),
            ConnectionMethod::LinkedIn => None,
        };
        let request = AnalysisRequest {
            current_profile: connection.snapshot.clone().or_else(|| manual_profile.clone()),
            target: target.clone(),
        };
        let ticket = self.issue_ticket();

        self.state = WizardState::Analysis {
            connection,
            target,
            manual_profile,
            progress: AnalysisProgress::Running(ticket),
        };
        log::debug!("wizard analysis started (ticket {})", ticket.0);

        Ok((request, ticket))
    }

    /// Applies an analysis outcome. Returns false when it was ignored.
    pub fn finish_analysis(&mut self, ticket: AnalysisTicket, outcome: AnalysisOutcome) -> bool {
        let current = match &self.state {
            WizardState::Analysis {
                progress: AnalysisProgress::Running(current),
                ..
            } => *current,
            _ => return false,
        };
        if current != ticket {
            log::debug!("wizard dropped stale analysis ticket {}", ticket.0);
            return false;
        }

        let WizardState::Analysis {
            connection,
            target,
            manual_profile,
            ..
        } = std::mem::replace(&mut self.state, WizardState::Connect)
        else {
            return false;
        };

        self.state = match outcome {
            AnalysisOutcome::Success(report) => {
                log::debug!("wizard analysis complete, score {}", report.seo_score.total);
                WizardState::Results {
                    connection,
                    target,
                    manual_profile,
                    report: Box::new(report),
                }
            }
            AnalysisOutcome::Failure(reason) => {
                log::warn!("wizard analysis failed: {}", reason);
                WizardState::Analysis {
                    connection,
                    target,
                    manual_profile,
                    progress: AnalysisProgress::Failed(reason),
                }
            }
        };
        true
    }

    pub fn retry_analysis(&mut self) -> Result<(AnalysisRequest, AnalysisTicket), WizardError> {
        let (request, ticket) = match &self.state {
            WizardState::Analysis {
                connection,
                target,
                manual_profile,
                progress: AnalysisProgress::Failed(_),
            } => (
                AnalysisRequest {
                    current_profile: connection.snapshot.clone().or_else(|| manual_profile.clone()),
                    target: target.clone(),
                },
                AnalysisTicket(self.next_ticket),
            ),
            WizardState::Analysis {
                progress: AnalysisProgress::Running(_),
                ..
            } => return Err(WizardError::Busy),
            _ => return Err(WizardError::WrongStep(self.step())),
        };

        self.next_ticket += 1;
        if let WizardState::Analysis { progress, .. } = &mut self.state {
            *progress = AnalysisProgress::Running(ticket);
        }
        log::debug!("wizard analysis retried (ticket {})", ticket.0);
        Ok((request, ticket))
    }

    pub fn activate_module(&mut self, module: ExtraModule) -> Result<bool, WizardError> {
        match &mut self.state {
            WizardState::Modules { activated, .. } => Ok(activated.insert(module)),
            _ => Err(WizardError::WrongStep(self.step())),
        }
    }

    pub fn activate_all_modules(&mut self) -> Result<(), WizardError> {
        match &mut self.state {
            WizardState::Modules { activated, .. } => {
                activated.extend(ExtraModule::ALL);
                Ok(())
            }
            _ => Err(WizardError::WrongStep(self.step())),
        }
    }

    /// Leaves the wizard from the last step. Returns the exit route and
    /// resets so nothing carries over to the next visit.
    /// Where "Finish" leads, once the last step is reached.
    pub fn exit_route(&self) -> Option<&'static str> {
        matches!(self.state, WizardState::Modules { .. }).then_some(EXIT_ROUTE)
    }

    pub fn complete(&mut self) -> Option<&'static str> {
        self.exit_route()?;
        *self = Self::new();
        log::debug!("wizard completed");
        Some(EXIT_ROUTE)
    }

    fn issue_ticket(&mut self) -> AnalysisTicket {
        let ticket = AnalysisTicket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }
}

#[cfg(test)]
mod tests {
    use super::report::*;
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot() -> ProfileSnapshot {
        ProfileSnapshot {
            headline: "Software Engineer | Full Stack Developer".to_string(),
            about: "Passionate about building scalable web applications...".to_string(),
            experience: "5 years in web development".to_string(),
            skills: vec!["React".to_string(), "Node.js".to_string()],
        }
    }

    fn draft() -> TargetInfoDraft {
        TargetInfoDraft {
            target_role: "Senior Software Engineer".to_string(),
            location: "Remote".to_string(),
            industry: "Technology".to_string(),
            experience_level: Some(ExperienceLevel::Senior),
            ..TargetInfoDraft::default()
        }
    }

    fn report() -> AnalysisReport {
        AnalysisReport {
            competitor_profiles: CompetitorProfiles {
                count: 30,
                top_headlines: vec![],
                top_skills: vec![],
                common_keywords: vec![],
            },
            keyword_map: KeywordMap {
                industry_keywords: vec!["SaaS".to_string()],
                role_keywords: vec![],
                location_keywords: vec![],
                skill_keywords: vec![],
            },
            gap_analysis: GapAnalysis {
                missing_keywords: vec!["Kubernetes".to_string()],
                keyword_usage_comparison: String::new(),
                profile_completeness: 72,
            },
            optimized_content: OptimizedContent {
                headline: "Senior Software Engineer".to_string(),
                about: String::new(),
                experience_bullets: vec![],
                suggested_skills: vec![],
            },
            seo_score: SeoScore {
                total: 78,
                breakdown: ScoreBreakdown {
                    keywords: 72,
                    structure: 85,
                    completeness: 80,
                    gaps: 75,
                },
            },
        }
    }

    fn at_results() -> LinkedInWizard {
        let mut wizard = LinkedInWizard::new();
        wizard
            .choose_connection_method(ConnectionChoice::LinkedIn(snapshot()))
            .unwrap();
        let (_, ticket) = wizard.submit_target_info(draft()).unwrap();
        assert!(wizard.finish_analysis(ticket, AnalysisOutcome::Success(report())));
        wizard
    }

    #[test]
    fn test_bounds_are_no_ops() {
        let mut wizard = LinkedInWizard::new();
        assert!(!wizard.retreat());
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), 1);

        let mut wizard = at_results();
        assert!(wizard.advance());
        assert_eq!(wizard.step(), 5);
        let before = wizard.clone();
        assert!(!wizard.advance());
        assert_eq!(wizard, before);
    }

    #[test]
    fn test_linkedin_connect_fills_snapshot() {
        let mut wizard = LinkedInWizard::new();
        wizard
            .choose_connection_method(ConnectionChoice::LinkedIn(snapshot()))
            .unwrap();

        assert_eq!(wizard.step(), 2);
        let connection = wizard.connection().unwrap();
        assert_eq!(connection.method, ConnectionMethod::LinkedIn);
        assert_eq!(connection.snapshot.as_ref().unwrap().headline, snapshot().headline);

        assert_eq!(
            wizard.choose_connection_method(ConnectionChoice::Manual),
            Err(WizardError::WrongStep(2))
        );
    }

    #[test]
    fn test_target_info_is_data_gated() {
        let mut wizard = LinkedInWizard::new();
        wizard.choose_connection_method(ConnectionChoice::Manual).unwrap();
        assert!(!wizard.advance());

        let incomplete = TargetInfoDraft {
            industry: String::new(),
            ..draft()
        };
        assert_eq!(
            wizard.submit_target_info(incomplete),
            Err(WizardError::IncompleteTargetInfo)
        );
        assert_eq!(wizard.step(), 2);
        assert!(!wizard.is_busy());
    }

    #[test]
    fn test_analysis_runs_then_lands_on_results() {
        let mut wizard = LinkedInWizard::new();
        wizard
            .choose_connection_method(ConnectionChoice::LinkedIn(snapshot()))
            .unwrap();
        let (request, ticket) = wizard.submit_target_info(draft()).unwrap();

        assert_eq!(wizard.step(), 3);
        assert!(wizard.is_busy());
        assert_eq!(request.current_profile, Some(snapshot()));
        assert_eq!(request.target.experience_level, ExperienceLevel::Senior);

        // Nothing moves while busy
        assert!(!wizard.retreat());
        assert!(!wizard.advance());
        assert_eq!(wizard.submit_target_info(draft()), Err(WizardError::Busy));

        assert!(wizard.finish_analysis(ticket, AnalysisOutcome::Success(report())));
        assert!(!wizard.is_busy());
        assert_eq!(wizard.step(), 4);
        assert_eq!(wizard.report(), Some(&report()));
    }

    #[test]
    fn test_stale_and_out_of_phase_outcomes_are_ignored() {
        let mut wizard = LinkedInWizard::new();
        wizard.choose_connection_method(ConnectionChoice::Manual).unwrap();
        let (_, first) = wizard.submit_target_info(draft()).unwrap();
        assert!(wizard.finish_analysis(first, AnalysisOutcome::Failure("timeout".to_string())));

        let (_, second) = wizard.retry_analysis().unwrap();
        assert_ne!(first, second);
        assert!(!wizard.finish_analysis(first, AnalysisOutcome::Success(report())));
        assert!(wizard.is_busy());

        assert!(wizard.finish_analysis(second, AnalysisOutcome::Success(report())));
        assert!(!wizard.finish_analysis(second, AnalysisOutcome::Success(report())));
        assert_eq!(wizard.step(), 4);
    }

    #[test]
    fn test_failed_analysis_can_go_back_with_draft() {
        let mut wizard = LinkedInWizard::new();
        wizard.choose_connection_method(ConnectionChoice::Manual).unwrap();
        let manual = TargetInfoDraft {
            current_headline: "Engineer".to_string(),
            current_skills: "Rust, Go".to_string(),
            ..draft()
        };
        let (request, ticket) = wizard.submit_target_info(manual).unwrap();
        assert_eq!(request.current_profile.unwrap().skills, vec!["Rust", "Go"]);

        wizard.finish_analysis(ticket, AnalysisOutcome::Failure("quota".to_string()));
        assert!(matches!(
            wizard.state(),
            WizardState::Analysis { progress: AnalysisProgress::Failed(reason), .. } if reason == "quota"
        ));
        assert!(!wizard.advance());

        assert!(wizard.retreat());
        let draft = wizard.draft().unwrap();
        assert_eq!(draft.target_role, "Senior Software Engineer");
        assert_eq!(draft.current_skills, "Rust, Go");
    }

    #[test]
    fn test_back_from_results_keeps_report() {
        let mut wizard = at_results();
        assert!(wizard.retreat());
        assert_eq!(wizard.step(), 3);
        assert!(wizard.report().is_some());

        assert!(wizard.advance());
        assert_eq!(wizard.step(), 4);
    }

    #[test]
    fn test_modules_and_complete() {
        let mut wizard = at_results();
        assert_eq!(wizard.complete(), None);
        assert_eq!(
            wizard.activate_module(ExtraModule::WeeklyPosting),
            Err(WizardError::WrongStep(4))
        );

        wizard.advance();
        assert_eq!(wizard.activate_module(ExtraModule::WeeklyPosting), Ok(true));
        assert_eq!(wizard.activate_module(ExtraModule::WeeklyPosting), Ok(false));
        wizard.activate_all_modules().unwrap();
        assert_eq!(wizard.activated_modules().unwrap().len(), 3);

        assert_eq!(wizard.complete(), Some("/user/dashboard"));
        assert_eq!(wizard, LinkedInWizard::new());
    }

    #[test]
    fn test_retreat_from_target_info_drops_connection() {
        let mut wizard = LinkedInWizard::new();
        wizard
            .choose_connection_method(ConnectionChoice::LinkedIn(snapshot()))
            .unwrap();
        assert!(wizard.retreat());
        assert_eq!(wizard.state(), &WizardState::Connect);
        assert_eq!(wizard.connection(), None);
    }

    #[test]
    fn test_typed_draft_survives_going_back_to_connect() {
        let mut wizard = LinkedInWizard::new();
        wizard.choose_connection_method(ConnectionChoice::Manual).unwrap();
        wizard.update_draft(draft());
        assert!(wizard.retreat());
        assert_eq!(wizard.draft(), None);

        wizard
            .choose_connection_method(ConnectionChoice::LinkedIn(snapshot()))
            .unwrap();
        assert_eq!(wizard.draft(), Some(&draft()));

        wizard.update_draft(TargetInfoDraft::default());
        assert_eq!(wizard.draft(), Some(&TargetInfoDraft::default()));
    }

    #[test]
    fn test_exit_route_only_on_last_step() {
        let mut wizard = at_results();
        assert_eq!(wizard.exit_route(), None);
        wizard.advance();
        assert_eq!(wizard.exit_route(), Some(EXIT_ROUTE));
        assert_eq!(wizard.step(), 5);
    }
}
