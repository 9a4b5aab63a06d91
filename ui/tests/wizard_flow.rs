mod common;

use common::{backend, complete_draft};
use pretty_assertions::assert_eq;
use seomaster_ui::api::mock::imported_profile;
use seomaster_ui::api::{ApiError, Backend};
use seomaster_ui::catalog::ExtraModule;
use seomaster_ui::wizard::{
    AnalysisOutcome, ConnectionChoice, ConnectionMethod, LinkedInWizard, WizardError, EXIT_ROUTE,
};

#[tokio::test]
async fn test_linkedin_connection_runs_to_completion() {
    let backend = backend();
    let mut wizard = LinkedInWizard::new();

    wizard
        .choose_connection_method(ConnectionChoice::LinkedIn(imported_profile()))
        .unwrap();
    assert_eq!(wizard.step(), 2);
    let connection = wizard.connection().unwrap();
    assert_eq!(connection.method, ConnectionMethod::LinkedIn);
    assert_eq!(connection.snapshot, Some(imported_profile()));

    let (request, ticket) = wizard.submit_target_info(complete_draft()).unwrap();
    assert_eq!(wizard.step(), 3);
    assert!(wizard.is_busy());
    assert_eq!(request.current_profile, Some(imported_profile()));
    assert_eq!(request.target.target_skills, vec!["Rust", "Distributed Systems"]);

    let report = backend.run_profile_analysis(request).await.unwrap();
    assert!(wizard.finish_analysis(ticket, AnalysisOutcome::Success(report)));
    assert!(!wizard.is_busy());
    assert_eq!(wizard.step(), 4);

    let report = wizard.report().unwrap();
    assert!(report.competitor_profiles.count > 0);
    assert!(report.keyword_map.headline_count() > 0);
    assert!(!report.gap_analysis.missing_keywords.is_empty());
    assert!(!report.optimized_content.headline.is_empty());

    assert!(wizard.advance());
    assert_eq!(wizard.step(), 5);
    assert_eq!(wizard.activate_module(ExtraModule::ALL[0]), Ok(true));
    assert_eq!(wizard.activate_module(ExtraModule::ALL[0]), Ok(false));
    wizard.activate_all_modules().unwrap();
    assert_eq!(wizard.activated_modules().map(|m| m.len()), Some(ExtraModule::ALL.len()));

    assert_eq!(wizard.complete(), Some(EXIT_ROUTE));
    assert_eq!(wizard.step(), 1);
}

#[tokio::test]
async fn test_manual_entry_sends_typed_profile() {
    let backend = backend();
    let mut wizard = LinkedInWizard::new();
    wizard.choose_connection_method(ConnectionChoice::Manual).unwrap();

    let draft = seomaster_ui::wizard::TargetInfoDraft {
        current_headline: "Backend Engineer".to_string(),
        current_skills: "Rust, SQL".to_string(),
        ..complete_draft()
    };
    let (request, ticket) = wizard.submit_target_info(draft).unwrap();
    let profile = request.current_profile.clone().unwrap();
    assert_eq!(profile.headline, "Backend Engineer");
    assert_eq!(profile.skills, vec!["Rust", "SQL"]);

    let report = backend.run_profile_analysis(request).await.unwrap();
    assert!(wizard.finish_analysis(ticket, AnalysisOutcome::Success(report)));
    assert_eq!(wizard.step(), 4);
}

#[tokio::test]
async fn test_failed_analysis_is_retried() {
    let backend = backend();
    let mut wizard = LinkedInWizard::new();
    wizard.choose_connection_method(ConnectionChoice::Manual).unwrap();
    let (request, first) = wizard.submit_target_info(complete_draft()).unwrap();

    backend.fail_next(ApiError::Network("offline".to_string()));
    let err = backend.run_profile_analysis(request).await.unwrap_err();
    assert!(wizard.finish_analysis(first, AnalysisOutcome::Failure(err.user_message())));
    assert_eq!(wizard.step(), 3);
    assert!(!wizard.is_busy());
    assert_eq!(wizard.report(), None);

    let (request, second) = wizard.retry_analysis().unwrap();
    assert!(wizard.is_busy());
    assert_eq!(wizard.retry_analysis().unwrap_err(), WizardError::Busy);

    let report = backend.run_profile_analysis(request).await.unwrap();
    assert!(!wizard.finish_analysis(first, AnalysisOutcome::Success(report.clone())));
    assert!(wizard.finish_analysis(second, AnalysisOutcome::Success(report)));
    assert_eq!(wizard.step(), 4);
}

#[test]
fn test_incomplete_target_info_stays_on_step_two() {
    let mut wizard = LinkedInWizard::new();
    wizard.choose_connection_method(ConnectionChoice::Manual).unwrap();

    let draft = seomaster_ui::wizard::TargetInfoDraft {
        industry: String::new(),
        ..complete_draft()
    };
    assert!(!draft.is_complete());
    assert_eq!(
        wizard.submit_target_info(draft).unwrap_err(),
        WizardError::IncompleteTargetInfo
    );
    assert_eq!(wizard.step(), 2);
    assert!(!wizard.advance());
}
