mod common;

use chrono::{TimeZone, Utc};
use common::jane;
use pretty_assertions::assert_eq;
use seomaster_ui::api::mock::sample_report;
use seomaster_ui::catalog::plan_offer;
use seomaster_ui::store::*;
use seomaster_ui::types::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

fn round_trip<S: Serialize + DeserializeOwned>(state: &S) -> S {
    let json = serde_json::to_string(state).unwrap();
    serde_json::from_str(&json).unwrap()
}

fn replay<S: Reducer + Default>(actions: Vec<S::Action>) -> S {
    let mut state = S::default();
    for action in actions {
        state.reduce(action);
    }
    state
}

fn at(hour: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 27, hour, 0, 0).unwrap()
}

#[test]
fn test_user_auth_record() {
    let state: UserAuthState = replay(vec![
        UserAuthAction::SetUser(Some(jane())),
        UserAuthAction::SetPendingEmail(Some("jane@example.com".to_string())),
        UserAuthAction::SetError(Some("Session expired".to_string())),
    ]);
    let restored = round_trip(&state);
    assert_eq!(restored, state);

    let replayed: UserAuthState = replay(vec![
        UserAuthAction::SetLoading(restored.loading),
        UserAuthAction::SetUser(restored.user.clone()),
        UserAuthAction::SetPendingEmail(restored.pending_email.clone()),
        UserAuthAction::SetError(restored.error.clone()),
    ]);
    assert_eq!(replayed, state);
}

#[test]
fn test_admin_auth_record() {
    let state: AdminAuthState = replay(vec![AdminAuthAction::SetAdmin(Some(AdminProfile {
        id: "admin-1".to_string(),
        email: "admin@seomaster.pro".to_string(),
        name: "Administrator".to_string(),
        permissions: vec!["*".to_string()],
    }))]);
    let restored = round_trip(&state);
    assert_eq!(restored, state);
    assert!(restored.has_permission("refunds"));

    let replayed: AdminAuthState = replay(vec![
        AdminAuthAction::SetLoading(restored.loading),
        AdminAuthAction::SetAdmin(restored.admin.clone()),
        AdminAuthAction::SetError(restored.error.clone()),
    ]);
    assert_eq!(replayed, state);
}

#[test]
fn test_dashboard_records() {
    let user: UserDashboardState = replay(vec![
        UserDashboardAction::SetStats(UserDashboardStats {
            total_analyses: 12,
            linkedin_optimizations: 3,
            seo_score: 78,
            monthly_usage: 40,
        }),
        UserDashboardAction::SetRecentActivity(vec![ActivityEntry {
            id: "a1".to_string(),
            kind: "linkedin".to_string(),
            description: "LinkedIn profile analysis completed".to_string(),
            timestamp: at(10),
        }]),
    ]);
    let restored = round_trip(&user);
    let replayed: UserDashboardState = replay(vec![
        UserDashboardAction::SetLoading(restored.loading),
        UserDashboardAction::SetStats(restored.stats.clone()),
        UserDashboardAction::SetRecentActivity(restored.recent_activity.clone()),
        UserDashboardAction::SetError(restored.error.clone()),
    ]);
    assert_eq!(replayed, user);

    let admin: AdminDashboardState = replay(vec![
        AdminDashboardAction::SetStats(AdminDashboardStats {
            total_users: 5,
            active_users: 4,
            total_revenue: 187.5,
            system_health: 98,
        }),
        AdminDashboardAction::SetUserMetrics(vec![UserMetric {
            id: "101".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            last_active: at(8),
            subscription: PlanTier::Premium,
        }]),
        AdminDashboardAction::SetError(Some("Partial data".to_string())),
    ]);
    let restored = round_trip(&admin);
    let replayed: AdminDashboardState = replay(vec![
        AdminDashboardAction::SetLoading(restored.loading),
        AdminDashboardAction::SetStats(restored.stats.clone()),
        AdminDashboardAction::SetUserMetrics(restored.user_metrics.clone()),
        AdminDashboardAction::SetError(restored.error.clone()),
    ]);
    assert_eq!(replayed, admin);
}

#[test]
fn test_linkedin_record() {
    let profile = LinkedInProfile {
        id: "li-1".to_string(),
        name: "Jane Doe".to_string(),
        headline: "Software Engineer".to_string(),
        summary: "Builds things".to_string(),
        experience: vec![ExperienceEntry {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            duration: "5 years".to_string(),
        }],
        skills: vec!["Rust".to_string()],
    };
    let state: LinkedInState = replay(vec![
        LinkedInAction::SetProfile(Some(profile)),
        LinkedInAction::SetAnalysis(Some(sample_report().summary())),
    ]);
    let restored = round_trip(&state);
    let replayed: LinkedInState = replay(vec![
        LinkedInAction::SetLoading(restored.loading),
        LinkedInAction::SetProfile(restored.profile.clone()),
        LinkedInAction::SetAnalysis(restored.analysis.clone()),
        LinkedInAction::SetError(restored.error.clone()),
    ]);
    assert_eq!(replayed, state);
}

#[test]
fn test_payment_record() {
    let state: PaymentState = replay(vec![
        PaymentAction::SetSubscription(Some(plan_offer(PlanTier::Premium).activate(at(12)))),
        PaymentAction::SetPaymentHistory(vec![PaymentHistoryEntry {
            id: "p1".to_string(),
            amount: 79.0,
            date: at(12),
            status: ChargeStatus::Success,
            description: "Premium monthly".to_string(),
        }]),
    ]);
    let restored = round_trip(&state);
    let replayed: PaymentState = replay(vec![
        PaymentAction::SetLoading(restored.loading),
        PaymentAction::SetSubscription(restored.subscription.clone()),
        PaymentAction::SetPaymentHistory(restored.payment_history.clone()),
        PaymentAction::SetError(restored.error.clone()),
    ]);
    assert_eq!(replayed, state);
}

#[test]
fn test_seo_record() {
    let state: SeoState = replay(vec![SeoAction::SetAnalysis(Some(SeoAnalysis {
        url: "https://example.com".to_string(),
        score: 64,
        issues: vec![SeoIssue {
            kind: "meta".to_string(),
            severity: Priority::High,
            description: "Missing meta description".to_string(),
            suggestion: "Add a 150 character summary".to_string(),
        }],
        keywords: vec![KeywordStat {
            keyword: "seo audit".to_string(),
            density: 1.5,
            position: 12,
        }],
        competitors: vec![CompetitorSite {
            domain: "competitor.io".to_string(),
            score: 71,
            backlinks: 1200,
        }],
    }))]);
    let restored = round_trip(&state);
    let replayed: SeoState = replay(vec![
        SeoAction::SetLoading(restored.loading),
        SeoAction::SetAnalysis(restored.analysis.clone()),
        SeoAction::SetError(restored.error.clone()),
    ]);
    assert_eq!(replayed, state);
}
