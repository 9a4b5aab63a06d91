mod common;

use chrono::NaiveDate;
use common::backend;
use pretty_assertions::assert_eq;
use seomaster_ui::admin::{DateRange, NewPlan, PaymentFilter, PaymentLedger, PlanTable, UserDirectory, UserFilter};
use seomaster_ui::api::{ApiError, Backend};
use seomaster_ui::types::{PaymentStatus, PlanTier};

#[tokio::test]
async fn test_toggling_a_plan_twice_is_persisted_and_restored() {
    let backend = backend();
    let mut table = PlanTable::new(backend.list_plans().await.unwrap());
    let before = table.clone();

    for expected in [false, true] {
        let toggled = table.toggle_active("2").unwrap().clone();
        assert_eq!(toggled.is_active, expected);
        let saved = backend.save_plan(toggled).await.unwrap();
        table.upsert(saved);

        let stored = PlanTable::new(backend.list_plans().await.unwrap());
        assert_eq!(stored.get("2").map(|p| p.is_active), Some(expected));
        assert_eq!(stored.get("1"), before.get("1"));
    }

    assert_eq!(table, before);
}

#[tokio::test]
async fn test_failed_toggle_leaves_table_matching_backend() {
    let backend = backend();
    let mut table = PlanTable::new(backend.list_plans().await.unwrap());

    let previous = table.get("2").cloned();
    let toggled = table.toggle_active("2").unwrap().clone();
    assert!(!toggled.is_active);

    backend.fail_next(ApiError::Network("connection reset".to_string()));
    let saved = backend.save_plan(toggled).await.ok();
    assert_eq!(saved, None);
    table.settle("2", previous, saved);

    assert_eq!(table.plans(), backend.list_plans().await.unwrap().as_slice());
    assert_eq!(table.get("2").map(|p| p.is_active), Some(true));
}

#[tokio::test]
async fn test_new_plan_is_saved_and_deleted() {
    let backend = backend();
    let mut table = PlanTable::new(backend.list_plans().await.unwrap());

    let plan = table
        .add(NewPlan {
            name: "Agency".to_string(),
            monthly_price: 149,
            yearly_price: 1490,
            max_optimizations: -1,
            features: "Client workspaces, White-label reports".to_string(),
        })
        .unwrap();
    assert_eq!(plan.features, vec!["Client workspaces", "White-label reports"]);
    backend.save_plan(plan.clone()).await.unwrap();
    assert_eq!(backend.list_plans().await.unwrap().len(), 5);

    backend.delete_plan(&plan.id).await.unwrap();
    table.delete(&plan.id).unwrap();
    assert_eq!(backend.list_plans().await.unwrap(), table.plans().to_vec());

    let err = backend.delete_plan(&plan.id).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
}

#[tokio::test]
async fn test_suspension_round_trips_through_backend() {
    let backend = backend();
    let mut directory = UserDirectory::new(backend.list_users().await.unwrap());
    assert_eq!(directory.active_count(), 5);

    backend.set_user_suspended("103", true).await.unwrap();
    directory.set_suspended("103", true).unwrap();
    assert_eq!(directory.active_count(), 4);
    assert_eq!(UserDirectory::new(backend.list_users().await.unwrap()), directory);

    let free = UserFilter {
        subscription: Some(PlanTier::Free),
        ..UserFilter::default()
    };
    let rows = directory.filtered(&free);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_suspended);

    assert!(backend.set_user_suspended("999", true).await.is_err());
}

#[tokio::test]
async fn test_refund_moves_revenue() {
    let backend = backend();
    let mut ledger = PaymentLedger::new(backend.list_payments().await.unwrap());
    assert_eq!(ledger.stats().total_revenue, 187.0);

    assert!(ledger.can_refund("1"));
    let refunded = backend.refund_payment("1").await.unwrap();
    assert_eq!(refunded.status, PaymentStatus::Refunded);
    ledger.refund("1").unwrap();
    assert_eq!(ledger.stats().total_revenue, 108.0);
    assert_eq!(PaymentLedger::new(backend.list_payments().await.unwrap()), ledger);

    // Failed charges cannot be refunded
    assert!(!ledger.can_refund("3"));
    assert!(backend.refund_payment("3").await.is_err());

    let now = NaiveDate::from_ymd_opt(2024, 12, 27)
        .and_then(|d| d.and_hms_opt(18, 0, 0))
        .unwrap();
    let refunded_today = PaymentFilter {
        status: Some(PaymentStatus::Refunded),
        range: DateRange::Today,
        ..PaymentFilter::default()
    };
    let rows = ledger.filtered(&refunded_today, now);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].transaction_id, "txn_1234567890abcdef");
}
