use super::AdminError;
use crate::types::{PaymentRecord, PaymentStatus};
use chrono::{Duration, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
    Year,
}

impl DateRange {
    pub const ALL: [DateRange; 5] = [
        DateRange::All,
        DateRange::Today,
        DateRange::Week,
        DateRange::Month,
        DateRange::Year,
    ];

    pub fn value(self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::All => "All Time",
            DateRange::Today => "Today",
            DateRange::Week => "Last 7 Days",
            DateRange::Month => "Last 30 Days",
            DateRange::Year => "Last Year",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.value() == value)
            .unwrap_or_default()
    }

    fn contains(self, date: NaiveDateTime, now: NaiveDateTime) -> bool {
        let window = match self {
            DateRange::All => return true,
            DateRange::Today => return date.date() == now.date(),
            DateRange::Week => Duration::days(7),
            DateRange::Month => Duration::days(30),
            DateRange::Year => Duration::days(365),
        };
        date >= now - window
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentFilter {
    pub search: String,
    /// `None` means every status.
    pub status: Option<PaymentStatus>,
    pub range: DateRange,
}

impl PaymentFilter {
    pub fn matches(&self, payment: &PaymentRecord, now: NaiveDateTime) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || payment.user_name.to_lowercase().contains(&needle)
            || payment.user_email.to_lowercase().contains(&needle)
            || payment.transaction_id.to_lowercase().contains(&needle);
        let matches_status = self.status.map_or(true, |s| payment.status == s);

        matches_search && matches_status && self.range.contains(payment.date, now)
    }
}

pub fn status_from_value(value: &str) -> Option<PaymentStatus> {
    match value {
        "success" => Some(PaymentStatus::Success),
        "failed" => Some(PaymentStatus::Failed),
        "pending" => Some(PaymentStatus::Pending),
        "refunded" => Some(PaymentStatus::Refunded),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaymentStats {
    pub total_revenue: f64,
    pub successful: usize,
    pub failed: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentLedger {
    payments: Vec<PaymentRecord>,
}

impl PaymentLedger {
    pub fn new(payments: Vec<PaymentRecord>) -> Self {
        Self { payments }
    }

    pub fn payments(&self) -> &[PaymentRecord] {
        &self.payments
    }

    pub fn filtered(&self, filter: &PaymentFilter, now: NaiveDateTime) -> Vec<PaymentRecord> {
        self.payments
            .iter()
            .filter(|p| filter.matches(p, now))
            .cloned()
            .collect()
    }

    /// Totals over the whole ledger, independent of any filter.
    pub fn stats(&self) -> PaymentStats {
        self.payments
            .iter()
            .fold(PaymentStats::default(), |mut stats, p| {
                match p.status {
                    PaymentStatus::Success => {
                        stats.total_revenue += p.amount;
                        stats.successful += 1;
                    }
                    PaymentStatus::Failed => stats.failed += 1,
                    PaymentStatus::Pending => stats.pending += 1,
                    PaymentStatus::Refunded => {}
                }
                stats
            })
    }

    pub fn can_refund(&self, id: &str) -> bool {
        self.payments
            .iter()
            .any(|p| p.id == id && p.status == PaymentStatus::Success)
    }

    pub fn refund(&mut self, id: &str) -> Result<&PaymentRecord, AdminError> {
        let payment = self
            .payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AdminError::NotFound(id.to_string()))?;
        if payment.status != PaymentStatus::Success {
            return Err(AdminError::NotRefundable(id.to_string()));
        }
        payment.status = PaymentStatus::Refunded;
        Ok(payment)
    }
}

pub fn seed_payments() -> Vec<PaymentRecord> {
    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap_or_default()
    }

    #[allow(clippy::too_many_arguments)]
    fn payment(
        id: &str,
        user_id: &str,
        name: &str,
        email: &str,
        plan: &str,
        amount: f64,
        status: PaymentStatus,
        txn: &str,
        date: NaiveDateTime,
    ) -> PaymentRecord {
        PaymentRecord {
            id: id.to_string(),
            user_id: user_id.to_string(),
            user_name: name.to_string(),
            user_email: email.to_string(),
            plan: plan.to_string(),
            amount,
            currency: "USD".to_string(),
            status,
            payment_method: "Stripe".to_string(),
            transaction_id: txn.to_string(),
            date,
        }
    }

    vec![
        payment("1", "101", "John Doe", "john@example.com", "Premium", 79.0,
            PaymentStatus::Success, "txn_1234567890abcdef", at(2024, 12, 27, 10, 30)),
        payment("2", "102", "Jane Smith", "jane@example.com", "Basic", 29.0,
            PaymentStatus::Success, "txn_abcdef1234567890", at(2024, 12, 26, 15, 45)),
        payment("3", "103", "Bob Wilson", "bob@example.com", "Enterprise", 199.0,
            PaymentStatus::Failed, "txn_0987654321fedcba", at(2024, 12, 25, 9, 15)),
        payment("4", "104", "Alice Johnson", "alice@example.com", "Premium", 79.0,
            PaymentStatus::Success, "txn_fedcba0987654321", at(2024, 12, 24, 14, 20)),
        payment("5", "105", "Charlie Brown", "charlie@example.com", "Basic", 29.0,
            PaymentStatus::Pending, "txn_1122334455667788", at(2024, 12, 27, 11, 0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 27)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    fn names(rows: &[PaymentRecord]) -> Vec<&str> {
        rows.iter().map(|p| p.user_name.as_str()).collect()
    }

    #[test]
    fn test_stats_count_by_status() {
        let stats = PaymentLedger::new(seed_payments()).stats();
        assert_eq!(
            stats,
            PaymentStats {
                total_revenue: 187.0,
                successful: 3,
                failed: 1,
                pending: 1,
            }
        );
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let ledger = PaymentLedger::new(seed_payments());

        let by_name = PaymentFilter { search: "ALICE".to_string(), ..Default::default() };
        assert_eq!(names(&ledger.filtered(&by_name, now())), vec!["Alice Johnson"]);

        let by_txn = PaymentFilter { search: "TXN_0987".to_string(), ..Default::default() };
        assert_eq!(names(&ledger.filtered(&by_txn, now())), vec!["Bob Wilson"]);

        let by_email = PaymentFilter { search: "charlie@".to_string(), ..Default::default() };
        assert_eq!(names(&ledger.filtered(&by_email, now())), vec!["Charlie Brown"]);
    }

    #[test]
    fn test_status_and_date_filters() {
        let ledger = PaymentLedger::new(seed_payments());

        let success = PaymentFilter { status: Some(PaymentStatus::Success), ..Default::default() };
        assert_eq!(ledger.filtered(&success, now()).len(), 3);

        let today = PaymentFilter { range: DateRange::Today, ..Default::default() };
        assert_eq!(names(&ledger.filtered(&today, now())), vec!["John Doe", "Charlie Brown"]);

        let week = PaymentFilter { range: DateRange::Week, ..Default::default() };
        assert_eq!(ledger.filtered(&week, now()).len(), 5);

        let later = now() + Duration::days(40);
        let month = PaymentFilter { range: DateRange::Month, ..Default::default() };
        assert!(ledger.filtered(&month, later).is_empty());
        let year = PaymentFilter { range: DateRange::Year, ..Default::default() };
        assert_eq!(ledger.filtered(&year, later).len(), 5);
    }

    #[test]
    fn test_refund_only_from_success() {
        let mut ledger = PaymentLedger::new(seed_payments());

        assert!(ledger.can_refund("1"));
        assert_eq!(ledger.refund("1").unwrap().status, PaymentStatus::Refunded);
        assert!(!ledger.can_refund("1"));
        assert_eq!(ledger.refund("1"), Err(AdminError::NotRefundable("1".to_string())));
        assert_eq!(ledger.refund("5"), Err(AdminError::NotRefundable("5".to_string())));

        assert_eq!(ledger.stats().total_revenue, 108.0);
    }

    #[test]
    fn test_date_range_values() {
        assert_eq!(DateRange::from_value("month"), DateRange::Month);
        assert_eq!(DateRange::from_value("bogus"), DateRange::All);
        assert_eq!(status_from_value("all"), None);
    }
}
