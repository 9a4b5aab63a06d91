use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::User => "/user/dashboard",
            Role::Admin => "/admin/dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub permissions: Vec<String>,
}

/// What a successful sign-in hands back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Session {
    User(UserProfile),
    Admin(AdminProfile),
}

impl Session {
    pub fn role(&self) -> Role {
        match self {
            Session::User(_) => Role::User,
            Session::Admin(_) => Role::Admin,
        }
    }
}

// Subscriptions and billing

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Basic,
    Premium,
    Enterprise,
}

impl PlanTier {
    pub const ALL: [PlanTier; 4] = [
        PlanTier::Free,
        PlanTier::Basic,
        PlanTier::Premium,
        PlanTier::Enterprise,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Basic => "Basic",
            PlanTier::Premium => "Premium",
            PlanTier::Enterprise => "Enterprise",
        }
    }

    /// Case-insensitive lookup by display name, as carried in `?plan=` query strings.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Cancelled,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub plan: PlanTier,
    pub status: SubscriptionStatus,
    pub expiry_date: DateTime<Utc>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn suffix(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Yearly => "/year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    Success,
    Failed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentHistoryEntry {
    pub id: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub status: ChargeStatus,
    pub description: String,
}

// Dashboards

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDashboardStats {
    pub total_analyses: u32,
    pub linkedin_optimizations: u32,
    pub seo_score: u32,
    pub monthly_usage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub kind: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDashboard {
    pub stats: UserDashboardStats,
    pub recent_activity: Vec<ActivityEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboardStats {
    pub total_users: u32,
    pub active_users: u32,
    pub total_revenue: f64,
    pub system_health: u8,
}

impl Default for AdminDashboardStats {
    fn default() -> Self {
        Self {
            total_users: 0,
            active_users: 0,
            total_revenue: 0.0,
            system_health: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMetric {
    pub id: String,
    pub name: String,
    pub email: String,
    pub last_active: DateTime<Utc>,
    pub subscription: PlanTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub stats: AdminDashboardStats,
    pub user_metrics: Vec<UserMetric>,
}

// LinkedIn profile and generic SEO analysis records

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInProfile {
    pub id: String,
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSuggestion {
    pub category: String,
    pub suggestion: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub score: u32,
    pub suggestions: Vec<ProfileSuggestion>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoIssue {
    pub kind: String,
    pub severity: Priority,
    pub description: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordStat {
    pub keyword: String,
    pub density: f64,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorSite {
    pub domain: String,
    pub score: u32,
    pub backlinks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoAnalysis {
    pub url: String,
    pub score: u32,
    pub issues: Vec<SeoIssue>,
    pub keywords: Vec<KeywordStat>,
    pub competitors: Vec<CompetitorSite>,
}

// Admin records

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: String,
    pub name: String,
    pub monthly_price: u32,
    pub yearly_price: u32,
    pub features: Vec<String>,
    pub is_active: bool,
    /// `-1` means unlimited.
    pub max_optimizations: i32,
}

impl PlanRecord {
    pub fn optimizations_label(&self) -> String {
        if self.max_optimizations < 0 {
            "Unlimited".to_string()
        } else {
            self.max_optimizations.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failed,
    Pending,
    Refunded,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            PaymentStatus::Success => "bg-green-100 text-green-800",
            PaymentStatus::Failed => "bg-red-100 text-red-800",
            PaymentStatus::Pending => "bg-yellow-100 text-yellow-800",
            PaymentStatus::Refunded => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub plan: String,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub payment_method: String,
    pub transaction_id: String,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub last_active: DateTime<Utc>,
    pub subscription: PlanTier,
    pub is_suspended: bool,
}

// Request payloads

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub contact: Option<String>,
    pub password: String,
    pub hear_about_us: String,
    pub referral_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteProfileRequest {
    pub company_name: String,
    pub industry: String,
    pub target_audience_location: String,
    pub primary_seo_goal: String,
    pub current_seo_experience: String,
    pub main_competitors: Option<String>,
    pub seo_challenges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub plan: PlanTier,
    pub billing_cycle: BillingCycle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub session_id: String,
    pub redirect_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub transaction_id: String,
    pub subscription: Subscription,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_tier_from_label() {
        assert_eq!(PlanTier::from_label("Premium"), Some(PlanTier::Premium));
        assert_eq!(PlanTier::from_label(" enterprise "), Some(PlanTier::Enterprise));
        assert_eq!(PlanTier::from_label("your selected plan"), None);
    }

    #[test]
    fn test_session_serializes_with_role_tag() {
        let session = Session::User(UserProfile {
            id: "u-1".to_string(),
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
        });

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(session.role().dashboard_path(), "/user/dashboard");
    }

    #[test]
    fn test_unlimited_optimizations_label() {
        let mut plan = PlanRecord {
            id: "3".to_string(),
            name: "Premium".to_string(),
            monthly_price: 79,
            yearly_price: 790,
            features: vec![],
            is_active: true,
            max_optimizations: -1,
        };
        assert_eq!(plan.optimizations_label(), "Unlimited");

        plan.max_optimizations = 10;
        assert_eq!(plan.optimizations_label(), "10");
    }
}
