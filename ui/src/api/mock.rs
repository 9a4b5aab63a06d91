// In-browser backend with canned responses
use super::{ApiError, Backend};
use crate::admin::{seed_payments, seed_plans, seed_users, PaymentLedger, PlanTable, UserDirectory};
use crate::catalog::plan_offer;
use crate::config::AppConfig;
use crate::types::*;
use crate::wizard::{
    AnalysisReport, AnalysisRequest, CompetitorProfiles, GapAnalysis, KeywordMap, OptimizedContent,
    ProfileSnapshot, ScoreBreakdown, SeoScore,
};
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use uuid::Uuid;

/// Waits out a simulated delay.
pub type Sleeper = Rc<dyn Fn(Duration) -> LocalBoxFuture<'static, ()>>;

/// Code that the mock refuses at OTP verification.
pub const REJECTED_OTP: &str = "000000";

pub struct MockBackend {
    latency: Duration,
    analysis_delay: Duration,
    admin_email: String,
    sleeper: Sleeper,
    next_failure: RefCell<Option<ApiError>>,
    plans: RefCell<PlanTable>,
    users: RefCell<UserDirectory>,
    payments: RefCell<PaymentLedger>,
}

impl MockBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_sleeper(
            config,
            Rc::new(|delay| Box::pin(gloo_timers::future::sleep(delay))),
        )
    }

    pub fn with_sleeper(config: &AppConfig, sleeper: Sleeper) -> Self {
        Self {
            latency: Duration::from_millis(u64::from(config.mock_latency_ms)),
            analysis_delay: Duration::from_millis(u64::from(config.analysis_delay_ms)),
            admin_email: config.admin_email.clone(),
            sleeper,
            next_failure: RefCell::new(None),
            plans: RefCell::new(PlanTable::new(seed_plans())),
            users: RefCell::new(UserDirectory::new(seed_users(Utc::now()))),
            payments: RefCell::new(PaymentLedger::new(seed_payments())),
        }
    }

    /// Answers immediately. Used by tests.
    pub fn instant(config: &AppConfig) -> Self {
        Self::with_sleeper(config, Rc::new(|_| Box::pin(async {})))
    }

    /// Makes the next call fail with `err`, after its usual delay.
    pub fn fail_next(&self, err: ApiError) {
        *self.next_failure.borrow_mut() = Some(err);
    }

    async fn simulate(&self, delay: Duration) -> Result<(), ApiError> {
        (self.sleeper)(delay).await;
        match self.next_failure.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn respond(&self) -> Result<(), ApiError> {
        self.simulate(self.latency).await
    }
}

fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Profile handed back by the simulated LinkedIn connection.
pub fn imported_profile() -> ProfileSnapshot {
    ProfileSnapshot {
        headline: "Software Engineer | Full Stack Developer".to_string(),
        about: "Passionate about building scalable web applications...".to_string(),
        experience: "5 years in web development".to_string(),
        skills: to_strings(&["React", "Node.js", "TypeScript", "AWS"]),
    }
}

pub fn sample_report() -> AnalysisReport {
    AnalysisReport {
        competitor_profiles: CompetitorProfiles {
            count: 30,
            top_headlines: to_strings(&[
                "Senior Software Engineer | Cloud Architecture | AWS Certified",
                "Full Stack Developer | React & Node.js Expert | Tech Lead",
                "Software Engineer | Building Scalable Systems | Ex-FAANG",
            ]),
            top_skills: to_strings(&[
                "JavaScript", "React", "Node.js", "AWS", "TypeScript", "Python", "Docker", "Kubernetes",
            ]),
            common_keywords: to_strings(&["Cloud", "Scalable", "Agile", "Microservices", "CI/CD", "DevOps"]),
        },
        keyword_map: KeywordMap {
            industry_keywords: to_strings(&[
                "SaaS", "Cloud Computing", "Enterprise Software", "B2B", "API Development",
            ]),
            role_keywords: to_strings(&["Software Engineer", "Full Stack", "Backend", "Frontend", "Tech Lead"]),
            location_keywords: to_strings(&["Remote", "San Francisco", "Silicon Valley", "US-Based"]),
            skill_keywords: to_strings(&[
                "React", "Node.js", "AWS", "Docker", "Kubernetes", "TypeScript", "MongoDB",
            ]),
        },
        gap_analysis: GapAnalysis {
            missing_keywords: to_strings(&[
                "Cloud Architecture", "Kubernetes", "Microservices", "CI/CD", "DevOps",
            ]),
            keyword_usage_comparison: "Your profile uses 45% of top keywords vs competitors who use 85%"
                .to_string(),
            profile_completeness: 72,
        },
        optimized_content: OptimizedContent {
            headline: "Senior Software Engineer | Cloud Architecture & Scalable Systems | AWS Certified | React & Node.js Expert".to_string(),
            about: SAMPLE_ABOUT.to_string(),
            experience_bullets: to_strings(&[
                "• Architected and deployed cloud-native microservices architecture handling 1M+ daily requests with 99.9% uptime",
                "• Led migration from monolithic to microservices architecture, reducing deployment time by 70%",
                "• Implemented CI/CD pipelines using GitHub Actions and AWS, enabling 20+ deployments per week",
                "• Optimized AWS infrastructure, reducing monthly costs by 40% ($50k savings annually)",
                "• Mentored 5 junior developers, improving team velocity by 35%",
            ]),
            suggested_skills: to_strings(&[
                "Kubernetes",
                "Docker",
                "Microservices Architecture",
                "CI/CD",
                "DevOps",
                "GraphQL",
                "REST APIs",
                "Agile Methodologies",
                "Cloud Architecture",
                "System Design",
            ]),
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

const SAMPLE_ABOUT: &str = "Passionate Software Engineer with 5+ years of experience building scalable, cloud-native applications. Specialized in full-stack development with React, Node.js, and AWS.

🚀 Key Achievements:
• Architected and deployed microservices handling 1M+ daily requests
• Reduced infrastructure costs by 40% through AWS optimization
• Led team of 5 developers in successful product launches

💡 Core Expertise:
Cloud Architecture | Scalable Systems | Microservices | CI/CD | Agile Development

🔧 Tech Stack:
React, Node.js, TypeScript, AWS, Docker, Kubernetes, MongoDB, PostgreSQL

Always excited to tackle challenging problems and build innovative solutions that make a difference.";

#[async_trait(?Send)]
impl Backend for MockBackend {
    async fn sign_up(&self, request: SignUpRequest) -> Result<(), ApiError> {
        self.respond().await?;
        log::debug!("mock sign-up for {}", request.email);
        Ok(())
    }

    async fn sign_in(&self, request: SignInRequest) -> Result<Session, ApiError> {
        self.respond().await?;

        if request.email.eq_ignore_ascii_case(&self.admin_email) {
            return Ok(Session::Admin(AdminProfile {
                id: "admin-1".to_string(),
                email: request.email,
                name: "Administrator".to_string(),
                permissions: to_strings(&["*"]),
            }));
        }

        Ok(Session::User(UserProfile {
            id: Uuid::new_v4().to_string(),
            name: display_name(&request.email),
            email: request.email,
        }))
    }

    async fn verify_otp(&self, request: VerifyOtpRequest) -> Result<UserProfile, ApiError> {
        self.respond().await?;

        if request.otp == REJECTED_OTP {
            return Err(ApiError::Rejected(
                "Invalid verification code. Please try again.".to_string(),
            ));
        }
        Ok(UserProfile {
            id: Uuid::new_v4().to_string(),
            name: display_name(&request.email),
            email: request.email,
        })
    }

    async fn resend_otp(&self, email: &str) -> Result<(), ApiError> {
        self.respond().await?;
        log::debug!("mock OTP resent to {}", email);
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.respond().await?;
        log::debug!("mock reset link sent to {}", email);
        Ok(())
    }

    async fn complete_profile(&self, request: CompleteProfileRequest) -> Result<(), ApiError> {
        self.respond().await?;
        log::debug!("mock profile completed for {}", request.company_name);
        Ok(())
    }

    async fn run_profile_analysis(&self, request: AnalysisRequest) -> Result<AnalysisReport, ApiError> {
        self.simulate(self.analysis_delay).await?;
        log::debug!(
            "mock analysis for {} in {}",
            request.target.target_role,
            request.target.location
        );
        Ok(sample_report())
    }

    async fn create_checkout(&self, request: CheckoutRequest) -> Result<CheckoutSession, ApiError> {
        self.respond().await?;

        let session_id = format!("cs_test_{}", Uuid::new_v4().simple());
        let redirect_url = format!(
            "/user/payment/success?session_id={}&plan={}",
            session_id,
            request.plan.label()
        );
        Ok(CheckoutSession {
            session_id,
            redirect_url,
        })
    }

    async fn verify_checkout(&self, session_id: &str, plan: PlanTier) -> Result<CheckoutReceipt, ApiError> {
        self.respond().await?;

        if session_id.trim().is_empty() {
            return Err(ApiError::Rejected("Missing checkout session".to_string()));
        }
        Ok(CheckoutReceipt {
            transaction_id: session_id.to_string(),
            subscription: plan_offer(plan).activate(Utc::now()),
        })
    }

    async fn user_dashboard(&self) -> Result<UserDashboard, ApiError> {
        self.respond().await?;

        let now = Utc::now();
        let activity = |id: &str, kind: &str, description: &str, hours_ago: i64| ActivityEntry {
            id: id.to_string(),
            kind: kind.to_string(),
            description: description.to_string(),
            timestamp: now - ChronoDuration::hours(hours_ago),
        };

        Ok(UserDashboard {
            stats: UserDashboardStats {
                total_analyses: 12,
                linkedin_optimizations: 3,
                seo_score: 78,
                monthly_usage: 40,
            },
            recent_activity: vec![
                activity("a1", "linkedin", "LinkedIn profile analysis completed", 2),
                activity("a2", "subscription", "Subscribed to Premium", 26),
                activity("a3", "profile", "Business profile completed", 72),
            ],
        })
    }

    async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError> {
        self.respond().await?;

        let users = self.users.borrow();
        let revenue = self.payments.borrow().stats().total_revenue;
        Ok(AdminDashboard {
            stats: AdminDashboardStats {
                total_users: users.users().len() as u32,
                active_users: users.active_count() as u32,
                total_revenue: revenue,
                system_health: 98,
            },
            user_metrics: users
                .users()
                .iter()
                .map(|u| UserMetric {
                    id: u.id.clone(),
                    name: u.name.clone(),
                    email: u.email.clone(),
                    last_active: u.last_active,
                    subscription: u.subscription,
                })
                .collect(),
        })
    }

    async fn list_plans(&self) -> Result<Vec<PlanRecord>, ApiError> {
        self.respond().await?;
        Ok(self.plans.borrow().plans().to_vec())
    }

    async fn save_plan(&self, plan: PlanRecord) -> Result<PlanRecord, ApiError> {
        self.respond().await?;

        if plan.name.trim().is_empty() {
            return Err(ApiError::Rejected("Plan name is required".to_string()));
        }
        self.plans.borrow_mut().upsert(plan.clone());
        Ok(plan)
    }

    async fn delete_plan(&self, id: &str) -> Result<(), ApiError> {
        self.respond().await?;
        self.plans
            .borrow_mut()
            .delete(id)
            .map(|_| ())
            .map_err(|e| ApiError::Rejected(e.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<ManagedUser>, ApiError> {
        self.respond().await?;
        Ok(self.users.borrow().users().to_vec())
    }

    async fn set_user_suspended(&self, id: &str, suspended: bool) -> Result<(), ApiError> {
        self.respond().await?;
        self.users
            .borrow_mut()
            .set_suspended(id, suspended)
            .map_err(|e| ApiError::Rejected(e.to_string()))
    }

    async fn list_payments(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        self.respond().await?;
        Ok(self.payments.borrow().payments().to_vec())
    }

    async fn refund_payment(&self, id: &str) -> Result<PaymentRecord, ApiError> {
        self.respond().await?;
        self.payments
            .borrow_mut()
            .refund(id)
            .map(Clone::clone)
            .map_err(|e| ApiError::Rejected(e.to_string()))
    }
}
