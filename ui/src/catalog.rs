// Static product catalogue: subscription plans, SEO tools, add-on modules
use crate::types::{BillingCycle, PlanTier, Subscription, SubscriptionStatus};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOffer {
    pub tier: PlanTier,
    pub monthly_price: u32,
    pub yearly_price: u32,
    pub popular: bool,
    pub features: &'static [&'static str],
}

impl PlanOffer {
    pub fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    pub fn is_free(&self) -> bool {
        self.monthly_price == 0 && self.yearly_price == 0
    }

    /// Subscription record for this plan, active for the next 30 days.
    pub fn activate(&self, now: DateTime<Utc>) -> Subscription {
        Subscription {
            plan: self.tier,
            status: SubscriptionStatus::Active,
            expiry_date: now + Duration::days(30),
            features: self.features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

pub static PLAN_OFFERS: [PlanOffer; 4] = [
    PlanOffer {
        tier: PlanTier::Free,
        monthly_price: 0,
        yearly_price: 0,
        popular: false,
        features: &[
            "LinkedIn profile view",
            "Basic profile analysis",
            "1 optimization per month",
            "Community support",
        ],
    },
    PlanOffer {
        tier: PlanTier::Basic,
        monthly_price: 29,
        yearly_price: 290,
        popular: false,
        features: &[
            "Everything in Free",
            "Advanced profile analysis",
            "10 optimizations per month",
            "Keyword suggestions",
            "Email support",
        ],
    },
    PlanOffer {
        tier: PlanTier::Premium,
        monthly_price: 79,
        yearly_price: 790,
        popular: true,
        features: &[
            "Everything in Basic",
            "Unlimited optimizations",
            "AI-powered content suggestions",
            "Competitor analysis",
            "Priority support",
            "Export reports",
        ],
    },
    PlanOffer {
        tier: PlanTier::Enterprise,
        monthly_price: 199,
        yearly_price: 1990,
        popular: false,
        features: &[
            "Everything in Premium",
            "Team collaboration",
            "Custom integrations",
            "Dedicated account manager",
            "Advanced analytics",
            "White-label options",
        ],
    },
];

pub fn plan_offer(tier: PlanTier) -> &'static PlanOffer {
    match tier {
        PlanTier::Free => &PLAN_OFFERS[0],
        PlanTier::Basic => &PLAN_OFFERS[1],
        PlanTier::Premium => &PLAN_OFFERS[2],
        PlanTier::Enterprise => &PLAN_OFFERS[3],
    }
}

/// Plan named by a checkout return link. A missing label means Premium, an
/// unknown one yields `None`.
pub fn checkout_plan(label: Option<&str>) -> Option<PlanTier> {
    match label {
        None => Some(PlanTier::Premium),
        Some(label) => PlanTier::from_label(label),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolIcon {
    LinkedIn,
    MapPin,
    Badge,
    Star,
    YouTube,
    Video,
    Document,
    Globe,
    Bag,
}

impl ToolIcon {
    pub fn svg_path(self) -> &'static str {
        match self {
            ToolIcon::LinkedIn => "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
            ToolIcon::MapPin => "M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z",
            ToolIcon::Badge | ToolIcon::Globe => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z",
            ToolIcon::Star => "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ToolIcon::YouTube => "M23.498 6.186a3.016 3.016 0 0 0-2.122-2.136C19.505 3.545 12 3.545 12 3.545s-7.505 0-9.377.505A3.017 3.017 0 0 0 .502 6.186C0 8.07 0 12 0 12s0 3.93.502 5.814a3.016 3.016 0 0 0 2.122 2.136c1.871.505 9.376.505 9.376.505s7.505 0 9.377-.505a3.015 3.015 0 0 0 2.122-2.136C24 15.93 24 12 24 12s0-3.93-.502-5.814zM9.545 15.568V8.432L15.818 12l-6.273 3.568z",
            ToolIcon::Video => "M17 10.5V7a1 1 0 0 0-1-1H4a1 1 0 0 0-1 1v10a1 1 0 0 0 1 1h12a1 1 0 0 0 1-1v-3.5l4 4v-11l-4 4z",
            ToolIcon::Document => "M14,2H6A2,2 0 0,0 4,4V20A2,2 0 0,0 6,22H18A2,2 0 0,0 20,20V8L14,2M18,20H6V4H13V9H18V20Z",
            ToolIcon::Bag => "M7 4V2C7 1.45 7.45 1 8 1H16C16.55 1 17 1.45 17 2V4H20C20.55 4 21 4.45 21 5S20.55 6 20 6H19V19C19 20.1 18.1 21 17 21H7C5.9 21 5 20.1 5 19V6H4C3.45 6 3 5.55 3 5S3.45 4 4 4H7ZM9 3V4H15V3H9ZM7 6V19H17V6H7Z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeoTool {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: ToolIcon,
    /// `None` renders the card as "Coming Soon".
    pub route: Option<&'static str>,
}

impl SeoTool {
    pub fn is_available(&self) -> bool {
        self.route.is_some()
    }
}

pub const SEO_TOOLS: [SeoTool; 9] = [
    SeoTool {
        id: "linkedin-profile",
        name: "LinkedIn Profile Optimization",
        description: "Optimize your LinkedIn profile for better visibility",
        icon: ToolIcon::LinkedIn,
        route: Some("/user/linkedin-tool"),
    },
    SeoTool {
        id: "google-maps",
        name: "Google Maps SEO",
        description: "Optimize your local business presence",
        icon: ToolIcon::MapPin,
        route: None,
    },
    SeoTool {
        id: "social-profile",
        name: "Social Media Profile SEO",
        description: "Enhance your social profiles",
        icon: ToolIcon::Badge,
        route: None,
    },
    SeoTool {
        id: "social-post",
        name: "Social Media Post SEO",
        description: "Optimize your social content",
        icon: ToolIcon::Star,
        route: None,
    },
    SeoTool {
        id: "youtube-channel",
        name: "YouTube Channel SEO",
        description: "Grow your YouTube presence",
        icon: ToolIcon::YouTube,
        route: None,
    },
    SeoTool {
        id: "youtube-video",
        name: "YouTube Video SEO",
        description: "Optimize individual videos",
        icon: ToolIcon::Video,
        route: None,
    },
    SeoTool {
        id: "article",
        name: "Article SEO",
        description: "Perfect your blog content",
        icon: ToolIcon::Document,
        route: None,
    },
    SeoTool {
        id: "website",
        name: "Website SEO",
        description: "Complete website optimization",
        icon: ToolIcon::Globe,
        route: None,
    },
    SeoTool {
        id: "product",
        name: "Product SEO",
        description: "Boost product visibility",
        icon: ToolIcon::Bag,
        route: None,
    },
];

/// Paid add-ons offered on the last step of the LinkedIn optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtraModule {
    WeeklyPosting,
    Engagement,
    NetworkGrowth,
}

pub const BUNDLE_PRICE: u32 = 39;

impl ExtraModule {
    pub const ALL: [ExtraModule; 3] = [
        ExtraModule::WeeklyPosting,
        ExtraModule::Engagement,
        ExtraModule::NetworkGrowth,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ExtraModule::WeeklyPosting => "Weekly Posting AI",
            ExtraModule::Engagement => "Engagement AI",
            ExtraModule::NetworkGrowth => "Network Growth",
        }
    }

    pub fn monthly_price(self) -> u32 {
        match self {
            ExtraModule::WeeklyPosting => 19,
            ExtraModule::Engagement | ExtraModule::NetworkGrowth => 15,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExtraModule::WeeklyPosting => {
                "Get 5 AI-generated post ideas every week tailored to your industry and expertise."
            }
            ExtraModule::Engagement => {
                "AI-powered comment templates and daily engagement recommendations."
            }
            ExtraModule::NetworkGrowth => {
                "Strategic networking recommendations and personalized connection messages."
            }
        }
    }

    pub fn features(self) -> &'static [&'static str] {
        match self {
            ExtraModule::WeeklyPosting => &[
                "5 weekly post ideas based on trending topics",
                "Auto-generated posts with hooks and CTAs",
                "Industry-specific content calendar",
                "Engagement optimization suggestions",
            ],
            ExtraModule::Engagement => &[
                "Smart comment templates for different post types",
                "Daily list of posts to engage with",
                "Engagement analytics and tracking",
                "Relationship building strategies",
            ],
            ExtraModule::NetworkGrowth => &[
                "Daily top people to connect with in your industry",
                "Personalized connection request messages",
                "Follow-up message templates",
                "Network growth analytics",
            ],
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            ExtraModule::WeeklyPosting => "purple",
            ExtraModule::Engagement => "green",
            ExtraModule::NetworkGrowth => "blue",
        }
    }
}

/// Monthly saving when all modules are bought as a bundle.
pub fn bundle_savings() -> u32 {
    let separate: u32 = ExtraModule::ALL.iter().map(|m| m.monthly_price()).sum();
    separate.saturating_sub(BUNDLE_PRICE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_prices_follow_cycle() {
        let premium = plan_offer(PlanTier::Premium);
        assert_eq!(premium.price(BillingCycle::Monthly), 79);
        assert_eq!(premium.price(BillingCycle::Yearly), 790);
        assert!(premium.popular);

        assert!(plan_offer(PlanTier::Free).is_free());
        assert_eq!(plan_offer(PlanTier::Enterprise).price(BillingCycle::Yearly), 1990);
        assert_eq!(PLAN_OFFERS.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn test_checkout_plan_defaults_only_when_missing() {
        assert_eq!(checkout_plan(None), Some(PlanTier::Premium));
        assert_eq!(checkout_plan(Some("basic")), Some(PlanTier::Basic));
        assert_eq!(checkout_plan(Some("Enterprise")), Some(PlanTier::Enterprise));
        assert_eq!(checkout_plan(Some("Starter")), None);
        assert_eq!(checkout_plan(Some("")), None);
    }

    #[test]
    fn test_activate_runs_for_thirty_days() {
        let now = Utc::now();
        let subscription = plan_offer(PlanTier::Basic).activate(now);

        assert_eq!(subscription.plan, PlanTier::Basic);
        assert_eq!(subscription.status, SubscriptionStatus::Active);
        assert_eq!(subscription.expiry_date - now, Duration::days(30));
        assert_eq!(subscription.features.len(), 5);
    }

    #[test]
    fn test_only_linkedin_tool_is_live() {
        let live: Vec<_> = SEO_TOOLS.iter().filter(|t| t.is_available()).collect();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].route, Some("/user/linkedin-tool"));
        assert_eq!(SEO_TOOLS.len(), 9);
    }

    #[test]
    fn test_bundle_saves_ten_dollars() {
        assert_eq!(bundle_savings(), 10);
    }
}
