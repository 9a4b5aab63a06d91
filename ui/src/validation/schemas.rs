// Form schemas for the authentication and onboarding flows
use super::{FormData, FormSchema, Rule, Schema};
use crate::types::{CompleteProfileRequest, SignInRequest, SignUpRequest};
use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("username pattern is valid"));
static OTP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}$").expect("otp pattern is valid"));

const EMAIL_MESSAGE: &str = "Please enter a valid email address";

pub const HEAR_ABOUT_US_OPTIONS: &[(&str, &str)] = &[
    ("google", "Google Search"),
    ("social", "Social Media"),
    ("friend", "Friend/Colleague"),
    ("advertisement", "Advertisement"),
    ("other", "Other"),
];

pub const INDUSTRY_OPTIONS: &[(&str, &str)] = &[
    ("technology", "Technology"),
    ("healthcare", "Healthcare"),
    ("finance", "Finance"),
    ("education", "Education"),
    ("retail", "Retail & E-commerce"),
    ("real-estate", "Real Estate"),
    ("hospitality", "Hospitality & Travel"),
    ("manufacturing", "Manufacturing"),
    ("consulting", "Consulting"),
    ("non-profit", "Non-profit"),
    ("other", "Other"),
];

pub const SEO_GOAL_OPTIONS: &[(&str, &str)] = &[
    ("increase-traffic", "Increase organic traffic"),
    ("improve-rankings", "Improve search rankings"),
    ("local-seo", "Improve local SEO visibility"),
    ("brand-awareness", "Build brand awareness"),
    ("lead-generation", "Generate more leads"),
    ("sales-conversion", "Increase sales conversions"),
    ("competitor-analysis", "Analyze competitors"),
    ("other", "Other"),
];

pub const SEO_EXPERIENCE_OPTIONS: &[(&str, &str)] = &[
    ("beginner", "Beginner (0-1 years)"),
    ("intermediate", "Intermediate (1-3 years)"),
    ("advanced", "Advanced (3-5 years)"),
    ("expert", "Expert (5+ years)"),
];

pub const SEO_CHALLENGE_OPTIONS: &[(&str, &str)] = &[
    ("low-traffic", "Low organic traffic"),
    ("poor-rankings", "Poor search rankings"),
    ("technical-seo", "Technical SEO issues"),
    ("content-optimization", "Content optimization"),
    ("local-seo", "Local SEO visibility"),
    ("keyword-research", "Keyword research"),
    ("competitor-analysis", "Competitor analysis"),
    ("link-building", "Link building"),
];

static SIGN_UP: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            "username",
            vec![
                Rule::MinLength(3, "Username must be at least 3 characters"),
                Rule::MaxLength(20, "Username must be less than 20 characters"),
                Rule::Pattern(
                    &USERNAME_RE,
                    "Username can only contain letters, numbers, and underscores",
                ),
            ],
        )
        .field(
            "fullName",
            vec![
                Rule::MinLength(2, "Full name must be at least 2 characters"),
                Rule::MaxLength(50, "Full name must be less than 50 characters"),
            ],
        )
        .field("email", vec![Rule::Email(EMAIL_MESSAGE)])
        .optional("contact", vec![])
        .field(
            "password",
            vec![
                Rule::MinLength(6, "Password must be at least 6 characters"),
                Rule::MaxLength(100, "Password must be less than 100 characters"),
            ],
        )
        .field(
            "confirmPassword",
            vec![Rule::EqualsField("password", "Passwords don't match")],
        )
        .field(
            "hearAboutUs",
            vec![Rule::Required("Please select how you heard about us")],
        )
        .optional("referralCode", vec![])
});

static SIGN_IN: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("email", vec![Rule::Email(EMAIL_MESSAGE)])
        .field(
            "password",
            vec![Rule::MinLength(6, "Password must be at least 6 characters")],
        )
        .optional("rememberMe", vec![])
});

static OTP: Lazy<Schema> = Lazy::new(|| {
    Schema::new().field(
        "otp",
        vec![Rule::Pattern(&OTP_RE, "Please enter the 6-digit code")],
    )
});

static FORGOT_PASSWORD: Lazy<Schema> =
    Lazy::new(|| Schema::new().field("email", vec![Rule::Email(EMAIL_MESSAGE)]));

static COMPLETE_PROFILE: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            "companyName",
            vec![
                Rule::MinLength(2, "Company name must be at least 2 characters"),
                Rule::MaxLength(100, "Company name must be less than 100 characters"),
            ],
        )
        .field("industry", vec![Rule::Required("Please select your industry")])
        .field(
            "targetAudienceLocation",
            vec![
                Rule::MinLength(2, "Please specify your target audience location"),
                Rule::MaxLength(100, "Location must be less than 100 characters"),
            ],
        )
        .field(
            "primarySeoGoal",
            vec![Rule::Required("Please select your primary SEO goal")],
        )
        .field(
            "currentSeoExperience",
            vec![Rule::Required("Please select your SEO experience level")],
        )
        .optional("mainCompetitors", vec![])
        .field(
            "seoChallenges",
            vec![Rule::MinItems(1, "Please select at least one SEO challenge")],
        )
});

#[derive(Debug, Clone, PartialEq)]
pub struct SignUpForm {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub contact: Option<String>,
    pub password: String,
    pub hear_about_us: String,
    pub referral_code: Option<String>,
}

impl FormSchema for SignUpForm {
    fn schema() -> &'static Schema {
        &SIGN_UP
    }

    fn from_form(data: &FormData) -> Self {
        Self {
            username: data.text("username").to_string(),
            full_name: data.text("fullName").to_string(),
            email: data.text("email").to_string(),
            contact: data.optional_text("contact"),
            password: data.text("password").to_string(),
            hear_about_us: data.text("hearAboutUs").to_string(),
            referral_code: data.optional_text("referralCode"),
        }
    }
}

impl From<SignUpForm> for SignUpRequest {
    fn from(form: SignUpForm) -> Self {
        Self {
            username: form.username,
            full_name: form.full_name,
            email: form.email,
            contact: form.contact,
            password: form.password,
            hear_about_us: form.hear_about_us,
            referral_code: form.referral_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl FormSchema for SignInForm {
    fn schema() -> &'static Schema {
        &SIGN_IN
    }

    fn from_form(data: &FormData) -> Self {
        Self {
            email: data.text("email").to_string(),
            password: data.text("password").to_string(),
            remember_me: data.flag("rememberMe"),
        }
    }
}

impl From<SignInForm> for SignInRequest {
    fn from(form: SignInForm) -> Self {
        Self {
            email: form.email,
            password: form.password,
            remember_me: form.remember_me,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OtpForm {
    pub otp: String,
}

impl FormSchema for OtpForm {
    fn schema() -> &'static Schema {
        &OTP
    }

    fn from_form(data: &FormData) -> Self {
        Self {
            otp: data.text("otp").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl FormSchema for ForgotPasswordForm {
    fn schema() -> &'static Schema {
        &FORGOT_PASSWORD
    }

    fn from_form(data: &FormData) -> Self {
        Self {
            email: data.text("email").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteProfileForm {
    pub company_name: String,
    pub industry: String,
    pub target_audience_location: String,
    pub primary_seo_goal: String,
    pub current_seo_experience: String,
    pub main_competitors: Option<String>,
    pub seo_challenges: Vec<String>,
}

impl FormSchema for CompleteProfileForm {
    fn schema() -> &'static Schema {
        &COMPLETE_PROFILE
    }

    fn from_form(data: &FormData) -> Self {
        Self {
            company_name: data.text("companyName").to_string(),
            industry: data.text("industry").to_string(),
            target_audience_location: data.text("targetAudienceLocation").to_string(),
            primary_seo_goal: data.text("primarySeoGoal").to_string(),
            current_seo_experience: data.text("currentSeoExperience").to_string(),
            main_competitors: data.optional_text("mainCompetitors"),
            seo_challenges: data.list("seoChallenges").to_vec(),
        }
    }
}

impl From<CompleteProfileForm> for CompleteProfileRequest {
    fn from(form: CompleteProfileForm) -> Self {
        Self {
            company_name: form.company_name,
            industry: form.industry,
            target_audience_location: form.target_audience_location,
            primary_seo_goal: form.primary_seo_goal,
            current_seo_experience: form.current_seo_experience,
            main_competitors: form.main_competitors,
            seo_challenges: form.seo_challenges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::parse;
    use pretty_assertions::assert_eq;

    fn valid_sign_up() -> FormData {
        FormData::new()
            .with_text("username", "jane_doe")
            .with_text("fullName", "Jane Doe")
            .with_text("email", "jane@example.com")
            .with_text("contact", "")
            .with_text("password", "secret1")
            .with_text("confirmPassword", "secret1")
            .with_text("hearAboutUs", "google")
            .with_text("referralCode", "")
    }

    #[test]
    fn test_sign_up_accepts_valid_input() {
        let form: SignUpForm = parse(&valid_sign_up()).unwrap();
        assert_eq!(form.username, "jane_doe");
        assert_eq!(form.contact, None);
        assert_eq!(form.referral_code, None);
    }

    #[test]
    fn test_sign_up_password_mismatch_lands_on_confirm_password() {
        let data = valid_sign_up().with_text("confirmPassword", "secret2");
        let errors = parse::<SignUpForm>(&data).unwrap_err();

        assert_eq!(errors.get("confirmPassword"), Some("Passwords don't match"));
        assert!(!errors.contains("password"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_sign_up_username_rules_in_order() {
        let short = valid_sign_up().with_text("username", "a!");
        assert_eq!(
            parse::<SignUpForm>(&short).unwrap_err().get("username"),
            Some("Username must be at least 3 characters")
        );

        let symbols = valid_sign_up().with_text("username", "jane-doe");
        assert_eq!(
            parse::<SignUpForm>(&symbols).unwrap_err().get("username"),
            Some("Username can only contain letters, numbers, and underscores")
        );

        let long = valid_sign_up().with_text("username", "a".repeat(21));
        assert_eq!(
            parse::<SignUpForm>(&long).unwrap_err().get("username"),
            Some("Username must be less than 20 characters")
        );
    }

    #[test]
    fn test_sign_up_requires_referral_source() {
        let data = valid_sign_up().with_text("hearAboutUs", "");
        assert_eq!(
            parse::<SignUpForm>(&data).unwrap_err().get("hearAboutUs"),
            Some("Please select how you heard about us")
        );
    }

    #[test]
    fn test_sign_in_remember_me_is_optional() {
        let data = FormData::new()
            .with_text("email", "jane@example.com")
            .with_text("password", "secret1");
        let form: SignInForm = parse(&data).unwrap();
        assert!(!form.remember_me);

        let bad = data.with_text("password", "123");
        assert_eq!(
            parse::<SignInForm>(&bad).unwrap_err().get("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_otp_requires_six_digits() {
        for code in ["12345", "1234567", "12a456", ""] {
            let data = FormData::new().with_text("otp", code);
            assert_eq!(
                parse::<OtpForm>(&data).unwrap_err().get("otp"),
                Some("Please enter the 6-digit code"),
                "code {:?}",
                code
            );
        }
        assert!(parse::<OtpForm>(&FormData::new().with_text("otp", "123456")).is_ok());
    }

    #[test]
    fn test_forgot_password_email() {
        let errors = parse::<ForgotPasswordForm>(&FormData::new().with_text("email", "nope"))
            .unwrap_err();
        assert_eq!(errors.get("email"), Some(EMAIL_MESSAGE));
    }

    #[test]
    fn test_complete_profile_needs_a_challenge() {
        let data = FormData::new()
            .with_text("companyName", "Acme")
            .with_text("industry", "technology")
            .with_text("targetAudienceLocation", "Global")
            .with_text("primarySeoGoal", "increase-traffic")
            .with_text("currentSeoExperience", "beginner")
            .with_list("seoChallenges", Vec::<String>::new());

        let errors = parse::<CompleteProfileForm>(&data).unwrap_err();
        assert_eq!(
            errors.get("seoChallenges"),
            Some("Please select at least one SEO challenge")
        );

        let data = data.with_list("seoChallenges", ["link-building"]);
        let form: CompleteProfileForm = parse(&data).unwrap();
        assert_eq!(form.seo_challenges, vec!["link-building".to_string()]);
        assert_eq!(form.main_competitors, None);
    }
}
