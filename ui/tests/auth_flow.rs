mod common;

use common::{backend, sign_up_form, ADMIN_EMAIL};
use leptos::create_runtime;
use pretty_assertions::assert_eq;
use seomaster_ui::api::{ApiError, Backend};
use seomaster_ui::auth::{current_role, guard_access, Access, SIGN_IN_PATH};
use seomaster_ui::otp::OtpBuffer;
use seomaster_ui::store::{AdminAuthAction, AppStores, UserAuthAction};
use seomaster_ui::types::{Role, Session, SignInRequest, VerifyOtpRequest};
use seomaster_ui::validation::schemas::{OtpForm, SignUpForm};
use seomaster_ui::validation::{parse, FormData};

fn access(stores: &AppStores, role: Role) -> Access {
    guard_access(&stores.user_auth.get_untracked(), &stores.admin_auth.get_untracked(), role)
}

#[test]
fn test_password_mismatch_is_reported_on_confirmation() {
    let data = sign_up_form().with_text("confirmPassword", "different");

    let errors = parse::<SignUpForm>(&data).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("confirmPassword"), Some("Passwords don't match"));
    assert_eq!(errors.get("password"), None);
}

#[tokio::test]
async fn test_sign_up_then_otp_signs_the_user_in() {
    let runtime = create_runtime();
    let backend = backend();
    let stores = AppStores::new();

    let form = parse::<SignUpForm>(&sign_up_form()).unwrap();
    let email = form.email.clone();
    backend.sign_up(form.into()).await.unwrap();
    stores.user_auth.dispatch(UserAuthAction::SetPendingEmail(Some(email.clone())));
    assert_eq!(access(&stores, Role::User), Access::Redirect(SIGN_IN_PATH));

    let mut buffer = OtpBuffer::default();
    let completions: Vec<String> = "123456"
        .chars()
        .enumerate()
        .filter_map(|(i, digit)| buffer.input(i, &digit.to_string()))
        .collect();
    assert_eq!(completions, vec!["123456".to_string()]);

    let otp = parse::<OtpForm>(&FormData::new().with_text("otp", &completions[0])).unwrap();
    let user = backend
        .verify_otp(VerifyOtpRequest { email: email.clone(), otp: otp.otp })
        .await
        .unwrap();
    assert_eq!(user.email, email);
    assert_eq!(user.name, "Jane");

    stores.user_auth.dispatch(UserAuthAction::SetUser(Some(user)));
    stores.user_auth.dispatch(UserAuthAction::SetPendingEmail(None));
    assert_eq!(access(&stores, Role::User), Access::Allow);
    assert_eq!(access(&stores, Role::Admin), Access::Redirect("/user/dashboard"));

    runtime.dispose();
}

#[tokio::test]
async fn test_rejected_code_keeps_visitor_signed_out() {
    let backend = backend();

    let err = backend
        .verify_otp(VerifyOtpRequest {
            email: "jane@example.com".to_string(),
            otp: "000000".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
    assert_eq!(err.user_message(), "Invalid verification code. Please try again.");
}

#[tokio::test]
async fn test_admin_email_opens_admin_session() {
    let runtime = create_runtime();
    let backend = backend();
    let stores = AppStores::new();

    let session = backend
        .sign_in(SignInRequest {
            email: ADMIN_EMAIL.to_string(),
            password: "secret1".to_string(),
            remember_me: false,
        })
        .await
        .unwrap();
    assert_eq!(session.role(), Role::Admin);
    let Session::Admin(admin) = session else {
        panic!("expected an admin session");
    };
    stores.admin_auth.dispatch(AdminAuthAction::SetAdmin(Some(admin)));

    let role = current_role(&stores.user_auth.get_untracked(), &stores.admin_auth.get_untracked());
    assert_eq!(role, Some(Role::Admin));
    assert_eq!(access(&stores, Role::Admin), Access::Allow);
    assert_eq!(access(&stores, Role::User), Access::Redirect("/admin/dashboard"));

    stores.logout();
    assert_eq!(access(&stores, Role::Admin), Access::Redirect(SIGN_IN_PATH));

    runtime.dispose();
}
