use crate::api::use_backend;
use crate::components::buttons::{Button, ButtonVariant};
use crate::components::forms::{CheckboxField, CheckboxGroup, FormState, SelectField, TextAreaField, TextField};
use crate::components::layout::AuthLayout;
use crate::components::notifications::{Alert, AlertKind};
use crate::components::otp_input::OtpInput;
use crate::config::use_config;
use crate::controller::SubmitState;
use crate::otp::{Countdown, OtpBuffer};
use crate::store::{use_stores, AdminAuthAction, UserAuthAction};
use crate::timer::{ScheduledCallback, TaskScope};
use crate::types::{Session, VerifyOtpRequest};
use crate::validation::schemas::*;
use crate::validation::{parse, FormData};
use leptos::*;
use leptos_router::*;

#[component]
pub fn SignInPage() -> impl IntoView {
    let stores = use_stores();
    let backend = use_backend();
    let navigate = use_navigate();
    let scope = TaskScope::new();
    let submit = SubmitState::new();
    let form = FormState::new(FormData::new().with_flag("rememberMe", false));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.submit::<SignInForm>() else {
            return;
        };

        let backend = backend.clone();
        let navigate = navigate.clone();
        scope.spawn(async move {
            let Some(session) = submit.run("sign-in", backend.sign_in(credentials.into())).await else {
                return;
            };
            let role = session.role();
            match session {
                Session::User(user) => stores.user_auth.dispatch(UserAuthAction::SetUser(Some(user))),
                Session::Admin(admin) => stores.admin_auth.dispatch(AdminAuthAction::SetAdmin(Some(admin))),
            }
            navigate(role.dashboard_path(), Default::default());
        });
    };

    view! {
        <AuthLayout title="Welcome back" subtitle="Sign in to your SEO Master Pro account">
            <form class="space-y-6" on:submit=on_submit novalidate>
                <Alert message=submit.error/>
                <TextField form=form name="email" label="Email" input_type="email" placeholder="Enter your email"/>
                <TextField form=form name="password" label="Password" input_type="password" placeholder="Enter your password"/>
                <div class="flex items-center justify-between">
                    <CheckboxField form=form name="rememberMe" label="Remember me"/>
                    <A href="/forgot-password" class="text-sm font-medium text-blue-600 hover:text-blue-500">
                        "Forgot password?"
                    </A>
                </div>
                <Button button_type="submit" full_width=true loading=submit.loading loading_text="Signing in...">
                    "Sign In"
                </Button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-600">
                "Don't have an account? "
                <A href="/signup" class="font-medium text-blue-600 hover:text-blue-500">"Sign up"</A>
            </p>
        </AuthLayout>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let stores = use_stores();
    let backend = use_backend();
    let navigate = use_navigate();
    let scope = TaskScope::new();
    let submit = SubmitState::new();
    let form = FormState::new(FormData::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(details) = form.submit::<SignUpForm>() else {
            return;
        };

        let backend = backend.clone();
        let navigate = navigate.clone();
        scope.spawn(async move {
            let email = details.email.clone();
            if submit.run("sign-up", backend.sign_up(details.into())).await.is_some() {
                stores.user_auth.dispatch(UserAuthAction::SetPendingEmail(Some(email)));
                navigate("/otp", Default::default());
            }
        });
    };

    view! {
        <AuthLayout title="Create your account" subtitle="Start optimizing your online presence today">
            <form class="space-y-5" on:submit=on_submit novalidate>
                <Alert message=submit.error/>
                <TextField form=form name="username" label="Username" placeholder="Enter your username" required=true/>
                <TextField form=form name="fullName" label="Full Name" placeholder="Enter your full name" required=true/>
                <TextField form=form name="email" label="Email" input_type="email" placeholder="Enter your email" required=true/>
                <TextField form=form name="contact" label="Contact (Optional)" input_type="tel" placeholder="Enter your contact number"/>
                <TextField form=form name="password" label="Password" input_type="password" placeholder="Enter your password" required=true/>
                <TextField form=form name="confirmPassword" label="Confirm Password" input_type="password" placeholder="Confirm your password" required=true/>
                <SelectField form=form name="hearAboutUs" label="How did you hear about us?" options=HEAR_ABOUT_US_OPTIONS required=true/>
                <TextField form=form name="referralCode" label="Referral Code (Optional)" placeholder="Enter referral code if any"/>
                <Button button_type="submit" full_width=true loading=submit.loading loading_text="Creating account...">
                    "Create Account"
                </Button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-600">
                "Already have an account? "
                <A href="/signin" class="font-medium text-blue-600 hover:text-blue-500">"Sign in"</A>
            </p>
        </AuthLayout>
    }
}

#[component]
pub fn OtpPage() -> impl IntoView {
    let stores = use_stores();
    let backend = use_backend();
    let config = use_config();
    let navigate = use_navigate();
    let scope = TaskScope::new();
    let verify = SubmitState::new();
    let resend = SubmitState::new();
    let notice = create_rw_signal(None::<String>);

    let email = stores
        .user_auth
        .with_untracked(|s| s.pending_email.clone())
        .unwrap_or_else(|| "your email".to_string());
    let email = store_value(email);

    let buffer = create_rw_signal(OtpBuffer::default());
    let countdown = create_rw_signal(Countdown::new(config.otp_resend_seconds));
    let ticker = ScheduledCallback::new();

    let start_countdown = {
        let ticker = ticker.clone();
        move || {
            countdown.update(Countdown::reset);
            let handle = ticker.clone();
            ticker.schedule_repeating(1000, move || {
                let finished = countdown.try_update(Countdown::tick).unwrap_or(true);
                if finished {
                    handle.cancel();
                }
            });
        }
    };
    start_countdown();

    let verify_code = Callback::new({
        let backend = backend.clone();
        let navigate = navigate.clone();
        move |code: String| {
            let Ok(form) = parse::<OtpForm>(&FormData::new().with_text("otp", code)) else {
                verify.error.set(Some("Please enter the 6-digit code".to_string()));
                return;
            };
            if verify.loading.get_untracked() {
                return;
            }

            let backend = backend.clone();
            let navigate = navigate.clone();
            scope.spawn(async move {
                let request = VerifyOtpRequest {
                    email: email.get_value(),
                    otp: form.otp,
                };
                match verify.run("verify-otp", backend.verify_otp(request)).await {
                    Some(user) => {
                        stores.user_auth.dispatch(UserAuthAction::SetUser(Some(user)));
                        stores.user_auth.dispatch(UserAuthAction::SetPendingEmail(None));
                        navigate("/complete-profile", Default::default());
                    }
                    None => buffer.update(OtpBuffer::clear),
                }
            });
        }
    });

    let on_resend = move |_: ev::MouseEvent| {
        let backend = backend.clone();
        let restart = start_countdown.clone();
        scope.spawn(async move {
            let address = email.get_value();
            if resend.run("resend-otp", backend.resend_otp(&address)).await.is_some() {
                buffer.update(OtpBuffer::clear);
                restart();
                notice.set(Some(format!("A new code has been sent to {}", address)));
            }
        });
    };

    view! {
        <AuthLayout title="Verify your email" subtitle="We've sent a 6-digit verification code to">
            <p class="-mt-4 mb-6 text-center font-medium text-blue-600">{email.get_value()}</p>
            <div class="space-y-6">
                <Alert message=verify.error/>
                <Alert message=resend.error/>
                <Alert message=notice kind=AlertKind::Success/>
                <OtpInput buffer=buffer on_complete=verify_code disabled=verify.loading/>
                <Button
                    full_width=true
                    loading=verify.loading
                    loading_text="Verifying..."
                    disabled=Signal::derive(move || !buffer.with(OtpBuffer::is_filled))
                    on_click=move |_: ev::MouseEvent| verify_code.call(buffer.with_untracked(OtpBuffer::value))
                >
                    "Verify Code"
                </Button>
                <div class="text-center text-sm text-gray-600">
                    <Show
                        when=move || countdown.with(Countdown::can_resend)
                        fallback=move || view! {
                            <p>"Resend code in " <span class="font-medium">{move || countdown.with(Countdown::label)}</span></p>
                        }
                    >
                        <Button
                            variant=ButtonVariant::Secondary
                            loading=resend.loading
                            loading_text="Resending..."
                            on_click=on_resend.clone()
                        >
                            "Resend Code"
                        </Button>
                    </Show>
                </div>
                <p class="text-center text-sm text-gray-600">
                    "Wrong email? "
                    <A href="/signup" class="font-medium text-blue-600 hover:text-blue-500">"Go back to sign up"</A>
                </p>
            </div>
        </AuthLayout>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let backend = use_backend();
    let scope = TaskScope::new();
    let submit = SubmitState::new();
    let form = FormState::new(FormData::new());
    let sent_to = create_rw_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.submit::<ForgotPasswordForm>() else {
            return;
        };

        let backend = backend.clone();
        scope.spawn(async move {
            if submit
                .run("password-reset", backend.request_password_reset(&request.email))
                .await
                .is_some()
            {
                sent_to.set(Some(request.email));
            }
        });
    };

    view! {
        <AuthLayout title="Forgot your password?" subtitle="Enter your email and we'll send you a reset link">
            <Show
                when=move || sent_to.with(Option::is_some)
                fallback=move || view! {
                    <form class="space-y-6" on:submit=on_submit.clone() novalidate>
                        <Alert message=submit.error/>
                        <TextField form=form name="email" label="Email Address" input_type="email" placeholder="Enter your email address"/>
                        <Button button_type="submit" full_width=true loading=submit.loading loading_text="Sending...">
                            "Send Reset Link"
                        </Button>
                    </form>
                }
            >
                <div class="text-center space-y-4">
                    <h3 class="text-xl font-semibold text-gray-900">"Check Your Email"</h3>
                    <p class="text-sm text-gray-600">
                        "We've sent a password reset link to "
                        <span class="font-medium">{move || sent_to.get().unwrap_or_default()}</span>
                    </p>
                    <Button variant=ButtonVariant::Secondary full_width=true on_click=move |_: ev::MouseEvent| sent_to.set(None)>
                        "Resend Email"
                    </Button>
                </div>
            </Show>
            <p class="mt-6 text-center text-sm text-gray-600">
                <A href="/signin" class="font-medium text-blue-600 hover:text-blue-500">"Back to Sign In"</A>
            </p>
        </AuthLayout>
    }
}

#[component]
pub fn CompleteProfilePage() -> impl IntoView {
    let backend = use_backend();
    let navigate = use_navigate();
    let scope = TaskScope::new();
    let submit = SubmitState::new();
    let form = FormState::new(FormData::new().with_list("seoChallenges", Vec::<String>::new()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(profile) = form.submit::<CompleteProfileForm>() else {
            return;
        };

        let backend = backend.clone();
        let navigate = navigate.clone();
        scope.spawn(async move {
            if submit.run("complete-profile", backend.complete_profile(profile.into())).await.is_some() {
                navigate("/user/dashboard", Default::default());
            }
        });
    };

    view! {
        <AuthLayout title="Complete your profile" subtitle="Help us personalize your SEO experience">
            <form class="space-y-8" on:submit=on_submit novalidate>
                <Alert message=submit.error/>
                <section class="space-y-4">
                    <div>
                        <h3 class="text-lg font-semibold text-gray-900">"Business Information"</h3>
                        <p class="text-sm text-gray-600 mt-1">"Tell us about your business"</p>
                    </div>
                    <TextField form=form name="companyName" label="Company/Website Name" placeholder="Enter your company or website name" required=true/>
                    <SelectField form=form name="industry" label="Industry" options=INDUSTRY_OPTIONS placeholder="Select your industry" required=true/>
                    <TextField form=form name="targetAudienceLocation" label="Target Audience Location" placeholder="e.g., United States, Global, etc." required=true/>
                </section>
                <section class="space-y-4">
                    <div>
                        <h3 class="text-lg font-semibold text-gray-900">"SEO Goals"</h3>
                        <p class="text-sm text-gray-600 mt-1">"Help us understand your SEO objectives"</p>
                    </div>
                    <SelectField form=form name="primarySeoGoal" label="Primary SEO Goal" options=SEO_GOAL_OPTIONS placeholder="Select your main goal" required=true/>
                    <SelectField form=form name="currentSeoExperience" label="Current SEO Experience Level" options=SEO_EXPERIENCE_OPTIONS placeholder="Select your level" required=true/>
                    <TextAreaField form=form name="mainCompetitors" label="Main Competitors (Optional)" placeholder="List your main competitors' websites..."/>
                </section>
                <section class="space-y-2">
                    <CheckboxGroup form=form name="seoChallenges" label="Current SEO Challenges" options=SEO_CHALLENGE_OPTIONS/>
                    <p class="text-sm text-gray-600">"Select all that apply"</p>
                </section>
                <Button button_type="submit" full_width=true loading=submit.loading loading_text="Saving...">
                    "Complete Profile"
                </Button>
            </form>
        </AuthLayout>
    }
}
