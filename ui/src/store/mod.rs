// Global state containers
//
// Each slice is a plain record with a pure reducer. `Store<S>` wraps the
// record in a signal so views re-render when an action lands.
use leptos::*;

pub mod admin_auth;
pub mod admin_dashboard;
pub mod linkedin;
pub mod payment;
pub mod seo;
pub mod user_auth;
pub mod user_dashboard;

pub use admin_auth::{AdminAuthAction, AdminAuthState};
pub use admin_dashboard::{AdminDashboardAction, AdminDashboardState};
pub use linkedin::{LinkedInAction, LinkedInState};
pub use payment::{PaymentAction, PaymentState};
pub use seo::{SeoAction, SeoState};
pub use user_auth::{UserAuthAction, UserAuthState};
pub use user_dashboard::{UserDashboardAction, UserDashboardState};

pub trait Reducer: Clone + 'static {
    type Action;

    fn reduce(&mut self, action: Self::Action);
}

pub struct Store<S: 'static> {
    state: RwSignal<S>,
}

impl<S: 'static> Clone for Store<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for Store<S> {}

impl<S: Reducer> Store<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: create_rw_signal(initial),
        }
    }

    pub fn dispatch(&self, action: S::Action) {
        self.state.update(|state| state.reduce(action));
    }

    pub fn get(&self) -> S {
        self.state.get()
    }

    pub fn get_untracked(&self) -> S {
        self.state.get_untracked()
    }

    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.state.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.state.with_untracked(f)
    }

    pub fn signal(&self) -> ReadSignal<S> {
        self.state.read_only()
    }
}

#[derive(Clone, Copy)]
pub struct AppStores {
    pub user_auth: Store<UserAuthState>,
    pub admin_auth: Store<AdminAuthState>,
    pub user_dashboard: Store<UserDashboardState>,
    pub admin_dashboard: Store<AdminDashboardState>,
    pub linkedin: Store<LinkedInState>,
    pub payment: Store<PaymentState>,
    pub seo: Store<SeoState>,
}

impl AppStores {
    pub fn new() -> Self {
        Self {
            user_auth: Store::new(UserAuthState::default()),
            admin_auth: Store::new(AdminAuthState::default()),
            user_dashboard: Store::new(UserDashboardState::default()),
            admin_dashboard: Store::new(AdminDashboardState::default()),
            linkedin: Store::new(LinkedInState::default()),
            payment: Store::new(PaymentState::default()),
            seo: Store::new(SeoState::default()),
        }
    }

    /// Signs out whichever role is active.
    pub fn logout(&self) {
        self.user_auth.dispatch(UserAuthAction::Logout);
        self.admin_auth.dispatch(AdminAuthAction::Logout);
        self.linkedin.dispatch(LinkedInAction::ClearProfile);
        self.seo.dispatch(SeoAction::ClearAnalysis);
        log::info!("session cleared");
    }
}

impl Default for AppStores {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_stores() -> AppStores {
    let stores = AppStores::new();
    provide_context(stores);
    stores
}

pub fn use_stores() -> AppStores {
    expect_context::<AppStores>()
}
