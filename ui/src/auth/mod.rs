// Route guards
use crate::store::{use_stores, AdminAuthState, UserAuthState};
use crate::types::Role;
use leptos::*;
use leptos_router::Redirect;

pub const SIGN_IN_PATH: &str = "/signin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

/// The role a visitor is currently acting as. An admin session wins when
/// both stores are signed in.
pub fn current_role(user: &UserAuthState, admin: &AdminAuthState) -> Option<Role> {
    if admin.is_authenticated {
        Some(Role::Admin)
    } else if user.is_authenticated {
        Some(Role::User)
    } else {
        None
    }
}

/// Decides whether a page that needs `required` may render.
pub fn guard_access(user: &UserAuthState, admin: &AdminAuthState, required: Role) -> Access {
    let signed_in = match required {
        Role::User => user.is_authenticated,
        Role::Admin => admin.is_authenticated,
    };
    if signed_in {
        return Access::Allow;
    }

    match current_role(user, admin) {
        None => Access::Redirect(SIGN_IN_PATH),
        Some(role) => Access::Redirect(role.dashboard_path()),
    }
}

#[component]
pub fn AuthGuard(role: Role, children: ChildrenFn) -> impl IntoView {
    let stores = use_stores();
    let access = create_memo(move |_| {
        let user = stores.user_auth.get();
        let admin = stores.admin_auth.get();
        guard_access(&user, &admin, role)
    });

    move || match access.get() {
        Access::Allow => children().into_view(),
        Access::Redirect(path) => {
            log::debug!("guard for {:?} redirecting to {}", role, path);
            view! { <Redirect path=path/> }.into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AdminProfile, UserProfile};
    use pretty_assertions::assert_eq;

    fn signed_in_user() -> UserAuthState {
        UserAuthState {
            user: Some(UserProfile {
                id: "u-1".to_string(),
                email: "jane@example.com".to_string(),
                name: "Jane".to_string(),
            }),
            is_authenticated: true,
            ..UserAuthState::default()
        }
    }

    fn signed_in_admin() -> AdminAuthState {
        AdminAuthState {
            admin: Some(AdminProfile {
                id: "admin-1".to_string(),
                email: "admin@seomaster.pro".to_string(),
                name: "Administrator".to_string(),
                permissions: vec!["*".to_string()],
            }),
            is_authenticated: true,
            ..AdminAuthState::default()
        }
    }

    #[test]
    fn test_anonymous_visitors_go_to_sign_in() {
        let user = UserAuthState::default();
        let admin = AdminAuthState::default();
        assert_eq!(guard_access(&user, &admin, Role::User), Access::Redirect("/signin"));
        assert_eq!(guard_access(&user, &admin, Role::Admin), Access::Redirect("/signin"));
    }

    #[test]
    fn test_wrong_role_goes_to_own_dashboard() {
        let none_admin = AdminAuthState::default();
        assert_eq!(
            guard_access(&signed_in_user(), &none_admin, Role::Admin),
            Access::Redirect("/user/dashboard")
        );

        let none_user = UserAuthState::default();
        assert_eq!(
            guard_access(&none_user, &signed_in_admin(), Role::User),
            Access::Redirect("/admin/dashboard")
        );
    }

    #[test]
    fn test_matching_role_is_allowed() {
        let user = signed_in_user();
        let admin = signed_in_admin();
        assert_eq!(guard_access(&user, &AdminAuthState::default(), Role::User), Access::Allow);
        assert_eq!(guard_access(&UserAuthState::default(), &admin, Role::Admin), Access::Allow);
        assert_eq!(current_role(&user, &admin), Some(Role::Admin));
    }
}
