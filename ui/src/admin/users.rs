use super::AdminError;
use crate::types::{ManagedUser, PlanTier};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub search: String,
    pub subscription: Option<PlanTier>,
}

impl UserFilter {
    pub fn matches(&self, user: &ManagedUser) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || user.name.to_lowercase().contains(&needle)
            || user.email.to_lowercase().contains(&needle);

        matches_search && self.subscription.map_or(true, |tier| user.subscription == tier)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectory {
    users: Vec<ManagedUser>,
}

impl UserDirectory {
    pub fn new(users: Vec<ManagedUser>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[ManagedUser] {
        &self.users
    }

    pub fn filtered(&self, filter: &UserFilter) -> Vec<ManagedUser> {
        self.users
            .iter()
            .filter(|u| filter.matches(u))
            .cloned()
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.users.iter().filter(|u| !u.is_suspended).count()
    }

    /// Flips the suspension flag and returns the new value.
    pub fn toggle_suspended(&mut self, id: &str) -> Result<bool, AdminError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AdminError::NotFound(id.to_string()))?;
        user.is_suspended = !user.is_suspended;
        Ok(user.is_suspended)
    }

    pub fn set_suspended(&mut self, id: &str, suspended: bool) -> Result<(), AdminError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AdminError::NotFound(id.to_string()))?;
        user.is_suspended = suspended;
        Ok(())
    }
}

pub fn seed_users(now: DateTime<Utc>) -> Vec<ManagedUser> {
    let user = |id: &str, name: &str, email: &str, hours_ago: i64, tier: PlanTier| ManagedUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        last_active: now - Duration::hours(hours_ago),
        subscription: tier,
        is_suspended: false,
    };

    vec![
        user("101", "John Doe", "john@example.com", 2, PlanTier::Premium),
        user("102", "Jane Smith", "jane@example.com", 26, PlanTier::Basic),
        user("103", "Bob Wilson", "bob@example.com", 24 * 5, PlanTier::Free),
        user("104", "Alice Johnson", "alice@example.com", 6, PlanTier::Premium),
        user("105", "Charlie Brown", "charlie@example.com", 24 * 12, PlanTier::Basic),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn directory() -> UserDirectory {
        UserDirectory::new(seed_users(Utc.with_ymd_and_hms(2024, 12, 27, 12, 0, 0).unwrap()))
    }

    #[test]
    fn test_search_and_subscription_filter() {
        let dir = directory();

        let premium = UserFilter { subscription: Some(PlanTier::Premium), ..Default::default() };
        assert_eq!(dir.filtered(&premium).len(), 2);

        let search = UserFilter { search: "JANE@".to_string(), ..Default::default() };
        let found = dir.filtered(&search);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Jane Smith");

        let both = UserFilter {
            search: "john".to_string(),
            subscription: Some(PlanTier::Basic),
        };
        assert!(dir.filtered(&both).is_empty());
    }

    #[test]
    fn test_toggle_suspension() {
        let mut dir = directory();
        assert_eq!(dir.active_count(), 5);

        assert_eq!(dir.toggle_suspended("103"), Ok(true));
        assert_eq!(dir.active_count(), 4);
        assert_eq!(dir.toggle_suspended("103"), Ok(false));

        assert_eq!(
            dir.toggle_suspended("999"),
            Err(AdminError::NotFound("999".to_string()))
        );
    }
}
