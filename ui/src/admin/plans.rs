use super::AdminError;
use crate::types::PlanRecord;

/// Input of the "Add New Plan" modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPlan {
    pub name: String,
    pub monthly_price: u32,
    pub yearly_price: u32,
    pub max_optimizations: i32,
    pub features: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanTable {
    plans: Vec<PlanRecord>,
    editing: Option<PlanRecord>,
}

impl PlanTable {
    pub fn new(plans: Vec<PlanRecord>) -> Self {
        Self {
            plans,
            editing: None,
        }
    }

    pub fn plans(&self) -> &[PlanRecord] {
        &self.plans
    }

    pub fn get(&self, id: &str) -> Option<&PlanRecord> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn editing(&self) -> Option<&PlanRecord> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|p| p.id == id)
    }

    /// Opens the inline editor on a copy of the row.
    pub fn begin_edit(&mut self, id: &str) -> Result<(), AdminError> {
        let plan = self
            .get(id)
            .cloned()
            .ok_or_else(|| AdminError::NotFound(id.to_string()))?;
        self.editing = Some(plan);
        Ok(())
    }

    pub fn update_edit(&mut self, f: impl FnOnce(&mut PlanRecord)) {
        if let Some(form) = self.editing.as_mut() {
            f(form);
        }
    }

    /// Writes the edit form back into its row and returns the saved plan.
    pub fn save(&mut self) -> Result<PlanRecord, AdminError> {
        let Some(form) = self.editing.take() else {
            return Err(AdminError::NotFound(String::new()));
        };
        if form.name.trim().is_empty() {
            let id = form.id.clone();
            self.editing = Some(form);
            log::warn!("refusing to save plan {} without a name", id);
            return Err(AdminError::EmptyPlanName);
        }

        let row = self
            .plans
            .iter_mut()
            .find(|p| p.id == form.id)
            .ok_or_else(|| AdminError::NotFound(form.id.clone()))?;
        *row = form.clone();
        Ok(form)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn toggle_active(&mut self, id: &str) -> Result<&PlanRecord, AdminError> {
        let plan = self
            .plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AdminError::NotFound(id.to_string()))?;
        plan.is_active = !plan.is_active;
        Ok(plan)
    }

    pub fn delete(&mut self, id: &str) -> Result<PlanRecord, AdminError> {
        let index = self
            .plans
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AdminError::NotFound(id.to_string()))?;
        if self.is_editing(id) {
            self.editing = None;
        }
        Ok(self.plans.remove(index))
    }

    pub fn add(&mut self, new_plan: NewPlan) -> Result<PlanRecord, AdminError> {
        let name = new_plan.name.trim();
        if name.is_empty() {
            return Err(AdminError::EmptyPlanName);
        }

        let plan = PlanRecord {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            monthly_price: new_plan.monthly_price,
            yearly_price: new_plan.yearly_price,
            features: new_plan
                .features
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect(),
            is_active: true,
            max_optimizations: new_plan.max_optimizations.max(-1),
        };
        self.plans.push(plan.clone());
        Ok(plan)
    }

    /// Swaps in the backend's copy of a row after a save round-trip.
    pub fn upsert(&mut self, plan: PlanRecord) {
        match self.plans.iter_mut().find(|p| p.id == plan.id) {
            Some(row) => *row = plan,
            None => self.plans.push(plan),
        }
    }

    /// Settles a row changed ahead of its backend write. The backend's copy
    /// wins when the write went through. Otherwise `previous` goes back, and a
    /// row that did not exist before is dropped.
    pub fn settle(&mut self, id: &str, previous: Option<PlanRecord>, saved: Option<PlanRecord>) {
        match (saved, previous) {
            (Some(saved), _) => self.upsert(saved),
            (None, Some(previous)) => self.upsert(previous),
            (None, None) => self.plans.retain(|p| p.id != id),
        }
    }
}

/// Plans the admin table starts with.
pub fn seed_plans() -> Vec<PlanRecord> {
    fn plan(id: &str, name: &str, monthly: u32, yearly: u32, features: &[&str], max: i32) -> PlanRecord {
        PlanRecord {
            id: id.to_string(),
            name: name.to_string(),
            monthly_price: monthly,
            yearly_price: yearly,
            features: features.iter().map(|f| f.to_string()).collect(),
            is_active: true,
            max_optimizations: max,
        }
    }

    vec![
        plan("1", "Free", 0, 0, &["LinkedIn profile view", "Basic analysis", "1 optimization/month"], 1),
        plan("2", "Basic", 29, 290, &["Everything in Free", "Advanced analysis", "10 optimizations/month"], 10),
        plan("3", "Premium", 79, 790, &["Everything in Basic", "Unlimited optimizations", "AI suggestions"], -1),
        plan("4", "Enterprise", 199, 1990, &["Everything in Premium", "Team features", "Dedicated support"], -1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toggle_twice_restores_only_that_plan() {
        let mut table = PlanTable::new(seed_plans());
        let before = table.clone();

        assert!(!table.toggle_active("2").unwrap().is_active);
        assert_eq!(table.get("1"), before.get("1"));
        assert!(table.toggle_active("2").unwrap().is_active);

        assert_eq!(table, before);
    }

    #[test]
    fn test_edit_save_and_cancel() {
        let mut table = PlanTable::new(seed_plans());

        table.begin_edit("3").unwrap();
        table.update_edit(|p| p.monthly_price = 89);
        assert_eq!(table.get("3").unwrap().monthly_price, 79);

        table.cancel_edit();
        assert_eq!(table.editing(), None);

        table.begin_edit("3").unwrap();
        table.update_edit(|p| p.monthly_price = 89);
        let saved = table.save().unwrap();
        assert_eq!(saved.monthly_price, 89);
        assert_eq!(table.get("3").unwrap().monthly_price, 89);
        assert!(!table.is_editing("3"));
    }

    #[test]
    fn test_save_keeps_form_open_on_empty_name() {
        let mut table = PlanTable::new(seed_plans());
        table.begin_edit("1").unwrap();
        table.update_edit(|p| p.name = "  ".to_string());

        assert_eq!(table.save(), Err(AdminError::EmptyPlanName));
        assert!(table.is_editing("1"));
        assert_eq!(table.get("1").unwrap().name, "Free");
    }

    #[test]
    fn test_add_and_delete() {
        let mut table = PlanTable::new(seed_plans());
        let added = table
            .add(NewPlan {
                name: "Agency".to_string(),
                monthly_price: 299,
                yearly_price: 2990,
                max_optimizations: -5,
                features: "Client workspaces, , White-label reports".to_string(),
            })
            .unwrap();

        assert_eq!(table.plans().len(), 5);
        assert_eq!(added.features, vec!["Client workspaces", "White-label reports"]);
        assert_eq!(added.max_optimizations, -1);

        table.delete(&added.id).unwrap();
        assert_eq!(table.plans().len(), 4);
        assert_eq!(
            table.delete("missing"),
            Err(AdminError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_settle_reverts_failed_writes() {
        let mut table = PlanTable::new(seed_plans());
        let before = table.clone();

        let previous = table.get("3").cloned();
        table.begin_edit("3").unwrap();
        table.update_edit(|p| p.monthly_price = 99);
        table.save().unwrap();
        table.settle("3", previous, None);
        assert_eq!(table, before);

        let added = table
            .add(NewPlan {
                name: "Agency".to_string(),
                ..NewPlan::default()
            })
            .unwrap();
        table.settle(&added.id, None, None);
        assert_eq!(table, before);

        let previous = table.get("2").cloned();
        let mut toggled = table.toggle_active("2").unwrap().clone();
        toggled.name = "Basic Plus".to_string();
        table.settle("2", previous, Some(toggled));
        assert_eq!(table.get("2").map(|p| p.name.as_str()), Some("Basic Plus"));
    }
}
