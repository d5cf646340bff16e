//! Request bodies and stored shapes for the travel record collections.
//!
//! Each `New*` body deserializes with optional fields and converts into its
//! stored record only when every required field is present. A string is
//! present when it is non-empty (expense names included); `totalBudget` is
//! present when non-zero.

use serde::{Deserialize, Serialize};

use crate::auth::models::present;
use crate::database::Collection;

/// A record body accepted by one of the create endpoints.
pub trait NewRecord: Send + 'static {
    type Stored: Serialize + Send;

    const COLLECTION: Collection;
    const MISSING_FIELDS: &'static str;
    const CREATED: &'static str;

    /// Returns `None` when a required field is missing.
    fn into_stored(self) -> Option<Self::Stored>;
}

const ALL_FIELDS_REQUIRED: &str = "All fields are required!";

fn owned(field: &Option<String>) -> Option<String> {
    present(field).map(str::to_string)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewChecklist {
    pub location: Option<String>,
    pub items: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub location: String,
    pub items: String,
}

impl NewRecord for NewChecklist {
    type Stored = Checklist;

    const COLLECTION: Collection = Collection::Checklists;
    const MISSING_FIELDS: &'static str = "Location and items are required!";
    const CREATED: &'static str = "Checklist added successfully!";

    fn into_stored(self) -> Option<Checklist> {
        Some(Checklist {
            location: owned(&self.location)?,
            items: owned(&self.items)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub location: Option<String>,
    pub total_budget: Option<f64>,
    pub expenses: Option<Vec<Expense>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub location: String,
    pub total_budget: f64,
    pub expenses: Vec<Expense>,
}

impl NewRecord for NewBudget {
    type Stored = Budget;

    const COLLECTION: Collection = Collection::Budgets;
    const MISSING_FIELDS: &'static str = ALL_FIELDS_REQUIRED;
    const CREATED: &'static str = "Budget added successfully!";

    fn into_stored(self) -> Option<Budget> {
        let expenses = self.expenses?;
        if expenses.iter().any(|expense| expense.name.is_empty()) {
            return None;
        }

        Some(Budget {
            location: owned(&self.location)?,
            total_budget: self.total_budget.filter(|total| *total != 0.0)?,
            expenses,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewFeedback {
    pub place: Option<String>,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub place: String,
    pub feedback: String,
}

impl NewRecord for NewFeedback {
    type Stored = Feedback;

    const COLLECTION: Collection = Collection::Feedbacks;
    const MISSING_FIELDS: &'static str = ALL_FIELDS_REQUIRED;
    const CREATED: &'static str = "Feedback submitted successfully!";

    fn into_stored(self) -> Option<Feedback> {
        Some(Feedback {
            place: owned(&self.place)?,
            feedback: owned(&self.feedback)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPlan {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub source: String,
    pub destination: String,
    pub date: String,
}

impl NewRecord for NewPlan {
    type Stored = Plan;

    const COLLECTION: Collection = Collection::Plans;
    const MISSING_FIELDS: &'static str = ALL_FIELDS_REQUIRED;
    const CREATED: &'static str = "Travel plan created successfully!";

    fn into_stored(self) -> Option<Plan> {
        Some(Plan {
            source: owned(&self.source)?,
            destination: owned(&self.destination)?,
            date: owned(&self.date)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn checklist_requires_both_fields() {
        let full = NewChecklist {
            location: Some("Lisbon".into()),
            items: Some("sunscreen".into()),
        };
        assert!(full.into_stored().is_some());

        let missing = NewChecklist {
            location: Some("Lisbon".into()),
            items: Some(String::new()),
        };
        assert!(missing.into_stored().is_none());
    }

    #[test]
    fn budget_zero_total_is_missing() {
        let budget: NewBudget =
            serde_json::from_value(json!({ "location": "Oslo", "totalBudget": 0, "expenses": [] }))
                .unwrap();
        assert!(budget.into_stored().is_none());
    }

    #[test]
    fn budget_empty_expenses_are_present() {
        let budget: NewBudget =
            serde_json::from_value(json!({ "location": "Oslo", "totalBudget": 1200, "expenses": [] }))
                .unwrap();
        let stored = budget.into_stored().unwrap();
        assert_eq!(
            serde_json::to_value(stored).unwrap(),
            json!({ "location": "Oslo", "totalBudget": 1200.0, "expenses": [] })
        );
    }

    #[test]
    fn expense_requires_name_and_amount() {
        let result: Result<NewBudget, _> = serde_json::from_value(json!({
            "location": "Oslo",
            "totalBudget": 100,
            "expenses": [{ "name": "hotel" }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn expense_with_empty_name_is_missing() {
        let budget: NewBudget = serde_json::from_value(json!({
            "location": "Oslo",
            "totalBudget": 100,
            "expenses": [{ "name": "hotel", "amount": 80 }, { "name": "", "amount": 20 }]
        }))
        .unwrap();
        assert!(budget.into_stored().is_none());
    }

    #[test]
    fn plan_requires_date() {
        let plan = NewPlan {
            source: Some("Delhi".into()),
            destination: Some("Goa".into()),
            date: None,
        };
        assert!(plan.into_stored().is_none());
    }
}
