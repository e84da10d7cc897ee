use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Money someone owes the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    #[serde(rename = "Id")]
    pub id: u32,

    /// Who owes the money
    pub person_name: String,

    /// Amount owed (always positive)
    pub amount: f64,

    pub description: String,

    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub is_paid: bool,

    pub created_at: DateTime<Utc>,
}

/// Fields supplied when recording a new debt.
///
/// There is no paid flag: a freshly recorded debt is always unpaid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDebt {
    pub person_name: String,
    pub amount: f64,
    pub description: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl NewDebt {
    pub fn new(
        person_name: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            person_name: person_name.into(),
            amount,
            description: description.into(),
            due_date,
        }
    }

    pub(crate) fn into_debt(self, id: u32, created_at: DateTime<Utc>) -> Debt {
        Debt {
            id,
            person_name: self.person_name,
            amount: self.amount,
            description: self.description,
            due_date: self.due_date,
            is_paid: false,
            created_at,
        }
    }
}

/// Partial update for a debt.
///
/// `due_date` is doubly optional: `None` keeps the stored date,
/// `Some(None)` clears it, `Some(Some(d))` replaces it. In JSON an absent
/// `dueDate` keeps the date and an explicit `null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebtPatch {
    pub person_name: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    #[serde(
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub is_paid: Option<bool>,
}

impl DebtPatch {
    /// Patch that only flips the paid flag on.
    pub fn mark_paid() -> Self {
        Self {
            is_paid: Some(true),
            ..Self::default()
        }
    }

    pub(crate) fn apply(self, debt: &mut Debt) {
        if let Some(person_name) = self.person_name {
            debt.person_name = person_name;
        }
        if let Some(amount) = self.amount {
            debt.amount = amount;
        }
        if let Some(description) = self.description {
            debt.description = description;
        }
        if let Some(due_date) = self.due_date {
            debt.due_date = due_date;
        }
        if let Some(is_paid) = self.is_paid {
            debt.is_paid = is_paid;
        }
    }
}

/// Only called when the key is present, so `null` becomes `Some(None)`.
/// An absent key falls through to the field default, `None`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DateTime<Utc>>::deserialize(deserializer).map(Some)
}
