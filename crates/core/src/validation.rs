//! Form-level checks a caller runs before handing drafts to a service.
//! Services themselves accept anything.

use crate::errors::CoreError;
use crate::models::budget::{BudgetPatch, NewBudget};
use crate::models::debt::{DebtPatch, NewDebt};
use crate::models::expense::{ExpensePatch, NewExpense};

pub trait Validate {
    /// Every failing field, in form order.
    fn problems(&self) -> Vec<CoreError>;

    /// The first failing field, if any.
    fn validate(&self) -> Result<(), CoreError> {
        match self.problems().into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn check_amount(field: &'static str, amount: f64, message: &str, out: &mut Vec<CoreError>) {
    if !amount.is_finite() || amount <= 0.0 {
        out.push(CoreError::validation(field, message));
    }
}

fn check_text(field: &'static str, text: &str, message: &str, out: &mut Vec<CoreError>) {
    if text.trim().is_empty() {
        out.push(CoreError::validation(field, message));
    }
}

impl Validate for NewExpense {
    fn problems(&self) -> Vec<CoreError> {
        let mut out = Vec::new();
        check_amount("amount", self.amount, "Please enter a valid amount", &mut out);
        check_text("description", &self.description, "Please enter a description", &mut out);
        out
    }
}

impl Validate for ExpensePatch {
    fn problems(&self) -> Vec<CoreError> {
        let mut out = Vec::new();
        if let Some(amount) = self.amount {
            check_amount("amount", amount, "Please enter a valid amount", &mut out);
        }
        if let Some(description) = &self.description {
            check_text("description", description, "Please enter a description", &mut out);
        }
        out
    }
}

impl Validate for NewDebt {
    fn problems(&self) -> Vec<CoreError> {
        let mut out = Vec::new();
        check_text("person_name", &self.person_name, "Please enter a person's name", &mut out);
        check_amount("amount", self.amount, "Please enter a valid amount", &mut out);
        check_text("description", &self.description, "Please enter a description", &mut out);
        out
    }
}

impl Validate for DebtPatch {
    fn problems(&self) -> Vec<CoreError> {
        let mut out = Vec::new();
        if let Some(person_name) = &self.person_name {
            check_text("person_name", person_name, "Please enter a person's name", &mut out);
        }
        if let Some(amount) = self.amount {
            check_amount("amount", amount, "Please enter a valid amount", &mut out);
        }
        if let Some(description) = &self.description {
            check_text("description", description, "Please enter a description", &mut out);
        }
        out
    }
}

impl Validate for NewBudget {
    fn problems(&self) -> Vec<CoreError> {
        let mut out = Vec::new();
        check_amount("limit", self.limit, "Please enter a valid budget limit", &mut out);
        out
    }
}

impl Validate for BudgetPatch {
    fn problems(&self) -> Vec<CoreError> {
        let mut out = Vec::new();
        if let Some(limit) = self.limit {
            check_amount("limit", limit, "Please enter a valid budget limit", &mut out);
        }
        out
    }
}
