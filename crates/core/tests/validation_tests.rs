// ═══════════════════════════════════════════════════════════════════
// Validation Tests — draft and patch checks run before saving
// ═══════════════════════════════════════════════════════════════════

use chrono::{TimeZone, Utc};

use finance_tracker_core::errors::CoreError;
use finance_tracker_core::models::budget::{BudgetPatch, BudgetPeriod, NewBudget};
use finance_tracker_core::models::category::SpendingCategory;
use finance_tracker_core::models::debt::{DebtPatch, NewDebt};
use finance_tracker_core::models::expense::{ExpensePatch, NewExpense};
use finance_tracker_core::validation::Validate;

fn fields(problems: Vec<CoreError>) -> Vec<&'static str> {
    problems
        .into_iter()
        .map(|e| match e {
            CoreError::Validation { field, .. } => field,
            other => panic!("unexpected error: {other:?}"),
        })
        .collect()
}

fn expense(amount: f64, description: &str) -> NewExpense {
    NewExpense::new(
        amount,
        SpendingCategory::Food,
        description,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    )
}

mod expenses {
    use super::*;

    #[test]
    fn valid_draft_passes() {
        assert!(expense(12.0, "Lunch").validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_and_non_finite_amounts() {
        for amount in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert_eq!(fields(expense(amount, "Lunch").problems()), vec!["amount"]);
        }
    }

    #[test]
    fn blank_description_rejected() {
        let err = expense(5.0, "   ").validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid description: Please enter a description");
    }

    #[test]
    fn reports_every_field_in_form_order() {
        assert_eq!(fields(expense(0.0, "").problems()), vec!["amount", "description"]);
    }

    #[test]
    fn patch_checks_only_set_fields() {
        assert!(ExpensePatch::default().validate().is_ok());
        let bad = ExpensePatch {
            amount: Some(-1.0),
            ..ExpensePatch::default()
        };
        assert_eq!(fields(bad.problems()), vec!["amount"]);
    }
}

mod debts {
    use super::*;

    #[test]
    fn valid_draft_passes() {
        assert!(NewDebt::new("Ana", 20.0, "Tickets", None).validate().is_ok());
    }

    #[test]
    fn every_required_field_reported() {
        let draft = NewDebt::new("", 0.0, " ", None);
        assert_eq!(
            fields(draft.problems()),
            vec!["person_name", "amount", "description"]
        );
    }

    #[test]
    fn name_message_matches_form() {
        let err = NewDebt::new(" ", 1.0, "x", None).validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid person_name: Please enter a person's name");
    }

    #[test]
    fn mark_paid_patch_is_valid() {
        assert!(DebtPatch::mark_paid().validate().is_ok());
    }
}

mod budgets {
    use super::*;

    #[test]
    fn limit_must_be_positive() {
        assert!(NewBudget::new(SpendingCategory::Food, 100.0, BudgetPeriod::Monthly)
            .validate()
            .is_ok());
        let err = NewBudget::new(SpendingCategory::Food, 0.0, BudgetPeriod::Monthly)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid limit: Please enter a valid budget limit");
    }

    #[test]
    fn patch_limit_checked() {
        let patch = BudgetPatch {
            limit: Some(-10.0),
            ..BudgetPatch::default()
        };
        assert!(patch.validate().is_err());
        let period_only = BudgetPatch {
            period: Some(BudgetPeriod::Yearly),
            ..BudgetPatch::default()
        };
        assert!(period_only.validate().is_ok());
    }
}
