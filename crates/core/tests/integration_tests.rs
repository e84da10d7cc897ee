// ═══════════════════════════════════════════════════════════════════
// Integration Tests — FinanceTracker composition root over the
// bundled sample data
// ═══════════════════════════════════════════════════════════════════

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use finance_tracker_core::format::{format_currency, format_usage};
use finance_tracker_core::models::budget::{BudgetPeriod, NewBudget};
use finance_tracker_core::models::category::SpendingCategory;
use finance_tracker_core::models::debt::NewDebt;
use finance_tracker_core::models::expense::NewExpense;
use finance_tracker_core::models::metrics::{DebtStatus, ProgressTier, UsageTrend};
use finance_tracker_core::models::settings::Settings;
use finance_tracker_core::services::expense_service::ExpenseService;
use finance_tracker_core::services::search_service::PaymentFilter;
use finance_tracker_core::storage::fixtures::FixtureSet;
use finance_tracker_core::{init_tracing, EntityService, FinanceTracker};

fn tracker() -> FinanceTracker {
    FinanceTracker::with_settings(Settings::instant()).unwrap()
}

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[tokio::test]
async fn dashboard_over_sample_data() {
    init_tracing();
    let tracker = tracker();
    let summary = tracker.dashboard_at(at(2024, 1, 31)).await;

    assert!(approx(summary.total_expenses, 658.64));
    assert!(approx(summary.monthly_expenses, 658.64));
    assert!(approx(summary.outstanding_debt, 300.5));
    assert!(approx(summary.total_budget, 2250.0));
    assert!(approx(summary.budget_remaining, 2250.0 - 658.64));
    assert_eq!(summary.trend, UsageTrend::Up);
    assert_eq!(format_usage(summary.budget_usage_pct), "29.3% used");
    assert_eq!(format_currency(summary.total_expenses), "$658.64");

    let recent: Vec<u32> = summary.recent_expenses.iter().map(|e| e.id).collect();
    assert_eq!(recent, vec![10, 9, 8, 7, 6]);
}

#[tokio::test]
async fn dashboard_in_another_month_has_no_monthly_spend() {
    let summary = tracker().dashboard_at(at(2024, 2, 10)).await;
    assert_eq!(summary.monthly_expenses, 0.0);
    assert!(approx(summary.budget_remaining, 2250.0));
}

#[tokio::test]
async fn new_expense_shows_up_on_dashboard() {
    let tracker = tracker();
    let now = at(2024, 1, 31);
    tracker
        .expenses()
        .create(NewExpense::new(
            1000.0,
            SpendingCategory::Bills,
            "Rent",
            at(2024, 1, 30),
        ))
        .await;

    let summary = tracker.dashboard_at(now).await;
    assert!(approx(summary.monthly_expenses, 1658.64));
    assert_eq!(summary.recent_expenses[0].description, "Rent");
}

#[tokio::test]
async fn budget_overview_over_sample_data() {
    let overview = tracker().budget_overview().await;
    assert_eq!(overview.len(), 5);

    // newest budget first
    assert_eq!(overview[0].budget.id, 5);

    let entertainment = overview
        .iter()
        .find(|o| o.budget.category == SpendingCategory::Entertainment)
        .unwrap();
    assert_eq!(entertainment.budget.period, BudgetPeriod::Weekly);
    assert!(approx(entertainment.progress.spent, 32.0));
    assert_eq!(entertainment.progress.tier, ProgressTier::Caution);

    let food = overview
        .iter()
        .find(|o| o.budget.category == SpendingCategory::Food)
        .unwrap();
    assert!(approx(food.progress.spent, 63.9));
    assert_eq!(food.progress.tier, ProgressTier::Nominal);
}

#[tokio::test]
async fn overspending_turns_budget_critical() {
    let tracker = tracker();
    tracker
        .expenses()
        .create(NewExpense::new(
            30.0,
            SpendingCategory::Entertainment,
            "Festival",
            at(2024, 1, 29),
        ))
        .await;

    let overview = tracker.budget_overview().await;
    let entertainment = overview
        .iter()
        .find(|o| o.budget.category == SpendingCategory::Entertainment)
        .unwrap();
    assert!(entertainment.progress.is_over_budget);
    assert!(approx(entertainment.progress.overage, 12.0));
    assert_eq!(entertainment.progress.tier, ProgressTier::Critical);
}

#[tokio::test]
async fn debt_overview_statuses() {
    let tracker = tracker();

    let late_january = tracker.debt_overview_at(at(2024, 1, 29)).await;
    let status = |id: u32| {
        late_january
            .iter()
            .find(|o| o.debt.id == id)
            .map(|o| o.status)
            .unwrap()
    };
    assert_eq!(status(1), DebtStatus::Pending);
    assert_eq!(status(2), DebtStatus::Pending);
    assert_eq!(status(3), DebtStatus::Paid);
    assert_eq!(status(4), DebtStatus::DueSoon);

    let february = tracker.debt_overview_at(at(2024, 2, 5)).await;
    let taylor = february.iter().find(|o| o.debt.id == 4).unwrap();
    assert_eq!(taylor.status, DebtStatus::Overdue);
}

#[tokio::test]
async fn mark_debt_paid_reduces_outstanding() {
    let tracker = tracker();
    let paid = tracker.mark_debt_paid(1).await.unwrap();
    assert!(paid.is_paid);

    let summary = tracker.dashboard_at(at(2024, 1, 31)).await;
    assert!(approx(summary.outstanding_debt, 150.5));
    assert!(tracker.mark_debt_paid(404).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn new_debt_is_unpaid_and_counts_as_outstanding() {
    let tracker = tracker();
    let created = tracker
        .debts()
        .create(NewDebt::new("Robin", 20.0, "Taxi", None))
        .await;
    assert_eq!(created.id, 6);
    assert!(!created.is_paid);

    let summary = tracker.dashboard_at(at(2024, 1, 31)).await;
    assert!(approx(summary.outstanding_debt, 320.5));
}

#[tokio::test]
async fn categories_are_read_only_reference_data() {
    let tracker = tracker();
    let categories = tracker.categories().list().await;
    assert_eq!(categories.len(), 9);
    assert_eq!(categories[0].name, "Food");
    assert_eq!(tracker.categories().get_by_id(8).await.unwrap().icon, "Plane");
}

#[tokio::test]
async fn trackers_do_not_share_state() {
    let first = tracker();
    let second = tracker();

    first.budgets().delete(1).await.unwrap();
    first
        .budgets()
        .create(NewBudget::new(SpendingCategory::Health, 60.0, BudgetPeriod::Monthly))
        .await;

    assert_eq!(first.budgets().list().await.len(), 5);
    assert!(first.budgets().get_by_id(1).await.is_err());
    assert!(second.budgets().get_by_id(1).await.is_ok());
}

#[tokio::test]
async fn injected_handle_sees_the_same_collection() {
    let tracker = tracker();
    let handle: Arc<ExpenseService> = Arc::clone(tracker.expenses());

    let task = tokio::spawn(async move {
        handle
            .create(NewExpense::new(
                5.0,
                SpendingCategory::Food,
                "Snack",
                at(2024, 1, 30),
            ))
            .await
    });
    let created = task.await.unwrap();

    assert_eq!(created.id, 11);
    assert_eq!(tracker.expenses().count().await, 11);
    assert_eq!(tracker.expenses().get_by_id(11).await.unwrap(), created);
}

#[tokio::test]
async fn empty_fixtures_start_ids_at_one() {
    let tracker = FinanceTracker::with_fixtures(Settings::instant(), FixtureSet::default());
    let summary = tracker.dashboard_at(at(2024, 1, 1)).await;
    assert_eq!(summary.total_expenses, 0.0);

    let created = tracker
        .expenses()
        .create(NewExpense::new(1.0, SpendingCategory::Other, "Gum", at(2024, 1, 1)))
        .await;
    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn search_over_service_snapshots() {
    let tracker = tracker();
    let expenses = tracker.expenses().list().await;
    let debts = tracker.debts().list().await;
    let budgets = tracker.budgets().list().await;
    let search = tracker.search();

    let food = search.search_expenses(&expenses, "", Some(SpendingCategory::Food));
    let food_ids: Vec<u32> = food.iter().map(|e| e.id).collect();
    assert_eq!(food_ids, vec![7, 1]);

    let tickets = search.search_expenses(&expenses, "TICKETS", None);
    assert_eq!(tickets.len(), 2);

    let by_category_name = search.search_expenses(&expenses, "trans", None);
    assert_eq!(by_category_name.len(), 1);
    assert_eq!(by_category_name[0].id, 2);

    assert_eq!(search.search_debts(&debts, "", PaymentFilter::Unpaid).len(), 4);
    assert_eq!(search.search_debts(&debts, "", PaymentFilter::Paid).len(), 1);
    assert_eq!(search.search_debts(&debts, "alex", PaymentFilter::All).len(), 1);
    assert_eq!(search.search_debts(&debts, "dinner", PaymentFilter::Paid).len(), 0);

    let travel = search.search_budgets(&budgets, "tra");
    assert_eq!(travel.len(), 2);

    let distinct = search.distinct_categories(&expenses);
    assert_eq!(distinct.len(), 9);
    assert_eq!(distinct[0], SpendingCategory::Other);
}

#[tokio::test]
async fn default_settings_are_applied() {
    let tracker = FinanceTracker::new().unwrap();
    assert_eq!(tracker.settings().budget_latency_ms, 400);
    assert!(format!("{tracker:?}").contains("FinanceTracker"));
}
