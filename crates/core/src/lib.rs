pub mod errors;
pub mod format;
pub mod models;
pub mod services;
pub mod storage;
pub mod validation;

pub use services::traits::EntityService;

use chrono::{DateTime, Utc};
use std::sync::{Arc, Once};

use errors::CoreError;
use models::{
    debt::Debt,
    metrics::{BudgetOverview, DashboardSummary, DebtOverview},
    settings::Settings,
};
use services::{
    budget_service::BudgetService, category_service::CategoryService,
    debt_service::DebtService, expense_service::ExpenseService,
    metrics_service::MetricsService, search_service::SearchService,
};
use storage::fixtures::FixtureSet;

static INIT_TRACING: Once = Once::new();

/// Install a `fmt` subscriber honouring `RUST_LOG`, defaulting this crate to `info`.
/// Safe to call more than once; later calls do nothing.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "finance_tracker_core=info".parse() {
            filter = filter.add_directive(directive);
        }
        // Another subscriber may already be installed by the host application.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}

/// Composition root for the finance tracker.
///
/// Owns one instance of every service. Consumers receive `Arc` handles
/// instead of reaching for global singletons, so independent trackers
/// (one per test, say) never share state.
#[must_use]
pub struct FinanceTracker {
    settings: Settings,
    expense_service: Arc<ExpenseService>,
    debt_service: Arc<DebtService>,
    budget_service: Arc<BudgetService>,
    category_service: Arc<CategoryService>,
    metrics_service: MetricsService,
    search_service: SearchService,
}

impl std::fmt::Debug for FinanceTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceTracker")
            .field("settings", &self.settings)
            .field("metrics", &self.metrics_service)
            .finish_non_exhaustive()
    }
}

impl FinanceTracker {
    /// Tracker seeded with the bundled sample data and default settings.
    pub fn new() -> Result<Self, CoreError> {
        Self::with_settings(Settings::default())
    }

    /// Tracker seeded with the bundled sample data.
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        Ok(Self::with_fixtures(settings, FixtureSet::bundled()?))
    }

    /// Tracker seeded with caller-supplied records (use `FixtureSet::default()` for empty).
    pub fn with_fixtures(settings: Settings, fixtures: FixtureSet) -> Self {
        tracing::info!(
            expenses = fixtures.expenses.len(),
            debts = fixtures.debts.len(),
            budgets = fixtures.budgets.len(),
            categories = fixtures.categories.len(),
            "finance tracker initialized"
        );

        Self {
            expense_service: Arc::new(ExpenseService::new(
                fixtures.expenses,
                settings.expense_latency(),
            )),
            debt_service: Arc::new(DebtService::new(fixtures.debts, settings.debt_latency())),
            budget_service: Arc::new(BudgetService::new(
                fixtures.budgets,
                settings.budget_latency(),
            )),
            category_service: Arc::new(CategoryService::new(
                fixtures.categories,
                settings.category_latency(),
            )),
            metrics_service: MetricsService::from_settings(&settings),
            search_service: SearchService::new(),
            settings,
        }
    }

    // ── Services ────────────────────────────────────────────────────

    pub fn expenses(&self) -> &Arc<ExpenseService> {
        &self.expense_service
    }

    pub fn debts(&self) -> &Arc<DebtService> {
        &self.debt_service
    }

    pub fn budgets(&self) -> &Arc<BudgetService> {
        &self.budget_service
    }

    pub fn categories(&self) -> &Arc<CategoryService> {
        &self.category_service
    }

    pub fn metrics(&self) -> &MetricsService {
        &self.metrics_service
    }

    pub fn search(&self) -> &SearchService {
        &self.search_service
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Views ───────────────────────────────────────────────────────

    /// Dashboard figures as of the current system time.
    pub async fn dashboard(&self) -> DashboardSummary {
        self.dashboard_at(Utc::now()).await
    }

    /// Dashboard figures with the month filter evaluated against `now`.
    /// The three collections are fetched concurrently.
    pub async fn dashboard_at(&self, now: DateTime<Utc>) -> DashboardSummary {
        let (expenses, debts, budgets) = tokio::join!(
            self.expense_service.list(),
            self.debt_service.list(),
            self.budget_service.list(),
        );
        self.metrics_service
            .dashboard(&expenses, &debts, &budgets, now)
    }

    /// Every budget (newest first) with its progress against all expenses.
    pub async fn budget_overview(&self) -> Vec<BudgetOverview> {
        let (budgets, expenses) =
            tokio::join!(self.budget_service.list(), self.expense_service.list());
        self.metrics_service.budget_overview(&budgets, &expenses)
    }

    /// Every debt (newest first) with its status as of the current system time.
    pub async fn debt_overview(&self) -> Vec<DebtOverview> {
        self.debt_overview_at(Utc::now()).await
    }

    pub async fn debt_overview_at(&self, now: DateTime<Utc>) -> Vec<DebtOverview> {
        let debts = self.debt_service.list().await;
        self.metrics_service.debt_overview(&debts, now)
    }

    /// Mark a debt as paid. Fails with `NotFound` for an unknown id.
    pub async fn mark_debt_paid(&self, id: u32) -> Result<Debt, CoreError> {
        self.debt_service.mark_paid(id).await
    }
}
