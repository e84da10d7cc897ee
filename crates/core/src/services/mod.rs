pub mod budget_service;
pub mod category_service;
pub mod debt_service;
pub mod expense_service;
pub mod metrics_service;
pub mod search_service;
pub mod traits;
