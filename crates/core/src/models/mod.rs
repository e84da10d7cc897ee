pub mod budget;
pub mod category;
pub mod debt;
pub mod expense;
pub mod metrics;
pub mod settings;
