//! Domain logic for the life planner.
//!
//! Everything the pages compute lives here so the view layer only renders
//! and forwards events: expense grouping, deduction estimates, form rules,
//! theme lookup and number formatting.

pub mod config;
pub mod error;
pub mod expense_service;
pub mod form_validation;
pub mod format;
pub mod income_service;
pub mod plan_service;
pub mod salary_service;
pub mod sample_data;
pub mod theme;

pub use config::AppConfig;
pub use error::DomainError;
pub use expense_service::{ExpenseBook, ExpenseSummary};
pub use theme::{Mode, ThemeConfig};
