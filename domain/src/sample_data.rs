//! Demo records the app starts with. Nothing is saved between sessions,
//! so this is the whole starting state.

use serde::Deserialize;
use shared::{Income, LifePlan, YearBucket};

use crate::error::{DomainError, Result};
use crate::expense_service::ExpenseBook;

const EMBEDDED_SAMPLE: &str = include_str!("../data/sample.json");

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SampleData {
    pub plans: Vec<LifePlan>,
    pub incomes: Vec<Income>,
    pub years: Vec<YearBucket>,
}

impl SampleData {
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| DomainError::InvalidSampleData(e.to_string()))
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SAMPLE)
    }

    pub fn expense_book(&self) -> ExpenseBook {
        ExpenseBook::new(self.years.clone())
    }
}
