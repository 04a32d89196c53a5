//! Field-level validation for the app's forms.
//!
//! The view layer keeps raw input strings. Each `validate_*` function turns
//! them into a typed value or a [`FieldErrors`] map keyed by the form's field
//! enum, so each input can render its own message. Checks are limited to
//! required fields, numeric parsing and positivity.

use chrono::NaiveDate;
use log::debug;
use shared::{ExpenseDraft, ExpenseDuration};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::income_service::IncomeDraft;
use crate::plan_service::LifePlanDraft;

/// Validation failure for a single input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a whole number")]
    NotANumber(&'static str),
    #[error("{0} must be greater than 0")]
    NotPositive(&'static str),
    #[error("{0} cannot be negative")]
    Negative(&'static str),
    #[error("Please select a category")]
    CategoryNotSelected,
    #[error("Please choose an end date")]
    EndDateMissing,
    #[error("End date must be a valid date (YYYY-MM-DD)")]
    InvalidEndDate,
}

/// A form's input identifiers
pub trait FormField: Copy + Ord {
    fn label(self) -> &'static str;
}

/// Errors collected for one form submission, at most one per field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: FormField> {
    errors: BTreeMap<F, FieldError>,
}

impl<F: FormField> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: FormField> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first error reported for a field
    pub fn insert(&mut self, field: F, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    pub fn get(&self, field: F) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Display text for the field's error, if any
    pub fn message(&self, field: F) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&F, &FieldError)> {
        self.errors.iter()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.errors.is_empty() {
            Ok(value())
        } else {
            debug!("Form rejected with {} field error(s)", self.errors.len());
            Err(self)
        }
    }
}

/// Strip currency symbols, thousands separators and spaces before parsing
pub fn clean_amount_input(input: &str) -> String {
    input
        .trim()
        .trim_start_matches(['¥', '$'])
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect()
}

/// Parse a required positive whole amount
pub fn parse_positive_amount(input: &str, label: &'static str) -> Result<u64, FieldError> {
    let cleaned = clean_amount_input(input);
    if cleaned.is_empty() {
        return Err(FieldError::Required(label));
    }
    let value: i64 = cleaned.parse().map_err(|_| FieldError::NotANumber(label))?;
    if value <= 0 {
        return Err(FieldError::NotPositive(label));
    }
    u64::try_from(value).map_err(|_| FieldError::NotANumber(label))
}

fn require_text(input: &str, label: &'static str) -> Result<String, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(FieldError::Required(label))
    } else {
        Ok(trimmed.to_string())
    }
}

// ---------------------------------------------------------------------------
// Expense form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExpenseField {
    Name,
    Payment,
    Monthly,
    Category,
    Group,
    EndDate,
}

impl FormField for ExpenseField {
    fn label(self) -> &'static str {
        match self {
            ExpenseField::Name => "Name",
            ExpenseField::Payment => "Payment",
            ExpenseField::Monthly => "Times per year",
            ExpenseField::Category => "Category",
            ExpenseField::Group => "Group",
            ExpenseField::EndDate => "End date",
        }
    }
}

/// Which duration radio button is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationChoice {
    #[default]
    Unspecified,
    Lifetime,
    Until,
}

impl DurationChoice {
    pub const ALL: [DurationChoice; 3] = [
        DurationChoice::Unspecified,
        DurationChoice::Lifetime,
        DurationChoice::Until,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DurationChoice::Unspecified => "none",
            DurationChoice::Lifetime => "lifetime",
            DurationChoice::Until => "until",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DurationChoice::Unspecified => "Not set",
            DurationChoice::Lifetime => "Lifetime",
            DurationChoice::Until => "Until date",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "lifetime" => DurationChoice::Lifetime,
            "until" => DurationChoice::Until,
            _ => DurationChoice::Unspecified,
        }
    }
}

/// Raw expense form contents
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseFormInput {
    pub name: String,
    pub payment: String,
    pub monthly: String,
    pub category: String,
    pub group: String,
    pub duration: DurationChoice,
    pub end_date: String,
}

impl ExpenseFormInput {
    /// Prefill the form for editing an existing record
    pub fn from_draft(draft: &ExpenseDraft) -> Self {
        let (duration, end_date) = match &draft.duration {
            None => (DurationChoice::Unspecified, String::new()),
            Some(ExpenseDuration::Lifetime) => (DurationChoice::Lifetime, String::new()),
            Some(ExpenseDuration::Until(date)) => {
                (DurationChoice::Until, date.format("%Y-%m-%d").to_string())
            }
        };
        Self {
            name: draft.name.clone(),
            payment: draft.payment.to_string(),
            monthly: draft.monthly.to_string(),
            category: draft.category.clone(),
            group: draft.group.clone(),
            duration,
            end_date,
        }
    }
}

pub fn validate_expense_form(
    input: &ExpenseFormInput,
) -> Result<ExpenseDraft, FieldErrors<ExpenseField>> {
    let mut errors = FieldErrors::new();

    let name = require_text(&input.name, ExpenseField::Name.label())
        .map_err(|e| errors.insert(ExpenseField::Name, e))
        .ok();
    let payment = parse_positive_amount(&input.payment, ExpenseField::Payment.label())
        .map_err(|e| errors.insert(ExpenseField::Payment, e))
        .ok();
    let monthly = parse_positive_amount(&input.monthly, ExpenseField::Monthly.label())
        .and_then(|n| u32::try_from(n).map_err(|_| FieldError::NotANumber(ExpenseField::Monthly.label())))
        .map_err(|e| errors.insert(ExpenseField::Monthly, e))
        .ok();

    let category = input.category.trim();
    if category.is_empty() {
        errors.insert(ExpenseField::Category, FieldError::CategoryNotSelected);
    }
    let group = require_text(&input.group, ExpenseField::Group.label())
        .map_err(|e| errors.insert(ExpenseField::Group, e))
        .ok();

    let duration = match input.duration {
        DurationChoice::Unspecified => None,
        DurationChoice::Lifetime => Some(ExpenseDuration::Lifetime),
        DurationChoice::Until => {
            let raw = input.end_date.trim();
            if raw.is_empty() {
                errors.insert(ExpenseField::EndDate, FieldError::EndDateMissing);
                None
            } else {
                match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                    Ok(date) => Some(ExpenseDuration::Until(date)),
                    Err(_) => {
                        errors.insert(ExpenseField::EndDate, FieldError::InvalidEndDate);
                        None
                    }
                }
            }
        }
    };

    errors.into_result(|| ExpenseDraft {
        name: name.unwrap_or_default(),
        payment: payment.unwrap_or_default(),
        monthly: monthly.unwrap_or_default(),
        category: category.to_string(),
        group: group.unwrap_or_default(),
        duration,
    })
}

// ---------------------------------------------------------------------------
// Life plan form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LifePlanField {
    Name,
    InflationRate,
}

impl FormField for LifePlanField {
    fn label(self) -> &'static str {
        match self {
            LifePlanField::Name => "Plan name",
            LifePlanField::InflationRate => "Inflation rate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LifePlanFormInput {
    pub name: String,
    pub inflation_rate: String,
}

pub fn validate_life_plan_form(
    input: &LifePlanFormInput,
) -> Result<LifePlanDraft, FieldErrors<LifePlanField>> {
    let mut errors = FieldErrors::new();

    let name = require_text(&input.name, LifePlanField::Name.label())
        .map_err(|e| errors.insert(LifePlanField::Name, e))
        .ok();

    let label = LifePlanField::InflationRate.label();
    let raw_rate = input.inflation_rate.trim().trim_end_matches('%').trim();
    let inflation_rate = if raw_rate.is_empty() {
        errors.insert(LifePlanField::InflationRate, FieldError::Required(label));
        None
    } else {
        match raw_rate.parse::<f64>() {
            Ok(rate) if !rate.is_finite() => {
                errors.insert(LifePlanField::InflationRate, FieldError::NotANumber(label));
                None
            }
            Ok(rate) if rate < 0.0 => {
                errors.insert(LifePlanField::InflationRate, FieldError::Negative(label));
                None
            }
            Ok(rate) => Some(rate),
            Err(_) => {
                errors.insert(LifePlanField::InflationRate, FieldError::NotANumber(label));
                None
            }
        }
    };

    errors.into_result(|| LifePlanDraft {
        name: name.unwrap_or_default(),
        inflation_rate: inflation_rate.unwrap_or_default(),
    })
}

// ---------------------------------------------------------------------------
// Income and salary forms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IncomeField {
    Name,
    Amount,
}

impl FormField for IncomeField {
    fn label(self) -> &'static str {
        match self {
            IncomeField::Name => "Income name",
            IncomeField::Amount => "Annual amount",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IncomeFormInput {
    pub name: String,
    pub amount: String,
}

pub fn validate_income_form(
    input: &IncomeFormInput,
) -> Result<IncomeDraft, FieldErrors<IncomeField>> {
    let mut errors = FieldErrors::new();

    let name = require_text(&input.name, IncomeField::Name.label())
        .map_err(|e| errors.insert(IncomeField::Name, e))
        .ok();
    let amount = parse_positive_amount(&input.amount, IncomeField::Amount.label())
        .map_err(|e| errors.insert(IncomeField::Amount, e))
        .ok();

    errors.into_result(|| IncomeDraft {
        name: name.unwrap_or_default(),
        amount: amount.unwrap_or_default(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SalaryField {
    Gross,
}

impl FormField for SalaryField {
    fn label(self) -> &'static str {
        match self {
            SalaryField::Gross => "Gross salary",
        }
    }
}

pub fn validate_salary_form(gross: &str) -> Result<u64, FieldErrors<SalaryField>> {
    let mut errors = FieldErrors::new();
    let value = parse_positive_amount(gross, SalaryField::Gross.label())
        .map_err(|e| errors.insert(SalaryField::Gross, e))
        .ok();
    errors.into_result(|| value.unwrap_or_default())
}
