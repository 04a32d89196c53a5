use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recurring expense inside one year bucket.
///
/// `payment` is the yearly amount in whole currency units and `monthly` is how
/// many times per year it is paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique within the year bucket that owns the record
    pub id: u32,
    pub name: String,
    pub payment: u64,
    /// Number of occurrences per year (12 for a monthly bill)
    pub monthly: u32,
    pub category: String,
    pub group: String,
    #[serde(default)]
    pub duration: Option<ExpenseDuration>,
    /// Carried on imported records but not shown anywhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_description: Option<String>,
}

/// How long an expense keeps recurring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "end_date", rename_all = "snake_case")]
pub enum ExpenseDuration {
    Lifetime,
    Until(NaiveDate),
}

impl fmt::Display for ExpenseDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseDuration::Lifetime => write!(f, "Lifetime"),
            ExpenseDuration::Until(date) => write!(f, "Until {}", date.format("%Y-%m-%d")),
        }
    }
}

/// Expense fields as entered in the form, before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub name: String,
    pub payment: u64,
    pub monthly: u32,
    pub category: String,
    pub group: String,
    pub duration: Option<ExpenseDuration>,
}

impl ExpenseDraft {
    pub fn into_expense(self, id: u32) -> Expense {
        Expense {
            id,
            name: self.name,
            payment: self.payment,
            monthly: self.monthly,
            category: self.category,
            group: self.group,
            duration: self.duration,
            category_description: None,
            group_description: None,
        }
    }

    /// Edited version of `existing`: same id and descriptions, draft fields
    pub fn apply_to(self, existing: &Expense) -> Expense {
        Expense {
            category_description: existing.category_description.clone(),
            group_description: existing.group_description.clone(),
            ..self.into_expense(existing.id)
        }
    }
}

impl From<&Expense> for ExpenseDraft {
    fn from(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            payment: expense.payment,
            monthly: expense.monthly,
            category: expense.category.clone(),
            group: expense.group.clone(),
            duration: expense.duration.clone(),
        }
    }
}

/// All expenses recorded for one calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearBucket {
    pub year: i32,
    pub expenses: Vec<Expense>,
}

/// Expenses sharing one category, plus their summed payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseGroup {
    pub name: String,
    pub items: Vec<Expense>,
    pub total_payment: u64,
}

/// One pie slice: a category with its total and its share of the year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: u64,
    /// Share of the grand total in percent, rounded to one decimal place
    pub percentage: f64,
}

/// A named plan. Only the inflation rate is recorded alongside the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifePlan {
    pub id: u32,
    pub name: String,
    /// Percent per year
    pub inflation_rate: f64,
}

/// A yearly income source entered on the income page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: u32,
    pub name: String,
    pub amount: u64,
}

/// Estimated deductions from a gross salary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryDeductions {
    pub gross: u64,
    pub resident_tax: u64,
    pub income_tax: u64,
    pub pension: u64,
    pub health_insurance: u64,
    pub nursing_insurance: u64,
    pub employment_insurance: u64,
}

impl SalaryDeductions {
    pub fn total(&self) -> u64 {
        self.resident_tax
            + self.income_tax
            + self.pension
            + self.health_insurance
            + self.nursing_insurance
            + self.employment_insurance
    }

    /// Gross minus every deduction, floored at zero
    pub fn take_home(&self) -> u64 {
        self.gross.saturating_sub(self.total())
    }

    /// Label/amount pairs in display order
    pub fn line_items(&self) -> [(&'static str, u64); 6] {
        [
            ("Resident tax", self.resident_tax),
            ("Income tax", self.income_tax),
            ("Pension", self.pension),
            ("Health insurance", self.health_insurance),
            ("Nursing insurance", self.nursing_insurance),
            ("Employment insurance", self.employment_insurance),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_deductions() -> SalaryDeductions {
        SalaryDeductions {
            gross: 300_000,
            resident_tax: 30_000,
            income_tax: 60_000,
            pension: 27_300,
            health_insurance: 15_000,
            nursing_insurance: 4_500,
            employment_insurance: 900,
        }
    }

    #[test]
    fn test_deduction_total_and_take_home() {
        let deductions = sample_deductions();
        assert_eq!(deductions.total(), 137_700);
        assert_eq!(deductions.take_home(), 162_300);
    }

    #[test]
    fn test_take_home_never_negative() {
        let deductions = SalaryDeductions {
            gross: 10,
            ..sample_deductions()
        };
        assert_eq!(deductions.take_home(), 0);
    }

    #[test]
    fn test_line_items_order() {
        let labels: Vec<_> = sample_deductions().line_items().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels[0], "Resident tax");
        assert_eq!(labels[5], "Employment insurance");
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(ExpenseDuration::Lifetime.to_string(), "Lifetime");
        let date = NaiveDate::from_ymd_opt(2030, 3, 31).unwrap();
        assert_eq!(ExpenseDuration::Until(date).to_string(), "Until 2030-03-31");
    }

    #[test]
    fn test_expense_deserializes_without_optional_fields() {
        let json = r#"{"id":1,"name":"Rent","payment":960000,"monthly":12,"category":"Housing","group":"Fixed"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.duration, None);
        assert_eq!(expense.category_description, None);
    }

    #[test]
    fn test_duration_json_shape() {
        let json = r#"{"kind":"until","end_date":"2031-12-31"}"#;
        let duration: ExpenseDuration = serde_json::from_str(json).unwrap();
        assert_eq!(
            duration,
            ExpenseDuration::Until(NaiveDate::from_ymd_opt(2031, 12, 31).unwrap())
        );
        let lifetime: ExpenseDuration = serde_json::from_str(r#"{"kind":"lifetime"}"#).unwrap();
        assert_eq!(lifetime, ExpenseDuration::Lifetime);
    }

    #[test]
    fn test_draft_round_trip_keeps_fields() {
        let draft = ExpenseDraft {
            name: "Phone".to_string(),
            payment: 60_000,
            monthly: 12,
            category: "Communication".to_string(),
            group: "Fixed".to_string(),
            duration: Some(ExpenseDuration::Lifetime),
        };
        let expense = draft.clone().into_expense(7);
        assert_eq!(expense.id, 7);
        assert_eq!(ExpenseDraft::from(&expense), draft);
    }

    #[test]
    fn test_apply_to_keeps_id_and_descriptions() {
        let existing = Expense {
            id: 4,
            name: "Rent".to_string(),
            payment: 1_200_000,
            monthly: 12,
            category: "Housing".to_string(),
            group: "Fixed".to_string(),
            duration: None,
            category_description: Some("Home costs".to_string()),
            group_description: Some("Every month".to_string()),
        };
        let mut draft = ExpenseDraft::from(&existing);
        draft.payment = 1_320_000;

        let edited = draft.apply_to(&existing);
        assert_eq!(edited.id, 4);
        assert_eq!(edited.payment, 1_320_000);
        assert_eq!(edited.category_description.as_deref(), Some("Home costs"));
        assert_eq!(edited.group_description.as_deref(), Some("Every month"));
    }
}
