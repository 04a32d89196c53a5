//! Expense aggregation for the yearly dashboard.
//!
//! Grouping, totals and pie-chart shares are derived from a flat list of
//! expenses and the configured category order. The per-year storage is an
//! [`ExpenseBook`] whose update methods return a new book and leave the
//! receiver untouched, so a page can hand the result straight back up to the
//! component that owns the state.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use shared::{ChartSlice, Expense, ExpenseDraft, ExpenseGroup, YearBucket};

use crate::error::{DomainError, Result};

/// Group expenses by category.
///
/// Canonical categories come first in their configured order, including the
/// ones with no matching expense. Categories that only appear in the data are
/// appended in the order they are first seen.
pub fn group_expenses(expenses: &[Expense], categories: &[String]) -> Vec<ExpenseGroup> {
    let mut names: Vec<&str> = categories.iter().map(String::as_str).collect();
    for expense in expenses {
        if !names.contains(&expense.category.as_str()) {
            names.push(expense.category.as_str());
        }
    }

    names
        .into_iter()
        .map(|name| {
            let items: Vec<Expense> = expenses
                .iter()
                .filter(|expense| expense.category == name)
                .cloned()
                .collect();
            let total_payment = items.iter().map(|expense| expense.payment).sum();
            ExpenseGroup {
                name: name.to_string(),
                items,
                total_payment,
            }
        })
        .collect()
}

pub fn total_payment(expenses: &[Expense]) -> u64 {
    expenses.iter().map(|expense| expense.payment).sum()
}

/// Pie slices for the grouped view.
///
/// A group gets a slice when it has a non-zero total or is one of the
/// canonical categories. Percentages are 0.0 across the board when nothing
/// has been spent.
pub fn chart_slices(groups: &[ExpenseGroup], categories: &[String]) -> Vec<ChartSlice> {
    let grand_total: u64 = groups.iter().map(|group| group.total_payment).sum();

    groups
        .iter()
        .filter(|group| group.total_payment != 0 || categories.contains(&group.name))
        .map(|group| ChartSlice {
            name: group.name.clone(),
            value: group.total_payment,
            percentage: percentage_of(group.total_payment, grand_total),
        })
        .collect()
}

fn percentage_of(value: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = value as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Amount per occurrence, rounded up to the next whole unit
pub fn monthly_equivalent(expense: &Expense) -> u64 {
    let occurrences = u64::from(expense.monthly.max(1));
    expense.payment.div_ceil(occurrences)
}

/// Everything the dashboard renders for one year
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub groups: Vec<ExpenseGroup>,
    pub total_payment: u64,
    pub slices: Vec<ChartSlice>,
    pub monthly_total: u64,
}

pub fn yearly_summary(expenses: &[Expense], categories: &[String]) -> ExpenseSummary {
    let groups = group_expenses(expenses, categories);
    let slices = chart_slices(&groups, categories);
    let summary = ExpenseSummary {
        total_payment: total_payment(expenses),
        monthly_total: expenses.iter().map(monthly_equivalent).sum(),
        groups,
        slices,
    };
    debug!(
        "Summarized {} expenses into {} groups (total {})",
        expenses.len(),
        summary.groups.len(),
        summary.total_payment
    );
    summary
}

/// Expenses for every year, at most one bucket per year
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseBook {
    buckets: Vec<YearBucket>,
}

impl ExpenseBook {
    /// Build a book, folding buckets that share a year into the first one.
    ///
    /// Ids stay unique within a year: a record whose id is already taken in
    /// its year is renumbered past that year's highest id.
    pub fn new(buckets: Vec<YearBucket>) -> Self {
        let mut merged: Vec<YearBucket> = Vec::with_capacity(buckets.len());
        for bucket in buckets {
            let index = match merged.iter().position(|existing| existing.year == bucket.year) {
                Some(index) => index,
                None => {
                    merged.push(YearBucket {
                        year: bucket.year,
                        expenses: Vec::with_capacity(bucket.expenses.len()),
                    });
                    merged.len() - 1
                }
            };
            let target = &mut merged[index];
            for mut expense in bucket.expenses {
                if target.expenses.iter().any(|existing| existing.id == expense.id) {
                    let fresh = target.expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;
                    warn!(
                        "Expense id {} repeats in {}; renumbered to {}",
                        expense.id, target.year, fresh
                    );
                    expense.id = fresh;
                }
                target.expenses.push(expense);
            }
        }
        Self { buckets: merged }
    }

    pub fn buckets(&self) -> &[YearBucket] {
        &self.buckets
    }

    /// Years that have a bucket, ascending
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.buckets.iter().map(|bucket| bucket.year).collect();
        years.sort_unstable();
        years
    }

    /// The year's expenses, empty when the year has no bucket yet
    pub fn expenses_for(&self, year: i32) -> &[Expense] {
        self.buckets
            .iter()
            .find(|bucket| bucket.year == year)
            .map(|bucket| bucket.expenses.as_slice())
            .unwrap_or(&[])
    }

    /// Year the dashboard opens on: `current` when it has records, otherwise
    /// the latest year that does, otherwise `current`
    pub fn dashboard_year(&self, current: i32) -> i32 {
        let has_records = |year: i32| !self.expenses_for(year).is_empty();
        if has_records(current) {
            return current;
        }
        self.years()
            .into_iter()
            .rev()
            .find(|year| has_records(*year))
            .unwrap_or(current)
    }

    /// One past the highest id used in any year, or 1 for an empty book
    pub fn next_expense_id(&self) -> u32 {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.expenses.iter())
            .map(|expense| expense.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    pub fn with_expense_added(&self, year: i32, draft: ExpenseDraft) -> Self {
        let id = self.next_expense_id();
        let expense = draft.into_expense(id);
        info!("Adding expense {} ({}) to {}", id, expense.name, year);

        let mut buckets = self.buckets.clone();
        match buckets.iter_mut().find(|bucket| bucket.year == year) {
            Some(bucket) => bucket.expenses.push(expense),
            None => buckets.push(YearBucket {
                year,
                expenses: vec![expense],
            }),
        }
        Self { buckets }
    }

    /// Replace the record sharing `expense.id` in the given year
    pub fn with_expense_replaced(&self, year: i32, expense: Expense) -> Result<Self> {
        let id = expense.id;
        self.rebuild_year(year, id, |expenses| {
            expenses
                .iter()
                .map(|existing| {
                    if existing.id == id {
                        expense.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect()
        })
        .inspect(|_| info!("Updated expense {} in {}", id, year))
    }

    pub fn without_expense(&self, year: i32, id: u32) -> Result<Self> {
        self.rebuild_year(year, id, |expenses| {
            expenses
                .iter()
                .filter(|existing| existing.id != id)
                .cloned()
                .collect()
        })
        .inspect(|_| info!("Deleted expense {} from {}", id, year))
    }

    fn rebuild_year<F>(&self, year: i32, id: u32, rebuild: F) -> Result<Self>
    where
        F: FnOnce(&[Expense]) -> Vec<Expense>,
    {
        let position = self
            .buckets
            .iter()
            .position(|bucket| bucket.year == year && bucket.expenses.iter().any(|e| e.id == id))
            .ok_or(DomainError::ExpenseNotFound { year, id })?;

        let mut buckets = self.buckets.clone();
        buckets[position] = YearBucket {
            year,
            expenses: rebuild(&self.buckets[position].expenses),
        };
        Ok(Self { buckets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: u32, name: &str, payment: u64, monthly: u32, category: &str) -> Expense {
        Expense {
            id,
            name: name.to_string(),
            payment,
            monthly,
            category: category.to_string(),
            group: "Fixed".to_string(),
            duration: None,
            category_description: None,
            group_description: None,
        }
    }

    fn draft(name: &str, payment: u64, category: &str) -> ExpenseDraft {
        ExpenseDraft {
            name: name.to_string(),
            payment,
            monthly: 12,
            category: category.to_string(),
            group: "Fixed".to_string(),
            duration: None,
        }
    }

    fn categories() -> Vec<String> {
        vec!["Housing".to_string(), "Food".to_string(), "Insurance".to_string()]
    }

    fn sample_book() -> ExpenseBook {
        ExpenseBook::new(vec![
            YearBucket {
                year: 2024,
                expenses: vec![
                    expense(1, "Rent", 960_000, 12, "Housing"),
                    expense(2, "Groceries", 480_000, 12, "Food"),
                ],
            },
            YearBucket {
                year: 2025,
                expenses: vec![
                    expense(3, "Rent", 980_000, 12, "Housing"),
                    expense(4, "Travel", 200_000, 2, "Leisure"),
                    expense(5, "Gym", 96_000, 12, "Health"),
                ],
            },
        ])
    }

    #[test]
    fn test_group_keeps_canonical_order_and_empty_groups() {
        let expenses = vec![
            expense(1, "Lunch", 100, 1, "Food"),
            expense(2, "Rent", 200, 1, "Housing"),
        ];

        let groups = group_expenses(&expenses, &categories());

        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Housing", "Food", "Insurance"]);
        assert!(groups[2].items.is_empty());
        assert_eq!(groups[2].total_payment, 0);
    }

    #[test]
    fn test_group_appends_unknown_categories_in_first_seen_order() {
        let expenses = vec![
            expense(1, "Movie", 100, 1, "Leisure"),
            expense(2, "Rent", 200, 1, "Housing"),
            expense(3, "Gym", 300, 1, "Health"),
            expense(4, "Concert", 400, 1, "Leisure"),
        ];

        let groups = group_expenses(&expenses, &categories());

        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Housing", "Food", "Insurance", "Leisure", "Health"]);
        assert_eq!(groups[3].items.len(), 2);
        assert_eq!(groups[3].total_payment, 500);
    }

    #[test]
    fn test_group_totals_sum_to_grand_total() {
        let expenses = sample_book().expenses_for(2025).to_vec();
        let groups = group_expenses(&expenses, &categories());

        let group_sum: u64 = groups.iter().map(|g| g.total_payment).sum();
        assert_eq!(group_sum, total_payment(&expenses));
        assert_eq!(group_sum, 1_276_000);

        let item_count: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(item_count, expenses.len());
    }

    #[test]
    fn test_group_with_no_expenses() {
        let groups = group_expenses(&[], &categories());
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.total_payment == 0));
    }

    #[test]
    fn test_chart_percentages_sum_to_hundred() {
        let expenses = vec![
            expense(1, "A", 1, 1, "Housing"),
            expense(2, "B", 1, 1, "Food"),
            expense(3, "C", 1, 1, "Leisure"),
        ];
        let groups = group_expenses(&expenses, &categories());
        let slices = chart_slices(&groups, &categories());

        let sum: f64 = slices.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() <= 0.2, "sum was {}", sum);
        assert_eq!(slices[0].percentage, 33.3);
    }

    #[test]
    fn test_chart_percentages_zero_when_nothing_spent() {
        let groups = group_expenses(&[], &categories());
        let slices = chart_slices(&groups, &categories());

        assert_eq!(slices.len(), 3);
        assert!(slices.iter().all(|s| s.percentage == 0.0));
        assert_eq!(crate::format::format_percentage(slices[0].percentage), "0.0");
    }

    #[test]
    fn test_chart_includes_canonical_and_non_zero_groups() {
        let expenses = vec![expense(1, "Gym", 500, 1, "Health")];
        let groups = group_expenses(&expenses, &categories());
        let slices = chart_slices(&groups, &categories());

        let names: Vec<_> = slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Housing", "Food", "Insurance", "Health"]);
        assert_eq!(slices[3].value, 500);
        assert_eq!(slices[3].percentage, 100.0);
    }

    #[test]
    fn test_monthly_equivalent_rounds_up() {
        assert_eq!(monthly_equivalent(&expense(1, "Rent", 100_000, 12, "Housing")), 8_334);
        assert_eq!(monthly_equivalent(&expense(1, "Rent", 120_000, 12, "Housing")), 10_000);
        assert_eq!(monthly_equivalent(&expense(1, "Tax", 50_000, 1, "Housing")), 50_000);
    }

    #[test]
    fn test_yearly_summary_bundles_everything() {
        let book = sample_book();
        let summary = yearly_summary(book.expenses_for(2024), &categories());

        assert_eq!(summary.total_payment, 1_440_000);
        assert_eq!(summary.monthly_total, 80_000 + 40_000);
        assert_eq!(summary.groups.len(), 3);
        assert_eq!(summary.slices[0].percentage, 66.7);
    }

    #[test]
    fn test_next_id_spans_all_years() {
        assert_eq!(sample_book().next_expense_id(), 6);
        assert_eq!(ExpenseBook::default().next_expense_id(), 1);
    }

    #[test]
    fn test_add_assigns_next_id() {
        let book = ExpenseBook::new(vec![YearBucket {
            year: 2025,
            expenses: vec![
                expense(1, "A", 1, 1, "Food"),
                expense(2, "B", 1, 1, "Food"),
                expense(3, "C", 1, 1, "Food"),
            ],
        }]);

        let updated = book.with_expense_added(2025, draft("D", 10, "Food"));

        let added = updated.expenses_for(2025).last().unwrap();
        assert_eq!(added.id, 4);
        assert_eq!(added.name, "D");
        assert_eq!(book.expenses_for(2025).len(), 3);
    }

    #[test]
    fn test_add_to_empty_book_creates_bucket() {
        let updated = ExpenseBook::default().with_expense_added(2030, draft("Car", 300_000, "Leisure"));

        assert_eq!(updated.years(), vec![2030]);
        assert_eq!(updated.expenses_for(2030)[0].id, 1);
    }

    #[test]
    fn test_replace_swaps_only_matching_record() {
        let book = sample_book();
        let mut edited = book.expenses_for(2025)[1].clone();
        edited.payment = 250_000;

        let updated = book.with_expense_replaced(2025, edited).unwrap();

        assert_eq!(updated.expenses_for(2025)[1].payment, 250_000);
        assert_eq!(updated.expenses_for(2025)[0], book.expenses_for(2025)[0]);
        assert_eq!(updated.expenses_for(2024), book.expenses_for(2024));
        assert_eq!(book.expenses_for(2025)[1].payment, 200_000);
    }

    #[test]
    fn test_replace_unknown_record_fails() {
        let result = sample_book().with_expense_replaced(2024, expense(99, "X", 1, 1, "Food"));
        assert_eq!(result, Err(DomainError::ExpenseNotFound { year: 2024, id: 99 }));
    }

    #[test]
    fn test_delete_removes_exactly_one_record() {
        let book = sample_book();

        let updated = book.without_expense(2025, 4).unwrap();

        let ids: Vec<u32> = updated.expenses_for(2025).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 5]);
        assert_eq!(updated.expenses_for(2024), book.expenses_for(2024));
    }

    #[test]
    fn test_delete_from_wrong_year_fails() {
        let result = sample_book().without_expense(2024, 4);
        assert!(matches!(result, Err(DomainError::ExpenseNotFound { year: 2024, id: 4 })));
    }

    #[test]
    fn test_new_merges_duplicate_years() {
        let book = ExpenseBook::new(vec![
            YearBucket { year: 2025, expenses: vec![expense(1, "A", 1, 1, "Food")] },
            YearBucket { year: 2025, expenses: vec![expense(2, "B", 1, 1, "Food")] },
        ]);
        assert_eq!(book.buckets().len(), 1);
        assert_eq!(book.expenses_for(2025).len(), 2);
    }

    #[test]
    fn test_new_renumbers_colliding_ids_within_a_year() {
        let book = ExpenseBook::new(vec![
            YearBucket {
                year: 2025,
                expenses: vec![expense(1, "A", 1, 1, "Food"), expense(2, "B", 1, 1, "Food")],
            },
            YearBucket { year: 2025, expenses: vec![expense(1, "C", 1, 1, "Food")] },
            YearBucket { year: 2024, expenses: vec![expense(1, "D", 1, 1, "Food")] },
        ]);
        let ids: Vec<u32> = book.expenses_for(2025).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(book.expenses_for(2024)[0].id, 1);

        let updated = book.without_expense(2025, 1).unwrap();
        assert_eq!(updated.expenses_for(2025).len(), 2);
        assert!(updated.expenses_for(2025).iter().any(|e| e.name == "C"));
    }

    #[test]
    fn test_dashboard_year_prefers_current_then_latest_with_records() {
        let book = sample_book();
        assert_eq!(book.dashboard_year(2024), 2024);
        assert_eq!(book.dashboard_year(2026), 2025);
        assert_eq!(ExpenseBook::default().dashboard_year(2026), 2026);

        let emptied = book
            .without_expense(2025, 3)
            .and_then(|b| b.without_expense(2025, 4))
            .and_then(|b| b.without_expense(2025, 5))
            .unwrap();
        assert_eq!(emptied.dashboard_year(2026), 2024);
    }

    #[test]
    fn test_expenses_for_missing_year_is_empty() {
        assert!(sample_book().expenses_for(1999).is_empty());
    }
}
