use lifeplan_domain::expense_service::{yearly_summary, ExpenseBook};
use lifeplan_domain::plan_service::find_plan;
use lifeplan_domain::theme::ThemeConfig;
use shared::{Expense, ExpenseDraft, LifePlan};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::expenses::{DeleteExpenseModal, ExpenseModal, ExpensePieChart, ExpenseTable};
use crate::hooks::use_theme;
use crate::routes::Route;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct ExpensesPageProps {
    pub lifeplan_id: u32,
    pub year: i32,
    pub plans: Vec<LifePlan>,
    pub book: ExpenseBook,
    pub categories: Vec<String>,
    pub groups: Vec<String>,
    pub currency_symbol: AttrValue,
    pub on_book_change: Callback<ExpenseBook>,
}

/// Which dialog is open over the dashboard
#[derive(Clone, PartialEq)]
enum ModalState {
    Closed,
    Adding,
    Editing(Expense),
    Deleting(Expense),
}

#[function_component(ExpensesPage)]
pub fn expenses_page(props: &ExpensesPageProps) -> Html {
    let theme = use_theme();
    let modal = use_state(|| ModalState::Closed);

    let plan = find_plan(&props.plans, props.lifeplan_id);
    let summary = yearly_summary(props.book.expenses_for(props.year), &props.categories);
    // Categories only present in the data stay selectable when editing
    let category_options: Vec<String> = summary.groups.iter().map(|group| group.name.clone()).collect();

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalState::Closed))
    };

    let on_add_click = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(ModalState::Adding))
    };

    let on_edit = {
        let modal = modal.clone();
        Callback::from(move |expense: Expense| modal.set(ModalState::Editing(expense)))
    };

    let on_delete = {
        let modal = modal.clone();
        Callback::from(move |expense: Expense| modal.set(ModalState::Deleting(expense)))
    };

    let on_expense_submit = {
        let modal = modal.clone();
        let book = props.book.clone();
        let year = props.year;
        let on_book_change = props.on_book_change.clone();
        Callback::from(move |draft: ExpenseDraft| {
            let updated = match &*modal {
                ModalState::Editing(existing) => {
                    book.with_expense_replaced(year, draft.apply_to(existing))
                }
                _ => Ok(book.with_expense_added(year, draft)),
            };
            match updated {
                Ok(updated) => on_book_change.emit(updated),
                Err(e) => log::warn!("Expense not saved: {}", e),
            }
            modal.set(ModalState::Closed);
        })
    };

    let on_delete_confirm = {
        let modal = modal.clone();
        let book = props.book.clone();
        let year = props.year;
        let on_book_change = props.on_book_change.clone();
        Callback::from(move |id: u32| {
            match book.without_expense(year, id) {
                Ok(updated) => on_book_change.emit(updated),
                Err(e) => log::warn!("Expense not deleted: {}", e),
            }
            modal.set(ModalState::Closed);
        })
    };

    let (form_open, editing) = match &*modal {
        ModalState::Adding => (true, None),
        ModalState::Editing(expense) => (true, Some(expense.clone())),
        _ => (false, None),
    };
    let deleting = match &*modal {
        ModalState::Deleting(expense) => Some(expense.clone()),
        _ => None,
    };

    let (previous_year, next_year) = adjacent_years(props.year);

    let Some(plan) = plan else {
        return html! {
            <div class="expenses-page">
                <h2>{style::heading(&theme, "Life plan not found")}</h2>
                <p style={style::muted_text_style(&theme)}>
                    {format!("There is no life plan with id {}.", props.lifeplan_id)}
                </p>
                <Link<Route> to={Route::Home}>
                    <span style={style::link_style(&theme)}>{"Back to life plans"}</span>
                </Link<Route>>
            </div>
        };
    };

    html! {
        <div class="expenses-page">
            <h2>{style::heading(&theme, &format!("{}: expenses for {}", plan.name, props.year))}</h2>

            <div class="year-nav" style="display: flex; gap: 12px; align-items: center; margin-bottom: 16px;">
                {year_link(props.lifeplan_id, previous_year, |year| format!("← {}", year), &theme)}
                <strong>{props.year.to_string()}</strong>
                {year_link(props.lifeplan_id, next_year, |year| format!("{} →", year), &theme)}
                <span style="flex: 1;"></span>
                <button type="button" style={style::button_style(&theme, true)} onclick={on_add_click}>
                    {"Add expense"}
                </button>
            </div>

            <ExpensePieChart
                slices={summary.slices.clone()}
                theme={theme.clone()}
                currency_symbol={props.currency_symbol.clone()}
            />
            <ExpenseTable
                {summary}
                currency_symbol={props.currency_symbol.clone()}
                {on_edit}
                {on_delete}
            />

            <ExpenseModal
                is_open={form_open}
                {editing}
                categories={category_options}
                groups={props.groups.clone()}
                on_submit={on_expense_submit}
                on_close={close_modal.clone()}
            />
            <DeleteExpenseModal
                expense={deleting}
                currency_symbol={props.currency_symbol.clone()}
                on_confirm={on_delete_confirm}
                on_close={close_modal}
            />
        </div>
    }
}

/// Years either side of `year`; `None` past the ends of the `i32` range
fn adjacent_years(year: i32) -> (Option<i32>, Option<i32>) {
    (year.checked_sub(1), year.checked_add(1))
}

fn year_link(
    lifeplan_id: u32,
    year: Option<i32>,
    label: fn(i32) -> String,
    theme: &ThemeConfig,
) -> Html {
    match year {
        Some(year) => html! {
            <Link<Route> to={Route::Expenses { lifeplan_id, year }}>
                <span style={style::link_style(theme)}>{label(year)}</span>
            </Link<Route>>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_years() {
        assert_eq!(adjacent_years(2025), (Some(2024), Some(2026)));
    }

    #[test]
    fn test_adjacent_years_at_range_ends() {
        assert_eq!(adjacent_years(i32::MAX), (Some(i32::MAX - 1), None));
        assert_eq!(adjacent_years(i32::MIN), (None, Some(i32::MIN + 1)));
    }
}
