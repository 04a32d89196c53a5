use lifeplan_domain::form_validation::ExpenseFormInput;
use shared::{Expense, ExpenseDraft};
use yew::prelude::*;

use crate::components::forms::ExpenseForm;
use crate::components::modal::Modal;
use crate::hooks::use_theme;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct ExpenseModalProps {
    pub is_open: bool,
    /// Record being edited; `None` opens an empty form for a new expense
    pub editing: Option<Expense>,
    pub categories: Vec<String>,
    pub groups: Vec<String>,
    pub on_submit: Callback<ExpenseDraft>,
    pub on_close: Callback<()>,
}

#[function_component(ExpenseModal)]
pub fn expense_modal(props: &ExpenseModalProps) -> Html {
    let theme = use_theme();

    let (title, submit_label, initial) = match &props.editing {
        Some(expense) => (
            "Edit expense",
            "Save changes",
            ExpenseFormInput::from_draft(&ExpenseDraft::from(expense)),
        ),
        None => ("Add expense", "Add expense", ExpenseFormInput::default()),
    };

    let category_hint = props
        .editing
        .as_ref()
        .map(|expense| format!("Category: {} / Group: {}", expense.category, expense.group));

    html! {
        <Modal is_open={props.is_open} title={title} on_close={props.on_close.clone()}>
            {if let Some(hint) = category_hint {
                html! { <p class="category-hint" style={style::muted_text_style(&theme)}>{hint}</p> }
            } else {
                html! {}
            }}
            <ExpenseForm
                {initial}
                categories={props.categories.clone()}
                groups={props.groups.clone()}
                submit_label={submit_label}
                on_submit={props.on_submit.clone()}
                on_cancel={props.on_close.clone()}
            />
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
pub struct DeleteExpenseModalProps {
    pub expense: Option<Expense>,
    pub currency_symbol: AttrValue,
    pub on_confirm: Callback<u32>,
    pub on_close: Callback<()>,
}

#[function_component(DeleteExpenseModal)]
pub fn delete_expense_modal(props: &DeleteExpenseModalProps) -> Html {
    let theme = use_theme();

    let Some(expense) = props.expense.clone() else {
        return html! {};
    };

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        let id = expense.id;
        Callback::from(move |_: MouseEvent| on_confirm.emit(id))
    };
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal is_open=true title="Delete expense" on_close={props.on_close.clone()}>
            <p>
                {format!(
                    "Delete \"{}\" ({} per year, {})?",
                    expense.name,
                    lifeplan_domain::format::format_currency(expense.payment, &props.currency_symbol),
                    expense.category,
                )}
            </p>
            <div class="form-buttons" style="display: flex; gap: 8px; justify-content: flex-end;">
                <button type="button" style={style::button_style(&theme, false)} onclick={on_cancel}>{"Cancel"}</button>
                <button type="button" style={style::danger_button_style(&theme)} onclick={on_confirm}>{"Delete"}</button>
            </div>
        </Modal>
    }
}
