use lifeplan_domain::form_validation::{
    validate_expense_form, DurationChoice, ExpenseField, ExpenseFormInput, FieldErrors,
};
use shared::ExpenseDraft;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::field::{FieldError, SelectField, TextField};
use crate::hooks::use_theme;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    /// Starting values; the form resets whenever this changes
    pub initial: ExpenseFormInput,
    pub categories: Vec<String>,
    pub groups: Vec<String>,
    pub submit_label: AttrValue,
    pub on_submit: Callback<ExpenseDraft>,
    pub on_cancel: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let theme = use_theme();
    let input = use_state(|| props.initial.clone());
    let errors = use_state(FieldErrors::<ExpenseField>::new);

    use_effect_with(props.initial.clone(), {
        let input = input.clone();
        let errors = errors.clone();
        move |initial: &ExpenseFormInput| {
            input.set(initial.clone());
            errors.set(FieldErrors::new());
            || ()
        }
    });

    let update = |apply: fn(&mut ExpenseFormInput, String)| {
        let input = input.clone();
        Callback::from(move |value: String| {
            let mut next = (*input).clone();
            apply(&mut next, value);
            input.set(next);
        })
    };

    let on_duration_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let radio: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*input).clone();
            next.duration = DurationChoice::from_value(&radio.value());
            input.set(next);
        })
    };

    let onsubmit = {
        let input = input.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_expense_form(&input) {
                Ok(draft) => {
                    errors.set(FieldErrors::new());
                    on_submit.emit(draft);
                }
                Err(field_errors) => {
                    log::debug!("Expense form has {} invalid field(s)", field_errors.len());
                    errors.set(field_errors);
                }
            }
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <form class="expense-form" {onsubmit}>
            <TextField
                id="expense-name"
                label="Name"
                placeholder="Rent, groceries, phone..."
                value={input.name.clone()}
                error={errors.message(ExpenseField::Name)}
                on_change={update(|form, value| form.name = value)}
            />
            <TextField
                id="expense-payment"
                label="Yearly payment"
                placeholder="120,000"
                value={input.payment.clone()}
                error={errors.message(ExpenseField::Payment)}
                on_change={update(|form, value| form.payment = value)}
            />
            <TextField
                id="expense-monthly"
                label="Times per year"
                input_type="number"
                placeholder="12"
                value={input.monthly.clone()}
                error={errors.message(ExpenseField::Monthly)}
                on_change={update(|form, value| form.monthly = value)}
            />
            <SelectField
                id="expense-category"
                label="Category"
                placeholder={AttrValue::from("Select a category")}
                options={props.categories.clone()}
                value={input.category.clone()}
                error={errors.message(ExpenseField::Category)}
                on_change={update(|form, value| form.category = value)}
            />
            <SelectField
                id="expense-group"
                label="Group"
                placeholder={AttrValue::from("Select a group")}
                options={props.groups.clone()}
                value={input.group.clone()}
                error={errors.message(ExpenseField::Group)}
                on_change={update(|form, value| form.group = value)}
            />

            <fieldset class="duration" style={style::field_style(&theme)}>
                <legend>{"Duration"}</legend>
                {for DurationChoice::ALL.iter().map(|choice| html! {
                    <label class="duration-option">
                        <input
                            type="radio"
                            name="expense-duration"
                            value={choice.as_str()}
                            checked={input.duration == *choice}
                            onchange={on_duration_change.clone()}
                        />
                        {choice.label()}
                    </label>
                })}
                {if input.duration == DurationChoice::Until {
                    html! {
                        <TextField
                            id="expense-end-date"
                            label="End date"
                            input_type="date"
                            value={input.end_date.clone()}
                            error={errors.message(ExpenseField::EndDate)}
                            on_change={update(|form, value| form.end_date = value)}
                        />
                    }
                } else {
                    html! { <FieldError error={errors.message(ExpenseField::EndDate)} /> }
                }}
            </fieldset>

            <div class="form-buttons" style="display: flex; gap: 8px; justify-content: flex-end;">
                <button type="button" style={style::button_style(&theme, false)} onclick={on_cancel}>
                    {"Cancel"}
                </button>
                <button type="submit" style={style::button_style(&theme, true)}>
                    {props.submit_label.clone()}
                </button>
            </div>
        </form>
    }
}
