use lifeplan_domain::form_validation::{
    validate_income_form, FieldErrors, IncomeField, IncomeFormInput,
};
use lifeplan_domain::income_service::IncomeDraft;
use yew::prelude::*;

use crate::components::field::TextField;
use crate::hooks::use_theme;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct IncomeFormProps {
    pub on_submit: Callback<IncomeDraft>,
}

#[function_component(IncomeForm)]
pub fn income_form(props: &IncomeFormProps) -> Html {
    let theme = use_theme();
    let input = use_state(IncomeFormInput::default);
    let errors = use_state(FieldErrors::<IncomeField>::new);

    let on_name_change = {
        let input = input.clone();
        Callback::from(move |name: String| {
            input.set(IncomeFormInput {
                name,
                ..(*input).clone()
            });
        })
    };

    let on_amount_change = {
        let input = input.clone();
        Callback::from(move |amount: String| {
            input.set(IncomeFormInput {
                amount,
                ..(*input).clone()
            });
        })
    };

    let onsubmit = {
        let input = input.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_income_form(&input) {
                Ok(draft) => {
                    input.set(IncomeFormInput::default());
                    errors.set(FieldErrors::new());
                    on_submit.emit(draft);
                }
                Err(field_errors) => errors.set(field_errors),
            }
        })
    };

    html! {
        <form class="income-form" style={style::card_style(&theme)} {onsubmit}>
            <TextField
                id="income-name"
                label="Income name"
                placeholder="Salary, bonus, side job..."
                value={input.name.clone()}
                error={errors.message(IncomeField::Name)}
                on_change={on_name_change}
            />
            <TextField
                id="income-amount"
                label="Annual amount"
                placeholder="4,800,000"
                value={input.amount.clone()}
                error={errors.message(IncomeField::Amount)}
                on_change={on_amount_change}
            />
            <button type="submit" style={style::button_style(&theme, true)}>{"Add income"}</button>
        </form>
    }
}
