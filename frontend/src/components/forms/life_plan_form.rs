use lifeplan_domain::form_validation::{
    validate_life_plan_form, FieldErrors, LifePlanField, LifePlanFormInput,
};
use lifeplan_domain::plan_service::LifePlanDraft;
use yew::prelude::*;

use crate::components::field::TextField;
use crate::hooks::use_theme;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct LifePlanFormProps {
    pub on_submit: Callback<LifePlanDraft>,
}

#[function_component(LifePlanForm)]
pub fn life_plan_form(props: &LifePlanFormProps) -> Html {
    let theme = use_theme();
    let input = use_state(LifePlanFormInput::default);
    let errors = use_state(FieldErrors::<LifePlanField>::new);

    let on_name_change = {
        let input = input.clone();
        Callback::from(move |name: String| {
            input.set(LifePlanFormInput {
                name,
                ..(*input).clone()
            });
        })
    };

    let on_rate_change = {
        let input = input.clone();
        Callback::from(move |inflation_rate: String| {
            input.set(LifePlanFormInput {
                inflation_rate,
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
            match validate_life_plan_form(&input) {
                Ok(draft) => {
                    input.set(LifePlanFormInput::default());
                    errors.set(FieldErrors::new());
                    on_submit.emit(draft);
                }
                Err(field_errors) => errors.set(field_errors),
            }
        })
    };

    html! {
        <form class="life-plan-form" style={style::card_style(&theme)} {onsubmit}>
            <TextField
                id="plan-name"
                label="Plan name"
                placeholder="Standard plan"
                value={input.name.clone()}
                error={errors.message(LifePlanField::Name)}
                on_change={on_name_change}
            />
            <TextField
                id="plan-inflation-rate"
                label="Inflation rate (%)"
                input_type="number"
                placeholder="1.0"
                value={input.inflation_rate.clone()}
                error={errors.message(LifePlanField::InflationRate)}
                on_change={on_rate_change}
            />
            <button type="submit" style={style::button_style(&theme, true)}>{"Create plan"}</button>
        </form>
    }
}
