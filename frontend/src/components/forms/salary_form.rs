use lifeplan_domain::form_validation::{validate_salary_form, FieldErrors, SalaryField};
use yew::prelude::*;

use crate::components::field::TextField;
use crate::hooks::use_theme;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct SalaryFormProps {
    /// Receives the validated gross salary
    pub on_submit: Callback<u64>,
}

#[function_component(SalaryForm)]
pub fn salary_form(props: &SalaryFormProps) -> Html {
    let theme = use_theme();
    let gross = use_state(String::new);
    let errors = use_state(FieldErrors::<SalaryField>::new);

    let on_gross_change = {
        let gross = gross.clone();
        Callback::from(move |value: String| gross.set(value))
    };

    let onsubmit = {
        let gross = gross.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_salary_form(&gross) {
                Ok(amount) => {
                    errors.set(FieldErrors::new());
                    on_submit.emit(amount);
                }
                Err(field_errors) => errors.set(field_errors),
            }
        })
    };

    html! {
        <form class="salary-form" style={style::card_style(&theme)} {onsubmit}>
            <TextField
                id="salary-gross"
                label="Gross monthly salary"
                placeholder="300,000"
                value={(*gross).clone()}
                error={errors.message(SalaryField::Gross)}
                on_change={on_gross_change}
            />
            <button type="submit" style={style::button_style(&theme, true)}>{"Estimate deductions"}</button>
        </form>
    }
}
