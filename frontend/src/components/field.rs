use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_theme;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<String>,
}

/// Labelled input with its validation message underneath
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let theme = use_theme();

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="form-group" style={style::field_style(&theme)}>
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                style={style::input_style(&theme, props.error.is_some())}
                {oninput}
            />
            <FieldError error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub options: Vec<String>,
    /// Text of the empty first option; no empty option when absent
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_change: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let theme = use_theme();

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class="form-group" style={style::field_style(&theme)}>
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <select
                id={props.id.clone()}
                style={style::input_style(&theme, props.error.is_some())}
                {onchange}
            >
                {if let Some(placeholder) = &props.placeholder {
                    html! {
                        <option value="" selected={props.value.is_empty()}>{placeholder.clone()}</option>
                    }
                } else {
                    html! {}
                }}
                {for props.options.iter().map(|option| html! {
                    <option value={option.clone()} selected={*option == props.value}>{option}</option>
                })}
            </select>
            <FieldError error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub error: Option<String>,
}

#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    let theme = use_theme();
    match &props.error {
        Some(message) => html! {
            <span class="field-error" style={style::error_text_style(&theme)}>{message}</span>
        },
        None => html! {},
    }
}
