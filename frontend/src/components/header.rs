use lifeplan_domain::theme::Mode;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_theme;
use crate::routes::Route;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub mode: Mode,
    pub on_mode_change: Callback<Mode>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let theme = use_theme();

    let onchange = {
        let on_mode_change = props.on_mode_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_mode_change.emit(Mode::from_name(&select.value()));
        })
    };

    html! {
        <header class="header" style={style::header_style(&theme)}>
            <h1 style="margin: 0; font-size: 1.4rem;">
                <Link<Route> to={Route::Home}>
                    <span style={style::link_style(&theme)}>{style::heading(&theme, "Life Planner")}</span>
                </Link<Route>>
            </h1>
            <label class="mode-selector">
                {"Mode "}
                <select {onchange}>
                    {for Mode::ALL.iter().map(|mode| html! {
                        <option value={mode.name()} selected={*mode == props.mode}>{mode.label()}</option>
                    })}
                </select>
            </label>
        </header>
    }
}
