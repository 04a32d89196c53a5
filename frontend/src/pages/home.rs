use shared::LifePlan;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_theme;
use crate::routes::Route;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub plans: Vec<LifePlan>,
    /// Year each plan's link opens
    pub dashboard_year: i32,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let theme = use_theme();

    html! {
        <div class="home-page">
            <h2>{style::heading(&theme, "Life plans")}</h2>
            {if props.plans.is_empty() {
                html! {
                    <p style={style::muted_text_style(&theme)}>{"No life plans yet."}</p>
                }
            } else {
                html! {
                    <ul class="plan-list" style="list-style: none; padding: 0;">
                        {for props.plans.iter().map(|plan| html! {
                            <li key={plan.id} style={style::card_style(&theme)}>
                                <Link<Route> to={Route::Expenses { lifeplan_id: plan.id, year: props.dashboard_year }}>
                                    <span style={style::link_style(&theme)}>{&plan.name}</span>
                                </Link<Route>>
                                <span style={style::muted_text_style(&theme)}>
                                    {format!(" · inflation {}%", plan.inflation_rate)}
                                </span>
                            </li>
                        })}
                    </ul>
                }
            }}
            <Link<Route> to={Route::CreateLifePlan}>
                <span style={style::button_style(&theme, true)}>{"Create a life plan"}</span>
            </Link<Route>>
        </div>
    }
}
