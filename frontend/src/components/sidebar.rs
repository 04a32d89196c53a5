use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_theme;
use crate::routes::Route;
use crate::services::style;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let theme = use_theme();
    let current = use_route::<Route>();

    let entries = [
        (Route::Home, "Life plans"),
        (Route::CreateLifePlan, "New life plan"),
        (Route::IncomeInput, "Income"),
        (Route::Salary, "Salary deductions"),
    ];

    html! {
        <nav class="sidebar" style={style::sidebar_style(&theme)}>
            {for entries.into_iter().map(|(route, label)| {
                let active = current.as_ref() == Some(&route);
                let link_style = if active {
                    format!("{} font-weight: 700;", style::link_style(&theme))
                } else {
                    style::link_style(&theme)
                };
                html! {
                    <Link<Route> to={route}>
                        <span style={link_style}>{label}</span>
                    </Link<Route>>
                }
            })}
        </nav>
    }
}
