use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_theme;
use crate::routes::Route;
use crate::services::style;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let theme = use_theme();
    html! {
        <div class="not-found-page">
            <h2>{style::heading(&theme, "Page not found")}</h2>
            <Link<Route> to={Route::Home}>
                <span style={style::link_style(&theme)}>{"Back to life plans"}</span>
            </Link<Route>>
        </div>
    }
}
