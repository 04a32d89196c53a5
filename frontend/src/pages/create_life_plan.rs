use lifeplan_domain::plan_service::{with_plan_added, LifePlanDraft};
use shared::LifePlan;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::forms::LifePlanForm;
use crate::hooks::use_theme;
use crate::routes::Route;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct CreateLifePlanPageProps {
    pub plans: Vec<LifePlan>,
    pub on_plans_change: Callback<Vec<LifePlan>>,
}

#[function_component(CreateLifePlanPage)]
pub fn create_life_plan_page(props: &CreateLifePlanPageProps) -> Html {
    let theme = use_theme();
    let navigator = use_navigator();

    let on_submit = {
        let plans = props.plans.clone();
        let on_plans_change = props.on_plans_change.clone();
        Callback::from(move |draft: LifePlanDraft| {
            let (updated, id) = with_plan_added(&plans, draft);
            log::info!("Life plan {} created", id);
            on_plans_change.emit(updated);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    html! {
        <div class="create-life-plan-page">
            <h2>{style::heading(&theme, "Create a life plan")}</h2>
            <LifePlanForm {on_submit} />
        </div>
    }
}
