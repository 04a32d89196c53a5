use anyhow::{anyhow, Context as _};
use wasm_bindgen::JsValue;
use lifeplan_domain::expense_service::ExpenseBook;
use lifeplan_domain::sample_data::SampleData;
use lifeplan_domain::theme::{Mode, ThemeConfig};
use lifeplan_domain::AppConfig;
use shared::{Income, LifePlan};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Header, Sidebar};
use crate::pages::{
    CreateLifePlanPage, ExpensesPage, HomePage, IncomeInputPage, NotFoundPage, SalaryPage,
};
use crate::routes::{bare_base_redirect, router_basename, Route};
use crate::services::{date_utils, style};

/// Bundled settings, or defaults when the bundle cannot be read
pub fn load_config() -> AppConfig {
    match AppConfig::embedded().context("reading bundled settings") {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{:#}; using defaults", e);
            AppConfig::default()
        }
    }
}

/// Rewrite a visit to the bare base path so the router lands on the home page
pub fn redirect_bare_base(base_path: &str) -> anyhow::Result<()> {
    let window = web_sys::window().context("no browser window")?;
    let location = window.location();
    let pathname = location.pathname().map_err(js_error)?;
    let Some(target) = bare_base_redirect(&pathname, base_path) else {
        return Ok(());
    };

    let url = format!(
        "{}{}{}",
        target,
        location.search().map_err(js_error)?,
        location.hash().map_err(js_error)?
    );
    window
        .history()
        .map_err(js_error)?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        .map_err(js_error)?;
    log::debug!("Redirected {} to {}", pathname, url);
    Ok(())
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

fn load_sample() -> SampleData {
    match SampleData::embedded().context("reading sample records") {
        Ok(sample) => sample,
        Err(e) => {
            log::warn!("{:#}; starting empty", e);
            SampleData::default()
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

/// Root component. Owns every piece of session state and hands each page
/// the slice it needs plus a callback that replaces that slice.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let sample = use_memo((), |_| load_sample());

    let mode = use_state(|| config.mode());
    let plans = use_state(|| sample.plans.clone());
    let incomes = use_state(|| sample.incomes.clone());
    let book = use_state(|| sample.expense_book());
    let current_year = use_memo((), |_| date_utils::current_year());

    let theme = ThemeConfig::for_mode(*mode);

    let on_mode_change = {
        let mode = mode.clone();
        Callback::from(move |next: Mode| {
            log::info!("Switching to {} mode", next);
            mode.set(next);
        })
    };
    let on_plans_change = {
        let plans = plans.clone();
        Callback::from(move |next: Vec<LifePlan>| plans.set(next))
    };
    let on_incomes_change = {
        let incomes = incomes.clone();
        Callback::from(move |next: Vec<Income>| incomes.set(next))
    };
    let on_book_change = {
        let book = book.clone();
        Callback::from(move |next: ExpenseBook| book.set(next))
    };

    let switch = {
        let plans = (*plans).clone();
        let incomes = (*incomes).clone();
        let book = (*book).clone();
        let config = config.clone();
        let current_year = *current_year;
        move |route: Route| -> Html {
            let currency_symbol = AttrValue::from(config.currency_symbol.clone());
            match route {
                Route::Home => html! {
                    <HomePage plans={plans.clone()} dashboard_year={book.dashboard_year(current_year)} />
                },
                Route::CreateLifePlan => html! {
                    <CreateLifePlanPage plans={plans.clone()} on_plans_change={on_plans_change.clone()} />
                },
                Route::Expenses { lifeplan_id, year } => html! {
                    <ExpensesPage
                        {lifeplan_id}
                        {year}
                        plans={plans.clone()}
                        book={book.clone()}
                        categories={config.categories.clone()}
                        groups={config.groups.clone()}
                        {currency_symbol}
                        on_book_change={on_book_change.clone()}
                    />
                },
                Route::IncomeInput => html! {
                    <IncomeInputPage
                        incomes={incomes.clone()}
                        {currency_symbol}
                        on_incomes_change={on_incomes_change.clone()}
                    />
                },
                Route::Salary => html! { <SalaryPage {currency_symbol} /> },
                Route::NotFound => html! { <NotFoundPage /> },
            }
        }
    };

    html! {
        <ContextProvider<ThemeConfig> context={theme.clone()}>
            <BrowserRouter basename={router_basename(&config.base_path)}>
                <div class="app" style={style::page_style(&theme)}>
                    <Header mode={*mode} {on_mode_change} />
                    <div class="layout" style="display: flex; flex: 1;">
                        <Sidebar />
                        <main style={style::content_style(&theme)}>
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                </div>
            </BrowserRouter>
        </ContextProvider<ThemeConfig>>
    }
}
