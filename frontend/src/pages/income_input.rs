use lifeplan_domain::format::format_currency;
use lifeplan_domain::income_service::{total_income, with_income_added, without_income, IncomeDraft};
use shared::Income;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::forms::IncomeForm;
use crate::hooks::use_theme;
use crate::routes::Route;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct IncomeInputPageProps {
    pub incomes: Vec<Income>,
    pub currency_symbol: AttrValue,
    pub on_incomes_change: Callback<Vec<Income>>,
}

#[function_component(IncomeInputPage)]
pub fn income_input_page(props: &IncomeInputPageProps) -> Html {
    let theme = use_theme();
    let cell = style::table_cell_style(&theme);
    let symbol = props.currency_symbol.as_str();

    let on_submit = {
        let incomes = props.incomes.clone();
        let on_incomes_change = props.on_incomes_change.clone();
        Callback::from(move |draft: IncomeDraft| {
            on_incomes_change.emit(with_income_added(&incomes, draft));
        })
    };

    html! {
        <div class="income-input-page">
            <h2>{style::heading(&theme, "Income")}</h2>
            <IncomeForm {on_submit} />

            <section style={style::card_style(&theme)}>
                <table class="income-table" style={style::table_style(&theme)}>
                    <thead>
                        <tr>
                            <th style={cell.clone()}>{"Name"}</th>
                            <th style={cell.clone()}>{"Annual amount"}</th>
                            <th style={cell.clone()}></th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.incomes.iter().map(|income| {
                            let on_remove = {
                                let incomes = props.incomes.clone();
                                let on_incomes_change = props.on_incomes_change.clone();
                                let id = income.id;
                                Callback::from(move |_: MouseEvent| {
                                    on_incomes_change.emit(without_income(&incomes, id));
                                })
                            };
                            html! {
                                <tr key={income.id}>
                                    <td style={cell.clone()}>{&income.name}</td>
                                    <td style={cell.clone()}>{format_currency(income.amount, symbol)}</td>
                                    <td style={cell.clone()}>
                                        <button type="button" style={style::danger_button_style(&theme)} onclick={on_remove}>
                                            {"Remove"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                    <tfoot>
                        <tr>
                            <td style={cell.clone()}><strong>{"Total"}</strong></td>
                            <td style={cell.clone()}><strong>{format_currency(total_income(&props.incomes), symbol)}</strong></td>
                            <td style={cell.clone()}></td>
                        </tr>
                    </tfoot>
                </table>
            </section>

            <Link<Route> to={Route::Salary}>
                <span style={style::link_style(&theme)}>{"Estimate salary deductions →"}</span>
            </Link<Route>>
        </div>
    }
}
