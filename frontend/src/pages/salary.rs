use lifeplan_domain::format::format_currency;
use lifeplan_domain::salary_service::{rate_label, SalaryService};
use shared::SalaryDeductions;
use yew::prelude::*;

use crate::components::forms::SalaryForm;
use crate::hooks::use_theme;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct SalaryPageProps {
    pub currency_symbol: AttrValue,
}

#[function_component(SalaryPage)]
pub fn salary_page(props: &SalaryPageProps) -> Html {
    let theme = use_theme();
    let service = use_memo((), |_| SalaryService::new());
    let deductions = use_state(|| Option::<SalaryDeductions>::None);

    let on_submit = {
        let service = service.clone();
        let deductions = deductions.clone();
        Callback::from(move |gross: u64| deductions.set(Some(service.estimate(gross))))
    };

    let cell = style::table_cell_style(&theme);
    let symbol = props.currency_symbol.as_str();
    let rates = service.rates();
    let rate_labels = [
        rates.resident_tax,
        rates.income_tax,
        rates.pension,
        rates.health_insurance,
        rates.nursing_insurance,
        rates.employment_insurance,
    ]
    .map(rate_label);

    html! {
        <div class="salary-page">
            <h2>{style::heading(&theme, "Salary deductions")}</h2>
            <SalaryForm {on_submit} />
            {match *deductions {
                Some(result) => html! {
                    <section style={style::card_style(&theme)}>
                        <table class="deduction-table" style={style::table_style(&theme)}>
                            <thead>
                                <tr>
                                    <th style={cell.clone()}>{"Deduction"}</th>
                                    <th style={cell.clone()}>{"Rate"}</th>
                                    <th style={cell.clone()}>{"Amount"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for result.line_items().iter().zip(rate_labels.iter()).map(|((label, amount), rate)| html! {
                                    <tr>
                                        <td style={cell.clone()}>{*label}</td>
                                        <td style={cell.clone()}>{rate}</td>
                                        <td style={cell.clone()}>{format_currency(*amount, symbol)}</td>
                                    </tr>
                                })}
                            </tbody>
                            <tfoot>
                                <tr>
                                    <td style={cell.clone()} colspan="2"><strong>{"Total deductions"}</strong></td>
                                    <td style={cell.clone()}><strong>{format_currency(result.total(), symbol)}</strong></td>
                                </tr>
                                <tr>
                                    <td style={cell.clone()} colspan="2"><strong>{"Take-home pay"}</strong></td>
                                    <td style={cell.clone()}><strong>{format_currency(result.take_home(), symbol)}</strong></td>
                                </tr>
                            </tfoot>
                        </table>
                        <p style={style::muted_text_style(&theme)}>
                            {"Flat-rate estimate only. Brackets and regional rules are not applied."}
                        </p>
                    </section>
                },
                None => html! {},
            }}
        </div>
    }
}
