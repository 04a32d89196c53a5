use lifeplan_domain::expense_service::{monthly_equivalent, ExpenseSummary};
use lifeplan_domain::format::format_currency;
use shared::Expense;
use yew::prelude::*;

use crate::hooks::use_theme;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub summary: ExpenseSummary,
    pub currency_symbol: AttrValue,
    pub on_edit: Callback<Expense>,
    pub on_delete: Callback<Expense>,
}

/// Expenses grouped by category, one header row per group
#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    let theme = use_theme();
    let cell = style::table_cell_style(&theme);
    let symbol = props.currency_symbol.as_str();

    html! {
        <section class="expense-table-section" style={style::card_style(&theme)}>
            <table class="expense-table" style={style::table_style(&theme)}>
                <thead>
                    <tr>
                        <th style={cell.clone()}>{"Name"}</th>
                        <th style={cell.clone()}>{"Group"}</th>
                        <th style={cell.clone()}>{"Yearly"}</th>
                        <th style={cell.clone()}>{"Times / year"}</th>
                        <th style={cell.clone()}>{"Per payment"}</th>
                        <th style={cell.clone()}>{"Duration"}</th>
                        <th style={cell.clone()}></th>
                    </tr>
                </thead>
                <tbody>
                    {for props.summary.groups.iter().map(|group| html! {
                        <>
                            <tr class="group-row" style={style::group_row_style(&theme)}>
                                <td style={cell.clone()} colspan="2">{&group.name}</td>
                                <td style={cell.clone()} colspan="5">{format_currency(group.total_payment, symbol)}</td>
                            </tr>
                            {if group.items.is_empty() {
                                html! {
                                    <tr class="empty-row">
                                        <td style={format!("{} {}", cell, style::muted_text_style(&theme))} colspan="7">
                                            {"No expenses in this category"}
                                        </td>
                                    </tr>
                                }
                            } else {
                                html! {
                                    <>{for group.items.iter().map(|expense| {
                                        let on_edit = {
                                            let on_edit = props.on_edit.clone();
                                            let expense = expense.clone();
                                            Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
                                        };
                                        let on_delete = {
                                            let on_delete = props.on_delete.clone();
                                            let expense = expense.clone();
                                            Callback::from(move |_: MouseEvent| on_delete.emit(expense.clone()))
                                        };
                                        html! {
                                            <tr key={expense.id} class="expense-row">
                                                <td style={cell.clone()}>{&expense.name}</td>
                                                <td style={cell.clone()}>{&expense.group}</td>
                                                <td style={cell.clone()}>{format_currency(expense.payment, symbol)}</td>
                                                <td style={cell.clone()}>{expense.monthly.to_string()}</td>
                                                <td style={cell.clone()}>{format_currency(monthly_equivalent(expense), symbol)}</td>
                                                <td style={cell.clone()}>
                                                    {expense.duration.as_ref().map(ToString::to_string).unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td style={cell.clone()}>
                                                    <button type="button" style={style::button_style(&theme, false)} onclick={on_edit}>{"Edit"}</button>
                                                    {" "}
                                                    <button type="button" style={style::danger_button_style(&theme)} onclick={on_delete}>{"Delete"}</button>
                                                </td>
                                            </tr>
                                        }
                                    })}</>
                                }
                            }}
                        </>
                    })}
                </tbody>
                <tfoot>
                    <tr class="total-row">
                        <td style={cell.clone()} colspan="2"><strong>{"Total"}</strong></td>
                        <td style={cell.clone()}><strong>{format_currency(props.summary.total_payment, symbol)}</strong></td>
                        <td style={cell.clone()}></td>
                        <td style={cell.clone()}><strong>{format_currency(props.summary.monthly_total, symbol)}</strong></td>
                        <td style={cell.clone()} colspan="2"></td>
                    </tr>
                </tfoot>
            </table>
        </section>
    }
}
