use lifeplan_domain::format::{format_currency, format_percentage};
use lifeplan_domain::theme::ThemeConfig;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::ChartSlice;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::style;

const CANVAS_SIZE: u32 = 360;

#[derive(Properties, PartialEq)]
pub struct ExpensePieChartProps {
    pub slices: Vec<ChartSlice>,
    pub theme: ThemeConfig,
    pub currency_symbol: AttrValue,
}

pub enum Msg {
    DrawChart,
}

/// Category shares drawn onto a canvas, with a legend beside it
pub struct ExpensePieChart {
    canvas_ref: NodeRef,
}

impl Component for ExpensePieChart {
    type Message = Msg;
    type Properties = ExpensePieChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DrawChart => {
                self.draw_chart(ctx.props());
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        ctx.link().send_message(Msg::DrawChart);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let theme = &props.theme;
        let has_spending = props.slices.iter().any(|slice| slice.value > 0);

        html! {
            <section class="expense-chart" style={format!("{} display: flex; gap: 24px; align-items: center; flex-wrap: wrap;", style::card_style(theme))}>
                {if has_spending {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            class="expense-chart-canvas"
                            width={CANVAS_SIZE.to_string()}
                            height={CANVAS_SIZE.to_string()}
                        ></canvas>
                    }
                } else {
                    html! {
                        <div class="chart-empty" style={style::muted_text_style(theme)}>
                            {"No expenses recorded for this year"}
                        </div>
                    }
                }}
                <ul class="chart-legend" style="list-style: none; padding: 0; margin: 0;">
                    {for props.slices.iter().enumerate().map(|(index, slice)| html! {
                        <li key={slice.name.clone()}>
                            <span style={style::swatch_style(&theme.chart_color(index).to_hex())}></span>
                            {format!(
                                "{}: {} ({}%)",
                                slice.name,
                                format_currency(slice.value, &props.currency_symbol),
                                format_percentage(slice.percentage)
                            )}
                        </li>
                    })}
                </ul>
            </section>
        }
    }
}

impl ExpensePieChart {
    fn draw_chart(&self, props: &ExpensePieChartProps) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        // Zero-valued slices would only add overlapping labels
        let drawn: Vec<(usize, &ChartSlice)> = props
            .slices
            .iter()
            .enumerate()
            .filter(|(_, slice)| slice.value > 0)
            .collect();
        if drawn.is_empty() {
            return;
        }

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();

        let surface = to_plotters(props.theme.palette.surface);
        if root.fill(&surface).is_err() {
            log::warn!("Could not clear expense chart canvas");
            return;
        }

        let center = (CANVAS_SIZE as i32 / 2, CANVAS_SIZE as i32 / 2);
        let radius = f64::from(CANVAS_SIZE) * 0.3;
        let sizes: Vec<f64> = drawn.iter().map(|(_, slice)| slice.value as f64).collect();
        let colors: Vec<RGBColor> = drawn
            .iter()
            .map(|(index, _)| to_plotters(props.theme.chart_color(*index)))
            .collect();
        let labels: Vec<&str> = drawn.iter().map(|(_, slice)| slice.name.as_str()).collect();
        let text = to_plotters(props.theme.palette.text);

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 14).into_font().color(&text));
        pie.percentages(("sans-serif", 12).into_font().color(&WHITE));

        if let Err(e) = root.draw(&pie) {
            log::warn!("Failed to draw expense chart: {:?}", e);
            return;
        }
        let _ = root.present();
    }
}

fn to_plotters(color: lifeplan_domain::theme::Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}
