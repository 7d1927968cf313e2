//! Chart Components
//!
//! Bar, stacked bar, line and donut charts drawn on an HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use carbon_control::dashboard::MonthlyEmission;
use carbon_control::industry::{ChartKind, IndustryChart};
use carbon_control::live_demo::StateEmission;

const GRID_COLOR: &str = "#e5e7eb";
const AXIS_COLOR: &str = "#059669";

/// One named series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub color: &'static str,
    pub values: Vec<f64>,
    pub dashed: bool,
}

/// Everything needed to draw a categorical chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<&'static str>,
    pub series: Vec<ChartSeries>,
    /// Scale every series against its own maximum
    pub dual_axis: bool,
}

impl ChartSpec {
    /// Six-month chart of an industry profile
    pub fn from_industry(chart: &IndustryChart) -> Self {
        let series = chart
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| ChartSeries {
                label: s.label.to_string(),
                color: s.color,
                values: chart.column(i),
                dashed: false,
            })
            .collect();

        Self {
            kind: chart.kind,
            labels: chart.months(),
            series,
            dual_axis: chart.kind != ChartKind::StackedBar,
        }
    }

    /// Overview trend: emissions against target
    pub fn emissions_trend(monthly: &[MonthlyEmission]) -> Self {
        Self {
            kind: ChartKind::Line,
            labels: monthly.iter().map(|m| m.month).collect(),
            series: vec![
                ChartSeries {
                    label: "Emissions".to_string(),
                    color: "#10b981",
                    values: monthly.iter().map(|m| m.emissions).collect(),
                    dashed: false,
                },
                ChartSeries {
                    label: "Target".to_string(),
                    color: "#ef4444",
                    values: monthly.iter().map(|m| m.target).collect(),
                    dashed: true,
                },
            ],
            dual_axis: false,
        }
    }

    /// Live demo state contributors
    pub fn states(states: &[StateEmission]) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: states.iter().map(|s| s.state).collect(),
            series: vec![ChartSeries {
                label: "Emissions".to_string(),
                color: "#12b559",
                values: states.iter().map(|s| s.emissions).collect(),
                dashed: false,
            }],
            dual_axis: false,
        }
    }

    /// Upper bound of the shared y-axis
    pub fn y_max(&self) -> f64 {
        let max = match self.kind {
            ChartKind::StackedBar => (0..self.labels.len())
                .map(|i| self.series.iter().map(|s| s.values[i]).sum::<f64>())
                .fold(0.0, f64::max),
            _ => self
                .series
                .iter()
                .flat_map(|s| s.values.iter().copied())
                .fold(0.0, f64::max),
        };
        padded_max(max)
    }

    /// Upper bound for one series
    fn series_max(&self, index: usize) -> f64 {
        if !self.dual_axis {
            return self.y_max();
        }
        padded_max(self.series[index].values.iter().copied().fold(0.0, f64::max))
    }
}

/// Leave headroom above the tallest value
fn padded_max(max: f64) -> f64 {
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

/// Start and end angle of every donut slice, clockwise from twelve o'clock
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -std::f64::consts::FRAC_PI_2;
    values
        .iter()
        .map(|value| {
            let end = start + value / total * std::f64::consts::TAU;
            let slice = (start, end);
            start = end;
            slice
        })
        .collect()
}

/// Categorical chart with legend
#[component]
pub fn Chart(spec: ChartSpec, #[prop(default = 300)] height: u32) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend = spec.series.clone();

    canvas_ref.on_load(move |canvas| {
        draw_chart(&canvas, &spec);
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height=height
                class="w-full rounded-lg"
            />
            <ChartLegend items=legend.into_iter().map(|s| (s.label, s.color)).collect() />
        </div>
    }
}

/// Donut chart with legend
#[component]
pub fn Donut(slices: Vec<(String, f64, &'static str)>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend: Vec<_> = slices
        .iter()
        .map(|(label, value, color)| (format!("{} {:.0}%", label, value), *color))
        .collect();

    canvas_ref.on_load(move |canvas| {
        draw_donut(&canvas, &slices);
    });

    view! {
        <div class="relative">
            <canvas node_ref=canvas_ref width="300" height="250" class="mx-auto" />
            <ChartLegend items=legend />
        </div>
    }
}

/// Chart legend showing series colors
#[component]
fn ChartLegend(items: Vec<(String, &'static str)>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {items
                .into_iter()
                .map(|(label, color)| view! {
                    <div class="flex items-center space-x-2">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", color)
                        />
                        <span class="text-sm text-gray-600">{label}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Draw a categorical chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, spec: &ChartSpec) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let categories = spec.labels.len().max(1);
    let slot = chart_width / categories as f64;
    let y_max = spec.y_max();

    // Horizontal grid lines with labels of the shared axis
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&AXIS_COLOR.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let to_y = |value: f64, max: f64| margin_top + (1.0 - value / max) * chart_height;

    match spec.kind {
        ChartKind::Bar => {
            let group = slot * 0.7;
            let bar = group / spec.series.len().max(1) as f64;

            for (s, series) in spec.series.iter().enumerate() {
                let max = spec.series_max(s);
                ctx.set_fill_style(&series.color.into());
                for (i, value) in series.values.iter().enumerate() {
                    let x = margin_left + i as f64 * slot + (slot - group) / 2.0 + s as f64 * bar;
                    let y = to_y(*value, max);
                    ctx.fill_rect(x, y, bar - 2.0, margin_top + chart_height - y);
                }
            }
        }
        ChartKind::StackedBar => {
            let bar = slot * 0.6;
            let mut base = vec![0.0; spec.labels.len()];

            for series in &spec.series {
                ctx.set_fill_style(&series.color.into());
                for (i, value) in series.values.iter().enumerate() {
                    let x = margin_left + i as f64 * slot + (slot - bar) / 2.0;
                    let top = to_y(base[i] + value, y_max);
                    let bottom = to_y(base[i], y_max);
                    ctx.fill_rect(x, top, bar, bottom - top);
                    base[i] += value;
                }
            }
        }
        ChartKind::Line => {
            for (s, series) in spec.series.iter().enumerate() {
                let max = spec.series_max(s);
                ctx.set_stroke_style(&series.color.into());
                ctx.set_line_width(2.0);

                let dash = if series.dashed {
                    js_sys::Array::of2(&5.0.into(), &5.0.into())
                } else {
                    js_sys::Array::new()
                };
                let _ = ctx.set_line_dash(&dash);

                ctx.begin_path();
                for (i, value) in series.values.iter().enumerate() {
                    let x = margin_left + (i as f64 + 0.5) * slot;
                    let y = to_y(*value, max);
                    if i == 0 {
                        ctx.move_to(x, y);
                    } else {
                        ctx.line_to(x, y);
                    }
                }
                ctx.stroke();

                // Draw points
                ctx.set_fill_style(&series.color.into());
                for (i, value) in series.values.iter().enumerate() {
                    let x = margin_left + (i as f64 + 0.5) * slot;
                    ctx.begin_path();
                    let _ = ctx.arc(x, to_y(*value, max), 3.0, 0.0, std::f64::consts::TAU);
                    ctx.fill();
                }
            }
            let _ = ctx.set_line_dash(&js_sys::Array::new());
        }
    }

    // Category labels
    ctx.set_fill_style(&AXIS_COLOR.into());
    ctx.set_font("12px sans-serif");
    for (i, label) in spec.labels.iter().enumerate() {
        let x = margin_left + (i as f64 + 0.5) * slot;
        let _ = ctx.fill_text(label, x - 10.0, height - 10.0);
    }
}

/// Draw a donut on canvas
fn draw_donut(canvas: &HtmlCanvasElement, slices: &[(String, f64, &'static str)]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (cx, cy) = (width / 2.0, height / 2.0);
    let outer = 80.0;
    let inner = 60.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    let values: Vec<f64> = slices.iter().map(|(_, value, _)| *value).collect();
    for ((start, end), (_, _, color)) in slice_angles(&values).into_iter().zip(slices) {
        ctx.set_fill_style(&(*color).into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, start, end);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true);
        ctx.close_path();
        ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon_control::industry::{MetricProfile, MetricSet};

    #[test]
    fn test_slice_angles_cover_circle() {
        let angles = slice_angles(&[45.0, 25.0, 20.0, 10.0]);
        assert_eq!(angles.len(), 4);

        let first = angles.first().unwrap().0;
        let last = angles.last().unwrap().1;
        assert!((last - first - std::f64::consts::TAU).abs() < 1e-9);
        assert!(slice_angles(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_stacked_max_sums_series() {
        let chart = MetricSet::for_profile(MetricProfile::EnergyUtilities).chart;
        let spec = ChartSpec::from_industry(&chart);

        let tallest = (0..chart.rows.len())
            .map(|i| chart.rows[i].values.iter().sum::<f64>())
            .fold(0.0, f64::max);
        assert!((spec.y_max() - tallest * 1.1).abs() < 1e-9);
        assert!(!spec.dual_axis);
    }

    #[test]
    fn test_emissions_trend_shares_axis() {
        let spec = ChartSpec::emissions_trend(&[MonthlyEmission {
            month: "Jan",
            emissions: 85.0,
            target: 80.0,
        }]);
        assert_eq!(spec.series_max(0), spec.series_max(1));
        assert!(spec.series[1].dashed);
    }

    #[test]
    fn test_padded_max_of_empty_chart() {
        assert_eq!(padded_max(0.0), 1.0);
    }
}
