//! Chart data derivation and rendering for the income vs expenses doughnut.
//!
//! The category sums from the aggregator are flattened into positional
//! label/value/color series, which are then turned into an ECharts option
//! for the chart widget on the transactions page.

use std::collections::BTreeMap;

use charming::{
    Chart,
    component::Legend,
    datatype::DataPointItem,
    element::{Color, JsFunction, Label, Orient, Tooltip, Trigger},
    series::Pie,
};
use maud::PreEscaped;

use crate::html::HeadElement;

/// The slice color for income categories, shared with the summary cards.
pub const INCOME_COLOR: &str = "rgba(34, 197, 94, 0.7)";
/// The slice color for expense categories.
pub const EXPENSE_COLOR: &str = "rgba(239, 68, 68, 0.7)";

/// The HTML element ID the doughnut chart is rendered into.
pub(crate) const CHART_CONTAINER_ID: &str = "income-expense-chart";

/// Positional series data for the doughnut chart.
///
/// `values[i]` and `colors[i]` correspond to `labels[i]`. Income categories
/// come first, each labelled `"Income: <category>"` in key order, followed
/// by expense categories labelled `"Expense: <category>"`. The color is a
/// constant per series origin, never derived from the value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChartSeries {
    /// One label per slice.
    pub labels: Vec<String>,
    /// The summed amount for each slice.
    pub values: Vec<f64>,
    /// The slice color, keyed by position.
    pub colors: Vec<&'static str>,
}

impl ChartSeries {
    /// `true` when there is nothing to chart and the page should render a
    /// placeholder instead.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Flatten category sums into labelled chart series.
pub fn chart_series(
    income_by_category: &BTreeMap<String, f64>,
    expense_by_category: &BTreeMap<String, f64>,
) -> ChartSeries {
    let mut series = ChartSeries::default();

    for (category, &amount) in income_by_category {
        series.labels.push(format!("Income: {category}"));
        series.values.push(amount);
        series.colors.push(INCOME_COLOR);
    }

    for (category, &amount) in expense_by_category {
        series.labels.push(format!("Expense: {category}"));
        series.values.push(amount);
        series.colors.push(EXPENSE_COLOR);
    }

    series
}

/// Build the ECharts doughnut for `series`.
///
/// Slice colors come from the chart palette, which has exactly one entry
/// per slice so the palette never cycles.
pub(crate) fn income_expense_chart(series: &ChartSeries) -> Chart {
    let data: Vec<DataPointItem> = series
        .values
        .iter()
        .copied()
        .zip(series.labels.iter().cloned())
        .map(DataPointItem::from)
        .collect();

    let palette: Vec<Color> = series.colors.iter().map(|&color| color.into()).collect();

    Chart::new()
        .color(palette)
        .tooltip(currency_tooltip())
        .legend(Legend::new().orient(Orient::Vertical).right(10).top("center"))
        .series(
            Pie::new()
                .name("Income vs Expenses")
                .radius(vec!["50%", "75%"])
                .avoid_label_overlap(true)
                .label(Label::new().show(false))
                .data(data),
        )
}

/// Generates the JavaScript that initializes the doughnut chart.
///
/// The script initializes an ECharts instance with dark mode support and
/// responsive resizing, mirroring how the chart containers are laid out on
/// the page.
pub(crate) fn chart_script(chart: &Chart) -> HeadElement {
    let script_content = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{}");
            const chart = echarts.init(chartDom);
            const option = {};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                const isDarkMode = darkModeMediaQuery.matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }}
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }})();"#,
        CHART_CONTAINER_ID,
        chart.to_string()
    );

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values.
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Item)
        .value_formatter(currency_formatter())
}
