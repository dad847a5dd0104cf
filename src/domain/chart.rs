// Chart data domain models and the per-feed derivations
//
// The structures serialize with the field names Chart.js expects, so the
// rendering layer can hand them to the browser untouched.
use super::stats::{PerformanceStats, RevenueStats, SalesStats, UserStats};
use serde::Serialize;

const TEAL: &str = "rgb(75, 192, 192)";
const TEAL_FILL: &str = "rgba(75, 192, 192, 0.2)";
const TEAL_BAR: &str = "rgba(75, 192, 192, 0.6)";
const BLUE: &str = "rgb(54, 162, 235)";
const BLUE_BAR: &str = "rgba(54, 162, 235, 0.5)";
const PINK: &str = "rgb(255, 99, 132)";
const PINK_BAR: &str = "rgba(255, 99, 132, 0.5)";
const ORANGE: &str = "rgb(255, 159, 64)";
const ORANGE_BAR: &str = "rgba(255, 159, 64, 0.6)";

/// (background, border) pairs handed out to revenue slices in order
const REVENUE_PALETTE: [(&str, &str); 5] = [
    ("rgba(255, 99, 132, 0.6)", "rgba(255, 99, 132, 1)"),
    ("rgba(54, 162, 235, 0.6)", "rgba(54, 162, 235, 1)"),
    ("rgba(255, 206, 86, 0.6)", "rgba(255, 206, 86, 1)"),
    ("rgba(75, 192, 192, 0.6)", "rgba(75, 192, 192, 1)"),
    ("rgba(153, 102, 255, 0.6)", "rgba(153, 102, 255, 1)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

/// A dataset color: one for the whole series, or one per data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: ColorSpec,
    pub background_color: ColorSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl Dataset {
    fn new(label: &str, data: Vec<f64>, border_color: ColorSpec, background_color: ColorSpec) -> Self {
        Self {
            label: label.to_string(),
            data,
            border_color,
            background_color,
            border_width: None,
            tension: None,
            fill: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn new(kind: ChartKind, labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self {
            kind,
            labels,
            datasets,
        }
    }
}

fn single(color: &str) -> ColorSpec {
    ColorSpec::Single(color.to_string())
}

pub fn sales_chart(payload: Option<&SalesStats>) -> Option<ChartData> {
    let payload = payload?;

    let mut dataset = Dataset::new(
        "Sales",
        payload.data.iter().map(|d| d.sales).collect(),
        single(TEAL),
        single(TEAL_FILL),
    );
    dataset.tension = Some(0.4);
    dataset.fill = Some(true);

    Some(ChartData::new(
        ChartKind::Line,
        payload.data.iter().map(|d| d.month.clone()).collect(),
        vec![dataset],
    ))
}

pub fn users_chart(payload: Option<&UserStats>) -> Option<ChartData> {
    let payload = payload?;

    let total = Dataset::new(
        "Total Users",
        payload.data.iter().map(|d| d.total_users).collect(),
        single(BLUE),
        single(BLUE_BAR),
    );
    let active = Dataset::new(
        "Active Users",
        payload.data.iter().map(|d| d.active_users).collect(),
        single(PINK),
        single(PINK_BAR),
    );

    Some(ChartData::new(
        ChartKind::Bar,
        payload.data.iter().map(|d| d.month.clone()).collect(),
        vec![total, active],
    ))
}

/// Bars are colored per point: teal for healthy, orange for anything else.
pub fn performance_chart(payload: Option<&PerformanceStats>) -> Option<ChartData> {
    let payload = payload?;

    let (backgrounds, borders): (Vec<String>, Vec<String>) = payload
        .data
        .iter()
        .map(|d| {
            if d.is_healthy() {
                (TEAL_BAR.to_string(), TEAL.to_string())
            } else {
                (ORANGE_BAR.to_string(), ORANGE.to_string())
            }
        })
        .unzip();

    let mut dataset = Dataset::new(
        "Performance (%)",
        payload.data.iter().map(|d| d.value).collect(),
        ColorSpec::PerPoint(borders),
        ColorSpec::PerPoint(backgrounds),
    );
    dataset.border_width = Some(1);

    Some(ChartData::new(
        ChartKind::Bar,
        payload.data.iter().map(|d| d.category.clone()).collect(),
        vec![dataset],
    ))
}

pub fn revenue_chart(payload: Option<&RevenueStats>) -> Option<ChartData> {
    let payload = payload?;

    let (backgrounds, borders): (Vec<String>, Vec<String>) = REVENUE_PALETTE
        .iter()
        .cycle()
        .take(payload.data.len())
        .map(|(bg, border)| (bg.to_string(), border.to_string()))
        .unzip();

    let mut dataset = Dataset::new(
        "Revenue",
        payload.data.iter().map(|d| d.amount).collect(),
        ColorSpec::PerPoint(borders),
        ColorSpec::PerPoint(backgrounds),
    );
    dataset.border_width = Some(1);

    Some(ChartData::new(
        ChartKind::Doughnut,
        payload.data.iter().map(|d| d.category.clone()).collect(),
        vec![dataset],
    ))
}
