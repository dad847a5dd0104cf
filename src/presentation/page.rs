// HTML rendering of the three dashboard views
//
// Views are leptos components rendered to a string on the server. Charts are
// drawn client-side by Chart.js from the derived chart data.
use crate::domain::chart::{ChartData, ChartKind};
use crate::domain::dashboard::{ChartPanel, Dashboard, DASHBOARD_TITLE};
use crate::domain::view_state::RenderedView;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use serde_json::json;

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f5f7fa;color:#1f2933}\
.header{background:#2c3e50;color:#fff;padding:1.5rem 2rem}\
.header h1{margin:0}\
.loading,.error{padding:3rem;text-align:center}\
.error p{color:#c0392b}\
.dashboard{display:grid;grid-template-columns:repeat(auto-fit,minmax(420px,1fr));gap:1.5rem;padding:2rem}\
.chart-container{background:#fff;border-radius:8px;padding:1rem;box-shadow:0 1px 3px rgba(0,0,0,.1)}\
.chart{position:relative;height:300px}";

pub fn render_page(rendered: &RenderedView) -> String {
    // The loading view polls until the fetch cycle settles
    let polling = matches!(rendered, RenderedView::Loading { .. });
    let rendered = rendered.clone();

    let html = Owner::new().with(move || {
        let content = match rendered {
            RenderedView::Loading { message } => view! { <LoadingView message=message /> }.into_any(),
            RenderedView::Error { message, retry } => {
                view! { <ErrorView message=message retry=retry /> }.into_any()
            }
            RenderedView::Ready { dashboard } => view! { <ReadyView dashboard=dashboard /> }.into_any(),
        };

        view! {
            <html lang="en">
                <head>
                    <meta charset="utf-8" />
                    {polling.then(|| view! { <meta http-equiv="refresh" content="1" /> })}
                    <title>{DASHBOARD_TITLE}</title>
                    <style inner_html=STYLE></style>
                </head>
                <body>
                    <div class="app">{content}</div>
                </body>
            </html>
        }
        .to_html()
    });

    format!("<!DOCTYPE html>{html}")
}

#[component]
fn Header(
    #[prop(optional_no_strip)] subtitle: Option<String>,
    #[prop(optional_no_strip)] updated: Option<String>,
    #[prop(optional)] refresh: bool,
) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"📊 " {DASHBOARD_TITLE}</h1>
            {subtitle.map(|subtitle| view! { <p>{subtitle}</p> })}
            {updated.map(|updated| view! { <p class="updated">"Updated " {updated}</p> })}
            {refresh
                .then(|| {
                    view! {
                        <form method="post" action="/refresh">
                            <button class="refresh-btn" type="submit">
                                "🔄 Refresh Data"
                            </button>
                        </form>
                    }
                })}
        </header>
    }
}

#[component]
fn LoadingView(message: String) -> impl IntoView {
    view! {
        <Header />
        <div class="loading">{message}</div>
    }
}

#[component]
fn ErrorView(message: String, retry: bool) -> impl IntoView {
    view! {
        <Header />
        <div class="error">
            <p>{message}</p>
            {retry
                .then(|| {
                    view! {
                        <form method="post" action="/refresh">
                            <button type="submit">"Retry"</button>
                        </form>
                    }
                })}
        </div>
    }
}

#[component]
fn ReadyView(dashboard: Dashboard) -> impl IntoView {
    let scripts: String = dashboard
        .panels
        .iter()
        .filter_map(|panel| {
            panel.chart.as_ref().map(|chart| {
                format!(
                    "new Chart(document.getElementById('{}'),{});",
                    canvas_id(panel),
                    chart_config(chart)
                )
            })
        })
        .collect();
    let updated = dashboard
        .fetched_at
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string());

    view! {
        <Header subtitle=Some(dashboard.subtitle) updated=updated refresh=true />
        <div class="dashboard">
            {dashboard
                .panels
                .into_iter()
                .map(|panel| view! { <PanelView panel=panel /> })
                .collect_view()}
        </div>
        {(!scripts.is_empty())
            .then(|| {
                view! {
                    <script src=CHART_JS_URL></script>
                    <script inner_html=scripts></script>
                }
            })}
    }
}

/// One chart card. The canvas is skipped while the feed has no data.
#[component]
fn PanelView(panel: ChartPanel) -> impl IntoView {
    let id = canvas_id(&panel);

    view! {
        <div class="chart-container">
            <h2>{panel.title}</h2>
            <div class="chart">
                {panel.chart.map(|_| view! { <canvas id=id></canvas> })}
            </div>
        </div>
    }
}

fn canvas_id(panel: &ChartPanel) -> String {
    format!("chart-{}", panel.feed)
}

/// Full Chart.js config for one chart, safe to inline in a script tag
pub fn chart_config(chart: &ChartData) -> String {
    let kind = match chart.kind {
        ChartKind::Line => "line",
        ChartKind::Bar => "bar",
        ChartKind::Doughnut => "doughnut",
    };

    let config = json!({
        "type": kind,
        "data": {
            "labels": chart.labels,
            "datasets": chart.datasets,
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "position": "top" } },
        },
    });

    config.to_string().replace("</", "<\\/")
}
