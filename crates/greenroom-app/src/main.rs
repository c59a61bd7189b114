use anyhow::{Context, Result};
use greenroom_cal::build_month_grid;
use greenroom_cal::visibility::filter_visible;
use greenroom_core::config::load_config;
use greenroom_core::date::CalendarDate;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

mod document;
mod render;

use document::CalendarDocument;

fn main() -> Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true))
        .init();

    tracing::info!("Starting Greenroom calendar view");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let today: CalendarDate = chrono::Local::now().date_naive().into();
    let month_anchor = match std::env::args().nth(1) {
        Some(raw) => parse_month_arg(&raw)?,
        None => today,
    };

    let raw = std::fs::read_to_string(&config.calendar.events_file)
        .with_context(|| format!("reading event file {}", config.calendar.events_file))?;
    let document: CalendarDocument =
        serde_json::from_str(&raw).context("parsing event file")?;

    tracing::info!(
        events = document.events.len(),
        month = %month_anchor,
        "Building month grid"
    );

    let visible: Vec<_> = filter_visible(&document.events, &document.context)
        .into_iter()
        .cloned()
        .collect();
    let grid = build_month_grid(
        month_anchor,
        &visible,
        today,
        config.calendar.visible_events_per_day,
    )?;

    print!("{}", render::render_month(&grid, &document.events));

    Ok(())
}

/// Accepts `yyyy-MM` or a full `yyyy-MM-dd`; any day anchors its month.
fn parse_month_arg(raw: &str) -> Result<CalendarDate> {
    let padded = if raw.len() == 7 {
        format!("{raw}-01")
    } else {
        raw.to_string()
    };
    padded
        .parse::<CalendarDate>()
        .with_context(|| format!("invalid month argument {raw:?}, expected yyyy-MM"))
}
