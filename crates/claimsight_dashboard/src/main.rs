//! Headless demo
//!
//! Mounts the dashboard from the bundled snapshot and drives it with a
//! fixed-step loop until every one-shot animation settles, logging the
//! values a renderer would sample.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use claimsight_dashboard::{Dashboard, DashboardSnapshot};

const SNAPSHOT_JSON: &str = include_str!("../data/snapshot.json");

/// Simulated frame interval (~60fps)
const FRAME_MS: f32 = 16.67;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let snapshot = DashboardSnapshot::from_json(SNAPSHOT_JSON)?;
    tracing::info!(date = %snapshot.date, "mounting dashboard");

    let mut rng = fastrand::Rng::new();
    let mut dashboard = Dashboard::mount(snapshot, &mut rng);

    let mut frames = 0u32;
    while dashboard.tick(FRAME_MS) {
        frames += 1;
        if frames % 30 == 0 {
            tracing::debug!(
                frames,
                active = dashboard.active_total(),
                closed = dashboard.closed_total(),
                "animating"
            );
        }
        // A real host would vsync here; the demo just caps the run
        if frames > 600 {
            anyhow::bail!("animations failed to settle within 10 seconds");
        }
    }

    tracing::info!(
        frames,
        active = dashboard.active_total(),
        closed = dashboard.closed_total(),
        settled = dashboard.settlements_ring().label_value(),
        sweep_offset = dashboard.settlements_ring().dash_offset(),
        particles = dashboard.particles().len(),
        "dashboard settled"
    );

    for card in dashboard.cards() {
        tracing::info!(
            title = card.title(),
            rows = card.rows().len(),
            entered = card.is_entered(),
            "card"
        );
    }

    Ok(())
}
