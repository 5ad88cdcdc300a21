use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use cursor_monitor::{MonitorSnapshot, MonitorSnapshotResolver, Rect, Resolution, ResolverConfig};

const REFERENCE_DPI_VAR: &str = "CURSOR_MONITOR_REFERENCE_DPI";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config()?;
    let resolver = MonitorSnapshotResolver::with_config(config);

    println!("=== Cursor Monitor ===");

    match resolver.resolve_at_cursor() {
        Resolution::Resolved(monitor) => print_snapshot(&monitor),
        Resolution::Unresolved => {
            eprintln!("No monitor could be resolved under the cursor.");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn load_config() -> Result<ResolverConfig> {
    let Ok(raw) = std::env::var(REFERENCE_DPI_VAR) else {
        return Ok(ResolverConfig::default());
    };

    let dpi: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("{REFERENCE_DPI_VAR}={raw:?} is not a DPI value"))?;

    Ok(ResolverConfig::builder()
        .reference_dpi(dpi)
        .with_context(|| format!("{REFERENCE_DPI_VAR}={raw:?} rejected"))?
        .build())
}

fn print_snapshot(monitor: &MonitorSnapshot) {
    println!(
        "Monitor:   {}  {}x{}{}",
        fmt_rect(monitor.monitor_area()),
        monitor.width(),
        monitor.height(),
        if monitor.is_primary() { "  (primary)" } else { "" },
    );
    println!(
        "Work area: {}  {}x{}",
        fmt_rect(monitor.work_area()),
        monitor.work_area_width(),
        monitor.work_area_height(),
    );
    println!("Scale:     {:.2}", monitor.scale_factor().get());
    println!(
        "Logical work area: ({:.1}, {:.1}) {:.1}x{:.1}",
        monitor.logical_work_area_left(),
        monitor.logical_work_area_top(),
        monitor.logical_work_area_width(),
        monitor.logical_work_area_height(),
    );
}

fn fmt_rect(r: Rect) -> String {
    format!("({}, {}) - ({}, {})", r.left(), r.top(), r.right(), r.bottom())
}
