//! Fittrack - Fitness-Tracking Statistics
//!
//! Main entry point: processes the fixed list of sensor packages and
//! prints one summary line per workout.

use fittrack::{ReportLine, Workout};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Fittrack v{}", env!("CARGO_PKG_VERSION"));

    let packages: &[(&str, &[f64])] = &[
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];

    for (code, data) in packages {
        let workout = Workout::from_package(code, data)?;
        tracing::debug!(code, label = workout.label(), "processing sensor package");
        println!("{}", ReportLine::from_workout(&workout));
    }

    Ok(())
}
