use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ignition::{Car, Vehicle};

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for the status line.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ignition=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting ignition demo v{}", ignition::VERSION);

    let car = Car::new("V8");

    // Only the Vehicle contract is visible through this binding; the call
    // below resolves to Car's implementation through the trait object.
    let vehicle: Box<dyn Vehicle> = Box::new(car);
    vehicle.start();

    info!("Demo complete");
    Ok(())
}
