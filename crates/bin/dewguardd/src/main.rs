//! # dewguardd — dewguard demo daemon
//!
//! Composition root that wires the virtual sources to the humidity trigger
//! and polls it the way a sequencing host would.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Construct the virtual weather station and switch hub (adapters)
//! - Construct the trigger, injecting the sources via port traits
//! - Poll: validate → should_trigger → execute, until ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use dewguard_adapter_virtual::{TracingNotifier, VirtualSwitchHub, VirtualWeatherStation};
use dewguard_app::humidity_trigger::HumidityThresholdTrigger;
use dewguard_domain::settings::TriggerSettings;
use dewguard_domain::switch::SwitchHandle;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Simulated sources
    let weather = VirtualWeatherStation::with_humidity(config.simulation.initial_humidity);
    let hub = VirtualSwitchHub::with_switches(demo_switches(config.simulation.switch_count)?);

    // Trigger
    let mut settings = TriggerSettings::default();
    let _ = settings.set_desired_value(config.trigger.desired_value);
    let _ = settings.set_humidity_threshold(config.trigger.humidity_threshold);
    let _ = settings.set_switch_index(config.trigger.switch_index);

    let mut trigger =
        HumidityThresholdTrigger::new(weather, hub, TracingNotifier).with_settings(settings);

    tracing::info!(
        name = %trigger.metadata().name,
        threshold = trigger.settings().humidity_threshold(),
        interval_secs = config.poll.interval_secs,
        "dewguardd started"
    );

    let mut interval =
        tokio::time::interval(std::time::Duration::from_secs(config.poll.interval_secs));
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let outcome = trigger.validate();
                if outcome.issues_changed {
                    for issue in trigger.issues() {
                        tracing::warn!(%issue, "validation issue");
                    }
                }
                if outcome.passed && trigger.should_trigger() {
                    trigger.execute().await;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Build the simulated switch list the virtual hub exposes.
fn demo_switches(count: usize) -> Result<Vec<SwitchHandle>, Box<dyn std::error::Error>> {
    (1..=count)
        .map(|n| {
            SwitchHandle::builder()
                .name(format!("Dew Heater {n}"))
                .minimum(0.0)
                .maximum(100.0)
                .step_size(5.0)
                .build()
                .map_err(Into::into)
        })
        .collect()
}
