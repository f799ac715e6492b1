//! Pipeline Factory
//!
//! Creates the provisioning pipeline with infrastructure dependencies
//! wired up. This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::ProvisionPipeline;
use crate::config::Config;
use crate::domain::ports::RunEventSink;
use crate::error::SlipwayResult;
use crate::infrastructure::{ConsoleEventSink, JsonCookieStore, JsonEventSink, PlaywrightDriver};

/// Type alias for the concrete pipeline with all dependencies
pub type ConcretePipeline = ProvisionPipeline<PlaywrightDriver, JsonCookieStore>;

/// Create a provisioning pipeline with all dependencies wired up.
///
/// Spawns the browser sidecar; the returned pipeline owns it until the
/// run closes it.
pub fn create_pipeline(config: &Config) -> SlipwayResult<ConcretePipeline> {
    let driver = PlaywrightDriver::launch(&config.sidecar, config.timeouts.element())?;
    let store = JsonCookieStore::new(config.session.cookie_file.clone());

    Ok(ProvisionPipeline::new(
        driver,
        store,
        config.site.base_url.clone(),
        config.timeouts,
    ))
}

/// Create the event sink matching the output mode
pub fn create_event_sink(json: bool, color: bool, verbose: u8) -> Arc<dyn RunEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(color, verbose))
    }
}
