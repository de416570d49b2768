mod clusters;
mod configure;
mod create;
mod locations;
mod projects;

use clusterprov_cloud::{ActionResult, CloudClusterAdapter, CredentialPolicy};
use clusterprov_core::ClusterprovConfig;
use std::path::Path;

pub use clusters::clusters;
pub use configure::{configure, wait};
pub use create::{CreateArgs, create};
pub use locations::{locations, regions, vm_sizes};
pub use projects::projects;

pub(crate) fn load_config() -> anyhow::Result<ClusterprovConfig> {
    Ok(ClusterprovConfig::load(Path::new("."))?)
}

/// Adapter tuned by the `[credentials]` and `[wait]` config sections.
pub(crate) fn adapter(config: &ClusterprovConfig) -> CloudClusterAdapter {
    CloudClusterAdapter::new()
        .with_credential_policy(CredentialPolicy {
            max_attempts: config.credentials.max_attempts,
            retry_interval: config.credentials.retry_interval(),
        })
        .with_wait_duration(config.wait.duration())
}

/// Unwrap an action's value, or fail with its description.
pub(crate) fn finish<T>(action: ActionResult<T>) -> anyhow::Result<T> {
    let ActionResult {
        description,
        result,
    } = action;
    result.map_err(|e| anyhow::anyhow!("{description} failed: {e}"))
}
