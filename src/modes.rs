// Mode switching via named device scripts

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ScriptsConfig;
use crate::error::TransportError;
use crate::transport::ProcedureInvoker;

/// Remote actions the dashboard can trigger. Path form is kebab-case
/// (e.g. `randomize-hardware`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeAction {
    LocalMode,
    VpnMode,
    RandomizeHardware,
}

impl ModeAction {
    pub fn script_name(self, scripts: &ScriptsConfig) -> &str {
        match self {
            ModeAction::LocalMode => &scripts.local_mode,
            ModeAction::VpnMode => &scripts.vpn_mode,
            ModeAction::RandomizeHardware => &scripts.randomize_hardware,
        }
    }

    /// Whether the script changes what the system-resource view shows, so the
    /// caller should re-read it afterwards.
    pub fn refreshes_status(self) -> bool {
        matches!(self, ModeAction::RandomizeHardware)
    }
}

/// Run the script bound to `action`. Failures are returned unmodified; there
/// is no retry.
pub async fn switch_mode<I>(
    invoker: &I,
    scripts: &ScriptsConfig,
    action: ModeAction,
) -> Result<(), TransportError>
where
    I: ProcedureInvoker + ?Sized,
{
    let script = action.script_name(scripts);
    invoker.invoke(script).await?;
    info!(operation = "switch_mode", ?action, script, "device script finished");
    Ok(())
}
