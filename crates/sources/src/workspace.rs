//! Focused workspace source for i3 and sway

use crate::probe::{find_executable, run_command};
use anyhow::{anyhow, Context, Result};
use doomguy_status_core::{MetricSource, SourceMetadata};
use doomguy_status_types::{Metric, Reading};
use serde::Deserialize;
use std::path::PathBuf;

/// IPC clients understood by this source, in probing order
const IPC_CLIENTS: [&str; 2] = ["i3-msg", "swaymsg"];

#[derive(Debug, Deserialize)]
struct WorkspaceInfo {
    num: i64,
    #[serde(default)]
    focused: bool,
}

/// Number of the focused workspace in a `get_workspaces` reply
pub fn parse_focused_workspace(json: &str) -> Result<u32> {
    let workspaces: Vec<WorkspaceInfo> =
        serde_json::from_str(json).context("Failed to parse workspace list")?;
    let focused = workspaces
        .iter()
        .find(|w| w.focused)
        .ok_or_else(|| anyhow!("no focused workspace"))?;
    // named workspaces without a number report -1
    u32::try_from(focused.num).map_err(|_| anyhow!("focused workspace has no number"))
}

/// Focused workspace via the window manager's IPC client
pub struct WorkspaceSource {
    metadata: SourceMetadata,
    client: PathBuf,
}

impl WorkspaceSource {
    pub fn new(client: PathBuf) -> Self {
        Self {
            metadata: SourceMetadata::new("workspace", "Focused Workspace", &[Metric::Workspace]),
            client,
        }
    }

    /// Find an IPC client on this host
    pub fn detect() -> Option<Self> {
        IPC_CLIENTS
            .iter()
            .find_map(|name| find_executable(name))
            .map(|client| {
                log::info!("Workspace index via {}", client.display());
                Self::new(client)
            })
    }
}

impl MetricSource for WorkspaceSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn sample(&mut self) -> Result<Vec<(Metric, Reading)>> {
        let reply = run_command(&self.client, &["-t", "get_workspaces"])?;
        let focused = parse_focused_workspace(&reply)?;
        Ok(vec![(Metric::Workspace, Reading::workspace(focused))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_workspace() {
        let reply = r#"[
            {"id": 1, "num": 1, "name": "1", "visible": false, "focused": false, "urgent": false},
            {"id": 2, "num": 3, "name": "3: web", "visible": true, "focused": true, "urgent": false}
        ]"#;
        assert_eq!(parse_focused_workspace(reply).unwrap(), 3);
    }

    #[test]
    fn test_no_focused_workspace() {
        let reply = r#"[{"num": 1, "focused": false}]"#;
        assert!(parse_focused_workspace(reply).is_err());
    }

    #[test]
    fn test_named_workspace() {
        let reply = r#"[{"num": -1, "name": "mail", "focused": true}]"#;
        assert!(parse_focused_workspace(reply).is_err());
    }

    #[test]
    fn test_garbage_reply() {
        assert!(parse_focused_workspace("ERROR: socket not found").is_err());
    }
}
