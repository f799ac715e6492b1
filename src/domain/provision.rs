//! Provisioning value objects: what to create and what to deploy.

use serde::{Deserialize, Serialize};

use crate::domain::env_block::EnvBlock;

/// Datacenter location offered by the platform's create-server dialog.
///
/// The dialog identifies locations by button label (`"{name} Select"`).
/// Only the locations the dialog actually offers belong here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    #[default]
    Singapore,
}

impl Location {
    /// Human-readable name as the dialog shows it.
    pub fn display_name(&self) -> &'static str {
        match self {
            Location::Singapore => "Singapore",
        }
    }

    /// Label of the selection button inside the location dropdown.
    pub fn select_label(&self) -> String {
        format!("{} Select", self.display_name())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Target server, identified by display name only.
///
/// The platform exposes no durable server id through its UI; every later
/// interaction addresses the server by the name shown on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSpec {
    pub name: String,
    pub location: Location,
}

impl ServerSpec {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// The literal command the destructive-actions page demands before it
    /// accepts a delete.
    pub fn delete_confirmation(&self) -> String {
        format!("sudo rm -f {}", self.name)
    }
}

/// Container deployment: image reference plus bulk environment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentSpec {
    /// Image reference (`registry/repo:tag`).
    pub image: String,
    /// Normalized environment block for bulk entry.
    pub env: EnvBlock,
}

impl DeploymentSpec {
    pub fn new(image: impl Into<String>, env: EnvBlock) -> Self {
        Self {
            image: image.into(),
            env,
        }
    }
}
