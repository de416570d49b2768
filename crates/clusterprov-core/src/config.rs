use std::time::Duration;

use serde::{Deserialize, Serialize};

/// File name looked up in the project directory.
pub const CONFIG_FILE: &str = "clusterprov.toml";

/// clusterprov.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterprovConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub cluster: ClusterConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub wait: WaitConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// GCP project ID
    pub gcp_project_id: Option<String>,
    /// Zone new clusters are created in
    #[serde(default = "default_zone")]
    pub zone: String,
    /// Location used when listing VM sizes
    #[serde(default = "default_location")]
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Label reported back after configuring a cluster
    #[serde(default = "default_cluster_type")]
    pub cluster_type: String,
    /// Node machine type (gcloud default when unset)
    pub machine_type: Option<String>,
    /// Initial node count (gcloud default when unset)
    pub node_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Attempts made to fetch cluster credentials before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Pause between failed attempts, in seconds
    #[serde(default = "default_retry_interval_secs")]
    pub retry_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitConfig {
    /// Fixed delay after a create request, in seconds
    #[serde(default = "default_wait_secs")]
    pub duration_secs: u64,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            gcp_project_id: None,
            zone: default_zone(),
            location: default_location(),
        }
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            cluster_type: default_cluster_type(),
            machine_type: None,
            node_count: None,
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            retry_interval_secs: default_retry_interval_secs(),
        }
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_wait_secs(),
        }
    }
}

impl CredentialsConfig {
    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_interval_secs)
    }
}

impl WaitConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }
}

impl ClusterprovConfig {
    /// Load from clusterprov.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the project ID, preferring an explicit override.
    pub fn project_id<'a>(&'a self, explicit: Option<&'a str>) -> crate::Result<&'a str> {
        explicit
            .or(self.project.gcp_project_id.as_deref())
            .ok_or(crate::Error::MissingProjectId)
    }
}

fn default_zone() -> String {
    "us-central1-a".to_owned()
}

fn default_location() -> String {
    "eastus".to_owned()
}

fn default_cluster_type() -> String {
    "Google Kubernetes Engine".to_owned()
}

fn default_max_attempts() -> u32 {
    5
}

fn default_retry_interval_secs() -> u64 {
    15
}

fn default_wait_secs() -> u64 {
    300
}
