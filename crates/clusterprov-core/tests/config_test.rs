use clusterprov_core::{ClusterprovConfig, Error};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = ClusterprovConfig::load(tmp.path()).unwrap();

    assert!(config.project.gcp_project_id.is_none());
    assert_eq!(config.project.zone, "us-central1-a");
    assert_eq!(config.project.location, "eastus");
    assert_eq!(config.cluster.cluster_type, "Google Kubernetes Engine");
    assert!(config.cluster.machine_type.is_none());
    assert!(config.cluster.node_count.is_none());
    assert_eq!(config.credentials.max_attempts, 5);
    assert_eq!(config.credentials.retry_interval(), Duration::from_secs(15));
    assert_eq!(config.wait.duration(), Duration::from_secs(300));
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[project]
gcp_project_id = "my-gcp-project"
zone = "asia-northeast1-b"
location = "westeurope"

[cluster]
cluster_type = "GKE"
machine_type = "e2-standard-4"
node_count = 3

[credentials]
max_attempts = 8
retry_interval_secs = 30

[wait]
duration_secs = 60
"#;
    std::fs::write(tmp.path().join("clusterprov.toml"), toml).unwrap();

    let config = ClusterprovConfig::load(tmp.path()).unwrap();

    assert_eq!(
        config.project.gcp_project_id.as_deref(),
        Some("my-gcp-project")
    );
    assert_eq!(config.project.zone, "asia-northeast1-b");
    assert_eq!(config.project.location, "westeurope");
    assert_eq!(config.cluster.cluster_type, "GKE");
    assert_eq!(config.cluster.machine_type.as_deref(), Some("e2-standard-4"));
    assert_eq!(config.cluster.node_count, Some(3));
    assert_eq!(config.credentials.max_attempts, 8);
    assert_eq!(config.credentials.retry_interval(), Duration::from_secs(30));
    assert_eq!(config.wait.duration(), Duration::from_secs(60));
}

#[test]
fn load_partial_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[project]
gcp_project_id = "partial-project"
"#;
    std::fs::write(tmp.path().join("clusterprov.toml"), toml).unwrap();

    let config = ClusterprovConfig::load(tmp.path()).unwrap();

    assert_eq!(
        config.project.gcp_project_id.as_deref(),
        Some("partial-project")
    );
    assert_eq!(config.project.zone, "us-central1-a");
    assert_eq!(config.credentials.max_attempts, 5);
}

#[test]
fn load_rejects_malformed_toml() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("clusterprov.toml"), "[project\nzone = ").unwrap();

    let result = ClusterprovConfig::load(tmp.path());

    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}

#[test]
fn project_id_prefers_explicit_override() {
    let mut config = ClusterprovConfig::default();
    config.project.gcp_project_id = Some("from-file".to_owned());

    assert_eq!(config.project_id(Some("from-flag")).unwrap(), "from-flag");
    assert_eq!(config.project_id(None).unwrap(), "from-file");
}

#[test]
fn project_id_missing_is_an_error() {
    let config = ClusterprovConfig::default();

    assert!(matches!(
        config.project_id(None),
        Err(Error::MissingProjectId)
    ));
}
