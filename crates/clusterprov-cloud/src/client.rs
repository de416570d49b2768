use crate::context::Context;
use crate::executor::{FileSystem, RealFileSystem, RealShell, ShellExecutor};
use crate::locations::RegionCatalog;
use crate::result::{ActionResult, AdapterError, Errorable};
use crate::shell::{ShellError, ShellOutput};
use crate::tools::{self, Operation};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

const LISTING_PROJECTS: &str = "listing projects";
const LOGGING_INTO_PROJECT: &str = "logging into project";
const LISTING_CLUSTERS: &str = "listing clusters";
const CREATING_CLUSTER: &str = "creating cluster";
const CONFIGURING_CLUSTER: &str = "configuring Kubernetes";

/// VM sizes with this prefix are never offered.
pub const BASIC_VM_PREFIX: &str = "Basic_";

/// JMESPath query passed to `az account list-locations`.
const LOCATIONS_QUERY: &str = "[].{name:name,displayName:displayName}";

/// How often, and how persistently, credentials are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialPolicy {
    pub max_attempts: u32,
    pub retry_interval: Duration,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            retry_interval: Duration::from_secs(15),
        }
    }
}

/// Managed-cluster operations, parameterized over the context collaborators
/// for testability.
pub struct CloudClusterAdapter<S: ShellExecutor = RealShell, F: FileSystem = RealFileSystem> {
    context: Context<S, F>,
    credentials: CredentialPolicy,
    wait_duration: Duration,
}

impl CloudClusterAdapter<RealShell, RealFileSystem> {
    pub fn new() -> Self {
        Self::with_context(Context::new())
    }
}

impl Default for CloudClusterAdapter<RealShell, RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ShellExecutor, F: FileSystem> CloudClusterAdapter<S, F> {
    pub fn with_context(context: Context<S, F>) -> Self {
        Self {
            context,
            credentials: CredentialPolicy::default(),
            wait_duration: Duration::from_secs(5 * 60),
        }
    }

    pub fn with_credential_policy(mut self, policy: CredentialPolicy) -> Self {
        self.credentials = policy;
        self
    }

    pub fn with_wait_duration(mut self, duration: Duration) -> Self {
        self.wait_duration = duration;
        self
    }

    pub fn context(&self) -> &Context<S, F> {
        &self.context
    }

    // ── Projects ──

    pub async fn list_projects(&self) -> ActionResult<Vec<String>> {
        let result = self
            .run_json::<Vec<ProjectEntry>>(
                Operation::ListProjects,
                &[],
                "unable to list Google Cloud projects",
            )
            .await
            .map(|entries| entries.into_iter().map(ProjectEntry::into_id).collect());

        ActionResult::new(LISTING_PROJECTS, result)
    }

    /// Make `project_id` the active project for subsequent commands.
    ///
    /// Stricter than the other checks: anything written to stderr counts as
    /// failure even with a zero exit code.
    pub async fn set_project(&self, project_id: &str) -> Errorable<()> {
        self.run_checked(
            Operation::SetProject,
            &[("project", project_id)],
            "unable to set active project",
            SuccessCheck::Quiet,
        )
        .await?;

        tracing::debug!(project_id, "active project set");
        Ok(())
    }

    // ── Clusters ──

    pub async fn list_clusters(&self, project_id: &str) -> ActionResult<Vec<ClusterInfo>> {
        if let Err(e) = self.set_project(project_id).await {
            return ActionResult::new(LOGGING_INTO_PROJECT, Err(e));
        }

        let result = self
            .run_json::<Vec<ClusterInfo>>(
                Operation::ListClusters,
                &[],
                "unable to list Kubernetes clusters",
            )
            .await;

        ActionResult::new(LISTING_CLUSTERS, result)
    }

    /// Request a new cluster. Returns once the provider accepts the request,
    /// not when the cluster is ready.
    pub async fn create_cluster(&self, options: &CreateClusterOptions) -> ActionResult<()> {
        if let Err(e) = self.set_project(&options.project_id).await {
            return ActionResult::new(LOGGING_INTO_PROJECT, Err(e));
        }

        let unix = self.context.shell().is_unix();
        let mut line = tools::command_for(Operation::CreateCluster).render(
            unix,
            &[
                ("cluster", options.cluster_name.as_str()),
                ("zone", options.zone.as_str()),
            ],
        );
        if let Some(machine_type) = &options.machine_type {
            line.push_str(" --machine-type ");
            line.push_str(&tools::quote(machine_type, unix));
        }
        if let Some(node_count) = options.node_count {
            line.push_str(&format!(" --num-nodes {node_count}"));
        }

        let result = self
            .exec_line(Operation::CreateCluster, &line)
            .await
            .map_err(|e| AdapterError::not_invoked("unable to create cluster", &e))
            .and_then(|output| check(output, "unable to create cluster", SuccessCheck::ExitCode))
            .map(|_| {
                tracing::info!(cluster = %options.cluster_name, zone = %options.zone, "cluster creation requested");
            });

        ActionResult::new(CREATING_CLUSTER, result)
    }

    /// Wait for a requested cluster to come up.
    ///
    /// No readiness check is made: this pauses for the configured duration
    /// and reports [`Readiness::NotChecked`].
    pub async fn wait_for_cluster(&self, cluster_name: &str) -> Errorable<WaitResult> {
        tracing::info!(
            cluster = cluster_name,
            seconds = self.wait_duration.as_secs(),
            "waiting a fixed delay for cluster"
        );
        tokio::time::sleep(self.wait_duration).await;

        Ok(WaitResult {
            still_waiting: false,
            readiness: Readiness::NotChecked,
        })
    }

    /// Fetch credentials for the cluster and report where they landed.
    pub async fn configure_cluster(
        &self,
        cluster_type: &str,
        cluster_name: &str,
    ) -> ActionResult<ConfigureResult> {
        let credentials = self
            .get_credentials(cluster_name, self.credentials.max_attempts)
            .await;

        let (got_credentials, credentials_error) = match credentials {
            Ok(()) => (true, None),
            Err(e) => (false, Some(e.to_string())),
        };

        let kubeconfig = if got_credentials {
            resolve_kubeconfig(
                self.context.fs(),
                std::env::var_os("KUBECONFIG"),
                home_dir(),
            )
        } else {
            None
        };

        let report = ConfigureResult {
            cluster_type: cluster_type.to_owned(),
            got_credentials,
            credentials_error,
            kubeconfig,
        };

        let result = if report.got_credentials {
            Ok(report)
        } else {
            Err(AdapterError::Configure(Box::new(report)))
        };

        ActionResult::new(CONFIGURING_CLUSTER, result)
    }

    /// Request cluster credentials until they are granted or `max_attempts`
    /// requests have been made, sleeping the policy interval between them.
    ///
    /// A `max_attempts` of zero still makes one attempt.
    pub async fn get_credentials(&self, cluster_name: &str, max_attempts: u32) -> Errorable<()> {
        const CONTEXT: &str = "unable to get cluster credentials";

        let max_attempts = max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;

            let error = match self
                .run(Operation::GetCredentials, &[("cluster", cluster_name)])
                .await
            {
                Ok(output) if output.succeeded_quietly() => {
                    tracing::info!(cluster = cluster_name, attempt, "credentials fetched");
                    return Ok(());
                }
                Ok(output) => AdapterError::CommandFailed {
                    context: CONTEXT,
                    stderr: failure_text(&output),
                },
                Err(e) => AdapterError::not_invoked(CONTEXT, &e),
            };

            if attempt >= max_attempts {
                tracing::warn!(cluster = cluster_name, attempt, error = %error, "giving up on credentials");
                return Err(error);
            }

            tracing::info!(
                cluster = cluster_name,
                attempt,
                max_attempts,
                "credentials not yet available, retrying"
            );
            tokio::time::sleep(self.credentials.retry_interval).await;
        }
    }

    // ── Locations ──

    /// Map of region name to display name.
    pub async fn list_regions(&self) -> Errorable<BTreeMap<String, String>> {
        let entries = self
            .run_json::<Vec<RegionEntry>>(
                Operation::ListLocations,
                &[("query", LOCATIONS_QUERY)],
                "unable to list regions",
            )
            .await?;

        Ok(entries
            .into_iter()
            .map(|r| (r.name, r.display_name))
            .collect())
    }

    pub async fn list_gke_locations(&self) -> Errorable<Vec<ServiceLocation>> {
        self.list_gke_locations_in(&RegionCatalog::default()).await
    }

    /// Locations from `catalog`, labeled with the fetched display names.
    ///
    /// A catalog region missing from the fetched map is still returned, with
    /// no display name.
    pub async fn list_gke_locations_in(
        &self,
        catalog: &RegionCatalog,
    ) -> Errorable<Vec<ServiceLocation>> {
        let regions = self.list_regions().await?;
        Ok(service_locations(&regions, catalog))
    }

    pub async fn list_vm_sizes(&self, location: &str) -> Errorable<Vec<String>> {
        let sizes = self
            .run_json::<Vec<VmSize>>(
                Operation::ListVmSizes,
                &[("location", location)],
                "unable to list VM sizes",
            )
            .await?;

        Ok(usable_vm_sizes(sizes.into_iter().map(|s| s.name)))
    }

    // ── Execution helpers ──

    async fn run(
        &self,
        operation: Operation,
        params: &[(&str, &str)],
    ) -> Result<ShellOutput, ShellError> {
        let line =
            tools::command_for(operation).render(self.context.shell().is_unix(), params);
        self.exec_line(operation, &line).await
    }

    async fn exec_line(
        &self,
        operation: Operation,
        line: &str,
    ) -> Result<ShellOutput, ShellError> {
        tracing::debug!(?operation, command = line, "running");
        self.context.shell().exec(line).await
    }

    async fn run_checked(
        &self,
        operation: Operation,
        params: &[(&str, &str)],
        context: &'static str,
        success: SuccessCheck,
    ) -> Errorable<ShellOutput> {
        let output = self
            .run(operation, params)
            .await
            .map_err(|e| AdapterError::not_invoked(context, &e))?;
        check(output, context, success)
    }

    async fn run_json<T: serde::de::DeserializeOwned>(
        &self,
        operation: Operation,
        params: &[(&str, &str)],
        context: &'static str,
    ) -> Errorable<T> {
        let output = self
            .run_checked(operation, params, context, SuccessCheck::ExitCode)
            .await?;

        serde_json::from_str(&output.stdout).map_err(|e| {
            tracing::debug!(?operation, error = %e, "unparseable output");
            AdapterError::Parse { context }
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum SuccessCheck {
    /// Zero exit code.
    ExitCode,
    /// Zero exit code and empty stderr.
    Quiet,
}

fn check(output: ShellOutput, context: &'static str, success: SuccessCheck) -> Errorable<ShellOutput> {
    let ok = match success {
        SuccessCheck::ExitCode => output.succeeded(),
        SuccessCheck::Quiet => output.succeeded_quietly(),
    };

    if ok {
        Ok(output)
    } else {
        let stderr = failure_text(&output);
        tracing::warn!(context, exit_code = output.exit_code, stderr = %stderr, "command failed");
        Err(AdapterError::CommandFailed { context, stderr })
    }
}

fn failure_text(output: &ShellOutput) -> String {
    if output.stderr.is_empty() {
        format!("exited with code {}", output.exit_code)
    } else {
        output.stderr.clone()
    }
}

/// Pair each catalog region with its display name, production first.
pub fn service_locations(
    regions: &BTreeMap<String, String>,
    catalog: &RegionCatalog,
) -> Vec<ServiceLocation> {
    let tier = |names: &[String], is_preview: bool| {
        names
            .iter()
            .map(|name| ServiceLocation {
                name: name.clone(),
                display_name: regions.get(name).cloned(),
                is_preview,
            })
            .collect::<Vec<_>>()
    };

    let mut locations = tier(catalog.production.as_slice(), false);
    locations.extend(tier(catalog.preview.as_slice(), true));
    locations
}

/// Drop sizes that start with [`BASIC_VM_PREFIX`].
pub fn usable_vm_sizes(names: impl IntoIterator<Item = String>) -> Vec<String> {
    names
        .into_iter()
        .filter(|n| !n.starts_with(BASIC_VM_PREFIX))
        .collect()
}

/// Kubeconfig file credentials were merged into, if it exists.
///
/// First entry of `KUBECONFIG` when set, else `<home>/.kube/config`.
pub fn resolve_kubeconfig(
    fs: &impl FileSystem,
    kubeconfig_env: Option<OsString>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    let from_env = kubeconfig_env
        .as_deref()
        .and_then(|v| std::env::split_paths(v).find(|p| !p.as_os_str().is_empty()));

    let candidate = from_env.or_else(|| home.map(|h| h.join(".kube").join("config")))?;

    if fs.exists(&candidate) {
        Some(candidate)
    } else {
        tracing::debug!(path = %candidate.display(), "kubeconfig not found");
        None
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

// ── Output shapes ──

#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectEntry {
    Id(String),
    Project {
        #[serde(rename = "projectId")]
        project_id: String,
    },
}

impl ProjectEntry {
    fn into_id(self) -> String {
        match self {
            Self::Id(id) | Self::Project { project_id: id } => id,
        }
    }
}

#[derive(Deserialize)]
struct RegionEntry {
    name: String,
    #[serde(rename = "displayName")]
    display_name: String,
}

#[derive(Deserialize)]
struct VmSize {
    name: String,
}

// ── Result types ──

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClusterInfo {
    pub name: String,
    /// Resource group; GKE reports the cluster location here.
    #[serde(rename = "resourceGroup", alias = "location")]
    pub resource_group: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLocation {
    pub name: String,
    pub display_name: Option<String>,
    pub is_preview: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClusterOptions {
    pub project_id: String,
    pub cluster_name: String,
    pub zone: String,
    pub machine_type: Option<String>,
    pub node_count: Option<u32>,
}

impl CreateClusterOptions {
    pub fn new(project_id: &str, cluster_name: &str, zone: &str) -> Self {
        Self {
            project_id: project_id.to_owned(),
            cluster_name: cluster_name.to_owned(),
            zone: zone.to_owned(),
            machine_type: None,
            node_count: None,
        }
    }
}

/// How cluster readiness was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Not polled; a fixed delay elapsed.
    NotChecked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitResult {
    pub still_waiting: bool,
    pub readiness: Readiness,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureResult {
    pub cluster_type: String,
    pub got_credentials: bool,
    pub credentials_error: Option<String>,
    pub kubeconfig: Option<PathBuf>,
}

impl ConfigureResult {
    pub fn kubeconfig(&self) -> Option<&Path> {
        self.kubeconfig.as_deref()
    }
}
