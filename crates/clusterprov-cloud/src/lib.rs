//! Managed Kubernetes cluster operations driven through the `gcloud` and `az`
//! command-line tools.
//!
//! Each operation renders a command line from the [`tools`] registry, runs
//! it through a [`ShellExecutor`], and maps the exit code, stderr and JSON
//! stdout into an [`Errorable`] or a labeled [`ActionResult`].

pub mod client;
pub mod context;
pub mod executor;
pub mod locations;
pub mod result;
pub mod shell;
pub mod tools;

pub use client::{
    BASIC_VM_PREFIX, CloudClusterAdapter, ClusterInfo, ConfigureResult, CreateClusterOptions,
    CredentialPolicy, Readiness, ServiceLocation, WaitResult,
};
pub use context::Context;
pub use executor::{FileSystem, RealFileSystem, RealShell, ShellExecutor};
pub use locations::RegionCatalog;
pub use result::{ActionResult, AdapterError, Errorable};
pub use shell::{ShellError, ShellOutput};
