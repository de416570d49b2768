mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "clusterprov",
    about = "List, create and configure GKE clusters through gcloud"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List accessible Google Cloud projects
    Projects,
    /// List clusters in a project
    Clusters {
        /// Project ID (defaults to [project].gcp_project_id)
        #[arg(long)]
        project: Option<String>,
    },
    /// List region names and display names
    Regions,
    /// List locations offered for new clusters
    Locations,
    /// List VM sizes available in a location
    VmSizes {
        /// Location (defaults to [project].location)
        #[arg(long)]
        location: Option<String>,
    },
    /// Request a new cluster
    Create {
        /// Cluster name
        #[arg(long)]
        name: String,
        /// Project ID (defaults to [project].gcp_project_id)
        #[arg(long)]
        project: Option<String>,
        /// Zone (defaults to [project].zone)
        #[arg(long)]
        zone: Option<String>,
        /// Node machine type
        #[arg(long)]
        machine_type: Option<String>,
        /// Initial node count
        #[arg(long)]
        node_count: Option<u32>,
        /// Wait, then fetch credentials once the request is accepted
        #[arg(long)]
        wait: bool,
    },
    /// Wait a fixed delay for a new cluster
    Wait {
        /// Cluster name
        #[arg(long)]
        name: String,
    },
    /// Fetch credentials for a cluster into the kubeconfig
    Configure {
        /// Cluster name
        #[arg(long)]
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG, falling back to info
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Projects => commands::projects().await?,
        Commands::Clusters { project } => commands::clusters(project.as_deref()).await?,
        Commands::Regions => commands::regions().await?,
        Commands::Locations => commands::locations().await?,
        Commands::VmSizes { location } => commands::vm_sizes(location.as_deref()).await?,
        Commands::Create {
            name,
            project,
            zone,
            machine_type,
            node_count,
            wait,
        } => {
            commands::create(commands::CreateArgs {
                name,
                project,
                zone,
                machine_type,
                node_count,
                wait,
            })
            .await?
        }
        Commands::Wait { name } => commands::wait(&name).await?,
        Commands::Configure { name } => commands::configure(&name).await?,
    }

    Ok(())
}
