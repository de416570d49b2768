use clusterprov_cloud::CloudClusterAdapter;
use clusterprov_core::ClusterprovConfig;

pub async fn wait(name: &str) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let outcome = super::adapter(&config)
        .wait_for_cluster(name)
        .await
        .map_err(|e| anyhow::anyhow!("waiting for cluster failed: {e}"))?;

    tracing::debug!(?outcome, "wait finished");
    println!("Waited for '{name}' (readiness not checked)");
    Ok(())
}

pub async fn configure(name: &str) -> anyhow::Result<()> {
    let config = super::load_config()?;
    configure_with(&super::adapter(&config), &config, name).await
}

pub(crate) async fn wait_and_configure(
    adapter: &CloudClusterAdapter,
    config: &ClusterprovConfig,
    name: &str,
) -> anyhow::Result<()> {
    adapter
        .wait_for_cluster(name)
        .await
        .map_err(|e| anyhow::anyhow!("waiting for cluster failed: {e}"))?;
    configure_with(adapter, config, name).await
}

async fn configure_with(
    adapter: &CloudClusterAdapter,
    config: &ClusterprovConfig,
    name: &str,
) -> anyhow::Result<()> {
    let report = super::finish(
        adapter
            .configure_cluster(&config.cluster.cluster_type, name)
            .await,
    )?;

    match report.kubeconfig() {
        Some(path) => println!(
            "Configured {} cluster '{name}' in {}",
            report.cluster_type,
            path.display()
        ),
        None => println!("Configured {} cluster '{name}'", report.cluster_type),
    }
    Ok(())
}
