pub async fn clusters(project: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let project_id = config.project_id(project)?;

    let clusters = super::finish(super::adapter(&config).list_clusters(project_id).await)?;

    if clusters.is_empty() {
        println!("No clusters in {project_id}");
    } else {
        for cluster in &clusters {
            println!("{}\t{}", cluster.name, cluster.resource_group);
        }
    }
    Ok(())
}
