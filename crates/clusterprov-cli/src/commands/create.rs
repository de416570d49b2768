use clusterprov_cloud::CreateClusterOptions;

pub struct CreateArgs {
    pub name: String,
    pub project: Option<String>,
    pub zone: Option<String>,
    pub machine_type: Option<String>,
    pub node_count: Option<u32>,
    pub wait: bool,
}

pub async fn create(args: CreateArgs) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let project_id = config.project_id(args.project.as_deref())?;

    let options = CreateClusterOptions {
        project_id: project_id.to_owned(),
        cluster_name: args.name.clone(),
        zone: match args.zone {
            Some(zone) => zone,
            None => config.project.zone.clone(),
        },
        machine_type: args.machine_type.or_else(|| config.cluster.machine_type.clone()),
        node_count: args.node_count.or(config.cluster.node_count),
    };

    let adapter = super::adapter(&config);
    super::finish(adapter.create_cluster(&options).await)?;
    println!(
        "Requested cluster '{}' in {} ({project_id})",
        options.cluster_name, options.zone
    );

    if args.wait {
        super::configure::wait_and_configure(&adapter, &config, &options.cluster_name).await?;
    }
    Ok(())
}
