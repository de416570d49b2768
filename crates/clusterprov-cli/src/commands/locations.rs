pub async fn regions() -> anyhow::Result<()> {
    let config = super::load_config()?;
    let regions = super::adapter(&config)
        .list_regions()
        .await
        .map_err(|e| anyhow::anyhow!("listing regions failed: {e}"))?;

    for (name, display_name) in &regions {
        println!("{name}\t{display_name}");
    }
    Ok(())
}

pub async fn locations() -> anyhow::Result<()> {
    let config = super::load_config()?;
    let locations = super::adapter(&config)
        .list_gke_locations()
        .await
        .map_err(|e| anyhow::anyhow!("listing locations failed: {e}"))?;

    for location in &locations {
        let display_name = match location.display_name.as_deref() {
            Some(name) => name,
            None => "-",
        };
        let tier = if location.is_preview { " (preview)" } else { "" };
        println!("{}\t{display_name}{tier}", location.name);
    }
    Ok(())
}

pub async fn vm_sizes(location: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let location = match location {
        Some(location) => location,
        None => config.project.location.as_str(),
    };

    let sizes = super::adapter(&config)
        .list_vm_sizes(location)
        .await
        .map_err(|e| anyhow::anyhow!("listing VM sizes failed: {e}"))?;

    for name in &sizes {
        println!("{name}");
    }
    Ok(())
}
