pub async fn projects() -> anyhow::Result<()> {
    let config = super::load_config()?;
    let projects = super::finish(super::adapter(&config).list_projects().await)?;

    if projects.is_empty() {
        println!("No projects found");
    } else {
        for id in &projects {
            println!("{id}");
        }
    }
    Ok(())
}
