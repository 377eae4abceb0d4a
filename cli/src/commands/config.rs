//! Config command - show and change settings.

use anyhow::Result;
use portscout_core::ConfigStore;

pub async fn show(json: bool) -> Result<()> {
    let store = ConfigStore::new()?;
    let config = store.load().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Configuration file: {}", store.path().display());
    println!();
    println!("Default format: {}", config.default_format);
    println!("Project name:   {}", config.project_name);
    println!("lsof:           {}", config.tools.lsof);
    println!("ps:             {}", config.tools.ps);
    println!("ss:             {}", config.tools.ss);

    Ok(())
}

pub async fn set(key: &str, value: &str) -> Result<()> {
    let store = ConfigStore::new()?;
    store.set(key, value).await?;
    println!("Set {} = {}", key, value.trim());
    Ok(())
}
