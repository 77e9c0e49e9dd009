use anyhow::{anyhow, Result};
use std::path::PathBuf;

pub fn get_clipcopy_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".clipcopy"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let clipcopy_dir = get_clipcopy_dir()?;
    Ok(clipcopy_dir.join("config.toml"))
}
