use anyhow::{Result, anyhow};
use std::path::PathBuf;

/// Default descriptor looked up in the working directory.
pub const DEFAULT_DESCRIPTOR: &str = "ideaxml.toml";

/// Default generated-resources root, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "build/generated/resources";

pub fn get_ideaxml_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".ideaxml"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let ideaxml_dir = get_ideaxml_dir()?;
    Ok(ideaxml_dir.join("config.toml"))
}
