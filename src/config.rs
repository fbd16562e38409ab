// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "./Exercise.toml";
pub const CONFIG_FILE_NAME: &str = "Exercise.toml";
pub const DEFAULT_SOURCE_DIR: &str = "site";
pub const DEFAULT_OUTPUT_DIR: &str = "./publish";
pub const DEFAULT_BASE_URL: &str = "/";

#[derive(Deserialize, Debug, Default, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: Site,

    #[serde(default)]
    pub build: Build,
}

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Site {
    pub source: String,
    pub output: String,
    pub base_url: String,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_DIR.to_string(),
            output: DEFAULT_OUTPUT_DIR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Build {
    /// Convert Markdown pages to HTML after the Liquid pass.
    pub markdown: bool,
    pub pretty_urls: bool,
}

impl Default for Build {
    fn default() -> Self {
        Self {
            markdown: true,
            pretty_urls: false,
        }
    }
}

/// A parsed [`Config`] together with the directory its relative paths resolve against.
#[derive(Debug)]
pub struct SiteConfig {
    pub root: Utf8PathBuf,
    pub config: Config,
}

impl SiteConfig {
    pub fn new(root: Utf8PathBuf, config: Config) -> Self {
        Self { root, config }
    }

    pub fn source_dir(&self) -> Utf8PathBuf {
        self.root.join(&self.config.site.source)
    }

    pub fn output_dir(&self) -> Utf8PathBuf {
        self.root.join(&self.config.site.output)
    }

    pub fn base_url(&self) -> &str {
        &self.config.site.base_url
    }
}

/// Try to find toml file in the current directory or the parent directory.
pub fn find_config(mut toml_file: Utf8PathBuf) -> eyre::Result<Utf8PathBuf> {
    if !toml_file.exists() {
        let parent = toml_file
            .parent()
            .filter(|p| !p.as_str().is_empty())
            .unwrap_or(Utf8Path::new("."))
            .canonicalize_utf8()
            .wrap_err_with(|| eyre!("cannot find configuration file: {}", toml_file))?;
        let parent = parent
            .parent()
            .ok_or_else(|| eyre!("cannot find configuration file: {}", toml_file))?;

        toml_file = parent.join(CONFIG_FILE_NAME);
        if !toml_file.exists() {
            return Err(eyre!("cannot find configuration file: {}", toml_file));
        }
    }
    Ok(toml_file)
}

pub fn parse_config(config: &str) -> eyre::Result<Config> {
    let config: Config =
        toml::from_str(config).map_err(|e| eyre!("failed to parse config file: {}", e))?;
    Ok(config)
}

pub fn load_config(toml_file: Utf8PathBuf) -> eyre::Result<SiteConfig> {
    let toml_file = find_config(toml_file)?;
    let toml = std::fs::read_to_string(&toml_file)
        .wrap_err_with(|| eyre!("failed to read configuration file `{}`", toml_file))?;

    let root = match toml_file.parent() {
        Some(p) if !p.as_str().is_empty() => p.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    };
    Ok(SiteConfig::new(root, parse_config(&toml)?))
}
