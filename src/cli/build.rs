// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

use camino::Utf8PathBuf;
use eyre::{eyre, WrapErr};

use crate::{config, filters::pages_only::select_pages, site::Site, template};

#[derive(clap::Args)]
pub struct BuildCommand {
    /// Path to the configuration file (e.g., "Exercise.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    config: Utf8PathBuf,
}

pub fn build(command: &BuildCommand) -> eyre::Result<()> {
    let config = config::load_config(command.config.clone())?;
    let parser = template::parser()?;

    let site = Site::load(&config)?;
    site.build(&parser)
        .wrap_err_with(|| eyre!("failed to build site `{}`", config.source_dir()))?;

    println!(
        "Built {} pages ({} under `/pages`) and {} static files into `{}`",
        site.pages.len(),
        select_pages(&site.pages).len(),
        site.static_files.len(),
        config.output_dir()
    );
    Ok(())
}
