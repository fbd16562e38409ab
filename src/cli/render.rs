// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};

use crate::{
    config::{self, SiteConfig},
    page::Page,
    path_utils,
    site::Site,
    template,
};

#[derive(clap::Args)]
pub struct RenderCommand {
    /// Template file to render. Front matter is optional.
    pub file: Utf8PathBuf,

    /// Path to the configuration file (e.g., "Exercise.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    config: Utf8PathBuf,
}

/// Render one template with the site's pages in scope and print it to stdout.
pub fn render(command: &RenderCommand) -> eyre::Result<()> {
    let config = config::load_config(command.config.clone())?;
    print!("{}", render_file(&config, &command.file)?);
    Ok(())
}

/// The url of `file` follows the same rules as in `site.pages` when it lives
/// under the source directory; otherwise only its file name is used.
pub fn render_file(config: &SiteConfig, file: &Utf8Path) -> eyre::Result<String> {
    let parser = template::parser()?;
    let site = Site::load(config)?;

    let source =
        std::fs::read_to_string(file).wrap_err_with(|| eyre!("failed to read `{}`", file))?;
    let relative = path_utils::relative_to(file, &config.source_dir());
    let pretty_urls = config.config.build.pretty_urls;

    let page = match Page::parse(&relative, &source, pretty_urls)
        .wrap_err_with(|| eyre!("failed to parse front matter of `{}`", file))?
    {
        Some(page) => page,
        None => Page::plain(&relative, &source, pretty_urls),
    };
    site.render_page(&parser, &page)
}
