// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};
use itertools::Itertools;
use liquid::{model::Value, Parser};
use walkdir::WalkDir;

use crate::{config::SiteConfig, markdown, page::Page, path_utils, template};

pub fn should_ignored(name: &str) -> bool {
    name.starts_with(['.', '_'])
}

/// All pages and static files under the source directory.
#[derive(Debug)]
pub struct Site<'a> {
    config: &'a SiteConfig,
    pub pages: Vec<Page>,
    /// Paths relative to the source directory.
    pub static_files: Vec<Utf8PathBuf>,
    object: liquid::Object,
}

impl<'a> Site<'a> {
    pub fn load(config: &'a SiteConfig) -> eyre::Result<Site<'a>> {
        let source_dir = config.source_dir();
        let output_dir = config.output_dir();
        let pretty_urls = config.config.build.pretty_urls;

        let mut pages = Vec::new();
        let mut static_files = Vec::new();

        if !source_dir.exists() {
            color_print::ceprintln!(
                "<y>Warning:</> Source directory `{}` does not exist, skipping.",
                source_dir
            );
        } else {
            let failed_to_read_dir = || eyre!("failed to read directory `{}`", source_dir);
            let walker = WalkDir::new(&source_dir)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| {
                    e.depth() == 0
                        || (e.path() != output_dir.as_std_path()
                            && !e.file_name().to_str().is_some_and(should_ignored))
                });

            for entry in walker {
                let entry = entry.wrap_err_with(failed_to_read_dir)?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let Ok(path) = Utf8PathBuf::try_from(entry.into_path()) else {
                    color_print::ceprintln!("<y>Warning:</> Skip non-UTF-8 path.");
                    continue;
                };
                let relative = path
                    .strip_prefix(&source_dir)
                    .wrap_err_with(|| eyre!("`{}` is outside `{}`", path, source_dir))?
                    .to_path_buf();

                let bytes =
                    fs::read(&path).wrap_err_with(|| eyre!("failed to read file `{}`", path))?;
                let page = match std::str::from_utf8(&bytes) {
                    Ok(source) => Page::parse(&relative, source, pretty_urls)
                        .wrap_err_with(|| eyre!("failed to parse front matter of `{}`", path))?,
                    Err(_) => None,
                };
                match page {
                    Some(page) => pages.push(page),
                    None => static_files.push(relative),
                }
            }
        }

        let pages: Vec<Page> = pages
            .into_iter()
            .sorted_by(|a, b| a.path.cmp(&b.path))
            .collect();
        let object = site_object(&pages, config.base_url());

        Ok(Site {
            config,
            pages,
            static_files,
            object,
        })
    }

    /// Liquid pass, then Markdown when enabled for Markdown pages.
    pub fn render_page(&self, parser: &Parser, page: &Page) -> eyre::Result<String> {
        let mut globals = liquid::Object::new();
        globals.insert("site".into(), Value::Object(self.object.clone()));
        globals.insert("page".into(), Value::Object(page.to_object()));

        let rendered = template::render_str(parser, &page.content, &globals)
            .wrap_err_with(|| eyre!("failed to render page `{}`", page.path))?;

        if self.config.config.build.markdown && page.is_markdown() {
            Ok(markdown::to_html(&rendered))
        } else {
            Ok(rendered)
        }
    }

    pub fn build(&self, parser: &Parser) -> eyre::Result<()> {
        let output_dir = self.config.output_dir();
        fs::create_dir_all(&output_dir)
            .wrap_err_with(|| eyre!("failed to create output directory `{}`", output_dir))?;

        for page in &self.pages {
            let html = self.render_page(parser, page)?;
            let filepath = output_dir.join(path_utils::output_path(&page.url));
            write_file(&filepath, html.as_bytes())?;
            println!(
                "Output: {:?} {}",
                page.title().unwrap_or(""),
                path_utils::pretty_path(&filepath)
            );
        }

        let source_dir = self.config.source_dir();
        for relative in &self.static_files {
            let source = source_dir.join(relative);
            let target = output_dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .wrap_err_with(|| eyre!("failed to create directory `{}`", parent))?;
            }
            fs::copy(&source, &target)
                .wrap_err_with(|| eyre!("failed to copy `{}` to `{}`", source, target))?;
        }

        Ok(())
    }
}

fn site_object(pages: &[Page], base_url: &str) -> liquid::Object {
    let mut object = liquid::Object::new();
    let pages = pages.iter().map(|p| Value::Object(p.to_object())).collect();
    object.insert("pages".into(), Value::Array(pages));
    object.insert("base_url".into(), Value::scalar(base_url.to_string()));
    object
}

fn write_file(path: &Utf8Path, contents: &[u8]) -> eyre::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| eyre!("failed to create directory `{}`", parent))?;
    }
    fs::write(path, contents).wrap_err_with(|| eyre!("failed to write `{}`", path))
}
