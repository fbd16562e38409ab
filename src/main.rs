// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

mod cli;
mod config;
mod filters;
mod markdown;
mod page;
mod path_utils;
mod site;
mod tags;
mod template;

use clap::Parser;

use crate::cli::{build::BuildCommand, render::RenderCommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Render every page of the site into the output directory.
    #[command(visible_alias = "b")]
    Build(BuildCommand),

    /// Render a single template file to stdout.
    #[command(visible_alias = "r")]
    Render(RenderCommand),
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Build(command) => crate::cli::build::build(command)?,
        Command::Render(command) => crate::cli::render::render(command)?,
    };
    Ok(())
}
