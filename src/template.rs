// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

use eyre::WrapErr;
use liquid::{Parser, ParserBuilder};
use liquid_core::ObjectView;

use crate::{
    filters::PagesOnly,
    tags::{ExerciseBlock, InertKind, InertTag},
};

/// Register the exercise block, the inert tags and the `pages_only` filter.
pub fn register(builder: ParserBuilder) -> ParserBuilder {
    let builder = builder.block(ExerciseBlock::new());
    let builder = InertKind::ALL
        .into_iter()
        .fold(builder, |builder, kind| builder.tag(InertTag::new(kind)));
    builder.filter(PagesOnly)
}

/// Liquid standard library plus this crate's tags and filters.
pub fn parser() -> eyre::Result<Parser> {
    register(ParserBuilder::with_stdlib())
        .build()
        .wrap_err("failed to build liquid parser")
}

pub fn render_str(
    parser: &Parser,
    source: &str,
    globals: &dyn ObjectView,
) -> liquid_core::Result<String> {
    parser.parse(source)?.render(globals)
}
