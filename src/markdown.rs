// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

use pulldown_cmark::{html, Options, Parser};

pub const OPTIONS: Options = Options::ENABLE_TABLES
    .union(Options::ENABLE_STRIKETHROUGH)
    .union(Options::ENABLE_FOOTNOTES);

/// Markdown to HTML. Raw HTML in the input, such as rendered exercise blocks, is kept.
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, OPTIONS);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
