// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

use std::io::Write;

use liquid_core::error::ResultLiquidReplaceExt;
use liquid_core::{
    BlockReflection, Language, ParseBlock, Renderable, Result, Runtime, TagBlock, TagTokenIter,
    Template,
};

/// `{% exercise %} ... {% endexercise %}`
///
/// Renders the enclosed template and wraps the output in `<p>...</p>`.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExerciseBlock;

impl ExerciseBlock {
    pub fn new() -> Self {
        Self
    }
}

impl BlockReflection for ExerciseBlock {
    fn start_tag(&self) -> &str {
        "exercise"
    }

    fn end_tag(&self) -> &str {
        "endexercise"
    }

    fn description(&self) -> &str {
        "Wraps the rendered block content in a paragraph."
    }
}

impl ParseBlock for ExerciseBlock {
    fn parse(
        &self,
        mut arguments: TagTokenIter<'_>,
        mut tokens: TagBlock<'_, '_>,
        options: &Language,
    ) -> Result<Box<dyn Renderable>> {
        arguments.expect_nothing()?;

        let template = Template::new(tokens.parse_all(options)?);
        tokens.assert_empty();

        Ok(Box::new(Exercise { template }))
    }

    fn reflection(&self) -> &dyn BlockReflection {
        self
    }
}

#[derive(Debug)]
struct Exercise {
    template: Template,
}

impl Renderable for Exercise {
    fn render_to(&self, writer: &mut dyn Write, runtime: &dyn Runtime) -> Result<()> {
        write!(writer, "<p>").replace("Failed to render")?;
        self.template.render_to(writer, runtime)?;
        write!(writer, "</p>").replace("Failed to render")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::template::{parser, render_str};

    fn render(source: &str, globals: liquid::Object) -> String {
        let parser = parser().unwrap();
        render_str(&parser, source, &globals).unwrap()
    }

    #[test]
    fn test_plain_text() {
        let html = render("{% exercise %}Hello{% endexercise %}", liquid::Object::new());
        assert_eq!(html, "<p>Hello</p>");
    }

    #[test]
    fn test_variables_are_substituted() {
        let globals = liquid::object!({ "name": "Ann" });
        let html = render("{% exercise %}Hi {{ name }}{% endexercise %}", globals);
        assert_eq!(html, "<p>Hi Ann</p>");
    }

    #[test]
    fn test_surrounding_text_is_untouched() {
        let html = render(
            "before {% exercise %} x {% endexercise %} after",
            liquid::Object::new(),
        );
        assert_eq!(html, "before <p> x </p> after");
    }

    #[test]
    fn test_empty_block() {
        let html = render("{% exercise %}{% endexercise %}", liquid::Object::new());
        assert_eq!(html, "<p></p>");
    }

    #[test]
    fn test_inner_tags_are_rendered() {
        let globals = liquid::object!({ "items": [1, 2, 3] });
        let html = render(
            "{% exercise %}{% for i in items %}{{ i }}{% endfor %}{% solution %}{% endexercise %}",
            globals,
        );
        assert_eq!(html, "<p>123</p>");
    }

    #[test]
    fn test_arguments_are_rejected() {
        let parser = parser().unwrap();
        assert!(parser
            .parse("{% exercise solidity %}x{% endexercise %}")
            .is_err());
    }

    #[test]
    fn test_missing_end_tag() {
        let parser = parser().unwrap();
        assert!(parser.parse("{% exercise %}x").is_err());
    }

    #[test]
    fn test_inner_render_error_propagates() {
        let parser = parser().unwrap();
        let template = parser
            .parse("{% exercise %}{{ 1 | pages_only }}{% endexercise %}")
            .unwrap();
        assert!(template.render(&liquid::Object::new()).is_err());
    }
}
