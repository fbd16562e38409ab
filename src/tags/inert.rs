// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

use std::io::Write;

use liquid_core::{Language, ParseTag, Renderable, Result, Runtime, TagReflection, TagTokenIter};

/// Marker tags that are recognised inside exercise blocks but emit nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InertKind {
    Initial,
    Solution,
    Validation,
    Hints,
}

impl InertKind {
    pub const ALL: [InertKind; 4] = [
        InertKind::Initial,
        InertKind::Solution,
        InertKind::Validation,
        InertKind::Hints,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InertKind::Initial => "initial",
            InertKind::Solution => "solution",
            InertKind::Validation => "validation",
            InertKind::Hints => "hints",
        }
    }
}

impl std::fmt::Display for InertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Copy, Clone, Debug)]
pub struct InertTag {
    kind: InertKind,
}

impl InertTag {
    pub fn new(kind: InertKind) -> Self {
        Self { kind }
    }
}

impl TagReflection for InertTag {
    fn tag(&self) -> &str {
        self.kind.name()
    }

    fn description(&self) -> &str {
        "Accepted and discarded; renders nothing."
    }
}

impl ParseTag for InertTag {
    fn parse(
        &self,
        arguments: TagTokenIter<'_>,
        _options: &Language,
    ) -> Result<Box<dyn Renderable>> {
        arguments.for_each(drop);
        Ok(Box::new(Inert))
    }

    fn reflection(&self) -> &dyn TagReflection {
        self
    }
}

#[derive(Debug)]
struct Inert;

impl Renderable for Inert {
    fn render_to(&self, _writer: &mut dyn Write, _runtime: &dyn Runtime) -> Result<()> {
        Ok(())
    }
}
