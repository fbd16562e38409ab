// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

use camino::Utf8Path;
use eyre::bail;
use indexmap::IndexMap;
use liquid::model::Value;

use crate::{filters::HasUrl, path_utils};

const FRONT_MATTER_DELIMITER: &str = "---";

/// One renderable page of the site: a source file that starts with front matter.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub url: String,
    /// Source path relative to the source directory.
    pub path: String,
    pub front_matter: IndexMap<String, String>,
    pub content: String,
}

impl Page {
    /// Returns `None` when `source` has no front matter, i.e. is a static file.
    pub fn parse(
        relative: &Utf8Path,
        source: &str,
        pretty_urls: bool,
    ) -> eyre::Result<Option<Page>> {
        let Some((header, content)) = split_front_matter(source) else {
            return Ok(None);
        };
        let front_matter = parse_front_matter(header)?;

        let url = match front_matter.get("permalink") {
            Some(permalink) if permalink.starts_with('/') => permalink.to_string(),
            Some(permalink) => format!("/{}", permalink),
            None => path_utils::source_url(relative, pretty_urls),
        };

        Ok(Some(Page {
            url,
            path: path_utils::pretty_path(relative),
            front_matter,
            content: content.to_string(),
        }))
    }

    /// A page for a file without front matter, used when rendering a single template.
    pub fn plain(relative: &Utf8Path, source: &str, pretty_urls: bool) -> Page {
        Page {
            url: path_utils::source_url(relative, pretty_urls),
            path: path_utils::pretty_path(relative),
            front_matter: IndexMap::new(),
            content: source.to_string(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.front_matter.get("title").map(|s| s.as_str())
    }

    pub fn is_markdown(&self) -> bool {
        path_utils::is_markdown(Utf8Path::new(&self.path))
    }

    /// The `page` object seen by templates.
    pub fn to_object(&self) -> liquid::Object {
        let mut object = liquid::Object::new();
        for (key, value) in &self.front_matter {
            object.insert(key.clone().into(), Value::scalar(value.clone()));
        }
        object.insert("url".into(), Value::scalar(self.url.clone()));
        object.insert("path".into(), Value::scalar(self.path.clone()));
        object.insert("content".into(), Value::scalar(self.content.clone()));
        object.insert(
            "title".into(),
            self.title()
                .map_or(Value::Nil, |title| Value::scalar(title.to_string())),
        );
        object
    }
}

impl HasUrl for Page {
    fn url(&self) -> &str {
        &self.url
    }
}

/// Split `---\n<header>\n---\n<body>` into header and body.
fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let mut lines = source.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != FRONT_MATTER_DELIMITER {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return Some((&source[header_start..offset], &source[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn parse_front_matter(header: &str) -> eyre::Result<IndexMap<String, String>> {
    let mut front_matter = IndexMap::new();
    for (index, line) in header.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some(pos) = line.find(':') else {
            bail!(
                "front matter line {} expects `name: value`, found `{}`",
                index + 2,
                line.trim()
            );
        };
        let key = line[..pos].trim();
        let val = line[pos + 1..].trim();
        front_matter.insert(key.to_string(), unquote(val).to_string());
    }
    Ok(front_matter)
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str, source: &str) -> Option<Page> {
        Page::parse(Utf8Path::new(path), source, false).unwrap()
    }

    #[test]
    fn test_static_file() {
        assert_eq!(parse("style.css", "body {}"), None);
        assert_eq!(parse("a.md", "# no front matter\n---\n"), None);
        assert_eq!(parse("a.md", "---\ntitle: unterminated\n"), None);
    }

    #[test]
    fn test_front_matter() {
        let page = parse(
            "pages/intro.md",
            "---\ntitle: \"Intro: part 1\"\nlayout: default\n\n---\nHello\n",
        )
        .unwrap();

        assert_eq!(page.url, "/pages/intro.html");
        assert_eq!(page.path, "pages/intro.md");
        assert_eq!(page.title(), Some("Intro: part 1"));
        assert_eq!(page.front_matter.get("layout").unwrap(), "default");
        assert_eq!(page.content, "Hello\n");
        assert!(page.is_markdown());
    }

    #[test]
    fn test_empty_front_matter() {
        let page = parse("index.html", "---\n---\n<h1>x</h1>").unwrap();
        assert_eq!(page.url, "/");
        assert!(page.front_matter.is_empty());
        assert_eq!(page.content, "<h1>x</h1>");
        assert!(!page.is_markdown());
    }

    #[test]
    fn test_crlf_front_matter() {
        let page = parse("a.html", "---\r\ntitle: A\r\n---\r\nbody").unwrap();
        assert_eq!(page.title(), Some("A"));
        assert_eq!(page.content, "body");
    }

    #[test]
    fn test_permalink() {
        let page = parse("x.md", "---\npermalink: /pagesfoo\n---\n").unwrap();
        assert_eq!(page.url, "/pagesfoo");

        let page = parse("x.md", "---\npermalink: pages/x/\n---\n").unwrap();
        assert_eq!(page.url, "/pages/x/");
    }

    #[test]
    fn test_malformed_front_matter() {
        let err = Page::parse(Utf8Path::new("a.md"), "---\ntitle: A\noops\n---\n", false)
            .unwrap_err();
        assert!(err.to_string().contains("line 3"), "{}", err);
    }

    #[test]
    fn test_to_object() {
        let page = parse("pages/a.md", "---\ntitle: A\nurl: /ignored\n---\nbody").unwrap();
        let object = page.to_object();

        assert_eq!(object.get("url").unwrap(), &Value::scalar("/pages/a.html"));
        assert_eq!(object.get("title").unwrap(), &Value::scalar("A"));
        assert_eq!(object.get("path").unwrap(), &Value::scalar("pages/a.md"));
        assert_eq!(object.get("content").unwrap(), &Value::scalar("body"));
    }

    #[test]
    fn test_plain() {
        let page = Page::plain(Utf8Path::new("./pages/a.md"), "{{ x }}", true);
        assert_eq!(page.url, "/pages/a/");
        assert_eq!(page.path, "pages/a.md");
        assert_eq!(page.content, "{{ x }}");
        assert_eq!(page.title(), None);
    }

    #[test]
    fn test_to_object_without_title() {
        let page = parse("a.html", "---\n---\n").unwrap();
        assert_eq!(page.to_object().get("title").unwrap(), &Value::Nil);
    }
}
