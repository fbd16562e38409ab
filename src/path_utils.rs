// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Normalised `/`-separated form of a relative path.
pub fn pretty_path(path: &Utf8Path) -> String {
    let mut segments = Vec::new();
    for c in path.components() {
        match c {
            Utf8Component::Prefix(_) | Utf8Component::RootDir | Utf8Component::CurDir => (),
            Utf8Component::ParentDir => {
                segments.pop();
            }
            Utf8Component::Normal(_) => segments.push(c.as_str()),
        }
    }
    segments.join("/")
}

pub fn is_markdown(path: &Utf8Path) -> bool {
    matches!(path.extension(), Some("md" | "markdown"))
}

/// Derive a page url from its path relative to the source directory.
///
/// `a/b.md` becomes `/a/b.html` and `a/index.html` becomes `/a/`.
/// With `pretty_urls`, `a/b.md` becomes `/a/b/`.
pub fn source_url(relative: &Utf8Path, pretty_urls: bool) -> String {
    let path = pretty_path(relative);
    let path = Utf8Path::new(&path);

    let path = if is_markdown(path) {
        path.with_extension("html")
    } else {
        path.to_path_buf()
    };

    if path.file_name() == Some("index.html") {
        return match path.parent().map(pretty_path) {
            Some(dir) if !dir.is_empty() => format!("/{}/", dir),
            _ => "/".to_string(),
        };
    }

    if pretty_urls && path.extension() == Some("html") {
        return format!("/{}/", pretty_path(&path.with_extension("")));
    }

    format!("/{}", pretty_path(&path))
}

/// Path of `file` relative to `dir`, whichever way either is spelled.
///
/// Both sides are canonicalized when they exist, otherwise compared in their
/// [`pretty_path`] form, so `site/a.md` is inside `./site`. A file outside
/// `dir` falls back to its file name.
pub fn relative_to(file: &Utf8Path, dir: &Utf8Path) -> Utf8PathBuf {
    let (file_key, dir_key) = match (file.canonicalize_utf8(), dir.canonicalize_utf8()) {
        (Ok(file), Ok(dir)) => (pretty_path(&file), pretty_path(&dir)),
        _ => (pretty_path(file), pretty_path(dir)),
    };

    let relative = if dir_key.is_empty() {
        Some(file_key.as_str())
    } else {
        file_key
            .strip_prefix(&dir_key)
            .and_then(|rest| rest.strip_prefix('/'))
    };

    match relative {
        Some(relative) if !relative.is_empty() => Utf8PathBuf::from(relative),
        _ => Utf8PathBuf::from(file.file_name().unwrap_or(file.as_str())),
    }
}

/// File path of a url inside the output directory.
pub fn output_path(url: &str) -> Utf8PathBuf {
    let relative = url.trim_start_matches('/');
    let mut path = Utf8PathBuf::from(relative);
    if relative.is_empty() || relative.ends_with('/') {
        path.push("index.html");
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_path() {
        assert_eq!(pretty_path("./a/b".into()), "a/b");
        assert_eq!(pretty_path("a/../b/c".into()), "b/c");
        assert_eq!(pretty_path("/a".into()), "a");
    }

    #[test]
    fn test_source_url() {
        assert_eq!(source_url("index.html".into(), false), "/");
        assert_eq!(source_url("about.md".into(), false), "/about.html");
        assert_eq!(source_url("pages/a.markdown".into(), false), "/pages/a.html");
        assert_eq!(source_url("pages/index.md".into(), false), "/pages/");
        assert_eq!(source_url("feed.xml".into(), false), "/feed.xml");
    }

    #[test]
    fn test_source_url_pretty() {
        assert_eq!(source_url("about.md".into(), true), "/about/");
        assert_eq!(source_url("pages/a.html".into(), true), "/pages/a/");
        assert_eq!(source_url("index.html".into(), true), "/");
        assert_eq!(source_url("feed.xml".into(), true), "/feed.xml");
    }

    #[test]
    fn test_relative_to() {
        assert_eq!(
            relative_to("site/pages/a.md".into(), "./site".into()),
            Utf8PathBuf::from("pages/a.md")
        );
        assert_eq!(
            relative_to("./site/a.md".into(), "site".into()),
            Utf8PathBuf::from("a.md")
        );
        assert_eq!(
            relative_to("pages/a.md".into(), ".".into()),
            Utf8PathBuf::from("pages/a.md")
        );
        assert_eq!(
            relative_to("sitemap/a.md".into(), "./site".into()),
            Utf8PathBuf::from("a.md")
        );
        assert_eq!(
            relative_to("elsewhere/b.html".into(), "./site".into()),
            Utf8PathBuf::from("b.html")
        );
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path("/"), Utf8PathBuf::from("index.html"));
        assert_eq!(output_path("/pages/"), Utf8PathBuf::from("pages/index.html"));
        assert_eq!(output_path("/about.html"), Utf8PathBuf::from("about.html"));
    }
}
