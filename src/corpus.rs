//! Reading a corpus of HTML pages from a directory.

use crate::*;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use walkdir::WalkDir;

lazy_static! {
    static ref HREF_RE: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Build the link corpus of every `.html` file directly inside `directory`.
///
/// Pages are named by file name. Links pointing to the page itself or to
/// anything that is not a page of the corpus are dropped.
pub fn crawl<P: AsRef<Path>>(directory: P) -> Result<Corpus<String>> {
    let directory = directory.as_ref();
    let mut corpus = Corpus::default();
    for entry in WalkDir::new(directory)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!(path = %entry.path().display(), "skipping page with non UTF-8 name");
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        let contents =
            std::fs::read_to_string(entry.path()).map_err(|source| Error::IoFailure {
                path: entry.path().to_path_buf(),
                source,
            })?;
        let links = extract_links(&contents, &name);
        tracing::trace!(page = %name, links = links.len(), "parsed page");
        corpus.insert(name, links);
    }

    let pages: Links<String> = corpus.keys().cloned().collect();
    for links in corpus.values_mut() {
        links.retain(|link| pages.contains(link));
    }
    tracing::debug!(directory = %directory.display(), pages = corpus.len(), "crawled corpus");
    Ok(corpus)
}

fn extract_links(contents: &str, page: &str) -> Links<String> {
    HREF_RE
        .captures_iter(contents)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|link| *link != page)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_pages(dir: &TempDir, pages: &[(&str, &str)]) {
        for (name, body) in pages {
            fs::write(dir.path().join(name), body).unwrap();
        }
    }

    #[test]
    fn extracts_hrefs() {
        let html = r#"<html><body>
            <a href="2.html">two</a>
            <a class="x" href="3.html">three</a>
            <a   href="2.html">again</a>
            <link href="style.css">
            <a name="anchor">no link</a>
        </body></html>"#;
        let links = extract_links(html, "1.html");
        let mut links: Vec<_> = links.into_iter().collect();
        links.sort();
        assert_eq!(links, ["2.html", "3.html"]);
    }

    #[test]
    fn self_links_are_dropped() {
        let links = extract_links(r#"<a href="1.html">me</a><a href="2.html">you</a>"#, "1.html");
        assert_eq!(links.len(), 1);
        assert!(links.contains("2.html"));
    }

    #[test]
    fn crawl_directory() {
        let dir = TempDir::new().unwrap();
        write_pages(
            &dir,
            &[
                ("1.html", r#"<a href="2.html">2</a> <a href="https://example.com">x</a>"#),
                ("2.html", r#"<a href="1.html">1</a><a href="3.html">3</a><a href="2.html">2</a>"#),
                ("3.html", "<p>no links</p>"),
                ("notes.txt", r#"<a href="1.html">1</a>"#),
            ],
        );
        fs::create_dir(dir.path().join("sub.html")).unwrap();

        let corpus = crawl(dir.path()).unwrap();
        assert_eq!(corpus.len(), 3);
        let links = |page: &str| {
            let mut xs: Vec<_> = corpus[page].iter().cloned().collect();
            xs.sort();
            xs
        };
        assert_eq!(links("1.html"), ["2.html"]);
        assert_eq!(links("2.html"), ["1.html", "3.html"]);
        assert!(links("3.html").is_empty());
        validate(&corpus).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_skipped() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let dir = TempDir::new().unwrap();
        write_pages(&dir, &[("1.html", "<p>one</p>")]);
        for name in [&b"\xff.html"[..], &b"\xfe.html"[..]] {
            fs::write(dir.path().join(OsStr::from_bytes(name)), "<p>lossy</p>").unwrap();
        }

        let corpus = crawl(dir.path()).unwrap();
        assert_eq!(corpus.len(), 1, "{corpus:?}");
        assert!(corpus.contains_key("1.html"));
    }

    #[test]
    fn missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = crawl(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::WalkDir(_)), "{err}");
    }

    #[test]
    fn empty_directory() {
        let dir = TempDir::new().unwrap();
        let corpus = crawl(dir.path()).unwrap();
        assert!(corpus.is_empty());
    }
}
