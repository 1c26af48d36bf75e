//! Link graphs from a directory of HTML pages.

use crate::{Error, LinkGraph, Result};
use regex::Regex;
use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
};

const LINK_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

/// Reads every `*.html` file directly under `dir` into a [`LinkGraph`] keyed
/// by file name.
///
/// A page's links are the `href` targets of its anchors that name another
/// page of the same directory. Links to itself or to anything outside the
/// directory are dropped.
pub fn build_graph(dir: impl AsRef<Path>) -> Result<LinkGraph<String>> {
    let dir = dir.as_ref();
    let pattern = Regex::new(LINK_PATTERN)?;
    let io_err = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::debug!(?path, "skipping non-utf8 file name");
            continue;
        };
        if !name.ends_with(".html") || !path.is_file() {
            tracing::debug!(?path, "skipping non-page entry");
            continue;
        }
        let bytes = fs::read(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let contents = String::from_utf8_lossy(&bytes);
        let links = pattern
            .captures_iter(&contents)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_owned())
            .filter(|link| *link != name)
            .collect();
        pages.insert(name, links);
    }

    let names: BTreeSet<String> = pages.keys().cloned().collect();
    for links in pages.values_mut() {
        links.retain(|link| names.contains(link));
    }
    tracing::debug!(?dir, pages = pages.len(), "corpus loaded");
    LinkGraph::from_links(pages)
}
