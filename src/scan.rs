//! Reading documents and counting the keywords in each one.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{LseErrorKind, LseResult};
use crate::keyword::{normalize, Keyword, NoiseWords};
use crate::posting::Occurrence;

/// Keyword counts for a single document.
pub type DocumentKeywords = HashMap<Keyword, Occurrence>;

/// Somewhere documents can be read from, by identifier.
///
/// Every call re-reads the document from the start.
pub trait DocumentSource {
    /// Load the full text of `document`.
    fn read_document(&self, document: &str) -> io::Result<String>;
}

/// Documents are files; the identifier is the path, relative to the
/// working directory or absolute.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so they can only
/// spoil the token they appear in.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl DocumentSource for FileSystem {
    fn read_document(&self, document: &str) -> io::Result<String> {
        let bytes = fs::read(document)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Load the list of documents to index: whitespace-separated identifiers,
/// in processing order.
pub fn read_document_list<P: AsRef<Path>>(path: P) -> LseResult<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| {
        LseErrorKind::DocumentListUnavailable {
            path: path.display().to_string(),
            source,
        }
    })?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

/// Count the keywords among `tokens`, all of which belong to `document`.
pub fn scan<'t, I>(document: &str, tokens: I, noise: &NoiseWords) -> DocumentKeywords
where
    I: IntoIterator<Item = &'t str>,
{
    let mut keywords = DocumentKeywords::new();
    for token in tokens {
        if let Some(keyword) = normalize(token, noise) {
            keywords
                .entry(keyword)
                .or_insert_with(|| Occurrence::new(document, 0))
                .frequency += 1;
        }
    }
    keywords
}

/// Read `document` from `source` and count its keywords.
pub fn scan_document<S>(source: &S, document: &str, noise: &NoiseWords) -> LseResult<DocumentKeywords>
where
    S: DocumentSource + ?Sized,
{
    let text = source.read_document(document).map_err(|source| {
        LseErrorKind::DocumentUnavailable {
            document: document.to_string(),
            source,
        }
    })?;

    let mut tokens = 0_usize;
    let keywords = scan(document, text.split_whitespace().inspect(|_| tokens += 1), noise);
    debug!(document, tokens, keywords = keywords.len(), "scanned document");
    Ok(keywords)
}
