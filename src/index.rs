//! Building the keyword index, one document at a time.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{info, warn};

use crate::error::LseResult;
use crate::keyword::{Keyword, NoiseWords};
use crate::posting::PostingList;
use crate::scan::{read_document_list, scan_document, DocumentKeywords, DocumentSource, FileSystem};

/// An index under construction.
///
/// Documents are merged in one at a time. Once every document is in,
/// [`IndexBuilder::finish`] freezes the index into a [`BuiltIndex`], which is
/// the only thing that can be queried.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    noise_words: NoiseWords,
    map: HashMap<Keyword, PostingList>,
    merged: HashSet<String>,
    document_count: usize,
}

impl IndexBuilder {
    /// Start an empty index that skips `noise_words`.
    pub fn new(noise_words: NoiseWords) -> IndexBuilder {
        IndexBuilder {
            noise_words,
            map: HashMap::new(),
            merged: HashSet::new(),
            document_count: 0,
        }
    }

    /// The noise words this index skips.
    pub fn noise_words(&self) -> &NoiseWords {
        &self.noise_words
    }

    /// Fold one document's keyword counts into the index.
    ///
    /// Each occurrence is appended to its keyword's posting list and then
    /// moved into sorted position.
    ///
    /// A document is merged at most once. Returns `false`, leaving the index
    /// untouched, if this document's keywords are already in it.
    pub fn merge_keywords(&mut self, keywords: DocumentKeywords) -> bool {
        if let Some(document) = keywords.values().next().map(|o| o.document.clone()) {
            if self.merged.contains(&document) {
                warn!(document = %document, "document already indexed, skipping");
                return false;
            }
            self.merged.insert(document);
        }
        for (keyword, occurrence) in keywords {
            self.map.entry(keyword).or_default().insert(occurrence);
        }
        self.document_count += 1;
        true
    }

    /// Scan `document` from `source` and merge its keywords.
    ///
    /// If the document can't be read the error is returned and the index
    /// keeps whatever was merged before.
    pub fn add_document<S>(&mut self, source: &S, document: &str) -> LseResult<()>
    where
        S: DocumentSource + ?Sized,
    {
        if self.merged.contains(document) {
            warn!(document, "document already indexed, skipping");
            return Ok(());
        }
        let keywords = scan_document(source, document, &self.noise_words)?;
        if self.merge_keywords(keywords) {
            // Documents without keywords still count as merged.
            self.merged.insert(document.to_string());
        }
        Ok(())
    }

    /// Stop accepting documents.
    pub fn finish(self) -> BuiltIndex {
        info!(
            documents = self.document_count,
            keywords = self.map.len(),
            "index built"
        );
        BuiltIndex {
            noise_words: self.noise_words,
            map: self.map,
            document_count: self.document_count,
        }
    }
}

/// Index every document in `documents`, in order.
///
/// Stops at the first document that can't be read.
pub fn build<S, I>(source: &S, documents: I, noise_words: NoiseWords) -> LseResult<BuiltIndex>
where
    S: DocumentSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut builder = IndexBuilder::new(noise_words);
    for document in documents {
        builder.add_document(source, document.as_ref())?;
    }
    Ok(builder.finish())
}

/// Load the noise words in `noise_words_file`, then index every file named
/// in `docs_file`.
pub fn make_index<P, Q>(docs_file: P, noise_words_file: Q) -> LseResult<BuiltIndex>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let noise_words = NoiseWords::load(noise_words_file)?;
    let documents = read_document_list(docs_file)?;
    build(&FileSystem, &documents, noise_words)
}

/// A finished, read-only keyword index.
#[derive(Debug)]
pub struct BuiltIndex {
    noise_words: NoiseWords,
    map: HashMap<Keyword, PostingList>,
    document_count: usize,
}

impl BuiltIndex {
    /// The posting list for `keyword`, if any document contains it.
    pub fn posting_list(&self, keyword: &str) -> Option<&PostingList> {
        self.map.get(keyword)
    }

    /// Every keyword in the index, in no particular order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(String::as_str)
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if no document contained any keyword.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of documents that went into the index.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// The noise words the index skipped.
    pub fn noise_words(&self) -> &NoiseWords {
        &self.noise_words
    }
}
