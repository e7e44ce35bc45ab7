//! `littlesearch` builds a keyword index over a small set of text files and
//! answers two-keyword "or" queries, ranked by how often each keyword
//! appears in each document.
//!
//! The work is split across a few modules:
//!
//! *   `keyword` decides which tokens are keywords;
//! *   `scan` reads one document and counts its keywords;
//! *   `posting` keeps each keyword's occurrences sorted by frequency;
//! *   `index` merges documents, one at a time, into a [`BuiltIndex`];
//! *   `query` ranks the documents matching a pair of keywords.
//!
//! [`run`] puts the pieces together for the command-line tool.

pub mod error;
pub mod index;
pub mod keyword;
pub mod posting;
pub mod query;
pub mod scan;

use std::io::Write;
use std::path::PathBuf;

pub use crate::error::{LseError, LseErrorKind, LseResult};
pub use crate::index::{build, make_index, BuiltIndex, IndexBuilder};
pub use crate::keyword::{normalize, Keyword, NoiseWords};
pub use crate::posting::{insert_last, Occurrence, PostingList};
pub use crate::query::DEFAULT_LIMIT;
pub use crate::scan::{scan, DocumentKeywords, DocumentSource, FileSystem};

/// What the command-line tool was asked to do.
#[derive(Debug, Clone)]
pub struct Options {
    /// File listing the documents to index, whitespace-separated.
    pub docs_file: PathBuf,
    /// File listing the noise words, whitespace-separated.
    pub noise_words_file: PathBuf,
    /// The two keywords to search for, if any.
    pub keywords: Option<(String, String)>,
    /// Maximum number of documents to report.
    pub limit: usize,
    /// Report the size of every posting list after indexing.
    pub stats: bool,
}

/// Index the documents named in `options`, then either report on the
/// index or answer the query, writing the output to `out`.
pub fn run<W: Write>(options: &Options, out: &mut W) -> LseResult<()> {
    let index = make_index(&options.docs_file, &options.noise_words_file)?;

    if options.stats {
        let mut keywords: Vec<&str> = index.keywords().collect();
        keywords.sort_unstable();
        for keyword in keywords {
            let documents = index.posting_list(keyword).map_or(0, |list| list.len());
            writeln!(out, "{keyword}\t{documents}")?;
        }
    }

    match &options.keywords {
        None => writeln!(
            out,
            "indexed {} documents, {} keywords",
            index.document_count(),
            index.len()
        )?,
        Some((kw1, kw2)) => {
            let (kw1, kw2) = (kw1.to_lowercase(), kw2.to_lowercase());
            match index.top_k(&kw1, &kw2, options.limit) {
                None => writeln!(out, "no matches")?,
                Some(documents) => {
                    for document in documents {
                        writeln!(out, "{document}")?;
                    }
                }
            }
        }
    }
    Ok(())
}
