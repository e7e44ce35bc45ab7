//! `littlesearch` indexes a list of text files and searches them for
//! either of two keywords.
//!
//! Most of the actual work is done by the library. This is the `main`
//! function that handles command-line arguments and logging.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use argparse::{ArgumentParser, List, Store, StoreTrue};
use littlesearch::{run, Options, DEFAULT_LIMIT};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut docs_file = String::new();
    let mut noise_words_file = String::new();
    let mut keywords: Vec<String> = vec![];
    let mut limit = DEFAULT_LIMIT;
    let mut stats = false;

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Index text files and search them for either of two keywords.");
        _ = ap.refer(&mut limit).add_option(
            &["-k", "--limit"],
            Store,
            "Report at most this many documents (default 5).",
        );
        _ = ap.refer(&mut stats).add_option(
            &["-s", "--stats"],
            StoreTrue,
            "Print every keyword with the number of documents containing it.",
        );
        _ = ap
            .refer(&mut docs_file)
            .add_argument(
                "docs",
                Store,
                "File naming the documents to index, separated by whitespace.",
            )
            .required();
        _ = ap
            .refer(&mut noise_words_file)
            .add_argument(
                "noise-words",
                Store,
                "File listing the noise words to skip, separated by whitespace.",
            )
            .required();
        _ = ap.refer(&mut keywords).add_argument(
            "keywords",
            List,
            "Two keywords to search for. Without them, only build the index.",
        );
        ap.parse_args_or_exit();
    }

    let keywords = match keywords.as_slice() {
        [] => None,
        [kw1, kw2] => Some((kw1.clone(), kw2.clone())),
        _ => {
            eprintln!("error: expected exactly two keywords, got {}", keywords.len());
            return ExitCode::from(2);
        }
    };

    let options = Options {
        docs_file: PathBuf::from(docs_file),
        noise_words_file: PathBuf::from(noise_words_file),
        keywords,
        limit,
        stats,
    };

    match run(&options, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
