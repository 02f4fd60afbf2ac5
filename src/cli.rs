//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use paracorpus::lang::TargetLanguages;
use paracorpus::tokenize::TokenizerKind;

#[derive(Debug, StructOpt)]
#[structopt(name = "paracorpus", about = "parallel corpus building tool.")]
/// Holds every command that is callable by the `paracorpus` command.
pub enum Paracorpus {
    #[structopt(about = "Merge sentence pair files into a cleaned parallel corpus")]
    Build(Build),
    #[structopt(about = "Compute metrics of a built corpus")]
    Stats(Stats),
}

/// Parse a comma-separated list of languages.
fn parse_langs(src: &str) -> TargetLanguages {
    src.split(',')
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, StructOpt)]
/// Build command and parameters.
///
/// ```sh
/// paracorpus-build 0.1.0
/// Merge sentence pair files into a cleaned parallel corpus
///
/// USAGE:
///     paracorpus build [OPTIONS] <src> <dst> --source-lang <source-lang>
///
/// ARGS:
///     <src>    folder containing {dataset}-{src}-{tgt}-{stage}.tsv files
///     <dst>    corpus JSON destination
/// ```
pub struct Build {
    #[structopt(
        parse(from_os_str),
        help = "folder containing {dataset}-{src}-{tgt}-{stage}.tsv files"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus JSON destination")]
    pub dst: PathBuf,
    #[structopt(short = "l", long = "source-lang", help = "source language")]
    pub source_lang: String,
    #[structopt(
        parse(from_os_str),
        long = "metrics-pre",
        help = "destination of metrics computed before cleaning"
    )]
    pub metrics_pre: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "metrics-post",
        help = "destination of metrics computed after cleaning"
    )]
    pub metrics_post: Option<PathBuf>,
    #[structopt(
        short = "w",
        long = "workers",
        help = "number of token counting workers. Default is the number of available cores."
    )]
    pub workers: Option<usize>,
    #[structopt(
        short = "t",
        long = "tokenizer",
        help = "unicode, whitespace or path to a tokenizer.json file",
        default_value = "unicode"
    )]
    pub tokenizer: TokenizerKind,
}

#[derive(Debug, StructOpt)]
/// Stats command and parameters.
pub struct Stats {
    #[structopt(parse(from_os_str), help = "corpus JSON file")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "o",
        long = "dst",
        help = "metrics JSON destination. Printed on stdout if absent."
    )]
    pub dst: Option<PathBuf>,
    #[structopt(
        long = "target-langs",
        help = "comma-separated required target languages. Default is every language found in the corpus.",
        parse(from_str = parse_langs)
    )]
    pub target_langs: Option<TargetLanguages>,
    #[structopt(
        short = "w",
        long = "workers",
        help = "number of token counting workers. Default is the number of available cores."
    )]
    pub workers: Option<usize>,
    #[structopt(
        short = "t",
        long = "tokenizer",
        help = "unicode, whitespace or path to a tokenizer.json file",
        default_value = "unicode"
    )]
    pub tokenizer: TokenizerKind,
}
