//! # Paracorpus
//!
//! Builds a multi-target parallel corpus from bilingual sentence pair files,
//! and computes coverage, size and token metrics on it.
//!
//! ## Getting started
//!
//! ```sh
//! paracorpus 0.1.0
//! parallel corpus building tool.
//!
//! USAGE:
//!     paracorpus <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     build    Merge sentence pair files into a cleaned parallel corpus
//!     help     Prints this message or the help of the given subcommand(s)
//!     stats    Compute metrics of a built corpus
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=info`).

use itertools::Itertools;
use paracorpus::error::Error;
use paracorpus::io::writer::to_json_string;
use paracorpus::pipeline::{self, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Paracorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Paracorpus::Build(b) => {
            let p = pipeline::Build::new(b.src, b.dst, b.source_lang)
                .with_metrics_pre(b.metrics_pre)
                .with_metrics_post(b.metrics_post)
                .with_workers(b.workers)
                .with_tokenizer(b.tokenizer);
            let report = p.run()?;
            info!(
                "done: {} records kept out of {} (target languages: {})",
                report.records_kept,
                report.records_loaded,
                report.target_languages.iter().join(",")
            );
        }

        cli::Paracorpus::Stats(s) => {
            let print = s.dst.is_none();
            let p = pipeline::Stats::new(s.src)
                .with_dst(s.dst)
                .with_target_languages(s.target_langs)
                .with_workers(s.workers)
                .with_tokenizer(s.tokenizer);
            let metrics = p.run()?;
            if print {
                println!("{}", to_json_string(&metrics)?);
            }
        }
    };
    Ok(())
}
