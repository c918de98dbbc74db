use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::config::{CorpusConfig, TrailingBlank};
use crate::corpus::CorpusBuilder;
use crate::data::Document;
use crate::heuristics::{estimate_corpus_capacity, format_u128_with_commas};
use crate::listing::list_documents;
use crate::metrics::yield_skew;

#[derive(Debug, Parser)]
#[command(
    name = "build_corpus",
    disable_help_subcommand = true,
    about = "Build a sentence-pair corpus from a document directory",
    long_about = "Sample two-line windows from every document in a directory and write the \
                  aggregate as a JSON Lines corpus plus a manifest."
)]
struct BuildCorpusCli {
    #[arg(
        long,
        value_name = "PATH",
        help = "Directory of one-sentence-per-line documents"
    )]
    dir: PathBuf,
    #[arg(long, value_name = "PATH", help = "Output JSON Lines corpus path")]
    out: PathBuf,
    #[arg(
        long = "samples-per-doc",
        default_value_t = 1,
        value_parser = parse_positive_usize,
        help = "Windows to sample from each document"
    )]
    samples_per_document: usize,
    #[arg(long, default_value_t = 42, help = "Deterministic corpus seed")]
    seed: u64,
    #[arg(
        long = "ignore",
        value_name = "NAME",
        help = "File name to exclude from the listing, repeat as needed"
    )]
    ignore_files: Vec<String>,
    #[arg(
        long = "keep-trailing-blank",
        help = "Treat the empty segment after a final newline as a line slot"
    )]
    keep_trailing_blank: bool,
    #[arg(long, help = "Sample documents one at a time instead of in parallel")]
    sequential: bool,
}

#[derive(Debug, Parser)]
#[command(
    name = "estimate_capacity",
    disable_help_subcommand = true,
    about = "Estimate candidate-window capacity for a document directory",
    long_about = "Count candidate two-line windows per document and report the bounded yield a \
                  sampling run would produce, without sampling anything."
)]
struct EstimateCapacityCli {
    #[arg(
        long,
        value_name = "PATH",
        help = "Directory of one-sentence-per-line documents"
    )]
    dir: PathBuf,
    #[arg(
        long = "samples-per-doc",
        default_value_t = 1,
        value_parser = parse_positive_usize,
        help = "Windows that would be requested from each document"
    )]
    samples_per_document: usize,
    #[arg(
        long = "ignore",
        value_name = "NAME",
        help = "File name to exclude from the listing, repeat as needed"
    )]
    ignore_files: Vec<String>,
    #[arg(
        long = "keep-trailing-blank",
        help = "Treat the empty segment after a final newline as a line slot"
    )]
    keep_trailing_blank: bool,
}

/// Run the corpus-build CLI against an argument iterator (exclusive of
/// the program name).
pub fn run_build_corpus<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let Some(cli) = parse_cli::<BuildCorpusCli, _>(
        std::iter::once("build_corpus".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let config = CorpusConfig {
        seed: cli.seed,
        samples_per_document: cli.samples_per_document,
        ignore_files: cli.ignore_files,
        trailing: trailing_from_flag(cli.keep_trailing_blank),
        parallel: !cli.sequential,
    };
    let summary = CorpusBuilder::new(config).build(&cli.dir)?;
    let manifest_path = summary.write(&cli.out)?;

    println!("=== corpus summary ===");
    println!("documents : {}", summary.manifest.documents);
    println!("records   : {}", summary.manifest.records);
    println!("corpus    : {}", cli.out.display());
    println!("manifest  : {}", manifest_path.display());
    if let Some(skew) = yield_skew(&summary.yield_counts()) {
        println!("yield     : min {} / mean {:.2} / max {}", skew.min, skew.mean, skew.max);
        println!("max share : {:.4}", skew.max_share);
    }
    Ok(())
}

/// Run the capacity-estimate CLI against an argument iterator
/// (exclusive of the program name).
pub fn run_estimate_capacity<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let Some(cli) = parse_cli::<EstimateCapacityCli, _>(
        std::iter::once("estimate_capacity".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let trailing = trailing_from_flag(cli.keep_trailing_blank);
    let names = list_documents(&cli.dir, &cli.ignore_files)?;
    let mut line_counts = Vec::with_capacity(names.len());
    for name in &names {
        let document = Document::read(&cli.dir.join(name), trailing)?;
        line_counts.push(document.line_count());
    }
    let totals = estimate_corpus_capacity(&line_counts, cli.samples_per_document);

    println!("=== capacity estimate ===");
    println!("documents         : {}", totals.documents);
    println!(
        "candidate windows : {}",
        format_u128_with_commas(totals.candidate_windows)
    );
    println!(
        "bounded yield     : {}",
        format_u128_with_commas(totals.bounded_yield)
    );
    Ok(())
}

fn trailing_from_flag(keep_trailing_blank: bool) -> TrailingBlank {
    if keep_trailing_blank {
        TrailingBlank::Keep
    } else {
        TrailingBlank::Exclude
    }
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .parse::<usize>()
        .map_err(|_| format!("Could not parse '{}' as a positive integer", raw))?;
    if parsed == 0 {
        return Err("value must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
