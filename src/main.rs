//! Wordlist JSON - export a wordlist as a sorted JSON array
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordlist_json::cli::{Args, Command, RankArgs};
use wordlist_json::processor::{ConvertConfig, Converter};
use wordlist_json::report::{print_error, print_ranking, print_summary, report_line, scoring_progress};
use wordlist_json::solver::{load_word_lists, rank_guesses};
use wordlist_json::ConvertError;

fn main() {
    let args = Args::parse();

    // RUST_LOG still overrides the flag-derived level
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        if let Some(hint) = e.downcast_ref::<ConvertError>().and_then(ConvertError::hint) {
            print_error(hint);
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if let Some(Command::Rank(rank)) = &args.command {
        return run_rank(rank, args.quiet);
    }

    args.validate()?;

    let config = ConvertConfig::from_args(&args);
    let converter = Converter::new(config)?;
    let summary = converter.run()?;

    println!("{}", report_line(summary.words_written));

    if args.stats {
        print_summary(&summary, &converter.config().output);
    }

    Ok(())
}

fn run_rank(rank: &RankArgs, quiet: bool) -> anyhow::Result<()> {
    let (answers, guesses) = load_word_lists(&rank.answers, rank.guesses.as_deref())?;

    println!("Answers: {}", answers.len());
    println!("Guesses scored: {}", guesses.len());

    let pb = scoring_progress(guesses.len() as u64, quiet);
    let ranking = rank_guesses(&guesses, &answers, rank.top, |n| pb.set_position(n as u64));
    pb.finish_and_clear();

    if let Some(best) = &ranking.best {
        log::debug!("Best guess {} ({:.4} bits)", best.guess, best.score.entropy);
    }

    print_ranking(&ranking, rank.top);
    Ok(())
}
