use std::process;

use anyhow::Context;
use structopt::StructOpt;
use tracing::info;

use error::Error;
use opt::{Config, Opt};
use search::{Outcome, Search};

mod candidate;
mod charset;
mod counter;
mod error;
mod logger;
mod opt;
mod predicate;
mod search;

fn main() {
    let opt = Opt::from_args();
    logger::init_logging(opt.log_level());

    let config = match Config::try_from(opt) {
        Ok(config) => config,
        Err(e) => usage_error(&e),
    };

    match run(config) {
        Ok(outcome) => match outcome.found() {
            Some(candidate) => println!("Solution: {}", String::from_utf8_lossy(candidate)),
            None => println!("No solution found"),
        },
        Err(e) => match e.downcast_ref::<Error>() {
            Some(e) if e.is_config() => usage_error(e),
            _ => {
                eprintln!("Error: {:#}", e);
                process::exit(1);
            }
        },
    }
}

fn usage_error(e: &Error) -> ! {
    eprintln!("{}", e);
    let _ = Opt::clap().write_help(&mut std::io::stderr());
    eprintln!();
    process::exit(2);
}

fn run(mut config: Config) -> anyhow::Result<Outcome> {
    if config.dump_charset {
        println!("{}", config.charset);
    }

    let outcome = Search::new(&config.charset, config.max_len)
        .prefix(&config.prefix)
        .run(&mut config.predicate)
        .with_context(|| format!("search up to length {} aborted", config.max_len))?;

    info!(attempts = outcome.attempts(), "search finished");
    Ok(outcome)
}
