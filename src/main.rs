use std::process;

use big_number_calc::{run, Config};
use clap::Parser;
use log::error;

fn main() {
    let config = Config::parse();
    let level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(&config) {
        error!("{}", err);
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
