use clap::Parser;

use condex::cli::{self, Cli};
use condex::logger;

fn main() {
    let cli = Cli::parse();

    match cli::run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            logger::error(&format!("{:#}", e));
            std::process::exit(cli::INVALID_INPUT);
        }
    }
}
