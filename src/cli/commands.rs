use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::conditions;
use crate::escape;
use crate::logger;
use crate::matcher::WordMatcher;
use crate::value::{self, Value};

use super::exit_codes;

#[derive(Parser)]
#[command(name = "condex")]
#[command(about = "A condition-expression engine with an inspect-format value codec")]
#[command(version)]
pub struct Cli {
    /// Show debug output (solver intermediate forms, match scores)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress normal output; rely on the exit code
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a condition expression, printing true or false
    ///
    /// Exit code 0 when the condition holds, 1 when it does not
    /// (including any malformed input, which fails closed).
    Eval {
        /// Condition text, e.g. '5 > 3 && "a" == "a"'
        expr: String,
    },

    /// Convert JSON to canonical inspect text
    Inspect {
        /// JSON value
        json: String,
    },

    /// Convert canonical inspect text back to JSON
    Parse {
        /// Inspect-format text
        text: String,
    },

    /// Look up a property path inside a JSON value
    Get {
        /// JSON value to resolve against
        json: String,

        /// Property path, e.g. 'user.tags[0]'
        path: String,

        /// Print the raw value as JSON instead of inspect text
        #[arg(long)]
        raw: bool,
    },

    /// Escape reserved symbols for an outer template context
    Escape {
        /// Text to escape
        text: String,
    },

    /// Reverse the symbol escaping
    Unescape {
        /// Text to unescape
        text: String,
    },

    /// Suggest the closest candidate word for an input
    Suggest {
        /// Word to match
        word: String,

        /// Candidate words
        #[arg(required = true)]
        candidates: Vec<String>,
    },
}

/// run a parsed CLI invocation, returning the process exit code
pub fn execute(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Eval { ref expr } => run_eval(expr, &cli),
        Commands::Inspect { ref json } => run_inspect(json, &cli),
        Commands::Parse { ref text } => run_parse(text, &cli),
        Commands::Get {
            ref json,
            ref path,
            raw,
        } => run_get(json, path, raw, &cli),
        Commands::Escape { ref text } => {
            emit(&cli, &escape::escape(text));
            Ok(exit_codes::SUCCESS)
        }
        Commands::Unescape { ref text } => {
            emit(&cli, &escape::unescape(text));
            Ok(exit_codes::SUCCESS)
        }
        Commands::Suggest {
            ref word,
            ref candidates,
        } => run_suggest(word, candidates, &cli),
    }
}

fn run_eval(expr: &str, cli: &Cli) -> Result<i32> {
    if cli.verbose {
        match conditions::solve(expr) {
            Ok(reduced) => logger::debug(&format!("reduced form: {}", reduced)),
            Err(e) => logger::debug(&format!("solver failed: {}", e)),
        }
    }

    let result = conditions::evaluate(expr);
    emit(cli, if result { "true" } else { "false" });

    Ok(if result {
        exit_codes::SUCCESS
    } else {
        exit_codes::CONDITION_FALSE
    })
}

fn run_inspect(json: &str, cli: &Cli) -> Result<i32> {
    let parsed: serde_json::Value =
        serde_json::from_str(json).context("input is not valid JSON")?;
    emit(cli, &value::inspect(&Value::from(parsed)));
    Ok(exit_codes::SUCCESS)
}

fn run_parse(text: &str, cli: &Cli) -> Result<i32> {
    let parsed = value::uninspect(text);
    let json = serde_json::Value::from(&parsed);
    emit(cli, &serde_json::to_string(&json).context("rendering JSON")?);
    Ok(exit_codes::SUCCESS)
}

fn run_get(json: &str, path: &str, raw: bool, cli: &Cli) -> Result<i32> {
    let parsed: serde_json::Value =
        serde_json::from_str(json).context("input is not valid JSON")?;
    let root = Value::from(parsed);

    if raw {
        let found = value::lookup(&root, path);
        let json = serde_json::Value::from(&found);
        emit(cli, &serde_json::to_string(&json).context("rendering JSON")?);
    } else {
        emit(cli, &value::lookup_serialized(&root, path));
    }
    Ok(exit_codes::SUCCESS)
}

fn run_suggest(word: &str, candidates: &[String], cli: &Cli) -> Result<i32> {
    let matcher = WordMatcher::new(candidates.iter().cloned());

    if cli.verbose {
        for (candidate, score) in matcher.scores(word) {
            logger::debug(&format!("{}: {:.3}", candidate, score));
        }
    }

    match matcher.search(word) {
        Some(best) => {
            emit(cli, best);
            Ok(exit_codes::SUCCESS)
        }
        None => Ok(exit_codes::CONDITION_FALSE),
    }
}

fn emit(cli: &Cli, line: &str) {
    if !cli.quiet {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_eval_exit_codes() {
        let cli = Cli::parse_from(["condex", "--quiet", "eval", "5 > 3"]);
        assert_eq!(execute(cli).unwrap(), exit_codes::SUCCESS);

        let cli = Cli::parse_from(["condex", "--quiet", "eval", "3 > 5"]);
        assert_eq!(execute(cli).unwrap(), exit_codes::CONDITION_FALSE);

        // malformed input fails closed rather than erroring
        let cli = Cli::parse_from(["condex", "--quiet", "eval", "garbage ("]);
        assert_eq!(execute(cli).unwrap(), exit_codes::CONDITION_FALSE);
    }

    #[test]
    fn test_inspect_rejects_bad_json() {
        let cli = Cli::parse_from(["condex", "--quiet", "inspect", "{nope"]);
        assert!(execute(cli).is_err());
    }

    #[test]
    fn test_suggest_exit_codes() {
        let cli = Cli::parse_from(["condex", "--quiet", "suggest", "fcus", "focus", "resize"]);
        assert_eq!(execute(cli).unwrap(), exit_codes::SUCCESS);
    }
}
