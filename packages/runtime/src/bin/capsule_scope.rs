/**
 * capsule-scope
 *
 * Scope a stylesheet to one component capsule from the command line.
 */
use anyhow::{bail, Context, Result};
use clap::{Arg, Command};
use std::fs;
use std::process;

use capsule_runtime::strategy::{scope_with, ScopeStrategy};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = Command::new("capsule-scope")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Component-scoped CSS encapsulation")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .help("Stylesheet to scope"),
        )
        .arg(
            Arg::new("scope-id")
                .short('s')
                .long("scope-id")
                .value_name("ID")
                .required(true)
                .help("Capsule scope identifier ([A-Za-z0-9_-], at most 100 chars)"),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .value_name("STRATEGY")
                .default_value("selector-patching")
                .help("selector-patching or nesting"),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .value_name("FILE")
                .help("Write the scoped stylesheet here instead of stdout"),
        )
        .get_matches();

    let strategy = match matches
        .get_one::<String>("strategy")
        .map(String::as_str)
        .unwrap_or("selector-patching")
    {
        "selector-patching" => ScopeStrategy::SelectorPatching,
        "nesting" => ScopeStrategy::Nesting,
        other => bail!("unknown strategy '{}'", other),
    };

    let input = matches
        .get_one::<String>("input")
        .context("--input is required")?;
    let scope_id = matches
        .get_one::<String>("scope-id")
        .context("--scope-id is required")?;

    let css = fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?;
    let scoped = scope_with(strategy, &css, scope_id)
        .with_context(|| format!("failed to scope {}", input))?;

    match matches.get_one::<String>("out") {
        Some(out) => {
            fs::write(out, scoped).with_context(|| format!("failed to write {}", out))?
        }
        None => print!("{}", scoped),
    }

    Ok(())
}
