use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use log::debug;
use pcglns_verifier::{check, convert, load_tour, precedence};
use std::{fs, path::PathBuf};

fn cli() -> Command {
    Command::new("pcglns-verifier")
        .about("Checks tours against PCGLNS / SOP instances")
        .arg_required_else_help(true)
        .arg(
            arg!(-v --verbose "Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("check")
                .about("Computes the length of a tour")
                .arg(
                    arg!(<INSTANCE> "Path to a .pcglns instance file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<TOUR> "Tour as a json array of 1-based vertex ids, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--json "Print the result as json").action(ArgAction::SetTrue))
                .arg(arg!(--edges "Also print the cost of every edge").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("convert")
                .about("Normalizes the weight section of an instance")
                .arg(
                    arg!(<INSTANCE> "Path to an instance file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--sop "Drop the header row following EDGE_WEIGHT_SECTION")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the converted instance is written to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("precedence")
                .about("Prints the precedence orderings of a SOP instance as json")
                .arg(
                    arg!(<INSTANCE> "Path to an instance file")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    let default_filter = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = match matches.subcommand() {
        Some(("check", sub_m)) => run_check(sub_m),
        Some(("convert", sub_m)) => run_convert(sub_m),
        Some(("precedence", sub_m)) => run_precedence(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn instance_arg(sub_m: &ArgMatches) -> Result<&PathBuf> {
    sub_m
        .get_one::<PathBuf>("INSTANCE")
        .ok_or_else(|| anyhow!("Missing instance path"))
}

fn run_check(sub_m: &ArgMatches) -> Result<()> {
    let instance = instance_arg(sub_m)?;
    let tour = sub_m
        .get_one::<String>("TOUR")
        .ok_or_else(|| anyhow!("Missing tour"))?;
    let tour = load_tour(tour)?;
    debug!("Checking tour of {} vertices against {}", tour.len(), instance.display());

    let report = check(instance, tour, sub_m.get_flag("edges"))?;
    if sub_m.get_flag("json") {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

fn run_convert(sub_m: &ArgMatches) -> Result<()> {
    let instance = instance_arg(sub_m)?;
    let text = convert(instance, sub_m.get_flag("sop"))?;
    match sub_m.get_one::<PathBuf>("output") {
        Some(output) => fs::write(output, text)
            .with_context(|| format!("Failed to write {}", output.display()))?,
        None => println!("{}", text),
    }
    Ok(())
}

fn run_precedence(sub_m: &ArgMatches) -> Result<()> {
    let orderings = precedence(instance_arg(sub_m)?)?;
    println!("{}", serde_json::to_string(&orderings)?);
    Ok(())
}
