use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io::{self, Write};
use std::path::PathBuf;

use dml_cli::commands::{
    load_table, run_describe, run_head, run_sample, run_scale, run_tail, ScaleMode,
};
use dml_cli::config::{load_run_config, RunConfig};

fn data_arg() -> Arg {
    Arg::new("data")
        .help("Path to the input table (*.csv or *.tsv)")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("Path to a JSON run configuration file")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn no_headers_arg() -> Arg {
    Arg::new("no_headers")
        .long("no-headers")
        .help("Treat the first line as data instead of a header row.")
        .action(ArgAction::SetTrue)
}

fn lines_arg() -> Arg {
    Arg::new("lines")
        .short('n')
        .long("lines")
        .help("Number of rows to print")
        .default_value("5")
        .value_parser(clap::value_parser!(usize))
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DML_LOG", "error,dml=info"))
        .init();

    let matches = Command::new("dml")
        .version(clap::crate_version!())
        .author("Arda T. Kersu")
        .about("Descriptive statistics and rescaling for CSV/TSV tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("head")
                .about("Print the first rows of a table")
                .arg(data_arg())
                .arg(lines_arg())
                .arg(config_arg())
                .arg(no_headers_arg()),
        )
        .subcommand(
            Command::new("tail")
                .about("Print the last rows of a table, last row first")
                .arg(data_arg())
                .arg(lines_arg())
                .arg(config_arg())
                .arg(no_headers_arg()),
        )
        .subcommand(
            Command::new("sample")
                .about("Draw random cell values from a table (with replacement)")
                .arg(data_arg())
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .help("Number of values to draw")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for a reproducible stream. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(config_arg())
                .arg(no_headers_arg()),
        )
        .subcommand(
            Command::new("describe")
                .about("Print mean, median, standard deviation and range per column")
                .arg(data_arg())
                .arg(
                    Arg::new("column")
                        .long("column")
                        .help("Only describe this zero-based column")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(config_arg())
                .arg(no_headers_arg()),
        )
        .subcommand(
            Command::new("scale")
                .about("Rescale one column from its own min/max range")
                .arg(data_arg())
                .arg(
                    Arg::new("column")
                        .long("column")
                        .help("Zero-based column to rescale")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target range LOW HIGH")
                        .num_args(2)
                        .value_names(["LOW", "HIGH"])
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f32))
                        .conflicts_with("unity"),
                )
                .arg(
                    Arg::new("unity")
                        .long("unity")
                        .help("Divide by the column's range instead of mapping onto a target range.")
                        .action(ArgAction::SetTrue),
                )
                .arg(config_arg())
                .arg(no_headers_arg()),
        )
        .get_matches();

    let (name, sub_m) = matches
        .subcommand()
        .expect("Subcommand is required by CLI configuration");

    match dispatch(name, sub_m) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("{} failed: {:#}", name, e);
            std::process::exit(1)
        }
    }
}

fn dispatch(name: &str, matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;
    let data_path: &PathBuf = matches
        .get_one("data")
        .expect("data is a required argument");
    let data = load_table(data_path, &config)?;

    match name {
        "head" => return run_head(&data, lines(matches), &config),
        "tail" => return run_tail(&data, lines(matches), &config),
        _ => {}
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match name {
        "sample" => {
            let count = *matches
                .get_one::<usize>("count")
                .expect("count is a required argument");
            run_sample(&mut out, &data, count, &config)?
        }
        "describe" => run_describe(&mut out, &data, matches.get_one::<usize>("column").copied())?,
        "scale" => {
            let column = *matches
                .get_one::<usize>("column")
                .expect("column is a required argument");
            run_scale(&mut out, &data, column, scale_mode(matches))?
        }
        _ => unreachable!("Unknown subcommand {}", name),
    }

    out.flush()?;
    Ok(())
}

/// Load `--config` when given, then apply flag overrides.
fn resolve_config(matches: &ArgMatches) -> Result<RunConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[DML] Using config: {:?}", path);
            load_run_config(path)?
        }
        None => RunConfig::default(),
    };

    if matches.get_flag("no_headers") {
        config.reader.has_headers = false;
    }
    if let Ok(Some(seed)) = matches.try_get_one::<u64>("seed") {
        config.sampling.seed = Some(*seed);
    }
    Ok(config)
}

fn lines(matches: &ArgMatches) -> usize {
    *matches
        .get_one::<usize>("lines")
        .expect("lines has a default value")
}

fn scale_mode(matches: &ArgMatches) -> ScaleMode {
    if matches.get_flag("unity") {
        return ScaleMode::Unity;
    }
    match matches.get_many::<f32>("to") {
        Some(mut bounds) => {
            let low = *bounds.next().expect("--to takes two values");
            let high = *bounds.next().expect("--to takes two values");
            ScaleMode::Range { low, high }
        }
        None => ScaleMode::Range { low: 0.0, high: 1.0 },
    }
}
