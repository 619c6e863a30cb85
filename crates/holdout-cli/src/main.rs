use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use holdout_cli::evaluate::input::EvaluateConfig;
use holdout_cli::evaluate::runner::evaluate_to_report;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("HOLDOUT_LOG", "error,holdout=info"))
        .init();

    let matches = Command::new("holdout")
        .version(clap::crate_version!())
        .about("Hold-out evaluation of a logistic regression classifier on tabular data")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("evaluate")
                .about("Split, standardize, fit and score; print accuracy and a confusion matrix")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON evaluation config (see `holdout config`)")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("data")
                        .short('d')
                        .long("data")
                        .help(
                            "CSV file with a header row to evaluate instead of the bundled \
                             iris dataset. Overrides the data file in the config.",
                        )
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("target")
                        .short('t')
                        .long("target")
                        .help("Name of the class label column [default: species]")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("seed")
                        .short('s')
                        .long("seed")
                        .help("Seed for the train/test shuffle")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("test_fraction")
                        .short('f')
                        .long("test-fraction")
                        .help("Fraction of rows held out for testing, in (0, 1)")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("max_iterations")
                        .short('m')
                        .long("max-iterations")
                        .help("Optimizer iteration budget for the classifier")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("stratify")
                        .long("stratify")
                        .help("Preserve class proportions in the train and test subsets")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("report")
                        .short('r')
                        .long("report")
                        .help("Append per-class precision, recall and F1 to the output")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("config").about("Print the default evaluation config as JSON"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("evaluate", sub_m)) => handle_evaluate(sub_m),
        Some(("config", _)) => {
            println!("{}", serde_json::to_string_pretty(&EvaluateConfig::default())?);
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_evaluate(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");

    let result = EvaluateConfig::from_arguments(config_path, matches)
        .and_then(|config| evaluate_to_report(&config));

    match result {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(e) => {
            log::error!("Evaluation failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
