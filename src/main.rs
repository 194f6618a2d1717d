use std::path::Path;
use std::process;

use log::{error, info};

use peptide_finder::proteomic::error::MatchError;
use peptide_finder::proteomic::tasks;
use peptide_finder::proteomic::tasks::localization::{self, LocalizationArguments};
use peptide_finder::proteomic::tasks::matching::{self, MatchingArguments};
use peptide_finder::proteomic::utility::config;
use peptide_finder::proteomic::utility::logger::simple_logger::SimpleLogger;
use peptide_finder::proteomic::utility::visit_counter::VisitCounter;

fn main() {
    config::load_env_file();
    let cli_args = tasks::build_cli().get_matches();
    if let Err(err) = init_logger(&cli_args) {
        eprintln!("ERROR: {}", err);
        process::exit(1);
    }
    if let Err(err) = run(&cli_args) {
        error!("{}", err);
        process::exit(1);
    }
}

fn init_logger(cli_args: &clap::ArgMatches) -> Result<(), MatchError> {
    let level = config::resolve_log_level(config::resolve(cli_args.value_of("LOG_LEVEL"), config::LOG_LEVEL_ENV))?;
    let log_file = config::resolve(cli_args.value_of("LOG_FILE"), config::LOG_FILE_ENV);
    return SimpleLogger::new(level, log_file.as_ref().map(|path| path.as_str()))?.init();
}

fn run(cli_args: &clap::ArgMatches) -> Result<(), MatchError> {
    if let Some(visit_file) = config::resolve(cli_args.value_of("VISIT_FILE"), config::VISIT_FILE_ENV) {
        let mut visit_counter = VisitCounter::load(Path::new(&visit_file))?;
        visit_counter.record_visit();
        visit_counter.persist()?;
        info!("visit #{}", visit_counter.get_count());
    }
    match cli_args.subcommand() {
        ("match", Some(match_args)) => {
            let matching_arguments = MatchingArguments::from_cli_args(match_args)?;
            let summary = matching::match_task(&matching_arguments)?;
            info!("{}", summary.to_string());
        },
        ("locate", Some(locate_args)) => {
            let localization_arguments = LocalizationArguments::from_cli_args(locate_args)?;
            let summary = localization::locate_task(&localization_arguments)?;
            info!("{}", summary.to_string());
        },
        _ => return Err(MatchError::InvalidArgument("unknown subcommand".to_owned()))
    }
    return Ok(());
}
