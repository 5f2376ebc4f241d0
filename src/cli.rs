use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version, value_parser,
};
use log::debug;

use crate::config::{SearchConfig, default_config_path, load_config};
use crate::constants::{
    CONFIG_HELP, COUNT_HELP, DEPTH_HELP, EMPTY_HELP, EXT_HELP, GLOB_HELP, LOG_FILE_HELP,
    NO_CONFIG_HELP, PATH_HELP, PRINT0_HELP, REGEX_HELP, SIZE_HELP, VERBOSE_HELP,
};
use crate::errors::Result;
use crate::logging::LogLevel;
use crate::utils::expand_path;

/// How matching files are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One path per line
    Lines,
    /// Paths terminated by NUL
    Nul,
    /// Only the number of matches
    Count,
}

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `path`: Directory to search
/// - `depth`, `ext`, `size`, `empty`, `glob`, `regex`: search predicates
/// - `config`, `no_config`: search profile selection
/// - `print0`, `count`: output format
/// - `verbose`, `log_file`: logging
pub fn build_command() -> Command {
    let arg_path = Arg::new("path").value_name("PATH").help(PATH_HELP);

    let arg_depth = Arg::new("depth")
        .short('d')
        .long("depth")
        .value_name("N")
        .help(DEPTH_HELP)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(usize));

    let arg_ext = Arg::new("ext")
        .short('e')
        .long("ext")
        .value_name("EXT")
        .help(EXT_HELP)
        .value_delimiter(',')
        .action(ArgAction::Append);

    let arg_size = Arg::new("size")
        .short('s')
        .long("size")
        .value_name("BYTES")
        .help(SIZE_HELP)
        .value_parser(value_parser!(u64));

    let arg_empty = Arg::new("empty")
        .short('E')
        .long("empty")
        .help(EMPTY_HELP)
        .action(ArgAction::SetTrue);

    let arg_glob = Arg::new("glob")
        .short('g')
        .long("glob")
        .value_name("PATTERN")
        .help(GLOB_HELP)
        .action(ArgAction::Append);

    let arg_regex = Arg::new("regex")
        .short('r')
        .long("regex")
        .value_name("PATTERN")
        .help(REGEX_HELP)
        .action(ArgAction::Append);

    // define arg for reading from a specific profile
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP)
        .conflicts_with("no_config");

    let arg_no_config = Arg::new("no_config")
        .short('N')
        .long("no-config")
        .help(NO_CONFIG_HELP)
        .action(ArgAction::SetTrue);

    let arg_print0 = Arg::new("print0")
        .long("print0")
        .help(PRINT0_HELP)
        .action(ArgAction::SetTrue);

    let arg_count = Arg::new("count")
        .long("count")
        .help(COUNT_HELP)
        .action(ArgAction::SetTrue)
        .conflicts_with("print0");

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_path)
        .arg(arg_depth)
        .arg(arg_ext)
        .arg(arg_size)
        .arg(arg_empty)
        .arg(arg_glob)
        .arg(arg_regex)
        .arg(arg_config)
        .arg(arg_no_config)
        .arg(arg_print0)
        .arg(arg_count)
        .arg(arg_verbose)
        .arg(arg_log_file)
}

/// Parses the process arguments, exiting with usage help on error
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of `-v` flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

/// Gets the optional log file, with `~` expanded
pub fn get_log_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<String>("log_file")
        .map(|path| expand_path(path))
}

/// Gets the requested output format
pub fn get_output_mode(matches: &ArgMatches) -> OutputMode {
    if matches.get_flag("count") {
        OutputMode::Count
    } else if matches.get_flag("print0") {
        OutputMode::Nul
    } else {
        OutputMode::Lines
    }
}

/// Builds a search profile from the predicate flags alone
pub fn search_config_from_matches(matches: &ArgMatches) -> SearchConfig {
    let strings = |id: &str| -> Vec<String> {
        matches
            .get_many::<String>(id)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    };

    SearchConfig {
        root: matches
            .get_one::<String>("path")
            .map(|path| expand_path(path)),
        depth: matches.get_one::<usize>("depth").copied(),
        ext: strings("ext"),
        size: matches.get_one::<u64>("size").copied(),
        empty: matches.get_flag("empty"),
        glob: strings("glob"),
        regex: strings("regex"),
    }
}

/// Resolves the effective search profile
///
/// The profile named by `--config` is loaded, otherwise the default profile
/// if it exists and `--no-config` was not given. Command-line flags are then
/// merged on top.
///
/// # Errors
/// Returns an error if a profile file cannot be read or parsed
pub fn resolve_search_config(matches: &ArgMatches) -> Result<SearchConfig> {
    let base = match matches.get_one::<String>("config") {
        Some(path) => load_config(&expand_path(path))?,
        None if matches.get_flag("no_config") => SearchConfig::default(),
        None => match default_config_path() {
            Some(path) if path.is_file() => load_config(&path)?,
            _ => {
                debug!("No default search profile found");
                SearchConfig::default()
            }
        },
    };

    Ok(base.merge(search_config_from_matches(matches)))
}
