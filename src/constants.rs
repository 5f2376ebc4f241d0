/// Constants used throughout the application
///
/// This module centralises the defaults and help texts so the library and
/// the `hound` binary agree on them.

/// Default recursion bound below the search root
///
/// Large enough to be effectively unbounded for realistic trees.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "filehound";

/// Application name used for identification
///
/// Used to locate the platform configuration directory.
pub const APPLICATION: &str = "hound";

/// File name of the default search profile inside the configuration directory
pub const DEFAULT_CONFIG_FILE: &str = "hound.yaml";

/// Help text for the positional path argument
pub const PATH_HELP: &str = "Directory to search (defaults to the current directory)";

/// Help text for the depth option
pub const DEPTH_HELP: &str = "Maximum recursion depth; 0 searches only the directory itself";

/// Help text for the extension option
pub const EXT_HELP: &str = "Match files with this extension (repeatable, comma separated)";

/// Help text for the size option
pub const SIZE_HELP: &str = "Match files of exactly this many bytes";

/// Help text for the empty option
pub const EMPTY_HELP: &str = "Match empty files";

/// Help text for the glob option
pub const GLOB_HELP: &str = "Match file names against a shell glob (repeatable)";

/// Help text for the regex option
pub const REGEX_HELP: &str = "Match full paths against a regular expression (repeatable)";

/// Help text for the config option
pub const CONFIG_HELP: &str = "Read the search profile from a specific YAML file";

/// Help text for the no-config option
pub const NO_CONFIG_HELP: &str = "Ignore the default search profile";

/// Help text for the print0 option
pub const PRINT0_HELP: &str = "Separate results with NUL instead of newline";

/// Help text for the count option
pub const COUNT_HELP: &str = "Print only the number of matching files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file option
pub const LOG_FILE_HELP: &str = "Also write log output to this file";
