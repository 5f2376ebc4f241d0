//! Recursive file discovery with composable predicates
//!
//! Build a [`Query`] with a root directory, an optional depth bound and any
//! number of predicates, then call [`Query::find`]. Predicates combine with
//! logical OR; a query without predicates returns every regular file.
//!
//! ```no_run
//! use filehound::Query;
//!
//! let empty_or_text = Query::new("./fixtures").empty().ext(["txt"]).find();
//! ```

pub use errors::*;
pub use query::{FilterFn, Predicate, Query};

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
mod errors;
pub mod logging;
pub mod query;
pub mod utils;

pub mod prelude {
    pub use crate::cli::{
        OutputMode, get_log_file, get_matches, get_output_mode, get_verbosity,
        resolve_search_config,
    };
    pub use crate::config::{SearchConfig, load_config};
    pub use crate::discovery::{EntryInfo, EntryKind, FileSystem, LocalFileSystem, Walker};
    pub use crate::errors::{Error, Result};
    pub use crate::errors::{
        config_parsing_error, file_operation_error, glob_pattern_error, pattern_matching_error,
    };
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::query::{Predicate, Query};
}
