use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum EggbeaterError {
    #[error("invalid argument: {message}")]
    #[diagnostic(code(eggbeater::invalid_argument))]
    InvalidArgument { message: String },

    #[error("role '{role}' does not exist")]
    #[diagnostic(
        code(eggbeater::role_not_found),
        help("the lookup uses the `name` field inside each role file, which may differ from the file name")
    )]
    RoleNotFound { role: String },

    #[error("failed decoding role file '{path}'")]
    #[diagnostic(
        code(eggbeater::role_malformed),
        help("role files are JSON objects with a `name` string and a `run_list` array")
    )]
    RoleMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("role '{role}' is declared by both '{previous}' and '{path}'")]
    #[diagnostic(
        code(eggbeater::duplicate_role),
        help("role names must be unique across the roles directory")
    )]
    DuplicateRole {
        role: String,
        path: PathBuf,
        previous: PathBuf,
    },

    #[error("invalid entry in role '{role}' run_list: \"{entry}\"")]
    #[diagnostic(
        code(eggbeater::invalid_run_list_entry),
        help("run_list entries must look like role[<name>] or recipe[<cookbook>[::<recipe>]]")
    )]
    InvalidRunListEntry { role: String, entry: String },

    #[error("could not find metadata for cookbook '{cookbook}', searched: {searched}")]
    #[diagnostic(
        code(eggbeater::metadata_not_found),
        help("every cookbook directory needs a metadata.rb or metadata.json file")
    )]
    MetadataNotFound { cookbook: String, searched: String },

    #[error("malformed cookbook metadata '{path}': {message}")]
    #[diagnostic(code(eggbeater::metadata_malformed))]
    MetadataMalformed { path: PathBuf, message: String },

    #[error("no graph found")]
    #[diagnostic(
        code(eggbeater::graph_empty),
        help("the role's run_list did not reach any cookbook")
    )]
    GraphEmpty,

    #[error("role '{role}' exceeds {metric}: found {found}, maximum allowed {max}")]
    #[diagnostic(code(eggbeater::threshold_exceeded))]
    ThresholdExceeded {
        role: String,
        metric: String,
        found: usize,
        max: usize,
    },

    #[error("configuration error: {message}")]
    #[diagnostic(
        code(eggbeater::config_error),
        help("check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("JSON serialization error")]
    #[diagnostic(code(eggbeater::json_error))]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(code(eggbeater::fmt_error))]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(code(eggbeater::io_error), help("check file permissions"))]
    Io(#[from] std::io::Error),
}
