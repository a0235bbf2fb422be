use crate::category::Category;
use miette::Diagnostic;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("expected `dladm show-{category}` table layout \"{layout}\" ({expected} fields) but got something else: {line:?}")]
    #[diagnostic(
        code(dladm_facts::malformed_row),
        help("the dladm output format may have changed; run with RUST_LOG=dladm_facts=trace to log every parsed row")
    )]
    MalformedRow {
        category: Category,
        expected: usize,
        layout: String,
        line: String,
    },

    #[error("unknown dladm attribute {0:?}")]
    #[diagnostic(
        code(dladm_facts::unknown_category),
        help("supported attributes are: aggr, link, vnic, ether, phys")
    )]
    UnknownCategory(String),

    #[error("this tool requires SunOS, found {system}")]
    #[diagnostic(code(dladm_facts::unsupported_platform))]
    UnsupportedPlatform { system: String },

    #[error("this tool requires release {required}, found {release}")]
    #[diagnostic(
        code(dladm_facts::unsupported_release),
        help("set `required_release` in the configuration to accept another release")
    )]
    UnsupportedRelease { release: String, required: String },

    #[error("unable to find {name} in any of: {}", .searched.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "))]
    #[diagnostic(
        code(dladm_facts::command_not_found),
        help("set `dladm_path` in the configuration to point at the binary")
    )]
    CommandNotFound { name: String, searched: Vec<PathBuf> },

    #[error("exec {command:?} failed with status {status:?}: {stderr}")]
    #[diagnostic(code(dladm_facts::command_failed))]
    CommandFailed {
        command: Vec<String>,
        status: Option<i32>,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("command output is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),

    #[error("failed to load configuration")]
    Config(#[from] config::ConfigError),

    #[error("failed to render output: {0}")]
    Serialize(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
