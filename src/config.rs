use config::{Config, Environment, File, Map};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::error::Result;

const SYSTEM_CONFIG: &str = "/etc/dladm-facts";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DladmFactsConfig {
    /// Absolute path to dladm; skips the `$PATH` lookup when set.
    #[serde(default)]
    pub dladm_path: Option<PathBuf>,
    /// Searched after `$PATH` when looking for dladm. Accepts a list or a
    /// `:` separated string.
    #[serde(
        default = "default_search_paths",
        deserialize_with = "deserialize_path_list"
    )]
    pub search_paths: Vec<PathBuf>,
    #[serde(default = "default_required_release")]
    pub required_release: String,
    #[serde(default = "default_true")]
    pub check_platform: bool,
    /// Treat a non-zero dladm exit as an error instead of an empty result.
    #[serde(default)]
    pub fail_on_error: bool,
}

fn default_search_paths() -> Vec<PathBuf> {
    ["/sbin", "/usr/sbin", "/usr/local/sbin"]
        .into_iter()
        .map(PathBuf::from)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PathList {
    List(Vec<PathBuf>),
    Joined(String),
}

fn deserialize_path_list<'de, D>(deserializer: D) -> std::result::Result<Vec<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match PathList::deserialize(deserializer)? {
        PathList::List(paths) => paths,
        PathList::Joined(joined) => joined
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .collect(),
    })
}

fn default_required_release() -> String {
    "5.11".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DladmFactsConfig {
    fn default() -> Self {
        DladmFactsConfig {
            dladm_path: None,
            search_paths: default_search_paths(),
            required_release: default_required_release(),
            check_platform: true,
            fail_on_error: false,
        }
    }
}

/// Load configuration from `/etc/dladm-facts.*`, then `extra` if given, then
/// `DLADM_FACTS_*` environment variables. Later sources win.
pub fn load_config(extra: Option<&Path>) -> Result<DladmFactsConfig> {
    build_config(Some(Path::new(SYSTEM_CONFIG)), extra, Some(env_source(None)))
}

/// `DLADM_FACTS_*` variables, read from `vars` instead of the process
/// environment when given.
///
/// Values are kept as strings so a release such as `5.10` is not read as the
/// number `5.1`.
fn env_source(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix("DLADM_FACTS").source(vars)
}

fn build_config(
    system: Option<&Path>,
    extra: Option<&Path>,
    env: Option<Environment>,
) -> Result<DladmFactsConfig> {
    let mut builder = Config::builder();
    // The system file is optional so the tool also works on a bare install
    if let Some(system) = system {
        builder = builder.add_source(File::from(system).required(false));
    }
    // A file named on the command line must exist
    if let Some(extra) = extra {
        builder = builder.add_source(File::from(extra).required(true));
    }
    if let Some(env) = env {
        builder = builder.add_source(env);
    }

    let cfg = builder.build()?;
    Ok(cfg.try_deserialize()?)
}
