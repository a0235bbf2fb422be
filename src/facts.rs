//! Gathering of dladm facts for one category.
//!
//! [`gather`] checks the platform, finds and runs `dladm show-<category>`
//! through a [`CommandRunner`], and parses the captured table. The result is
//! packaged the way configuration-management tools expect facts:
//!
//! ```json
//! {"changed": false, "ansible_facts": {"dladm_link_list": [{"LINK": "net0", ...}]}}
//! ```

use crate::category::Category;
use crate::config::DladmFactsConfig;
use crate::error::{Error, Result};
use crate::platform::PlatformInfo;
use crate::process::{find_program, CommandRunner};
use crate::table::Record;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub const DLADM_BIN: &str = "dladm";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactsResult {
    pub changed: bool,
    pub ansible_facts: BTreeMap<String, Vec<Record>>,
    #[serde(skip)]
    pub category: Category,
}

impl FactsResult {
    pub fn new(category: Category, records: Vec<Record>) -> Self {
        let mut ansible_facts = BTreeMap::new();
        ansible_facts.insert(category.facts_key(), records);
        FactsResult {
            changed: false,
            ansible_facts,
            category,
        }
    }

    pub fn records(&self) -> &[Record] {
        self.ansible_facts
            .get(&self.category.facts_key())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Package already captured `dladm show-<category>` output.
pub fn from_output(category: Category, raw: &str) -> Result<FactsResult> {
    let records = category.schema().parse(raw)?;
    info!(%category, count = records.len(), "parsed dladm table");
    Ok(FactsResult::new(category, records))
}

/// Run `dladm show-<category>` on this machine and parse its output.
pub fn gather<R: CommandRunner>(
    category: Category,
    runner: &R,
    config: &DladmFactsConfig,
) -> Result<FactsResult> {
    if config.check_platform {
        PlatformInfo::current()?.ensure_supported(&config.required_release)?;
    } else {
        debug!("platform check disabled");
    }

    let dladm = locate_dladm(config)?;
    gather_with(category, runner, &dladm, config)
}

/// Like [`gather`], with platform checks and lookup already done.
pub fn gather_with<R: CommandRunner>(
    category: Category,
    runner: &R,
    dladm: &std::path::Path,
    config: &DladmFactsConfig,
) -> Result<FactsResult> {
    let args = category.command_args();
    let output = runner.run(dladm, &args)?;

    if !output.success() {
        if config.fail_on_error {
            let mut command = vec![dladm.display().to_string()];
            command.extend(args);
            return Err(Error::CommandFailed {
                command,
                status: output.status,
                stderr: output.stderr,
            });
        }
        warn!(
            %category,
            status = ?output.status,
            stderr = %output.stderr.trim_end(),
            "dladm exited unsuccessfully, reporting no records"
        );
        return Ok(FactsResult::new(category, Vec::new()));
    }

    from_output(category, &output.stdout)
}

fn locate_dladm(config: &DladmFactsConfig) -> Result<PathBuf> {
    if let Some(path) = &config.dladm_path {
        debug!("using configured dladm at {}", path.display());
        return Ok(path.clone());
    }
    find_program(DLADM_BIN, &config.search_paths).map_err(|searched| Error::CommandNotFound {
        name: DLADM_BIN.to_string(),
        searched,
    })
}
