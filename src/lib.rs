//! Structured facts from Solaris `dladm show-*` tables.
//!
//! The core is [`table::TableSchema::parse`], which turns the fixed-column
//! text printed by `dladm show-aggr`, `show-link`, `show-vnic`, `show-ether`
//! and `show-phys` into ordered [`Record`]s. [`facts::gather`] wraps it with
//! platform checks, binary lookup and command execution.

pub mod category;
pub mod config;
pub mod error;
pub mod facts;
pub mod output;
pub mod platform;
pub mod process;
pub mod table;

pub use category::Category;
pub use config::{load_config, DladmFactsConfig};
pub use error::{Error, Result};
pub use facts::{from_output, gather, FactsResult};
pub use process::{CommandOutput, CommandRunner, SystemRunner};
pub use table::{parse_table, Record, TableSchema};
