//! The closed set of `dladm show-*` attributes this crate knows how to gather.
//!
//! Each [`Category`] maps directly onto a [`TableSchema`] describing the
//! columns `dladm` prints for it. Adding a category means adding a variant and
//! a schema entry; the parser itself is shared.

use crate::error::Error;
use crate::table::TableSchema;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    /// Link aggregations (`dladm show-aggr`)
    Aggr,
    /// All datalinks (`dladm show-link`)
    Link,
    /// Virtual NICs (`dladm show-vnic`)
    Vnic,
    /// Ethernet parameters (`dladm show-ether`)
    Ether,
    /// Physical links (`dladm show-phys`)
    Phys,
}

pub const AGGR_SCHEMA: TableSchema = TableSchema {
    category: Category::Aggr,
    fields: &["LINK", "MODE", "POLICY", "ADDRPOLICY", "LACPACTIVITY", "LACPTIMER"],
};

pub const LINK_SCHEMA: TableSchema = TableSchema {
    category: Category::Link,
    fields: &["LINK", "CLASS", "MTU", "STATE", "OVER"],
};

pub const VNIC_SCHEMA: TableSchema = TableSchema {
    category: Category::Vnic,
    fields: &["LINK", "OVER", "SPEED", "MACADDRESS", "MACADDRTYPE", "IDS"],
};

pub const ETHER_SCHEMA: TableSchema = TableSchema {
    category: Category::Ether,
    fields: &["LINK", "PTYPE", "STATE", "AUTO", "SPEED-DUPLEX", "PAUSE"],
};

pub const PHYS_SCHEMA: TableSchema = TableSchema {
    category: Category::Phys,
    fields: &["LINK", "MEDIA", "STATE", "SPEED", "DUPLEX", "DEVICE"],
};

impl Category {
    pub fn schema(self) -> &'static TableSchema {
        match self {
            Category::Aggr => &AGGR_SCHEMA,
            Category::Link => &LINK_SCHEMA,
            Category::Vnic => &VNIC_SCHEMA,
            Category::Ether => &ETHER_SCHEMA,
            Category::Phys => &PHYS_SCHEMA,
        }
    }

    /// The `dladm` subcommand, e.g. `show-vnic`.
    pub fn subcommand(self) -> String {
        format!("show-{}", self)
    }

    /// Arguments passed to `dladm` for this category.
    pub fn command_args(self) -> Vec<String> {
        vec![self.subcommand()]
    }

    /// Key the records are published under, e.g. `dladm_link_list`.
    pub fn facts_key(self) -> String {
        format!("dladm_{}_list", self)
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::iter()
            .find(|c| c.as_ref() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
