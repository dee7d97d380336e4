use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Session persistence backend.
///
/// An unset store type (`None` at the config level) leaves the choice to
/// auto-detection, while [`StoreType::None`] explicitly disables session
/// persistence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StoreType {
    #[serde(alias = "redis")]
    Redis,
    #[serde(alias = "mongodb")]
    Mongodb,
    #[serde(alias = "jdbc")]
    Jdbc,
    #[serde(alias = "hazelcast")]
    Hazelcast,
    #[serde(alias = "none")]
    None,
}

impl FromStr for StoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreType::Redis => "REDIS",
            StoreType::Mongodb => "MONGODB",
            StoreType::Jdbc => "JDBC",
            StoreType::Hazelcast => "HAZELCAST",
            StoreType::None => "NONE",
        };
        f.write_str(name)
    }
}
