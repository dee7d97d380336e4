use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Request processing phase a filter is registered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DispatcherType {
    #[serde(alias = "forward")]
    Forward,
    #[serde(alias = "include")]
    Include,
    #[serde(alias = "request")]
    Request,
    #[serde(alias = "async")]
    Async,
    #[serde(alias = "error")]
    Error,
}

impl FromStr for DispatcherType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
    }
}

impl fmt::Display for DispatcherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DispatcherType::Forward => "FORWARD",
            DispatcherType::Include => "INCLUDE",
            DispatcherType::Request => "REQUEST",
            DispatcherType::Async => "ASYNC",
            DispatcherType::Error => "ERROR",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("request", DispatcherType::Request; "lower")]
    #[test_case("ASYNC", DispatcherType::Async; "upper")]
    #[test_case("Error", DispatcherType::Error; "mixed")]
    #[test_case(" forward", DispatcherType::Forward; "leading space")]
    #[test_case("include", DispatcherType::Include; "include")]
    fn test_parse(input: &str, expected: DispatcherType) {
        let actual: DispatcherType = input.parse().unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_parse_fails() {
        assert!("websocket".parse::<DispatcherType>().is_err());
    }
}
