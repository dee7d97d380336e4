use std::time::Duration;

/// Parses a duration value, a bare integer is read as seconds.
///
/// ```
/// use std::time::Duration;
/// use sessionware::utils::duration::parse;
///
/// assert_eq!(parse("90").unwrap(), Duration::from_secs(90));
/// assert_eq!(parse("1h 30m").unwrap(), Duration::from_secs(5400));
/// ```
pub fn parse(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    if let Ok(secs) = value.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }
    humantime::parse_duration(value).map_err(|e| e.to_string())
}

pub fn format(value: &Duration) -> String {
    humantime::format_duration(*value).to_string()
}

pub mod serde_opt {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.serialize_some(&super::format(d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|v| super::parse(&v).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0", 0; "zero")]
    #[test_case("1800", 1800; "seconds")]
    #[test_case(" 45 ", 45; "trimmed")]
    #[test_case("30m", 1800; "minutes")]
    #[test_case("2h", 7200; "hours")]
    #[test_case("1h 30m", 5400; "combined")]
    #[test_case("10s", 10; "suffix seconds")]
    fn test_parse(input: &str, expected: u64) {
        let actual = parse(input).unwrap();
        assert_eq!(Duration::from_secs(expected), actual);
    }

    #[test_case(""; "empty")]
    #[test_case("-5"; "negative")]
    #[test_case("ten minutes"; "words")]
    fn test_parse_fails(input: &str) {
        assert!(parse(input).is_err());
    }

    #[test_case(1800, "30m"; "minutes")]
    #[test_case(5400, "1h 30m"; "combined")]
    fn test_format(secs: u64, expected: &str) {
        assert_eq!(expected, format(&Duration::from_secs(secs)));
    }
}
