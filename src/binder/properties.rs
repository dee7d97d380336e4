use crate::model::binding::Error;

use super::Properties;

/// Parses `.properties` style text into ordered key/value pairs.
pub fn parse(text: &str) -> Result<Properties, Error> {
    let mut res = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let (key, value) = split(line).ok_or_else(|| Error::Syntax {
            line: i + 1,
            content: line.to_string(),
        })?;
        if key.is_empty() {
            return Err(Error::Syntax {
                line: i + 1,
                content: line.to_string(),
            });
        }
        tracing::trace!(key = key, "property");
        res.push((key.to_string(), value.to_string()));
    }
    Ok(res)
}

fn split(line: &str) -> Option<(&str, &str)> {
    let pos = line.find(['=', ':'])?;
    Some((line[..pos].trim(), line[pos + 1..].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", vec![]; "empty")]
    #[test_case("# comment\n! other\n\n", vec![]; "comments only")]
    #[test_case("a=b", vec![("a", "b")]; "equals")]
    #[test_case("a: b", vec![("a", "b")]; "colon")]
    #[test_case("  a  =  b c  ", vec![("a", "b c")]; "trimmed")]
    #[test_case("a=", vec![("a", "")]; "empty value")]
    #[test_case("a=x=y", vec![("a", "x=y")]; "first separator")]
    #[test_case("a=1\nb=2\na=3", vec![("a", "1"), ("b", "2"), ("a", "3")]; "keeps order")]
    fn test_parse(input: &str, expected: Vec<(&str, &str)>) {
        let actual = parse(input).unwrap();
        let expected: Properties = expected
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(expected, actual);
    }

    #[test_case("a=b\nnoseparator", 2; "no separator")]
    #[test_case("=b", 1; "empty key")]
    fn test_parse_fails(input: &str, expected_line: usize) {
        match parse(input) {
            Err(Error::Syntax { line, .. }) => assert_eq!(expected_line, line),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
