// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Requirement sentence patterns
//!
//! Two dialects are supported and every pattern carries its own:
//!
//! - **Parse**: literal text with `{name}` placeholders. A bare placeholder
//!   captures any non-empty text (shortest match), `{name:d}` an integer,
//!   `{name:w}` a word and `{name:S}` a run of non-whitespace. `{{` and `}}`
//!   are literal braces.
//! - **Regex**: a regular expression with named groups.
//!
//! Both dialects must match the whole sentence.

use crate::{CheckError, Result};
use regex::Regex;
use std::fmt;

/// Pattern dialect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    /// Literal text with placeholders
    Parse,
    /// Regular expression with named groups
    Regex,
}

/// A compiled requirement pattern
#[derive(Clone)]
pub struct Pattern {
    dialect: Dialect,
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a parse-dialect pattern
    pub fn parse(source: &str) -> Result<Self> {
        let body = translate_placeholders(source)?;
        Self::compile(Dialect::Parse, source, &body)
    }

    /// Compile a regex-dialect pattern
    pub fn regex(source: &str) -> Result<Self> {
        Self::compile(Dialect::Regex, source, source)
    }

    fn compile(dialect: Dialect, source: &str, body: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})$", body))
            .map_err(|e| CheckError::invalid_pattern(source, e))?;
        Ok(Self {
            dialect,
            source: source.to_string(),
            regex,
        })
    }

    /// Pattern dialect
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Pattern as written
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of the captured parameters, in pattern order
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.regex.capture_names().flatten()
    }

    /// Match a whole sentence, returning the captured parameters
    pub fn captures(&self, sentence: &str) -> Option<Params> {
        let caps = self.regex.captures(sentence)?;
        let values = self
            .regex
            .capture_names()
            .flatten()
            .filter_map(|name| {
                caps.name(name)
                    .map(|m| (name.to_string(), m.as_str().to_string()))
            })
            .collect();
        Some(Params { values })
    }

    /// Whether the whole sentence matches
    pub fn is_match(&self, sentence: &str) -> bool {
        self.regex.is_match(sentence)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("dialect", &self.dialect)
            .field("source", &self.source)
            .finish()
    }
}

/// Convert parse-dialect text into a regex body
fn translate_placeholders(source: &str) -> Result<String> {
    let mut body = String::with_capacity(source.len() * 2);
    let mut literal = String::new();
    let mut rest = source;

    while let Some(c) = rest.chars().next() {
        if let Some(tail) = rest.strip_prefix("{{") {
            literal.push('{');
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("}}") {
            literal.push('}');
            rest = tail;
        } else if c == '{' {
            let end = rest
                .find('}')
                .ok_or_else(|| CheckError::invalid_pattern(source, "unclosed placeholder"))?;
            body.push_str(&regex::escape(&literal));
            literal.clear();
            body.push_str(&placeholder(source, &rest[1..end])?);
            rest = &rest[end + 1..];
        } else if c == '}' {
            return Err(CheckError::invalid_pattern(source, "unmatched '}'"));
        } else {
            literal.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    body.push_str(&regex::escape(&literal));
    Ok(body)
}

fn placeholder(source: &str, inner: &str) -> Result<String> {
    let (name, format) = inner.split_once(':').unwrap_or((inner, ""));
    let valid_name = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_name {
        return Err(CheckError::invalid_pattern(
            source,
            format!("invalid placeholder name {:?}", name),
        ));
    }

    let class = match format {
        "" => ".+?",
        "d" => r"[-+]?\d+",
        "w" => r"\w+",
        "S" => r"\S+",
        other => {
            return Err(CheckError::invalid_pattern(
                source,
                format!("unsupported placeholder format {:?}", other),
            ))
        }
    };
    Ok(format!("(?P<{}>{})", name, class))
}

/// Parameters captured from a requirement sentence
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    values: Vec<(String, String)>,
}

impl Params {
    /// Build parameters from name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Captured text for `name`
    pub fn get(&self, name: &str) -> Result<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| CheckError::Undefined(format!("{{{}}}", name)))
    }

    /// Captured integer for `name`
    pub fn integer(&self, name: &str) -> Result<i64> {
        let text = self.get(name)?;
        text.trim_start_matches('+')
            .parse()
            .map_err(|_| CheckError::invalid_pattern(text, format!("{} is not an integer", name)))
    }

    /// Iterate over name/value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of captured parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was captured
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_placeholders() {
        let pattern = Pattern::parse(r#"The IFC file "{file}" must be provided"#).unwrap();
        let params = pattern
            .captures(r#"The IFC file "models/a b.ifc" must be provided"#)
            .unwrap();
        assert_eq!(params.get("file").unwrap(), "models/a b.ifc");
        assert!(pattern.captures(r#"The IFC file "" must be provided"#).is_none());
        assert!(pattern.captures(r#"The IFC file "a.ifc" must be provided!"#).is_none());
    }

    #[test]
    fn test_typed_placeholders() {
        let pattern = Pattern::parse("The element {id:S} is an {ifc_class:w} only").unwrap();
        let params = pattern.captures("The element #12 is an IfcWall only").unwrap();
        assert_eq!(params.get("id").unwrap(), "#12");
        assert_eq!(params.get("ifc_class").unwrap(), "IfcWall");
        assert!(pattern.captures("The element 12 is an Ifc Wall only").is_none());

        let counted = Pattern::parse("at least {count:d} walls").unwrap();
        let params = counted.captures("at least 3 walls").unwrap();
        assert_eq!(params.integer("count").unwrap(), 3);
        assert!(counted.captures("at least three walls").is_none());
    }

    #[test]
    fn test_literal_text_is_escaped() {
        let pattern = Pattern::parse("all {ifc_class:w} elements have a {qto:w}.{q:w} quantity (x)").unwrap();
        assert!(pattern
            .captures("all IfcWall elements have a Qto_A.Length quantity (x)")
            .is_some());
        assert!(pattern
            .captures("all IfcWall elements have a Qto_A_Length quantity (x)")
            .is_none());
        let braces = Pattern::parse("{{literal}} {value}").unwrap();
        assert_eq!(braces.captures("{literal} 5").unwrap().get("value").unwrap(), "5");
    }

    #[test]
    fn test_regex_dialect_is_anchored() {
        let pattern =
            Pattern::regex(r"all (?P<ifc_class>\w+) elements have an? (?P<attribute>[A-Z]\w*) attribute")
                .unwrap();
        assert_eq!(pattern.dialect(), Dialect::Regex);
        let params = pattern.captures("all IfcSlab elements have a Tag attribute").unwrap();
        assert_eq!(params.get("attribute").unwrap(), "Tag");
        assert!(pattern
            .captures("all IfcSlab elements have a Tag attribute value")
            .is_none());
        assert_eq!(
            pattern.parameter_names().collect::<Vec<_>>(),
            vec!["ifc_class", "attribute"]
        );
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(matches!(Pattern::parse("{open"), Err(CheckError::InvalidPattern { .. })));
        assert!(matches!(Pattern::parse("close}"), Err(CheckError::InvalidPattern { .. })));
        assert!(matches!(Pattern::parse("{x:q}"), Err(CheckError::InvalidPattern { .. })));
        assert!(matches!(Pattern::parse("{1x}"), Err(CheckError::InvalidPattern { .. })));
        assert!(matches!(Pattern::regex("(unclosed"), Err(CheckError::InvalidPattern { .. })));
    }

    #[test]
    fn test_missing_parameter() {
        let params = Params::from_pairs([("a", "1")]);
        assert_eq!(params.get("a").unwrap(), "1");
        assert!(matches!(params.get("b"), Err(CheckError::Undefined(_))));
    }
}
