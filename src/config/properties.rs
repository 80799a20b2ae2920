//! Key-value properties file parsing.
//!
//! Reads the `.properties` text format: one `key=value` pair per logical line,
//! `#`/`!` comments, `=`/`:`/whitespace separators, backslash line
//! continuations and backslash escapes (including `\uXXXX`).

use super::ConfigError;
use std::collections::HashMap;
use std::str::Chars;

/// An immutable set of string properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Creates an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses properties text.
    ///
    /// A later duplicate key overwrites an earlier one. A key without a
    /// separator maps to the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use rest_harness::config::Properties;
    ///
    /// let props = Properties::parse("# target\nHOST = https://reqres.in\n").unwrap();
    /// assert_eq!(props.get("HOST"), Some("https://reqres.in"));
    /// ```
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut entries = HashMap::new();

        for (line_number, logical) in logical_lines(content) {
            let (key, value) = split_key_value(&logical);
            let key = unescape(key, line_number)?;
            let value = unescape(value, line_number)?;
            entries.insert(key, value);
        }

        Ok(Self { entries })
    }

    /// Gets a property value by exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    /// Gets a property value, falling back to `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Gets a property value that must be present.
    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    /// Base URL of the service under test, read from `HOST`.
    ///
    /// Trailing slashes are dropped so paths can be appended directly.
    pub fn host(&self) -> Result<&str, ConfigError> {
        let host = self.require(super::HOST_KEY)?.trim_end_matches('/');
        if host.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: super::HOST_KEY.to_string(),
                value: String::new(),
            });
        }
        Ok(host)
    }

    /// Sets a property. Used when building configuration in code.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all key-value pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Joins physical lines into logical lines, dropping blanks and comments.
///
/// Each logical line is returned with the 1-based number of the physical line
/// it started on.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut result = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim_start();

        let (start, mut buffer) = match pending.take() {
            Some(continued) => continued,
            None => {
                if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                    continue;
                }
                (index + 1, String::new())
            }
        };

        if ends_with_continuation(line) {
            buffer.push_str(&line[..line.len() - 1]);
            pending = Some((start, buffer));
        } else {
            buffer.push_str(line);
            result.push((start, buffer));
        }
    }

    // A continuation on the last line just ends the value.
    if let Some(last) = pending {
        result.push(last);
    }

    result
}

/// A line continues when it ends in an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Splits a logical line at the first unescaped `=`, `:` or whitespace.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if c.is_whitespace() => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start();
    if let Some(stripped) = rest.strip_prefix(|c: char| c == '=' || c == ':') {
        rest = stripped.trim_start();
    }

    (key, rest)
}

/// Decodes backslash escapes in a key or value.
fn unescape(text: &str, line_number: usize) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let first = read_code_unit(&mut chars, line_number)?;
                let mut units = vec![first];
                if (0xD800..0xDC00).contains(&first) {
                    let mut lookahead = chars.clone();
                    if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
                        chars = lookahead;
                        units.push(read_code_unit(&mut chars, line_number)?);
                    }
                }
                for decoded in char::decode_utf16(units) {
                    let decoded = decoded.map_err(|e| ConfigError::ParseError {
                        line: line_number,
                        message: format!(
                            "unpaired surrogate in \\u escape: \\u{:04X}",
                            e.unpaired_surrogate()
                        ),
                    })?;
                    out.push(decoded);
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

/// Reads the four hex digits of a `\uXXXX` escape as one UTF-16 code unit.
fn read_code_unit(chars: &mut Chars<'_>, line_number: usize) -> Result<u16, ConfigError> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        if let Ok(unit) = u16::from_str_radix(&hex, 16) {
            return Ok(unit);
        }
    }
    Err(ConfigError::ParseError {
        line: line_number,
        message: format!("malformed \\u escape: \\u{}", hex),
    })
}
