//! Restricted YAML frontmatter.
//!
//! Only two line rules are understood:
//!
//! * `key: value` assigns a scalar, or an inline list when the value is `[a, b]`.
//! * `key:` followed by `- item` lines assigns a block list.
//!
//! Everything else inside the block is ignored. Block lists are applied after
//! scalars, so they win when a key matches both rules.

use std::collections::HashMap;

const DELIMITER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterValue {
    Scalar(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: HashMap<String, FrontmatterValue>,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.entries.get(key)
    }

    pub fn scalar(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(FrontmatterValue::Scalar(s)) => Some(s),
            _ => None,
        }
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.entries.get(key) {
            Some(FrontmatterValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, key: &str, value: FrontmatterValue) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Parse the leading frontmatter block of a note. Returns an empty mapping
/// when the content has no well formed block.
pub fn parse_frontmatter(content: &str) -> Frontmatter {
    let mut fm = Frontmatter::default();
    let Some(block) = leading_block(content) else {
        return fm;
    };

    for line in &block {
        if let Some((key, value)) = split_key_value(line) {
            if !value.is_empty() {
                fm.insert(key, parse_scalar(value));
            }
        }
    }

    let mut i = 0;
    while i < block.len() {
        let Some((key, "")) = split_key_value(block[i]) else {
            i += 1;
            continue;
        };

        let items: Vec<String> = block[i + 1..]
            .iter()
            .map_while(|line| list_item(line))
            .map(str::to_string)
            .collect();

        if items.is_empty() {
            i += 1;
        } else {
            i += 1 + items.len();
            fm.insert(key, FrontmatterValue::List(items));
        }
    }

    fm
}

/// Lines between the opening and the first closing delimiter.
fn leading_block(content: &str) -> Option<Vec<&str>> {
    let mut lines = content.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));

    if lines.next()? != DELIMITER {
        return None;
    }

    let mut block = Vec::new();
    for line in lines {
        if line == DELIMITER {
            return Some(block);
        }
        block.push(line);
    }

    // unterminated
    None
}

/// Split `key: value` with the key anchored at column 0. The value is trimmed
/// and may be empty.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let key_len = key_prefix_len(line)?;
    let (key, rest) = line.split_at(key_len);
    let value = rest.trim_start().strip_prefix(':')?;
    Some((key, value.trim()))
}

fn key_prefix_len(line: &str) -> Option<usize> {
    let mut chars = line.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return None,
    }

    let end = chars
        .find(|&(_, c)| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());
    Some(end)
}

fn parse_scalar(value: &str) -> FrontmatterValue {
    match value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        Some(inner) => FrontmatterValue::List(
            inner
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        None => FrontmatterValue::Scalar(value.to_string()),
    }
}

/// `  - value` → `value`
fn list_item(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix('-')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let item = rest.trim();
    (!item.is_empty()).then_some(item)
}
