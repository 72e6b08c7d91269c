//! Field path accessor
//!
//! Resolves dotted/bracketed field paths (`driver.age`, `items[2].code`)
//! against a nested record. Reads are total: an unresolvable path yields
//! `Null`. Writes create intermediate objects as needed and report
//! structural conflicts.

use crate::error::{Result, RuntimeError};
use ratify_core::{Record, Value};
use std::collections::BTreeMap;
use std::fmt;

/// One segment of a parsed field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object key
    Key(String),
    /// Array index
    Index(usize),
}

/// A parsed field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Parse a dotted path with optional `[n]` index suffixes.
    ///
    /// Malformed paths (empty path, empty segment, index with no field
    /// name, unbalanced bracket, non-numeric index) are a configuration
    /// error and fatal to the evaluation that touches them.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(RuntimeError::InvalidPath("empty path".to_string()));
        }

        let mut segments = Vec::new();
        for part in raw.split('.') {
            if part.is_empty() {
                return Err(RuntimeError::InvalidPath(format!(
                    "empty segment in '{}'",
                    raw
                )));
            }

            let name_end = part.find('[').unwrap_or(part.len());
            let name = &part[..name_end];
            if name.is_empty() {
                return Err(RuntimeError::InvalidPath(format!(
                    "index without field name in '{}'",
                    raw
                )));
            }
            segments.push(Segment::Key(name.to_string()));

            let mut rest = &part[name_end..];
            while !rest.is_empty() {
                if !rest.starts_with('[') {
                    return Err(RuntimeError::InvalidPath(format!(
                        "unexpected text after index in '{}'",
                        raw
                    )));
                }
                let close = rest.find(']').ok_or_else(|| {
                    RuntimeError::InvalidPath(format!("unbalanced bracket in '{}'", raw))
                })?;
                let index: usize = rest[1..close].parse().map_err(|_| {
                    RuntimeError::InvalidPath(format!("invalid index in '{}'", raw))
                })?;
                segments.push(Segment::Index(index));
                rest = &rest[close + 1..];
            }
        }

        Ok(FieldPath {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Parsed segments, never empty
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Read a value at a path. Total: any unresolvable step yields `Null`.
pub fn get_path(record: &Record, path: &FieldPath) -> Value {
    let mut iter = path.segments().iter();
    let mut current: &Value = match iter.next() {
        Some(Segment::Key(key)) => match record.get(key) {
            Some(value) => value,
            None => return Value::Null,
        },
        _ => return Value::Null,
    };

    for segment in iter {
        current = match (segment, current) {
            (Segment::Key(key), Value::Object(map)) => match map.get(key) {
                Some(value) => value,
                None => return Value::Null,
            },
            (Segment::Index(index), Value::Array(items)) => match items.get(*index) {
                Some(value) => value,
                None => return Value::Null,
            },
            _ => return Value::Null,
        };
    }

    current.clone()
}

/// Write a value at a path, creating intermediate objects as needed.
///
/// An intermediate segment that exists but is not an object (or an index
/// applied to a non-array) is a `PathConflict`. A write index equal to
/// the array length appends; past the end it is `IndexOutOfRange`.
pub fn set_path(record: &mut Record, path: &FieldPath, value: Value) -> Result<()> {
    let segments = path.segments();
    match &segments[0] {
        Segment::Key(key) => {
            if segments.len() == 1 {
                record.insert(key.clone(), value);
                Ok(())
            } else {
                let next = record
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(BTreeMap::new()));
                set_in_value(next, &segments[1..], value, path)
            }
        }
        // A top-level record is an object, never an array
        Segment::Index(_) => Err(RuntimeError::PathConflict(path.to_string())),
    }
}

fn set_in_value(container: &mut Value, segments: &[Segment], value: Value, path: &FieldPath) -> Result<()> {
    match (&segments[0], container) {
        (Segment::Key(key), Value::Object(map)) => {
            if segments.len() == 1 {
                map.insert(key.clone(), value);
                Ok(())
            } else {
                let next = map
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(BTreeMap::new()));
                set_in_value(next, &segments[1..], value, path)
            }
        }
        (Segment::Index(index), Value::Array(items)) => {
            if *index < items.len() {
                if segments.len() == 1 {
                    items[*index] = value;
                    Ok(())
                } else {
                    set_in_value(&mut items[*index], &segments[1..], value, path)
                }
            } else if *index == items.len() {
                if segments.len() == 1 {
                    items.push(value);
                    Ok(())
                } else {
                    items.push(Value::Object(BTreeMap::new()));
                    let last = items.len() - 1;
                    set_in_value(&mut items[last], &segments[1..], value, path)
                }
            } else {
                Err(RuntimeError::IndexOutOfRange {
                    index: *index,
                    len: items.len(),
                })
            }
        }
        _ => Err(RuntimeError::PathConflict(path.to_string())),
    }
}
