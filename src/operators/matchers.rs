//! Equality, membership, string and state matchers

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::errors::{QueryError, QueryResult};
use crate::query::{values_equal, Parameter};

use super::operator::Matcher;

fn folded<'a>(parameter: &Parameter, text: &'a str) -> Cow<'a, str> {
    if parameter.ignores_case() {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

fn text<'a>(parameter: &Parameter, value: &'a Value) -> QueryResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| QueryError::invalid_argument(parameter.path(), "a string"))
}

fn first<'a>(parameter: &Parameter, arguments: &[&'a Value]) -> QueryResult<&'a Value> {
    arguments
        .first()
        .copied()
        .ok_or_else(|| QueryError::invalid_argument(parameter.path(), "one argument"))
}

/// Equality honoring the ignore-case modifier for strings
fn equals(parameter: &Parameter, value: &Value, expected: &Value) -> bool {
    match (value, expected) {
        (Value::String(a), Value::String(b)) if parameter.ignores_case() => {
            a.to_lowercase() == b.to_lowercase()
        }
        _ => values_equal(value, expected),
    }
}

fn member_of(parameter: &Parameter, value: &Value, domain: &Value) -> QueryResult<bool> {
    let domain = domain
        .as_array()
        .ok_or_else(|| QueryError::invalid_argument(parameter.path(), "an array"))?;
    Ok(domain.iter().any(|candidate| equals(parameter, value, candidate)))
}

fn contains(parameter: &Parameter, value: &Value, needle: &Value) -> QueryResult<bool> {
    match value {
        Value::Null => Ok(false),
        Value::String(haystack) => {
            let needle = text(parameter, needle)?;
            Ok(folded(parameter, haystack).contains(&*folded(parameter, needle)))
        }
        Value::Array(items) => Ok(items.iter().any(|item| equals(parameter, item, needle))),
        _ => Err(QueryError::invalid_argument(parameter.path(), "a string or an array")),
    }
}

/// Cached patterns before the cache is cleared
const PATTERN_CACHE_CAPACITY: usize = 256;

/// Pattern source, ignore case, dot matches newline
type PatternKey = (String, bool, bool);

fn pattern_cache() -> &'static Mutex<HashMap<PatternKey, Regex>> {
    static PATTERNS: OnceLock<Mutex<HashMap<PatternKey, Regex>>> = OnceLock::new();
    PATTERNS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Compiles a whole-value pattern, reusing an earlier compilation of the
/// same pattern and flags
fn compile(parameter: &Parameter, pattern: &str, dot_matches_new_line: bool) -> QueryResult<Regex> {
    let key = (pattern.to_string(), parameter.ignores_case(), dot_matches_new_line);
    if let Some(regex) = pattern_cache().lock().ok().and_then(|cache| cache.get(&key).cloned()) {
        return Ok(regex);
    }

    let regex = RegexBuilder::new(&format!("^(?:{})$", pattern))
        .case_insensitive(key.1)
        .dot_matches_new_line(key.2)
        .build()
        .map_err(|e| QueryError::InvalidPattern {
            path: parameter.path().to_string(),
            reason: e.to_string(),
        })?;

    if let Ok(mut cache) = pattern_cache().lock() {
        if cache.len() >= PATTERN_CACHE_CAPACITY {
            cache.clear();
        }
        cache.insert(key, regex.clone());
    }
    Ok(regex)
}

/// Translates a SQL `LIKE` pattern (`%` any run, `_` any single char,
/// newlines included)
fn like_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    for c in pattern.chars() {
        match c {
            '%' => out.push_str(".*"),
            '_' => out.push('.'),
            c => out.push_str(&regex::escape(&c.to_string())),
        }
    }
    out
}

fn like(parameter: &Parameter, value: &Value, pattern: &Value) -> QueryResult<bool> {
    if value.is_null() {
        return Ok(false);
    }
    let value = text(parameter, value)?;
    let pattern = text(parameter, pattern)?;
    Ok(compile(parameter, &like_to_regex(pattern), true)?.is_match(value))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsEqualTo;

impl Matcher for IsEqualTo {
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        Ok(equals(parameter, value, first(parameter, arguments)?))
    }
}

/// Complement of [`IsEqualTo`], null values included
#[derive(Debug, Clone, Copy, Default)]
pub struct IsNotEqualTo;

impl Matcher for IsNotEqualTo {
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        Ok(!equals(parameter, value, first(parameter, arguments)?))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsIn;

impl Matcher for IsIn {
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        member_of(parameter, value, first(parameter, arguments)?)
    }
}

/// Complement of [`IsIn`], null values included
#[derive(Debug, Clone, Copy, Default)]
pub struct IsNotIn;

impl Matcher for IsNotIn {
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        member_of(parameter, value, first(parameter, arguments)?).map(|found| !found)
    }
}

/// Substring for strings, element membership for arrays
#[derive(Debug, Clone, Copy, Default)]
pub struct Containing;

impl Matcher for Containing {
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        contains(parameter, value, first(parameter, arguments)?)
    }
}

/// Complement of [`Containing`], null values included
#[derive(Debug, Clone, Copy, Default)]
pub struct NotContaining;

impl Matcher for NotContaining {
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        contains(parameter, value, first(parameter, arguments)?).map(|found| !found)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StartingWith;

impl Matcher for StartingWith {
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        if value.is_null() {
            return Ok(false);
        }
        let value = text(parameter, value)?;
        let prefix = text(parameter, first(parameter, arguments)?)?;
        Ok(folded(parameter, value).starts_with(&*folded(parameter, prefix)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EndingWith;

impl Matcher for EndingWith {
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        if value.is_null() {
            return Ok(false);
        }
        let value = text(parameter, value)?;
        let suffix = text(parameter, first(parameter, arguments)?)?;
        Ok(folded(parameter, value).ends_with(&*folded(parameter, suffix)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsLike;

impl Matcher for IsLike {
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        like(parameter, value, first(parameter, arguments)?)
    }
}

/// Complement of [`IsLike`], null values included
#[derive(Debug, Clone, Copy, Default)]
pub struct IsNotLike;

impl Matcher for IsNotLike {
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        like(parameter, value, first(parameter, arguments)?).map(|found| !found)
    }
}

/// Whole-value regular expression match
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingRegex;

impl Matcher for MatchingRegex {
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        if value.is_null() {
            return Ok(false);
        }
        let value = text(parameter, value)?;
        let pattern = text(parameter, first(parameter, arguments)?)?;
        Ok(compile(parameter, pattern, false)?.is_match(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsNull;

impl Matcher for IsNull {
    fn matches(&self, _parameter: &Parameter, value: &Value, _arguments: &[&Value]) -> QueryResult<bool> {
        Ok(value.is_null())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsNotNull;

impl Matcher for IsNotNull {
    fn matches(&self, _parameter: &Parameter, value: &Value, _arguments: &[&Value]) -> QueryResult<bool> {
        Ok(!value.is_null())
    }
}

/// Matches a boolean property against a fixed truth value
#[derive(Debug, Clone, Copy)]
pub struct IsBoolean(pub bool);

impl Matcher for IsBoolean {
    fn matches(&self, parameter: &Parameter, value: &Value, _arguments: &[&Value]) -> QueryResult<bool> {
        match value {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(*b == self.0),
            _ => Err(QueryError::invalid_argument(parameter.path(), "a boolean")),
        }
    }
}

fn is_empty(parameter: &Parameter, value: &Value) -> QueryResult<bool> {
    match value {
        Value::Null => Ok(true),
        Value::String(s) => Ok(s.is_empty()),
        Value::Array(a) => Ok(a.is_empty()),
        Value::Object(o) => Ok(o.is_empty()),
        _ => Err(QueryError::invalid_argument(
            parameter.path(),
            "a string, an array or an object",
        )),
    }
}

/// Null counts as empty
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmpty;

impl Matcher for IsEmpty {
    fn matches(&self, parameter: &Parameter, value: &Value, _arguments: &[&Value]) -> QueryResult<bool> {
        is_empty(parameter, value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsNotEmpty;

impl Matcher for IsNotEmpty {
    fn matches(&self, parameter: &Parameter, value: &Value, _arguments: &[&Value]) -> QueryResult<bool> {
        is_empty(parameter, value).map(|empty| !empty)
    }
}
