//! Input acquisition
//!
//! The generator accepts any array. This module is where arrays coming from
//! people are checked: typed text, files, share links, and random draws all
//! pass through an [`InputPolicy`] before a trace is generated.
//!
//! # Sources
//!
//! - [`parse_values`] - comma and/or whitespace separated integers
//! - [`load_file`] - a JSON array (`.json`) or the text format
//! - [`decode_share_link`] - the `data` parameter of a link's query string
//! - [`random_values`] - uniform draws from the policy's random bounds

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{InputError, Result, ResultExt};
use crate::trace::Value;

/// Default number of values in an array
pub const DEFAULT_ARRAY_SIZE: usize = 12;

/// Query parameter holding shared values
pub const SHARE_PARAM: &str = "data";

/// Validation bounds for user-provided arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPolicy {
    /// Exact number of values required
    #[serde(default = "default_size")]
    pub size: usize,

    /// Smallest accepted value
    #[serde(default = "default_min")]
    pub min: Value,

    /// Largest accepted value
    #[serde(default = "default_max")]
    pub max: Value,

    /// Smallest randomly generated value
    #[serde(default = "default_random_min")]
    pub random_min: Value,

    /// Largest randomly generated value
    #[serde(default = "default_random_max")]
    pub random_max: Value,
}

fn default_size() -> usize {
    DEFAULT_ARRAY_SIZE
}

fn default_min() -> Value {
    1
}

fn default_max() -> Value {
    99
}

fn default_random_min() -> Value {
    15
}

fn default_random_max() -> Value {
    94
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            size: default_size(),
            min: default_min(),
            max: default_max(),
            random_min: default_random_min(),
            random_max: default_random_max(),
        }
    }
}

impl InputPolicy {
    /// Same bounds, different required size
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Check count and bounds
    pub fn validate(&self, values: &[Value]) -> std::result::Result<(), InputError> {
        if values.len() != self.size {
            return Err(InputError::WrongCount {
                expected: self.size,
                found: values.len(),
            });
        }

        if let Some(&value) = values.iter().find(|&&v| v < self.min || v > self.max) {
            return Err(InputError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }

        Ok(())
    }
}

/// Parse comma and/or whitespace separated integers and validate them
pub fn parse_values(text: &str, policy: &InputPolicy) -> std::result::Result<Vec<Value>, InputError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<Value>().map_err(|_| InputError::Unparsable {
                token: token.to_string(),
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(InputError::Empty);
    }

    policy.validate(&values)?;
    Ok(values)
}

/// Load values from a file
///
/// `.json` files must hold an array of integers; anything else is read with
/// [`parse_values`].
pub fn load_file(path: impl AsRef<Path>, policy: &InputPolicy) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let values = if is_json {
        let values: Vec<Value> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        if values.is_empty() {
            return Err(InputError::Empty.into());
        }
        policy.validate(&values)?;
        values
    } else {
        parse_values(&content, policy)?
    };

    tracing::info!(count = values.len(), "Loaded input from {:?}", path);
    Ok(values)
}

/// Query fragment sharing `values`, e.g. `data=5,3,5,1`
pub fn encode_share_query(values: &[Value]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{SHARE_PARAM}={joined}")
}

/// Extract and validate values from a share link
///
/// Accepts a full URL (`https://host/?data=1,2,3`), a bare query
/// (`?data=1,2,3` or `data=1,2,3`), and percent-encoded commas.
pub fn decode_share_link(
    link: &str,
    policy: &InputPolicy,
) -> std::result::Result<Vec<Value>, InputError> {
    let query = match link.split_once('?') {
        Some((_, query)) => query,
        None => link,
    };
    let query = query.split('#').next().unwrap_or_default();

    let raw = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SHARE_PARAM)
        .map(|(_, value)| value)
        .ok_or(InputError::MissingShareData)?;

    let decoded = raw.replace("%2C", ",").replace("%2c", ",").replace("%20", " ");
    parse_values(&decoded, policy)
}

/// Draw `policy.size` values uniformly from `random_min..=random_max`
pub fn random_values<R: Rng>(policy: &InputPolicy, rng: &mut R) -> Vec<Value> {
    let (lo, hi) = if policy.random_min <= policy.random_max {
        (policy.random_min, policy.random_max)
    } else {
        (policy.random_max, policy.random_min)
    };
    (0..policy.size).map(|_| rng.random_range(lo..=hi)).collect()
}
