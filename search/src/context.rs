//! Run-scoped, string-keyed strategy parameters.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::ConfigError;

/// Free-form parameters for one strategy run.
///
/// Keys a strategy does not recognise are ignored. Each strategy parses the
/// keys it needs into a typed parameter struct before it expands anything
/// (see [`crate::policy`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    params: BTreeMap<String, String>,
}

impl RunContext {
    /// An empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// The raw value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// All parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse an optional parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the key is present but its value
    /// does not parse as `T`.
    pub fn parse<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };
        raw.trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                key: key.to_string(),
                value: raw.to_string(),
                reason: e.to_string(),
            })
    }

    /// Parse a required parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the key is absent and
    /// [`ConfigError::Invalid`] if its value does not parse as `T`.
    pub fn require<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.parse(key)?.ok_or_else(|| ConfigError::Missing {
            key: key.to_string(),
        })
    }
}

impl<K, V> FromIterator<(K, V)> for RunContext
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ctx = Self::new();
        for (k, v) in iter {
            ctx.insert(k, v);
        }
        ctx
    }
}
