use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: AnyOrArray,
    /// Allowed HTTP methods (wildcard "*" or explicit list)
    #[serde(default)]
    pub methods: AnyOrArray,
    /// Allowed headers (wildcard "*" or explicit list)
    #[serde(default)]
    pub headers: AnyOrArray,
    /// Allow credentials
    #[serde(default)]
    pub credentials: bool,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

/// Either a wildcard "*" or explicit list of values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnyOrArray {
    /// Match any value
    #[default]
    Any,
    /// Explicit list
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for AnyOrArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        let values = match Raw::deserialize(deserializer)? {
            Raw::One(value) => vec![value],
            Raw::Many(values) => values,
        };

        if values.iter().any(|v| v == "*") {
            Ok(Self::Any)
        } else {
            Ok(Self::List(values))
        }
    }
}

impl CorsConfig {
    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}
