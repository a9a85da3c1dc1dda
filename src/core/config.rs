/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Client configuration
//!
//! Loaded from TOML, then overlaid by `MILVUS_*` environment variables.
//!
//! ```toml
//! address = "localhost:19530"
//! username = "root"
//! password = "Milvus"
//! timeout = "30s"
//!
//! [poll]
//! interval_ms = 100
//! max_attempts = 600
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;
use std::time::Duration;

use crate::core::errors::{ConfigError, ValidationError};
use crate::utils::poller::PollConfig;

pub const DEFAULT_PORT: u16 = 19530;
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub address: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Takes precedence over username/password when both are set
    pub token: Option<String>,
    pub database: Option<String>,
    /// Per-call deadline, milliseconds or a time token like `"15s"`
    #[serde(
        serialize_with = "serialize_millis",
        deserialize_with = "deserialize_time_value"
    )]
    pub timeout: Duration,
    #[serde(
        serialize_with = "serialize_millis",
        deserialize_with = "deserialize_time_value"
    )]
    pub connect_timeout: Duration,
    pub poll: PollSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollSettings {
    pub interval_ms: u64,
    pub max_attempts: Option<u32>,
    pub max_duration_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            username: None,
            password: None,
            token: None,
            database: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
            poll: PollSettings::default(),
        }
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_attempts: None,
            max_duration_ms: None,
        }
    }
}

impl PollSettings {
    pub fn to_poll_config(&self) -> PollConfig {
        PollConfig {
            interval: Duration::from_millis(self.interval_ms),
            max_attempts: self.max_attempts,
            max_duration: self.max_duration_ms.map(Duration::from_millis),
        }
    }
}

impl ClientConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParseError(e.to_string()))
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Overlay `MILVUS_ADDRESS`, `MILVUS_USERNAME`, `MILVUS_PASSWORD`,
    /// `MILVUS_TOKEN` and `MILVUS_DATABASE` when they are set
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub(crate) fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(address) = lookup("MILVUS_ADDRESS") {
            self.address = address;
        }
        if let Some(username) = lookup("MILVUS_USERNAME") {
            self.username = Some(username);
        }
        if let Some(password) = lookup("MILVUS_PASSWORD") {
            self.password = Some(password);
        }
        if let Some(token) = lookup("MILVUS_TOKEN") {
            self.token = Some(token);
        }
        if let Some(database) = lookup("MILVUS_DATABASE") {
            self.database = Some(database);
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.address.trim().is_empty() {
            return Err(ValidationError::MissingAddress);
        }
        if self.username.is_some() != self.password.is_some() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(())
    }

    /// `host:port` with any `http://`/`https://` scheme removed and the
    /// default port appended when absent
    pub fn normalized_address(&self) -> String {
        let trimmed = self.address.trim().trim_end_matches('/');
        let bare = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed);
        if has_port(bare) {
            bare.to_string()
        } else {
            format!("{}:{}", bare, DEFAULT_PORT)
        }
    }

    pub fn poll_config(&self) -> PollConfig {
        self.poll.to_poll_config()
    }
}

fn has_port(address: &str) -> bool {
    // Bracketed IPv6 literals carry their own colons
    let host_end = address.rfind(']').map(|i| i + 1).unwrap_or(0);
    match address[host_end..].rfind(':') {
        Some(idx) => address[host_end + idx + 1..].parse::<u16>().is_ok(),
        None => false,
    }
}

/// Parse a timeout given either as plain milliseconds (`"1500"`) or as a
/// number followed by one of `s`, `m`, `h`, `d`, `w`, `M` (30 days) or
/// `Y` (365 days)
pub fn parse_time_token(token: &str) -> Result<Duration, ConfigError> {
    let token = token.trim();
    let invalid = || ConfigError::InvalidTimeToken(token.to_string());

    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse::<u64>().map(Duration::from_millis).map_err(|_| invalid());
    }

    let unit = token.chars().last().ok_or_else(invalid)?;
    let amount: u64 = token[..token.len() - unit.len_utf8()]
        .parse()
        .map_err(|_| invalid())?;
    let unit_ms: u64 = match unit {
        's' => 1_000,
        'm' => 60 * 1_000,
        'h' => 60 * 60 * 1_000,
        'd' => 24 * 60 * 60 * 1_000,
        'w' => 7 * 24 * 60 * 60 * 1_000,
        'M' => 30 * 24 * 60 * 60 * 1_000,
        'Y' => 365 * 24 * 60 * 60 * 1_000,
        _ => return Err(invalid()),
    };
    amount
        .checked_mul(unit_ms)
        .map(Duration::from_millis)
        .ok_or_else(invalid)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TimeValue {
    Millis(u64),
    Token(String),
}

fn deserialize_time_value<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    match TimeValue::deserialize(deserializer)? {
        TimeValue::Millis(ms) => Ok(Duration::from_millis(ms)),
        TimeValue::Token(token) => parse_time_token(&token).map_err(serde::de::Error::custom),
    }
}

fn serialize_millis<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(value.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_time_token_units() {
        assert_eq!(parse_time_token("1500").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_time_token("15s").unwrap(), Duration::from_secs(15));
        assert_eq!(parse_time_token("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_time_token("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_time_token("1d").unwrap(), Duration::from_secs(86_400));
        assert_eq!(parse_time_token("1w").unwrap(), Duration::from_secs(604_800));
        assert_eq!(parse_time_token("1M").unwrap(), Duration::from_secs(2_592_000));
        assert_eq!(parse_time_token("1Y").unwrap(), Duration::from_secs(31_536_000));
    }

    #[test]
    fn test_parse_time_token_rejects_garbage() {
        assert!(parse_time_token("").is_err());
        assert!(parse_time_token("10x").is_err());
        assert!(parse_time_token("s").is_err());
        assert!(parse_time_token("-5s").is_err());
    }

    #[test]
    fn test_toml_with_token_timeout_and_poll_table() {
        let config = ClientConfig::from_toml_str(
            r#"
            address = "https://milvus.local"
            timeout = "30s"

            [poll]
            interval_ms = 50
            max_attempts = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS));
        let poll = config.poll_config();
        assert_eq!(poll.interval, Duration::from_millis(50));
        assert_eq!(poll.max_attempts, Some(10));
        assert_eq!(poll.max_duration, None);
        assert_eq!(config.normalized_address(), "milvus.local:19530");
    }

    #[test]
    fn test_numeric_timeout_is_milliseconds() {
        let config = ClientConfig::from_toml_str("address = \"a:1\"\ntimeout = 2500").unwrap();
        assert_eq!(config.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_normalized_address_keeps_explicit_port() {
        assert_eq!(ClientConfig::new("http://10.0.0.1:19531").normalized_address(), "10.0.0.1:19531");
        assert_eq!(ClientConfig::new("localhost").normalized_address(), "localhost:19530");
        assert_eq!(ClientConfig::new("[::1]").normalized_address(), "[::1]:19530");
        assert_eq!(ClientConfig::new("[::1]:9000").normalized_address(), "[::1]:9000");
    }

    #[test]
    fn test_validate_requires_address() {
        assert_eq!(ClientConfig::default().validate(), Err(ValidationError::MissingAddress));
        let mut config = ClientConfig::new("localhost");
        config.username = Some("root".to_string());
        assert_eq!(config.validate(), Err(ValidationError::MissingCredentials));
        config.password = Some("Milvus".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = ClientConfig::new("file-host");
        let env: HashMap<&str, &str> =
            [("MILVUS_ADDRESS", "env-host:1"), ("MILVUS_DATABASE", "analytics")].into();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.address, "env-host:1");
        assert_eq!(config.database.as_deref(), Some("analytics"));
        assert_eq!(config.username, None);
    }
}
