//! Load balancer bundle input model.
//!
//! A bundle describes one load balancer together with flat lookup collections
//! for its listeners, pools, members and health monitors. Entities embedded in
//! the load balancer (and members embedded in pools) are shallow copies; the
//! flat collections are authoritative and are what the resolver searches.
//!
//! Object keys match case-insensitively, so `Loadbalancer`, `Id` or
//! `VIP_ADDRESS` decode the same as their lowercase wire names. Missing fields
//! and JSON `null` both decode to the field's default value.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Bundle {
    #[serde(deserialize_with = "nullable")]
    pub loadbalancer: LoadBalancer,
    #[serde(deserialize_with = "nullable")]
    pub listeners: Vec<Listener>,
    #[serde(deserialize_with = "nullable")]
    pub pools: Vec<Pool>,
    #[serde(deserialize_with = "nullable")]
    pub members: Vec<Member>,
    #[serde(deserialize_with = "nullable")]
    pub healthmonitors: Vec<HealthMonitor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadBalancer {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub pools: Vec<Pool>,
    #[serde(deserialize_with = "nullable")]
    pub listeners: Vec<Listener>,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub vip_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Listener {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub protocol: Protocol,
    #[serde(deserialize_with = "nullable")]
    pub protocol_port: u16,
    /// Empty when the listener has no default pool.
    #[serde(deserialize_with = "nullable")]
    pub default_pool_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pool {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub healthmonitor_id: String,
    /// Embedded member copies; only their ids are used.
    #[serde(deserialize_with = "nullable")]
    pub members: Vec<Member>,
    #[serde(deserialize_with = "nullable")]
    pub lb_algorithm: LbAlgorithm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Member {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub address: String,
    #[serde(deserialize_with = "nullable")]
    pub protocol_port: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HealthMonitor {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub monitor_type: HealthMonitorType,
    /// Probe interval in seconds.
    #[serde(deserialize_with = "nullable")]
    pub delay: i64,
    #[serde(deserialize_with = "nullable")]
    pub expected_codes: String,
    #[serde(deserialize_with = "nullable")]
    pub max_retries: i64,
    #[serde(deserialize_with = "nullable")]
    pub http_method: String,
    /// Probe timeout in seconds.
    #[serde(deserialize_with = "nullable")]
    pub timeout: i64,
    #[serde(deserialize_with = "nullable")]
    pub url_path: String,
}

/// Listener protocol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Protocol {
    Http,
    Tcp,
    Other(String),
}

/// Pool load-balancing algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LbAlgorithm {
    #[default]
    RoundRobin,
    LeastConnections,
    Other(String),
}

/// Health monitor probe type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum HealthMonitorType {
    Ping,
    Http,
    Tcp,
    Other(String),
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol::Other(String::new())
    }
}

impl Default for HealthMonitorType {
    fn default() -> Self {
        HealthMonitorType::Other(String::new())
    }
}

impl From<String> for Protocol {
    fn from(value: String) -> Self {
        match value.as_str() {
            "HTTP" => Protocol::Http,
            "TCP" => Protocol::Tcp,
            _ => Protocol::Other(value),
        }
    }
}

impl From<String> for LbAlgorithm {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ROUND_ROBIN" => LbAlgorithm::RoundRobin,
            "LEAST_CONNECTIONS" => LbAlgorithm::LeastConnections,
            _ => LbAlgorithm::Other(value),
        }
    }
}

impl From<String> for HealthMonitorType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PING" => HealthMonitorType::Ping,
            "HTTP" => HealthMonitorType::Http,
            "TCP" => HealthMonitorType::Tcp,
            _ => HealthMonitorType::Other(value),
        }
    }
}

/// Decode `null` as the type's default value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lowercase every object key, recursively.
///
/// The bundle schema has no free-form maps, so every key is a field name.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), fold_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

/// Errors returned when loading a bundle file.
#[derive(Debug, Error)]
pub enum BundleLoadError {
    #[error("failed to read bundle file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse bundle {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load a bundle from a JSON file.
pub fn load_bundle(path: &Path) -> Result<Bundle, BundleLoadError> {
    let raw = fs::read(path).map_err(|source| BundleLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "read bundle file");

    parse_bundle_from(&raw, path.display().to_string())
}

/// Parse a bundle from JSON bytes.
pub fn parse_bundle(raw: &[u8]) -> Result<Bundle, BundleLoadError> {
    parse_bundle_from(raw, "<memory>".to_string())
}

fn parse_bundle_from(raw: &[u8], path: String) -> Result<Bundle, BundleLoadError> {
    let bundle: Bundle = serde_json::from_slice::<Value>(raw)
        .map(fold_keys)
        .and_then(serde_json::from_value)
        .map_err(|source| BundleLoadError::Parse { path, source })?;
    debug!(
        loadbalancer = %bundle.loadbalancer.id,
        listeners = bundle.listeners.len(),
        pools = bundle.pools.len(),
        members = bundle.members.len(),
        healthmonitors = bundle.healthmonitors.len(),
        "parsed bundle"
    );
    Ok(bundle)
}
