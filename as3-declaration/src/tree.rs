use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Top-level AS3 request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Request action, usually `deploy`.
    pub action: String,
    /// The `ADC` declaration carried by the request.
    pub declaration: Adc,
}

/// The `ADC` class object: document metadata plus tenants keyed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adc {
    pub schema_version: String,
    pub update_mode: String,
    /// Declaration id, formatted as a URN.
    pub id: String,
    pub tenants: BTreeMap<String, Tenant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tenant {
    pub applications: BTreeMap<String, Application>,
}

/// An `Application` class object holding services, pools and monitors by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub template: String,
    pub objects: BTreeMap<String, AppObject>,
}

/// A named object living directly under an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppObject {
    Service(Service),
    Pool(Pool),
    Monitor(Monitor),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// `None` when the listener protocol has no service class mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<ServiceClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_port: Option<u16>,
    pub virtual_addresses: Vec<String>,
    /// Name of the pool object this service forwards to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceClass {
    #[serde(rename = "Service_HTTP")]
    Http,
    #[serde(rename = "Service_TCP")]
    Tcp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub load_balancing_mode: LoadBalancingMode,
    pub monitors: Vec<MonitorRef>,
    pub members: Vec<PoolMember>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadBalancingMode {
    #[serde(rename = "round-robin")]
    RoundRobin,
    #[serde(rename = "least-connections-member")]
    LeastConnectionsMember,
}

/// Reference from a pool to a monitor object in the same application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitorRef {
    #[serde(rename = "use")]
    pub use_name: String,
}

impl MonitorRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            use_name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolMember {
    pub service_port: u16,
    pub server_addresses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    /// Probe timeout in seconds.
    pub timeout: i64,
    /// Probe interval in seconds.
    pub interval: i64,
    /// `None` when the source monitor type has no mapping.
    pub monitor_type: Option<MonitorType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorType {
    Icmp,
    Http,
    Tcp,
}

impl Tenant {
    /// Insert an application, replacing any existing one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, application: Application) {
        self.applications.insert(name.into(), application);
    }
}

impl Application {
    /// Create an empty application using the given template.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            objects: BTreeMap::new(),
        }
    }

    /// Insert a named object, replacing any existing one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, object: impl Into<AppObject>) {
        self.objects.insert(name.into(), object.into());
    }

    /// Merge a batch of named objects in order.
    pub fn extend<I>(&mut self, objects: I)
    where
        I: IntoIterator<Item = (String, AppObject)>,
    {
        self.objects.extend(objects);
    }

    pub fn service(&self, name: &str) -> Option<&Service> {
        match self.objects.get(name)? {
            AppObject::Service(service) => Some(service),
            _ => None,
        }
    }

    pub fn pool(&self, name: &str) -> Option<&Pool> {
        match self.objects.get(name)? {
            AppObject::Pool(pool) => Some(pool),
            _ => None,
        }
    }

    pub fn monitor(&self, name: &str) -> Option<&Monitor> {
        match self.objects.get(name)? {
            AppObject::Monitor(monitor) => Some(monitor),
            _ => None,
        }
    }
}

impl Adc {
    /// Return the application `app` inside tenant `tenant`.
    pub fn application(&self, tenant: &str, app: &str) -> Option<&Application> {
        self.tenants.get(tenant)?.applications.get(app)
    }
}

impl From<Service> for AppObject {
    fn from(value: Service) -> Self {
        AppObject::Service(value)
    }
}

impl From<Pool> for AppObject {
    fn from(value: Pool) -> Self {
        AppObject::Pool(value)
    }
}

impl From<Monitor> for AppObject {
    fn from(value: Monitor) -> Self {
        AppObject::Monitor(value)
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("class", "AS3")?;
        map.serialize_entry("action", &self.action)?;
        map.serialize_entry("declaration", &self.declaration)?;
        map.end()
    }
}

impl Serialize for Adc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4 + self.tenants.len()))?;
        map.serialize_entry("class", "ADC")?;
        map.serialize_entry("schemaVersion", &self.schema_version)?;
        map.serialize_entry("updateMode", &self.update_mode)?;
        map.serialize_entry("id", &self.id)?;
        for (name, tenant) in &self.tenants {
            map.serialize_entry(name, tenant)?;
        }
        map.end()
    }
}

impl Serialize for Tenant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.applications.len()))?;
        map.serialize_entry("class", "Tenant")?;
        for (name, app) in &self.applications {
            map.serialize_entry(name, app)?;
        }
        map.end()
    }
}

impl Serialize for Application {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.objects.len()))?;
        map.serialize_entry("class", "Application")?;
        map.serialize_entry("template", &self.template)?;
        for (name, object) in &self.objects {
            map.serialize_entry(name, object)?;
        }
        map.end()
    }
}

impl Serialize for AppObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AppObject::Service(service) => service.serialize(serializer),
            AppObject::Pool(pool) => pool.serialize(serializer),
            AppObject::Monitor(monitor) => monitor.serialize(serializer),
        }
    }
}

impl Serialize for Pool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("class", "Pool")?;
        map.serialize_entry("loadBalancingMode", &self.load_balancing_mode)?;
        map.serialize_entry("monitors", &self.monitors)?;
        map.serialize_entry("members", &self.members)?;
        map.end()
    }
}

impl Serialize for Monitor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.monitor_type.is_some() { 4 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("class", "Monitor")?;
        map.serialize_entry("timeout", &self.timeout)?;
        map.serialize_entry("interval", &self.interval)?;
        if let Some(monitor_type) = &self.monitor_type {
            map.serialize_entry("monitorType", monitor_type)?;
        }
        map.end()
    }
}
