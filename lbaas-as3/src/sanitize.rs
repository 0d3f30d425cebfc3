//! Object naming for declaration entries.
//!
//! Every object placed into a declaration is named `<PREFIX>_<id>`, where the
//! id has each `-` replaced by `_`.

/// Replace every dash in `id` with an underscore.
pub fn sanitize_id(id: &str) -> String {
    id.replace('-', "_")
}

pub fn tenant_name(loadbalancer_id: &str) -> String {
    format!("T_{}", sanitize_id(loadbalancer_id))
}

pub fn application_name(loadbalancer_id: &str) -> String {
    format!("A_{}", sanitize_id(loadbalancer_id))
}

pub fn service_name(listener_id: &str) -> String {
    format!("S_{}", sanitize_id(listener_id))
}

pub fn pool_name(pool_id: &str) -> String {
    format!("P_{}", sanitize_id(pool_id))
}

pub fn monitor_name(healthmonitor_id: &str) -> String {
    format!("HM_{}", sanitize_id(healthmonitor_id))
}
