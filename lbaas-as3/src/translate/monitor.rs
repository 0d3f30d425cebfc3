use as3_declaration::{Monitor, MonitorType};
use tracing::debug;

use crate::bundle::{Bundle, HealthMonitorType};
use crate::error::TranslateError;

/// Build the monitor object for health monitor `id`.
pub fn build_monitor(bundle: &Bundle, id: &str) -> Result<Monitor, TranslateError> {
    let found = bundle.health_monitor(id)?;
    let monitor_type = monitor_type(&found.monitor_type);
    if monitor_type.is_none() {
        debug!(healthmonitor = id, kind = ?found.monitor_type, "monitor type has no mapping");
    }

    Ok(Monitor {
        timeout: found.timeout,
        interval: found.delay,
        monitor_type,
    })
}

/// Map a health monitor type onto the declaration vocabulary.
pub fn monitor_type(kind: &HealthMonitorType) -> Option<MonitorType> {
    match kind {
        HealthMonitorType::Ping => Some(MonitorType::Icmp),
        HealthMonitorType::Http => Some(MonitorType::Http),
        HealthMonitorType::Tcp => Some(MonitorType::Tcp),
        HealthMonitorType::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use as3_declaration::{Monitor, MonitorType};
    use pretty_assertions::assert_eq;

    use crate::bundle::HealthMonitorType;
    use crate::translate::fixtures::{health_monitor, sample_bundle};

    use super::{build_monitor, monitor_type};

    #[test]
    fn copies_timing_and_maps_type() {
        let bundle = sample_bundle();
        let monitor = build_monitor(&bundle, "hm1").expect("hm1 exists");
        assert_eq!(
            monitor,
            Monitor {
                timeout: 3,
                interval: 5,
                monitor_type: Some(MonitorType::Http),
            }
        );
    }

    #[test]
    fn maps_every_known_type() {
        assert_eq!(monitor_type(&HealthMonitorType::Ping), Some(MonitorType::Icmp));
        assert_eq!(monitor_type(&HealthMonitorType::Http), Some(MonitorType::Http));
        assert_eq!(monitor_type(&HealthMonitorType::Tcp), Some(MonitorType::Tcp));
        assert_eq!(
            monitor_type(&HealthMonitorType::Other("HTTPS".to_string())),
            None
        );
    }

    #[test]
    fn unmapped_type_leaves_monitor_type_empty() {
        let mut bundle = sample_bundle();
        bundle
            .healthmonitors
            .push(health_monitor("hm-udp", "UDP-CONNECT", 10, 4));
        let monitor = build_monitor(&bundle, "hm-udp").expect("exists");
        assert_eq!(monitor.monitor_type, None);
        assert_eq!(monitor.interval, 10);
        assert_eq!(monitor.timeout, 4);
    }

    #[test]
    fn missing_monitor_is_not_found() {
        let bundle = sample_bundle();
        let err = build_monitor(&bundle, "nope").expect_err("missing");
        assert_eq!(err.to_string(), "health monitor nope not found");
    }
}
