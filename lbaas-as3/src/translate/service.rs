use as3_declaration::{AppObject, Service, ServiceClass};
use tracing::{debug, warn};

use crate::bundle::{Bundle, Protocol};
use crate::error::TranslateError;
use crate::sanitize::{pool_name, service_name};
use crate::translate::pool::build_pool;

/// Build one service per load balancer listener, plus the pools and monitors
/// those services reference.
///
/// Listeners are visited in the load balancer's order and each is resolved
/// from the bundle's flat listener collection. Returned entries are in build
/// order: for each listener, its pool entries followed by the service.
pub fn build_services(bundle: &Bundle) -> Result<Vec<(String, AppObject)>, TranslateError> {
    let mut entries = Vec::new();
    let vip = &bundle.loadbalancer.vip_address;

    for embedded in &bundle.loadbalancer.listeners {
        let found = bundle.listener(&embedded.id)?;

        let class = service_class(&found.protocol);
        if class.is_none() {
            warn!(listener = %found.id, protocol = ?found.protocol, "listener protocol has no service class");
        }
        let virtual_port = match found.protocol {
            Protocol::Tcp => Some(found.protocol_port),
            Protocol::Http | Protocol::Other(_) => None,
        };

        let pool = if found.default_pool_id.is_empty() {
            None
        } else {
            entries.extend(build_pool(bundle, &found.default_pool_id)?);
            Some(pool_name(&found.default_pool_id))
        };

        let service = Service {
            class,
            virtual_port,
            virtual_addresses: vec![vip.clone()],
            pool,
        };
        debug!(listener = %found.id, class = ?service.class, "built service");
        entries.push((service_name(&found.id), service.into()));
    }

    Ok(entries)
}

/// Map a listener protocol onto a service class.
pub fn service_class(protocol: &Protocol) -> Option<ServiceClass> {
    match protocol {
        Protocol::Http => Some(ServiceClass::Http),
        Protocol::Tcp => Some(ServiceClass::Tcp),
        Protocol::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use as3_declaration::{AppObject, Service, ServiceClass};
    use pretty_assertions::assert_eq;

    use crate::bundle::{Listener, Protocol};
    use crate::error::{EntityKind, TranslateError};
    use crate::translate::fixtures::{listener, sample_bundle};

    use super::{build_services, service_class};

    fn service<'a>(entries: &'a [(String, AppObject)], name: &str) -> &'a Service {
        let (_, object) = entries
            .iter()
            .find(|(n, _)| n == name)
            .unwrap_or_else(|| panic!("{name} not built"));
        match object {
            AppObject::Service(service) => service,
            other => panic!("expected service, got {other:?}"),
        }
    }

    #[test]
    fn http_listener_builds_service_with_pool() {
        let bundle = sample_bundle();
        let entries = build_services(&bundle).expect("build");

        let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["P_p1", "HM_hm1", "S_l1"]);
        assert_eq!(
            service(&entries, "S_l1"),
            &Service {
                class: Some(ServiceClass::Http),
                virtual_port: None,
                virtual_addresses: vec!["10.0.0.1".to_string()],
                pool: Some("P_p1".to_string()),
            }
        );
    }

    #[test]
    fn tcp_listener_sets_virtual_port() {
        let mut bundle = sample_bundle();
        bundle.listeners.push(listener("l-tcp", "TCP", 5432, ""));
        bundle.loadbalancer.listeners.push(Listener {
            id: "l-tcp".to_string(),
            ..Listener::default()
        });

        let entries = build_services(&bundle).expect("build");
        let tcp = service(&entries, "S_l_tcp");
        assert_eq!(tcp.class, Some(ServiceClass::Tcp));
        assert_eq!(tcp.virtual_port, Some(5432));
        assert_eq!(tcp.pool, None);
        assert_eq!(tcp.virtual_addresses, vec!["10.0.0.1".to_string()]);
    }

    #[test]
    fn unmapped_protocol_has_no_class() {
        let mut bundle = sample_bundle();
        bundle.listeners[0].protocol = Protocol::Other("TERMINATED_HTTPS".to_string());

        let entries = build_services(&bundle).expect("build");
        let built = service(&entries, "S_l1");
        assert_eq!(built.class, None);
        assert_eq!(built.virtual_port, None);
        assert_eq!(built.pool, Some("P_p1".to_string()));
    }

    #[test]
    fn resolved_listener_is_authoritative() {
        let mut bundle = sample_bundle();
        bundle.loadbalancer.listeners[0].protocol = Protocol::Tcp;
        bundle.loadbalancer.listeners[0].protocol_port = 1;

        let entries = build_services(&bundle).expect("build");
        assert_eq!(service(&entries, "S_l1").class, Some(ServiceClass::Http));
    }

    #[test]
    fn missing_listener_is_not_found() {
        let mut bundle = sample_bundle();
        bundle.listeners.clear();
        assert_eq!(
            build_services(&bundle),
            Err(TranslateError::not_found(EntityKind::Listener, "l1"))
        );
    }

    #[test]
    fn missing_default_pool_is_not_found() {
        let mut bundle = sample_bundle();
        bundle.listeners[0].default_pool_id = "p-gone".to_string();
        assert_eq!(
            build_services(&bundle),
            Err(TranslateError::not_found(EntityKind::Pool, "p-gone"))
        );
    }

    #[test]
    fn maps_protocols() {
        assert_eq!(service_class(&Protocol::Http), Some(ServiceClass::Http));
        assert_eq!(service_class(&Protocol::Tcp), Some(ServiceClass::Tcp));
        assert_eq!(service_class(&Protocol::Other("UDP".to_string())), None);
    }
}
