use as3_declaration::Application;

use crate::bundle::Bundle;
use crate::error::TranslateError;
use crate::translate::service::build_services;

/// Build the application holding every service, pool and monitor of the
/// bundle's load balancer.
pub fn build_application(bundle: &Bundle, template: &str) -> Result<Application, TranslateError> {
    let mut app = Application::new(template);
    app.extend(build_services(bundle)?);
    Ok(app)
}

#[cfg(test)]
mod tests {
    use crate::bundle::Listener;
    use crate::translate::fixtures::{listener, sample_bundle};

    use super::build_application;

    #[test]
    fn collects_all_objects() {
        let bundle = sample_bundle();
        let app = build_application(&bundle, "generic").expect("build");

        assert_eq!(app.template, "generic");
        let names: Vec<&str> = app.objects.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["HM_hm1", "P_p1", "S_l1"]);
    }

    #[test]
    fn shared_pool_is_emitted_once() {
        let mut bundle = sample_bundle();
        bundle.listeners.push(listener("l2", "TCP", 8443, "p1"));
        bundle.loadbalancer.listeners.push(Listener {
            id: "l2".to_string(),
            ..Listener::default()
        });

        let app = build_application(&bundle, "generic").expect("build");
        assert_eq!(app.objects.len(), 4);
        assert_eq!(
            app.service("S_l2").and_then(|s| s.pool.as_deref()),
            Some("P_p1")
        );
        assert!(app.pool("P_p1").is_some());
    }

    #[test]
    fn load_balancer_without_listeners_yields_empty_application() {
        let mut bundle = sample_bundle();
        bundle.loadbalancer.listeners.clear();

        let app = build_application(&bundle, "shared").expect("build");
        assert!(app.objects.is_empty());
        assert_eq!(app.template, "shared");
    }
}
