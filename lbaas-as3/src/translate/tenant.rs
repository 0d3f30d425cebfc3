use std::collections::BTreeMap;

use as3_declaration::{Adc, Envelope, Tenant};

use crate::bundle::Bundle;
use crate::error::TranslateError;
use crate::ids::IdGenerator;
use crate::sanitize::{application_name, tenant_name};
use crate::settings::DeclarationSettings;
use crate::translate::application::build_application;

/// Build the full request envelope for the bundle's load balancer.
///
/// The declaration holds one tenant `T_<lb>` wrapping one application `A_<lb>`.
pub fn build_envelope(
    bundle: &Bundle,
    settings: &DeclarationSettings,
    ids: &dyn IdGenerator,
) -> Result<Envelope, TranslateError> {
    let lb_id = &bundle.loadbalancer.id;
    let app = build_application(bundle, &settings.template)?;

    let mut tenant = Tenant::default();
    tenant.insert(application_name(lb_id), app);

    Ok(Envelope {
        action: settings.action.clone(),
        declaration: Adc {
            schema_version: settings.schema_version.clone(),
            update_mode: settings.update_mode.clone(),
            id: ids.generate().urn().to_string(),
            tenants: BTreeMap::from([(tenant_name(lb_id), tenant)]),
        },
    })
}
