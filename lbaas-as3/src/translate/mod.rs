//! Bundle to declaration translation.
//!
//! Translation is a single top-down pass rooted at the load balancer:
//! tenant, application, one service per listener, the listener's default
//! pool, and that pool's members and health monitor. Every builder returns
//! its own sub-document (or named entries) and the caller merges them, so
//! builders can be exercised independently.
//!
//! The first unresolved reference aborts the whole translation; a partial
//! declaration is never returned.

pub mod application;
pub mod member;
pub mod monitor;
pub mod pool;
pub mod service;
pub mod tenant;

use as3_declaration::Envelope;
use tracing::info;

use crate::bundle::Bundle;
use crate::error::TranslateError;
use crate::ids::IdGenerator;
use crate::settings::DeclarationSettings;

/// Translate `bundle` into a declaration envelope.
pub fn translate(
    bundle: &Bundle,
    settings: &DeclarationSettings,
    ids: &dyn IdGenerator,
) -> Result<Envelope, TranslateError> {
    info!(
        loadbalancer = %bundle.loadbalancer.id,
        listeners = bundle.loadbalancer.listeners.len(),
        "translating bundle"
    );
    tenant::build_envelope(bundle, settings, ids)
}
