//! Load balancer bundle to AS3 declaration translation.
//!
//! A bundle describes one load balancer with its listeners, pools, members
//! and health monitors, cross-referenced by id. This crate resolves those
//! references and builds the AS3 declaration an application delivery
//! controller consumes, using the typed model from `as3-declaration`.
//!
//! # Modules
//!
//! - [`bundle`]: Input model and JSON loader
//! - [`resolve`]: Entity lookup by id
//! - [`sanitize`]: Declaration object naming (`T_`, `A_`, `S_`, `P_`, `HM_`)
//! - [`translate`]: Tenant, application, service, pool, member and monitor builders
//! - [`settings`]: Envelope settings with TOML overrides
//! - [`ids`]: Declaration id generation
//! - [`conversion_summary`]: Object counts for a built declaration
//!
//! # Examples
//!
//! ```ignore
//! use lbaas_as3::bundle::load_bundle;
//! use lbaas_as3::ids::RandomIds;
//! use lbaas_as3::settings::DeclarationSettings;
//! use lbaas_as3::translate::translate;
//!
//! let bundle = load_bundle(Path::new("bundle.json"))?;
//! let envelope = translate(&bundle, &DeclarationSettings::default(), &RandomIds)?;
//! let json = as3_declaration::write(&envelope, as3_declaration::WriteStyle::Pretty)?;
//! ```

pub mod bundle;
pub mod conversion_summary;
pub mod error;
pub mod ids;
pub mod resolve;
pub mod sanitize;
pub mod settings;
pub mod translate;

pub use error::{EntityKind, TranslateError};
