//! Typed AS3 declaration documents and their JSON rendering.
//!
//! The model mirrors the declaration nesting: an [`Envelope`] carries one
//! [`Adc`] declaration, which holds [`Tenant`]s, which hold [`Application`]s,
//! which hold named services, pools and monitors. Named children live in
//! ordered maps, so structurally equal documents compare equal and always
//! serialize identically.

pub mod tree;
pub mod writer;

pub use tree::{
    Adc, AppObject, Application, Envelope, LoadBalancingMode, Monitor, MonitorRef, MonitorType,
    Pool, PoolMember, Service, ServiceClass, Tenant,
};
pub use writer::{to_value, write, write_file, WriteError, WriteStyle};
