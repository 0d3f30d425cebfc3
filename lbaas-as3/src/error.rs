use std::fmt::{self, Display, Formatter};

use thiserror::Error;

/// Kind of bundle entity that can be looked up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Pool,
    Member,
    Listener,
    HealthMonitor,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Pool => "pool",
            EntityKind::Member => "member",
            EntityKind::Listener => "listener",
            EntityKind::HealthMonitor => "health monitor",
        };
        f.write_str(label)
    }
}

/// Errors that abort a translation.
///
/// A missing referenced entity fails the whole translation; no partial
/// declaration is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: String },
}

impl TranslateError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        TranslateError::NotFound {
            kind,
            id: id.into(),
        }
    }
}
