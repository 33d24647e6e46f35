//! Domain error types
//!
//! Business-level failures surfaced by the catalog service and the
//! repository layer. Framework concerns (HTTP status codes) live in the
//! api layer.

use std::fmt;

/// The entity a lookup failed for. Carried on [`DomainError::NotFound`] so
/// callers can build a precise message without parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Book,
    Author,
    Publisher,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Book => write!(f, "Book"),
            EntityKind::Author => write!(f, "Author"),
            EntityKind::Publisher => write!(f, "Publisher"),
        }
    }
}

#[derive(Debug)]
pub enum DomainError {
    /// Lookup by identifier failed
    NotFound { entity: EntityKind, id: i32 },
    /// A uniqueness constraint would be violated
    Duplicate { detail: String },
    /// Database/persistence error
    Database(String),
}

impl DomainError {
    pub fn not_found(entity: EntityKind, id: i32) -> Self {
        DomainError::NotFound { entity, id }
    }

    pub fn duplicate(detail: impl Into<String>) -> Self {
        DomainError::Duplicate {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound { entity, id } => {
                write!(f, "{} not found with id: {}", entity, id)
            }
            DomainError::Duplicate { detail } => write!(f, "{}", detail),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
