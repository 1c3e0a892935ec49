// src/shared/error.rs
use sea_orm::DbErr;

/// Failures raised by the persistence adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    /// Unique index violation or lost optimistic-lock race.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl RepositoryError {
    pub fn from_db(e: DbErr) -> Self {
        let msg = e.to_string();
        let lower = msg.to_lowercase();

        if lower.contains("duplicate") || lower.contains("unique") || lower.contains("23505") {
            RepositoryError::Conflict(msg)
        } else {
            RepositoryError::DatabaseError(msg)
        }
    }
}

pub fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, RepositoryError> {
    serde_json::to_value(value).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

pub fn from_json<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T, RepositoryError> {
    serde_json::from_value(value).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

/// Stores a unit enum as its serde name in a text column.
pub fn to_text<T: serde::Serialize>(value: &T) -> Result<String, RepositoryError> {
    match to_json(value)? {
        serde_json::Value::String(s) => Ok(s),
        other => Err(RepositoryError::SerializationError(format!(
            "expected a string, got {other}"
        ))),
    }
}

pub fn from_text<T: serde::de::DeserializeOwned>(value: &str) -> Result<T, RepositoryError> {
    from_json(serde_json::Value::String(value.to_string()))
}

/// Service-level failures shared by every content module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl ContentError {
    pub fn validation(message: impl Into<String>) -> Self {
        ContentError::Validation(message.into())
    }

    pub fn not_found(label: &str) -> Self {
        ContentError::NotFound(format!("{label} not found"))
    }

    /// Lifts a store failure, naming the missing entity on NotFound.
    pub fn from_repository(err: RepositoryError, label: &str) -> Self {
        match err {
            RepositoryError::NotFound => ContentError::not_found(label),
            RepositoryError::Conflict(msg) => ContentError::Conflict(msg),
            RepositoryError::DatabaseError(msg) | RepositoryError::SerializationError(msg) => {
                ContentError::Repository(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err = RepositoryError::from_db(DbErr::Custom(
            "duplicate key value violates unique constraint \"idx_blogs_slug\"".into(),
        ));
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[test]
    fn other_db_errors_stay_database_errors() {
        let err = RepositoryError::from_db(DbErr::Custom("connection reset".into()));
        assert!(matches!(err, RepositoryError::DatabaseError(ref m) if m.contains("connection reset")));
    }

    #[test]
    fn enums_round_trip_through_text() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "kebab-case")]
        enum Kind {
            FullTime,
        }

        assert_eq!(to_text(&Kind::FullTime).unwrap(), "full-time");
        assert_eq!(from_text::<Kind>("full-time").unwrap(), Kind::FullTime);
        assert!(matches!(
            from_text::<Kind>("weekly"),
            Err(RepositoryError::SerializationError(_))
        ));
    }

    #[test]
    fn not_found_names_the_entity() {
        let err = ContentError::from_repository(RepositoryError::NotFound, "Project");
        assert_eq!(err, ContentError::NotFound("Project not found".into()));
        assert_eq!(err.to_string(), "Project not found");
    }
}
