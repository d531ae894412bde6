use thiserror::Error;

/// Errors related to startup configuration.
///
/// Both variants are fatal: the session cannot start without a credential
/// and a usable data directory. They are reported to the user as
/// configuration errors, never as panics.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not set; export it and restart")]
    MissingCredential { var: String },

    #[error("data directory error: {0}")]
    DataDir(String),
}

/// Errors related to menu loading.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu file not found: {path}")]
    NotFound { path: String },

    #[error("menu file unreadable: {0}")]
    Unreadable(String),
}

/// Errors from repository operations (used by trait definitions in comanda-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors from order confirmation.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("nothing to record: the conversation is empty")]
    EmptyTranscript,

    #[error("could not store the order: {0}")]
    Storage(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingCredential {
            var: "DEEPSEEK_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("DEEPSEEK_API_KEY"));
    }

    #[test]
    fn test_menu_error_display() {
        let err = MenuError::NotFound {
            path: "menu.txt".to_string(),
        };
        assert_eq!(err.to_string(), "menu file not found: menu.txt");
    }

    #[test]
    fn test_order_error_from_repository() {
        let err: OrderError = RepositoryError::Query("disk full".to_string()).into();
        assert!(err.to_string().contains("disk full"));
    }
}
