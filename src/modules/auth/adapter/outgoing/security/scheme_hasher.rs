use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Verifies against whichever scheme produced the stored hash and hashes new
/// passwords with the first (preferred) scheme.
#[derive(Clone)]
pub struct SchemeHasher {
    schemes: Vec<Arc<dyn PasswordHasher>>,
}

impl SchemeHasher {
    pub fn new(preferred: Arc<dyn PasswordHasher>, others: Vec<Arc<dyn PasswordHasher>>) -> Self {
        let mut schemes = vec![preferred];
        schemes.extend(others);
        Self { schemes }
    }

    fn scheme_for(&self, hash: &str) -> Option<&Arc<dyn PasswordHasher>> {
        self.schemes.iter().find(|s| s.recognizes(hash))
    }
}

#[async_trait]
impl PasswordHasher for SchemeHasher {
    fn recognizes(&self, hash: &str) -> bool {
        self.scheme_for(hash).is_some()
    }

    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.schemes[0].hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        match self.scheme_for(hash) {
            Some(scheme) => scheme.verify_password(password, hash).await,
            None => Err(HashError::UnsupportedScheme),
        }
    }
}
