//! Shared state for OIDC endpoint handlers.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::error::OidcResult;
use crate::provider::OidcProvider;
use crate::registration::NormalizedRegistration;

/// A persisted OAuth application record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Issued client identifier.
    pub client_id: String,

    /// Issued client secret.
    pub client_secret: String,

    /// Client name.
    pub name: String,

    /// Registered redirect URIs.
    pub redirect_uris: Vec<String>,

    /// Granted scope.
    pub scope: String,

    /// Whether the client can keep a secret. Dynamically registered
    /// clients are always public.
    pub confidential: bool,

    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Persistence seam for application records.
///
/// Implement this over your storage layer; [`InMemoryApplicationStore`]
/// is provided for tests and embedding.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Creates an application record from a validated registration.
    async fn create_application(
        &self,
        registration: NormalizedRegistration,
    ) -> OidcResult<Application>;
}

/// Shared state for OIDC endpoint handlers.
pub struct OidcState<S: ApplicationStore> {
    /// Provider core (configuration plus signing keys).
    pub provider: Arc<OidcProvider>,

    /// Application persistence.
    pub store: Arc<S>,
}

// Manual impl: the derived one would require `S: Clone`.
impl<S: ApplicationStore> Clone for OidcState<S> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ApplicationStore> OidcState<S> {
    /// Creates endpoint state.
    pub fn new(provider: Arc<OidcProvider>, store: S) -> Self {
        Self {
            provider,
            store: Arc::new(store),
        }
    }
}

/// In-memory application store.
#[derive(Debug, Default)]
pub struct InMemoryApplicationStore {
    applications: Mutex<Vec<Application>>,
}

impl InMemoryApplicationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored applications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.applications.lock().len()
    }

    /// Whether the store holds no applications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up an application by client id.
    #[must_use]
    pub fn find(&self, client_id: &str) -> Option<Application> {
        self.applications
            .lock()
            .iter()
            .find(|a| a.client_id == client_id)
            .cloned()
    }
}

#[async_trait]
impl ApplicationStore for InMemoryApplicationStore {
    async fn create_application(
        &self,
        registration: NormalizedRegistration,
    ) -> OidcResult<Application> {
        let application = Application {
            client_id: Uuid::new_v4().to_string(),
            client_secret: op_crypto::random::generate_client_secret(),
            name: registration.name,
            redirect_uris: registration.redirect_uris,
            scope: registration.scope.unwrap_or_default(),
            confidential: registration.confidential,
            created_at: Utc::now(),
        };
        self.applications.lock().push(application.clone());
        Ok(application)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_issues_unique_credentials() {
        let store = InMemoryApplicationStore::new();
        let registration = NormalizedRegistration {
            name: "client".to_string(),
            redirect_uris: vec!["https://test.host/cb".to_string()],
            scope: Some("openid".to_string()),
            confidential: false,
        };

        let first = store.create_application(registration.clone()).await.unwrap();
        let second = store.create_application(registration).await.unwrap();

        assert_ne!(first.client_id, second.client_id);
        assert_ne!(first.client_secret, second.client_secret);
        assert_eq!(store.len(), 2);
        assert_eq!(store.find(&first.client_id).unwrap(), first);
    }
}
