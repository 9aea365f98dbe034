use std::sync::Arc;

use oauthgate_auth::{PipelineConfig, ValidationPipeline};
use oauthgate_core::StoreError;
use oauthgate_infra::{GateConfig, InMemoryCredentialStore};

/// Shared state for every handler: the credential store and the pipeline
/// that guards account operations against it.
#[derive(Clone)]
pub struct AppServices {
    pub store: Arc<InMemoryCredentialStore>,
    pub pipeline: Arc<ValidationPipeline>,
}

impl AppServices {
    pub fn new(store: Arc<InMemoryCredentialStore>, config: PipelineConfig) -> Self {
        let pipeline = Arc::new(ValidationPipeline::from_store(store.clone(), config));
        Self { store, pipeline }
    }

    /// Fresh in-memory store seeded from `config`.
    pub fn from_config(config: &GateConfig) -> Result<Self, StoreError> {
        let store = Arc::new(InMemoryCredentialStore::new());
        config.seed(&store)?;
        Ok(Self::new(store, config.pipeline))
    }
}
