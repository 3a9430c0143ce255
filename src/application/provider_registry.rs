//! Registry of catalog providers keyed by content type.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::ContentType;
use crate::ports::{MediaProvider, ProviderError};

/// Providers available to handlers, one per content type.
#[derive(Clone, Default)]
pub struct MediaProviders {
    providers: HashMap<ContentType, Arc<dyn MediaProvider>>,
}

impl MediaProviders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider under the content type it reports.
    pub fn with_provider(mut self, provider: Arc<dyn MediaProvider>) -> Self {
        self.providers.insert(provider.content_type(), provider);
        self
    }

    /// Provider for `content_type`.
    pub fn get(&self, content_type: ContentType) -> Result<Arc<dyn MediaProvider>, ProviderError> {
        self.providers
            .get(&content_type)
            .cloned()
            .ok_or(ProviderError::NotConfigured(content_type))
    }
}

impl std::fmt::Debug for MediaProviders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaProviders")
            .field("content_types", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}
