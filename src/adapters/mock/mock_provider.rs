//! Mock Media Provider for testing.
//!
//! Holds a tracked list and a canned set of search results, records every
//! call, and can be switched into a failing mode.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockMediaProvider::new()
//!     .with_tracked(MovieResult::new("Dune", 2021, "dune-2021"));
//!
//! let found = provider.list("dune").await?;
//! assert_eq!(found.len(), 1);
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::catalog::MovieResult;
use crate::domain::foundation::ContentType;
use crate::ports::{MediaProvider, ProviderError};

/// A recorded provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    List(String),
    Search(String),
    Add(String),
}

/// Mock catalog provider.
#[derive(Debug, Clone, Default)]
pub struct MockMediaProvider {
    tracked: Arc<Mutex<Vec<MovieResult>>>,
    search_results: Arc<Mutex<Vec<MovieResult>>>,
    failure: Arc<Mutex<Option<ProviderError>>>,
    calls: Arc<Mutex<Vec<ProviderCall>>>,
}

impl MockMediaProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item to the tracked list.
    pub fn with_tracked(self, item: MovieResult) -> Self {
        self.tracked.lock().unwrap().push(item);
        self
    }

    /// Sets the results every search returns.
    pub fn with_search_results(self, results: Vec<MovieResult>) -> Self {
        *self.search_results.lock().unwrap() = results;
        self
    }

    /// Makes every call fail with `error`.
    pub fn failing_with(self, error: ProviderError) -> Self {
        *self.failure.lock().unwrap() = Some(error);
        self
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Items currently on the tracked list.
    pub fn tracked(&self) -> Vec<MovieResult> {
        self.tracked.lock().unwrap().clone()
    }

    fn record(&self, call: ProviderCall) -> Result<(), ProviderError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MediaProvider for MockMediaProvider {
    fn content_type(&self) -> ContentType {
        ContentType::Movies
    }

    async fn list(&self, name: &str) -> Result<Vec<MovieResult>, ProviderError> {
        self.record(ProviderCall::List(name.to_string()))?;
        Ok(self
            .tracked
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.title_matches(name))
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieResult>, ProviderError> {
        self.record(ProviderCall::Search(query.to_string()))?;
        Ok(self.search_results.lock().unwrap().clone())
    }

    async fn add(&self, item: &MovieResult) -> Result<MovieResult, ProviderError> {
        self.record(ProviderCall::Add(item.slug.clone()))?;
        self.tracked.lock().unwrap().push(item.clone());
        Ok(item.clone())
    }
}
