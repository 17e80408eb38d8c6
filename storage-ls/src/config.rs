/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cmp;
use std::sync::Arc;

use crate::backend::StorageBackend;
use crate::error::BuildError;

/// Number of records the storage API returns per object listing page
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    page_limit: usize,
    backend: Arc<dyn StorageBackend>,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the page size used for object listings.
    ///
    /// A page of exactly this many records signals that another page follows.
    pub fn page_limit(&self) -> usize {
        self.page_limit
    }

    /// The storage backend that will be used to send listing requests.
    pub fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    page_limit: Option<usize>,
    backend: Option<Arc<dyn StorageBackend>>,
}

impl Builder {
    /// Set the page size used for object listings.
    ///
    /// This must match the page size the backend applies. A limit of zero is
    /// rounded up to one. Default is [`DEFAULT_PAGE_LIMIT`].
    pub fn page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = Some(cmp::max(page_limit, 1));
        self
    }

    /// Set the storage backend to use.
    pub fn backend(mut self, backend: impl StorageBackend + 'static) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    /// Set a shared storage backend to use.
    pub fn set_backend(mut self, backend: Option<Arc<dyn StorageBackend>>) -> Self {
        self.backend = backend;
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    pub fn build(self) -> Result<Config, BuildError> {
        let backend = self.backend.ok_or_else(|| {
            BuildError::missing_field("backend", "A storage backend is required")
        })?;

        Ok(Config {
            page_limit: self.page_limit.unwrap_or(DEFAULT_PAGE_LIMIT),
            backend,
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::{Config, DEFAULT_PAGE_LIMIT};
    use crate::backend::{ListObjectsRequest, StorageBackend};
    use crate::error::BoxError;
    use crate::types::{Bucket, ProjectRef, StorageObject};

    #[derive(Debug)]
    struct NoopBackend;

    #[async_trait]
    impl StorageBackend for NoopBackend {
        async fn list_buckets(&self, _: &ProjectRef) -> Result<Vec<Bucket>, BoxError> {
            Ok(Vec::new())
        }

        async fn list_objects(
            &self,
            _: &ProjectRef,
            _: &ListObjectsRequest,
        ) -> Result<Vec<StorageObject>, BoxError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::builder().backend(NoopBackend).build().unwrap();
        assert_eq!(config.page_limit(), DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_zero_page_limit_rounds_up() {
        let config = Config::builder()
            .backend(NoopBackend)
            .page_limit(0)
            .build()
            .unwrap();
        assert_eq!(config.page_limit(), 1);
    }

    #[test]
    fn test_missing_backend() {
        let err = Config::builder().build().unwrap_err();
        assert!(err.to_string().contains("A storage backend is required"));
    }
}
