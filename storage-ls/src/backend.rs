/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use async_trait::async_trait;

use crate::error::BoxError;
use crate::types::{Bucket, ProjectRef, StorageObject};

/// Request for a single page of a single-level object listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ListObjectsRequest {
    /// Bucket to list
    pub bucket: String,

    /// Intra-bucket prefix. Everything up to the last `/` selects the directory to list,
    /// the remainder restricts results to names starting with it.
    pub prefix: String,

    /// Zero based page index
    pub page: usize,

    /// Maximum number of records the backend returns per page
    pub page_limit: usize,
}

impl ListObjectsRequest {
    pub(crate) fn new(
        bucket: impl Into<String>,
        prefix: impl Into<String>,
        page: usize,
        page_limit: usize,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            prefix: prefix.into(),
            page,
            page_limit,
        }
    }

    /// Number of records preceding this page
    pub fn offset(&self) -> usize {
        self.page * self.page_limit
    }
}

/// The listing primitives of a remote storage service.
///
/// Implementations are responsible for authentication and transport. Both calls
/// return immediate children only.
#[async_trait]
pub trait StorageBackend: fmt::Debug + Send + Sync {
    /// List all buckets of the project. Not paginated.
    async fn list_buckets(&self, project_ref: &ProjectRef) -> Result<Vec<Bucket>, BoxError>;

    /// List one page of objects and virtual folders under a bucket and prefix.
    ///
    /// A page shorter than [`ListObjectsRequest::page_limit`] is the last page.
    async fn list_objects(
        &self,
        project_ref: &ProjectRef,
        request: &ListObjectsRequest,
    ) -> Result<Vec<StorageObject>, BoxError>;
}
