/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::backend::StorageBackend;
use crate::error::{self, BoxError, Error};
use crate::types::ProjectRef;

/// Types for single-level listing operation
pub mod list;

/// Types for recursive listing operation
pub mod walk;

#[cfg(test)]
pub(crate) mod test_util;

/// Container for maintaining context required to carry out a single listing operation.
#[derive(Debug, Clone)]
pub(crate) struct ListingContext {
    handle: Arc<crate::client::Handle>,
    state: Arc<ListingState>,
}

#[derive(Debug)]
struct ListingState {
    project_ref: ProjectRef,
    cancellation_token: Option<CancellationToken>,
}

impl ListingContext {
    pub(crate) fn new(
        handle: Arc<crate::client::Handle>,
        project_ref: ProjectRef,
        cancellation_token: Option<CancellationToken>,
    ) -> Self {
        let state = Arc::new(ListingState {
            project_ref,
            cancellation_token,
        });
        Self { handle, state }
    }

    /// The storage backend to use for listing requests
    pub(crate) fn backend(&self) -> &dyn StorageBackend {
        self.handle.config.backend().as_ref()
    }

    pub(crate) fn project_ref(&self) -> &ProjectRef {
        &self.state.project_ref
    }

    pub(crate) fn page_limit(&self) -> usize {
        self.handle.config.page_limit()
    }

    /// Drive a backend request to completion unless the operation is cancelled first.
    pub(crate) async fn send<T, F>(&self, request: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, BoxError>>,
    {
        let result = match &self.state.cancellation_token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::error!("received cancellation signal, not sending further listing requests");
                        return Err(error::operation_cancelled());
                    }
                    result = request => result,
                }
            }
            None => request.await,
        };
        result.map_err(error::backend_failed)
    }
}
