/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for recursively listing a storage path
pub use input::{WalkInput, WalkInputBuilder};

mod paths;
pub use paths::WalkStream;

use std::sync::Arc;

use crate::address::StorageAddress;

use super::ListingContext;

/// Operation struct for recursively listing every object under a storage path
#[derive(Clone, Default, Debug)]
pub(crate) struct Walk;

impl Walk {
    /// Validate the input and set up a lazy breadth-first traversal.
    ///
    /// No backend request is sent until the returned stream is polled.
    pub(crate) fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: WalkInput,
    ) -> Result<WalkStream, crate::error::Error> {
        let address = StorageAddress::parse(&input.path)?;
        let ctx = ListingContext::new(handle, input.project_ref, input.cancellation_token);
        Ok(WalkStream::new(ctx, address.path()))
    }
}
