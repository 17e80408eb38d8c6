/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for listing the immediate children of a storage path
pub use input::{ListInput, ListInputBuilder};

mod entries;
pub use entries::EntryStream;

use std::sync::Arc;

use crate::address::StorageAddress;

use super::ListingContext;

/// Operation struct for listing the immediate children of a storage path
#[derive(Clone, Default, Debug)]
pub(crate) struct List;

impl List {
    /// Validate the input and set up a lazy single-level listing.
    ///
    /// No backend request is sent until the returned stream is polled.
    pub(crate) fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ListInput,
    ) -> Result<EntryStream, crate::error::Error> {
        let address = StorageAddress::parse(&input.path)?;
        let ctx = ListingContext::new(handle, input.project_ref, input.cancellation_token);
        Ok(EntryStream::new(ctx, address.path()))
    }
}
