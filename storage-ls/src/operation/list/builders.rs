/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::types::ProjectRef;

use super::{EntryStream, ListInputBuilder};

/// Fluent builder for constructing a single-level listing
#[derive(Debug)]
pub struct ListFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListInputBuilder,
}

impl ListFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Validate the input and return a lazy stream of the path's immediate children.
    ///
    /// An invalid storage address is reported here, before any backend request.
    pub fn send(self) -> Result<EntryStream, Error> {
        let input = self.inner.build()?;
        crate::operation::list::List::orchestrate(self.handle, input)
    }

    /// Set the project every backend request is scoped to.
    pub fn project_ref(mut self, input: impl Into<ProjectRef>) -> Self {
        self.inner = self.inner.project_ref(input);
        self
    }

    /// Set the project every backend request is scoped to.
    pub fn set_project_ref(mut self, input: Option<ProjectRef>) -> Self {
        self.inner = self.inner.set_project_ref(input);
        self
    }

    /// The project every backend request is scoped to
    pub fn get_project_ref(&self) -> &Option<ProjectRef> {
        self.inner.get_project_ref()
    }

    /// Set the storage address to list, e.g. `ss:///bucket/prefix/`
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.path(input);
        self
    }

    /// Set the storage address to list
    pub fn set_path(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_path(input);
        self
    }

    /// The storage address to list
    pub fn get_path(&self) -> &Option<String> {
        self.inner.get_path()
    }

    /// Set a token used to cancel the listing
    pub fn cancellation_token(mut self, input: CancellationToken) -> Self {
        self.inner = self.inner.cancellation_token(input);
        self
    }

    /// Token used to cancel the listing
    pub fn get_cancellation_token(&self) -> &Option<CancellationToken> {
        self.inner.get_cancellation_token()
    }
}

impl crate::operation::list::input::ListInputBuilder {
    /// Initiate a single-level listing with this input using the given client.
    pub fn send_with(self, client: &crate::Client) -> Result<EntryStream, Error> {
        let mut fluent_builder = client.list();
        fluent_builder.inner = self;
        fluent_builder.send()
    }
}
