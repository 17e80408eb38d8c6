/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::types::ProjectRef;

use super::{WalkInputBuilder, WalkStream};

/// Fluent builder for constructing a recursive listing
#[derive(Debug)]
pub struct WalkFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: WalkInputBuilder,
}

impl WalkFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Validate the input and return a lazy breadth-first stream of object paths.
    ///
    /// An invalid storage address is reported here, before any backend request.
    pub fn send(self) -> Result<WalkStream, Error> {
        let input = self.inner.build()?;
        crate::operation::walk::Walk::orchestrate(self.handle, input)
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

    /// Set the storage address to walk, e.g. `ss:///bucket/prefix/`
    ///
    /// A path that does not end in `/` may name an object or a directory; its
    /// parent directory is listed and matching entries are followed.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.path(input);
        self
    }

    /// Set the storage address to walk
    pub fn set_path(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_path(input);
        self
    }

    /// The storage address to walk
    pub fn get_path(&self) -> &Option<String> {
        self.inner.get_path()
    }

    /// Set a token used to cancel the traversal
    pub fn cancellation_token(mut self, input: CancellationToken) -> Self {
        self.inner = self.inner.cancellation_token(input);
        self
    }

    /// Token used to cancel the traversal
    pub fn get_cancellation_token(&self) -> &Option<CancellationToken> {
        self.inner.get_cancellation_token()
    }
}

impl crate::operation::walk::input::WalkInputBuilder {
    /// Initiate a recursive listing with this input using the given client.
    pub fn send_with(self, client: &crate::Client) -> Result<WalkStream, Error> {
        let mut fluent_builder = client.walk();
        fluent_builder.inner = self;
        fluent_builder.send()
    }
}
