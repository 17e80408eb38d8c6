/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use tokio_util::sync::CancellationToken;

use crate::error::BuildError;
use crate::types::ProjectRef;

/// Input type for recursively listing a storage path
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct WalkInput {
    /// The project every backend request is scoped to
    pub project_ref: ProjectRef,

    /// The storage address to walk, e.g. `ss:///bucket/prefix/`
    pub path: String,

    /// Token used to cancel the traversal between or during backend requests
    pub cancellation_token: Option<CancellationToken>,
}

impl WalkInput {
    /// Creates a new builder-style object to manufacture [`WalkInput`](crate::operation::walk::WalkInput).
    pub fn builder() -> WalkInputBuilder {
        WalkInputBuilder::default()
    }

    /// The project every backend request is scoped to
    pub fn project_ref(&self) -> &ProjectRef {
        &self.project_ref
    }

    /// The storage address to walk
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Token used to cancel the traversal
    pub fn cancellation_token(&self) -> Option<&CancellationToken> {
        self.cancellation_token.as_ref()
    }
}

/// A builder for [`WalkInput`](crate::operation::walk::WalkInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct WalkInputBuilder {
    pub(crate) project_ref: Option<ProjectRef>,
    pub(crate) path: Option<String>,
    pub(crate) cancellation_token: Option<CancellationToken>,
}

impl WalkInputBuilder {
    /// Set the project every backend request is scoped to.
    ///
    /// NOTE: A project reference is required.
    pub fn project_ref(mut self, input: impl Into<ProjectRef>) -> Self {
        self.project_ref = Some(input.into());
        self
    }

    /// Set the project every backend request is scoped to.
    pub fn set_project_ref(mut self, input: Option<ProjectRef>) -> Self {
        self.project_ref = input;
        self
    }

    /// The project every backend request is scoped to
    pub fn get_project_ref(&self) -> &Option<ProjectRef> {
        &self.project_ref
    }

    /// Set the storage address to walk, e.g. `ss:///bucket/prefix/`
    ///
    /// NOTE: A path is required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.path = Some(input.into());
        self
    }

    /// Set the storage address to walk
    pub fn set_path(mut self, input: Option<String>) -> Self {
        self.path = input;
        self
    }

    /// The storage address to walk
    pub fn get_path(&self) -> &Option<String> {
        &self.path
    }

    /// Set a token used to cancel the traversal
    pub fn cancellation_token(mut self, input: CancellationToken) -> Self {
        self.cancellation_token = Some(input);
        self
    }

    /// Set a token used to cancel the traversal
    pub fn set_cancellation_token(mut self, input: Option<CancellationToken>) -> Self {
        self.cancellation_token = input;
        self
    }

    /// Token used to cancel the traversal
    pub fn get_cancellation_token(&self) -> &Option<CancellationToken> {
        &self.cancellation_token
    }

    /// Consumes the builder and constructs a [`WalkInput`](crate::operation::walk::WalkInput).
    pub fn build(self) -> Result<WalkInput, BuildError> {
        let project_ref = self.project_ref.ok_or_else(|| {
            BuildError::missing_field("project_ref", "A project reference is required")
        })?;
        let path = self
            .path
            .ok_or_else(|| BuildError::missing_field("path", "A storage path is required"))?;

        Ok(WalkInput {
            project_ref,
            path,
            cancellation_token: self.cancellation_token,
        })
    }
}
