/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::Config;

/// Storage listing client
///
/// # Examples
///
/// ```no_run
/// use storage_ls::error::Error;
///
/// async fn print_tree(client: &storage_ls::Client) -> Result<(), Error> {
///     let mut paths = client
///         .walk()
///         .project_ref("my-project")
///         .path("ss:///my-bucket/")
///         .send()?;
///
///     while let Some(path) = paths.next().await {
///         println!("{}", path?);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. the storage backend, configuration, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: Config,
}

impl Client {
    /// Creates a new client from a listing config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// List the immediate children of a storage path.
    ///
    /// Constructs a fluent builder for the
    /// [`List`](crate::operation::list::builders::ListFluentBuilder) operation.
    ///
    /// A path without a trailing `/` and without a prefix (e.g. `ss:///foo`) lists
    /// every bucket whose name starts with `foo`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use storage_ls::error::Error;
    ///
    /// async fn list_buckets(client: &storage_ls::Client) -> Result<Vec<String>, Error> {
    ///     let entries = client
    ///         .list()
    ///         .project_ref("my-project")
    ///         .path("ss:///")
    ///         .send()?
    ///         .collect()
    ///         .await?;
    ///
    ///     Ok(entries.into_iter().map(|e| e.into_name()).collect())
    /// }
    /// ```
    pub fn list(&self) -> crate::operation::list::builders::ListFluentBuilder {
        crate::operation::list::builders::ListFluentBuilder::new(self.handle.clone())
    }

    /// Recursively list every object under a storage path, breadth first.
    ///
    /// Constructs a fluent builder for the
    /// [`Walk`](crate::operation::walk::builders::WalkFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use storage_ls::error::Error;
    ///
    /// async fn print_bucket(client: &storage_ls::Client) -> Result<(), Error> {
    ///     client
    ///         .walk()
    ///         .project_ref("my-project")
    ///         .path("ss:///my-bucket/")
    ///         .send()?
    ///         .for_each(|path| {
    ///             println!("{path}");
    ///             Ok::<_, std::io::Error>(())
    ///         })
    ///         .await
    /// }
    /// ```
    pub fn walk(&self) -> crate::operation::walk::builders::WalkFluentBuilder {
        crate::operation::walk::builders::WalkFluentBuilder::new(self.handle.clone())
    }
}
