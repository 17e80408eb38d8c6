/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Listing of buckets, virtual directories and objects in a remote object storage service.
//!
//! The storage service only exposes a single-level, paginated listing of one
//! bucket and prefix at a time. Directories are synthetic: they are derived from
//! `/` separated object names and reported by the service as entries without an
//! object id. This crate turns that primitive into a one-level listing
//! ([`Client::list`]) or a breadth-first recursive listing ([`Client::walk`]) of
//! an address of the form `ss:///<bucket>[/<prefix>]`.
//!
//! Transport and authentication are left to an implementation of
//! [`StorageBackend`](crate::backend::StorageBackend).
//!
//! # Examples
//!
//! ```no_run
//! # use storage_ls::backend::StorageBackend;
//! # async fn example(backend: impl StorageBackend + 'static) -> Result<(), storage_ls::error::Error> {
//! let config = storage_ls::Config::builder().backend(backend).build()?;
//! let client = storage_ls::Client::new(config);
//!
//! let mut paths = client
//!     .walk()
//!     .project_ref("my-project")
//!     .path("ss:///my-bucket/")
//!     .send()?;
//!
//! while let Some(path) = paths.next().await {
//!     println!("{}", path?);
//! }
//! # Ok(())
//! # }
//! ```

/// Error types emitted by `storage-ls`
pub mod error;

/// Common types used by `storage-ls`
pub mod types;

/// Storage address parsing
pub mod address;

/// The listing primitives of the storage service
pub mod backend;

/// Storage listing client
pub mod client;

/// Storage listing operations
pub mod operation;

/// Storage listing configuration
pub mod config;

pub use self::client::Client;
pub use self::config::Config;
