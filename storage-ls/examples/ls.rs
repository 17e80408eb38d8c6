/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Lists a local directory tree as if it were a storage project.
//!
//! Every top-level directory under `--root` is a bucket, nested directories are
//! virtual folders and files are objects.
//!
//! ```text
//! cargo run --example ls -- --root /tmp/storage -r ss:///avatars/
//! ```

use std::error::Error;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use clap::Parser;
use storage_ls::backend::{ListObjectsRequest, StorageBackend};
use storage_ls::config::DEFAULT_PAGE_LIMIT;
use storage_ls::error::BoxError;
use storage_ls::types::{Bucket, ProjectRef, StorageObject};
use tokio_util::sync::CancellationToken;
use walkdir::WalkDir;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "ls")]
#[command(about = "Lists buckets, folders and objects under a storage path.")]
pub struct Args {
    /// Storage path to list <ss:///bucket/[prefix]>
    #[arg(required = true)]
    path: String,

    /// Recursively list every object under the path
    #[arg(short, long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    recursive: bool,

    /// Local directory serving as the storage project
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Number of entries per listing page
    #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    page_limit: usize,

    /// Project reference passed to every listing request
    #[arg(long, default_value = "local")]
    project_ref: String,
}

/// Serves a local directory through the storage listing primitives
#[derive(Debug)]
struct LocalBackend {
    root: PathBuf,
}

/// Immediate children of `dir`, sorted by name, as `(name, is_dir)`
fn read_children(dir: &Path) -> Result<Vec<(String, bool)>, walkdir::Error> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            Ok((name, entry.file_type().is_dir()))
        })
        .collect()
}

#[async_trait]
impl StorageBackend for LocalBackend {
    async fn list_buckets(&self, _: &ProjectRef) -> Result<Vec<Bucket>, BoxError> {
        let root = self.root.clone();
        let children = tokio::task::spawn_blocking(move || read_children(&root)).await??;
        Ok(children
            .into_iter()
            .filter(|(_, is_dir)| *is_dir)
            .map(|(name, _)| Bucket::new(name))
            .collect())
    }

    async fn list_objects(
        &self,
        _: &ProjectRef,
        request: &ListObjectsRequest,
    ) -> Result<Vec<StorageObject>, BoxError> {
        let (dir, search) = match request.prefix.rfind('/') {
            Some(idx) => request.prefix.split_at(idx + 1),
            None => ("", request.prefix.as_str()),
        };
        let key_dir = format!("{}/{dir}", request.bucket);
        let fs_dir = self.root.join(&key_dir);
        let children = tokio::task::spawn_blocking(move || read_children(&fs_dir)).await??;

        Ok(children
            .into_iter()
            .filter(|(name, _)| name.starts_with(search))
            .skip(request.offset())
            .take(request.page_limit)
            .map(|(name, is_dir)| {
                if is_dir {
                    StorageObject::folder(name)
                } else {
                    let id = format!("{key_dir}{name}");
                    StorageObject::object(name, id)
                }
            })
            .collect())
    }
}

async fn run(args: Args, cancel: CancellationToken) -> Result<(), storage_ls::error::Error> {
    let config = storage_ls::Config::builder()
        .backend(LocalBackend { root: args.root })
        .page_limit(args.page_limit)
        .build()?;
    let client = storage_ls::Client::new(config);

    let print = |path: String| {
        println!("{path}");
        Ok::<_, BoxError>(())
    };

    if args.recursive {
        client
            .walk()
            .project_ref(args.project_ref)
            .path(args.path)
            .cancellation_token(cancel)
            .send()?
            .for_each(print)
            .await
    } else {
        client
            .list()
            .project_ref(args.project_ref)
            .path(args.path)
            .cancellation_token(cancel)
            .send()?
            .for_each(|entry| print(entry.into_name()))
            .await
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    if let Err(err) = run(args, cancel).await {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(&format!(": {cause}"));
            source = cause.source();
        }
        tracing::error!("listing failed: {message}");
        return Err(err.into());
    }

    Ok(())
}
