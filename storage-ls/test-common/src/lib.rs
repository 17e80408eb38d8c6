/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! In-memory storage backend for testing listing operations.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use storage_ls::backend::{ListObjectsRequest, StorageBackend};
use storage_ls::error::BoxError;
use storage_ls::types::{Bucket, ProjectRef, StorageObject};

/// In-memory stand-in for the remote storage service.
///
/// Object listings behave like the service: the request prefix is split at its
/// last `/` into the directory to list and a name filter, children are sorted by
/// name, folders carry no id and pages are cut by offset.
#[derive(Debug, Default)]
pub struct MockStorage {
    // bucket -> object keys; keys ending in `/` only create a folder
    buckets: BTreeMap<String, BTreeSet<String>>,
    failing: HashSet<(String, String)>,
    bucket_calls: AtomicUsize,
    requests: Mutex<Vec<ListObjectsRequest>>,
}

impl MockStorage {
    /// Create a new builder for a mock storage backend
    pub fn builder() -> MockStorageBuilder {
        MockStorageBuilder::default()
    }

    /// Number of bucket listings requested so far
    pub fn bucket_calls(&self) -> usize {
        self.bucket_calls.load(Ordering::SeqCst)
    }

    /// `(bucket, prefix, page)` of every object listing requested so far
    pub fn requests(&self) -> Vec<(String, String, usize)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| (r.bucket.clone(), r.prefix.clone(), r.page))
            .collect()
    }

    fn children(&self, bucket: &str, prefix: &str) -> Vec<StorageObject> {
        let Some(keys) = self.buckets.get(bucket) else {
            return Vec::new();
        };
        let (dir, search) = match prefix.rfind('/') {
            Some(idx) => prefix.split_at(idx + 1),
            None => ("", prefix),
        };

        let mut folders = BTreeSet::new();
        let mut objects = BTreeSet::new();
        for key in keys {
            let Some(rest) = key.strip_prefix(dir) else {
                continue;
            };
            match rest.split_once('/') {
                Some((folder, _)) => {
                    folders.insert(folder.to_owned());
                }
                None if !rest.is_empty() => {
                    objects.insert(rest.to_owned());
                }
                None => {}
            }
        }

        let mut children: Vec<StorageObject> = folders
            .into_iter()
            .map(StorageObject::folder)
            .chain(objects.into_iter().map(|name| {
                let id = format!("{bucket}/{dir}{name}");
                StorageObject::object(name, id)
            }))
            .filter(|child| child.name.starts_with(search))
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children
    }
}

#[async_trait]
impl StorageBackend for MockStorage {
    async fn list_buckets(&self, _: &ProjectRef) -> Result<Vec<Bucket>, BoxError> {
        self.bucket_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&(String::new(), String::new())) {
            return Err("failed to list buckets".into());
        }
        Ok(self.buckets.keys().map(Bucket::new).collect())
    }

    async fn list_objects(
        &self,
        _: &ProjectRef,
        request: &ListObjectsRequest,
    ) -> Result<Vec<StorageObject>, BoxError> {
        self.requests.lock().unwrap().push(request.clone());
        if self
            .failing
            .contains(&(request.bucket.clone(), request.prefix.clone()))
        {
            return Err(format!("failed to list {}/{}", request.bucket, request.prefix).into());
        }

        Ok(self
            .children(&request.bucket, &request.prefix)
            .into_iter()
            .skip(request.offset())
            .take(request.page_limit)
            .collect())
    }
}

/// Builder for [`MockStorage`]
#[derive(Debug, Default)]
pub struct MockStorageBuilder {
    buckets: BTreeMap<String, BTreeSet<String>>,
    failing: HashSet<(String, String)>,
}

impl MockStorageBuilder {
    /// Add an empty bucket
    pub fn bucket(mut self, name: &str) -> Self {
        self.buckets.entry(name.to_owned()).or_default();
        self
    }

    /// Add an object (or a folder, if `key` ends with `/`) to a bucket, creating the bucket if needed
    pub fn key(mut self, bucket: &str, key: &str) -> Self {
        self.buckets
            .entry(bucket.to_owned())
            .or_default()
            .insert(key.to_owned());
        self
    }

    /// Fail every object listing request for exactly this bucket and prefix
    pub fn fail_on(mut self, bucket: &str, prefix: &str) -> Self {
        self.failing.insert((bucket.to_owned(), prefix.to_owned()));
        self
    }

    /// Fail every bucket listing request
    pub fn fail_buckets(self) -> Self {
        self.fail_on("", "")
    }

    /// Consume the builder and return a shareable backend
    pub fn build(self) -> Arc<MockStorage> {
        Arc::new(MockStorage {
            buckets: self.buckets,
            failing: self.failing,
            bucket_calls: AtomicUsize::default(),
            requests: Mutex::new(Vec::new()),
        })
    }
}

/// Build a listing client backed by `storage`
pub fn client(storage: &Arc<MockStorage>, page_limit: usize) -> storage_ls::Client {
    let backend: Arc<dyn StorageBackend> = storage.clone();
    let config = storage_ls::Config::builder()
        .set_backend(Some(backend))
        .page_limit(page_limit)
        .build()
        .expect("backend set");
    storage_ls::Client::new(config)
}
