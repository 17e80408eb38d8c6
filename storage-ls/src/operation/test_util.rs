/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::backend::{ListObjectsRequest, StorageBackend};
use crate::error::BoxError;
use crate::types::{Bucket, ProjectRef, StorageObject};

/// Backend returning canned pages keyed by `(bucket, prefix, page)`.
///
/// Pages that were not scripted come back empty.
#[derive(Debug, Default)]
pub(crate) struct ScriptedBackend {
    buckets: Vec<Bucket>,
    pages: HashMap<(String, String, usize), Vec<StorageObject>>,
    failing: HashSet<(String, String)>,
    fail_buckets: bool,
    bucket_calls: AtomicUsize,
    requests: Mutex<Vec<ListObjectsRequest>>,
}

impl ScriptedBackend {
    pub(crate) fn bucket(mut self, name: &str) -> Self {
        self.buckets.push(Bucket::new(name));
        self
    }

    pub(crate) fn page(
        mut self,
        bucket: &str,
        prefix: &str,
        page: usize,
        objects: Vec<StorageObject>,
    ) -> Self {
        self.pages
            .insert((bucket.to_owned(), prefix.to_owned(), page), objects);
        self
    }

    pub(crate) fn fail_on(mut self, bucket: &str, prefix: &str) -> Self {
        self.failing.insert((bucket.to_owned(), prefix.to_owned()));
        self
    }

    pub(crate) fn fail_buckets(mut self) -> Self {
        self.fail_buckets = true;
        self
    }

    pub(crate) fn bucket_calls(&self) -> usize {
        self.bucket_calls.load(Ordering::SeqCst)
    }

    /// `(bucket, prefix, page)` of every object listing request, in order
    pub(crate) fn requests(&self) -> Vec<(String, String, usize)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| (r.bucket.clone(), r.prefix.clone(), r.page))
            .collect()
    }
}

#[async_trait]
impl StorageBackend for ScriptedBackend {
    async fn list_buckets(&self, _: &ProjectRef) -> Result<Vec<Bucket>, BoxError> {
        self.bucket_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_buckets {
            return Err("bucket listing failed".into());
        }
        Ok(self.buckets.clone())
    }

    async fn list_objects(
        &self,
        _: &ProjectRef,
        request: &ListObjectsRequest,
    ) -> Result<Vec<StorageObject>, BoxError> {
        self.requests.lock().unwrap().push(request.clone());
        let key = (request.bucket.clone(), request.prefix.clone());
        if self.failing.contains(&key) {
            return Err(format!("listing {}/{} failed", key.0, key.1).into());
        }
        let objects = self
            .pages
            .get(&(key.0, key.1, request.page))
            .cloned()
            .unwrap_or_default();
        Ok(objects)
    }
}

/// Build a client around `backend` with the given page limit
pub(crate) fn client(backend: &Arc<ScriptedBackend>, page_limit: usize) -> crate::Client {
    let backend: Arc<dyn StorageBackend> = backend.clone();
    let config = crate::Config::builder()
        .set_backend(Some(backend))
        .page_limit(page_limit)
        .build()
        .unwrap();
    crate::Client::new(config)
}
