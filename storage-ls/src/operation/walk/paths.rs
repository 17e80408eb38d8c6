/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::VecDeque;

use futures_util::Stream;

use crate::address::{dirname, split_bucket_prefix};
use crate::error::{self, BoxError, Error};
use crate::operation::list::EntryStream;
use crate::operation::ListingContext;

/// Single-level listing in progress for one directory of the walk
#[derive(Debug)]
struct Listing {
    /// Path every entry name is appended to
    dir_path: String,
    entries: EntryStream,
    empty: bool,
    /// Whether an empty result means `dir_path` is an empty bucket
    reports_empty_bucket: bool,
}

impl Listing {
    fn seed(ctx: ListingContext, start_path: &str) -> Self {
        let base = if start_path.ends_with('/') {
            start_path
        } else {
            dirname(start_path)
        };
        Self {
            dir_path: base.strip_prefix('/').unwrap_or(base).to_owned(),
            entries: EntryStream::new(ctx, start_path),
            empty: true,
            reports_empty_bucket: start_path.ends_with('/'),
        }
    }

    fn directory(ctx: ListingContext, dir_path: String) -> Self {
        Self {
            entries: EntryStream::new(ctx, &dir_path),
            dir_path,
            empty: true,
            reports_empty_bucket: true,
        }
    }

    /// `bucket/` if this listing found nothing in an entire bucket
    fn empty_bucket(&self) -> Option<String> {
        if !self.empty || !self.reports_empty_bucket {
            return None;
        }
        // an empty prefix inside a bucket can't be told apart from one that never existed
        let location = split_bucket_prefix(&self.dir_path);
        if location.bucket.is_empty() || !location.prefix.is_empty() {
            return None;
        }
        Some(format!("{}/", location.bucket))
    }
}

/// Lazy breadth-first listing of every object below a storage path.
///
/// Yields full paths of the form `bucket/dir/object`. Directories are not
/// yielded themselves, except buckets that contain nothing at all which are
/// yielded as `bucket/`. Every object of depth `N` is yielded before any object
/// of depth `N + 1`. The stream ends after the first error; paths yielded
/// before it remain valid.
#[derive(Debug)]
pub struct WalkStream {
    context: ListingContext,
    current: Option<Listing>,
    // directories discovered but not yet listed
    queue: VecDeque<String>,
}

impl WalkStream {
    pub(crate) fn new(context: ListingContext, start_path: &str) -> Self {
        let seed = Listing::seed(context.clone(), start_path);
        Self {
            context,
            current: Some(seed),
            queue: VecDeque::new(),
        }
    }

    /// Returns the next object path, listing further directories as needed.
    pub async fn next(&mut self) -> Option<Result<String, Error>> {
        loop {
            if self.current.is_none() {
                let dir_path = self.queue.pop_front()?;
                tracing::debug!(
                    "listing directory {dir_path} ({} remaining)",
                    self.queue.len()
                );
                self.current = Some(Listing::directory(self.context.clone(), dir_path));
            }
            let listing = self.current.as_mut()?;

            match listing.entries.next().await {
                Some(Ok(entry)) => {
                    listing.empty = false;
                    let path = format!("{}{}", listing.dir_path, entry.name());
                    if !entry.is_directory() {
                        return Some(Ok(path));
                    }
                    self.queue.push_back(path);
                }
                Some(Err(err)) => {
                    self.current = None;
                    self.queue.clear();
                    return Some(Err(err));
                }
                None => {
                    let empty_bucket = listing.empty_bucket();
                    self.current = None;
                    if empty_bucket.is_some() {
                        return empty_bucket.map(Ok);
                    }
                }
            }
        }
    }

    /// Drain the traversal into a vector of paths.
    #[tracing::instrument(skip_all, level = "debug", name = "walk-collect")]
    pub async fn collect(mut self) -> Result<Vec<String>, Error> {
        let mut paths = Vec::new();
        while let Some(path) = self.next().await {
            paths.push(path?);
        }
        Ok(paths)
    }

    /// Invoke `f` on every path, stopping at the first listing or consumer error.
    ///
    /// Paths already handed to `f` are not revisited when an error occurs.
    #[tracing::instrument(skip_all, level = "debug", name = "walk-for-each")]
    pub async fn for_each<F, E>(mut self, mut f: F) -> Result<(), Error>
    where
        F: FnMut(String) -> Result<(), E>,
        E: Into<BoxError>,
    {
        while let Some(path) = self.next().await {
            f(path?).map_err(error::consumer_failed)?;
        }
        Ok(())
    }

    /// Convert into a [`Stream`] of paths.
    pub fn into_stream(self) -> impl Stream<Item = Result<String, Error>> {
        futures_util::stream::unfold(self, |mut paths| async move {
            let next = paths.next().await?;
            Some((next, paths))
        })
    }
}
