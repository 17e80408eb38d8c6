/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::mem;

use futures_util::Stream;
use tracing::Instrument;

use crate::address::split_bucket_prefix;
use crate::backend::ListObjectsRequest;
use crate::error::{self, BoxError, Error};
use crate::operation::ListingContext;
use crate::types::{BucketPrefix, Entry};

#[derive(Debug, PartialEq)]
enum State {
    /// List buckets whose name starts with `name_prefix`
    Buckets { name_prefix: String },
    /// List objects under a bucket and prefix, one page at a time
    Paginating {
        bucket: String,
        prefix: String,
        page: usize,
    },
    Done,
}

impl State {
    fn new(path: &str) -> Self {
        let BucketPrefix { bucket, prefix } = split_bucket_prefix(path);
        // `ss:///foo` may name a bucket prefix or an exact bucket, treat it as a bucket search
        if bucket.is_empty() || (prefix.is_empty() && !path.ends_with('/')) {
            State::Buckets {
                name_prefix: bucket,
            }
        } else {
            State::Paginating {
                bucket,
                prefix,
                page: 0,
            }
        }
    }

    /// Transition after a page with `page_len` records was received
    fn next_state(self, page_len: usize, page_limit: usize) -> State {
        match self {
            // a full page means there may be more
            State::Paginating {
                bucket,
                prefix,
                page,
            } if page_len == page_limit => State::Paginating {
                bucket,
                prefix,
                page: page + 1,
            },
            _ => State::Done,
        }
    }
}

/// Lazy listing of the immediate children of a single storage path.
///
/// Buckets and virtual folders are yielded as directory entries with a trailing
/// `/`. The stream ends after the first error.
#[derive(Debug)]
pub struct EntryStream {
    context: ListingContext,
    state: State,
    current_page: std::vec::IntoIter<Entry>,
}

impl EntryStream {
    pub(crate) fn new(context: ListingContext, path: &str) -> Self {
        Self {
            context,
            state: State::new(path),
            current_page: Vec::new().into_iter(),
        }
    }

    /// Returns the next entry, fetching further pages from the backend as needed.
    pub async fn next(&mut self) -> Option<Result<Entry, Error>> {
        loop {
            if let Some(entry) = self.current_page.next() {
                return Some(Ok(entry));
            }

            match self.next_page().await? {
                Ok(page) => self.current_page = page.into_iter(),
                Err(err) => return Some(Err(err)),
            }
        }
    }

    /// Drain the listing into a vector of entries.
    pub async fn collect(mut self) -> Result<Vec<Entry>, Error> {
        let mut entries = Vec::new();
        while let Some(entry) = self.next().await {
            entries.push(entry?);
        }
        Ok(entries)
    }

    /// Invoke `f` on every entry, stopping at the first listing or consumer error.
    pub async fn for_each<F, E>(mut self, mut f: F) -> Result<(), Error>
    where
        F: FnMut(Entry) -> Result<(), E>,
        E: Into<BoxError>,
    {
        while let Some(entry) = self.next().await {
            f(entry?).map_err(error::consumer_failed)?;
        }
        Ok(())
    }

    /// Convert into a [`Stream`] of entries.
    pub fn into_stream(self) -> impl Stream<Item = Result<Entry, Error>> {
        futures_util::stream::unfold(self, |mut entries| async move {
            let next = entries.next().await?;
            Some((next, entries))
        })
    }

    async fn next_page(&mut self) -> Option<Result<Vec<Entry>, Error>> {
        let ctx = &self.context;
        let result = match &self.state {
            State::Done => return None,
            State::Buckets { name_prefix } => list_buckets(ctx, name_prefix)
                .await
                .map(|buckets| (0, buckets)),
            State::Paginating {
                bucket,
                prefix,
                page,
            } => {
                if *page > 0 {
                    tracing::info!("loading page {page} of {bucket}/{prefix}");
                }
                let request = ListObjectsRequest::new(
                    bucket.as_str(),
                    prefix.as_str(),
                    *page,
                    ctx.page_limit(),
                );
                list_objects(ctx, &request)
                    .await
                    .map(|objects| (objects.len(), objects))
            }
        };

        let prev_state = mem::replace(&mut self.state, State::Done);
        match result {
            Ok((page_len, entries)) => {
                self.state = prev_state.next_state(page_len, self.context.page_limit());
                Some(Ok(entries))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

async fn list_buckets(ctx: &ListingContext, name_prefix: &str) -> Result<Vec<Entry>, Error> {
    let buckets = ctx
        .send(ctx.backend().list_buckets(ctx.project_ref()))
        .instrument(tracing::debug_span!("list-buckets", name_prefix = %name_prefix))
        .await?;

    Ok(buckets
        .into_iter()
        .filter(|bucket| bucket.name.starts_with(name_prefix))
        .map(|bucket| Entry::directory(bucket.name))
        .collect())
}

async fn list_objects(
    ctx: &ListingContext,
    request: &ListObjectsRequest,
) -> Result<Vec<Entry>, Error> {
    let objects = ctx
        .send(ctx.backend().list_objects(ctx.project_ref(), request))
        .instrument(tracing::debug_span!(
            "list-objects",
            bucket = %request.bucket,
            prefix = %request.prefix,
            page = %request.page
        ))
        .await?;

    Ok(objects.into_iter().map(Entry::from).collect())
}
