/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use storage_ls::error::ErrorKind;
use storage_ls::operation::list::ListInput;
use storage_ls::types::Entry;
use test_common::{client, MockStorage};

fn names(entries: Vec<Entry>) -> Vec<String> {
    entries.into_iter().map(Entry::into_name).collect()
}

#[tokio::test]
async fn test_list_all_buckets() {
    let storage = MockStorage::builder()
        .bucket("avatars")
        .bucket("assets")
        .bucket("public")
        .build();

    let entries = client(&storage, 100)
        .list()
        .project_ref("test-project")
        .path("ss:///")
        .send()
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert!(entries.iter().all(Entry::is_directory));
    assert_eq!(names(entries), vec!["assets/", "avatars/", "public/"]);
    assert_eq!(storage.bucket_calls(), 1);
    assert!(storage.requests().is_empty());
}

#[tokio::test]
async fn test_list_buckets_by_name_prefix() {
    let storage = MockStorage::builder()
        .bucket("avatars")
        .bucket("assets")
        .bucket("public")
        .build();

    let entries = client(&storage, 100)
        .list()
        .project_ref("test-project")
        .path("ss:///a")
        .send()
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(names(entries), vec!["assets/", "avatars/"]);
}

#[tokio::test]
async fn test_list_exact_bucket_name_is_a_search() {
    let storage = MockStorage::builder()
        .key("docs", "readme.md")
        .bucket("docs-archive")
        .build();

    let entries = client(&storage, 100)
        .list()
        .project_ref("test-project")
        .path("ss:///docs")
        .send()
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(names(entries), vec!["docs/", "docs-archive/"]);
}

#[tokio::test]
async fn test_list_bucket_contents() {
    let storage = MockStorage::builder()
        .key("docs", "readme.md")
        .key("docs", "guides/intro.md")
        .key("docs", "empty/")
        .build();

    let entries = client(&storage, 100)
        .list()
        .project_ref("test-project")
        .path("ss:///docs/")
        .send()
        .unwrap()
        .collect()
        .await
        .unwrap();

    let kinds: Vec<(String, bool)> = entries
        .into_iter()
        .map(|e| (e.name().to_owned(), e.is_directory()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("empty/".to_owned(), true),
            ("guides/".to_owned(), true),
            ("readme.md".to_owned(), false),
        ]
    );
}

#[tokio::test]
async fn test_list_concatenates_pages() {
    let storage = MockStorage::builder()
        .key("b", "k1")
        .key("b", "k2")
        .key("b", "k3")
        .build();

    let entries = client(&storage, 2)
        .list()
        .project_ref("test-project")
        .path("ss:///b/")
        .send()
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(names(entries), vec!["k1", "k2", "k3"]);
    assert_eq!(
        storage.requests(),
        vec![
            ("b".to_owned(), String::new(), 0),
            ("b".to_owned(), String::new(), 1),
        ]
    );
}

#[tokio::test]
async fn test_list_with_input_builder() {
    let storage = MockStorage::builder().key("b", "dir/file").build();
    let client = client(&storage, 100);

    let entries = ListInput::builder()
        .project_ref("test-project")
        .path("ss:///b/dir/")
        .send_with(&client)
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(names(entries), vec!["file"]);
}

#[tokio::test]
async fn test_list_missing_project_ref() {
    let storage = MockStorage::builder().build();

    let err = client(&storage, 100)
        .list()
        .path("ss:///")
        .send()
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InputInvalid);
}

#[tokio::test]
async fn test_list_rejects_host() {
    let storage = MockStorage::builder().bucket("b").build();

    let err = client(&storage, 100)
        .list()
        .project_ref("test-project")
        .path("ss://b/")
        .send()
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidAddress);
    assert_eq!(storage.bucket_calls(), 0);
}

#[tokio::test]
async fn test_list_bucket_failure() {
    let storage = MockStorage::builder().bucket("b").fail_buckets().build();

    let err = client(&storage, 100)
        .list()
        .project_ref("test-project")
        .path("ss:///")
        .send()
        .unwrap()
        .collect()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::BackendFailed);
}
