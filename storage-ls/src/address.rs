/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::{fmt, str::FromStr};

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{self, Error};
use crate::types::BucketPrefix;

/// URL scheme reserved for storage addresses
pub const STORAGE_SCHEME: &str = "ss";

static INVALID_ADDRESS: &str = "URL must match pattern ss:///bucket/[prefix]";

/// A validated storage address of the form `ss:///<bucket>[/<prefix>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageAddress {
    path: String,
}

impl StorageAddress {
    /// Parse and validate a storage address, returning the decoded hierarchical path.
    ///
    /// The scheme is matched case-insensitively. An address carrying a host
    /// (e.g. `ss://bucket/key`) or an empty path is rejected.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let parsed = Url::parse(raw).map_err(error::invalid_address)?;
        // `Url` lowercases the scheme while parsing
        if parsed.scheme() != STORAGE_SCHEME || parsed.cannot_be_a_base() {
            return Err(error::invalid_address(INVALID_ADDRESS));
        }
        if parsed.host_str().is_some_and(|host| !host.is_empty()) {
            return Err(error::invalid_address(INVALID_ADDRESS));
        }

        // the path is kept as written, `Url::path` has dot segments resolved
        let written = raw_path(raw).ok_or_else(|| error::invalid_address(INVALID_ADDRESS))?;
        let path = percent_decode_str(written)
            .decode_utf8()
            .map_err(error::invalid_address)?;
        if path.is_empty() {
            return Err(error::invalid_address(INVALID_ADDRESS));
        }

        Ok(Self {
            path: path.into_owned(),
        })
    }

    /// The decoded hierarchical path, including its leading `/`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Consume the address and return the decoded hierarchical path
    pub fn into_path(self) -> String {
        self.path
    }

    /// Returns true if the path explicitly names a directory
    pub fn is_dir(&self) -> bool {
        self.path.ends_with('/')
    }

    /// Split the path into its bucket and prefix
    pub fn bucket_prefix(&self) -> BucketPrefix {
        split_bucket_prefix(&self.path)
    }
}

impl FromStr for StorageAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StorageAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{STORAGE_SCHEME}://{}", self.path)
    }
}

/// The path component of `raw` exactly as written: everything after the scheme
/// and an empty `//` authority, up to the first `?` or `#`.
fn raw_path(raw: &str) -> Option<&str> {
    let (scheme, rest) = raw.split_once(':')?;
    if !scheme.eq_ignore_ascii_case(STORAGE_SCHEME) {
        return None;
    }
    let rest = match rest.strip_prefix("//") {
        Some(after) if after.is_empty() || after.starts_with(['/', '?', '#']) => after,
        Some(_) => return None,
        None => rest,
    };
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Split a hierarchical path into `(bucket, prefix)`.
///
/// One leading `/` is stripped. The first segment is the bucket and everything
/// after the following `/` is the prefix.
pub fn split_bucket_prefix(path: &str) -> BucketPrefix {
    let rest = path.strip_prefix('/').unwrap_or(path);
    let (bucket, prefix) = rest.split_once('/').unwrap_or((rest, ""));
    BucketPrefix {
        bucket: bucket.to_owned(),
        prefix: prefix.to_owned(),
    }
}

/// Everything up to and including the last `/` of `path`, or `""` if it has none.
pub(crate) fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::{dirname, split_bucket_prefix, StorageAddress};
    use crate::error::ErrorKind;
    use crate::types::BucketPrefix;

    fn pair(bucket: &str, prefix: &str) -> BucketPrefix {
        BucketPrefix {
            bucket: bucket.to_owned(),
            prefix: prefix.to_owned(),
        }
    }

    #[test]
    fn test_parse_valid_address() {
        let addr = StorageAddress::parse("ss:///bucket/some/prefix").unwrap();
        assert_eq!(addr.path(), "/bucket/some/prefix");
        assert!(!addr.is_dir());

        let addr = StorageAddress::parse("ss:///bucket/dir/").unwrap();
        assert_eq!(addr.path(), "/bucket/dir/");
        assert!(addr.is_dir());
    }

    #[test]
    fn test_parse_scheme_is_case_insensitive() {
        let addr = StorageAddress::parse("SS:///bucket/").unwrap();
        assert_eq!(addr.path(), "/bucket/");
    }

    #[test]
    fn test_parse_root() {
        let addr = StorageAddress::parse("ss:///").unwrap();
        assert_eq!(addr.path(), "/");
        assert_eq!(addr.bucket_prefix(), pair("", ""));
    }

    #[test]
    fn test_parse_decodes_path() {
        let addr = StorageAddress::parse("ss:///bucket/my%20file.txt").unwrap();
        assert_eq!(addr.path(), "/bucket/my file.txt");
    }

    #[test]
    fn test_parse_keeps_path_as_written() {
        let cases = [
            ("ss:///b/../c/", "/b/../c/", pair("b", "../c/")),
            ("ss:///b/%2e%2e/", "/b/../", pair("b", "../")),
            ("ss:///b/./x", "/b/./x", pair("b", "./x")),
            ("ss:///b/dir/..", "/b/dir/..", pair("b", "dir/..")),
            ("ss:///b/a\tb", "/b/a\tb", pair("b", "a\tb")),
            ("ss:///b/key?version=2#frag", "/b/key", pair("b", "key")),
            ("ss:/b/key", "/b/key", pair("b", "key")),
        ];
        for (raw, path, expected) in cases {
            let addr = StorageAddress::parse(raw).unwrap();
            assert_eq!(addr.path(), path, "{raw:?}");
            assert_eq!(addr.bucket_prefix(), expected, "{raw:?}");
        }
    }

    #[test]
    fn test_parse_rejects_invalid_addresses() {
        let invalid = [
            "s3:///bucket/key",
            "https:///bucket",
            "ss://bucket/key",
            "ss://host/",
            "ss://",
            "ss:bucket",
            "/bucket/key",
            "bucket/key",
            "",
        ];
        for raw in invalid {
            let err = StorageAddress::parse(raw).unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::InvalidAddress, "{raw:?}");
        }
    }

    #[test]
    fn test_parse_then_split_roundtrip() {
        let cases = [
            ("ss:///a", pair("a", "")),
            ("ss:///a/", pair("a", "")),
            ("ss:///a/b", pair("a", "b")),
            ("ss:///a/b/c/", pair("a", "b/c/")),
        ];
        for (raw, expected) in cases {
            let addr: StorageAddress = raw.parse().unwrap();
            assert_eq!(addr.bucket_prefix(), expected, "{raw}");
        }
    }

    #[test]
    fn test_split_bucket_prefix() {
        assert_eq!(split_bucket_prefix(""), pair("", ""));
        assert_eq!(split_bucket_prefix("/"), pair("", ""));
        assert_eq!(split_bucket_prefix("bucket"), pair("bucket", ""));
        assert_eq!(split_bucket_prefix("/bucket"), pair("bucket", ""));
        assert_eq!(split_bucket_prefix("bucket/"), pair("bucket", ""));
        assert_eq!(split_bucket_prefix("/bucket/dir/file"), pair("bucket", "dir/file"));
        // only a single leading separator is stripped
        assert_eq!(split_bucket_prefix("//bucket"), pair("", "bucket"));
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("/a/b"), "/a/");
        assert_eq!(dirname("/a/"), "/a/");
        assert_eq!(dirname("/a"), "/");
        assert_eq!(dirname("a"), "");
    }
}
