/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// Opaque reference to the project (account) every backend request is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectRef(String);

impl ProjectRef {
    /// Create a new project reference
    pub fn new(project_ref: impl Into<String>) -> Self {
        Self(project_ref.into())
    }

    /// The project reference as given by the project resolver
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProjectRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bucket as reported by the storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Name of the bucket
    pub name: String,
}

impl Bucket {
    /// Create a new bucket record
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An object (or virtual folder) as reported by a single-level object listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageObject {
    /// Name of the object relative to the listed directory
    pub name: String,

    /// Unique identifier of a stored object. The backend reports no identifier for
    /// virtual folders.
    pub id: Option<String>,
}

impl StorageObject {
    /// Create a record for a stored object
    pub fn object(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: Some(id.into()),
        }
    }

    /// Create a record for a virtual folder
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }

    /// Returns true if this record marks a virtual folder rather than a stored object
    pub fn is_folder_marker(&self) -> bool {
        self.id.is_none()
    }
}

/// One immediate child discovered by a single-level listing.
///
/// Directory names always end with `/`. Entries are relative to the listed
/// directory and never carry a full path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    is_directory: bool,
}

impl Entry {
    pub(crate) fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
        }
    }

    pub(crate) fn directory(name: impl Into<String>) -> Self {
        let mut name = name.into();
        name.push('/');
        Self {
            name,
            is_directory: true,
        }
    }

    /// Name of the entry, suffixed with `/` for directories
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if this entry is a bucket or virtual directory
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Consume the entry and return its name
    pub fn into_name(self) -> String {
        self.name
    }
}

impl From<StorageObject> for Entry {
    fn from(value: StorageObject) -> Self {
        if value.is_folder_marker() {
            Entry::directory(value.name)
        } else {
            Entry::leaf(value.name)
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A hierarchical path split into its bucket and intra-bucket prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketPrefix {
    /// The bucket name, empty when the path names no bucket
    pub bucket: String,

    /// Everything after the bucket segment, empty when the path names a whole bucket
    pub prefix: String,
}

#[cfg(test)]
mod tests {
    use super::{Entry, StorageObject};

    #[test]
    fn test_folder_marker_becomes_directory() {
        let entry = Entry::from(StorageObject::folder("photos"));
        assert!(entry.is_directory());
        assert_eq!(entry.name(), "photos/");

        let entry = Entry::from(StorageObject::object("cat.png", "4f1c"));
        assert!(!entry.is_directory());
        assert_eq!(entry.name(), "cat.png");
    }
}
