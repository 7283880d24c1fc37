use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// A file stored on Dropbox
///
/// Only the name is always given by the API, the download result header for example can be very short.
#[derive(Clone, Debug, Eq, serde::Deserialize, serde::Serialize)]
pub struct FileMetadata {
    pub name: String,
    pub id: Option<String>,
    pub path_lower: Option<String>,
    pub path_display: Option<String>,
    pub rev: Option<String>,
    pub size: Option<u64>,
    pub content_hash: Option<String>,
    pub client_modified: Option<DateTime<Utc>>,
    pub server_modified: Option<DateTime<Utc>>,
    pub is_downloadable: Option<bool>,
}

/// A folder stored on Dropbox
#[derive(Clone, Debug, Eq, serde::Deserialize, serde::Serialize)]
pub struct FolderMetadata {
    pub name: String,
    pub id: Option<String>,
    pub path_lower: Option<String>,
    pub path_display: Option<String>,
}

/// A file or folder that has been deleted
#[derive(Clone, Debug, Eq, serde::Deserialize, serde::Serialize)]
pub struct DeletedMetadata {
    pub name: String,
    pub path_lower: Option<String>,
    pub path_display: Option<String>,
}

/// Any entry returned by the API, tagged by its `.tag` field
#[derive(Clone, Debug, Eq, serde::Deserialize, serde::Serialize)]
#[serde(tag = ".tag", rename_all = "lowercase")]
pub enum Metadata {
    File(FileMetadata),
    Folder(FolderMetadata),
    Deleted(DeletedMetadata),
}

macro_rules! metadata_field_ref {
    ($field:ident, $output:ty) => {
        impl Metadata {
            pub fn $field(&self) -> $output {
                match self {
                    Self::File(item) => &item.$field,
                    Self::Folder(item) => &item.$field,
                    Self::Deleted(item) => &item.$field,
                }
            }
        }
    };
}

metadata_field_ref!(name, &str);
metadata_field_ref!(path_lower, &Option<String>);
metadata_field_ref!(path_display, &Option<String>);

impl From<FileMetadata> for Metadata {
    fn from(value: FileMetadata) -> Self {
        Self::File(value)
    }
}

impl From<FolderMetadata> for Metadata {
    fn from(value: FolderMetadata) -> Self {
        Self::Folder(value)
    }
}

impl From<DeletedMetadata> for Metadata {
    fn from(value: DeletedMetadata) -> Self {
        Self::Deleted(value)
    }
}

impl Metadata {
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    pub fn as_file(&self) -> Option<&FileMetadata> {
        match self {
            Self::File(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_file(self) -> Option<FileMetadata> {
        match self {
            Self::File(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&FolderMetadata> {
        match self {
            Self::Folder(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_folder(self) -> Option<FolderMetadata> {
        match self {
            Self::Folder(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted(_))
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Folder(_) => 0,
            Self::File(_) => 1,
            Self::Deleted(_) => 2,
        }
    }

    fn identity(&self) -> Identity<'_> {
        match self {
            Self::File(item) => Identity::of(&item.id, &item.path_lower),
            Self::Folder(item) => Identity::of(&item.id, &item.path_lower),
            Self::Deleted(item) => Identity::Path(item.path_lower.as_deref()),
        }
    }
}

/// What tells two entries with the same name apart: the id when known, the path otherwise
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd)]
enum Identity<'a> {
    Path(Option<&'a str>),
    Id(&'a str),
}

impl<'a> Identity<'a> {
    fn of(id: &'a Option<String>, path_lower: &'a Option<String>) -> Self {
        match id {
            Some(id) => Self::Id(id),
            None => Self::Path(path_lower.as_deref()),
        }
    }
}

impl PartialEq for FileMetadata {
    fn eq(&self, other: &Self) -> bool {
        let identity = Identity::of(&self.id, &self.path_lower);
        self.name == other.name && identity == Identity::of(&other.id, &other.path_lower)
    }
}

impl PartialEq for FolderMetadata {
    fn eq(&self, other: &Self) -> bool {
        let identity = Identity::of(&self.id, &self.path_lower);
        self.name == other.name && identity == Identity::of(&other.id, &other.path_lower)
    }
}

impl PartialEq for DeletedMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.path_lower == other.path_lower
    }
}

impl PartialEq for Metadata {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for Metadata {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Folders first, then files, then deleted entries, each group sorted by name
impl Ord for Metadata {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.name().cmp(other.name()))
            .then_with(|| self.identity().cmp(&other.identity()))
    }
}

#[cfg(test)]
mod tests {
    use super::Metadata;
    use std::cmp::Ordering;

    #[test]
    fn decode_tagged_entries() {
        let entries: Vec<Metadata> = serde_json::from_str(
            r#"[
    {
        ".tag": "file",
        "name": "Prime_Numbers.txt",
        "id": "id:a4ayc_80_OEAAAAAAAAAXw",
        "client_modified": "2015-05-12T15:50:38Z",
        "server_modified": "2015-05-12T15:50:38Z",
        "rev": "a1c10ce0dd78",
        "size": 7212,
        "path_lower": "/homework/math/prime_numbers.txt",
        "path_display": "/Homework/math/Prime_Numbers.txt",
        "is_downloadable": true,
        "content_hash": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    },
    {
        ".tag": "folder",
        "name": "math",
        "id": "id:a4ayc_80_OEAAAAAAAAAXz",
        "path_lower": "/homework/math",
        "path_display": "/Homework/math"
    },
    {
        ".tag": "deleted",
        "name": "old.txt",
        "path_lower": "/homework/old.txt"
    }
]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 3);
        let file = entries[0].as_file().unwrap();
        assert_eq!(file.size, Some(7212));
        assert_eq!(
            file.client_modified.map(|date| date.to_rfc3339()).as_deref(),
            Some("2015-05-12T15:50:38+00:00")
        );
        assert!(entries[1].is_folder());
        assert_eq!(entries[1].path_display().as_deref(), Some("/Homework/math"));
        assert!(entries[2].is_deleted());
        assert_eq!(entries[2].name(), "old.txt");
    }

    #[test]
    fn sort_folders_first() {
        let mut entries: Vec<Metadata> = serde_json::from_str(
            r#"[
    { ".tag": "file", "name": "a.txt", "id": "id:1" },
    { ".tag": "deleted", "name": "0.txt" },
    { ".tag": "folder", "name": "z", "id": "id:2" },
    { ".tag": "folder", "name": "b", "id": "id:3" }
]"#,
        )
        .unwrap();
        entries.sort();
        let names: Vec<&str> = entries.iter().map(|item| item.name()).collect();
        assert_eq!(names, vec!["b", "z", "a.txt", "0.txt"]);
    }

    #[test]
    fn same_name_different_ids_are_distinct() {
        let entries: Vec<Metadata> = serde_json::from_str(
            r#"[
    { ".tag": "file", "name": "x", "id": "id:2", "path_lower": "/b/x" },
    { ".tag": "file", "name": "x", "id": "id:1", "path_lower": "/a/x" },
    { ".tag": "file", "name": "x", "id": "id:1", "path_lower": "/moved/x" },
    { ".tag": "file", "name": "x", "path_lower": "/c/x" }
]"#,
        )
        .unwrap();
        assert_ne!(entries[0], entries[1]);
        assert_ne!(entries[0].cmp(&entries[1]), Ordering::Equal);
        // same id, the path doesn't matter
        assert_eq!(entries[1], entries[2]);
        assert_eq!(entries[1].cmp(&entries[2]), Ordering::Equal);
        assert_ne!(entries[1], entries[3]);
        for left in &entries {
            for right in &entries {
                assert_eq!(left == right, left.cmp(right) == Ordering::Equal);
            }
        }
        let mut sorted = entries.clone();
        sorted.sort();
        let ids: Vec<Option<&str>> = sorted
            .iter()
            .map(|item| item.as_file().unwrap().id.as_deref())
            .collect();
        assert_eq!(ids, vec![None, Some("id:1"), Some("id:1"), Some("id:2")]);
    }
}
