use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

/// Durable backend persisting each partition as one JSON document under a
/// data directory.
///
/// Partition keys embed parish names, which may carry spaces and accents, so
/// the file name is a readable ASCII slug plus a short BLAKE3 tag of the
/// verbatim key. Two keys that slug identically still land in different files.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn partition_path(&self, key: &str) -> PathBuf {
        self.root.join(partition_file_name(key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.partition_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.partition_path(key);
        let tmp = path.with_extension("json.tmp");

        // Write-then-rename keeps the previous partition intact if the
        // process dies mid-write.
        fs::write(&tmp, value).map_err(|source| StoreError::Io {
            key: key.to_string(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            key: key.to_string(),
            source,
        })
    }
}

fn partition_file_name(key: &str) -> String {
    let slug: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let tag = blake3::hash(key.as_bytes()).to_hex();
    format!("{slug}-{}.json", &tag.as_str()[..8])
}
