use chrono::Utc;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Durable store for flat-file minutes artifacts, grouped under a category
/// prefix such as `Meet/meeting-`. The relational record stays authoritative;
/// implementations only mirror its content, so every failure here is
/// recoverable from the caller's point of view.
pub trait MinutesStorage: Send + Sync {
    /// Overwrite `name` with `content`, creating missing category directories.
    fn write(&self, name: &str, content: &str) -> io::Result<()>;

    /// Full artifact content. A missing artifact reads as an empty string so
    /// callers can tell "no data" from "store unreachable".
    fn read(&self, name: &str) -> io::Result<String>;

    /// Remove the artifact. Deleting a missing artifact is not an error.
    fn delete(&self, name: &str) -> io::Result<()>;

    /// Generate `<prefix><YYYYMMDD>T<HHMMSS>.txt` from the current time and
    /// write `content` under it, returning the generated name. Same-second
    /// saves with the same prefix can collide; callers accept that window.
    fn save(&self, prefix: &str, content: &str) -> io::Result<String> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S");
        let name = format!("{prefix}{stamp}.txt");
        self.write(&name, content)?;
        Ok(name)
    }
}

/// Filesystem-backed store rooted at a configured directory. No caching;
/// every call is a fresh I/O operation.
pub struct FileMinutesStorage {
    root: PathBuf,
}

impl FileMinutesStorage {
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl MinutesStorage for FileMinutesStorage {
    fn write(&self, name: &str, content: &str) -> io::Result<()> {
        let target = self.resolve(name);
        if let Some(parent) = target.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(target, content.as_bytes())
    }

    fn read(&self, name: &str) -> io::Result<String> {
        let target = self.resolve(name);
        if target.exists() {
            fs::read_to_string(target)
        } else {
            Ok(String::new())
        }
    }

    fn delete(&self, name: &str) -> io::Result<()> {
        let target = self.resolve(name);
        if target.exists() {
            fs::remove_file(target)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let store = FileMinutesStorage::new(dir.path()).unwrap();

        store.write("note.txt", "first").unwrap();
        store.write("note.txt", "second").unwrap();

        assert_eq!(store.read("note.txt").unwrap(), "second");
    }

    #[test]
    fn read_missing_artifact_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileMinutesStorage::new(dir.path()).unwrap();

        assert_eq!(store.read("Meet/meeting-nope.txt").unwrap(), "");
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileMinutesStorage::new(dir.path()).unwrap();

        store.write("gone.txt", "x").unwrap();
        store.delete("gone.txt").unwrap();
        store.delete("gone.txt").unwrap();

        assert_eq!(store.read("gone.txt").unwrap(), "");
    }

    #[test]
    fn write_creates_category_directories() {
        let dir = tempdir().unwrap();
        let store = FileMinutesStorage::new(dir.path()).unwrap();

        store.write("Meet/meeting-20260101T000000.txt", "body").unwrap();

        assert!(dir.path().join("Meet/meeting-20260101T000000.txt").exists());
    }

    #[test]
    fn save_generates_prefixed_timestamp_name() {
        let dir = tempdir().unwrap();
        let store = FileMinutesStorage::new(dir.path()).unwrap();

        let name = store.save("Meet/meeting-", "body").unwrap();

        assert!(name.starts_with("Meet/meeting-"));
        assert!(name.ends_with(".txt"));
        let stamp = &name["Meet/meeting-".len()..name.len() - ".txt".len()];
        assert_eq!(stamp.len(), 15);
        assert_eq!(stamp.as_bytes()[8], b'T');
        assert!(stamp[..8].bytes().all(|b| b.is_ascii_digit()));
        assert!(stamp[9..].bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(store.read(&name).unwrap(), "body");
    }
}
