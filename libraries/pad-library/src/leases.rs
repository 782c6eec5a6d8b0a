//! Media leases: ephemeral playable references to blob audio
//!
//! Audio imported from local files lives in the blob store; to play it, the
//! bytes are materialized as a temp file in a spool directory. A
//! [`MediaLease`] owns one such file and removes it when dropped, and a
//! [`LeaseSet`] owns every lease belonging to the current sound list so the
//! whole generation is released together when the list is replaced.

use std::io::Write;
use std::path::Path;
use tempfile::TempPath;

/// An owned temp file holding playable audio bytes.
///
/// The file is deleted when the lease is dropped.
pub struct MediaLease {
    path: TempPath,
    url: String,
}

impl MediaLease {
    /// Materialize blob bytes as a temp file inside the spool directory.
    pub fn create(spool_dir: &Path, id: &str, bytes: &[u8]) -> std::io::Result<Self> {
        std::fs::create_dir_all(spool_dir)?;

        let mut file = tempfile::Builder::new()
            .prefix(&format!("{id}-"))
            .suffix(".media")
            .tempfile_in(spool_dir)?;
        file.write_all(bytes)?;
        file.flush()?;

        let path = file.into_temp_path();
        let url = path.display().to_string();

        Ok(Self { path, url })
    }

    /// Resolved address of the leased audio, consumable by a player
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Filesystem path of the leased audio
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for MediaLease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaLease").field("url", &self.url).finish()
    }
}

/// The set of leases owned by the current sound list.
#[derive(Debug, Default)]
pub struct LeaseSet {
    leases: Vec<MediaLease>,
}

impl LeaseSet {
    /// Create an empty lease set
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole set, releasing every lease of the old generation
    pub fn replace(&mut self, leases: Vec<MediaLease>) {
        self.leases = leases;
    }

    /// Release every lease
    pub fn clear(&mut self) {
        self.leases.clear();
    }

    /// Number of live leases
    pub fn len(&self) -> usize {
        self.leases.len()
    }

    /// Whether the set holds no leases
    pub fn is_empty(&self) -> bool {
        self.leases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lease_materializes_bytes_and_cleans_up_on_drop() {
        let spool = TempDir::new().unwrap();
        let lease = MediaLease::create(spool.path(), "s1", b"audio").unwrap();

        let path = lease.path().to_path_buf();
        assert_eq!(std::fs::read(&path).unwrap(), b"audio");
        assert_eq!(lease.url(), path.display().to_string());

        drop(lease);
        assert!(!path.exists());
    }

    #[test]
    fn replace_releases_the_old_generation() {
        let spool = TempDir::new().unwrap();
        let old = MediaLease::create(spool.path(), "old", b"a").unwrap();
        let old_path = old.path().to_path_buf();

        let mut set = LeaseSet::new();
        set.replace(vec![old]);
        assert_eq!(set.len(), 1);

        let new = MediaLease::create(spool.path(), "new", b"b").unwrap();
        let new_path = new.path().to_path_buf();
        set.replace(vec![new]);

        assert!(!old_path.exists());
        assert!(new_path.exists());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn clear_releases_everything() {
        let spool = TempDir::new().unwrap();
        let lease = MediaLease::create(spool.path(), "s1", b"a").unwrap();
        let path = lease.path().to_path_buf();

        let mut set = LeaseSet::new();
        set.replace(vec![lease]);
        set.clear();

        assert!(set.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn create_makes_the_spool_directory() {
        let root = TempDir::new().unwrap();
        let spool = root.path().join("nested/spool");
        let lease = MediaLease::create(&spool, "s1", b"a").unwrap();
        assert!(lease.path().starts_with(&spool));
    }
}
