//! Sound library orchestration: restore, import, and reset.

use crate::error::LibraryError;
use crate::leases::{LeaseSet, MediaLease};
use crate::sources::{parse_url_list, scan_folder};
use crate::Result;
use pad_core::defaults::default_sounds;
use pad_core::types::{
    ButtonFace, DefaultIcon, Sound, SoundId, SoundSource, SourceKind, StorableSound,
    StoredLocation,
};
use pad_storage::{blobs, settings};
use pad_thumbs::ThumbnailClient;
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Non-fatal report about thumbnail generation during an import.
///
/// Carries the first failure's message; the batch itself still completes,
/// with affected entries falling back to default icons.
#[derive(Debug, Clone)]
pub struct ThumbnailAdvisory {
    /// Human-readable message from the first failed request
    pub message: String,
    /// Whether the failure looked like quota exhaustion
    pub quota_exhausted: bool,
}

/// Result of a completed import.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    /// Number of entries now on the board
    pub imported: usize,
    /// Thumbnail trouble, if any; never aborts the import
    pub advisory: Option<ThumbnailAdvisory>,
}

/// The active sound library.
///
/// All state the board needs lives here: the database pool backing the blob
/// and settings stores, the thumbnail client, the current sound list, and
/// the media leases that keep blob-backed entries playable. Every mutating
/// operation takes `&mut self`, so a second import cannot start while one
/// is in flight.
pub struct SoundLibrary {
    pool: SqlitePool,
    thumbs: ThumbnailClient,
    spool_dir: PathBuf,
    sounds: Vec<Sound>,
    leases: LeaseSet,
}

impl SoundLibrary {
    /// Create a library manager.
    ///
    /// `spool_dir` is where media leases are materialized; it is created on
    /// first use.
    pub fn new(pool: SqlitePool, thumbs: ThumbnailClient, spool_dir: impl Into<PathBuf>) -> Self {
        Self {
            pool,
            thumbs,
            spool_dir: spool_dir.into(),
            sounds: Vec::new(),
            leases: LeaseSet::new(),
        }
    }

    /// The current sound list, ready for rendering
    pub fn sounds(&self) -> &[Sound] {
        &self.sounds
    }

    /// Restore the library persisted by a previous session.
    ///
    /// Falls back to the built-in defaults when nothing was persisted, when
    /// the summary is unparsable, or when storage is unavailable; restore
    /// itself never fails. Stored entries whose blob has gone missing are
    /// dropped.
    pub async fn restore(&mut self) {
        match self.restore_stored().await {
            Ok(Some((sounds, leases))) => {
                info!(count = sounds.len(), "Sound library restored");
                self.sounds = sounds;
                self.leases.replace(leases);
            }
            Ok(None) => {
                debug!("No persisted sound library, using defaults");
                self.replace_with_defaults();
            }
            Err(e) => {
                warn!(error = %e, "Failed to restore sound library, using defaults");
                self.replace_with_defaults();
            }
        }
    }

    async fn restore_stored(&self) -> Result<Option<(Vec<Sound>, Vec<MediaLease>)>> {
        let Some(value) = settings::get_setting(&self.pool, settings::SETTING_SOUND_LIBRARY).await?
        else {
            return Ok(None);
        };

        let entries: Vec<StorableSound> = serde_json::from_value(value)?;

        let mut sounds = Vec::with_capacity(entries.len());
        let mut leases = Vec::new();

        for entry in entries {
            let playable_url = match entry.location() {
                Some(StoredLocation::Remote(url)) => url.to_string(),
                Some(StoredLocation::Blob(key)) => {
                    match blobs::get(&self.pool, key).await? {
                        Some(bytes) => {
                            let lease =
                                MediaLease::create(&self.spool_dir, entry.id.as_str(), &bytes)?;
                            let url = lease.url().to_string();
                            leases.push(lease);
                            url
                        }
                        None => {
                            warn!(id = %entry.id, key = %key, "Dropping sound with missing blob");
                            continue;
                        }
                    }
                }
                None => {
                    warn!(id = %entry.id, "Dropping ill-formed stored sound");
                    continue;
                }
            };

            let face = entry.face();
            sounds.push(Sound::new(entry.id, entry.name, playable_url, face));
        }

        Ok(Some((sounds, leases)))
    }

    /// Import a batch of sound sources, replacing the whole library.
    ///
    /// With a credential, one thumbnail is requested per source
    /// concurrently; every request settles before persistence starts, and
    /// failures only downgrade the affected entries to default icons. The
    /// previous library's blobs, summary, and leases are all replaced.
    pub async fn import(
        &mut self,
        sources: Vec<SoundSource>,
        credential: Option<&str>,
    ) -> Result<ImportOutcome> {
        if sources.is_empty() {
            return Err(LibraryError::EmptyBatch);
        }

        info!(count = sources.len(), "Importing sound batch");

        // The import replaces the whole library, never merges
        blobs::clear(&self.pool).await?;

        let (images, advisory) = match credential {
            Some(key) => self.generate_thumbnails(&sources, key).await,
            None => {
                debug!("No API credential, skipping thumbnail generation");
                (vec![None; sources.len()], None)
            }
        };

        let mut sounds = Vec::with_capacity(sources.len());
        let mut stored = Vec::with_capacity(sources.len());
        let mut leases = Vec::new();

        for (index, (source, image)) in sources.into_iter().zip(images).enumerate() {
            let id = SoundId::generate();

            let (face, icon_index, image_url) = match image {
                Some(uri) => (ButtonFace::Image(uri.clone()), None, Some(uri)),
                None => (
                    ButtonFace::Icon(DefaultIcon::for_index(index)),
                    Some((index % DefaultIcon::COUNT) as u32),
                    None,
                ),
            };

            match source.kind {
                SourceKind::LocalFile(path) => {
                    let bytes = tokio::fs::read(&path).await?;

                    let key = format!("local-{id}");
                    blobs::put(&self.pool, &key, &bytes).await?;

                    let lease = MediaLease::create(&self.spool_dir, id.as_str(), &bytes)?;
                    sounds.push(Sound::new(id.clone(), source.name.clone(), lease.url(), face));
                    leases.push(lease);

                    stored.push(StorableSound {
                        id,
                        name: source.name,
                        icon_index,
                        image_url,
                        url: None,
                        blob_key: Some(key),
                    });
                }
                SourceKind::RemoteUrl(url) => {
                    sounds.push(Sound::new(id.clone(), source.name.clone(), url.clone(), face));

                    stored.push(StorableSound {
                        id,
                        name: source.name,
                        icon_index,
                        image_url,
                        url: Some(url),
                        blob_key: None,
                    });
                }
            }
        }

        let summary = serde_json::to_value(&stored)?;
        settings::set_setting(&self.pool, settings::SETTING_SOUND_LIBRARY, &summary).await?;

        let imported = sounds.len();
        self.sounds = sounds;
        self.leases.replace(leases);

        info!(imported, "Sound batch imported");

        Ok(ImportOutcome { imported, advisory })
    }

    /// Import a folder of audio files.
    ///
    /// A file named `key.txt` in the folder sets the API credential for
    /// this and future imports.
    pub async fn import_folder(&mut self, dir: &Path) -> Result<ImportOutcome> {
        let scan = scan_folder(dir)?;

        let mut credential = self.credential().await?;
        if let Some(key_file) = scan.credential_file {
            match tokio::fs::read_to_string(&key_file).await {
                Ok(contents) => match self.set_credential(&contents).await {
                    Ok(key) => {
                        info!("API credential loaded from key file");
                        credential = Some(key);
                    }
                    Err(e) => warn!(error = %e, "Ignoring unusable key file"),
                },
                Err(e) => {
                    warn!(path = %key_file.display(), error = %e, "Could not read key file");
                }
            }
        }

        self.import(scan.sources, credential.as_deref()).await
    }

    /// Import from a newline-delimited list of URLs.
    pub async fn import_url_list(&mut self, text: &str) -> Result<ImportOutcome> {
        let sources = parse_url_list(text);
        let credential = self.credential().await?;
        self.import(sources, credential.as_deref()).await
    }

    /// Reset to the built-in defaults.
    ///
    /// Clears the blob store, removes the persisted summary, and releases
    /// every lease. The stored credential is untouched.
    pub async fn reset(&mut self) -> Result<()> {
        blobs::clear(&self.pool).await?;
        settings::delete_setting(&self.pool, settings::SETTING_SOUND_LIBRARY).await?;
        self.replace_with_defaults();

        info!("Sound library reset to defaults");
        Ok(())
    }

    /// The stored API credential, if one was set
    pub async fn credential(&self) -> Result<Option<String>> {
        let value = settings::get_setting(&self.pool, settings::SETTING_API_CREDENTIAL).await?;
        Ok(value.and_then(|v| v.as_str().map(str::to_string)))
    }

    /// Trim and persist an API credential; returns the stored form
    pub async fn set_credential(&mut self, key: &str) -> Result<String> {
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(LibraryError::InvalidCredential);
        }

        settings::set_setting(
            &self.pool,
            settings::SETTING_API_CREDENTIAL,
            &serde_json::Value::String(trimmed.to_string()),
        )
        .await?;

        Ok(trimmed.to_string())
    }

    /// Remove the stored API credential
    pub async fn clear_credential(&mut self) -> Result<()> {
        settings::delete_setting(&self.pool, settings::SETTING_API_CREDENTIAL).await?;
        Ok(())
    }

    /// Request one thumbnail per source, concurrently, and wait for every
    /// request to settle. Failures become `None` images; the first one is
    /// reported as an advisory.
    async fn generate_thumbnails(
        &self,
        sources: &[SoundSource],
        api_key: &str,
    ) -> (Vec<Option<String>>, Option<ThumbnailAdvisory>) {
        info!(count = sources.len(), "Generating thumbnails");

        let mut handles = Vec::with_capacity(sources.len());
        for source in sources {
            let client = self.thumbs.clone();
            let name = source.name.clone();
            let key = api_key.to_string();
            handles.push(tokio::spawn(async move { client.generate(&name, &key).await }));
        }

        let mut images = Vec::with_capacity(handles.len());
        let mut advisory = None;

        for (handle, source) in handles.into_iter().zip(sources) {
            match handle.await {
                Ok(Ok(uri)) => images.push(Some(uri)),
                Ok(Err(e)) => {
                    warn!(name = %source.name, error = %e, "Thumbnail generation failed");
                    if advisory.is_none() {
                        advisory = Some(ThumbnailAdvisory {
                            quota_exhausted: e.is_quota_exhausted(),
                            message: e.to_string(),
                        });
                    }
                    images.push(None);
                }
                Err(e) => {
                    warn!(name = %source.name, error = %e, "Thumbnail task failed");
                    if advisory.is_none() {
                        advisory = Some(ThumbnailAdvisory {
                            quota_exhausted: false,
                            message: e.to_string(),
                        });
                    }
                    images.push(None);
                }
            }
        }

        (images, advisory)
    }

    fn replace_with_defaults(&mut self) {
        self.sounds = default_sounds();
        self.leases.clear();
    }
}
