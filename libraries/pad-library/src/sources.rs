//! Building import sources from the two input surfaces: a folder of audio
//! files, or a newline-delimited list of remote URLs.

use crate::error::LibraryError;
use crate::Result;
use pad_core::types::SoundSource;
use std::path::{Path, PathBuf};
use url::Url;
use walkdir::WalkDir;

/// Supported audio file extensions
const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "wav", "aac", "m4a", "opus"];

/// A file with this name inside an imported folder carries the API
/// credential instead of audio.
const CREDENTIAL_FILE_NAME: &str = "key.txt";

/// Display name used when none can be derived
pub const FALLBACK_NAME: &str = "Untitled";

/// Result of scanning a folder for importable sounds
#[derive(Debug)]
pub struct FolderScan {
    /// Audio files found, ordered by path
    pub sources: Vec<SoundSource>,
    /// Path of the `key.txt` credential file, if one was present
    pub credential_file: Option<PathBuf>,
}

/// Scan a folder for audio files and an optional credential file.
///
/// The walk is recursive; entry names are the file stems. Files named
/// `key.txt` (case-insensitive) are never treated as sounds.
pub fn scan_folder(path: &Path) -> Result<FolderScan> {
    if !path.exists() {
        return Err(LibraryError::FileNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(LibraryError::InvalidPath(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    let mut audio_files = Vec::new();
    let mut credential_file = None;

    for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
        let file_path = entry.path();

        if file_path.is_dir() {
            continue;
        }

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if credential_file.is_none() && file_name.eq_ignore_ascii_case(CREDENTIAL_FILE_NAME) {
            credential_file = Some(file_path.to_path_buf());
            continue;
        }

        if is_audio_file(file_path) {
            audio_files.push(file_path.to_path_buf());
        }
    }

    // Walk order is filesystem-dependent; keep the board stable
    audio_files.sort();

    let sources = audio_files
        .into_iter()
        .map(|file_path| {
            let name = file_path
                .file_stem()
                .and_then(|s| s.to_str())
                .filter(|s| !s.is_empty())
                .unwrap_or(FALLBACK_NAME)
                .to_string();
            SoundSource::local(name, file_path)
        })
        .collect();

    Ok(FolderScan {
        sources,
        credential_file,
    })
}

/// Check if a file is a supported audio file
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Parse a newline-delimited URL list into import sources.
///
/// Lines are trimmed; lines not beginning with an http scheme are
/// discarded. Names derive from the URL's final path segment.
pub fn parse_url_list(text: &str) -> Vec<SoundSource> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("http"))
        .map(|line| SoundSource::remote(name_from_url(line), line))
        .collect()
}

/// Derive a display name from a URL: the final path segment with its
/// extension stripped and percent-encoding decoded, or [`FALLBACK_NAME`].
fn name_from_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return FALLBACK_NAME.to_string();
    };

    let segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");

    let stem = segment
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(segment);

    if stem.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    match urlencoding::decode(stem) {
        Ok(decoded) if !decoded.trim().is_empty() => decoded.into_owned(),
        _ => FALLBACK_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pad_core::types::SourceKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_audio_file() {
        assert!(is_audio_file(Path::new("test.mp3")));
        assert!(is_audio_file(Path::new("test.MP3")));
        assert!(is_audio_file(Path::new("test.flac")));
        assert!(!is_audio_file(Path::new("test.txt")));
        assert!(!is_audio_file(Path::new("test")));
    }

    #[test]
    fn test_scan_folder_finds_audio_and_credential() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();

        fs::write(base.join("boom.mp3"), b"fake mp3").unwrap();
        fs::write(base.join("tada.ogg"), b"fake ogg").unwrap();
        fs::write(base.join("readme.txt"), b"not audio").unwrap();
        fs::write(base.join("KEY.TXT"), b"k-123").unwrap();

        let subdir = base.join("more");
        fs::create_dir(&subdir).unwrap();
        fs::write(subdir.join("whoosh.wav"), b"fake wav").unwrap();

        let scan = scan_folder(base).unwrap();

        assert_eq!(scan.sources.len(), 3);
        assert!(scan.sources.iter().any(|s| s.name == "boom"));
        assert!(scan.sources.iter().any(|s| s.name == "whoosh"));
        assert!(!scan.sources.iter().any(|s| s.name == "readme"));
        assert!(scan.credential_file.is_some());
    }

    #[test]
    fn test_scan_folder_rejects_missing_and_non_directories() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("sound.mp3");
        fs::write(&file, b"x").unwrap();

        assert!(matches!(
            scan_folder(&temp.path().join("nope")),
            Err(LibraryError::FileNotFound(_))
        ));
        assert!(matches!(
            scan_folder(&file),
            Err(LibraryError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_parse_url_list_filters_non_http_lines() {
        let text = "https://x/y/clip.mp3\nnot-a-url\n\n  http://host/other.ogg  \nftp://nope/file.mp3";
        let sources = parse_url_list(text);

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].name, "clip");
        assert_eq!(
            sources[0].kind,
            SourceKind::RemoteUrl("https://x/y/clip.mp3".to_string())
        );
        assert_eq!(sources[1].name, "other");
    }

    #[test]
    fn test_name_from_url_decodes_and_strips_extension() {
        assert_eq!(name_from_url("https://x/y/clip.mp3"), "clip");
        assert_eq!(
            name_from_url("https://x/En-uk-you%27re_welcome.ogg.mp3"),
            "En-uk-you're_welcome.ogg"
        );
        assert_eq!(name_from_url("https://x/air%20horn.wav"), "air horn");
    }

    #[test]
    fn test_name_from_url_falls_back_when_underivable() {
        assert_eq!(name_from_url("https://example.com/"), FALLBACK_NAME);
        assert_eq!(name_from_url("https://example.com/.hidden"), FALLBACK_NAME);
        assert_eq!(name_from_url("http://[broken"), FALLBACK_NAME);
    }
}
