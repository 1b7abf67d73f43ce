//! Verse dataset: the ordered, read-only list the reader cycles through.
//!
//! A built-in set ships with the binary. A TOML file with `[[verses]]`
//! entries can replace it; unreadable or empty files fall back to the
//! built-in set so the reader always has at least one verse.

mod builtin;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One verse: text, translation and the narration file name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Verse {
    pub surah: String,
    pub verse_number: u32,
    pub arabic: String,
    pub french: String,
    pub audio_file: String,
}

/// Non-empty ordered verse list.
#[derive(Debug, Clone)]
pub struct VerseStore {
    verses: Vec<Verse>,
}

#[derive(Deserialize)]
struct VerseFile {
    #[serde(default)]
    verses: Vec<Verse>,
}

impl VerseStore {
    pub fn builtin() -> Self {
        Self {
            verses: builtin::builtin_verses(),
        }
    }

    /// Returns `None` for an empty list.
    pub fn from_verses(verses: Vec<Verse>) -> Option<Self> {
        if verses.is_empty() {
            None
        } else {
            Some(Self { verses })
        }
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Verse at `index`, clamped to the last entry.
    pub fn verse(&self, index: usize) -> &Verse {
        &self.verses[index.min(self.verses.len() - 1)]
    }

    /// Narration file for the verse at `index`, resolved under `audio_dir`.
    pub fn audio_path(&self, audio_dir: &Path, index: usize) -> PathBuf {
        audio_dir.join(&self.verse(index).audio_file)
    }
}

pub fn parse_verses(contents: &str) -> Result<VerseStore> {
    let file: VerseFile = toml::from_str(contents).context("Parsing verse dataset")?;
    match VerseStore::from_verses(file.verses) {
        Some(store) => Ok(store),
        None => bail!("Verse dataset contains no [[verses]] entries"),
    }
}

/// Load the dataset at `path`, or the built-in set when no path is given or
/// the file is unusable.
pub fn load_verses(path: Option<&Path>) -> VerseStore {
    let Some(path) = path else {
        debug!("Using built-in verse dataset");
        return VerseStore::builtin();
    };
    let loaded = fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))
        .and_then(|contents| parse_verses(&contents));
    match loaded {
        Ok(store) => {
            info!(path = %path.display(), verses = store.len(), "Loaded verse dataset");
            store
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to built-in verses: {err:#}"
            );
            VerseStore::builtin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dataset(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "ayati-link-verses-{}-{name}.toml",
            std::process::id()
        ));
        fs::write(&path, contents).expect("write dataset");
        path
    }

    #[test]
    fn builtin_dataset_has_three_verses() {
        let store = VerseStore::builtin();
        assert_eq!(store.len(), 3);
        assert_eq!(store.verse(1).verse_number, 255);
        assert_eq!(store.verse(2).audio_file, "112.mp3");
    }

    #[test]
    fn audio_path_joins_dir_and_file() {
        let store = VerseStore::builtin();
        assert_eq!(
            store.audio_path(Path::new("assets/audio"), 1),
            PathBuf::from("assets/audio/255.mp3")
        );
    }

    #[test]
    fn loads_dataset_file() {
        let path = temp_dataset(
            "valid",
            r#"
[[verses]]
surah = "Sourate Al-Fatiha"
verse_number = 1
arabic = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ"
french = "Au nom d'Allah, le Tout Miséricordieux, le Très Miséricordieux."
audio_file = "001.mp3"
"#,
        );
        let store = load_verses(Some(&path));
        let _ = fs::remove_file(&path);
        assert_eq!(store.len(), 1);
        assert_eq!(store.verse(0).surah, "Sourate Al-Fatiha");
    }

    #[test]
    fn empty_dataset_falls_back_to_builtin() {
        let path = temp_dataset("empty", "verses = []\n");
        let store = load_verses(Some(&path));
        let _ = fs::remove_file(&path);
        assert_eq!(store.len(), VerseStore::builtin().len());
    }

    #[test]
    fn missing_dataset_falls_back_to_builtin() {
        let store = load_verses(Some(Path::new("/nonexistent/ayati-link/verses.toml")));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(VerseStore::from_verses(Vec::new()).is_none());
    }
}
