//! Sources of background templates and illustrations.

use crate::image::{Image, ImageError};
use derive_more::{Display, From};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Opaque identifier of a background template or an illustration
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
pub struct AssetId(pub String);

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        AssetId(id.to_string())
    }
}

#[derive(Error, Debug)]
#[error("no image available for asset `{id}`")]
pub struct AssetError {
    pub id: AssetId,
    #[source]
    pub source: ImageError,
}

/// Lists and fetches the images cards are rendered from. Listings are in a stable
/// order; fetching an identifier that cannot be turned into an image is an error.
pub trait AssetSource {
    /// Background templates, which set the canvas size of the card
    fn backgrounds(&self) -> Vec<AssetId>;

    fn illustrations(&self) -> Vec<AssetId>;

    fn fetch(&self, id: &AssetId) -> Result<Image, AssetError>;
}

const EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Assets stored as image files under a root directory: backgrounds in `templates/`
/// and illustrations in `illustrations/`. Identifiers are paths relative to the
/// root, sorted by file name.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub const BACKGROUNDS: &'static str = "templates";
    pub const ILLUSTRATIONS: &'static str = "illustrations";

    pub fn new<P: Into<PathBuf>>(root: P) -> DirectoryAssets {
        DirectoryAssets { root: root.into() }
    }

    fn list(&self, dir: &str) -> Vec<AssetId> {
        let path = self.root.join(dir);
        let entries = match std::fs::read_dir(&path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("can't read asset directory {}: {e}", path.display());
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| {
                Path::new(name)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
            })
            .collect();
        names.sort();

        names
            .into_iter()
            .map(|name| AssetId(format!("{dir}/{name}")))
            .collect()
    }
}

impl AssetSource for DirectoryAssets {
    fn backgrounds(&self) -> Vec<AssetId> {
        self.list(Self::BACKGROUNDS)
    }

    fn illustrations(&self) -> Vec<AssetId> {
        self.list(Self::ILLUSTRATIONS)
    }

    fn fetch(&self, id: &AssetId) -> Result<Image, AssetError> {
        Image::new_from_disk(self.root.join(&id.0)).map_err(|source| AssetError {
            id: id.clone(),
            source,
        })
    }
}
