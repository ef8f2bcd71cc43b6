//! Browse the concept images that accompany a question set.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::GalleryError;

pub const DEFAULT_GALLERY_ROOT: &str = "assets/images/concepts";

/// Folder choice meaning "the gallery root itself".
pub const ROOT_FOLDER: &str = ".";

pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 7] =
    ["png", "jpg", "jpeg", "gif", "bmp", "svg", "webp"];

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> GalleryError + '_ {
    move |source| GalleryError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// The folders a user can pick from under the gallery root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryFolders {
    root: PathBuf,
    choices: Vec<String>,
}

impl GalleryFolders {
    /// A gallery with nothing to choose from.
    #[must_use]
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            choices: Vec::new(),
        }
    }

    /// Scan `root` for immediate subdirectories.
    ///
    /// A missing root yields no choices rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::Io` if an existing root cannot be listed.
    pub fn scan(root: impl Into<PathBuf>) -> Result<Self, GalleryError> {
        let root = root.into();
        if !root.is_dir() {
            debug!(root = %root.display(), "gallery root missing");
            return Ok(Self::empty(root));
        }

        let mut subdirs = Vec::new();
        for entry in std::fs::read_dir(&root).map_err(io_error(&root))? {
            let entry = entry.map_err(io_error(&root))?;
            if entry.path().is_dir() {
                subdirs.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        subdirs.sort();

        let mut choices = Vec::with_capacity(subdirs.len() + 1);
        choices.push(ROOT_FOLDER.to_string());
        choices.extend(subdirs);
        Ok(Self { root, choices })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `"."` first, then subdirectory names in sorted order.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Directory for a folder choice.
    #[must_use]
    pub fn folder_path(&self, choice: &str) -> PathBuf {
        if choice == ROOT_FOLDER {
            self.root.clone()
        } else {
            self.root.join(choice)
        }
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Supported image files directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns `GalleryError::Io` if the directory cannot be listed.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, GalleryError> {
    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error(dir))? {
        let path = entry.map_err(io_error(dir))?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// A cursor over the images of one folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageGallery {
    images: Vec<PathBuf>,
    cursor: usize,
}

impl ImageGallery {
    #[must_use]
    pub fn new(images: Vec<PathBuf>) -> Self {
        Self { images, cursor: 0 }
    }

    /// # Errors
    ///
    /// Returns `GalleryError::Io` if the directory cannot be listed.
    pub fn open(dir: &Path) -> Result<Self, GalleryError> {
        let images = list_images(dir)?;
        debug!(dir = %dir.display(), count = images.len(), "opened gallery folder");
        Ok(Self::new(images))
    }

    #[must_use]
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn current(&self) -> Option<&Path> {
        self.images.get(self.cursor).map(PathBuf::as_path)
    }

    /// `"Image 2 of 5"`, or `None` for an empty gallery.
    #[must_use]
    pub fn caption(&self) -> Option<String> {
        (!self.images.is_empty())
            .then(|| format!("Image {} of {}", self.cursor + 1, self.images.len()))
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.images.len()
    }

    /// Step back one image; a no-op on the first.
    pub fn show_previous(&mut self) {
        if self.has_previous() {
            self.cursor -= 1;
        }
    }

    /// Step forward one image; a no-op on the last.
    pub fn show_next(&mut self) {
        if self.has_next() {
            self.cursor += 1;
        }
    }
}
