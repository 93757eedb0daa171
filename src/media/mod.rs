// SPDX-License-Identifier: MPL-2.0
//! Page asset lookup.
//!
//! Maps a [`Page`]'s image and thumbnail names to files inside the assets
//! directory. Pixel decoding is left to iced's image pipeline; only the file
//! header is read here, to learn the image size for aspect-fit layout.

use crate::config::IMAGE_EXTENSIONS;
use crate::domain::viewer::{Page, Pages};
use crate::error::{Error, Result};
use iced::widget::image;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A page image ready to be drawn.
#[derive(Debug, Clone)]
pub struct PageImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl PageImage {
    /// Opens `path` lazily and reads its dimensions from the header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the header cannot be read or recognized.
    pub fn open(path: &Path) -> Result<Self> {
        let (width, height) =
            image_rs::image_dimensions(path).map_err(|err| Error::Io(err.to_string()))?;
        Ok(Self {
            handle: image::Handle::from_path(path),
            width,
            height,
        })
    }

    /// Width divided by height; `None` for degenerate images.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0).then(|| self.width as f32 / self.height as f32)
    }
}

/// Resolves asset names to files in one directory.
#[derive(Debug, Clone)]
pub struct PageAssets {
    dir: PathBuf,
}

impl PageAssets {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Finds `<dir>/<name>.<ext>` for the first existing supported extension.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        IMAGE_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{name}.{ext}")))
            .find(|path| path.is_file())
    }

    #[must_use]
    pub fn image_path(&self, page: &Page) -> Option<PathBuf> {
        self.resolve(&page.image_name)
    }

    #[must_use]
    pub fn thumbnail_path(&self, page: &Page) -> Option<PathBuf> {
        self.resolve(&page.thumbnail_name())
    }

    /// Loads every page and thumbnail that exists on disk.
    ///
    /// Missing or unreadable files are logged and skipped; the view shows a
    /// placeholder for them.
    #[must_use]
    pub fn load_all(&self, pages: &Pages) -> PageImages {
        let mut images = PageImages::default();

        for page in pages {
            match self.image_path(page).map(|path| PageImage::open(&path)) {
                Some(Ok(image)) => {
                    images.full.insert(page.id.value(), image);
                }
                Some(Err(err)) => {
                    tracing::warn!(
                        page = %page.id,
                        image = %page.image_name,
                        %err,
                        "unreadable page image"
                    );
                }
                None => {
                    tracing::warn!(
                        page = %page.id,
                        image = %page.image_name,
                        dir = %self.dir.display(),
                        "page image not found"
                    );
                }
            }

            if let Some(path) = self.thumbnail_path(page) {
                images
                    .thumbnails
                    .insert(page.id.value(), image::Handle::from_path(path));
            }
        }

        tracing::info!(
            loaded = images.full.len(),
            thumbnails = images.thumbnails.len(),
            total = pages.len(),
            "page assets resolved"
        );
        images
    }
}

/// Images keyed by page id.
#[derive(Debug, Clone, Default)]
pub struct PageImages {
    full: HashMap<u32, PageImage>,
    thumbnails: HashMap<u32, image::Handle>,
}

impl PageImages {
    #[must_use]
    pub fn image(&self, page: &Page) -> Option<&PageImage> {
        self.full.get(&page.id.value())
    }

    #[must_use]
    pub fn thumbnail(&self, page: &Page) -> Option<&image::Handle> {
        self.thumbnails.get(&page.id.value())
    }
}
