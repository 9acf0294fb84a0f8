//! Image lookup across variant folders.
//!
//! Lookup never fails: exact name, then matching case number, then a gray
//! placeholder. The variant folders are allowed to disagree on naming and
//! extensions for the same case.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgb, RgbImage};
use tracing::{debug, warn};

use crate::models::{extract_case_id, has_extension, Case, MATCH_EXTENSIONS};

pub const PLACEHOLDER_SIZE: u32 = 300;
pub const PLACEHOLDER_GRAY: [u8; 3] = [220, 220, 220];

/// Where a displayed image came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Exact(PathBuf),
    Matched(PathBuf),
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub image: DynamicImage,
    pub source: ImageSource,
}

impl ResolvedImage {
    pub fn is_placeholder(&self) -> bool {
        self.source == ImageSource::Placeholder
    }
}

/// Neutral gray square shown when no file can be found for a variant
pub fn placeholder() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(
        PLACEHOLDER_SIZE,
        PLACEHOLDER_SIZE,
        Rgb(PLACEHOLDER_GRAY),
    ))
}

fn open(path: &Path) -> Option<DynamicImage> {
    match image::open(path) {
        Ok(img) => Some(img),
        Err(e) => {
            warn!("Could not decode {}: {}", path.display(), e);
            None
        }
    }
}

/// Find the image for `case` inside `folder`.
pub fn resolve_image(folder: &Path, case: &Case) -> ResolvedImage {
    let exact = folder.join(&case.file_name);
    if exact.is_file() {
        if let Some(image) = open(&exact) {
            return ResolvedImage {
                image,
                source: ImageSource::Exact(exact),
            };
        }
    }

    // Unnumbered files would all pair with each other as case 0
    if case.id != 0 {
        if let Some(found) = match_by_id(folder, case.id) {
            return found;
        }
    }

    debug!(
        "No image for '{}' in {}, using placeholder",
        case.file_name,
        folder.display()
    );
    ResolvedImage {
        image: placeholder(),
        source: ImageSource::Placeholder,
    }
}

fn match_by_id(folder: &Path, id: u64) -> Option<ResolvedImage> {
    let entries = fs::read_dir(folder).ok()?;
    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_extension(p, MATCH_EXTENSIONS))
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map_or(false, |n| extract_case_id(n) == id)
        })
        .collect();
    candidates.sort();

    candidates.into_iter().find_map(|path| {
        open(&path).map(|image| ResolvedImage {
            image,
            source: ImageSource::Matched(path),
        })
    })
}
