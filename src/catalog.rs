//! Case catalog built from the reference folder.
//!
//! Scanned once at startup. The order produced here fixes which case each
//! PART 1 position refers to for the whole session.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::SurveyError;
use crate::models::{has_extension, Case, CATALOG_EXTENSIONS};

/// Ordered, read-only list of cases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    cases: Vec<Case>,
}

impl Catalog {
    pub fn from_cases(cases: Vec<Case>) -> Self {
        Self { cases }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Case> {
        self.cases.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Case> {
        self.cases.iter()
    }
}

/// Scan `reference_dir` for image files and order them by case identifier.
///
/// An existing folder with no images yields an empty catalog; the caller
/// decides how to report that.
pub fn build_catalog(reference_dir: &Path) -> Result<Catalog, SurveyError> {
    if !reference_dir.is_dir() {
        return Err(SurveyError::MissingFolder {
            path: reference_dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(reference_dir).map_err(|source| SurveyError::Io {
        path: reference_dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SurveyError::Io {
            path: reference_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || !has_extension(&path, CATALOG_EXTENSIONS) {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("Skipping non UTF-8 file name {:?}", raw),
        }
    }

    // Directory listing order is platform dependent; name order keeps
    // repeated scans identical and decides ties below.
    names.sort();

    let mut cases: Vec<Case> = names.iter().map(|n| Case::new(n)).collect();
    cases.sort_by_key(|c| c.id);
    let catalog = Catalog::from_cases(cases);

    let mut seen = HashSet::new();
    for case in catalog.iter() {
        if case.id == 0 {
            warn!("No case number in '{}', treating it as case 0", case.file_name);
        }
        if !seen.insert(case.id) {
            warn!("Duplicate case number {} ('{}')", case.id, case.file_name);
        }
    }

    debug!(
        "Catalog of {} cases built from {}",
        catalog.len(),
        reference_dir.display()
    );
    Ok(catalog)
}

/// Like `build_catalog`, but an empty folder is an error.
pub fn load_catalog(reference_dir: &Path) -> Result<Catalog, SurveyError> {
    let catalog = build_catalog(reference_dir)?;
    if catalog.is_empty() {
        return Err(SurveyError::EmptyCatalog {
            path: reference_dir.to_path_buf(),
        });
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_missing_folder() {
        let tmp = TempDir::new().unwrap();
        let result = build_catalog(&tmp.path().join("Original"));
        assert!(matches!(result, Err(SurveyError::MissingFolder { .. })));
    }

    #[test]
    fn test_empty_folder_is_valid_but_load_rejects_it() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "readme.txt");
        let catalog = build_catalog(tmp.path()).unwrap();
        assert!(catalog.is_empty());
        assert!(matches!(
            load_catalog(tmp.path()),
            Err(SurveyError::EmptyCatalog { .. })
        ));
    }

    #[test]
    fn test_sorted_by_numeric_id() {
        let tmp = TempDir::new().unwrap();
        for name in ["case_10.png", "case_2.JPG", "case_1.jpeg", "notes.txt", "case_3.gif"] {
            touch(tmp.path(), name);
        }
        let catalog = build_catalog(tmp.path()).unwrap();
        let names: Vec<&str> = catalog.iter().map(|c| c.file_name.as_str()).collect();
        assert_eq!(names, vec!["case_1.jpeg", "case_2.JPG", "case_10.png"]);
        let ids: Vec<u64> = catalog.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 10]);
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        for name in ["b_5.png", "a_5.png", "x.png", "c_1.bmp", "d_20.tiff"] {
            touch(tmp.path(), name);
        }
        let first = build_catalog(tmp.path()).unwrap();
        let second = build_catalog(tmp.path()).unwrap();
        assert_eq!(first, second);
        // Unnumbered first, ties in name order
        let names: Vec<&str> = first.iter().map(|c| c.file_name.as_str()).collect();
        assert_eq!(names, vec!["x.png", "c_1.bmp", "a_5.png", "b_5.png", "d_20.tiff"]);
    }

    #[test]
    fn test_directories_are_ignored() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("7.png")).unwrap();
        touch(tmp.path(), "8.png");
        let catalog = build_catalog(tmp.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().id, 8);
    }
}
