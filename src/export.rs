//! CSV export of a completed response record.
//!
//! One header row with every key in insertion order and one data row. The
//! file starts with a UTF-8 BOM so spreadsheet tools pick up non-ASCII text.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::info;

use crate::error::SurveyError;
use crate::models::ResponseStore;
use crate::session::KEY_NAME;
use crate::utils::sanitize_file_component;

const UTF8_BOM: &str = "\u{feff}";

/// `survey_result_<name>_<YYYYMMDD_HHMMSS>.csv`
pub fn export_file_name<Tz: TimeZone>(record: &ResponseStore, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let name = record.get_text(KEY_NAME).unwrap_or("Unknown");
    format!(
        "survey_result_{}_{}.csv",
        sanitize_file_component(name),
        now.format("%Y%m%d_%H%M%S")
    )
}

fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render the record as CSV text, BOM included
pub fn to_csv(record: &ResponseStore) -> String {
    let header: Vec<String> = record.keys().map(csv_escape).collect();
    let row: Vec<String> = record
        .iter()
        .map(|(_, v)| csv_escape(&v.to_string()))
        .collect();
    format!("{}{}\n{}\n", UTF8_BOM, header.join(","), row.join(","))
}

/// Write `record` into `output_dir` and return the written path.
pub fn export_record<Tz: TimeZone>(
    record: &ResponseStore,
    output_dir: &Path,
    now: &DateTime<Tz>,
) -> Result<PathBuf, SurveyError>
where
    Tz::Offset: std::fmt::Display,
{
    let path = output_dir.join(export_file_name(record, now));
    let write_error = |source| SurveyError::WriteError {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(output_dir).map_err(write_error)?;
    let mut file = fs::File::create(&path).map_err(write_error)?;
    file.write_all(to_csv(record).as_bytes())
        .and_then(|_| file.sync_all())
        .map_err(write_error)?;

    info!("Saved {} answers to {}", record.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use tempfile::TempDir;

    fn sample_record() -> ResponseStore {
        let mut record = ResponseStore::default();
        record.record(KEY_NAME, "홍길동");
        record.record("Experience", 4u32);
        record.record("Case_1_File", "case_1.png");
        record.record("Preference_Reason", "sharper, \"cleaner\" edges");
        record
    }

    #[test]
    fn test_file_name_format() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            export_file_name(&sample_record(), &now),
            "survey_result_홍길동_20240309_140507.csv"
        );
        assert_eq!(
            export_file_name(&ResponseStore::default(), &now),
            "survey_result_Unknown_20240309_140507.csv"
        );
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_to_csv_layout() {
        let csv = to_csv(&sample_record());
        assert!(csv.starts_with(UTF8_BOM));
        let body = csv.trim_start_matches(UTF8_BOM);
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Evaluator_Name,Experience,Case_1_File,Preference_Reason"
        );
        assert_eq!(
            lines[1],
            "홍길동,4,case_1.png,\"sharper, \"\"cleaner\"\" edges\""
        );
    }

    #[test]
    fn test_export_writes_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("results");
        let now = Local::now();
        let path = export_record(&sample_record(), &out, &now).unwrap();
        assert!(path.starts_with(&out));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("홍길동"));
    }

    #[test]
    fn test_export_failure_is_write_error() {
        let tmp = TempDir::new().unwrap();
        // A regular file where the output directory should be
        let blocker = tmp.path().join("not_a_dir");
        std::fs::write(&blocker, b"").unwrap();
        let result = export_record(&sample_record(), &blocker, &Local::now());
        assert!(matches!(result, Err(SurveyError::WriteError { .. })));
    }
}
