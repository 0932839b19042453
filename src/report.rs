//! 에러 로그 모듈
//!
//! 줄 단위/파일 단위 에러를 JSON Lines 형식의 로그 파일로 남깁니다.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::dump::LineError;
use crate::error::{LowConvError, Result};

/// 에러 로그 한 줄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorLogEntry {
    /// 에러가 발생한 파일
    pub file: PathBuf,
    /// 줄 번호 (파일 단위 에러면 없음)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line: Option<usize>,
    /// 문제가 된 줄 내용
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
    /// 에러 사유
    pub reason: String,
}

impl ErrorLogEntry {
    /// 건너뛴 줄에서 로그 항목 생성
    pub fn from_line(file: &Path, error: &LineError) -> Self {
        Self {
            file: file.to_path_buf(),
            line: Some(error.line_number),
            content: Some(error.content.clone()),
            reason: error.reason.clone(),
        }
    }

    /// 파일 단위 에러에서 로그 항목 생성
    pub fn from_file(file: &Path, reason: impl Into<String>) -> Self {
        Self {
            file: file.to_path_buf(),
            line: None,
            content: None,
            reason: reason.into(),
        }
    }
}

/// 에러 로그 파일 작성 (항목마다 JSON 한 줄)
pub fn write_error_log(path: &Path, entries: &[ErrorLogEntry]) -> Result<()> {
    let write_err = |e: std::io::Error| LowConvError::WriteError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    for entry in entries {
        let line = serde_json::to_string(entry).map_err(|e| LowConvError::SerializeError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        writeln!(writer, "{}", line).map_err(write_err)?;
    }

    writer.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_error_log_lines() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("errors.jsonl");

        let line_error = LineError {
            line_number: 4,
            content: "{broken".to_string(),
            reason: "key must be a string".to_string(),
        };
        let entries = vec![
            ErrorLogEntry::from_line(Path::new("db/items.nedb"), &line_error),
            ErrorLogEntry::from_file(Path::new("db/bad.nedb"), "UTF-8 텍스트가 아닙니다"),
        ];

        write_error_log(&log_path, &entries).unwrap();

        let content = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(!lines[1].contains("\"line\""));

        let first: ErrorLogEntry = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, entries[0]);
        let second: ErrorLogEntry = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.line, None);
    }

    #[test]
    fn test_write_empty_log() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("errors.jsonl");

        write_error_log(&log_path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }
}
