//! 덤프 파일 탐색 모듈
//!
//! 확장자와 선택적 glob 패턴으로 폴더 안의 덤프 파일을 골라냅니다.

use glob::Pattern;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{LowConvError, Result};

/// 덤프 파일 필터 (확장자 + 선택적 glob 패턴)
#[derive(Debug, Clone)]
pub struct DumpFilter {
    extension: String,
    pattern: Option<Pattern>,
}

impl DumpFilter {
    /// 새 필터 생성
    ///
    /// # Arguments
    /// * `extension` - 덤프 파일 확장자 (점 제외, 대소문자 구분)
    /// * `pattern` - 글로브 패턴 문자열 (None이면 확장자만 검사)
    ///
    /// # Examples
    /// ```
    /// use lowconv::scan::DumpFilter;
    ///
    /// let filter = DumpFilter::new("nedb", Some("item*".to_string())).unwrap();
    /// assert!(filter.matches("items.nedb"));
    /// assert!(!filter.matches("users.nedb"));
    /// assert!(!filter.matches("items.json"));
    /// ```
    pub fn new(extension: &str, pattern: Option<String>) -> Result<Self> {
        let compiled = match pattern {
            Some(ref p) => Some(
                Pattern::new(p)
                    .map_err(|_| LowConvError::InvalidPattern { pattern: p.clone() })?,
            ),
            None => None,
        };

        Ok(Self {
            extension: extension.trim_start_matches('.').to_string(),
            pattern: compiled,
        })
    }

    /// 파일 이름이 덤프 파일 조건을 만족하는지 확인
    pub fn matches(&self, file_name: &str) -> bool {
        self.matches_path(Path::new(file_name))
    }

    /// 경로의 파일 이름이 덤프 파일 조건을 만족하는지 확인
    ///
    /// 확장자는 OS 문자열 그대로 비교하므로 UTF-8이 아닌 이름도 걸러지지 않습니다.
    /// 이런 파일은 변환 단계에서 파일 이름 에러로 보고됩니다.
    pub fn matches_path(&self, path: &Path) -> bool {
        let has_extension = path.extension() == Some(OsStr::new(&self.extension));

        has_extension
            && match (&self.pattern, path.file_name()) {
                (Some(p), Some(name)) => p.matches(&name.to_string_lossy()),
                (Some(_), None) => false,
                (None, _) => true,
            }
    }

    /// 확장자 반환
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// 패턴이 설정되어 있는지 확인
    pub fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }
}

/// 폴더 바로 아래의 덤프 파일 수집
///
/// 하위 폴더는 탐색하지 않으며, 결과는 파일 이름 순으로 정렬됩니다.
/// 폴더 자체를 읽지 못하면 에러를 반환합니다.
pub fn collect_dump_files(dir: &Path, filter: &DumpFilter) -> Result<Vec<PathBuf>> {
    validate_dir(dir)?;

    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| LowConvError::DirectoryReadError {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if filter.matches_path(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// 입력 폴더 유효성 검사
fn validate_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(LowConvError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    if !dir.is_dir() {
        return Err(LowConvError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    Ok(())
}
