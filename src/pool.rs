//! 단일 JSON 파일 변환 모듈
//!
//! 파일 전체를 JSON 값 하나로 읽어 `{ "pool": <값> }` 문서로 저장합니다.
//! 줄 단위 복구가 없으므로 입력이 잘못되면 출력 파일을 건드리지 않고 실패합니다.

use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::document::{wrap, write_document};
use crate::error::{LowConvError, Result};

/// 단일 파일 변환 결과
#[derive(Debug)]
pub struct PoolOutcome {
    /// 출력 파일 경로
    pub output: PathBuf,
    /// 감싼 값이 배열이면 요소 수
    pub item_count: Option<usize>,
    /// 출력 파일 크기
    pub bytes_written: u64,
}

/// 입력 파일을 JSON 값 하나로 파싱
pub fn read_json(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|e| LowConvError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| LowConvError::ParseError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 두 경로가 같은 파일을 가리키는지 확인
///
/// 둘 다 존재하면 정규화한 경로로 비교합니다 (`./a.json`과 `a.json`은 같은 파일).
fn is_same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// 입력 파일을 `{ key: <값> }` 문서로 변환하여 저장
///
/// # Arguments
/// * `input` - 입력 JSON 파일 경로
/// * `output` - 출력 파일 경로 (입력과 달라야 함)
/// * `key` - 최상위 키 이름
pub fn convert_pool(input: &Path, output: &Path, key: &str) -> Result<PoolOutcome> {
    if is_same_file(input, output) {
        return Err(LowConvError::SamePath {
            path: input.to_path_buf(),
        });
    }

    let value = read_json(input)?;
    let item_count = value.as_array().map(Vec::len);

    let document = wrap(key, value);
    let bytes_written = write_document(output, &document)?;

    Ok(PoolOutcome {
        output: output.to_path_buf(),
        item_count,
        bytes_written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_convert_array() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("pool.json");
        let output = temp_dir.path().join("pool_lowdb.json");
        fs::write(&input, "[1,2,3]").unwrap();

        let outcome = convert_pool(&input, &output, "pool").unwrap();

        assert_eq!(outcome.item_count, Some(3));
        let doc: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(doc, json!({"pool": [1, 2, 3]}));
    }

    #[test]
    fn test_convert_object() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("pool.json");
        let output = temp_dir.path().join("pool_lowdb.json");
        fs::write(&input, r#"{"25": {"id": 25}}"#).unwrap();

        let outcome = convert_pool(&input, &output, "pool").unwrap();

        assert_eq!(outcome.item_count, None);
        let doc: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(doc, json!({"pool": {"25": {"id": 25}}}));
    }

    #[test]
    fn test_invalid_json_leaves_output_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("pool.json");
        let output = temp_dir.path().join("pool_lowdb.json");
        fs::write(&input, "[1, 2,").unwrap();
        fs::write(&output, "previous").unwrap();

        let result = convert_pool(&input, &output, "pool");

        assert!(matches!(result, Err(LowConvError::ParseError { .. })));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("missing.json");
        let output = temp_dir.path().join("out.json");

        let result = convert_pool(&input, &output, "pool");

        assert!(matches!(result, Err(LowConvError::FileOpenError { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_same_path_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("pool.json");
        fs::write(&input, "[]").unwrap();

        let result = convert_pool(&input, &input, "pool");

        assert!(matches!(result, Err(LowConvError::SamePath { .. })));
        assert_eq!(fs::read_to_string(&input).unwrap(), "[]");
    }

    #[test]
    fn test_same_file_through_other_spelling_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        fs::create_dir(&data_dir).unwrap();
        let input = data_dir.join("pool.json");
        fs::write(&input, "[1]").unwrap();
        let output = temp_dir.path().join(".").join("data").join("..").join("data").join("pool.json");

        let result = convert_pool(&input, &output, "pool");

        assert!(matches!(result, Err(LowConvError::SamePath { .. })));
        assert_eq!(fs::read_to_string(&input).unwrap(), "[1]");
    }
}
