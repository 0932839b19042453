//! lowdb 문서 모듈
//!
//! 값 하나를 최상위 키 하나로 감싼 문서를 만들고 파일로 저장합니다.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{LowConvError, Result};

/// `{ key: value }` 문서 생성
///
/// # Examples
/// ```
/// use lowconv::document::wrap;
/// use serde_json::json;
///
/// assert_eq!(wrap("pool", json!([1, 2, 3])), json!({"pool": [1, 2, 3]}));
/// ```
pub fn wrap(key: &str, value: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(key.to_string(), value);
    Value::Object(map)
}

/// 문서를 사람이 읽기 쉬운 JSON 문자열로 직렬화
///
/// 2칸 들여쓰기를 사용하며 ASCII가 아닌 문자는 이스케이프하지 않습니다.
pub fn to_pretty_string(document: &Value, path: &Path) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(|e| LowConvError::SerializeError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 문서를 파일로 저장하고 쓴 바이트 수 반환
///
/// 직렬화가 끝난 뒤에만 파일을 열기 때문에 직렬화 실패 시 기존 파일은 그대로 남습니다.
pub fn write_document(path: &Path, document: &Value) -> Result<u64> {
    let text = to_pretty_string(document, path)?;

    fs::write(path, text.as_bytes()).map_err(|e| LowConvError::WriteError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(text.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_wrap_single_key() {
        let doc = wrap("items", json!([{"_id": "a"}]));
        let map = doc.as_object().unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map["items"], json!([{"_id": "a"}]));
    }

    #[test]
    fn test_wrap_object_value() {
        let doc = wrap("pool", json!({"a": 1}));
        assert_eq!(doc, json!({"pool": {"a": 1}}));
    }

    #[test]
    fn test_pretty_keeps_non_ascii() {
        let doc = wrap("items", json!([{"name": "아이템 道具"}]));
        let text = to_pretty_string(&doc, Path::new("items.json")).unwrap();

        assert!(text.contains("아이템 道具"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n  \"items\": ["));
    }

    #[test]
    fn test_write_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        let doc = wrap("pool", json!([1, 2, 3]));

        let written = write_document(&path, &doc).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert_eq!(written, content.len() as u64);
        let parsed: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, json!({"pool": [1, 2, 3]}));
    }

    #[test]
    fn test_write_document_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.json");

        let result = write_document(&path, &json!({"pool": []}));
        assert!(matches!(result, Err(LowConvError::WriteError { .. })));
    }
}
