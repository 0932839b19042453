//! 덤프 파일 변환 모듈
//!
//! 한 줄에 JSON 값 하나가 들어 있는 덤프 파일을 읽어
//! `{ "<컬렉션 이름>": [레코드...] }` 문서로 변환합니다.
//! 잘못된 줄은 [`LineError`]로 기록하고 건너뛰며 파일 변환은 계속됩니다.

use memmap2::Mmap;
use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::document::{wrap, write_document};
use crate::error::{LowConvError, Result};

/// 에러 메시지에 담을 줄 내용 최대 길이 (문자 수)
const MAX_CONTENT_PREVIEW: usize = 120;

/// 파싱에 실패해 건너뛴 줄
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    /// 1부터 시작하는 줄 번호
    pub line_number: usize,
    /// 공백을 제거한 줄 내용
    pub content: String,
    /// 파서가 보고한 사유
    pub reason: String,
}

impl LineError {
    /// 출력용으로 잘라낸 줄 내용
    pub fn preview(&self) -> String {
        if self.content.chars().count() <= MAX_CONTENT_PREVIEW {
            return self.content.clone();
        }
        let head: String = self.content.chars().take(MAX_CONTENT_PREVIEW).collect();
        format!("{}…", head)
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}번째 줄: {} ({})",
            self.line_number,
            self.reason,
            self.preview()
        )
    }
}

/// 덤프 텍스트 파싱 결과
#[derive(Debug, Default, Clone)]
pub struct ParsedDump {
    /// 입력 순서대로 파싱된 레코드
    pub records: Vec<Value>,
    /// 건너뛴 줄
    pub skipped: Vec<LineError>,
}

/// 덤프 파일 하나의 변환 결과
#[derive(Debug)]
pub struct DumpOutcome {
    /// 입력 파일 경로
    pub source: PathBuf,
    /// 컬렉션 이름 (출력 문서의 최상위 키)
    pub collection: String,
    /// 출력 파일 경로
    pub output: PathBuf,
    /// 변환된 레코드 수
    pub record_count: usize,
    /// 건너뛴 줄
    pub skipped: Vec<LineError>,
    /// 원본 파일 크기
    pub bytes_read: u64,
    /// 출력 파일 크기 (유효성 검사 모드에서는 0)
    pub bytes_written: u64,
}

/// 덤프 처리 옵션
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    /// 유효성 검사만 수행 (출력 파일 없음)
    pub validate_only: bool,
    /// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
    pub mmap_threshold: u64,
}

impl DumpOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self {
            mmap_threshold: 10 * 1024 * 1024, // 10MB
            ..Default::default()
        }
    }

    /// 유효성 검사 모드 설정
    pub fn with_validate_only(mut self, validate_only: bool) -> Self {
        self.validate_only = validate_only;
        self
    }

    /// 메모리 매핑 임계값 설정
    pub fn with_mmap_threshold(mut self, threshold: u64) -> Self {
        self.mmap_threshold = threshold;
        self
    }
}

/// 덤프 텍스트를 줄 단위로 파싱
///
/// 공백뿐인 줄은 무시하고, 파싱에 실패한 줄은 `skipped`에 모읍니다.
///
/// # Examples
/// ```
/// use lowconv::dump::parse_dump_lines;
///
/// let parsed = parse_dump_lines("{\"a\":1}\n\nnot json\n[2]\n");
/// assert_eq!(parsed.records.len(), 2);
/// assert_eq!(parsed.skipped[0].line_number, 3);
/// ```
pub fn parse_dump_lines(text: &str) -> ParsedDump {
    let mut parsed = ParsedDump::default();

    for (index, line) in split_lines(text).enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(record) => parsed.records.push(record),
            Err(e) => parsed.skipped.push(LineError {
                line_number: index + 1,
                content: line.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    parsed
}

/// `\n`, `\r\n`, `\r` 어느 것으로 끝나는 줄이든 한 줄로 나눔
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// 파일 이름에서 컬렉션 이름 추출 (마지막 확장자 제거)
///
/// # Examples
/// ```
/// use lowconv::dump::collection_name;
/// use std::path::Path;
///
/// assert_eq!(collection_name(Path::new("db/items.nedb")).unwrap(), "items");
/// ```
pub fn collection_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| LowConvError::InvalidFileName {
            file: path.to_path_buf(),
        })
}

/// 덤프 파일에 대응하는 출력 파일 경로 (`<같은 폴더>/<컬렉션 이름>.json`)
pub fn output_path(path: &Path, collection: &str) -> PathBuf {
    let file_name = format!("{}.json", collection);
    match path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// 덤프 파일을 읽어 줄 단위로 파싱
pub fn read_dump(path: &Path, options: &DumpOptions) -> Result<(ParsedDump, u64)> {
    let file = File::open(path).map_err(|e| LowConvError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let file_size = file.metadata().map(|m| m.len()).unwrap_or(0);

    let parsed = if file_size >= options.mmap_threshold && file_size > 0 {
        // 대용량 파일: 메모리 매핑 사용
        let mmap = unsafe {
            Mmap::map(&file).map_err(|e| LowConvError::FileOpenError {
                file: path.to_path_buf(),
                reason: format!("메모리 매핑 실패: {}", e),
            })?
        };
        parse_dump_lines(as_utf8(path, &mmap)?)
    } else {
        // 일반 파일: 버퍼 리더 사용
        let mut bytes = Vec::with_capacity(file_size as usize);
        BufReader::new(file)
            .read_to_end(&mut bytes)
            .map_err(|e| LowConvError::FileOpenError {
                file: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        parse_dump_lines(as_utf8(path, &bytes)?)
    };

    Ok((parsed, file_size))
}

fn as_utf8<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|e| LowConvError::EncodingError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 덤프 파일 하나를 lowdb 문서로 변환
///
/// # Arguments
/// * `path` - 덤프 파일 경로
/// * `options` - 처리 옵션
///
/// # Returns
/// 변환 결과. 파일을 읽지 못하거나 출력에 실패하면 에러를 반환하며,
/// 이 경우 출력 파일은 만들어지지 않습니다.
pub fn convert_dump_file(path: &Path, options: &DumpOptions) -> Result<DumpOutcome> {
    let collection = collection_name(path)?;
    let output = output_path(path, &collection);

    if output == path {
        return Err(LowConvError::SamePath {
            path: path.to_path_buf(),
        });
    }

    let (parsed, bytes_read) = read_dump(path, options)?;
    let record_count = parsed.records.len();

    let bytes_written = if options.validate_only {
        0
    } else {
        let document = wrap(&collection, Value::Array(parsed.records));
        write_document(&output, &document)?
    };

    Ok(DumpOutcome {
        source: path.to_path_buf(),
        collection,
        output,
        record_count,
        skipped: parsed.skipped,
        bytes_read,
        bytes_written,
    })
}
