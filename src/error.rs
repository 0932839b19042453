//! 에러 타입 정의 모듈
//!
//! lowconv 변환 과정에서 발생할 수 있는 파일 단위 에러를 정의합니다.
//! 줄 단위 파싱 실패는 에러가 아니라 [`crate::dump::LineError`]로 수집됩니다.

use std::path::PathBuf;
use thiserror::Error;

/// lowconv에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum LowConvError {
    /// 입력 폴더가 존재하지 않음
    #[error("입력 폴더를 찾을 수 없습니다: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// 입력이 폴더가 아님
    #[error("입력 경로가 폴더가 아닙니다: {path}")]
    NotADirectory { path: PathBuf },

    /// 폴더 목록 읽기 실패
    #[error("폴더를 읽을 수 없습니다 ({path}): {reason}")]
    DirectoryReadError { path: PathBuf, reason: String },

    /// 파일 열기/읽기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// UTF-8 텍스트가 아님
    #[error("UTF-8 텍스트가 아닙니다 ({file}): {reason}")]
    EncodingError { file: PathBuf, reason: String },

    /// JSON 파싱 실패
    #[error("JSON 파싱 실패 ({file}): {reason}")]
    ParseError { file: PathBuf, reason: String },

    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패 ({file}): {reason}")]
    SerializeError { file: PathBuf, reason: String },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    WriteError { file: PathBuf, reason: String },

    /// 컬렉션 이름을 만들 수 없는 파일 이름
    #[error("컬렉션 이름을 추출할 수 없는 파일 이름입니다: {file}")]
    InvalidFileName { file: PathBuf },

    /// 입력과 출력 경로가 같음
    #[error("입력 파일과 출력 파일이 같습니다: {path}")]
    SamePath { path: PathBuf },

    /// 유효하지 않은 패턴
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },
}

/// lowconv 결과 타입 별칭
pub type Result<T> = std::result::Result<T, LowConvError>;
