//! lowconv - NEDB DUMP TO LOWDB CONVERTER
//!
//! NeDB 덤프 파일(한 줄에 JSON 하나)과 단일 JSON 파일을
//! lowdb가 읽는 `{ "<컬렉션>": [...] }` 형태의 문서로 변환하는 도구입니다.
//!
//! # 변환기
//!
//! - `nedb2low`: 폴더 안의 `*.nedb` 파일마다 `<컬렉션>.json` 생성.
//!   잘못된 줄은 보고 후 건너뜁니다.
//! - `pool2low`: `data/pool.json`을 `{ "pool": ... }`로 감싸 `data/pool_lowdb.json`에 저장.
//!   입력이 잘못되면 출력 없이 실패합니다.
//!
//! # 예제
//!
//! ```bash
//! # 기본 폴더(db) 변환
//! nedb2low
//!
//! # 유효성 검사만, 에러는 로그 파일로
//! nedb2low --dir ./db --validate-only --log errors.jsonl
//!
//! # 단일 파일 변환
//! pool2low
//! ```

pub mod cli;
pub mod document;
pub mod dump;
pub mod error;
pub mod pool;
pub mod report;
pub mod scan;
pub mod stats;

// Re-exports for convenient access
pub use cli::{DumpArgs, PoolArgs};
pub use dump::{convert_dump_file, DumpOptions, DumpOutcome, LineError};
pub use error::{LowConvError, Result};
pub use pool::{convert_pool, PoolOutcome};
pub use scan::{collect_dump_files, DumpFilter};
pub use stats::{format_bytes, Statistics};
