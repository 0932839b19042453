//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 두 변환기(`nedb2low`, `pool2low`)의 명령줄 인자를 정의합니다.
//! 모든 인자에 기본값이 있어 플래그 없이 실행할 수 있습니다.

use clap::Parser;
use std::path::PathBuf;

/// 덤프 파일 기본 확장자
pub const DEFAULT_DUMP_EXTENSION: &str = "nedb";

/// 덤프 파일 기본 폴더
pub const DEFAULT_DUMP_DIR: &str = "db";

/// 단일 배열 변환기 기본 입력 경로
pub const DEFAULT_POOL_INPUT: &str = "data/pool.json";

/// 단일 배열 변환기 기본 출력 경로
pub const DEFAULT_POOL_OUTPUT: &str = "data/pool_lowdb.json";

/// 단일 배열 변환기 기본 최상위 키
pub const DEFAULT_POOL_KEY: &str = "pool";

/// nedb2low CLI 인자 구조체
#[derive(Parser, Debug, Clone)]
#[command(
    name = "nedb2low",
    author = "YourName <your@email.com>",
    version,
    about = "NEDB DUMP TO LOWDB CONVERTER - 폴더 내 NeDB 덤프 파일을 lowdb JSON 문서로 변환",
    long_about = r#"
NEDB DUMP TO LOWDB CONVERTER
============================

지정된 폴더에서 덤프 파일(한 줄에 JSON 하나)을 찾아
파일마다 { "<컬렉션 이름>": [...] } 형태의 JSON 문서를 만듭니다.
출력 파일은 입력 파일과 같은 폴더에 <컬렉션 이름>.json 으로 저장됩니다.

잘못된 JSON 줄은 보고 후 건너뛰며, 나머지 줄은 계속 변환됩니다.

예제:
  nedb2low
  nedb2low --dir ./db --verbose
  nedb2low --dir ./db --pattern "item*" --dry-run
  nedb2low --validate-only --log errors.jsonl
"#
)]
pub struct DumpArgs {
    /// 덤프 파일이 있는 폴더 경로
    #[arg(short, long, default_value = DEFAULT_DUMP_DIR)]
    pub dir: PathBuf,

    /// 덤프 파일 확장자 (점 제외, 대소문자 구분)
    #[arg(short, long, default_value = DEFAULT_DUMP_EXTENSION)]
    pub ext: String,

    /// 파일 이름 패턴 필터 (glob 형식, 예: "item*", "users?.nedb")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// 상세 출력 모드 (건너뛴 줄의 내용과 사유 표시)
    #[arg(short, long)]
    pub verbose: bool,

    /// 실제 변환 없이 처리될 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 줄 단위 JSON 유효성 검사만 수행 (출력 파일 없음)
    #[arg(long)]
    pub validate_only: bool,

    /// 에러 로그 파일 경로 (JSON Lines 형식)
    #[arg(long)]
    pub log: Option<PathBuf>,
}

impl DumpArgs {
    /// 앞쪽 점을 제거한 확장자 반환 (".nedb" → "nedb")
    pub fn extension(&self) -> &str {
        self.ext.trim_start_matches('.')
    }
}

/// pool2low CLI 인자 구조체
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pool2low",
    author = "YourName <your@email.com>",
    version,
    about = "POOL TO LOWDB CONVERTER - 단일 JSON 파일을 { \"pool\": ... } 문서로 변환"
)]
pub struct PoolArgs {
    /// 입력 JSON 파일 경로
    #[arg(short, long, default_value = DEFAULT_POOL_INPUT)]
    pub input: PathBuf,

    /// 출력 JSON 파일 경로 (입력과 달라야 함)
    #[arg(short, long, default_value = DEFAULT_POOL_OUTPUT)]
    pub output: PathBuf,

    /// 최상위 키 이름
    #[arg(short, long, default_value = DEFAULT_POOL_KEY)]
    pub key: String,
}
