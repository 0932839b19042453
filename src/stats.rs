//! 통계 및 유틸리티 모듈
//!
//! 덤프 변환 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

use crate::dump::DumpOutcome;

/// 처리 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 총 파일 수
    pub total_files: usize,
    /// 변환(또는 검사) 성공 파일 수
    pub converted_files: usize,
    /// 파일 단위 실패 수
    pub failed_files: usize,
    /// 출력된 레코드 수
    pub records: usize,
    /// 건너뛴 줄 수
    pub skipped_lines: usize,
    /// 건너뛴 줄이 하나라도 있는 파일 수
    pub files_with_skips: usize,
    /// 읽은 총 바이트
    pub total_bytes_read: u64,
    /// 쓴 총 바이트
    pub total_bytes_written: u64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 파일 하나의 변환 결과 반영
    pub fn record_outcome(&mut self, outcome: &DumpOutcome) {
        self.converted_files += 1;
        self.records += outcome.record_count;
        self.skipped_lines += outcome.skipped.len();
        if !outcome.skipped.is_empty() {
            self.files_with_skips += 1;
        }
        self.total_bytes_read += outcome.bytes_read;
        self.total_bytes_written += outcome.bytes_written;
    }

    /// 파일 단위 실패 반영
    pub fn record_failure(&mut self) {
        self.failed_files += 1;
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 성공률 (%)
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_files == 0 {
            return None;
        }
        Some((self.converted_files as f64 / self.total_files as f64) * 100.0)
    }

    /// 변환 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 변환 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 전체 파일:    {}",
            "📁".bright_cyan(),
            self.total_files
        );
        println!(
            "  {} 성공:         {}",
            "✅".bright_green(),
            self.converted_files.to_string().green()
        );
        self.print_failed_line();

        println!(
            "  {} 레코드:       {}",
            "🧾".bright_white(),
            self.records.to_string().green()
        );
        self.print_skipped_line();

        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.total_bytes_read)
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.total_bytes_written)
        );

        if let Some(rate) = self.success_rate() {
            println!("  {} 성공률:       {:.1}%", "📈".bright_white(), rate);
        }

        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }

    /// 유효성 검사 통계 요약 출력
    pub fn print_validation_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 🔍 유효성 검사 결과".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 전체 파일:    {}",
            "📁".bright_cyan(),
            self.total_files
        );
        println!(
            "  {} 깨끗한 파일:  {}",
            "✅".bright_green(),
            (self.converted_files - self.files_with_skips)
                .to_string()
                .green()
        );
        self.print_failed_line();

        println!(
            "  {} 유효한 줄:    {}",
            "🧾".bright_white(),
            self.records.to_string().green()
        );
        self.print_skipped_line();

        println!(
            "  {} 검사 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }

    fn print_failed_line(&self) {
        if self.failed_files > 0 {
            println!(
                "  {} 실패:         {}",
                "❌".bright_red(),
                self.failed_files.to_string().red()
            );
        } else {
            println!("  {} 실패:         {}", "✅".bright_green(), "0".green());
        }
    }

    fn print_skipped_line(&self) {
        if self.skipped_lines > 0 {
            println!(
                "  {} 건너뛴 줄:    {}",
                "⚠️".bright_yellow(),
                self.skipped_lines.to_string().yellow()
            );
        } else {
            println!("  {} 건너뛴 줄:    {}", "✅".bright_green(), "0".green());
        }
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 형식화된 문자열 (예: "1.25 MB")
///
/// # Examples
/// ```
/// use lowconv::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 3600 {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}시간 {}분", hours, mins)
    } else if secs >= 60 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        format!("{}분 {}초", mins, remaining_secs)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dump::LineError;
    use std::path::PathBuf;

    fn outcome(records: usize, skipped: usize) -> DumpOutcome {
        DumpOutcome {
            source: PathBuf::from("db/items.nedb"),
            collection: "items".to_string(),
            output: PathBuf::from("db/items.json"),
            record_count: records,
            skipped: (0..skipped)
                .map(|i| LineError {
                    line_number: i + 1,
                    content: "oops".to_string(),
                    reason: "expected value".to_string(),
                })
                .collect(),
            bytes_read: 100,
            bytes_written: 200,
        }
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1073741824), "1.00 GB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(5)), "5.000초");
        assert_eq!(format_duration(Duration::from_secs(65)), "1분 5초");
        assert_eq!(format_duration(Duration::from_secs(3665)), "1시간 1분");
    }

    #[test]
    fn test_statistics_counters() {
        let mut stats = Statistics::new(3);

        stats.record_outcome(&outcome(5, 0));
        stats.record_outcome(&outcome(2, 3));
        stats.record_failure();

        assert_eq!(stats.converted_files, 2);
        assert_eq!(stats.failed_files, 1);
        assert_eq!(stats.records, 7);
        assert_eq!(stats.skipped_lines, 3);
        assert_eq!(stats.files_with_skips, 1);
        assert_eq!(stats.total_bytes_read, 200);
        assert_eq!(stats.total_bytes_written, 400);
    }

    #[test]
    fn test_success_rate() {
        let mut stats = Statistics::new(4);
        assert_eq!(stats.success_rate(), Some(0.0));

        stats.record_outcome(&outcome(1, 0));
        assert_eq!(stats.success_rate(), Some(25.0));

        assert_eq!(Statistics::new(0).success_rate(), None);
    }
}
