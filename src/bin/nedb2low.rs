//! nedb2low - NEDB DUMP TO LOWDB CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use lowconv::{
    cli::DumpArgs,
    dump::{collection_name, convert_dump_file, output_path, DumpOptions, DumpOutcome},
    report::{write_error_log, ErrorLogEntry},
    scan::{collect_dump_files, DumpFilter},
    stats::Statistics,
};

fn main() -> Result<()> {
    let args = DumpArgs::parse();

    // 헤더 출력
    print_header(&args);

    // 덤프 파일 필터 초기화
    let filter = DumpFilter::new(args.extension(), args.pattern.clone())
        .context("파일 필터 초기화 실패")?;

    // 덤프 파일 수집
    let dump_files = collect_dump_files(&args.dir, &filter).context("덤프 파일 탐색 실패")?;

    if dump_files.is_empty() {
        println!(
            "{}",
            format!("⚠️ 처리할 .{} 파일이 없습니다.", filter.extension()).yellow()
        );
        return Ok(());
    }

    println!(
        "  {} 발견된 파일 수: {}",
        "📋".bright_white(),
        dump_files.len().to_string().bright_green()
    );

    // 드라이런 모드
    if args.dry_run {
        print_dry_run(&dump_files);
        return Ok(());
    }

    run_conversion(&args, dump_files)
}

/// 헤더 출력
fn print_header(args: &DumpArgs) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🚀 NEDB DUMP TO LOWDB CONVERTER".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 입력 폴더: {:?}", "📂".bright_cyan(), args.dir);
    println!("  {} 확장자: .{}", "📄".bright_green(), args.extension());

    if let Some(ref pattern) = args.pattern {
        println!("  {} 패턴 필터: {}", "🔍".bright_magenta(), pattern);
    }

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 변환 없음)".yellow()
        );
    }

    if args.validate_only {
        println!("  {} {}", "🔍".bright_cyan(), "유효성 검사 모드".cyan());
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 파일 검색 중...".bright_cyan());
}

/// 드라이런 출력
fn print_dry_run(dump_files: &[PathBuf]) {
    println!("\n{}", "📋 처리 예정 파일 목록:".bright_cyan());
    for (i, path) in dump_files.iter().enumerate() {
        let target = match collection_name(path) {
            Ok(collection) => display_name(&output_path(path, &collection)),
            Err(e) => e.to_string().red().to_string(),
        };
        println!("  {}. {} → {}", i + 1, display_name(path), target);
    }
    println!(
        "\n{} 총 {} 개의 파일이 처리될 예정입니다.",
        "ℹ️".bright_blue(),
        dump_files.len().to_string().bright_green()
    );
}

/// 변환(또는 유효성 검사) 실행
fn run_conversion(args: &DumpArgs, dump_files: Vec<PathBuf>) -> Result<()> {
    let mut stats = Statistics::new(dump_files.len());
    let pb = create_progress_bar(dump_files.len());

    let options = DumpOptions::new().with_validate_only(args.validate_only);

    if args.validate_only {
        println!("\n{}", "🔍 유효성 검사 중...".bright_cyan());
    } else {
        println!("\n{}", "⚡ 변환 중...".bright_cyan());
    }

    let mut log_entries: Vec<ErrorLogEntry> = Vec::new();
    let mut failures: Vec<(PathBuf, String)> = Vec::new();

    for path in dump_files {
        match convert_dump_file(&path, &options) {
            Ok(outcome) => {
                report_outcome(&pb, &outcome, args);
                log_entries.extend(
                    outcome
                        .skipped
                        .iter()
                        .map(|e| ErrorLogEntry::from_line(&outcome.source, e)),
                );
                stats.record_outcome(&outcome);
            }
            Err(e) => {
                pb.println(format!(
                    "  {} {} {}",
                    "✗".red(),
                    display_name(&path),
                    e.to_string().dimmed()
                ));
                log_entries.push(ErrorLogEntry::from_file(&path, e.to_string()));
                stats.record_failure();
                failures.push((path, e.to_string()));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("완료!");

    // 에러 출력
    print_failures(&failures);

    // 로그 파일 작성
    if let Some(ref log_path) = args.log {
        write_error_log(log_path, &log_entries)
            .with_context(|| format!("에러 로그 저장 실패: {:?}", log_path))?;
        println!("\n{} 에러 로그 저장: {:?}", "📝".bright_cyan(), log_path);
    }

    // 통계 출력
    if args.validate_only {
        stats.print_validation_summary();
    } else {
        stats.print_summary();
    }

    if stats.failed_files > 0 {
        anyhow::bail!("{} 개의 파일을 처리하지 못했습니다", stats.failed_files);
    }

    if args.validate_only && stats.skipped_lines > 0 {
        println!(
            "\n{} {} 개의 줄에 오류가 있습니다.\n",
            "⚠️".bright_yellow(),
            stats.skipped_lines.to_string().red()
        );
    } else if args.validate_only {
        println!("\n{} 모든 줄이 유효합니다!\n", "✅".bright_green());
    } else {
        println!("\n{} 변환 완료\n", "✅".bright_green());
    }

    Ok(())
}

/// 파일 하나의 결과와 건너뛴 줄 출력
fn report_outcome(pb: &ProgressBar, outcome: &DumpOutcome, args: &DumpArgs) {
    for error in &outcome.skipped {
        let content = if args.verbose {
            error.content.clone()
        } else {
            error.preview()
        };
        pb.println(format!(
            "  {} {} {}번째 줄 건너뜀: {}",
            "⚠".yellow(),
            display_name(&outcome.source),
            error.line_number,
            content.dimmed()
        ));
        if args.verbose {
            pb.println(format!("      {}", error.reason.dimmed()));
        }
    }

    if args.validate_only {
        pb.println(format!(
            "  {} {} ({} 레코드, {} 줄 건너뜀)",
            "✓".green(),
            display_name(&outcome.source),
            outcome.record_count,
            outcome.skipped.len()
        ));
    } else {
        pb.println(format!(
            "  {} {} → {} ({} 레코드)",
            "✓".green(),
            display_name(&outcome.source),
            display_name(&outcome.output),
            outcome.record_count
        ));
    }
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// 실패 파일 목록 출력
fn print_failures(failures: &[(PathBuf, String)]) {
    if failures.is_empty() {
        return;
    }

    println!("\n{}", "❌ 오류 발생 파일:".bright_red());
    for (path, error) in failures {
        println!("  {} {}", "•".red(), display_name(path));
        println!("    {}", error.dimmed());
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
