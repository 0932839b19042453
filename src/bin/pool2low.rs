//! pool2low - POOL TO LOWDB CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use lowconv::{cli::PoolArgs, pool::convert_pool, stats::format_bytes};

fn main() -> Result<()> {
    let args = PoolArgs::parse();

    println!(
        "  {} 입력 파일: {:?} → 출력 파일: {:?} (키: {})",
        "📂".bright_cyan(),
        args.input,
        args.output,
        args.key
    );

    let outcome = convert_pool(&args.input, &args.output, &args.key)
        .with_context(|| format!("변환 실패: {:?}", args.input))?;

    if let Some(count) = outcome.item_count {
        println!("  {} 항목 수: {}", "🧾".bright_white(), count.to_string().green());
    }

    println!(
        "\n{} 변환 완료, 저장 위치: {:?} ({})\n",
        "✅".bright_green(),
        outcome.output,
        format_bytes(outcome.bytes_written)
    );

    Ok(())
}
