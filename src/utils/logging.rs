/// 日志工具模块
///
/// 提供日志初始化和格式化输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::Genre;
use crate::orchestrator::generation_run::RunStats;

/// 初始化全局日志
///
/// 默认级别 info，可通过 RUST_LOG 环境变量覆盖。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `mode`: 运行模式说明
pub fn log_startup(mode: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 TypeGlobe クイズ問題生成 - {}", mode);
    info!(
        "開始時刻: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 记录各分类的生成计划
///
/// # 参数
/// - `plan`: (分类, 生成数) 列表
pub fn log_generation_plan(plan: &[(Genre, usize)]) {
    info!("各ジャンルの生成数:");
    for (genre, count) in plan {
        info!(
            "  {:<20}: {:4} 問 (weight: {})",
            genre.ja_name(),
            count,
            genre.weight()
        );
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 本次运行的统计
/// - `total_in_bank`: 合并后题库的题目总数
pub fn print_final_stats(stats: &RunStats, total_in_bank: usize) {
    info!("");
    info!("{}", "=".repeat(60));
    info!("📊 生成完了統計");
    info!(
        "完了時刻: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 新規生成: {} 問", stats.generated);
    info!("⚠️ バリデーション除外: {} 問", stats.rejected);
    info!("❌ 失敗バッチ: {}", stats.failed_batches);
    info!("📚 合計: {} 問", total_in_bank);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_short_unchanged() {
        assert_eq!(truncate_text("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_text_long_appends_ellipsis() {
        assert_eq!(truncate_text("abcdefg", 3), "abc...");
    }

    #[test]
    fn test_truncate_text_counts_chars_not_bytes() {
        // 多字节字符按字符数截断，不会切断 UTF-8
        assert_eq!(truncate_text("とうきょうと", 5), "とうきょう...");
    }
}
