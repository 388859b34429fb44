/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use crate::config::Config;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📄 题目原文: {}", config.input_file);
    info!("📦 输出文件: {}", config.output_file);
    match &config.answer_key_file {
        Some(path) => info!("🔑 答案表: {}", path),
        None => info!("🔑 答案表: 内置"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录解析结果
///
/// # 参数
/// - `parsed`: 解析出的题目数量
/// - `dropped`: 被丢弃的文本块数量
pub fn log_parse_complete(parsed: usize, dropped: usize) {
    info!("✓ 解析完成: {} 道题, 跳过 {} 个文本块", parsed, dropped);
}

/// 打印最终统计信息
///
/// # 参数
/// - `questions`: 写入的题目数量
/// - `warnings`: 警告数量
/// - `output_path`: 输出文件路径
pub fn print_final_stats(questions: usize, warnings: usize, output_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成统计");
    info!("{}", "=".repeat(60));
    info!("✅ 题目: {}", questions);
    info!("⚠️ 警告: {}", warnings);
    info!("{}", "=".repeat(60));
    info!("输出已保存至: {}", output_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
