//! 校验报告写入服务
//!
//! 只负责把校验报告写成文本文件

use crate::error::{AppError, AppResult};
use crate::services::validation::ValidationReport;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// 校验报告写入服务
pub struct ReportWriter {
    report_path: PathBuf,
}

impl ReportWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            report_path: path.into(),
        }
    }

    /// 写入报告，已有文件会被覆盖
    pub fn write(&self, report: &ValidationReport) -> AppResult<()> {
        debug!("写入校验报告: {} ({} 条)", self.report_path.display(), report.warnings());

        fs::write(&self.report_path, render(report))
            .map_err(|e| AppError::file_write_failed(self.report_path.display().to_string(), e))
    }
}

/// 渲染报告文本
pub fn render(report: &ValidationReport) -> String {
    let mut out = format!(
        "{}\n题目解析报告 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );

    if report.is_clean() {
        out.push_str("没有发现问题\n");
        return out;
    }

    for diagnostic in report.iter() {
        out.push_str(&format!("- {}\n", diagnostic));
    }
    out.push_str(&format!("\n共 {} 条警告\n", report.warnings()));
    out
}
