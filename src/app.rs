//! 应用入口
//!
//! 读取原文 → 解析 → 校验 → 写 JSON → 回读校验

use crate::config::Config;
use crate::models::{load_answer_key, load_questions, save_questions, AnswerKey, QuestionDocument};
use crate::services::{review, QuestionParser, ReportWriter};
use crate::utils::logging::{log_parse_complete, log_startup, print_final_stats};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    answer_key: AnswerKey,
}

/// 一次运行的统计结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// 写入的题目数量
    pub questions: usize,
    /// 被丢弃的文本块数量
    pub dropped: usize,
    /// 校验警告数量
    pub warnings: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let answer_key = match &config.answer_key_file {
            Some(path) => load_answer_key(Path::new(path))
                .with_context(|| format!("无法加载答案表: {}", path))?,
            None => AnswerKey::builtin(),
        };

        Ok(Self { config, answer_key })
    }

    /// 运行应用主逻辑
    pub fn run(&self) -> Result<RunSummary> {
        let content = fs::read_to_string(&self.config.input_file)
            .with_context(|| format!("无法读取题目原文: {}", self.config.input_file))?;

        let parser = QuestionParser::new(&self.answer_key)?;
        let outcome = parser.parse_outcome(&content);
        log_parse_complete(outcome.questions.len(), outcome.dropped.len());

        // 校验只输出警告，不影响生成结果
        let report = review(&outcome, &self.answer_key);
        report.log();

        let document = QuestionDocument::new(outcome.into_records());
        let output_path = Path::new(&self.config.output_file);
        save_questions(output_path, &document)
            .with_context(|| format!("无法写入输出文件: {}", self.config.output_file))?;

        if let Err(e) = load_questions(output_path) {
            warn!("⚠️ 输出文件校验未通过: {}", e);
        }

        if let Some(path) = &self.config.report_file {
            match ReportWriter::with_path(path).write(&report) {
                Ok(()) => info!("📝 校验报告已写入: {}", path),
                Err(e) => warn!("⚠️ 无法写入校验报告: {}", e),
            }
        }

        let summary = RunSummary {
            questions: document.len(),
            dropped: report.dropped_blocks(),
            warnings: report.warnings(),
        };
        print_final_stats(summary.questions, summary.warnings, &self.config.output_file);

        Ok(summary)
    }

    /// 输出文件名
    pub fn output_name(&self) -> String {
        Path::new(&self.config.output_file)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.config.output_file.clone())
    }

    /// 运行结束时打印到 stdout 的唯一一行
    pub fn summary_line(&self, summary: &RunSummary) -> String {
        format!("Generated {} with {} questions", self.output_name(), summary.questions)
    }
}
