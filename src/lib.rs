//! # Generate Questions
//!
//! 把纯文本题目文件转换成题库使用的 `questions.json`
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/question` - 输出记录 `QuestionRecord` 和顶层文档
//! - `models/answer_key` - 内置答案表（题号 → 正确选项）
//! - `models/loaders` - JSON 读写与校验、TOML 答案表加载
//!
//! ### ② 业务能力层（Services）
//! - `QuestionParser` - 切分文本块、逐行分类、组装记录
//! - `validation` - 检查丢弃的文本块、缺失的答案等，只报告不修改
//! - `ReportWriter` - 写校验报告
//!
//! ### ③ 编排层（App）
//! - `App` - 读取原文 → 解析 → 校验 → 写 JSON → 回读校验
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::{App, RunSummary};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnswerKey, QuestionDocument, QuestionRecord};
pub use services::{ParseOutcome, QuestionParser, ValidationReport};
