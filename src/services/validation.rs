//! 解析结果校验
//!
//! 只做检查和报告，不修改任何输出记录

use crate::models::answer_key::{AnswerKey, DEFAULT_CORRECT_ANSWER};
use crate::models::question::QuestionNumber;
use crate::services::question_parser::{DropReason, ParseOutcome};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::warn;

/// 单条校验问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// 文本块被丢弃
    DroppedBlock {
        number: String,
        reason: DropReason,
        preview: String,
    },
    /// 答案表中没有该题，正确答案被默认为 1
    MissingAnswerKey { number: QuestionNumber },
    /// 答案表指向的选项不存在
    CorrectAnswerOutOfRange {
        number: QuestionNumber,
        correct_answer_id: u32,
        answer_count: usize,
    },
    /// 正确答案对应的选项没有内容
    EmptyCorrectAnswer {
        number: QuestionNumber,
        correct_answer_id: u32,
    },
    /// 同一题号解析出多道题
    DuplicateNumber { number: QuestionNumber, count: usize },
    /// 答案表中没有对应题目的题号
    UnusedAnswerKey { numbers: Vec<u32> },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DroppedBlock { number, reason, preview } => {
                write!(f, "跳过文本块 {} ({}): {}", number, reason, preview)
            }
            Diagnostic::MissingAnswerKey { number } => {
                write!(f, "第 {} 题没有登记答案，默认使用选项 {}", number, DEFAULT_CORRECT_ANSWER)
            }
            Diagnostic::CorrectAnswerOutOfRange {
                number,
                correct_answer_id,
                answer_count,
            } => write!(
                f,
                "第 {} 题的正确答案 {} 超出选项范围 [1, {}]",
                number, correct_answer_id, answer_count
            ),
            Diagnostic::EmptyCorrectAnswer {
                number,
                correct_answer_id,
            } => write!(f, "第 {} 题的正确答案 {} 是空选项", number, correct_answer_id),
            Diagnostic::DuplicateNumber { number, count } => {
                write!(f, "题号 {} 出现了 {} 次", number, count)
            }
            Diagnostic::UnusedAnswerKey { numbers } => {
                let list: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
                write!(f, "答案表中以下题号没有对应题目: {}", list.join(", "))
            }
        }
    }
}

/// 校验报告
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn warnings(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// 被丢弃的文本块数量
    pub fn dropped_blocks(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::DroppedBlock { .. }))
            .count()
    }

    /// 逐条输出警告日志
    pub fn log(&self) {
        for diagnostic in &self.diagnostics {
            warn!("⚠️ {}", diagnostic);
        }
    }
}

/// 检查解析结果
pub fn review(outcome: &ParseOutcome, answer_key: &AnswerKey) -> ValidationReport {
    let mut diagnostics: Vec<Diagnostic> = outcome
        .dropped
        .iter()
        .map(|block| Diagnostic::DroppedBlock {
            number: block.number.clone(),
            reason: block.reason,
            preview: block.preview.clone(),
        })
        .collect();

    let mut counts: BTreeMap<&QuestionNumber, usize> = BTreeMap::new();
    for question in &outcome.questions {
        let number = &question.number;
        *counts.entry(number).or_default() += 1;
        let record = &question.record;

        if !number.value().is_some_and(|n| answer_key.contains(n)) {
            diagnostics.push(Diagnostic::MissingAnswerKey {
                number: number.clone(),
            });
        }

        let answer_count = record.answer_count();
        let correct_answer_id = record.correct_answer_id;
        if correct_answer_id as usize > answer_count {
            diagnostics.push(Diagnostic::CorrectAnswerOutOfRange {
                number: number.clone(),
                correct_answer_id,
                answer_count,
            });
        } else if record.answer(correct_answer_id).is_empty() {
            diagnostics.push(Diagnostic::EmptyCorrectAnswer {
                number: number.clone(),
                correct_answer_id,
            });
        }
    }

    diagnostics.extend(
        counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(number, count)| Diagnostic::DuplicateNumber {
                number: (*number).clone(),
                count: *count,
            }),
    );

    let parsed: BTreeSet<u32> = counts.keys().filter_map(|n| n.value()).collect();
    let unused: Vec<u32> = answer_key
        .numbers()
        .into_iter()
        .filter(|n| !parsed.contains(n))
        .collect();
    if !unused.is_empty() {
        diagnostics.push(Diagnostic::UnusedAnswerKey { numbers: unused });
    }

    ValidationReport { diagnostics }
}
