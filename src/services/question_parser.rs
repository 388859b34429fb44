//! 题目文本解析服务
//!
//! 把题目原文切分成按题号划分的文本块，逐行分类为题干/选项/忽略，
//! 再组装成输出记录并合并答案表中的正确答案。
//!
//! 原文格式：
//!
//! ```text
//! 7 What time is it?
//! a) Ten
//! b) Eleven
//! c) Twelve
//! ```

use crate::error::AppResult;
use crate::models::answer_key::{AnswerKey, DEFAULT_CORRECT_ANSWER};
use crate::models::question::{ParsedQuestion, QuestionNumber, QuestionRecord};
use crate::utils::logging::truncate_text;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// 至少需要识别出的选项数量
const MIN_OPTIONS: usize = 3;

/// 不超过这个题号的题目按对话格式保留换行
const DIALOGUE_MAX_NUMBER: u32 = 2;

const PREVIEW_LEN: usize = 40;

/// 一个题号对应的原始文本块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// 行首的题号数字（原样保留）
    pub number: &'a str,
    pub body: &'a str,
}

/// 单行分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// 题干
    Prose(&'a str),
    /// 选项，`index` 为 1-4
    Option { index: usize, text: &'a str },
    /// 空行、版权行或无内容的选项标记
    Ignored,
}

/// 文本块被丢弃的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// 选项少于三个
    TooFewOptions { found: usize },
    /// 没有题干
    MissingProse,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::TooFewOptions { found } => write!(f, "只识别到 {} 个选项", found),
            DropReason::MissingProse => write!(f, "没有题干"),
        }
    }
}

/// 被丢弃的文本块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedBlock {
    /// 行首数字（原样保留）
    pub number: String,
    pub reason: DropReason,
    /// 文本块开头的预览
    pub preview: String,
}

/// 一次解析的完整结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub questions: Vec<ParsedQuestion>,
    pub dropped: Vec<DroppedBlock>,
}

impl ParseOutcome {
    /// 按原文顺序取出输出记录
    pub fn into_records(self) -> Vec<QuestionRecord> {
        self.questions.into_iter().map(|q| q.record).collect()
    }
}

/// 题目解析器
///
/// 持有编译好的正则和答案表引用，解析过程本身无状态，可重复调用
pub struct QuestionParser<'k> {
    answer_key: &'k AnswerKey,
    block_start: Regex,
    decimal_digit: Regex,
    option_line: Regex,
    sentence_break: Regex,
    spaces: Regex,
    newlines: Regex,
}

impl<'k> QuestionParser<'k> {
    pub fn new(answer_key: &'k AnswerKey) -> AppResult<Self> {
        Ok(Self {
            answer_key,
            block_start: Regex::new(r"(?m)^(\d+)\s+")?,
            decimal_digit: Regex::new(r"^\d$")?,
            option_line: Regex::new(r"^([a-d])\)\s*(.+)$")?,
            sentence_break: Regex::new(r"([?!])\s+([A-Z])")?,
            spaces: Regex::new(r" +")?,
            newlines: Regex::new(r"\n+")?,
        })
    }

    /// 解析原文，只返回输出记录
    pub fn parse(&self, content: &str) -> Vec<QuestionRecord> {
        self.parse_outcome(content).into_records()
    }

    /// 解析原文，同时返回题号和被丢弃的文本块
    pub fn parse_outcome(&self, content: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        for block in self.segment(content) {
            match self.parse_block(&block) {
                Ok(question) => {
                    debug!("✓ 解析第 {} 题: {}", question.number, truncate_text(&question.record.text, PREVIEW_LEN));
                    outcome.questions.push(question);
                }
                Err(reason) => {
                    let preview = truncate_text(block.body.trim(), PREVIEW_LEN);
                    debug!("跳过文本块 {} ({}): {}", block.number, reason, preview);
                    outcome.dropped.push(DroppedBlock {
                        number: block.number.to_string(),
                        reason,
                        preview,
                    });
                }
            }
        }

        outcome
    }

    /// 按行首题号切分文本，第一个题号之前的内容丢弃
    pub fn segment<'a>(&self, content: &'a str) -> Vec<RawBlock<'a>> {
        let starts: Vec<_> = self.block_start.captures_iter(content).collect();
        let mut blocks = Vec::with_capacity(starts.len());

        for (i, caps) in starts.iter().enumerate() {
            let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let end = starts
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(content.len(), |m| m.start());
            blocks.push(RawBlock {
                number: number.as_str(),
                body: &content[whole.end()..end],
            });
        }

        blocks
    }

    /// 对一行文本分类，行首尾空白会先去掉
    pub fn classify_line<'a>(&self, line: &'a str) -> LineKind<'a> {
        let line = line.trim();
        if line.is_empty() || is_boilerplate(line) {
            return LineKind::Ignored;
        }

        if is_option_marker(line) {
            return match self.option_line.captures(line) {
                Some(caps) => {
                    let index = caps
                        .get(1)
                        .and_then(|m| m.as_str().bytes().next())
                        .map_or(0, |b| usize::from(b - b'a') + 1);
                    let text = caps.get(2).map_or("", |m| m.as_str().trim());
                    LineKind::Option { index, text }
                }
                None => LineKind::Ignored,
            };
        }

        LineKind::Prose(line)
    }

    /// 规范化题干文本
    ///
    /// 第 1、2 题是对话格式，按原文换行拼接；其余题目用空格拼接，
    /// 再在 `?`/`!` 后接大写字母处重新断行
    pub fn normalize_prose(&self, number: &QuestionNumber, lines: &[&str]) -> String {
        if number.value().is_some_and(|n| n <= DIALOGUE_MAX_NUMBER) {
            return lines.join("\n").trim().to_string();
        }

        let text = lines.join(" ");
        let text = self.sentence_break.replace_all(text.trim(), "${1}\n${2}");
        let text = self.spaces.replace_all(&text, " ");
        let text = self.newlines.replace_all(&text, "\n");
        text.trim().to_string()
    }

    /// 把行首数字转换成题号，非 ASCII 的十进制数字按数值换算
    pub fn question_number(&self, raw: &str) -> QuestionNumber {
        let digits: String = raw
            .chars()
            .filter_map(|c| char::from_digit(self.digit_value(c), 10))
            .collect();
        QuestionNumber::from_decimal(&digits)
    }

    /// 十进制数字字符的数值
    ///
    /// Unicode 的十进制数字总是 0-9 连续编码，相邻的几组也各自从 0 开始，
    /// 所以向前找到这一段的起点后取模即可
    fn digit_value(&self, c: char) -> u32 {
        if let Some(d) = c.to_digit(10) {
            return d;
        }
        let mut start = c as u32;
        while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
            if !self.is_decimal_digit(prev) {
                break;
            }
            start -= 1;
        }
        (c as u32 - start) % 10
    }

    fn is_decimal_digit(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.decimal_digit.is_match(c.encode_utf8(&mut buf))
    }

    fn parse_block(&self, block: &RawBlock<'_>) -> Result<ParsedQuestion, DropReason> {
        let mut prose = Vec::new();
        let mut options: BTreeMap<usize, &str> = BTreeMap::new();
        for line in block.body.split('\n') {
            match self.classify_line(line) {
                LineKind::Prose(text) => prose.push(text),
                LineKind::Option { index, text } => {
                    options.insert(index, text);
                }
                LineKind::Ignored => {}
            }
        }

        if options.len() < MIN_OPTIONS {
            return Err(DropReason::TooFewOptions { found: options.len() });
        }
        if prose.is_empty() {
            return Err(DropReason::MissingProse);
        }

        let number = self.question_number(block.number);
        let text = self.normalize_prose(&number, &prose);
        let record = build_record(&number, text, &options, self.answer_key);
        Ok(ParsedQuestion { number, record })
    }
}

fn is_boilerplate(line: &str) -> bool {
    line.contains('©') || line.to_lowercase().contains("face2face") || line.contains("Photocopiable")
}

/// 行首是否为 `a)` 到 `d)`
fn is_option_marker(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= 2 && (b'a'..=b'd').contains(&bytes[0]) && bytes[1] == b')'
}

fn build_record(number: &QuestionNumber, text: String, options: &BTreeMap<usize, &str>, answer_key: &AnswerKey) -> QuestionRecord {
    let answer = |k: usize| options.get(&k).copied().unwrap_or("").to_string();
    let (answer_4, answer_4_html) = match options.get(&4) {
        Some(d) => (d.to_string(), format!("4. {}", d)),
        None => (String::new(), String::new()),
    };

    QuestionRecord {
        text_html: format!("<b>Question {}</b>\n\n{}", number, text),
        text,
        answer_1_html: format!("1. {}", answer(1)),
        answer_1: answer(1),
        answer_2_html: format!("2. {}", answer(2)),
        answer_2: answer(2),
        answer_3_html: format!("3. {}", answer(3)),
        answer_3: answer(3),
        answer_4,
        answer_4_html,
        correct_answer_id: u32::from(
            number
                .value()
                .map_or(DEFAULT_CORRECT_ANSWER, |n| answer_key.correct_answer_for(n)),
        ),
        score: 1,
    }
}
