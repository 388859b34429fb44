use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 输出文件中的一道题
///
/// 字段顺序即 JSON 中的键顺序，不要调整
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub text: String,
    pub text_html: String,
    pub answer_1: String,
    pub answer_1_html: String,
    pub answer_2: String,
    pub answer_2_html: String,
    pub answer_3: String,
    pub answer_3_html: String,
    /// 只有三个选项时为空字符串
    pub answer_4: String,
    pub answer_4_html: String,
    pub correct_answer_id: u32,
    pub score: u32,
}

impl QuestionRecord {
    /// 选项数量（3 或 4）
    pub fn answer_count(&self) -> usize {
        if self.answer_4.is_empty() {
            3
        } else {
            4
        }
    }

    /// 按编号（1-4）取选项文本，编号无效时返回空字符串
    pub fn answer(&self, answer_id: u32) -> &str {
        match answer_id {
            1 => &self.answer_1,
            2 => &self.answer_2,
            3 => &self.answer_3,
            4 => &self.answer_4,
            _ => "",
        }
    }
}

/// 输出文件的顶层结构
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDocument {
    pub questions: Vec<QuestionRecord>,
}

impl QuestionDocument {
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// 原文中的题号
///
/// 保存去掉前导零的十进制数字串，超出 `u32` 的题号仍然有效，只是查不到答案
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionNumber {
    digits: String,
    value: Option<u32>,
}

impl QuestionNumber {
    /// 从 ASCII 十进制数字串创建
    pub fn from_decimal(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed }.to_string();
        let value = digits.parse().ok();
        Self { digits, value }
    }

    /// 能放进 `u32` 时返回数值
    pub fn value(&self) -> Option<u32> {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl From<u32> for QuestionNumber {
    fn from(value: u32) -> Self {
        Self {
            digits: value.to_string(),
            value: Some(value),
        }
    }
}

impl fmt::Display for QuestionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

// 没有前导零，先比长度再比字典序即为数值顺序
impl Ord for QuestionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for QuestionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 带原始题号的解析结果，题号只用于日志和校验，不会写入 JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuestion {
    pub number: QuestionNumber,
    pub record: QuestionRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(answer_4: &str) -> QuestionRecord {
        QuestionRecord {
            text: "Where are you from?".to_string(),
            text_html: "<b>Question 3</b>\n\nWhere are you from?".to_string(),
            answer_1: "Italy".to_string(),
            answer_1_html: "1. Italy".to_string(),
            answer_2: "Spain".to_string(),
            answer_2_html: "2. Spain".to_string(),
            answer_3: "Peru".to_string(),
            answer_3_html: "3. Peru".to_string(),
            answer_4: answer_4.to_string(),
            answer_4_html: if answer_4.is_empty() { String::new() } else { format!("4. {}", answer_4) },
            correct_answer_id: 2,
            score: 1,
        }
    }

    #[test]
    fn test_answer_count() {
        assert_eq!(record("").answer_count(), 3);
        assert_eq!(record("Chile").answer_count(), 4);
    }

    #[test]
    fn test_answer_lookup() {
        let q = record("Chile");
        assert_eq!(q.answer(2), "Spain");
        assert_eq!(q.answer(4), "Chile");
        assert_eq!(q.answer(0), "");
        assert_eq!(q.answer(5), "");
    }

    #[test]
    fn test_question_number_strips_leading_zeros() {
        let n = QuestionNumber::from_decimal("007");
        assert_eq!(n.as_str(), "7");
        assert_eq!(n.value(), Some(7));
        assert_eq!(QuestionNumber::from_decimal("000").as_str(), "0");
    }

    #[test]
    fn test_question_number_beyond_u32() {
        let n = QuestionNumber::from_decimal("4294967296");
        assert_eq!(n.to_string(), "4294967296");
        assert_eq!(n.value(), None);
        assert!(n > QuestionNumber::from(u32::MAX));
        assert!(QuestionNumber::from(9) < QuestionNumber::from(10));
    }

    #[test]
    fn test_serialized_key_order() {
        let json = serde_json::to_string(&record("")).unwrap();
        let keys = [
            "\"text\"",
            "\"text_html\"",
            "\"answer_1\"",
            "\"answer_1_html\"",
            "\"answer_2\"",
            "\"answer_2_html\"",
            "\"answer_3\"",
            "\"answer_3_html\"",
            "\"answer_4\"",
            "\"answer_4_html\"",
            "\"correct_answer_id\"",
            "\"score\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
