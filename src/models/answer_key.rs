//! 答案表
//!
//! 题号 → 正确选项编号（a=1, b=2, c=3, d=4）。
//! 内置答案表在编译期生成，运行期间不可修改，解析时显式传入解析器。

use crate::error::AnswerKeyError;
use phf::phf_map;
use std::collections::BTreeMap;

/// 没有登记答案的题目使用的默认答案
pub const DEFAULT_CORRECT_ANSWER: u8 = 1;

static BUILTIN_ANSWERS: phf::Map<u32, u8> = phf_map! {
    1u32 => 1u8, 2u32 => 1u8, 3u32 => 2u8, 4u32 => 1u8, 5u32 => 1u8,
    6u32 => 1u8, 7u32 => 3u8, 8u32 => 3u8, 9u32 => 3u8, 10u32 => 2u8,
    11u32 => 2u8, 12u32 => 1u8, 13u32 => 3u8, 14u32 => 2u8, 15u32 => 3u8,
    16u32 => 2u8, 17u32 => 1u8, 18u32 => 1u8, 19u32 => 2u8, 20u32 => 2u8,
    21u32 => 1u8, 22u32 => 4u8, 23u32 => 1u8, 24u32 => 3u8, 25u32 => 3u8,
    26u32 => 3u8, 27u32 => 2u8, 28u32 => 1u8, 29u32 => 2u8, 30u32 => 1u8,
    31u32 => 3u8, 32u32 => 4u8, 33u32 => 1u8, 34u32 => 4u8, 35u32 => 2u8,
    36u32 => 3u8, 37u32 => 3u8, 38u32 => 1u8, 39u32 => 1u8, 40u32 => 2u8,
    41u32 => 4u8, 42u32 => 1u8, 43u32 => 3u8, 44u32 => 2u8, 45u32 => 1u8,
    46u32 => 1u8, 47u32 => 4u8, 48u32 => 2u8, 49u32 => 4u8, 50u32 => 2u8,
    51u32 => 4u8, 52u32 => 4u8, 53u32 => 1u8, 54u32 => 4u8, 55u32 => 3u8,
    56u32 => 1u8, 57u32 => 1u8, 58u32 => 3u8, 59u32 => 2u8, 60u32 => 1u8,
    61u32 => 2u8, 62u32 => 2u8, 63u32 => 3u8, 64u32 => 1u8, 65u32 => 4u8,
    66u32 => 3u8, 67u32 => 3u8, 68u32 => 4u8, 69u32 => 2u8, 70u32 => 2u8,
    71u32 => 3u8, 72u32 => 2u8, 73u32 => 1u8, 74u32 => 2u8, 75u32 => 1u8,
    76u32 => 1u8, 77u32 => 1u8, 78u32 => 3u8, 79u32 => 2u8, 80u32 => 1u8,
    81u32 => 3u8, 82u32 => 4u8, 83u32 => 4u8, 84u32 => 4u8, 85u32 => 1u8,
    86u32 => 3u8, 87u32 => 3u8, 88u32 => 2u8, 89u32 => 1u8, 90u32 => 3u8,
    91u32 => 3u8, 92u32 => 1u8, 93u32 => 2u8, 94u32 => 1u8, 95u32 => 2u8,
    96u32 => 4u8, 97u32 => 1u8, 98u32 => 3u8, 99u32 => 4u8, 100u32 => 3u8,
    101u32 => 2u8, 102u32 => 3u8, 103u32 => 3u8, 104u32 => 1u8, 105u32 => 4u8,
    106u32 => 3u8, 107u32 => 4u8, 108u32 => 3u8, 109u32 => 2u8, 110u32 => 1u8,
    111u32 => 2u8, 112u32 => 4u8, 113u32 => 3u8, 114u32 => 3u8, 115u32 => 2u8,
    116u32 => 4u8,
};

/// 不可变的答案表
///
/// 内置答案表直接引用编译期生成的静态表，从文件加载的答案表按题号排序保存
#[derive(Debug, Clone)]
pub enum AnswerKey {
    Builtin(&'static phf::Map<u32, u8>),
    Loaded(BTreeMap<u32, u8>),
}

impl Default for AnswerKey {
    fn default() -> Self {
        AnswerKey::Loaded(BTreeMap::new())
    }
}

impl AnswerKey {
    /// 内置答案表（第 1-116 题）
    pub fn builtin() -> Self {
        AnswerKey::Builtin(&BUILTIN_ANSWERS)
    }

    /// 从 (题号, 答案) 构建答案表，答案必须在 1-4 之间
    pub fn from_pairs<I>(pairs: I) -> Result<Self, AnswerKeyError>
    where
        I: IntoIterator<Item = (u32, i64)>,
    {
        let mut entries = BTreeMap::new();
        for (number, index) in pairs {
            if number == 0 {
                return Err(AnswerKeyError::ZeroNumber);
            }
            let answer = u8::try_from(index)
                .ok()
                .filter(|a| (1..=4).contains(a))
                .ok_or(AnswerKeyError::IndexOutOfRange { number, index })?;
            entries.insert(number, answer);
        }
        Ok(AnswerKey::Loaded(entries))
    }

    pub fn get(&self, number: u32) -> Option<u8> {
        match self {
            AnswerKey::Builtin(map) => map.get(&number).copied(),
            AnswerKey::Loaded(entries) => entries.get(&number).copied(),
        }
    }

    /// 查询正确答案，未登记时返回 [`DEFAULT_CORRECT_ANSWER`]
    pub fn correct_answer_for(&self, number: u32) -> u8 {
        self.get(number).unwrap_or(DEFAULT_CORRECT_ANSWER)
    }

    pub fn contains(&self, number: u32) -> bool {
        self.get(number).is_some()
    }

    pub fn len(&self) -> usize {
        match self {
            AnswerKey::Builtin(map) => map.len(),
            AnswerKey::Loaded(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 按题号升序返回所有题号
    ///
    /// 静态表没有顺序，需要排序，只在校验时调用一次
    pub fn numbers(&self) -> Vec<u32> {
        match self {
            AnswerKey::Builtin(map) => {
                let mut numbers: Vec<u32> = map.keys().copied().collect();
                numbers.sort_unstable();
                numbers
            }
            AnswerKey::Loaded(entries) => entries.keys().copied().collect(),
        }
    }
}
