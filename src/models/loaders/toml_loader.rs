use crate::error::{AnswerKeyError, AppError, AppResult, FileError};
use crate::models::answer_key::AnswerKey;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// 答案表 TOML 文件结构
///
/// ```toml
/// [answers]
/// 1 = 1
/// 2 = 3
/// ```
#[derive(Debug, Deserialize)]
struct AnswerKeyFile {
    answers: BTreeMap<String, i64>,
}

/// 从 TOML 文件加载答案表，用于替换内置答案表
pub fn load_answer_key(path: &Path) -> AppResult<AnswerKey> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let key = parse_answer_key(&content).map_err(|e| match e {
        AppError::File(FileError::TomlParseFailed { source, .. }) => AppError::File(FileError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        }),
        other => other,
    })?;

    tracing::info!("从 {} 加载了 {} 条答案", path.display(), key.len());
    Ok(key)
}

/// 解析答案表 TOML 文本
pub fn parse_answer_key(content: &str) -> AppResult<AnswerKey> {
    let file: AnswerKeyFile = toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
        path: String::new(),
        source,
    })?;

    let mut pairs = Vec::with_capacity(file.answers.len());
    for (key, index) in file.answers {
        let number = key
            .trim()
            .parse::<u32>()
            .map_err(|_| AnswerKeyError::InvalidNumber { key: key.clone() })?;
        pairs.push((number, index));
    }

    Ok(AnswerKey::from_pairs(pairs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_answer_key() {
        let key = parse_answer_key("[answers]\n1 = 2\n10 = 4\n").unwrap();
        assert_eq!(key.len(), 2);
        assert_eq!(key.get(1), Some(2));
        assert_eq!(key.get(10), Some(4));
    }

    #[test]
    fn test_parse_rejects_non_numeric_key() {
        let err = parse_answer_key("[answers]\nfirst = 2\n").unwrap_err();
        assert!(matches!(err, AppError::AnswerKey(AnswerKeyError::InvalidNumber { .. })));
    }

    #[test]
    fn test_parse_rejects_out_of_range_answer() {
        let err = parse_answer_key("[answers]\n5 = 7\n").unwrap_err();
        assert!(matches!(
            err,
            AppError::AnswerKey(AnswerKeyError::IndexOutOfRange { number: 5, index: 7 })
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_toml() {
        let err = parse_answer_key("answers = [").unwrap_err();
        assert!(matches!(err, AppError::File(FileError::TomlParseFailed { .. })));
    }

    #[test]
    fn test_load_answer_key_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not toml ===").unwrap();
        let err = load_answer_key(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_load_answer_key_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_answer_key(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, AppError::File(FileError::ReadFailed { .. })));
    }
}
