use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 题目文件校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 答案表错误
    #[error("答案表错误: {0}")]
    AnswerKey(#[from] AnswerKeyError),
    /// JSON 序列化/解析失败
    #[error("JSON处理失败: {0}")]
    Json(#[from] serde_json::Error),
    /// 正则表达式编译失败
    #[error("正则表达式无效: {0}")]
    Regex(#[from] regex::Error),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 已生成题目文件的校验错误
#[derive(Debug, Error)]
pub enum ValidationError {
    /// 文件中没有题目
    #[error("题目文件至少需要包含一道题")]
    NoQuestions,
    /// 正确答案编号超出范围
    #[error("第 {position} 题的 correct_answer_id={correct_answer_id} 无效: 必须在 1 到 {max_answer_id} 之间")]
    CorrectAnswerOutOfRange {
        position: usize,
        correct_answer_id: u32,
        max_answer_id: usize,
    },
}

/// 答案表错误
#[derive(Debug, Error)]
pub enum AnswerKeyError {
    /// 题号无法解析
    #[error("无法解析题号: {key}")]
    InvalidNumber { key: String },
    /// 题号 0 不合法
    #[error("题号必须从 1 开始")]
    ZeroNumber,
    /// 选项编号不在 1-4 之间
    #[error("第 {number} 题的答案 {index} 超出范围 [1, 4]")]
    IndexOutOfRange { number: u32, index: i64 },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_error_display() {
        let err = AppError::from(ValidationError::CorrectAnswerOutOfRange {
            position: 3,
            correct_answer_id: 4,
            max_answer_id: 3,
        });
        let msg = err.to_string();
        assert!(msg.starts_with("校验错误"));
        assert!(msg.contains("第 3 题"));
        assert!(msg.contains("1 到 3"));
    }

    #[test]
    fn test_file_read_failed_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AppError::file_read_failed("questions_text.txt", io);
        assert!(err.to_string().contains("questions_text.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
