use crate::error::{AppError, AppResult, FileError, ValidationError};
use crate::models::question::QuestionDocument;
use std::fs;
use std::path::Path;

/// 读取已生成的题目 JSON 文件并校验
///
/// 校验规则：
/// - 至少包含一道题
/// - `correct_answer_id` 必须在 1 到选项数量之间（没有第四个选项时最大为 3）
pub fn load_questions(path: &Path) -> AppResult<QuestionDocument> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let document: QuestionDocument =
        serde_json::from_str(&content).map_err(|source| FileError::JsonParseFailed {
            path: path.display().to_string(),
            source,
        })?;

    validate_document(&document)?;

    tracing::debug!("从 {} 读取了 {} 道题", path.display(), document.len());
    Ok(document)
}

/// 把题目文档写成 JSON 文件
///
/// 两个空格缩进，键顺序固定，非 ASCII 字符原样输出，文件末尾没有换行
pub fn save_questions(path: &Path, document: &QuestionDocument) -> AppResult<()> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json).map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;
    tracing::debug!("已写入 {} 道题到 {}", document.len(), path.display());
    Ok(())
}

/// 校验题目文档
pub fn validate_document(document: &QuestionDocument) -> Result<(), ValidationError> {
    if document.is_empty() {
        return Err(ValidationError::NoQuestions);
    }

    for (i, question) in document.questions.iter().enumerate() {
        let max_answer_id = question.answer_count();
        let id = question.correct_answer_id;
        if id < 1 || id as usize > max_answer_id {
            return Err(ValidationError::CorrectAnswerOutOfRange {
                position: i + 1,
                correct_answer_id: id,
                max_answer_id,
            });
        }
    }

    Ok(())
}
