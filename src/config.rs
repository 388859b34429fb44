/// 程序配置
///
/// 所有字段都有默认值，默认值与手动运行脚本时的行为一致
#[derive(Clone, Debug)]
pub struct Config {
    /// 题目原文文件
    pub input_file: String,
    /// 生成的 JSON 文件
    pub output_file: String,
    /// 覆盖内置答案表的 TOML 文件
    pub answer_key_file: Option<String>,
    /// 校验报告输出文件，不设置则不写报告
    pub report_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: "questions_text.txt".to_string(),
            output_file: "questions.json".to_string(),
            answer_key_file: None,
            report_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            input_file: lookup("QUESTIONS_TEXT_FILE").unwrap_or(default.input_file),
            output_file: lookup("QUESTIONS_JSON_FILE").unwrap_or(default.output_file),
            answer_key_file: lookup("ANSWER_KEY_FILE").filter(|v| !v.is_empty()),
            report_file: lookup("REPORT_FILE").filter(|v| !v.is_empty()),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
