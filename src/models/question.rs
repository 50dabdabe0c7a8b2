use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// 题目选项数量（固定 4 选 1）
pub const CHOICE_COUNT: usize = 4;

/// id 格式：q + 5 位补零数字（如 q00011）
const ID_PATTERN: &str = r"^q[0-9]{5}$";

/// id 校验正则，只编译一次（批量校验时每条题目都会用到）
fn id_regex() -> &'static Regex {
    static ID_REGEX: OnceLock<Regex> = OnceLock::new();
    ID_REGEX.get_or_init(|| Regex::new(ID_PATTERN).expect("ID_PATTERN 是固定字面量"))
}

/// 本地化文本（日语 + 英语）
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub ja: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(ja: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ja: ja.into(),
            en: en.into(),
        }
    }
}

/// 题库的基本单元：一道 4 选 1 的双语题目
///
/// 与题库 JSON 文件中的结构一一对应，反序列化时拒绝未知字段。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionRecord {
    /// 题目编号，题库内唯一键
    pub id: String,
    /// 分类标签（如 programming）
    pub genre: String,
    /// 题干文本
    pub question_text: LocalizedText,
    /// 选项列表，顺序有语义（正解索引指向其中一项）
    pub choices: Vec<LocalizedText>,
    /// 正解索引，[0, 3]
    pub correct_answer_index: usize,
    /// 可选的配图路径
    pub image_path: Option<String>,
}

impl QuestionRecord {
    /// 把数字编号格式化为题目 id
    pub fn format_id(n: u32) -> String {
        format!("q{:05}", n)
    }

    /// 结构校验
    ///
    /// 违反以下任意一条的题目会被整条拒绝：
    /// - id 格式非法
    /// - 选项数量不是 4
    /// - 正解索引超出 [0, 3]
    /// - 任一语言的题干为空
    ///
    /// 选项文本为空只算数据质量问题，不在这里拒绝。
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !id_regex().is_match(&self.id) {
            return Err(ValidationError::BadIdFormat {
                id: self.id.clone(),
            });
        }

        if self.choices.len() != CHOICE_COUNT {
            return Err(ValidationError::WrongChoiceCount {
                id: self.id.clone(),
                count: self.choices.len(),
            });
        }

        if self.correct_answer_index >= CHOICE_COUNT {
            return Err(ValidationError::AnswerIndexOutOfRange {
                id: self.id.clone(),
                index: self.correct_answer_index,
            });
        }

        if self.question_text.ja.trim().is_empty() {
            return Err(ValidationError::EmptyQuestionText {
                id: self.id.clone(),
                locale: "ja",
            });
        }
        if self.question_text.en.trim().is_empty() {
            return Err(ValidationError::EmptyQuestionText {
                id: self.id.clone(),
                locale: "en",
            });
        }

        Ok(())
    }

    /// 是否存在空的选项文本（数据质量问题，只记录警告）
    pub fn has_empty_choice_text(&self) -> bool {
        self.choices
            .iter()
            .any(|c| c.ja.trim().is_empty() || c.en.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(id: &str) -> QuestionRecord {
        QuestionRecord {
            id: id.to_string(),
            genre: "programming".to_string(),
            question_text: LocalizedText::new(
                "Pythonでこめんとをかくきごうは？",
                "Symbol for comments in Python?",
            ),
            choices: vec![
                LocalizedText::new("#", "#"),
                LocalizedText::new("//", "//"),
                LocalizedText::new("/*", "/*"),
                LocalizedText::new("--", "--"),
            ],
            correct_answer_index: 0,
            image_path: None,
        }
    }

    #[test]
    fn test_id_regex_compiled_once_and_cached() {
        assert!(std::ptr::eq(id_regex(), id_regex()));
    }

    #[test]
    fn test_format_id() {
        assert_eq!(QuestionRecord::format_id(11), "q00011");
        assert_eq!(QuestionRecord::format_id(1010), "q01010");
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(sample_record("q00011").validate().is_ok());
    }

    #[test]
    fn test_bad_id_format_rejected() {
        for bad in ["q11", "00011", "q000111", "Q00011", ""] {
            let err = sample_record(bad).validate().unwrap_err();
            assert!(
                matches!(err, ValidationError::BadIdFormat { .. }),
                "id '{}' 应判为格式非法",
                bad
            );
        }
    }

    #[test]
    fn test_three_choices_rejected() {
        let mut record = sample_record("q00011");
        record.choices.pop();
        let err = record.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::WrongChoiceCount { count: 3, .. }
        ));
    }

    #[test]
    fn test_answer_index_out_of_range_rejected() {
        let mut record = sample_record("q00011");
        record.correct_answer_index = 5;
        let err = record.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::AnswerIndexOutOfRange { index: 5, .. }
        ));
    }

    #[test]
    fn test_empty_en_question_text_rejected() {
        let mut record = sample_record("q00011");
        record.question_text.en = "  ".to_string();
        let err = record.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::EmptyQuestionText { locale: "en", .. }
        ));
    }

    #[test]
    fn test_empty_choice_text_is_warning_not_rejection() {
        let mut record = sample_record("q00011");
        record.choices[2].en = String::new();
        assert!(record.validate().is_ok());
        assert!(record.has_empty_choice_text());
    }

    #[test]
    fn test_serde_round_trip_matches_bank_format() {
        let record = sample_record("q00011");
        let json = serde_json::to_string_pretty(&record).expect("序列化应成功");
        assert!(json.contains("\"correct_answer_index\": 0"));
        assert!(json.contains("\"image_path\": null"));

        let parsed: QuestionRecord = serde_json::from_str(&json).expect("反序列化应成功");
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{
            "id": "q00011",
            "genre": "programming",
            "question_text": {"ja": "a", "en": "b"},
            "choices": [
                {"ja": "1", "en": "1"}, {"ja": "2", "en": "2"},
                {"ja": "3", "en": "3"}, {"ja": "4", "en": "4"}
            ],
            "correct_answer_index": 0,
            "image_path": null,
            "difficulty": "hard"
        }"#;
        assert!(serde_json::from_str::<QuestionRecord>(json).is_err());
    }
}
