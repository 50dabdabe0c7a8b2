//! 题库合并 - 业务能力层
//!
//! 只负责"批次校验 + 按 id 去重合并"能力，不关心流程，也不做 IO。
//!
//! ## 合并规则
//!
//! 先按现有题库、再按新批次的顺序插入 id → 题目映射：
//! - 同一 id 同时出现在两边时，新批次获胜（重新生成即替换）
//! - 新批次内部重复 id 时，后出现的获胜
//! - 输出按 id 升序排列（id 为定宽补零格式，字典序即数字序）

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::ValidationError;
use crate::models::QuestionRecord;

/// 校验一个新批次，拒绝结构非法的题目
///
/// 单条题目非法只跳过该题并记录，绝不让一条坏题目拖垮整个批次。
/// 返回 (通过校验的题目, 被拒绝题目的错误列表)。
pub fn validate_batch(batch: Vec<QuestionRecord>) -> (Vec<QuestionRecord>, Vec<ValidationError>) {
    let mut valid = Vec::with_capacity(batch.len());
    let mut rejected = Vec::new();

    for record in batch {
        match record.validate() {
            Ok(()) => {
                if record.has_empty_choice_text() {
                    warn!("⚠️ 题目 {} 存在空的选项文本（保留该题）", record.id);
                }
                valid.push(record);
            }
            Err(e) => {
                warn!("✗ 拒绝题目: {}", e);
                rejected.push(e);
            }
        }
    }

    (valid, rejected)
}

/// 合并现有题库与新批次，按 id 去重并升序排列
///
/// 纯转换，无副作用。同样的输入重复合并得到同样的输出。
pub fn merge(existing: &[QuestionRecord], new_batch: &[QuestionRecord]) -> Vec<QuestionRecord> {
    let mut by_id: BTreeMap<String, QuestionRecord> = BTreeMap::new();

    // 顺序关键：现有题库在前，新批次在后，保证 id 冲突时新批次获胜
    for record in existing.iter().chain(new_batch.iter()) {
        by_id.insert(record.id.clone(), record.clone());
    }

    by_id.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalizedText;

    fn record(id: &str, genre: &str, question_ja: &str) -> QuestionRecord {
        QuestionRecord {
            id: id.to_string(),
            genre: genre.to_string(),
            question_text: LocalizedText::new(question_ja, "question in english"),
            choices: vec![
                LocalizedText::new("a", "a"),
                LocalizedText::new("b", "b"),
                LocalizedText::new("c", "c"),
                LocalizedText::new("d", "d"),
            ],
            correct_answer_index: 0,
            image_path: None,
        }
    }

    #[test]
    fn test_merge_new_batch_wins_on_collision() {
        let existing = vec![record("q00001", "science", "旧"), record("q00002", "science", "旧")];
        let new_batch = vec![record("q00002", "x", "更新"), record("q00003", "x", "新規")];

        let merged = merge(&existing, &new_batch);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0], existing[0]); // q00001 原样保留
        assert_eq!(merged[1], new_batch[0]); // q00002 被新批次替换
        assert_eq!(merged[2], new_batch[1]); // q00003 新增
    }

    #[test]
    fn test_merge_duplicate_within_batch_last_wins() {
        let first = record("q00005", "math", "ひとつめ");
        let second = record("q00005", "math", "ふたつめ");
        let merged = merge(&[], &[first, second.clone()]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0], second);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let existing = vec![record("q00001", "game", "a"), record("q00003", "game", "b")];
        let batch = vec![record("q00002", "game", "c"), record("q00003", "game", "d")];

        let once = merge(&existing, &batch);
        let twice = merge(&once, &batch);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_no_loss_and_unique_and_sorted() {
        let existing = vec![
            record("q00010", "anime", "a"),
            record("q00002", "anime", "b"),
            record("q00007", "anime", "c"),
        ];
        let batch = vec![record("q00005", "anime", "d"), record("q00002", "anime", "e")];

        let merged = merge(&existing, &batch);

        // 无丢失：existing 独有的 id 都在
        for id in ["q00010", "q00007"] {
            assert!(merged.iter().any(|r| r.id == id), "{} 不应丢失", id);
        }
        // 无重复
        let mut ids: Vec<&str> = merged.iter().map(|r| r.id.as_str()).collect();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
        // 升序
        assert!(merged.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_merge_empty_inputs() {
        assert!(merge(&[], &[]).is_empty());

        let only_existing = vec![record("q00001", "math", "a")];
        assert_eq!(merge(&only_existing, &[]), only_existing);
    }

    #[test]
    fn test_validate_batch_rejects_malformed_records() {
        let good = record("q00001", "science", "正常");

        let mut three_choices = record("q00002", "science", "選択肢3つ");
        three_choices.choices.pop();

        let mut bad_index = record("q00003", "science", "索引5");
        bad_index.correct_answer_index = 5;

        let mut empty_en = record("q00004", "science", "英語なし");
        empty_en.question_text.en = String::new();

        let (valid, rejected) =
            validate_batch(vec![good.clone(), three_choices, bad_index, empty_en]);

        assert_eq!(valid, vec![good]);
        assert_eq!(rejected.len(), 3);
        let rejected_ids: Vec<&str> = rejected.iter().map(|e| e.record_id()).collect();
        assert_eq!(rejected_ids, vec!["q00002", "q00003", "q00004"]);
    }

    #[test]
    fn test_rejected_records_do_not_block_merge() {
        let existing = vec![record("q00001", "math", "既存")];

        let mut broken = record("q00002", "math", "壊れた");
        broken.correct_answer_index = 9;
        let (valid, rejected) = validate_batch(vec![broken, record("q00003", "math", "有効")]);

        let merged = merge(&existing, &valid);

        assert_eq!(rejected.len(), 1);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|r| r.id != "q00002"));
    }
}
