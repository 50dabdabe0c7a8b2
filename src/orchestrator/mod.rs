//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次完整生成运行的流程调度，不做具体业务判断。
//!
//! ### `generation_run` - LLM 生成运行
//! - 校验配置（API 密钥、分类过滤）
//! - 按权重计算各分类的生成数
//! - 按话题分批调用 LLM，限速等待
//! - 累计新题目，定期做完整合并保存
//! - 输出最终统计信息
//!
//! ### `seed_run` - 模板生成运行
//! - 模板展开 → 校验 → 合并 → 持久化
//!
//! ## 层次关系
//!
//! ```text
//! generation_run / seed_run (流程)
//!     ↓
//! services (能力层：llm / template / merger / store)
//!     ↓
//! models (数据模型：QuestionRecord / Genre)
//! ```

pub mod generation_run;
pub mod seed_run;

// 重新导出主要类型
pub use generation_run::GenerationRun;
pub use seed_run::SeedRun;

use crate::error::AppResult;
use crate::models::QuestionRecord;
use crate::services::bank_merger;
use crate::services::bank_store::{BankStore, LOCALES};

/// 把一个新批次合并进所有语言的题库并持久化
///
/// 每种语言都是一次完整的"读取 → 合并 → 整体重写"，不是追加。
/// 返回合并后题库的题目总数。
pub async fn persist_batch(
    store: &BankStore,
    new_records: &[QuestionRecord],
) -> AppResult<usize> {
    let mut total = 0;
    for locale in LOCALES {
        let existing = store.load(locale).await?;
        let merged = bank_merger::merge(&existing, new_records);
        store.save(locale, &merged).await?;
        total = merged.len();
    }
    Ok(total)
}
