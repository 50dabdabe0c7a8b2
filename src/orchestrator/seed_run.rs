//! 模板生成运行 - 编排层
//!
//! 确定性流程：模板展开 → 批次校验 → 合并 → 持久化。
//! 不需要 API 密钥，不发出网络请求。

use anyhow::Result;
use tracing::{info, warn};

use crate::cli::SeedArgs;
use crate::config::Config;
use crate::models::QuestionRecord;
use crate::orchestrator::persist_batch;
use crate::services::bank_store::BankStore;
use crate::services::{bank_merger, template_generator};
use crate::utils::logging;

/// 模板生成运行
pub struct SeedRun {
    store: BankStore,
}

impl SeedRun {
    /// 创建模板生成运行
    pub fn new(config: Config) -> Self {
        Self {
            store: BankStore::new(&config.data_dir),
        }
    }

    /// 运行主逻辑
    pub async fn run(&self, args: &SeedArgs) -> Result<()> {
        logging::log_startup("テンプレート生成モード");
        info!(
            "生成範囲: {} 〜 {} ({} 問)",
            QuestionRecord::format_id(args.start_id),
            QuestionRecord::format_id(args.start_id + args.count.saturating_sub(1) as u32),
            args.count
        );

        let batch = template_generator::generate(args.start_id, args.count);
        let (valid, rejected) = bank_merger::validate_batch(batch);
        if !rejected.is_empty() {
            warn!(
                "⚠️ テンプレートから {} 問がバリデーションで除外されました",
                rejected.len()
            );
        }

        let total = persist_batch(&self.store, &valid).await?;

        info!("✅ 完了! 新規生成: {} 問", valid.len());
        info!("📊 合計: {} 問", total);

        Ok(())
    }
}
