//! LLM 生成运行 - 编排层
//!
//! ## 流程
//!
//! 1. 校验配置：API 密钥缺失或分类标签非法时在任何网络调用前终止
//! 2. 读取现有题库确定当前题数（题库损坏立即终止，绝不当作空题库）
//! 3. 按权重把剩余题数分配到各分类，按话题切成批次
//! 4. 逐批调用 LLM：批次失败只计数并继续，不中断运行
//! 5. 累计新题目达到保存间隔时做一次完整合并保存（防止数据丢失）
//! 6. 最终合并保存并输出统计

use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError};
use crate::models::genre::ALL_GENRES;
use crate::models::{Genre, QuestionRecord};
use crate::orchestrator::persist_batch;
use crate::services::bank_merger;
use crate::services::{BankStore, LlmService};
use crate::utils::logging;

/// 一次运行的统计
#[derive(Debug, Default)]
pub struct RunStats {
    /// 通过校验的新题目数
    pub generated: usize,
    /// 被拒绝的非法题目数
    pub rejected: usize,
    /// 失败的批次数（网络错误、解析失败）
    pub failed_batches: usize,
}

/// LLM 生成运行
#[derive(Debug)]
pub struct GenerationRun {
    config: Config,
    store: BankStore,
    llm: LlmService,
    genres: Vec<Genre>,
}

impl GenerationRun {
    /// 创建生成运行，并前置校验配置
    ///
    /// API 密钥缺失或分类标签非法都是配置错误，在这里直接返回，
    /// 保证不会发出任何网络请求。
    pub fn new(config: Config, args: &GenerateArgs) -> AppResult<Self> {
        if config.llm_api_key.trim().is_empty() {
            return Err(AppError::Config(ConfigError::MissingApiKey));
        }

        let genres = match &args.genre {
            Some(tag) => match Genre::from_tag(tag) {
                Some(genre) => vec![genre],
                None => {
                    return Err(AppError::Config(ConfigError::UnknownGenre {
                        genre: tag.clone(),
                        available: Genre::available_tags(),
                    }))
                }
            },
            None => ALL_GENRES.to_vec(),
        };

        let store = BankStore::new(&config.data_dir);
        let llm = LlmService::new(&config);

        Ok(Self {
            config,
            store,
            llm,
            genres,
        })
    }

    /// 运行主逻辑
    pub async fn run(&self, args: &GenerateArgs) -> Result<()> {
        logging::log_startup("LLM 生成モード");

        // 现有题数以 ja 题库为准（两种语言的题库内容一致）
        let existing = self.store.load("ja").await?;
        let current_count = existing.len();
        info!("既存の問題数: {} 問", current_count);

        let target_total = if args.test {
            info!("【テストモード】各ジャンル 1 問ずつ生成します");
            current_count + self.genres.len()
        } else if let Some(count) = args.count {
            current_count + count
        } else {
            self.config.total_questions
        };

        if current_count >= target_total {
            info!("既に {} 問以上の問題があります。", target_total);
            return Ok(());
        }

        let remaining = target_total - current_count;
        info!("生成目標: {} 問", remaining);

        let plan = build_plan(&self.genres, remaining, args.test);
        logging::log_generation_plan(&plan);

        let stats = self.generate_all(&plan, current_count, args.test).await?;

        if stats.generated == 0 {
            warn!("⚠️ 新しい問題は生成されませんでした");
        }

        Ok(())
    }

    /// 按计划遍历分类和话题，逐批生成并定期保存
    async fn generate_all(
        &self,
        plan: &[(Genre, usize)],
        current_count: usize,
        test_mode: bool,
    ) -> Result<RunStats> {
        let mut stats = RunStats::default();
        let mut new_records: Vec<QuestionRecord> = Vec::new();
        let mut next_id = (current_count + 1) as u32;
        let mut saved_at = 0usize;

        for &(genre, genre_total) in plan {
            info!("");
            info!("[{} / {}]", genre.ja_name(), genre);

            let topics = if test_mode {
                &genre.topics()[..1]
            } else {
                genre.topics()
            };
            let per_topic = if test_mode {
                1
            } else {
                (genre_total / topics.len()).max(1)
            };

            for &topic in topics {
                let batch_size = self.config.questions_per_batch;
                let batches = per_topic.div_ceil(batch_size);

                for batch_idx in 0..batches {
                    let count = batch_size.min(per_topic - batch_idx * batch_size);
                    if count == 0 {
                        break;
                    }

                    match self
                        .llm
                        .generate_questions(genre, topic, next_id, count)
                        .await
                    {
                        Ok(batch) => {
                            let (valid, rejected) = bank_merger::validate_batch(batch);
                            if !rejected.is_empty() {
                                warn!("  ⚠️ バリデーションで {} 問を除外", rejected.len());
                            }
                            info!("  ✓ {} 問生成: {}/{}", valid.len(), genre, topic);

                            stats.generated += valid.len();
                            stats.rejected += rejected.len();
                            next_id += valid.len() as u32;
                            new_records.extend(valid);

                            // 定期保存（防止数据丢失），每次都是完整合并重写
                            if !test_mode && new_records.len() - saved_at >= self.config.save_interval
                            {
                                let total = persist_batch(&self.store, &new_records).await?;
                                saved_at = new_records.len();
                                info!("  → 中間保存: 新規 {} 問 / 合計 {} 問", new_records.len(), total);
                            }
                        }
                        Err(e) => {
                            warn!("  ✗ エラー: {}", e);
                            stats.failed_batches += 1;
                        }
                    }

                    // API 限速对策
                    tokio::time::sleep(Duration::from_secs(self.config.request_pacing_secs)).await;
                }
            }
        }

        // 最终保存
        if !new_records.is_empty() {
            let total = persist_batch(&self.store, &new_records).await?;
            logging::print_final_stats(&stats, total);
        }

        Ok(stats)
    }
}

/// 按权重把剩余题数分配到各分类
///
/// 测试模式下每个分类固定 1 题。整数截断导致分配总和可能略小于
/// remaining，与既有脚本的行为一致。
pub fn build_plan(genres: &[Genre], remaining: usize, test_mode: bool) -> Vec<(Genre, usize)> {
    if test_mode {
        return genres.iter().map(|g| (*g, 1)).collect();
    }

    let total_weight: f64 = genres.iter().map(|g| g.weight()).sum();
    genres
        .iter()
        .map(|g| {
            let share = (remaining as f64 * g.weight() / total_weight) as usize;
            (*g, share)
        })
        .collect()
}
