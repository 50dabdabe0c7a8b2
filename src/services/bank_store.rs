//! 题库存储 - 业务能力层
//!
//! 只负责"按语言读写题库 JSON 文件"能力，不关心流程。
//!
//! ## 持久化约定
//!
//! - 每种语言一个文件：`<data_dir>/questions_ja.json` / `questions_en.json`
//! - UTF-8、带缩进、非 ASCII 字符按原文写出（serde_json 默认行为）
//! - 保存是整体重写：先写 `.tmp` 再原子重命名，写失败不会留下半截文件
//! - 文件不存在视为空题库；文件损坏是致命错误，绝不当作空题库处理

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::QuestionRecord;

/// 支持的语言
pub const LOCALES: [&str; 2] = ["ja", "en"];

/// 题库文件存储
#[derive(Debug)]
pub struct BankStore {
    data_dir: PathBuf,
}

impl BankStore {
    /// 创建新的题库存储
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// 指定语言的题库文件路径
    pub fn bank_path(&self, locale: &str) -> PathBuf {
        self.data_dir.join(format!("questions_{}.json", locale))
    }

    /// 读取指定语言的题库
    ///
    /// 文件不存在返回空列表；读取失败或 JSON 损坏返回存储错误。
    pub async fn load(&self, locale: &str) -> AppResult<Vec<QuestionRecord>> {
        let path = self.bank_path(locale);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("题库文件不存在，视为空题库: {}", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(AppError::storage_read_failed(display(&path), e)),
        };

        let bank: Vec<QuestionRecord> = serde_json::from_str(&content)
            .map_err(|e| AppError::corrupt_bank(display(&path), e))?;

        debug!("已加载题库: {} ({} 问)", path.display(), bank.len());
        Ok(bank)
    }

    /// 保存指定语言的题库（整体重写）
    pub async fn save(&self, locale: &str, bank: &[QuestionRecord]) -> AppResult<()> {
        let path = self.bank_path(locale);

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| AppError::storage_write_failed(display(&self.data_dir), e))?;

        let json = serde_json::to_string_pretty(bank)
            .map_err(|e| AppError::storage_write_failed(display(&path), e))?;

        // 先写临时文件再重命名，保证要么保留旧内容要么换成完整新内容
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json.as_bytes())
            .await
            .map_err(|e| AppError::storage_write_failed(display(&tmp_path), e))?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| AppError::storage_write_failed(display(&path), e))?;

        info!("保存完了: {} ({} 问)", path.display(), bank.len());
        Ok(())
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
