//! # Quiz Question Gen
//!
//! TypeGlobe 打字问答应用的题库生成工具
//!
//! ## 架构设计
//!
//! 本系统采用三层架构：
//!
//! ### ① 数据模型层（Models）
//! - `models/` - 题目记录与分类定义
//! - `QuestionRecord` - 题库的基本单元（双语题干 + 4 个选项）
//! - `Genre` - 静态分类表（日文名称 / 话题列表 / 权重）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程
//! - `BankStore` - 按语言读写题库 JSON 文件（原子写入）
//! - `bank_merger` - 批次校验 + 按 id 去重合并
//! - `LlmService` - 调用 LLM 生成题目批次
//! - `template_generator` - 模板展开生成程序设计题目
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/` - 定义一次完整生成运行的流程
//! - `GenerationRun` - 按权重分配各分类题数，分批调用 LLM，定期保存
//! - `SeedRun` - 模板展开 → 合并 → 持久化
//!
//! ## 设计原则
//!
//! 1. **合并规则**：先插入现有题库再插入新批次，id 冲突时新批次获胜
//! 2. **错误分级**：单条题目非法只跳过，存储损坏立即终止
//! 3. **原子持久化**：先写临时文件再重命名，避免写坏现有题库

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use cli::{Cli, Command, GenerateArgs, SeedArgs};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Genre, LocalizedText, QuestionRecord};
pub use orchestrator::{GenerationRun, SeedRun};
pub use services::{BankStore, LlmService};
