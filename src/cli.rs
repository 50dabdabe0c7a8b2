//! 命令行定义
//!
//! 两个子命令对应两种生成方式：
//! - `generate`: 调用 LLM 按分类批量生成题目
//! - `seed`: 模板展开生成固定的程序设计题目

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "TypeGlobe 题库生成工具", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 调用 LLM 生成各分类的题目并合并进题库
    Generate(GenerateArgs),
    /// 模板展开生成程序设计题目并合并进题库
    Seed(SeedArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// 测试模式（每个分类只生成 1 题）
    #[arg(long)]
    pub test: bool,

    /// 要新增的题目数（不含已有题目）
    #[arg(long)]
    pub count: Option<usize>,

    /// 只生成指定分类（如 programming）
    #[arg(long)]
    pub genre: Option<String>,
}

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// 起始题目编号（q00011 对应 11）
    #[arg(long, default_value_t = 11)]
    pub start_id: u32,

    /// 生成的题目数
    #[arg(long, default_value_t = 1000)]
    pub count: usize,
}
