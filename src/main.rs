use anyhow::Result;
use clap::Parser;
use quiz_question_gen::cli::{Cli, Command};
use quiz_question_gen::config::Config;
use quiz_question_gen::orchestrator::{GenerationRun, SeedRun};
use quiz_question_gen::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env();

    match cli.command {
        Command::Generate(args) => GenerationRun::new(config, &args)?.run(&args).await?,
        Command::Seed(args) => SeedRun::new(config).run(&args).await?,
    }

    Ok(())
}
