use quiz_question_gen::cli::{GenerateArgs, SeedArgs};
use quiz_question_gen::config::Config;
use quiz_question_gen::error::{AppError, ConfigError, StorageError};
use quiz_question_gen::models::Genre;
use quiz_question_gen::orchestrator::{persist_batch, GenerationRun, SeedRun};
use quiz_question_gen::services::bank_store::LOCALES;
use quiz_question_gen::services::{template_generator, BankStore, LlmService};
use std::path::PathBuf;

/// 每个测试使用独立的临时数据目录
fn temp_data_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "quiz_question_gen_it_{}_{}",
        test_name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[tokio::test]
async fn test_seed_then_remerge_end_to_end() {
    let dir = temp_data_dir("seed_remerge");
    let store = BankStore::new(&dir);

    // 第一次：25 道模板题目写入空题库
    let first = template_generator::generate(11, 25);
    let total = persist_batch(&store, &first).await.expect("持久化应成功");
    assert_eq!(total, 25);

    // 第二次：起始编号重叠（q00030 〜 q00039）
    let second = template_generator::generate(30, 10);
    let total = persist_batch(&store, &second).await.expect("持久化应成功");

    // q00011〜q00035 与 q00030〜q00039 合并后应为 q00011〜q00039 共 29 问
    assert_eq!(total, 29);

    for locale in LOCALES {
        let bank = store.load(locale).await.expect("读取应成功");
        assert_eq!(bank.len(), 29, "{} 题库数量不符", locale);
        // 升序且无重复
        assert!(bank.windows(2).all(|w| w[0].id < w[1].id));
        // 重叠区间的题目应等于第二次生成的版本（新批次获胜）
        let overlapped = bank.iter().find(|r| r.id == "q00030").expect("q00030 应存在");
        let from_second = second.iter().find(|r| r.id == "q00030").unwrap();
        assert_eq!(overlapped, from_second);
        // 第一次独有的题目原样保留
        assert!(bank.iter().any(|r| r.id == "q00011"));
    }

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_seed_run_full_command_flow() {
    let dir = temp_data_dir("seed_run_flow");
    let config = Config {
        data_dir: dir.display().to_string(),
        ..Config::default()
    };

    SeedRun::new(config.clone())
        .run(&SeedArgs {
            start_id: 11,
            count: 50,
        })
        .await
        .expect("seed 命令应成功");

    let store = BankStore::new(&config.data_dir);
    let bank = store.load("ja").await.expect("读取应成功");
    assert_eq!(bank.len(), 50);
    assert_eq!(bank.first().unwrap().id, "q00011");
    assert_eq!(bank.last().unwrap().id, "q00060");
    assert!(bank.iter().all(|r| r.validate().is_ok()));

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_corrupt_bank_aborts_before_overwriting() {
    let dir = temp_data_dir("corrupt_abort");
    std::fs::create_dir_all(&dir).expect("创建目录应成功");
    let bank_path = dir.join("questions_ja.json");
    std::fs::write(&bank_path, "not valid json at all").expect("写入应成功");

    let store = BankStore::new(&dir);
    let batch = template_generator::generate(11, 5);

    // 题库损坏必须让整次合并失败，而不是当作空题库覆盖
    let err = persist_batch(&store, &batch)
        .await
        .expect_err("损坏的题库必须报错");
    assert!(matches!(
        err,
        AppError::Storage(StorageError::CorruptBank { .. })
    ));

    // 原文件必须原样保留
    let content = std::fs::read_to_string(&bank_path).expect("文件应可读");
    assert_eq!(content, "not valid json at all");

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_generate_without_api_key_halts_before_network() {
    let config = Config {
        llm_api_key: String::new(),
        ..Config::default()
    };
    let args = GenerateArgs {
        test: true,
        count: None,
        genre: None,
    };

    let err = GenerationRun::new(config, &args).unwrap_err();
    assert!(matches!(err, AppError::Config(ConfigError::MissingApiKey)));
    assert!(err.to_string().contains("LLM_API_KEY"));
}

#[test]
fn test_generate_with_invalid_genre_filter_halts() {
    let config = Config {
        llm_api_key: "test-key".to_string(),
        ..Config::default()
    };
    let args = GenerateArgs {
        test: false,
        count: Some(10),
        genre: Some("cooking".to_string()),
    };

    let err = GenerationRun::new(config, &args).unwrap_err();
    assert!(matches!(
        err,
        AppError::Config(ConfigError::UnknownGenre { .. })
    ));
}

/// 测试真实 LLM 生成（需要 API 密钥）
///
/// 运行方式：
/// ```bash
/// LLM_API_KEY=... cargo test test_generate_live -- --ignored --nocapture
/// ```
#[tokio::test]
#[ignore]
async fn test_generate_live() {
    quiz_question_gen::utils::logging::init();

    let config = Config::from_env();
    let service = LlmService::new(&config);

    let batch = service
        .generate_questions(Genre::Programming, "Rust言語", 11, 3)
        .await
        .expect("LLM 生成应成功");

    println!("生成 {} 问", batch.len());
    assert!(!batch.is_empty());
    for record in &batch {
        assert!(record.validate().is_ok(), "题目 {} 校验失败", record.id);
    }
}
