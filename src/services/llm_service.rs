//! LLM 服务 - 业务能力层
//!
//! 只负责"调用 LLM 生成一个题目批次"能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务
//!
//! ## 响应处理
//!
//! LLM 的自由文本响应可能把 JSON 包在 ``` 围栏里，解析前先剥掉围栏，
//! 再按 `QuestionRecord` 的结构严格反序列化（结构不符直接报错，
//! 不做宽松的字段访问）。任何失败都只影响当前批次。

use std::sync::OnceLock;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use regex::Regex;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Genre, QuestionRecord};
use crate::utils::logging::truncate_text;

/// 生成请求的系统消息
const SYSTEM_MESSAGE: &str = "あなたはクイズ問題の作成者です。指示された条件に従って、\
                               正確で事実に基づいたクイズ問題をJSON配列形式で出力してください。\
                               JSON以外の説明文は出力しないでください。";

/// LLM 服务
///
/// 职责：
/// - 构建生成用 prompt 并调用 LLM API
/// - 从响应文本中提取并严格解析 JSON
/// - 只处理单个批次，不出现题库、不关心流程顺序
#[derive(Debug)]
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmService {
    /// 创建新的 LLM 服务
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
        }
    }

    /// 通用的 LLM 调用函数
    ///
    /// # 参数
    /// - `user_message`: 用户消息内容
    /// - `system_message`: 系统消息（可选）
    ///
    /// # 返回
    /// 返回 LLM 的响应内容（字符串）
    pub async fn send_to_llm(
        &self,
        user_message: &str,
        system_message: Option<&str>,
    ) -> AppResult<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        // 构建消息列表
        let mut messages = Vec::new();

        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()
                .map_err(|e| AppError::api_request_failed(&self.model_name, e))?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()
            .map_err(|e| AppError::api_request_failed(&self.model_name, e))?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        // 构建请求
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.7)
            .max_tokens(8000u32)
            .build()
            .map_err(|e| AppError::api_request_failed(&self.model_name, e))?;

        // 调用 API
        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            AppError::api_request_failed(&self.model_name, e)
        })?;

        debug!("LLM API 调用成功");

        // 提取响应内容
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::api_empty_content(&self.model_name))?;

        Ok(content.trim().to_string())
    }

    /// 请求生成一个题目批次
    ///
    /// # 参数
    /// - `genre`: 分类
    /// - `topic`: 话题
    /// - `start_id`: 起始题目编号（连番）
    /// - `count`: 请求生成的题目数
    ///
    /// # 返回
    /// 返回解析出的题目列表。网络失败、响应为空或 JSON 不符合
    /// `QuestionRecord` 结构都返回错误，由调用方按"该批次为 0 题"处理。
    pub async fn generate_questions(
        &self,
        genre: Genre,
        topic: &str,
        start_id: u32,
        count: usize,
    ) -> AppResult<Vec<QuestionRecord>> {
        debug!(
            "开始生成批次: {}/{} 起始 {} 数量 {}",
            genre,
            topic,
            QuestionRecord::format_id(start_id),
            count
        );

        let prompt = build_generation_prompt(genre, topic, start_id, count);
        let response = self.send_to_llm(&prompt, Some(SYSTEM_MESSAGE)).await?;

        let batch = parse_batch_response(&response)?;
        debug!("批次解析成功: {} 问", batch.len());
        Ok(batch)
    }
}

/// 从响应文本中解析题目批次
///
/// 先剥掉围栏，再按 `QuestionRecord` 的结构严格反序列化。
/// 结构不符直接返回 `ApiError::JsonParseFailed`，不做宽松的字段访问。
fn parse_batch_response(response: &str) -> AppResult<Vec<QuestionRecord>> {
    let json = extract_json_block(response);
    serde_json::from_str(json).map_err(|e| {
        warn!(
            "响应不符合题目结构，无法解析: {}",
            truncate_text(response, 200)
        );
        AppError::from(e)
    })
}

/// 构建生成用 prompt
///
/// 条件与输出格式沿用 TypeGlobe 的出题规范：4 择、双语、
/// 日文选择肢只用 kana/字母（用户用フリック输入作答，不做汉字变换）。
fn build_generation_prompt(genre: Genre, topic: &str, start_id: u32, count: usize) -> String {
    format!(
        r#"以下の条件で、クイズ問題を{count}問生成してください。

【条件】
- ジャンル: {genre} ({genre_ja})
- トピック: {topic}
- 4択問題
- 日本語と英語の両方を含める
- 難易度: 初級から上級まで混在
- 問題は正確で、事実に基づいた内容にする

【重要な入力仕様】
ユーザーはフリック入力やキーボードで回答します。漢字変換は不要です。
- 日本語の選択肢: ひらがな、カタカナ、アルファベットのみ使用（漢字は使わない）
  例: ✓「とうきょう」「トウキョウ」「Tokyo」
      ✗「東京」（漢字は不可）
- 英語の選択肢: アルファベット、数字、記号のみ
- 選択肢は簡潔に（各選択肢は20文字以内を推奨）
- 固有名詞や専門用語はカタカナまたはアルファベット表記

【出力形式】
以下のJSON配列形式で出力してください（他の説明文は不要）:

[
  {{
    "id": "{first_id}",
    "genre": "{genre}",
    "question_text": {{
      "ja": "日本語の問題文",
      "en": "English question text"
    }},
    "choices": [
      {{"ja": "せんたくし1", "en": "Choice 1"}},
      {{"ja": "せんたくし2", "en": "Choice 2"}},
      {{"ja": "せんたくし3", "en": "Choice 3"}},
      {{"ja": "せんたくし4", "en": "Choice 4"}}
    ],
    "correct_answer_index": 0,
    "image_path": null
  }}
]

正解のインデックス(correct_answer_index)は0-3の範囲で、ランダムに配置してください。
問題番号は{start_id}から始めて、連番にしてください。"#,
        count = count,
        genre = genre,
        genre_ja = genre.ja_name(),
        topic = topic,
        first_id = QuestionRecord::format_id(start_id),
        start_id = start_id,
    )
}

/// 从响应文本中提取 JSON 部分
///
/// 剥掉 ```json ... ``` 或 ``` ... ``` 围栏；没有围栏时原样返回。
pub(crate) fn extract_json_block(content: &str) -> &str {
    static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = FENCE_REGEX
        .get_or_init(|| Regex::new(r"```(?:json)?\s*([\s\S]+?)```").expect("围栏正则是固定字面量"));

    if let Some(m) = re.captures(content).and_then(|caps| caps.get(1)) {
        return m.as_str().trim();
    }
    content.trim()
}
