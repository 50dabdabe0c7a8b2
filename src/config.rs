/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 题库数据目录
    pub data_dir: String,
    /// 每次请求生成的题目数
    pub questions_per_batch: usize,
    /// 默认目标题目总数
    pub total_questions: usize,
    /// 中间保存间隔（累计新题目数达到该值时做一次完整合并保存）
    pub save_interval: usize,
    /// 每次请求之间的等待秒数（API 限速对策）
    pub request_pacing_secs: u64,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            questions_per_batch: 50,
            total_questions: 10000,
            save_interval: 500,
            request_pacing_secs: 1,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o-mini".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            data_dir: std::env::var("QUIZ_DATA_DIR").unwrap_or(default.data_dir),
            questions_per_batch: std::env::var("QUESTIONS_PER_BATCH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.questions_per_batch),
            total_questions: std::env::var("TOTAL_QUESTIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.total_questions),
            save_interval: std::env::var("SAVE_INTERVAL").ok().and_then(|v| v.parse().ok()).unwrap_or(default.save_interval),
            request_pacing_secs: std::env::var("REQUEST_PACING_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_pacing_secs),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
        }
    }
}
