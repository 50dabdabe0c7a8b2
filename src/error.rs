use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// LLM API 调用错误（该批次视为空，不中断运行）
    Api(ApiError),
    /// 题库存储错误（立即终止运行）
    Storage(StorageError),
    /// 配置错误（开始生成前终止）
    Config(ConfigError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "API错误: {}", e),
            AppError::Storage(e) => write!(f, "存储错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Api(e) => Some(e),
            AppError::Storage(e) => Some(e),
            AppError::Config(e) => Some(e),
        }
    }
}

/// 单条题目的结构校验错误
#[derive(Debug)]
pub enum ValidationError {
    /// id 格式不符合 q + 5 位数字
    BadIdFormat { id: String },
    /// 选项数量不是 4 个
    WrongChoiceCount { id: String, count: usize },
    /// 正解索引超出 [0, 3]
    AnswerIndexOutOfRange { id: String, index: usize },
    /// 题干文本缺失
    EmptyQuestionText { id: String, locale: &'static str },
}

impl ValidationError {
    /// 出错题目的 id
    pub fn record_id(&self) -> &str {
        match self {
            ValidationError::BadIdFormat { id }
            | ValidationError::WrongChoiceCount { id, .. }
            | ValidationError::AnswerIndexOutOfRange { id, .. }
            | ValidationError::EmptyQuestionText { id, .. } => id,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::BadIdFormat { id } => {
                write!(f, "id 格式非法 (应为 q + 5 位数字): '{}'", id)
            }
            ValidationError::WrongChoiceCount { id, count } => {
                write!(f, "题目 {} 的选项数量为 {} (应为 4)", id, count)
            }
            ValidationError::AnswerIndexOutOfRange { id, index } => {
                write!(f, "题目 {} 的正解索引 {} 超出范围 [0, 3]", id, index)
            }
            ValidationError::EmptyQuestionText { id, locale } => {
                write!(f, "题目 {} 缺少 {} 题干文本", id, locale)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// LLM API 调用错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求失败
    RequestFailed {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 返回内容为空
    EmptyContent { model: String },
    /// 响应中的 JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { model, source } => {
                write!(f, "LLM API 调用失败 (模型: {}): {}", model, source)
            }
            ApiError::EmptyContent { model } => {
                write!(f, "LLM 返回内容为空 (模型: {})", model)
            }
            ApiError::JsonParseFailed { source } => {
                write!(f, "响应 JSON 解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::RequestFailed { source, .. } | ApiError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 题库存储错误
///
/// 任何一种都是致命错误：题库损坏时绝不能当作空题库继续合并，
/// 否则一次保存就会覆盖掉原有数据。
#[derive(Debug)]
pub enum StorageError {
    /// 读取题库文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入题库文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 题库文件内容损坏（JSON 解析失败）
    CorruptBank {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed { path, source } => {
                write!(f, "读取题库失败 ({}): {}", path, source)
            }
            StorageError::WriteFailed { path, source } => {
                write!(f, "写入题库失败 ({}): {}", path, source)
            }
            StorageError::CorruptBank { path, source } => {
                write!(f, "题库文件损坏 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::ReadFailed { source, .. }
            | StorageError::WriteFailed { source, .. }
            | StorageError::CorruptBank { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 未设置 API 密钥
    MissingApiKey,
    /// 未知的分类标签
    UnknownGenre { genre: String, available: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApiKey => {
                write!(
                    f,
                    "未设置 LLM_API_KEY 环境变量，请先执行: export LLM_API_KEY='your-api-key'"
                )
            }
            ConfigError::UnknownGenre { genre, available } => {
                write!(f, "分类 '{}' 不存在，可用分类: {}", genre, available)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建 API 请求错误
    pub fn api_request_failed(
        model: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            model: model.into(),
            source: Box::new(source),
        })
    }

    /// 创建 API 空响应错误
    pub fn api_empty_content(model: impl Into<String>) -> Self {
        AppError::Api(ApiError::EmptyContent {
            model: model.into(),
        })
    }

    /// 创建题库读取错误
    pub fn storage_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Storage(StorageError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建题库写入错误
    pub fn storage_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Storage(StorageError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建题库损坏错误
    pub fn corrupt_bank(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Storage(StorageError::CorruptBank {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
