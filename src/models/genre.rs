/// 题目分类枚举
///
/// 静态分类表：每个分类带日文显示名、话题列表和生成配比权重。
/// serde 标签与题库 JSON 中的 genre 字段一致（snake_case）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    // === IT・编程类（重点分类） ===
    Programming,
    WebDevelopment,
    Technology,
    ItTerminology,
    // === 动画・游戏・漫画类 ===
    Anime,
    Manga,
    Game,
    VtuberNetCulture,
    // === 常识・学科类 ===
    GeneralKnowledge,
    Geography,
    History,
    Science,
    Math,
    Language,
    Culture,
}

/// 全部分类（生成计划按此顺序遍历）
pub const ALL_GENRES: [Genre; 15] = [
    Genre::Programming,
    Genre::WebDevelopment,
    Genre::Technology,
    Genre::ItTerminology,
    Genre::Anime,
    Genre::Manga,
    Genre::Game,
    Genre::VtuberNetCulture,
    Genre::GeneralKnowledge,
    Genre::Geography,
    Genre::History,
    Genre::Science,
    Genre::Math,
    Genre::Language,
    Genre::Culture,
];

impl Genre {
    /// 分类标签（与题库 JSON 中的 genre 字段一致）
    pub fn tag(self) -> &'static str {
        match self {
            Genre::Programming => "programming",
            Genre::WebDevelopment => "web_development",
            Genre::Technology => "technology",
            Genre::ItTerminology => "it_terminology",
            Genre::Anime => "anime",
            Genre::Manga => "manga",
            Genre::Game => "game",
            Genre::VtuberNetCulture => "vtuber_net_culture",
            Genre::GeneralKnowledge => "general_knowledge",
            Genre::Geography => "geography",
            Genre::History => "history",
            Genre::Science => "science",
            Genre::Math => "math",
            Genre::Language => "language",
            Genre::Culture => "culture",
        }
    }

    /// 日文显示名
    pub fn ja_name(self) -> &'static str {
        match self {
            Genre::Programming => "プログラミング",
            Genre::WebDevelopment => "Web開発",
            Genre::Technology => "テクノロジー",
            Genre::ItTerminology => "IT用語",
            Genre::Anime => "アニメ",
            Genre::Manga => "漫画",
            Genre::Game => "ゲーム",
            Genre::VtuberNetCulture => "VTuber・ネット文化",
            Genre::GeneralKnowledge => "一般常識",
            Genre::Geography => "地理",
            Genre::History => "歴史",
            Genre::Science => "科学",
            Genre::Math => "数学",
            Genre::Language => "言語",
            Genre::Culture => "文化",
        }
    }

    /// 该分类下的出题话题列表
    pub fn topics(self) -> &'static [&'static str] {
        match self {
            Genre::Programming => &[
                "Python基礎",
                "JavaScript基礎",
                "Rust言語",
                "アルゴリズム",
                "データ構造",
                "デザインパターン",
                "関数型プログラミング",
                "オブジェクト指向",
            ],
            Genre::WebDevelopment => &[
                "HTML/CSS",
                "React",
                "Vue.js",
                "Node.js",
                "TypeScript",
                "WebAPI",
                "フロントエンド",
                "バックエンド",
            ],
            Genre::Technology => &[
                "コンピュータ基礎",
                "OS",
                "ネットワーク",
                "データベース",
                "クラウド",
                "Docker",
                "Git",
                "セキュリティ",
            ],
            Genre::ItTerminology => &[
                "略語",
                "技術用語",
                "コマンド",
                "プロトコル",
                "ツール",
                "フレームワーク",
                "ライブラリ",
                "API",
            ],
            Genre::Anime => &[
                "人気作品",
                "声優",
                "アニメ史",
                "監督・制作会社",
                "キャラクター",
                "主題歌",
                "劇場版",
                "深夜アニメ",
            ],
            Genre::Manga => &[
                "少年漫画",
                "少女漫画",
                "青年漫画",
                "漫画家",
                "名作",
                "連載雑誌",
                "漫画賞",
                "漫画用語",
            ],
            Genre::Game => &[
                "RPG",
                "アクション",
                "レトロゲーム",
                "ゲームハード",
                "eスポーツ",
                "ゲーム会社",
                "名作ゲーム",
                "ゲーム用語",
            ],
            Genre::VtuberNetCulture => &[
                "VTuber",
                "ニコニコ動画",
                "ネットミーム",
                "配信文化",
                "SNS",
                "ネットスラング",
                "動画サイト",
                "インフルエンサー",
            ],
            Genre::GeneralKnowledge => &[
                "時事",
                "ビジネスマナー",
                "敬語",
                "冠婚葬祭",
                "生活の知恵",
                "法律",
                "経済",
                "政治",
            ],
            Genre::Geography => &["国の首都", "世界遺産", "国旗", "都道府県", "河川・山脈"],
            Genre::History => &[
                "日本史",
                "世界史",
                "歴史上の人物",
                "歴史的事件",
                "文化史",
            ],
            Genre::Science => &["物理", "化学", "生物", "地学", "天文学"],
            Genre::Math => &["算数", "数学基礎", "図形", "確率・統計", "数学史"],
            Genre::Language => &["英単語", "慣用句", "四字熟語", "ことわざ", "語源"],
            Genre::Culture => &["音楽", "美術", "映画", "文学", "スポーツ"],
        }
    }

    /// 生成配比权重
    pub fn weight(self) -> f64 {
        match self {
            Genre::Programming => 2.5,
            Genre::WebDevelopment => 2.0,
            Genre::Technology => 2.0,
            Genre::ItTerminology => 1.5,
            Genre::Anime => 2.0,
            Genre::Manga => 1.5,
            Genre::Game => 2.0,
            Genre::VtuberNetCulture => 1.0,
            Genre::GeneralKnowledge => 1.5,
            Genre::Geography => 1.0,
            Genre::History => 1.0,
            Genre::Science => 1.0,
            Genre::Math => 0.8,
            Genre::Language => 1.0,
            Genre::Culture => 0.7,
        }
    }

    /// 从分类标签解析
    pub fn from_tag(s: &str) -> Option<Self> {
        ALL_GENRES.iter().copied().find(|g| g.tag() == s)
    }

    /// 可用分类标签列表（用于错误提示）
    pub fn available_tags() -> String {
        ALL_GENRES
            .iter()
            .map(|g| g.tag())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
