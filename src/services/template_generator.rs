//! 模板生成器 - 业务能力层
//!
//! 确定性的程序设计题目生成：从静态模板表按固定配比展开，
//! 产出从指定编号开始的连番题目。不依赖网络，结果可重现。
//!
//! 模板覆盖 Python / JavaScript / Rust / アルゴリズム / データ構造 /
//! デザインパターン / 関数型 / オブジェクト指向。选择肢为单语文本时
//! ja / en 使用同一字符串（与题库既有数据保持一致）。

use crate::models::{Genre, LocalizedText, QuestionRecord};

/// 一条模板：(日文题干, 英文题干, 4 个选择肢, 正解索引)
type Template = (&'static str, &'static str, [&'static str; 4], usize);

static PYTHON_TEMPLATES: &[Template] = &[
    ("Pythonでもじれつをれんけつするえんざんしは？", "Operator to concatenate strings in Python?",
     ["+", "*", "&", "||"], 0),
    ("Pythonでこめんとをかくきごうは？", "Symbol for comments in Python?",
     ["#", "//", "/*", "--"], 0),
    ("Pythonのりすとをぎゃくじゅんにするめそっどは？", "Method to reverse a list in Python?",
     ["reverse()", "backwards()", "flip()", "invert()"], 0),
    ("Pythonでれんじをさくせいするかんすうは？", "Function to create range in Python?",
     ["range()", "seq()", "series()", "span()"], 0),
    ("Pythonでもじれつのながさをとるかんすうは？", "Function to get string length in Python?",
     ["len()", "length()", "size()", "count()"], 0),
    ("Pythonでれいがいをほそくするきーわーどは？", "Keyword to catch exceptions in Python?",
     ["except", "catch", "rescue", "trap"], 0),
    ("Pythonでせいせいしをつくるきーわーどは？", "Keyword to create generator in Python?",
     ["yield", "generate", "produce", "emit"], 0),
    ("Pythonのlambdaのやくわりは？", "Role of lambda in Python?",
     ["むめいかんすう", "るーぷ", "じょうけんしき", "くらすていぎ"], 0),
    ("Pythonのdecoratorのきごうは？", "Symbol for decorator in Python?",
     ["@", "#", "&", "$"], 0),
    ("Pythonの__init__めそっどのやくわりは？", "Role of __init__ method in Python?",
     ["しょきか", "はかい", "こぴー", "ひかく"], 0),
    ("Pythonのnumpyのしゅようとは？", "Main use of numpy in Python?",
     ["すうちけいさん", "うぇぶかいはつ", "でーたべーす", "ぐらふぃっく"], 0),
    ("Pythonのunittestのやくわりは？", "Role of unittest in Python?",
     ["てすと", "でばっぐ", "ぷろふぁいる", "ろぐ"], 0),
];

static JS_TEMPLATES: &[Template] = &[
    ("JavaScriptでかんすうをていぎするきーわーどは？", "Keyword to define function in JavaScript?",
     ["function", "def", "func", "fn"], 0),
    ("JavaScriptのやじるしかんすうのきごうは？", "Symbol for arrow function in JavaScript?",
     ["=>", "->", "~>", ">>"], 0),
    ("JavaScriptではいれつのながさをとるぷろぱてぃは？", "Property to get array length in JavaScript?",
     ["length", "size", "count", "len"], 0),
    ("JavaScriptのundefinedのいみは？", "Meaning of undefined in JavaScript?",
     ["みていぎ", "ぬる", "えらー", "ぜろ"], 0),
    ("JavaScriptのPromiseのじょうたいは？", "States of Promise in JavaScript?",
     ["pending,fulfilled,rejected", "start,end", "true,false", "open,close"], 0),
    ("JavaScriptのasync/awaitのもくてきは？", "Purpose of async/await in JavaScript?",
     ["ひどうきしょり", "まるちすれっど", "えらーしょり", "るーぷしょり"], 0),
    ("JavaScriptのspreadえんざんしは？", "Spread operator in JavaScript?",
     ["...", "***", "+++", "~~~"], 0),
    ("JavaScriptのreduce()のやくわりは？", "Role of reduce() in JavaScript?",
     ["しゅうやく", "ぶんかつ", "そーと", "へんかん"], 0),
    ("JavaScriptのgeneratorのきごうは？", "Symbol for generator in JavaScript?",
     ["function*", "function#", "function+", "function@"], 0),
    ("ReactのuseStateのやくわりは？", "Role of useState in React?",
     ["じょうたいかんり", "いべんとしょり", "るーてぃんぐ", "すたいる"], 0),
    ("Vue.jsのv-ifのもくてきは？", "Purpose of v-if in Vue.js?",
     ["じょうけんれんだー", "るーぷ", "いべんと", "すたいる"], 0),
    ("Next.jsのSSRのいみは？", "Meaning of SSR in Next.js?",
     ["さーばーさいどれんだー", "すたてぃっくさいと", "しんぐるぺーじ", "すぴーどあっぷ"], 0),
];

static RUST_TEMPLATES: &[Template] = &[
    ("Rustでふへんへんすうをせんげんするきーわーどは？", "Keyword for immutable variable in Rust?",
     ["let", "const", "var", "immut"], 0),
    ("Rustのしょゆうけんのげんそくは？", "Ownership principle in Rust?",
     ["1つのしょゆうしゃ", "ふくすうしょゆう", "じゆうしょゆう", "しょゆうなし"], 0),
    ("Rustのかりようのきごうは？", "Symbol for borrowing in Rust?",
     ["&", "*", "@", "#"], 0),
    ("RustのResult<T,E>のもくてきは？", "Purpose of Result<T,E> in Rust?",
     ["えらーしょり", "せいこうのみ", "ていぎのみ", "てすと"], 0),
    ("RustのOption<T>のやくわりは？", "Role of Option<T> in Rust?",
     ["ぬるあんぜん", "えらーしょり", "はいれつ", "ぽいんた"], 0),
    ("Rustのlifetimeのきごうは？", "Symbol for lifetime in Rust?",
     ["'a", "@a", "#a", "&a"], 0),
    ("Rustのtraitのもくてきは？", "Purpose of trait in Rust?",
     ["きょうつうどうさていぎ", "けいしょう", "まくろ", "でばっぐ"], 0),
    ("Rustのunwrap()のきけんせいは？", "Danger of unwrap() in Rust?",
     ["ぱにっくはっせい", "めもりりーく", "でっどろっく", "けいこくのみ"], 0),
    ("Rustのbox<T>のやくわりは？", "Role of Box<T> in Rust?",
     ["ひーぷかくほ", "すたっく", "ぐろーばる", "すたてぃっく"], 0),
    ("RustのRc<T>のもくてきは？", "Purpose of Rc<T> in Rust?",
     ["さんしょうかうんと", "すれっどせーふ", "かたへんかん", "えらーしょり"], 0),
    ("Rustのsendとsyncとれいとは？", "Send and Sync traits in Rust?",
     ["すれっどあんぜん", "ねっとわーく", "ふぁいるIO", "でばっぐ"], 0),
    ("Rustのmacro_rules!のやくわりは？", "Role of macro_rules! in Rust?",
     ["まくろていぎ", "かんすう", "とれいと", "もじゅーる"], 0),
];

static ALGO_TEMPLATES: &[Template] = &[
    ("ばぶるそーとのけいさんりょうは？", "Time complexity of bubble sort?",
     ["O(n^2)", "O(n log n)", "O(n)", "O(log n)"], 0),
    ("まーじそーとのとくちょうは？", "Feature of merge sort?",
     ["あんていそーと", "ふあんてい", "いんぷれーす", "らんだむ"], 0),
    ("くいっくそーとのさいあくけーすは？", "Worst case of quicksort?",
     ["O(n^2)", "O(n log n)", "O(n)", "O(log n)"], 0),
    ("にぶんたんさくのぜんていじょうけんは？", "Prerequisite for binary search?",
     ["そーとずみ", "らんだむ", "ゆにーく", "こていちょう"], 0),
    ("ふかさゆうせんたんさくのえいごは？", "English for depth-first search?",
     ["DFS", "BFS", "UCS", "A*"], 0),
    ("だいくすとらほうのもくてきは？", "Purpose of Dijkstra algorithm?",
     ["さいたんけいろ", "そーと", "たんさく", "まっちんぐ"], 0),
    ("くらすかるほうのもくてきは？", "Purpose of Kruskal algorithm?",
     ["さいしょうぜんいきぎ", "さいたんぱす", "そーと", "たんさく"], 0),
    ("どうてきけいかくほうのとくちょうは？", "Feature of dynamic programming?",
     ["ぶぶんもんだいさいりよう", "ぜんたんさく", "ぐりーでぃ", "らんだむ"], 0),
    ("めもかのもくてきは？", "Purpose of memoization?",
     ["けいさんけっかほぞん", "めもりせつやく", "こうそくか", "でばっぐ"], 0),
    ("LCSのいみは？", "Meaning of LCS?",
     ["さいちょうきょうつうぶぶんれつ", "らいんかうんたー", "ろーどばらんさー", "りんくと"], 0),
];

static DS_TEMPLATES: &[Template] = &[
    ("すたっくのFIFO/LIFOは？", "FIFO or LIFO for stack?",
     ["LIFO", "FIFO", "RANDOM", "SORTED"], 0),
    ("きゅーのFIFO/LIFOは？", "FIFO or LIFO for queue?",
     ["FIFO", "LIFO", "RANDOM", "SORTED"], 0),
    ("りんくどりすとのとくちょうは？", "Feature of linked list?",
     ["どうてきさいず", "こていさいず", "らんだむあくせす", "そーとずみ"], 0),
    ("はいれつのらんだむあくせすのけいさんりょうは？", "Time for random access in array?",
     ["O(1)", "O(n)", "O(log n)", "O(n^2)"], 0),
    ("にぶんたんさくぎのとくちょうは？", "Feature of binary search tree?",
     ["ひだりがちいさい", "ひだりがおおきい", "そーとふよう", "ばらんすかくほ"], 0),
    ("AVLきのとくちょうは？", "Feature of AVL tree?",
     ["じどうばらんす", "そーとふよう", "こていたかさ", "らんだむ"], 0),
    ("トライぎのようとは？", "Use of trie tree?",
     ["もじれつけんさく", "すうちそーと", "ぐらふたんさく", "はっしゅ"], 0),
    ("はっしゅてーぶるのへいきんそうにゅうは？", "Average insert time for hash table?",
     ["O(1)", "O(n)", "O(log n)", "O(n log n)"], 0),
    ("ゆにおんふぁいんどのもくてきは？", "Purpose of union-find?",
     ["しゅうごうかんり", "そーと", "けんさく", "けいさん"], 0),
    ("BITのべつめいは？", "Another name for BIT?",
     ["Fenwick tree", "Binary tree", "B-tree", "Trie"], 0),
];

static PATTERN_TEMPLATES: &[Template] = &[
    ("しんぐるとんぱたーんのもくてきは？", "Purpose of singleton pattern?",
     ["いんすたんすを1つ", "ふくすういんすたんす", "けいしょう", "いんたーふぇーす"], 0),
    ("ふぁくとりーぱたーんのやくわりは？", "Role of factory pattern?",
     ["おぶじぇくとせいせい", "はかい", "へんかん", "こぴー"], 0),
    ("びるだーぱたーんのとくちょうは？", "Feature of builder pattern?",
     ["だんかいてきこうちく", "いっかつせいせい", "じどうせいせい", "こぴー"], 0),
    ("あだぷたーぱたーんのやくわりは？", "Role of adapter pattern?",
     ["いんたーふぇーすへんかん", "けいしょう", "おぶじぇくとさくせい", "はかい"], 0),
    ("でこれーたーぱたーんのもくてきは？", "Purpose of decorator pattern?",
     ["きのうついか", "けいしょう", "さくじょ", "へんかん"], 0),
    ("ぷろきしぱたーんのとくちょうは？", "Feature of proxy pattern?",
     ["だいりあくせす", "ちょくせつあくせす", "きゃっしゅ", "どうき"], 0),
    ("おぶざーばーぱたーんのもくてきは？", "Purpose of observer pattern?",
     ["いべんとつうち", "でーたほぞん", "けいさん", "へんかん"], 0),
    ("すとらてじーぱたーんのやくわりは？", "Role of strategy pattern?",
     ["あるごりずむきりかえ", "でーたほぞん", "いべんと", "どうき"], 0),
    ("いてれーたーぱたーんのもくてきは？", "Purpose of iterator pattern?",
     ["じゅんばんあくせす", "らんだむ", "そーと", "けんさく"], 0),
];

static FP_TEMPLATES: &[Template] = &[
    ("かんすうがたぷろぐらみんぐのきほんは？", "Basic of functional programming?",
     ["じゅんすいかんすう", "おぶじぇくと", "すれっど", "ぽいんた"], 0),
    ("ふへんせいのめりっとは？", "Merit of immutability?",
     ["よそくかのう", "こうそく", "かんたん", "じゆう"], 0),
    ("こうかいかんすうとは？", "What is higher-order function?",
     ["かんすうをひきすう", "こうそくかんすう", "さいきかんすう", "むめいかんすう"], 0),
    ("ぴゅあふぁんくしょんのじょうけんは？", "Condition for pure function?",
     ["ふくさようなし", "ぐろーばるへんこう", "IO", "らんだむ"], 0),
    ("mapのやくわりは？", "Role of map in FP?",
     ["へんかん", "ふぃるた", "しゅうやく", "そーと"], 0),
    ("filterのもくてきは？", "Purpose of filter in FP?",
     ["ちゅうしゅつ", "へんかん", "そーと", "けいさん"], 0),
    ("かりーかのもくてきは？", "Purpose of currying in FP?",
     ["ひきすうぶんかつ", "けつごう", "へんかん", "しゅうやく"], 0),
    ("もなどのやくわりは？", "Role of monad in FP?",
     ["けいさんのかぷせるか", "でーたこうぞう", "いべんと", "すれっど"], 0),
];

static OOP_TEMPLATES: &[Template] = &[
    ("おぶじぇくとしこうのさんだいようそは？", "Three pillars of OOP?",
     ["けいしょう,かぷせるか,ぽりもーふぃずむ", "くらす,めそっど,ふぃーるど", "いんたーふぇーす,ちゅうしょう,ぐたい", "でーた,かんすう,ろじっく"], 0),
    ("けいしょうのもくてきは？", "Purpose of inheritance in OOP?",
     ["こーどさいりよう", "めもりせつやく", "こうそくか", "でばっぐ"], 0),
    ("かぷせるかのやくわりは？", "Role of encapsulation in OOP?",
     ["じょうほうかくし", "こうそくか", "さいりよう", "けいしょう"], 0),
    ("ぽりもーふぃずむのいみは？", "Meaning of polymorphism in OOP?",
     ["たけいたいしょり", "たんいつしょり", "こていしょり", "らんだむしょり"], 0),
    ("いんたーふぇーすのもくてきは？", "Purpose of interface in OOP?",
     ["きやくていぎ", "じっそう", "けいしょう", "かぷせるか"], 0),
    ("こんすとらくたのやくわりは？", "Role of constructor in OOP?",
     ["しょきか", "はかい", "こぴー", "ひかく"], 0),
    ("おーばーろーどのいみは？", "Meaning of overload in OOP?",
     ["おなじなまえたいんすう", "めいまえへんこう", "けいしょう", "おーばーらいど"], 0),
    ("おーばーらいどのやくわりは？", "Role of override in OOP?",
     ["めそっどさいていぎ", "しんきてぃぎ", "さくじょ", "かくし"], 0),
];

/// 各模板集的重复倍数（沿用既有题库的配比：基础语言题多、模式题少）
const TEMPLATE_SETS: &[(&[Template], usize)] = &[
    (PYTHON_TEMPLATES, 4),
    (JS_TEMPLATES, 4),
    (RUST_TEMPLATES, 4),
    (ALGO_TEMPLATES, 7),
    (DS_TEMPLATES, 7),
    (PATTERN_TEMPLATES, 10),
    (FP_TEMPLATES, 10),
];

/// 展开模板，生成从 `start_id` 开始的 `count` 道连番题目
///
/// 模板池耗尽后用 OOP 模板循环补足，保证产出数量精确等于 `count`。
pub fn generate(start_id: u32, count: usize) -> Vec<QuestionRecord> {
    let pool: Vec<&Template> = TEMPLATE_SETS
        .iter()
        .flat_map(|(set, times)| std::iter::repeat(*set).take(*times).flatten())
        .collect();

    (0..count)
        .map(|i| {
            let template = if i < pool.len() {
                pool[i]
            } else {
                &OOP_TEMPLATES[i % OOP_TEMPLATES.len()]
            };
            record_from(template, start_id + i as u32)
        })
        .collect()
}

fn record_from(template: &Template, id_num: u32) -> QuestionRecord {
    let (question_ja, question_en, choices, correct_index) = *template;
    QuestionRecord {
        id: QuestionRecord::format_id(id_num),
        genre: Genre::Programming.tag().to_string(),
        question_text: LocalizedText::new(question_ja, question_en),
        choices: choices
            .iter()
            .map(|c| LocalizedText::new(*c, *c))
            .collect(),
        correct_answer_index: correct_index,
        image_path: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_exact_count_with_sequential_ids() {
        let batch = generate(11, 100);

        assert_eq!(batch.len(), 100);
        assert_eq!(batch[0].id, "q00011");
        assert_eq!(batch[99].id, "q00110");
        for (i, record) in batch.iter().enumerate() {
            assert_eq!(record.id, QuestionRecord::format_id(11 + i as u32));
        }
    }

    #[test]
    fn test_generated_records_are_all_valid() {
        for record in generate(11, 1000) {
            assert!(record.validate().is_ok(), "题目 {} 校验失败", record.id);
            assert_eq!(record.genre, "programming");
            assert_eq!(record.choices.len(), 4);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate(50, 200), generate(50, 200));
    }

    #[test]
    fn test_exhausted_pool_cycles_without_panic() {
        // 远超模板池大小，耗尽后应循环 OOP 模板补足
        let batch = generate(1, 5000);
        assert_eq!(batch.len(), 5000);
        assert_eq!(batch.last().unwrap().id, "q05000");
    }

    #[test]
    fn test_choices_duplicate_single_language_text() {
        let batch = generate(11, 1);
        for choice in &batch[0].choices {
            assert_eq!(choice.ja, choice.en);
        }
    }
}
