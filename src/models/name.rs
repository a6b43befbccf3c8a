use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 中英双语文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub chinese: String,
    pub english: String,
}

/// 解释类字段：模型有时只给英文字符串，有时给 `{chinese, english}` 对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExplanationField {
    Plain(String),
    Bilingual(BilingualText),
}

impl ExplanationField {
    /// 从对象中读取，双语键优先于纯文本键；两个键下都可能出现 `{chinese, english}` 对象
    pub fn from_object(obj: &Map<String, Value>, plain_key: &str, bilingual_key: &str) -> Self {
        match obj.get(bilingual_key) {
            Some(Value::Object(pair)) => return Self::from_pair(pair),
            Some(Value::String(text)) if !text.is_empty() => {
                return ExplanationField::Plain(text.clone());
            }
            _ => {}
        }
        match obj.get(plain_key) {
            Some(Value::Object(pair)) => Self::from_pair(pair),
            _ => ExplanationField::Plain(str_field(obj, plain_key)),
        }
    }

    fn from_pair(pair: &Map<String, Value>) -> Self {
        ExplanationField::Bilingual(BilingualText {
            chinese: str_field(pair, "chinese"),
            english: str_field(pair, "english"),
        })
    }

    /// 英文文本，供日志和简单展示使用
    pub fn english(&self) -> &str {
        match self {
            ExplanationField::Plain(text) => text,
            ExplanationField::Bilingual(pair) => &pair.english,
        }
    }

    // 按变体决定写入哪个键
    fn serialize_entry<M: SerializeMap>(
        &self,
        map: &mut M,
        plain_key: &'static str,
        bilingual_key: &'static str,
    ) -> Result<(), M::Error> {
        match self {
            ExplanationField::Plain(text) => map.serialize_entry(plain_key, text),
            ExplanationField::Bilingual(pair) => map.serialize_entry(bilingual_key, pair),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiveElements {
    pub wood: u32,
    pub fire: u32,
    pub earth: u32,
    pub metal: u32,
    pub water: u32,
}

impl FiveElements {
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(Value::Object(obj)) = value else {
            return Self::default();
        };
        let element = |key: &str| u32::try_from(int_field(obj, key)).unwrap_or(0);
        Self {
            wood: element("wood"),
            fire: element("fire"),
            earth: element("earth"),
            metal: element("metal"),
            water: element("water"),
        }
    }
}

/// 单个汉字的释义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterInfo {
    pub char: String,
    pub meaning: String,
    pub origin: String,
    pub explanation: ExplanationField,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CharacterEntry {
    Canonical(CharacterInfo),
    /// 无法识别的条目原样透传
    Other(Value),
}

impl CharacterEntry {
    /// 带 `char` 键的对象重建为标准结构（只保留已知键，缺失字段置空串），其余原样保留
    pub fn from_value(value: Value) -> Self {
        match &value {
            Value::Object(obj) if obj.get("char").is_some_and(is_truthy) => {
                CharacterEntry::Canonical(CharacterInfo {
                    char: str_field(obj, "char"),
                    meaning: str_field(obj, "meaning"),
                    origin: str_field(obj, "origin"),
                    explanation: ExplanationField::from_object(
                        obj,
                        "explanation",
                        "bilingualExplanation",
                    ),
                })
            }
            _ => CharacterEntry::Other(value),
        }
    }

    pub fn as_canonical(&self) -> Option<&CharacterInfo> {
        match self {
            CharacterEntry::Canonical(info) => Some(info),
            CharacterEntry::Other(_) => None,
        }
    }
}

impl Serialize for CharacterEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CharacterEntry::Canonical(info) => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("char", &info.char)?;
                map.serialize_entry("meaning", &info.meaning)?;
                map.serialize_entry("origin", &info.origin)?;
                info.explanation
                    .serialize_entry(&mut map, "explanation", "bilingualExplanation")?;
                map.end()
            }
            CharacterEntry::Other(raw) => raw.serialize(serializer),
        }
    }
}

/// 一条姓名建议，只能通过响应解析的规范化步骤或兜底数据构造
#[derive(Debug, Clone, PartialEq)]
pub struct NameSuggestion {
    pub id: i64,
    pub chinese: String,
    pub pinyin: String,
    pub meaning: String,
    pub explanation: ExplanationField,
    pub characters: Vec<CharacterEntry>,
    pub cultural_score: i32,
    pub style: String,
    pub commonness: String,
    pub gender: String,
    pub full_meaning: ExplanationField,
    pub full_explanation: Option<String>,
    pub famous_users: ExplanationField,
    pub famous_users_explanation: Option<String>,
    pub five_elements: FiveElements,
    pub stroke_count: i32,
    pub lucky_score: i32,
}

impl NameSuggestion {
    /// 非对象返回 None；字段缺失时取默认值
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut obj) = value else {
            return None;
        };

        let characters = match obj.remove("characters") {
            Some(Value::Array(entries)) => {
                entries.into_iter().map(CharacterEntry::from_value).collect()
            }
            _ => Vec::new(),
        };

        Some(Self {
            id: int_field(&obj, "id"),
            chinese: str_field(&obj, "chinese"),
            pinyin: str_field(&obj, "pinyin"),
            meaning: str_field(&obj, "meaning"),
            explanation: ExplanationField::from_object(
                &obj,
                "explanation",
                "bilingualExplanation",
            ),
            characters,
            cultural_score: small_int_field(&obj, "culturalScore"),
            style: str_field(&obj, "style"),
            commonness: str_field(&obj, "commonness"),
            gender: str_field(&obj, "gender"),
            full_meaning: ExplanationField::from_object(
                &obj,
                "fullMeaning",
                "bilingualFullMeaning",
            ),
            full_explanation: opt_str_field(&obj, "fullExplanation"),
            famous_users: ExplanationField::from_object(
                &obj,
                "famousUsers",
                "bilingualFamousUsers",
            ),
            famous_users_explanation: opt_str_field(&obj, "famousUsersExplanation"),
            five_elements: FiveElements::from_value(obj.get("fiveElements")),
            stroke_count: small_int_field(&obj, "strokeCount"),
            lucky_score: small_int_field(&obj, "luckyScore"),
        })
    }
}

impl Serialize for NameSuggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("chinese", &self.chinese)?;
        map.serialize_entry("pinyin", &self.pinyin)?;
        map.serialize_entry("meaning", &self.meaning)?;
        self.explanation
            .serialize_entry(&mut map, "explanation", "bilingualExplanation")?;
        map.serialize_entry("characters", &self.characters)?;
        map.serialize_entry("culturalScore", &self.cultural_score)?;
        map.serialize_entry("style", &self.style)?;
        map.serialize_entry("commonness", &self.commonness)?;
        map.serialize_entry("gender", &self.gender)?;
        self.full_meaning
            .serialize_entry(&mut map, "fullMeaning", "bilingualFullMeaning")?;
        if let Some(text) = &self.full_explanation {
            map.serialize_entry("fullExplanation", text)?;
        }
        self.famous_users
            .serialize_entry(&mut map, "famousUsers", "bilingualFamousUsers")?;
        if let Some(text) = &self.famous_users_explanation {
            map.serialize_entry("famousUsersExplanation", text)?;
        }
        map.serialize_entry("fiveElements", &self.five_elements)?;
        map.serialize_entry("strokeCount", &self.stroke_count)?;
        map.serialize_entry("luckyScore", &self.lucky_score)?;
        map.end()
    }
}

// ---- 宽松取值：模型输出的类型并不可靠 ----

fn str_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn opt_str_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    Some(str_field(obj, key)).filter(|s| !s.is_empty())
}

fn int_field(obj: &Map<String, Value>, key: &str) -> i64 {
    match obj.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.round() as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn small_int_field(obj: &Map<String, Value>, key: &str) -> i32 {
    i32::try_from(int_field(obj, key)).unwrap_or(0)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
