use serde_json::{json, Value};

use crate::models::preferences::UserPreferences;

/// 未填写字段在提示词中的占位文本
pub const NOT_SPECIFIED: &str = "not specified";

pub const DEFAULT_NAME_COUNT: usize = 5;

/// 系统指令：设定模型的领域专家身份
pub const SYSTEM_PROMPT: &str = "You are a professional Chinese name expert, well versed in traditional Chinese culture, classical poetry and literature, Five Elements theory and Chinese onomastics. Generate high-quality Chinese names according to the user's needs and provide a detailed cultural analysis.";

pub fn build_prompt(prefs: &UserPreferences) -> String {
    build_prompt_with_count(prefs, DEFAULT_NAME_COUNT)
}

pub fn build_prompt_with_count(prefs: &UserPreferences, count: usize) -> String {
    let gender = prefs.gender.map(|g| g.to_string());
    let meanings = prefs
        .meanings
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    // Value 的序列化结果必然是合法 JSON
    let template = serde_json::to_string_pretty(&response_template()).unwrap_or_default();

    format!(
        r#"Please generate {count} high-quality Chinese names for the following request and return a detailed analysis in JSON format.

User information:
- English name: {english_name}
- Gender: {gender}
- Nationality: {nationality}
- Desired meanings: {meanings}
- Style preference: {style}

Generate {count} different Chinese names. Every name must contain the following fields (return strictly in this JSON format):

{template}

Requirements:
1. Names must fit traditional Chinese culture and modern aesthetics
2. Give accurate cultural background and meaning for every name and character
3. Balance the Five Elements and the stroke count numerology
4. Make sure the pinyin carries correct tone marks
5. Only cite real historical and cultural references
6. Match the user's style preference
7. Write every explanation in English; bilingual fields carry both Chinese and English text
8. English explanations must convey the Chinese meaning and its cultural connotation accurately
9. Return the complete JSON object only, without any other text"#,
        english_name = or_placeholder(prefs.english_name.as_deref()),
        gender = or_placeholder(gender.as_deref()),
        nationality = or_placeholder(prefs.nationality.as_deref()),
        meanings = or_placeholder(Some(meanings.as_str())),
        style = or_placeholder(prefs.style.as_deref()),
    )
}

fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}

/// 返回给模型的示例结构，覆盖 NameSuggestion 的全部字段
fn response_template() -> Value {
    json!({
        "names": [
            {
                "id": 1,
                "chinese": "中文姓名",
                "pinyin": "Pīn Yīn",
                "meaning": "Short English meaning",
                "explanation": "English detailed explanation including cultural background, symbolism and traditional meaning",
                "bilingualExplanation": {
                    "chinese": "中文解释",
                    "english": "English explanation"
                },
                "characters": [
                    {
                        "char": "字",
                        "meaning": "Meaning of the character",
                        "origin": "Where the character comes from",
                        "explanation": "English explanation of this character",
                        "bilingualExplanation": {
                            "chinese": "中文解释",
                            "english": "English explanation"
                        }
                    }
                ],
                "culturalScore": 85,
                "style": "Style description",
                "commonness": "How common the name is",
                "gender": "Gender tendency",
                "fullMeaning": "Complete meaning of the name",
                "bilingualFullMeaning": {
                    "chinese": "完整含义",
                    "english": "Complete meaning"
                },
                "fullExplanation": "Complete English explanation of the name's meaning, including cultural connotations and traditional symbolism",
                "famousUsers": "Historical figures or usage",
                "bilingualFamousUsers": {
                    "chinese": "历史名人或使用情况",
                    "english": "Historical figures or usage"
                },
                "famousUsersExplanation": "English description of famous users or historical usage",
                "fiveElements": {
                    "wood": 1,
                    "fire": 1,
                    "earth": 1,
                    "metal": 1,
                    "water": 1
                },
                "strokeCount": 15,
                "luckyScore": 88
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::Gender;
    use crate::services::extract_service::{locate_json_span, try_extract};

    fn sample() -> UserPreferences {
        let mut prefs = UserPreferences {
            english_name: Some("Michael".to_string()),
            gender: Some(Gender::Male),
            nationality: Some("usa".to_string()),
            style: Some("classical".to_string()),
            ..Default::default()
        };
        prefs.meanings.insert("Brave/Strong".to_string());
        prefs.meanings.insert("Wise/Thoughtful".to_string());
        prefs
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let prefs = sample();
        assert_eq!(build_prompt(&prefs), build_prompt(&prefs));
    }

    #[test]
    fn test_prompt_restates_preferences() {
        let prompt = build_prompt(&sample());
        assert!(prompt.contains("- English name: Michael"));
        assert!(prompt.contains("- Gender: male"));
        assert!(prompt.contains("- Nationality: usa"));
        assert!(prompt.contains("- Desired meanings: Brave/Strong, Wise/Thoughtful"));
        assert!(prompt.contains("- Style preference: classical"));
        assert!(prompt.starts_with("Please generate 5 "));
    }

    #[test]
    fn test_missing_fields_use_placeholder() {
        let prompt = build_prompt(&UserPreferences::default());
        assert!(prompt.contains("- English name: not specified"));
        assert!(prompt.contains("- Desired meanings: not specified"));
        assert!(prompt.contains("- Gender: not specified"));
        assert!(!prompt.contains("undefined"));
        assert!(!prompt.contains("null"));
    }

    #[test]
    fn test_template_is_valid_json_with_every_field() {
        let prompt = build_prompt(&sample());
        let span = locate_json_span(&prompt).unwrap();
        let template: Value = serde_json::from_str(span).unwrap();
        let name = &template["names"][0];

        for key in [
            "id",
            "chinese",
            "pinyin",
            "meaning",
            "explanation",
            "bilingualExplanation",
            "characters",
            "culturalScore",
            "style",
            "commonness",
            "gender",
            "fullMeaning",
            "bilingualFullMeaning",
            "fullExplanation",
            "famousUsers",
            "bilingualFamousUsers",
            "famousUsersExplanation",
            "fiveElements",
            "strokeCount",
            "luckyScore",
        ] {
            assert!(name.get(key).is_some(), "template is missing {key}");
        }
        for key in ["char", "meaning", "origin", "explanation", "bilingualExplanation"] {
            assert!(name["characters"][0].get(key).is_some(), "character is missing {key}");
        }
    }

    #[test]
    fn test_template_itself_is_extractable() {
        let names = try_extract(&build_prompt(&sample())).unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].chinese, "中文姓名");
    }

    #[test]
    fn test_custom_count() {
        let prompt = build_prompt_with_count(&sample(), 3);
        assert!(prompt.starts_with("Please generate 3 "));
        assert!(prompt.contains("Generate 3 different Chinese names"));
    }
}
