use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

use crate::error::ExtractError;
use crate::models::name::NameSuggestion;
use crate::services::fallback::default_names;

// 启动后只编译一次
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*([}\]])").unwrap());

const LOG_PREVIEW_CHARS: usize = 200;

/// 解析模型输出，任何失败都降级为固定的兜底列表，返回值永不为空
pub fn extract(raw: &str) -> Vec<NameSuggestion> {
    match try_extract(raw) {
        Ok(names) => {
            tracing::info!("<<< 模型输出解析成功，姓名数量: {}", names.len());
            names
        }
        Err(e) => {
            tracing::warn!("--- 模型输出解析失败，使用默认数据: {}", e);
            tracing::debug!(
                "原始内容前{}字符: {}",
                LOG_PREVIEW_CHARS,
                preview(raw, LOG_PREVIEW_CHARS)
            );
            if let ExtractError::MalformedJson(_) = e {
                tracing::debug!(
                    "原始内容后{}字符: {}",
                    LOG_PREVIEW_CHARS,
                    tail(raw, LOG_PREVIEW_CHARS)
                );
            }
            default_names()
        }
    }
}

/// 与 [`extract`] 相同的流程，但把失败原因返回给调用方
pub fn try_extract(raw: &str) -> Result<Vec<NameSuggestion>, ExtractError> {
    tracing::debug!(">>> 开始解析模型输出: {}...", preview(raw, LOG_PREVIEW_CHARS));

    let span = locate_json_span(raw).ok_or(ExtractError::NoJsonFound)?;
    let repaired = repair_json(span);
    tracing::debug!("清理后的 JSON: {}...", preview(&repaired, LOG_PREVIEW_CHARS));

    // 修复后仍无法解析则直接放弃，不做第二轮修复
    let parsed: Value = serde_json::from_str(&repaired)
        .map_err(|e| ExtractError::MalformedJson(e.to_string()))?;

    let entries = match parsed {
        Value::Object(mut obj) => match obj.remove("names") {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    let mut names: Vec<NameSuggestion> = entries
        .into_iter()
        .filter_map(NameSuggestion::from_value)
        .collect();

    if names.is_empty() {
        return Err(ExtractError::EmptyResult);
    }
    assign_batch_ids(&mut names);
    Ok(names)
}

/// 前端按 id 区分卡片和收藏：缺失（非正数）或重复的 id 改为按位置编号，跳过已占用的 id
fn assign_batch_ids(names: &mut [NameSuggestion]) {
    let mut used = HashSet::new();
    let mut needs_id = Vec::new();
    for (idx, name) in names.iter().enumerate() {
        if name.id <= 0 || !used.insert(name.id) {
            needs_id.push(idx);
        }
    }

    for idx in needs_id {
        let mut candidate = idx as i64 + 1;
        while used.contains(&candidate) {
            candidate += 1;
        }
        tracing::debug!(
            "姓名 {} 的 id {} 无效，改为 {}",
            names[idx].chinese,
            names[idx].id,
            candidate
        );
        used.insert(candidate);
        names[idx].id = candidate;
    }
}

/// 第一个 `{` 到最后一个 `}` 之间的内容（含两端）
pub fn locate_json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// 启发式修复：合并空白（含字符串内的换行），再去掉 `}` / `]` 前的尾随逗号
pub fn repair_json(span: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(span, " ");
    TRAILING_COMMA.replace_all(&collapsed, "$1").into_owned()
}

fn preview(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn tail(s: &str, max_chars: usize) -> &str {
    let count = s.chars().count();
    if count <= max_chars {
        return s;
    }
    match s.char_indices().nth(count - max_chars) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::name::{CharacterEntry, ExplanationField};

    const SCENARIO: &str = r#"{"names":[{"id":1,"chinese":"慧","pinyin":"Huì","meaning":"Wise","characters":[{"char":"慧","meaning":"wise"}],"culturalScore":90,"style":"Modern","commonness":"Common","gender":"Unisex","fullMeaning":"x","famousUsers":"y","fiveElements":{"wood":1,"fire":1,"earth":1,"metal":1,"water":1},"strokeCount":15,"luckyScore":80}]}"#;

    #[test]
    fn test_empty_and_prose_return_fallback() {
        let fallback = default_names();
        assert_eq!(extract(""), fallback);
        assert_eq!(extract("not json at all"), fallback);
        assert_eq!(try_extract(""), Err(ExtractError::NoJsonFound));
    }

    #[test]
    fn test_always_non_empty() {
        let inputs = [
            "",
            "   ",
            "} reversed {",
            "{\"names\":[{\"id\":1",
            "{\"names\": []}",
            "{\"other\": 1}",
            "{\"names\": \"美玲\"}",
            "{\"names\": [1, 2, 3]}",
            "Here is {not json} for you",
            SCENARIO,
        ];
        for input in inputs {
            assert!(!extract(input).is_empty(), "empty result for {input:?}");
        }
    }

    #[test]
    fn test_failure_kinds() {
        assert_eq!(try_extract("} reversed {"), Err(ExtractError::NoJsonFound));
        assert!(matches!(
            try_extract("Here is {not json} for you"),
            Err(ExtractError::MalformedJson(_))
        ));
        assert_eq!(try_extract("{\"names\": []}"), Err(ExtractError::EmptyResult));
        assert_eq!(try_extract("{\"other\": 1}"), Err(ExtractError::EmptyResult));
        assert_eq!(try_extract("{\"names\": [1, 2]}"), Err(ExtractError::EmptyResult));
    }

    #[test]
    fn test_trailing_comma_is_repaired() {
        let names = try_extract(r#"{"names":[{"id":1,"chinese":"美玲",}]}"#).unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].chinese, "美玲");

        let names = try_extract(r#"{"names":[{"id":2,"chinese":"思远"} , ]}"#).unwrap();
        assert_eq!(names[0].chinese, "思远");
    }

    #[test]
    fn test_newlines_inside_strings() {
        let with_newlines = "{\"names\":[{\"id\":1,\n\"chinese\":\"慧\",\"meaning\":\"Wise\nand   kind\"}]}";
        let flat = r#"{"names":[{"id":1,"chinese":"慧","meaning":"Wise and kind"}]}"#;

        let a = try_extract(with_newlines).unwrap();
        let b = try_extract(flat).unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].meaning, "Wise and kind");
    }

    #[test]
    fn test_partial_character_is_normalized() {
        let raw = r#"{"names":[{"id":1,"chinese":"思远","characters":[{"char":"思","meaning":"think"}]}]}"#;
        let names = try_extract(raw).unwrap();
        let info = names[0].characters[0].as_canonical().unwrap();
        assert_eq!(info.char, "思");
        assert_eq!(info.meaning, "think");
        assert_eq!(info.origin, "");
        assert_eq!(info.explanation, ExplanationField::Plain(String::new()));
    }

    #[test]
    fn test_scenario_embedded_in_prose() {
        let raw = format!(
            "好的，以下是为您生成的姓名：\n```json\n{SCENARIO}\n```\n希望您喜欢！"
        );
        let names = extract(&raw);
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].chinese, "慧");
        assert_eq!(names[0].stroke_count, 15);
        assert_eq!(names[0].five_elements.water, 1);
        let info = names[0].characters[0].as_canonical().unwrap();
        assert_eq!(info.origin, "");
    }

    #[test]
    fn test_unknown_character_shape_passes_through() {
        let raw = r#"{"names":[{"id":1,"chinese":"慧","characters":["慧", {"glyph":"慧"}]}]}"#;
        let names = try_extract(raw).unwrap();
        assert_eq!(
            names[0].characters,
            vec![
                CharacterEntry::Other(serde_json::json!("慧")),
                CharacterEntry::Other(serde_json::json!({ "glyph": "慧" })),
            ]
        );
    }

    #[test]
    fn test_both_explanation_shapes_accepted() {
        let raw = r#"{"names":[
            {"id":1,"chinese":"慧","explanation":"Wise"},
            {"id":2,"chinese":"玲","bilingualExplanation":{"chinese":"玉声","english":"Jade sound"}}
        ]}"#;
        let names = try_extract(raw).unwrap();
        assert_eq!(names[0].explanation, ExplanationField::Plain("Wise".into()));
        assert!(matches!(&names[1].explanation, ExplanationField::Bilingual(pair) if pair.chinese == "玉声"));
    }

    #[test]
    fn test_missing_ids_are_assigned() {
        let names = try_extract(r#"{"names":[{"chinese":"慧"},{"chinese":"玲"}]}"#).unwrap();
        let ids: Vec<i64> = names.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_duplicate_ids_are_reassigned() {
        let raw = r#"{"names":[
            {"id":2,"chinese":"慧"},
            {"id":2,"chinese":"玲"},
            {"chinese":"思"},
            {"id":1,"chinese":"远"}
        ]}"#;
        let names = try_extract(raw).unwrap();
        let ids: Vec<i64> = names.iter().map(|n| n.id).collect();
        // 首次出现的 id 保留，其余按位置顺延
        assert_eq!(ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_valid_ids_are_kept() {
        let raw = r#"{"names":[{"id":7,"chinese":"慧"},{"id":3,"chinese":"玲"}]}"#;
        let ids: Vec<i64> = try_extract(raw).unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn test_locate_json_span() {
        assert_eq!(locate_json_span("abc {\"a\":1} def"), Some("{\"a\":1}"));
        assert_eq!(locate_json_span("{a} and {b}"), Some("{a} and {b}"));
        assert_eq!(locate_json_span("no braces"), None);
        assert_eq!(locate_json_span("only { open"), None);
    }

    #[test]
    fn test_repair_json() {
        assert_eq!(repair_json("{\n  \"a\": [1, 2,\n ],\n}"), "{ \"a\": [1, 2]}");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("美玲思远", 2), "美玲");
        assert_eq!(preview("ab", 5), "ab");
        assert_eq!(tail("美玲思远", 2), "思远");
    }
}
