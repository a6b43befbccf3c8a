use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unisex => "unisex",
        };
        f.write_str(s)
    }
}

/// 表单提交的用户偏好，仅在单次请求内有效
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub english_name: Option<String>,
    #[serde(default, deserialize_with = "gender_or_none")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub nationality: Option<String>,
    #[serde(default)]
    pub meanings: IndexSet<String>, // 保留勾选顺序，方便提示词阅读
    #[serde(default, deserialize_with = "blank_as_none")]
    pub style: Option<String>,
}

// 前端下拉框未选择时会提交空字符串，统一视为未填写
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

fn gender_or_none<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    match blank_as_none(deserializer)?.as_deref() {
        None => Ok(None),
        Some("male") => Ok(Some(Gender::Male)),
        Some("female") => Ok(Some(Gender::Female)),
        Some("unisex") => Ok(Some(Gender::Unisex)),
        Some(other) => Err(serde::de::Error::unknown_variant(
            other,
            &["male", "female", "unisex"],
        )),
    }
}
