use crate::models::name::{
    BilingualText, CharacterEntry, CharacterInfo, ExplanationField, FiveElements, NameSuggestion,
};

fn bilingual(chinese: &str, english: &str) -> ExplanationField {
    ExplanationField::Bilingual(BilingualText {
        chinese: chinese.to_string(),
        english: english.to_string(),
    })
}

fn character(
    ch: &str,
    meaning: &str,
    origin: &str,
    explanation: ExplanationField,
) -> CharacterEntry {
    CharacterEntry::Canonical(CharacterInfo {
        char: ch.to_string(),
        meaning: meaning.to_string(),
        origin: origin.to_string(),
        explanation,
    })
}

/// 解析失败时返回的固定姓名列表（整体替换，不与模型结果合并）
pub fn default_names() -> Vec<NameSuggestion> {
    vec![
        NameSuggestion {
            id: 1,
            chinese: "美玲".to_string(),
            pinyin: "Měi Líng".to_string(),
            meaning: "Beautiful Bell".to_string(),
            explanation: bilingual(
                "“美玲”寄托了中国传统文化对女性之美的欣赏。“美”代表美丽与优雅，“玲”源于古代玉饰清脆的声响，象征如美玉般纯洁高贵的品格。",
                "The name \"美玲\" embodies traditional Chinese cultural appreciation for feminine beauty. \"美\" represents beauty and elegance, frequently used in classical Chinese literature to describe both inner and outer beauty. \"玲\" originates from ancient jade ornaments, symbolizing clear, melodious sounds and representing pure, noble character like precious jade. This name carries expectations of gentleness, beauty, and wisdom.",
            ),
            characters: vec![
                character(
                    "美",
                    "Beautiful, pretty",
                    "Common in classical poetry",
                    bilingual(
                        "“美”不仅指外在之美，更强调内在的德行之美，古典诗词中常与“德”并提。",
                        "The character \"美\" carries profound cultural significance in Chinese tradition, referring not only to physical beauty but also emphasizing inner moral beauty. In classical poetry, \"美\" is often paired with \"德\" (virtue), reflecting the Chinese cultural pursuit of both inner and outer cultivation.",
                    ),
                ),
                character(
                    "玲",
                    "Tinkling of jade, delicate sound",
                    "From ancient jade ornaments",
                    bilingual(
                        "“玲”取自古代玉饰相击的清脆之声，象征纯洁高贵的品格，古人常以此形容女子悦耳的声音。",
                        "The character \"玲\" originates from the clear, tinkling sound of ancient jade ornaments, symbolizing purity, nobility, and virtuous character. In ancient times, \"玲\" was often used to describe the melodious voice of women, reflecting admiration for feminine gentleness.",
                    ),
                ),
            ],
            cultural_score: 92,
            style: "Modern & Elegant".to_string(),
            commonness: "Very Common".to_string(),
            gender: "Female".to_string(),
            full_meaning: bilingual(
                "如风中玉铃般清脆动听，寓意精致的美丽与优雅。",
                "A name that evokes the image of delicate beauty and grace, like the tinkling sound of jade bells in the wind.",
            ),
            full_explanation: Some(
                "The name \"美玲\" is like a gentle spring breeze, symbolizing pure and noble character like precious jade. It carries traditional Chinese cultural appreciation for feminine beauty, embodying both external elegance and inner moral cultivation. This name suits gentle, intelligent, and well-educated women, symbolizing a bright future and happy life.".to_string(),
            ),
            famous_users: bilingual(
                "在二十世纪八九十年代出生的中国女性中十分流行。",
                "Popular among Chinese women born in 1980s-1990s",
            ),
            famous_users_explanation: Some(
                "The name \"美玲\" was very popular among Chinese women born in the 1980s-1990s, reflecting that era's emphasis on traditional virtues. Many well-known women have used this name, achieving excellence in their respective fields.".to_string(),
            ),
            five_elements: FiveElements { wood: 2, fire: 1, earth: 1, metal: 1, water: 0 },
            stroke_count: 17,
            lucky_score: 88,
        },
        NameSuggestion {
            id: 2,
            chinese: "思远".to_string(),
            pinyin: "Sī Yuǎn".to_string(),
            meaning: "Thinking Far".to_string(),
            explanation: bilingual(
                "“思远”体现了儒家“修身齐家治国平天下”的理想。“思”代表深思与智慧，“远”象征远大的志向与深远的思想。",
                "The name \"思远\" embodies the Confucian philosophy of \"cultivating oneself, managing family, governing state, and bringing peace to the world.\" \"思\" represents deep thinking and wisdom, reflecting the pursuit of knowledge and virtue. \"远\" symbolizes lofty aspirations and profound thoughts, suggesting long-term vision and broad-mindedness.",
            ),
            characters: vec![
                character(
                    "思",
                    "Think, consider, miss",
                    "From Confucian classics",
                    bilingual(
                        "“思”在儒家经典中地位重要，孔子曰“学而不思则罔”，强调思考对学习与成长的意义。",
                        "The character \"思\" holds an important position in Confucian classics, emphasizing rational thinking and moral cultivation. Confucius said \"Learning without thinking leads to confusion,\" reflecting the crucial role of thinking in learning and growth.",
                    ),
                ),
                character(
                    "远",
                    "Far, distant, profound",
                    "Common in philosophical texts",
                    bilingual(
                        "“远”常见于哲学典籍，不仅指空间上的距离，更强调思想的深度与广度。",
                        "The character \"远\" is commonly used in philosophical texts to express profound thoughts and lofty aspirations. It refers not only to spatial distance but emphasizes depth and breadth of thought, reflecting Chinese culture's pursuit of grand ideals.",
                    ),
                ),
            ],
            cultural_score: 95,
            style: "Classical & Profound".to_string(),
            commonness: "Common".to_string(),
            gender: "Unisex".to_string(),
            full_meaning: bilingual(
                "寓意深思熟虑、目光长远，常与智慧和抱负相联系。",
                "A philosophical name suggesting deep thinking and far-reaching vision. Often associated with wisdom and ambition.",
            ),
            full_explanation: Some(
                "The name \"思远\" contains profound philosophical connotations, reflecting Chinese culture's emphasis on wisdom and virtue. It suits people with intellectual depth and lofty aspirations, symbolizing the spirit of continuous thinking and progress in life.".to_string(),
            ),
            famous_users: bilingual(
                "中国历史上许多学者与文人曾使用此名。",
                "Used by scholars and intellectuals throughout Chinese history",
            ),
            famous_users_explanation: Some(
                "The name \"思远\" has been used by many scholars and intellectuals throughout Chinese history, reflecting Chinese culture's emphasis on learning and virtue. These figures achieved excellence in their respective fields, making significant contributions to the development of Chinese culture.".to_string(),
            ),
            five_elements: FiveElements { wood: 1, fire: 2, earth: 1, metal: 1, water: 0 },
            stroke_count: 16,
            lucky_score: 91,
        },
    ]
}
