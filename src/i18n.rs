//! Label translations for the configuration surface.
//!
//! Lookup falls back from the selected language to English, then to the key
//! itself, so an untranslated label still shows something readable.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::fmt;

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    SimplifiedChinese,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::English, Self::SimplifiedChinese];

    /// Persisted language code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::SimplifiedChinese => "zh_CN",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code.trim())
    }

    /// Name shown in the language picker, in the language itself.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::SimplifiedChinese => "简体中文",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::English => &[],
            Self::SimplifiedChinese => ZH_CN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every label key the configuration surface uses. English text is the key.
pub const KEYS: [&str; 13] = [
    "Watermark Configuration",
    "Language",
    "Select Language:",
    "Text Watermark",
    "Enter Watermark Text:",
    "Select Font",
    "Select Color",
    "Common Settings",
    "Stay on top",
    "Angle:",
    "Spacing:",
    "Opacity:",
    "Sample Watermark",
];

const ZH_CN: &[(&str, &str)] = &[
    ("Watermark Configuration", "水印配置"),
    ("Language", "语言"),
    ("Select Language:", "选择语言:"),
    ("Text Watermark", "文本水印"),
    ("Enter Watermark Text:", "输入水印文字:"),
    ("Select Font", "选择字体"),
    ("Select Color", "选择颜色"),
    ("Common Settings", "通用设置"),
    ("Stay on top", "保持在顶层"),
    ("Angle:", "角度:"),
    ("Spacing:", "间距:"),
    ("Opacity:", "透明度:"),
    ("Sample Watermark", "示例水印"),
];

/// Translate `key` into `language`.
#[must_use]
pub fn tr(language: Language, key: &str) -> &str {
    language
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, v)| *v)
}
