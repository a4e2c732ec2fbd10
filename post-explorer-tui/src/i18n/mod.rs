//!
//! src/i18n/mod.rs
//! 国际化：编译期翻译表
//!
//! 所有界面文本都通过 `t()` 获取：
//!
//!     let texts = t();
//!     texts.users.empty_title        // "No Users Found" 或 "未找到用户"
//!
//! 当前语言保存在一个原子变量中，启动时根据配置调用 `set_language()` 设置。
//!
//! 注意：加载失败时的错误消息来自核心库（如 "Failed to fetch users"），
//!       不参与翻译。
//!

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// 英语（美国）
    #[default]
    #[serde(rename = "en-US", alias = "en")]
    EnUs,
    /// 简体中文（中国）
    #[serde(rename = "zh-CN", alias = "zh")]
    ZhCn,
}

impl Language {
    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::ZhCn => "简体中文",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 该语言的翻译表
    pub fn translations(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::ZhCn => &zh_cn::TRANSLATIONS,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    current_language().translations()
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ZhCn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::ZhCn,
        _ => Language::EnUs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_config_names() {
        for lang in [Language::EnUs, Language::ZhCn] {
            let json = serde_json::to_string(&lang).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", lang.code()));
        }
    }

    #[test]
    fn config_names() {
        let lang: Language = serde_json::from_str("\"zh-CN\"").unwrap_or_default();
        assert_eq!(lang, Language::ZhCn);
        let short: Language = serde_json::from_str("\"zh\"").unwrap_or_default();
        assert_eq!(short, Language::ZhCn);
        assert!(serde_json::from_str::<Language>("\"fr\"").is_err());
    }

    #[test]
    fn tables_differ() {
        let en = Language::EnUs.translations();
        let zh = Language::ZhCn.translations();
        assert_eq!(en.users.empty_title, "No Users Found");
        assert_ne!(en.users.empty_title, zh.users.empty_title);
        assert_eq!(en.help.entries.len(), zh.help.entries.len());
    }
}
