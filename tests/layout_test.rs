//! Root layout context built from locale files on disk.

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use locale_overrides::config::ConfigManager;
use locale_overrides::{
    LayoutContext,
    Locale,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

const EN: &str = r"
sidebar:
  home: Home
  settings: Settings
  knowledge: Knowledge Base
dialog:
  save: Save
  cancel: Cancel
footer:
  save: Save
version: 2
";

const ZH_CN: &str = r"
sidebar:
  home: 首页
  settings: 设置
  knowledge: 知识库
dialog:
  save: 保存
footer:
  save: 存储
";

const ZH_HK: &str = "sidebar: [broken\n";

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn prepare(root: &Path, cookie: Option<&str>) -> LayoutContext {
    let mut manager = ConfigManager::new();
    manager.load_settings(Some(root.to_path_buf())).unwrap();
    LayoutContext::prepare(manager.get_settings(), root, cookie).unwrap()
}

#[test]
fn test_layout_context_from_monorepo_root() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "web/lib/i18n/locales/en.yaml", EN);
    write(temp_dir.path(), "web/lib/i18n/locales/zh-CN.yaml", ZH_CN);
    write(temp_dir.path(), "web/lib/i18n/locales/zh-HK.yaml", ZH_HK);

    let context = prepare(temp_dir.path(), Some("theme=dark; deeptutor-language=zh"));

    assert_eq!(
        serde_json::to_value(&context).unwrap(),
        json!({
            "initialLanguage": "zh-CN",
            "i18nOverrides": {
                "zh-CN": {
                    "Home": "首页",
                    "Settings": "设置",
                    "Knowledge Base": "知识库",
                    "Save": "保存"
                },
                "zh-TW": {},
                "zh-HK": {}
            }
        })
    );
}

#[test]
fn test_layout_context_override_order_follows_english_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "lib/i18n/locales/en.yaml", EN);
    write(temp_dir.path(), "lib/i18n/locales/zh-CN.yaml", ZH_CN);

    let context = prepare(temp_dir.path(), None);

    let keys: Vec<&str> =
        context.i18n_overrides.get(&Locale::ZhCn).unwrap().keys().collect();
    assert_eq!(keys, vec!["Home", "Settings", "Knowledge Base", "Save"]);
    assert_eq!(context.initial_language, Locale::En);
}

#[test]
fn test_layout_context_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        ".locale-overrides.json",
        r#"{"localeRoots": ["i18n"], "overlayLocales": ["zh-TW"], "languageCookie": "lang"}"#,
    );
    write(temp_dir.path(), "i18n/en.yaml", "title: Title\n");
    write(temp_dir.path(), "i18n/zh-TW.yaml", "title: 標題\n");
    write(temp_dir.path(), "i18n/zh-CN.yaml", "title: 标题\n");

    let context = prepare(temp_dir.path(), Some("lang=zh-TW"));

    assert_eq!(
        serde_json::to_value(&context).unwrap(),
        json!({
            "initialLanguage": "zh-TW",
            "i18nOverrides": { "zh-TW": { "Title": "標題" } }
        })
    );
}
