//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

/// テスト用のロケールファイルを作成する
///
/// # Arguments
/// * `workspace_root` - ワークスペースのルートパス
/// * `locale_root` - ロケールディレクトリ（例: "lib/i18n/locales"）
/// * `file_name` - ファイル名（例: "en.yaml"）
/// * `content` - YAML の内容
///
/// # Returns
/// 作成されたファイルのパス
pub(crate) fn write_locale(
    workspace_root: &Path,
    locale_root: &str,
    file_name: &str,
    content: &str,
) -> PathBuf {
    let dir = workspace_root.join(locale_root);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(file_name);
    fs::write(&path, content).unwrap();
    path
}
