//! locale-overrides
//!
//! YAML ロケールファイルを平坦化し、英語の原文をキーとした翻訳オーバーライドを構築する

pub mod config;
pub mod input;
pub mod ir;
pub mod layout;
pub mod locale;
mod test_utils;

pub use layout::LayoutContext;
pub use locale::Locale;
