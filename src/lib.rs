//! # runtoweb3 Library / runtoweb3 库
//!
//! This library provides the core functionality for the runtoweb3 tool,
//! a configuration-driven, multi-locale static site generator for a
//! directory of web3 developer tools.
//!
//! 此库为 runtoweb3 工具提供核心功能，
//! 这是一个配置驱动的多语言 web3 开发者工具目录静态站点生成器。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, site configuration and the catalog accessors
//! - `infra` - Infrastructure services like output-tree file operations
//! - `render` - HTML rendering of cards, grids and whole pages
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、站点配置和目录数据访问
//! - `infra` - 基础设施服务，如输出目录文件操作
//! - `render` - 卡片、网格和整页的 HTML 渲染
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod render;

// Re-export commonly used items
pub use crate::core::catalog;
pub use crate::core::config;
pub use crate::core::models;

/// Resolves a requested locale against the locales the UI actually ships.
///
/// Matching tries the full tag first (e.g. "zh-CN"), then just the language
/// code (e.g. "en" from "en-US"), and finally falls back to "en".
///
/// 将请求的语言与 UI 实际支持的语言进行匹配。
/// 先尝试完整标签（如 "zh-CN"），再尝试语言代码（如 "en-US" 中的 "en"），
/// 最后回退到 "en"。
pub fn resolve_ui_locale(requested: &str) -> String {
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&requested) {
        return requested.to_string();
    }
    requested
        .split('-')
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's console output.
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    rust_i18n::set_locale(&resolve_ui_locale(&locale));
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
