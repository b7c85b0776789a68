//! # Render Module / 渲染模块
//!
//! This module turns catalog data into HTML: the shared card contract, the
//! bounded and unbounded grids, and whole page composition. All templates
//! are typed `maud` markup, so tool-authored text is escaped by default.
//!
//! 此模块将目录数据渲染为 HTML：共享的卡片契约、有界与无界网格，
//! 以及整页组合。所有模板均为类型化的 `maud` 标记，工具数据默认转义。

pub mod cards;
pub mod layout;
pub mod pages;

// Re-export common rendering entry points
pub use cards::{card_grid, category_section, search_results};
pub use layout::locale_path;
