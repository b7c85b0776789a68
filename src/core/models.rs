//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout runtoweb3:
//! tool categories, tool records and article summaries, together with the
//! card-level rendering constants shared by every grid.
//!
//! 此模块定义了整个 runtoweb3 中使用的核心数据结构：
//! 工具分类、工具记录和文章摘要，以及所有网格共享的卡片级渲染常量。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum number of tool cards shown per category on the landing page.
/// The full list is only rendered on the dedicated category page.
/// 首页每个分类最多显示的工具卡片数量。完整列表仅在分类页面渲染。
pub const HOME_GRID_LIMIT: usize = 8;

/// Maximum number of tag badges rendered per card. The underlying record
/// keeps all of its tags; this is a render-time slice only.
/// 每张卡片最多渲染的标签徽章数量。底层记录保留全部标签，仅在渲染时截取。
pub const TAG_BADGE_LIMIT: usize = 3;

/// Number of article summaries shown on the landing page.
/// 首页显示的文章摘要数量。
pub const HOME_POSTS_LIMIT: usize = 6;

/// Query parameter appended to every outbound tool link.
/// 附加到每个外链工具 URL 的查询参数。
pub const OUTBOUND_UTM: &str = "utm_source=runtoweb3.com";

/// Builds the fallback favicon URL for a tool that ships no explicit icon.
/// 为没有显式图标的工具构建回退 favicon URL。
pub fn fallback_icon_url(tool_url: &str) -> String {
    format!("https://favicon.im/{}?larger=true", tool_url)
}

/// Builds the outbound link for a tool card, with the tracking parameter.
/// 构建工具卡片的外链（带跟踪参数）。
pub fn outbound_url(tool_url: &str) -> String {
    format!("{}?{}", tool_url, OUTBOUND_UTM)
}

/// A named grouping of tools with its own listing page. One instance per
/// category per locale; `name` and `description` are already localized
/// because each locale ships its own category file.
///
/// 一个有独立列表页的工具分组。每个语言每个分类一个实例；
/// `name` 和 `description` 已本地化，因为每个语言有自己的分类文件。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    /// Display name of the category / 分类的显示名称
    pub name: String,
    /// Data source identifier; `data/<locale>/<src>.toml` holds the tools.
    /// 数据源标识符；工具存放在 `data/<locale>/<src>.toml`。
    pub src: String,
    /// Short localized description shown under the heading / 标题下方的简短本地化描述
    pub description: String,
    /// Routing slug, unique within a locale / 路由 slug，在同一语言内唯一
    pub link: String,
}

/// One external resource shown as a card. A tool belongs to a category via
/// the data file it lives in, not via an embedded foreign key.
///
/// 以卡片形式展示的一个外部资源。工具通过所在的数据文件归属分类，
/// 而不是通过内嵌外键。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Tool {
    /// Display name / 显示名称
    pub name: String,
    /// Short description, visually clamped to 3 lines by CSS / 简短描述，CSS 视觉截断为 3 行
    pub description: String,
    /// Bare site URL, e.g. "etherscan.io" / 原始站点 URL，例如 "etherscan.io"
    pub url: String,
    /// Explicit icon URL; when absent the favicon fallback is used.
    /// 显式图标 URL；缺失时使用 favicon 回退。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Ordered tags; at most the first [`TAG_BADGE_LIMIT`] are rendered.
    /// 有序标签；最多渲染前 [`TAG_BADGE_LIMIT`] 个。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Tool {
    /// The icon URL a card should render: explicit `icon_url` if present,
    /// otherwise the deterministic favicon fallback.
    pub fn icon_src(&self) -> String {
        self.icon_url
            .clone()
            .unwrap_or_else(|| fallback_icon_url(&self.url))
    }

    /// The tags a card should render, capped at [`TAG_BADGE_LIMIT`] in
    /// original order. The record itself is never mutated.
    pub fn badge_tags(&self) -> &[String] {
        match &self.tags {
            Some(tags) => &tags[..tags.len().min(TAG_BADGE_LIMIT)],
            None => &[],
        }
    }
}

/// A view-only projection of one article, ordered by publish date descending.
/// 一篇文章的只读投影，按发布日期降序排列。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PostSummary {
    /// Article title / 文章标题
    pub title: String,
    /// Publish date / 发布日期
    pub date: NaiveDate,
    /// URL slug / URL slug
    pub slug: String,
    /// Short excerpt shown in the article list / 文章列表中显示的摘要
    #[serde(default)]
    pub excerpt: String,
}
