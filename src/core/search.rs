//! # Search Module / 搜索模块
//!
//! Case-insensitive substring matching over the flattened tool catalog.
//! The rendered site performs the same matching client-side against the
//! `search-index.json` emitted by `build`; this module is the native twin
//! used by the `search` command and the tests.
//!
//! 对扁平化工具目录进行大小写不敏感的子串匹配。
//! 渲染出的站点在客户端对 `build` 生成的 `search-index.json` 做同样的匹配；
//! 本模块是 `search` 命令和测试所用的原生实现。

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::catalog::Catalog;
use crate::core::models::Tool;

/// One row of the flattened search index: a tool plus the category it came
/// from, so results can link back to the category page.
///
/// 扁平化搜索索引的一行：一个工具加上它所属的分类，
/// 以便搜索结果能链接回分类页面。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Display name of the owning category / 所属分类的显示名称
    pub category: String,
    /// Routing slug of the owning category / 所属分类的路由 slug
    pub category_link: String,
    #[serde(flatten)]
    pub tool: Tool,
}

/// Returns whether a tool matches a query: lowercase substring over the
/// name, description and every tag.
pub fn tool_matches(tool: &Tool, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return false;
    }
    if tool.name.to_lowercase().contains(&needle)
        || tool.description.to_lowercase().contains(&needle)
    {
        return true;
    }
    tool.tags
        .as_deref()
        .unwrap_or_default()
        .iter()
        .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Flattens the whole catalog of one locale into search index rows, in
/// category order then tool order.
///
/// 将某语言的整个目录按分类顺序、工具顺序扁平化为搜索索引行。
pub fn build_index(catalog: &Catalog, locale: &str) -> Result<Vec<SearchRecord>> {
    let mut records = Vec::new();
    for category in catalog.list_categories(locale)? {
        for tool in catalog.list_tools(&category.src, locale)? {
            records.push(SearchRecord {
                category: category.name.clone(),
                category_link: category.link.clone(),
                tool,
            });
        }
    }
    Ok(records)
}

/// Filters index rows by query, preserving index order.
pub fn filter<'a>(records: &'a [SearchRecord], query: &str) -> Vec<&'a SearchRecord> {
    records
        .iter()
        .filter(|record| tool_matches(&record.tool, query))
        .collect()
}
