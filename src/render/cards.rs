//! # Card Rendering Module / 卡片渲染模块
//!
//! The per-card contract shared by every grid on the site, plus the
//! bounded landing-page category section and its unbounded counterparts.
//!
//! 站点上所有网格共享的单卡片契约，以及首页的有界分类区块
//! 和对应的无界网格。
//!
//! Card contract / 卡片契约:
//! - icon: explicit `icon_url`, else `https://favicon.im/{url}?larger=true`
//! - outbound link: `{url}?utm_source=runtoweb3.com`, opened in a new tab
//! - description: clamped to 3 lines by CSS, the record is untouched
//! - tags: at most the first 3, as badges

use anyhow::Result;
use maud::{Markup, html};
use rust_i18n::t;

use crate::core::catalog::Catalog;
use crate::core::models::{Category, HOME_GRID_LIMIT, Tool, outbound_url};
use crate::render::layout::locale_path;

/// Renders one tool card. Everything tool-authored goes through maud
/// escaping; the URLs are composed, not authored.
pub fn tool_card(tool: &Tool) -> Markup {
    html! {
        div.card {
            a.card-link href=(outbound_url(&tool.url)) target="_blank" rel="noopener noreferrer" {
                span.card-icon {
                    img src=(tool.icon_src()) width="24" height="24"
                        alt=(format!("{} favicon", tool.name)) loading="lazy";
                }
                span.card-title { (tool.name) }
            }
            p.card-description { (tool.description) }
            @if !tool.badge_tags().is_empty() {
                div.card-tags {
                    @for tag in tool.badge_tags() {
                        span.badge { (tag) }
                    }
                }
            }
        }
    }
}

/// Renders a plain card grid over the given tools, in order, no cap.
pub fn card_grid(tools: &[Tool]) -> Markup {
    html! {
        div.card-grid {
            @for tool in tools {
                (tool_card(tool))
            }
        }
    }
}

/// Renders the grid for a caller-supplied result list. Same card contract
/// as the category grids, but no catalog access, no cap and no more-link.
///
/// 渲染调用方提供的结果列表网格。与分类网格同样的卡片契约，
/// 但不访问目录数据、不截断、无"更多"链接。
pub fn search_results(tools: &[Tool]) -> Markup {
    card_grid(tools)
}

/// Renders one landing-page category section: heading, optional localized
/// "more" link to the category page, and the first [`HOME_GRID_LIMIT`]
/// tools of the category in authored order. Fewer tools simply render a
/// smaller grid; the more-link appears whenever `show_more_link` is true,
/// independent of whether truncation occurred.
///
/// 渲染首页的一个分类区块：标题、可选的本地化"更多"链接，
/// 以及该分类按编写顺序排列的前 [`HOME_GRID_LIMIT`] 个工具。
/// 工具较少时网格相应变小；只要 `show_more_link` 为 true 就显示"更多"链接，
/// 与是否实际截断无关。
pub fn category_section(
    category: &Category,
    catalog: &Catalog,
    locale: &str,
    show_more_link: bool,
) -> Result<Markup> {
    let tools = catalog.list_tools(&category.src, locale)?;
    let shown = &tools[..tools.len().min(HOME_GRID_LIMIT)];

    Ok(html! {
        section.category-section {
            div.section-head {
                h2 { (category.name) }
                @if show_more_link {
                    a.more-link href=(locale_path(locale, &format!("category/{}/", category.link))) {
                        (t!("toolsList.more", locale = locale))
                        " "
                        span.more-name { (category.name) }
                        " "
                        (t!("toolsList.tools", locale = locale))
                        " →"
                    }
                }
            }
            (card_grid(shown))
        }
    })
}
