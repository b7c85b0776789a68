//! # Page Composition Module / 页面组合模块
//!
//! Top-level orchestration of whole pages: the landing page (hero, search
//! box, one category section per category in catalog order, article list),
//! the full-list category page, the article page and the client-side search
//! page.
//!
//! 整页的顶层编排：首页（hero、搜索框、按目录顺序逐个渲染的分类区块、
//! 文章列表）、完整列表的分类页面、文章页面和客户端搜索页面。

use anyhow::Result;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser};
use rust_i18n::t;

use crate::core::catalog::Catalog;
use crate::core::config::SiteConfig;
use crate::core::models::{Category, HOME_POSTS_LIMIT, PostSummary, Tool};
use crate::core::posts::{self, Post};
use crate::render::cards::{card_grid, category_section};
use crate::render::layout::{self, locale_path};

/// Embedded client-side search script / 嵌入式客户端搜索脚本
const SEARCH_SCRIPT: &str = include_str!("assets/search.js");

/// Composes the landing page for one locale. A category whose tool file is
/// missing still renders its (empty) section; it never aborts the page.
///
/// 组合某语言的首页。工具文件缺失的分类仍会渲染（空）区块，
/// 绝不会中断整个页面。
pub fn home(
    config: &SiteConfig,
    catalog: &Catalog,
    all_posts: &[PostSummary],
    locale: &str,
) -> Result<Markup> {
    let categories = catalog.list_categories(locale)?;
    let recent_posts = posts::recent(all_posts, HOME_POSTS_LIMIT);

    let mut sections = Vec::with_capacity(categories.len());
    for category in &categories {
        sections.push(category_section(category, catalog, locale, true)?);
    }

    let content = html! {
        section.hero {
            h1 { (config.title) }
            h2 { (t!("home.h2", locale = locale)) }
            p.hero-description { (t!("home.description", locale = locale)) }
            a.hero-search href=(locale_path(locale, "search/")) {
                (t!("search.placeholder", locale = locale))
            }
        }
        @for section in sections {
            (section)
        }
        (article_list(recent_posts, locale))
    };

    Ok(layout::page(
        &t!("home.meta_title", locale = locale),
        &t!("home.meta_description", locale = locale),
        &config.title,
        locale,
        content,
    ))
}

/// Composes a dedicated category page: the complete tool list, no cap and
/// no more-link.
pub fn category_page(
    config: &SiteConfig,
    category: &Category,
    tools: &[Tool],
    locale: &str,
) -> Markup {
    let title = format!("{} — {}", category.name, config.title);
    let content = html! {
        section.category-page {
            h2 { (category.name) }
            p.category-description { (category.description) }
            (card_grid(tools))
        }
    };
    layout::page(&title, &category.description, &config.title, locale, content)
}

/// Composes one article page: title, publish date and the markdown body
/// rendered to HTML. The landing page's article list links here.
///
/// 组合单篇文章页面：标题、发布日期以及渲染为 HTML 的 markdown 正文。
/// 首页的文章列表链接到这里。
pub fn post_page(config: &SiteConfig, post: &Post, locale: &str) -> Markup {
    let title = format!("{} — {}", post.summary.title, config.title);
    let description = if post.summary.excerpt.is_empty() {
        post.summary.title.clone()
    } else {
        post.summary.excerpt.clone()
    };
    let content = html! {
        article.post {
            h2 { (post.summary.title) }
            p.post-meta {
                time datetime=(post.summary.date.to_string()) {
                    (post.summary.date.to_string())
                }
            }
            div.post-body { (markdown_to_html(&post.body)) }
        }
    };
    layout::page(&title, &description, &config.title, locale, content)
}

/// Renders markdown to HTML with tables and strikethrough enabled. The
/// output is authored content, spliced pre-escaped by the renderer itself.
fn markdown_to_html(markdown: &str) -> Markup {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    pulldown_cmark::html::push_html(&mut out, parser);
    PreEscaped(out)
}

/// Composes the search page. Matching happens client-side over the
/// `search-index.json` written next to the locale root; the embedded script
/// mirrors [`crate::core::search::tool_matches`] and the card contract.
pub fn search_page(config: &SiteConfig, locale: &str) -> Markup {
    let title = format!("{} — {}", t!("search.title", locale = locale), config.title);
    let content = html! {
        section.search-page {
            h2 { (t!("search.title", locale = locale)) }
            input #search-input type="search"
                placeholder=(t!("search.placeholder", locale = locale))
                autofocus;
            p #search-empty .hidden { (t!("search.no_results", locale = locale)) }
            div #search-results .card-grid {}
            script { (PreEscaped(SEARCH_SCRIPT)) }
        }
    };
    layout::page(
        &title,
        &t!("home.meta_description", locale = locale),
        &config.title,
        locale,
        content,
    )
}

/// Renders the article section: a bounded, reverse-chronological list of
/// post summaries linking to their slugs.
pub fn article_list(recent_posts: &[PostSummary], locale: &str) -> Markup {
    html! {
        section.articles {
            h2 { (t!("articles.title", locale = locale)) }
            @if !recent_posts.is_empty() {
                ul.article-list {
                    @for post in recent_posts {
                        li.article-item {
                            a href=(locale_path(locale, &format!("posts/{}/", post.slug))) {
                                (post.title)
                            }
                            time datetime=(post.date.to_string()) { (post.date.to_string()) }
                            @if !post.excerpt.is_empty() {
                                p.article-excerpt { (post.excerpt) }
                            }
                        }
                    }
                }
            }
        }
    }
}
