//! # Layout Module / 布局模块
//!
//! Shared page chrome: document head, metadata, navigation and footer.
//! The stylesheet is embedded in the binary and written once per build.
//!
//! 共享页面框架：文档 head、元数据、导航和页脚。
//! 样式表内嵌在二进制中，每次构建写出一次。

use maud::{DOCTYPE, Markup, html};
use rust_i18n::t;

/// Embedded CSS for the rendered site / 渲染站点的嵌入式 CSS 样式
pub const SITE_STYLE: &str = include_str!("assets/site.css");

/// File name the embedded stylesheet is written under at the output root.
pub const STYLE_FILE: &str = "site.css";

/// Builds a root-relative, locale-qualified path, e.g.
/// `locale_path("en", "category/explorers/")` => `/en/category/explorers/`.
pub fn locale_path(locale: &str, rest: &str) -> String {
    if rest.is_empty() {
        format!("/{}/", locale)
    } else {
        format!("/{}/{}", locale, rest)
    }
}

/// Wraps page content in the shared document chrome.
///
/// 将页面内容包裹在共享的文档框架中。
pub fn page(
    title: &str,
    description: &str,
    site_title: &str,
    locale: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                link rel="stylesheet" href=(format!("/{}", STYLE_FILE));
            }
            body {
                header.site-header {
                    a.brand href=(locale_path(locale, "")) { (site_title) }
                    nav {
                        a href=(locale_path(locale, "search/")) {
                            (t!("search.title", locale = locale))
                        }
                    }
                }
                main.container { (content) }
                footer.site-footer {
                    p { (site_title) }
                }
            }
        }
    }
}
