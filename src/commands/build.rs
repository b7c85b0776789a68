//! # Build Command Module / 构建命令模块
//!
//! Orchestrates a full site render: for every configured locale it composes
//! the landing page, one page per category, one page per article, the search
//! page and the search index, then writes the shared stylesheet and copies
//! static assets.
//!
//! 编排一次完整的站点渲染：为每个配置的语言组合首页、每个分类一个页面、
//! 每篇文章一个页面、搜索页面和搜索索引，然后写出共享样式表并复制静态资源。

use anyhow::Result;
use colored::*;
use rust_i18n::t;
use std::path::PathBuf;

use crate::core::catalog::Catalog;
use crate::core::config::SiteConfig;
use crate::core::{posts, search};
use crate::infra::fs as out_fs;
use crate::render::layout::{SITE_STYLE, STYLE_FILE};
use crate::render::pages;

/// Executes the build command.
///
/// # Arguments
/// * `config` - Path to `Site.toml`, resolved against `site_dir` when relative
/// * `site_dir` - Directory containing the config, data tree and posts
/// * `out_override` - Optional output directory overriding the config
/// * `language` - Locale for console messages
pub async fn execute(
    config: PathBuf,
    site_dir: PathBuf,
    out_override: Option<PathBuf>,
    language: &str,
) -> Result<()> {
    let config = SiteConfig::load(&site_dir.join(config))?;
    if config.locales.is_empty() {
        println!("{}", t!("build_no_locales", locale = language).yellow());
        return Ok(());
    }

    println!(
        "{}",
        t!(
            "build_start",
            locale = language,
            title = config.title,
            locales = config.locales.len()
        )
        .cyan()
    );

    let catalog = Catalog::new(site_dir.join(&config.data_dir));
    // Posts are shared across locales; the scan runs once.
    let scanned = posts::scan(&site_dir.join(&config.posts_dir))?;
    posts::warn_skipped(&scanned.skipped);
    let all_posts: Vec<_> = scanned
        .posts
        .iter()
        .map(|post| post.summary.clone())
        .collect();
    let out_root = out_override.unwrap_or_else(|| site_dir.join(&config.out_dir));

    out_fs::reset_dir(&out_root)?;
    out_fs::write_file(&out_root, STYLE_FILE, SITE_STYLE)?;

    for locale in &config.locales {
        let mut pages_written = 0usize;

        let home = pages::home(&config, &catalog, &all_posts, locale)?;
        out_fs::write_file(
            &out_root,
            &format!("{}/index.html", locale),
            &home.into_string(),
        )?;
        pages_written += 1;

        for category in catalog.list_categories(locale)? {
            let tools = catalog.list_tools(&category.src, locale)?;
            let page = pages::category_page(&config, &category, &tools, locale);
            out_fs::write_file(
                &out_root,
                &format!("{}/category/{}/index.html", locale, category.link),
                &page.into_string(),
            )?;
            pages_written += 1;
        }

        // Every article link on the landing page must resolve to a page.
        for post in &scanned.posts {
            let page = pages::post_page(&config, post, locale);
            out_fs::write_file(
                &out_root,
                &format!("{}/posts/{}/index.html", locale, post.summary.slug),
                &page.into_string(),
            )?;
            pages_written += 1;
        }

        let search_page = pages::search_page(&config, locale);
        out_fs::write_file(
            &out_root,
            &format!("{}/search/index.html", locale),
            &search_page.into_string(),
        )?;
        pages_written += 1;

        let index = search::build_index(&catalog, locale)?;
        out_fs::write_file(
            &out_root,
            &format!("{}/search-index.json", locale),
            &serde_json::to_string(&index)?,
        )?;

        println!(
            "{}",
            t!(
                "build_locale_done",
                locale = language,
                name = locale,
                pages = pages_written
            )
        );
    }

    // Site-level files the generator does not produce itself.
    let static_dir = site_dir.join("static");
    if out_fs::is_directory(&static_dir) {
        out_fs::copy_dir_all(&static_dir, &out_root)?;
    }

    println!(
        "{}",
        t!("build_done", locale = language, out = out_root.display())
            .green()
            .bold()
    );
    Ok(())
}
