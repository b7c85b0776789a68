//! # Search Command Module / 搜索命令模块
//!
//! Console search over one locale's catalog, using the same matching
//! semantics as the rendered search page.
//!
//! 对某语言的目录进行控制台搜索，匹配语义与渲染的搜索页面一致。

use anyhow::Result;
use colored::*;
use rust_i18n::t;
use std::path::PathBuf;

use crate::core::catalog::Catalog;
use crate::core::config::SiteConfig;
use crate::core::search;

/// Executes the search command.
///
/// # Arguments
/// * `config` - Path to `Site.toml`, resolved against `site_dir` when relative
/// * `site_dir` - Directory containing the data tree
/// * `content_locale` - Locale whose catalog is searched; defaults to the
///   site's configured language
/// * `query` - Search query
/// * `language` - Locale for console messages
pub async fn execute(
    config: PathBuf,
    site_dir: PathBuf,
    content_locale: Option<String>,
    query: &str,
    language: &str,
) -> Result<()> {
    let config = SiteConfig::load(&site_dir.join(config))?;
    let content_locale = content_locale.unwrap_or_else(|| config.language.clone());
    let catalog = Catalog::new(site_dir.join(&config.data_dir));

    let index = search::build_index(&catalog, &content_locale)?;
    let matched = search::filter(&index, query);

    if matched.is_empty() {
        println!(
            "{}",
            t!("search_no_results", locale = language, query = query).yellow()
        );
        return Ok(());
    }

    println!(
        "{}",
        t!(
            "search_results_for",
            locale = language,
            query = query,
            count = matched.len()
        )
        .cyan()
    );
    for record in matched {
        println!(
            "  - {} ({}) [{}]",
            record.tool.name.green().bold(),
            record.tool.url,
            record.category.dimmed()
        );
        println!("    {}", record.tool.description.dimmed());
    }
    Ok(())
}
