//! # Check Command Module / 检查命令模块
//!
//! Validates the data tree without writing any output: category files parse,
//! link slugs are unique within each locale, every referenced tool file
//! parses, and every post's front matter parses. Prints a colored summary
//! and fails the process when any violation is found.
//!
//! 校验数据目录而不写任何输出：分类文件可解析、link slug 在同一语言内唯一、
//! 每个引用的工具文件可解析、每篇文章的 front matter 可解析。
//! 打印彩色摘要，发现任何违规时以失败退出。

use anyhow::{Result, bail};
use colored::*;
use rust_i18n::t;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::core::catalog::Catalog;
use crate::core::config::SiteConfig;
use crate::core::posts;

/// Executes the check command. Returns an error (non-zero exit) when the
/// data tree contains authoring errors.
pub async fn execute(config: PathBuf, site_dir: PathBuf, language: &str) -> Result<()> {
    let config = SiteConfig::load(&site_dir.join(config))?;
    let catalog = Catalog::new(site_dir.join(&config.data_dir));

    println!("{}", t!("check_banner", locale = language).cyan());

    let mut violations = 0usize;

    for locale in &config.locales {
        println!("{}", t!("check_locale", locale = language, name = locale).bold());

        let categories = match catalog.list_categories(locale) {
            Ok(categories) => categories,
            Err(e) => {
                println!(
                    "{}",
                    t!("check_error", locale = language, error = format!("{:#}", e)).red()
                );
                violations += 1;
                continue;
            }
        };
        println!(
            "{}",
            t!("check_categories_ok", locale = language, count = categories.len())
        );

        // Link slugs route category pages; a duplicate means one page
        // silently overwrites another.
        let mut seen_slugs = HashSet::new();
        for category in &categories {
            if !seen_slugs.insert(category.link.as_str()) {
                println!(
                    "{}",
                    t!("check_duplicate_slug", locale = language, slug = category.link).red()
                );
                violations += 1;
            }
        }

        for category in &categories {
            let tool_file = catalog
                .data_dir()
                .join(locale)
                .join(format!("{}.toml", category.src));
            if !tool_file.exists() {
                println!(
                    "{}",
                    t!("check_tools_missing", locale = language, src = category.src).yellow()
                );
                continue;
            }
            match catalog.list_tools(&category.src, locale) {
                Ok(tools) => {
                    println!(
                        "{}",
                        t!(
                            "check_tools_ok",
                            locale = language,
                            src = category.src,
                            count = tools.len()
                        )
                    );
                }
                Err(e) => {
                    println!(
                        "{}",
                        t!("check_error", locale = language, error = format!("{:#}", e)).red()
                    );
                    violations += 1;
                }
            }
        }
    }

    // The build skips unparsable posts with a warning; the check is the
    // strict path and counts each one as a violation.
    let scanned = posts::scan(&site_dir.join(&config.posts_dir))?;
    for skip in &scanned.skipped {
        println!(
            "{}",
            t!(
                "check_post_error",
                locale = language,
                file = skip.path.display(),
                error = skip.reason
            )
            .red()
        );
        violations += 1;
    }
    println!(
        "{}",
        t!("check_posts_ok", locale = language, count = scanned.posts.len())
    );

    if violations == 0 {
        println!("\n{}", t!("check_ok", locale = language).green().bold());
        Ok(())
    } else {
        println!("\n{}", t!("check_failed", locale = language).red().bold());
        bail!("data check found {} violation(s)", violations);
    }
}
