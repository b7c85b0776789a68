//! # Site Initialization Module / 站点初始化模块
//!
//! This module provides functionality for initializing a new directory site
//! through an interactive command-line wizard. It helps users create a
//! `Site.toml` plus a sample data tree and post they can build immediately.
//!
//! 此模块通过交互式命令行向导提供初始化新目录站点的功能。
//! 它帮助用户创建 `Site.toml` 以及可以立即构建的示例数据目录和文章。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Step-by-step guidance for the site identity
//! - **Sample Data**: A ready-made category, tool list and post
//! - **Overwrite Protection**: Confirmation prompts before overwriting an
//!   existing configuration
//!
//! - **交互式向导**: 站点标识的逐步指导
//! - **示例数据**: 现成的分类、工具列表和文章
//! - **覆盖保护**: 覆盖现有配置前的确认提示

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use rust_i18n::t;
use std::fs;
use std::path::Path;

use crate::core::config::SiteConfig;

/// Sample category list written for the first configured locale.
const SAMPLE_CATEGORIES: &str = r#"[[categories]]
name = "Explorers"
src = "explorers"
description = "Inspect blocks, transactions and contracts across chains."
link = "explorers"

[[categories]]
name = "RPC Providers"
src = "rpc-providers"
description = "Hosted node endpoints for reading and writing chain state."
link = "rpc-providers"
"#;

/// Sample tool list for the "explorers" category.
const SAMPLE_EXPLORERS: &str = r#"[[tools]]
name = "Etherscan"
description = "The leading Ethereum block explorer with verified contract source and rich APIs."
url = "etherscan.io"
tags = ["ethereum", "explorer", "api"]

[[tools]]
name = "Solscan"
description = "Block explorer for the Solana network."
url = "solscan.io"
tags = ["solana", "explorer"]
"#;

/// Sample tool list for the "rpc-providers" category.
const SAMPLE_RPC_PROVIDERS: &str = r#"[[tools]]
name = "Alchemy"
description = "Managed node infrastructure and enhanced APIs for EVM chains."
url = "alchemy.com"
tags = ["rpc", "infrastructure", "evm"]
"#;

/// Sample post with TOML front matter.
const SAMPLE_POST: &str = r#"+++
title = "Welcome to your new directory"
date = "2025-01-01"
slug = "welcome"
excerpt = "Edit data/<locale>/categories.toml to start curating tools."
+++

Replace this post with your own articles.
"#;

/// Runs the interactive wizard to scaffold a new site in the current
/// directory.
///
/// 运行交互式向导，在当前目录创建一个新站点。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let config_path = Path::new("Site.toml");
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!(
            "\n{}",
            t!("init_wizard_welcome", locale = language).cyan().bold()
        );
        println!("{}", t!("init_wizard_description", locale = language));
    }

    if config_path.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(
                t!(
                    "init_overwrite_prompt",
                    locale = language,
                    path = config_path.display()
                )
                .to_string(),
            )
            .default(false)
            .interact()
            .context(t!("init_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    let config = if non_interactive {
        SiteConfig::default()
    } else {
        let title: String = Input::with_theme(&theme)
            .with_prompt(t!("init_title_prompt", locale = language).to_string())
            .default("runtoweb3".to_string())
            .interact_text()
            .context(t!("init_confirmation_failed", locale = language).to_string())?;
        let base_url: String = Input::with_theme(&theme)
            .with_prompt(t!("init_base_url_prompt", locale = language).to_string())
            .default("https://runtoweb3.com".to_string())
            .interact_text()
            .context(t!("init_confirmation_failed", locale = language).to_string())?;
        let locales_input: String = Input::with_theme(&theme)
            .with_prompt(t!("init_locales_prompt", locale = language).to_string())
            .default("en".to_string())
            .interact_text()
            .context(t!("init_confirmation_failed", locale = language).to_string())?;
        let locales: Vec<String> = locales_input
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        SiteConfig {
            title,
            base_url,
            language: locales.first().cloned().unwrap_or_else(|| "en".to_string()),
            locales,
            ..SiteConfig::default()
        }
    };

    write_skeleton(Path::new("."), &config)?;

    println!("{}", t!("init_done", locale = language).green().bold());
    Ok(())
}

/// Writes `Site.toml` and the sample data tree for the first configured
/// locale. Existing sample files are overwritten; the wizard has already
/// confirmed that.
fn write_skeleton(site_dir: &Path, config: &SiteConfig) -> Result<()> {
    let config_toml =
        toml::to_string_pretty(config).context("Failed to serialize site config")?;
    fs::write(site_dir.join("Site.toml"), config_toml).context("Failed to write Site.toml")?;

    let sample_locale = config
        .locales
        .first()
        .map(String::as_str)
        .unwrap_or("en");
    let locale_dir = site_dir.join(&config.data_dir).join(sample_locale);
    fs::create_dir_all(&locale_dir)
        .with_context(|| format!("Failed to create data directory: {}", locale_dir.display()))?;

    fs::write(locale_dir.join("categories.toml"), SAMPLE_CATEGORIES)
        .context("Failed to write sample categories")?;
    fs::write(locale_dir.join("explorers.toml"), SAMPLE_EXPLORERS)
        .context("Failed to write sample tools")?;
    fs::write(locale_dir.join("rpc-providers.toml"), SAMPLE_RPC_PROVIDERS)
        .context("Failed to write sample tools")?;

    let posts_dir = site_dir.join(&config.posts_dir);
    fs::create_dir_all(&posts_dir)
        .with_context(|| format!("Failed to create posts directory: {}", posts_dir.display()))?;
    fs::write(posts_dir.join("welcome.md"), SAMPLE_POST).context("Failed to write sample post")?;

    Ok(())
}
