//! # Models Module Unit Tests / Models 模块单元测试
//!
//! This module contains unit tests for the `models.rs` module, covering the
//! `Category`, `Tool` and `PostSummary` structures, their deserialization
//! from TOML, and the card-level helpers (icon fallback, tag cap, outbound
//! link).
//!
//! 此模块包含 `models.rs` 模块的单元测试，覆盖 `Category`、`Tool` 和
//! `PostSummary` 结构体、它们的 TOML 反序列化，以及卡片级辅助函数
//! （图标回退、标签上限、外链）。

use chrono::NaiveDate;
use runtoweb3::core::models::{
    Category, PostSummary, TAG_BADGE_LIMIT, Tool, fallback_icon_url, outbound_url,
};

#[cfg(test)]
mod tool_tests {
    use super::*;

    #[test]
    fn test_tool_deserialization_minimal() {
        let toml_str = r#"
            name = "Foo"
            description = "A tool."
            url = "foo.xyz"
        "#;

        let tool: Tool = toml::from_str(toml_str).unwrap();

        assert_eq!(tool.name, "Foo");
        assert_eq!(tool.description, "A tool.");
        assert_eq!(tool.url, "foo.xyz");
        assert!(tool.icon_url.is_none());
        assert!(tool.tags.is_none());
    }

    #[test]
    fn test_tool_deserialization_full() {
        let toml_str = r#"
            name = "Etherscan"
            description = "Block explorer."
            url = "etherscan.io"
            icon_url = "https://etherscan.io/favicon.ico"
            tags = ["ethereum", "explorer"]
        "#;

        let tool: Tool = toml::from_str(toml_str).unwrap();

        assert_eq!(tool.icon_url.as_deref(), Some("https://etherscan.io/favicon.ico"));
        assert_eq!(
            tool.tags,
            Some(vec!["ethereum".to_string(), "explorer".to_string()])
        );
    }

    #[test]
    fn test_icon_src_prefers_explicit_icon_url() {
        let tool = Tool {
            name: "Rabby".to_string(),
            description: "Wallet.".to_string(),
            url: "rabby.io".to_string(),
            icon_url: Some("https://rabby.io/logo.png".to_string()),
            tags: None,
        };

        assert_eq!(tool.icon_src(), "https://rabby.io/logo.png");
    }

    #[test]
    fn test_icon_src_falls_back_to_favicon_template() {
        let tool = Tool {
            name: "Foo".to_string(),
            description: "A tool.".to_string(),
            url: "foo.xyz".to_string(),
            icon_url: None,
            tags: None,
        };

        assert_eq!(tool.icon_src(), "https://favicon.im/foo.xyz?larger=true");
        assert_eq!(tool.icon_src(), fallback_icon_url("foo.xyz"));
    }

    #[test]
    fn test_badge_tags_caps_at_three_in_original_order() {
        let tool = Tool {
            name: "Foo".to_string(),
            description: "A tool.".to_string(),
            url: "foo.xyz".to_string(),
            icon_url: None,
            tags: Some(vec![
                "defi".to_string(),
                "nft".to_string(),
                "dao".to_string(),
                "l2".to_string(),
            ]),
        };

        let badges = tool.badge_tags();
        assert_eq!(badges.len(), TAG_BADGE_LIMIT);
        assert_eq!(badges, &["defi", "nft", "dao"]);
        // The record itself keeps all four tags.
        assert_eq!(tool.tags.as_ref().unwrap().len(), 4);
    }

    #[test]
    fn test_badge_tags_with_few_or_no_tags() {
        let mut tool = Tool {
            name: "Foo".to_string(),
            description: "A tool.".to_string(),
            url: "foo.xyz".to_string(),
            icon_url: None,
            tags: Some(vec!["defi".to_string()]),
        };
        assert_eq!(tool.badge_tags(), &["defi"]);

        tool.tags = None;
        assert!(tool.badge_tags().is_empty());
    }

    #[test]
    fn test_outbound_url_appends_tracking_parameter() {
        assert_eq!(
            outbound_url("foo.xyz"),
            "foo.xyz?utm_source=runtoweb3.com"
        );
    }
}

#[cfg(test)]
mod category_tests {
    use super::*;

    #[test]
    fn test_category_deserialization() {
        let toml_str = r#"
            name = "Explorers"
            src = "explorers"
            description = "Inspect blocks."
            link = "explorers"
        "#;

        let category: Category = toml::from_str(toml_str).unwrap();

        assert_eq!(category.name, "Explorers");
        assert_eq!(category.src, "explorers");
        assert_eq!(category.description, "Inspect blocks.");
        assert_eq!(category.link, "explorers");
    }

    #[test]
    fn test_category_deserialization_missing_field_fails() {
        let toml_str = r#"
            name = "Explorers"
            src = "explorers"
        "#;

        let result: Result<Category, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_category_with_chinese_content() {
        let toml_str = r#"
            name = "区块链浏览器"
            src = "explorers"
            description = "查询区块和交易。"
            link = "explorers"
        "#;

        let category: Category = toml::from_str(toml_str).unwrap();

        assert_eq!(category.name, "区块链浏览器");
        assert_eq!(category.link, "explorers");
    }
}

#[cfg(test)]
mod post_summary_tests {
    use super::*;

    #[test]
    fn test_post_summary_date_parsing() {
        let toml_str = r#"
            title = "Hello"
            date = "2024-06-01"
            slug = "hello"
            excerpt = "Hi."
        "#;

        let post: PostSummary = toml::from_str(toml_str).unwrap();

        assert_eq!(post.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(post.slug, "hello");
    }

    #[test]
    fn test_post_summary_excerpt_defaults_empty() {
        let toml_str = r#"
            title = "Hello"
            date = "2024-06-01"
            slug = "hello"
        "#;

        let post: PostSummary = toml::from_str(toml_str).unwrap();
        assert_eq!(post.excerpt, "");
    }
}
