// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

/// Creates a complete fixture site: Site.toml, an `en` data tree with an
/// "explorers" category holding 10 tools and a "wallets" category holding 3,
/// a sparse `zh-CN` tree, and three posts (plus one with broken front
/// matter).
pub fn setup_site() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let site = temp_dir.path();

    fs::write(
        site.join("Site.toml"),
        r#"title = "runtoweb3"
base_url = "https://runtoweb3.com"
language = "en"
locales = ["en", "zh-CN"]
"#,
    )
    .expect("Failed to write Site.toml");

    let en = site.join("data").join("en");
    fs::create_dir_all(&en).expect("Failed to create data/en");

    fs::write(
        en.join("categories.toml"),
        r#"[[categories]]
name = "Explorers"
src = "explorers"
description = "Inspect blocks and transactions."
link = "explorers"

[[categories]]
name = "Wallets"
src = "wallets"
description = "Store and manage keys."
link = "wallets"
"#,
    )
    .expect("Failed to write categories.toml");

    fs::write(en.join("explorers.toml"), explorers_fixture(10))
        .expect("Failed to write explorers.toml");

    fs::write(
        en.join("wallets.toml"),
        r#"[[tools]]
name = "MetaMask"
description = "Browser extension wallet for EVM chains."
url = "metamask.io"
tags = ["wallet", "evm", "browser", "mobile"]

[[tools]]
name = "Phantom"
description = "Wallet for Solana and EVM."
url = "phantom.app"

[[tools]]
name = "Rabby"
description = "Multi-chain wallet with pre-sign checks."
url = "rabby.io"
icon_url = "https://rabby.io/logo.png"
tags = ["wallet"]
"#,
    )
    .expect("Failed to write wallets.toml");

    // zh-CN ships categories but only one backing tool file; the other
    // category must render (and check) as empty, not fail.
    let zh = site.join("data").join("zh-CN");
    fs::create_dir_all(&zh).expect("Failed to create data/zh-CN");
    fs::write(
        zh.join("categories.toml"),
        r#"[[categories]]
name = "区块链浏览器"
src = "explorers"
description = "查询区块和交易。"
link = "explorers"

[[categories]]
name = "钱包"
src = "wallets"
description = "管理密钥。"
link = "wallets"
"#,
    )
    .expect("Failed to write zh categories.toml");
    fs::write(zh.join("explorers.toml"), explorers_fixture(2))
        .expect("Failed to write zh explorers.toml");

    let posts = site.join("posts");
    fs::create_dir_all(&posts).expect("Failed to create posts dir");
    write_post(&posts, "oldest.md", "Oldest post", "2023-01-15", "First steps.");
    write_post(&posts, "middle.md", "Middle post", "2024-06-01", "Keep going.");
    write_post(&posts, "newest.md", "Newest post", "2025-03-10", "Latest news.");
    fs::write(posts.join("broken.md"), "+++\ntitle = \"no date\"\n+++\nBody.\n")
        .expect("Failed to write broken post");

    temp_dir
}

/// Generates an explorers tool file with `count` tools named
/// "Explorer 01".."Explorer NN" at "explorer01.io".. so ordering is easy to
/// assert.
pub fn explorers_fixture(count: usize) -> String {
    let mut out = String::new();
    for i in 1..=count {
        out.push_str(&format!(
            "[[tools]]\nname = \"Explorer {i:02}\"\ndescription = \"Explorer number {i}.\"\nurl = \"explorer{i:02}.io\"\n\n"
        ));
    }
    out
}

fn write_post(posts_dir: &Path, file: &str, title: &str, date: &str, excerpt: &str) {
    fs::write(
        posts_dir.join(file),
        format!(
            "+++\ntitle = \"{title}\"\ndate = \"{date}\"\nexcerpt = \"{excerpt}\"\n+++\n\nBody text.\n"
        ),
    )
    .expect("Failed to write post");
}
