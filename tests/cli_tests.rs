//! # CLI Integration Tests / CLI 集成测试
//!
//! End-to-end tests of the `runtoweb3` binary: scaffolding a site, building
//! it, validating the data tree and searching the catalog from the console.
//!
//! `runtoweb3` 二进制的端到端测试：搭建站点、构建、校验数据目录
//! 以及从控制台搜索目录。

mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

/// This test scaffolds a site non-interactively and asserts that the
/// generated skeleton builds into a complete output tree.
///
/// 这个测试以非交互方式搭建站点，并断言生成的骨架能构建出完整的输出目录。
#[test]
fn test_init_then_build() {
    let dir = tempfile::tempdir().unwrap();

    let mut init = Command::cargo_bin("runtoweb3").unwrap();
    init.current_dir(dir.path())
        .arg("init")
        .arg("--non-interactive")
        .arg("--lang")
        .arg("en");
    init.assert()
        .success()
        .stdout(predicate::str::contains("Site skeleton created"));

    let mut build = Command::cargo_bin("runtoweb3").unwrap();
    build
        .current_dir(dir.path())
        .arg("build")
        .arg("--lang")
        .arg("en");
    build
        .assert()
        .success()
        .stdout(predicate::str::contains("Site written to"));

    let home = fs::read_to_string(dir.path().join("dist/en/index.html")).unwrap();
    assert!(home.contains("Etherscan"));
    assert!(home.contains("utm_source=runtoweb3.com"));
    assert!(dir.path().join("dist/site.css").exists());
    assert!(dir.path().join("dist/en/category/explorers/index.html").exists());
    assert!(dir.path().join("dist/en/posts/welcome/index.html").exists());
    assert!(dir.path().join("dist/en/search/index.html").exists());
    assert!(dir.path().join("dist/en/search-index.json").exists());
}

/// This test builds the richer fixture site and checks the rendered card
/// contract and the per-locale output tree.
///
/// 这个测试构建更丰富的测试站点，检查渲染的卡片契约和每个语言的输出目录。
#[test]
fn test_build_fixture_site() {
    let site = common::setup_site();

    let mut build = Command::cargo_bin("runtoweb3").unwrap();
    build
        .current_dir(site.path())
        .arg("build")
        .arg("--lang")
        .arg("en");
    build.assert().success();

    let home = fs::read_to_string(site.path().join("dist/en/index.html")).unwrap();
    assert!(home.contains("Explorer 08"));
    assert!(!home.contains("Explorer 09"));
    assert!(home.contains("href=\"/en/category/explorers/\""));
    assert!(home.contains("Newest post"));

    // Every article link on the landing page resolves to a written page.
    assert!(home.contains("href=\"/en/posts/newest/\""));
    let post = fs::read_to_string(site.path().join("dist/en/posts/newest/index.html")).unwrap();
    assert!(post.contains("Newest post"));
    assert!(site.path().join("dist/zh-CN/posts/newest/index.html").exists());

    let full = fs::read_to_string(
        site.path().join("dist/en/category/explorers/index.html"),
    )
    .unwrap();
    assert!(full.contains("Explorer 10"));

    // The sparse zh-CN locale still renders all of its pages.
    let zh_home = fs::read_to_string(site.path().join("dist/zh-CN/index.html")).unwrap();
    assert!(zh_home.contains("区块链浏览器"));
    assert!(site.path().join("dist/zh-CN/category/wallets/index.html").exists());

    let index = fs::read_to_string(site.path().join("dist/en/search-index.json")).unwrap();
    assert!(index.contains("\"name\":\"MetaMask\""));
}

/// This test asserts that a healthy data tree passes validation.
///
/// 这个测试断言健康的数据目录能通过校验。
#[test]
fn test_check_passes_on_fixture_site() {
    let site = common::setup_site();
    // The fixture ships one deliberately broken post; a healthy tree
    // has none.
    fs::remove_file(site.path().join("posts/broken.md")).unwrap();

    let mut check = Command::cargo_bin("runtoweb3").unwrap();
    check
        .current_dir(site.path())
        .arg("check")
        .arg("--lang")
        .arg("en");
    check
        .assert()
        .success()
        .stdout(predicate::str::contains("DATA CHECK PASSED"));
}

/// This test asserts that a post whose front matter is missing a required
/// field fails validation and is named in the output. The build tolerates
/// such a post with a warning; `check` must not.
///
/// 这个测试断言 front matter 缺少必填字段的文章会导致校验失败并在输出中
/// 被指出。构建对这样的文章只警告；`check` 必须报错。
#[test]
fn test_check_fails_on_broken_post_front_matter() {
    let site = common::setup_site();

    // broken.md ships with the fixture: front matter with a title but no
    // date.
    let mut check = Command::cargo_bin("runtoweb3").unwrap();
    check
        .current_dir(site.path())
        .arg("check")
        .arg("--lang")
        .arg("en");
    check
        .assert()
        .failure()
        .stdout(predicate::str::contains("DATA CHECK FAILED"))
        .stdout(predicate::str::contains("broken.md"));
}

/// This test corrupts a tool file and asserts that validation fails and
/// names the broken file.
///
/// 这个测试破坏一个工具文件，并断言校验失败且指出损坏的文件。
#[test]
fn test_check_fails_on_malformed_tool_file() {
    let site = common::setup_site();
    fs::write(
        site.path().join("data/en/explorers.toml"),
        "[[tools]]\nname = \"broken\n",
    )
    .unwrap();

    let mut check = Command::cargo_bin("runtoweb3").unwrap();
    check
        .current_dir(site.path())
        .arg("check")
        .arg("--lang")
        .arg("en");
    check
        .assert()
        .failure()
        .stdout(predicate::str::contains("DATA CHECK FAILED"))
        .stdout(predicate::str::contains("explorers.toml"));
}

/// This test asserts that duplicate category link slugs fail validation.
///
/// 这个测试断言重复的分类链接 slug 会导致校验失败。
#[test]
fn test_check_fails_on_duplicate_slugs() {
    let site = common::setup_site();
    fs::write(
        site.path().join("data/en/categories.toml"),
        r#"[[categories]]
name = "Explorers"
src = "explorers"
description = "One."
link = "explorers"

[[categories]]
name = "Wallets"
src = "wallets"
description = "Two."
link = "explorers"
"#,
    )
    .unwrap();

    let mut check = Command::cargo_bin("runtoweb3").unwrap();
    check
        .current_dir(site.path())
        .arg("check")
        .arg("--lang")
        .arg("en");
    check
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate category link slug"));
}

/// This test searches the fixture catalog from the console.
///
/// 这个测试从控制台搜索测试目录。
#[test]
fn test_search_finds_tools_by_tag() {
    let site = common::setup_site();

    let mut search = Command::cargo_bin("runtoweb3").unwrap();
    search
        .current_dir(site.path())
        .arg("search")
        .arg("wallet")
        .arg("--lang")
        .arg("en");
    search
        .assert()
        .success()
        .stdout(predicate::str::contains("MetaMask"))
        .stdout(predicate::str::contains("Rabby"));
}

/// This test asserts the no-match message of the search command.
///
/// 这个测试断言搜索命令的无匹配提示。
#[test]
fn test_search_reports_no_matches() {
    let site = common::setup_site();

    let mut search = Command::cargo_bin("runtoweb3").unwrap();
    search
        .current_dir(site.path())
        .arg("search")
        .arg("doesnotexist")
        .arg("--lang")
        .arg("en");
    search
        .assert()
        .success()
        .stdout(predicate::str::contains("No tools matched"));
}
