//! # Post Index Module / 文章索引模块
//!
//! Scans the posts directory for markdown files with `+++` TOML front
//! matter and projects them into [`Post`] records (summary plus markdown
//! body), newest first. A post whose front matter does not parse is
//! reported by [`scan`] and skipped by [`load_summaries`] with a console
//! warning; one broken article never takes the whole build down, but the
//! `check` command counts it as a violation.
//!
//! 扫描文章目录中带 `+++` TOML front matter 的 markdown 文件，
//! 投影为 [`Post`] 记录（摘要加 markdown 正文），按时间从新到旧排列。
//! front matter 解析失败的文章由 [`scan`] 报告，[`load_summaries`]
//! 会跳过并打印警告；一篇坏文章绝不拖垮整个构建，但 `check` 命令会将其计为违规。

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use colored::*;
use rust_i18n::t;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::PostSummary;

/// One fully loaded article: the summary projection plus the markdown body
/// below the front matter fence.
///
/// 一篇完整加载的文章：摘要投影加上 front matter 栅栏之后的 markdown 正文。
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub summary: PostSummary,
    pub body: String,
}

/// A post file that could not be loaded, and why. Surfaced as a warning by
/// [`load_summaries`] and as a violation by the `check` command.
#[derive(Debug)]
pub struct SkippedPost {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of scanning the posts directory: loadable posts sorted newest
/// first, plus every file that failed to parse.
#[derive(Debug, Default)]
pub struct PostScan {
    pub posts: Vec<Post>,
    pub skipped: Vec<SkippedPost>,
}

/// Front matter fields read from a post. Dates are quoted strings in the
/// `%Y-%m-%d` form, e.g. `date = "2024-05-01"`.
#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    date: NaiveDate,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
}

/// Scans every markdown file under `posts_dir`. Posts are sorted by
/// publish date descending (ties broken by slug for a stable order);
/// files whose front matter does not parse land in `skipped` instead of
/// aborting the scan. A missing posts directory resolves to an empty scan.
///
/// 扫描 `posts_dir` 下的所有 markdown 文件。文章按发布日期降序排列
/// （日期相同时按 slug 排序以保证稳定）；front matter 解析失败的文件
/// 进入 `skipped` 而不是中止扫描。目录不存在时返回空结果。
pub fn scan(posts_dir: &Path) -> Result<PostScan> {
    let entries = match fs::read_dir(posts_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(PostScan::default()),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read posts dir: {}", posts_dir.display()));
        }
    };

    let mut result = PostScan::default();
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }
        match read_post(&path) {
            Ok(post) => result.posts.push(post),
            Err(e) => result.skipped.push(SkippedPost {
                path,
                reason: format!("{:#}", e),
            }),
        }
    }

    result
        .posts
        .sort_by(|a, b| {
            b.summary
                .date
                .cmp(&a.summary.date)
                .then_with(|| a.summary.slug.cmp(&b.summary.slug))
        });
    Ok(result)
}

/// Loads every readable post summary under `posts_dir`, newest first.
/// Unreadable posts are skipped with a console warning; an authoring
/// mistake in one file is not a build failure.
///
/// 加载 `posts_dir` 下所有可读的文章摘要，按时间从新到旧排列。
/// 不可读的文章会跳过并打印警告；一个文件的编写错误不是构建失败。
pub fn load_summaries(posts_dir: &Path) -> Result<Vec<PostSummary>> {
    let scanned = scan(posts_dir)?;
    warn_skipped(&scanned.skipped);
    Ok(scanned.posts.into_iter().map(|post| post.summary).collect())
}

/// Prints one warning line per unloadable post.
pub fn warn_skipped(skipped: &[SkippedPost]) {
    for skip in skipped {
        eprintln!(
            "{}",
            t!("post_skipped", file = skip.path.display(), error = skip.reason).yellow()
        );
    }
}

/// Returns the newest `n` summaries; used by the landing page.
pub fn recent(summaries: &[PostSummary], n: usize) -> &[PostSummary] {
    &summaries[..summaries.len().min(n)]
}

/// Parses one post file. The slug defaults to the file stem when the front
/// matter does not set one; the body is everything below the closing fence.
fn read_post(path: &Path) -> Result<Post> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read post: {}", path.display()))?;
    let (front, body) = split_front_matter(&content)
        .ok_or_else(|| anyhow!("missing +++ front matter block"))?;
    let front: FrontMatter = toml::from_str(front).context("invalid front matter")?;

    let slug = front.slug.unwrap_or_else(|| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string()
    });

    Ok(Post {
        summary: PostSummary {
            title: front.title,
            date: front.date,
            slug,
            excerpt: front.excerpt.unwrap_or_default(),
        },
        body: body.trim().to_string(),
    })
}

/// Splits content into the TOML text between the leading `+++` fence pair
/// and the markdown body after it, if the fences are present.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("+++")?;
    let end = rest.find("\n+++")?;
    let body = rest[end + 4..].strip_prefix('\n').unwrap_or(&rest[end + 4..]);
    Some((&rest[..end], body))
}
