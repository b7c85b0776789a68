//! # Catalog Module / 目录数据模块
//!
//! The read-only data store accessor behind every rendered grid. It resolves
//! `(locale, category)` pairs to ordered tool lists and `locale` to the
//! ordered category list, straight from TOML files under the data root.
//!
//! 每个渲染网格背后的只读数据访问层。它将 `(语言, 分类)` 解析为有序工具列表，
//! 将 `语言` 解析为有序分类列表，数据直接来自数据根目录下的 TOML 文件。
//!
//! Missing files are a normal multi-locale situation and resolve to empty
//! lists; malformed files are authoring errors and fail with context.
//! 缺失的文件是多语言站点的正常情况，解析为空列表；
//! 格式错误的文件是编写错误，会带上下文信息报错。

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::{Category, Tool};

/// On-disk shape of `data/<locale>/categories.toml`.
#[derive(Debug, Default, Deserialize)]
struct CategoryFile {
    #[serde(default)]
    categories: Vec<Category>,
}

/// On-disk shape of `data/<locale>/<src>.toml`.
#[derive(Debug, Default, Deserialize)]
struct ToolFile {
    #[serde(default)]
    tools: Vec<Tool>,
}

/// Read-only accessor over the static data tree. All reads are pure
/// projections of the files on disk: no caching, no mutation, and two calls
/// with identical arguments return equal sequences.
///
/// 静态数据树上的只读访问器。所有读取都是磁盘文件的纯投影：
/// 无缓存、无修改，相同参数的两次调用返回相等的序列。
#[derive(Debug, Clone)]
pub struct Catalog {
    data_dir: PathBuf,
}

impl Catalog {
    /// Creates a catalog rooted at the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory holding one subdirectory per locale.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the ordered category list for a locale, as authored in
    /// `categories.toml`. A locale without backing data yields an empty
    /// list, never an error.
    ///
    /// 返回某语言的有序分类列表（按 `categories.toml` 中的编写顺序）。
    /// 没有数据的语言返回空列表，而不是错误。
    pub fn list_categories(&self, locale: &str) -> Result<Vec<Category>> {
        let path = self.data_dir.join(locale).join("categories.toml");
        let Some(content) = read_optional(&path)? else {
            return Ok(Vec::new());
        };
        let file: CategoryFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse category file: {}", path.display()))?;
        Ok(file.categories)
    }

    /// Returns the ordered tool list for a category in a locale. Ordering is
    /// stable and meaningful: it controls display order and which tools land
    /// in the truncated landing-page grid. A missing category file yields an
    /// empty list.
    ///
    /// 返回某语言下某分类的有序工具列表。顺序稳定且有意义：
    /// 它决定显示顺序以及哪些工具进入首页截断网格。缺失的分类文件返回空列表。
    pub fn list_tools(&self, category_src: &str, locale: &str) -> Result<Vec<Tool>> {
        let path = self
            .data_dir
            .join(locale)
            .join(format!("{}.toml", category_src));
        let Some(content) = read_optional(&path)? else {
            return Ok(Vec::new());
        };
        let file: ToolFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse tool file: {}", path.display()))?;
        Ok(file.tools)
    }
}

/// Reads a file that is allowed to be absent. `Ok(None)` means "no data",
/// any other I/O failure is propagated with context.
fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read data file: {}", path.display()))
        }
    }
}
