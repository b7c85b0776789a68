use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the entire site configuration, loaded from `Site.toml`.
/// It contains the site identity, the locales to render and the directory
/// layout of the data tree.
///
/// 代表从 `Site.toml` 加载的整个站点配置。
/// 它包含站点标识、要渲染的语言列表和数据目录布局。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Site title, used in page chrome and metadata.
    /// 站点标题，用于页面框架和元数据。
    #[serde(default = "default_title")]
    pub title: String,

    /// Base URL the site will be served from (informational; links in the
    /// rendered pages are root-relative).
    /// 站点部署的基础 URL（仅供参考；渲染页面中的链接为根相对路径）。
    #[serde(default)]
    pub base_url: String,

    /// The default language, also used for the runner's console messages
    /// when no `--lang` is given (e.g. "en", "zh-CN").
    ///
    /// 默认语言，未指定 `--lang` 时也用于控制台消息（例如 "en", "zh-CN"）。
    #[serde(default = "default_language")]
    pub language: String,

    /// Every locale to render. Each gets its own output subtree.
    /// 要渲染的所有语言。每个语言有自己的输出子目录。
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,

    /// Directory holding `<locale>/categories.toml` and the per-category
    /// tool files, relative to the site directory.
    /// 存放 `<locale>/categories.toml` 和各分类工具文件的目录（相对于站点目录）。
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding markdown posts, relative to the site directory.
    /// 存放 markdown 文章的目录（相对于站点目录）。
    #[serde(default = "default_posts_dir")]
    pub posts_dir: PathBuf,

    /// Directory the rendered site is written to, relative to the site
    /// directory. Overridable with `--out`.
    /// 渲染站点的写入目录（相对于站点目录）。可用 `--out` 覆盖。
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_title() -> String {
    "runtoweb3".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_locales() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_posts_dir() -> PathBuf {
    PathBuf::from("posts")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: String::new(),
            language: default_language(),
            locales: default_locales(),
            data_dir: default_data_dir(),
            posts_dir: default_posts_dir(),
            out_dir: default_out_dir(),
        }
    }
}

impl SiteConfig {
    /// Loads the configuration from a TOML file. A missing or malformed
    /// config is an error: unlike catalog data there is no sensible empty
    /// fallback for the site identity.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse site config: {}", path.display()))
    }
}
