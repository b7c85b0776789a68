//! # Core Module / 核心模块
//!
//! This module contains the core functionality of runtoweb3,
//! including data models, site configuration and the read-only catalog.
//!
//! 此模块包含 runtoweb3 的核心功能，
//! 包括数据模型、站点配置和只读目录数据。

pub mod catalog;
pub mod config;
pub mod models;
pub mod posts;
pub mod search;

// Re-exports
pub use catalog::Catalog;
pub use config::SiteConfig;
pub use models::{Category, PostSummary, Tool};
