//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for writing the rendered output tree,
//! such as resetting the output directory and copying static assets.
//!
//! 此模块提供写入渲染输出目录的实用功能，
//! 如重置输出目录和复制静态资源。

use anyhow::{Context, Result};
use fs_extra::dir::{CopyOptions, copy};
use std::fs;
use std::path::Path;

/// Removes any previous output at `path` and recreates it empty, ensuring a
/// fresh render that carries no stale pages from deleted categories.
///
/// # Arguments
/// * `path` - The output directory to reset
pub fn reset_dir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path).with_context(|| {
            format!("Failed to clean up old output directory: {}", path.display())
        })?;
    }
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create output directory: {}", path.display()))?;
    Ok(())
}

/// Writes one file under the output root, creating parent directories as
/// needed. `relative` uses forward slashes, e.g. `en/category/explorers/index.html`.
///
/// # Arguments
/// * `out_root` - Root of the output tree
/// * `relative` - Path of the file relative to the root
/// * `content` - File content
pub fn write_file(out_root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = out_root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&path, content)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(())
}

/// Copies the entire content of a static asset directory into the output
/// root. Used for site-level files the generator does not produce itself.
///
/// # Arguments
/// * `from` - Source directory path
/// * `to` - Destination directory path
pub fn copy_dir_all(from: &Path, to: &Path) -> Result<()> {
    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;
    copy(from, to, &options)
        .with_context(|| format!("Failed to copy static assets from {}", from.display()))?;
    Ok(())
}

/// Checks if a path exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
