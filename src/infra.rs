//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for runtoweb3,
//! currently the output-tree file system operations.
//!
//! 此模块为 runtoweb3 提供基础设施服务，目前是输出目录的文件系统操作。

pub mod fs;
