//! # Commands Module / 命令模块
//!
//! Implementations of the CLI subcommands: site rendering, data validation,
//! console search and skeleton initialization.
//!
//! 此模块实现各 CLI 子命令：站点渲染、数据校验、控制台搜索和骨架初始化。

pub mod build;
pub mod check;
pub mod init;
pub mod search;
