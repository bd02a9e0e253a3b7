//! 核心模块 - 配置
//!
//! - [`Config`] - 仪表盘配置

pub mod config;

pub use config::Config;
