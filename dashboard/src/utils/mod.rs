//! 工具模块 - 日志与输入校验
//!
//! - [`logger`] - tracing 初始化与日志清理
//! - [`validation`] - 表单字段校验

pub mod logger;
pub mod validation;

pub use shared::{AppError, AppResult};
pub use validation::FieldError;
