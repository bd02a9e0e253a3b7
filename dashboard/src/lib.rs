//! Restaurant Dashboard - 餐厅后台管理
//!
//! # 架构概述
//!
//! 单进程、同步的管理后台，三个标签页各自持有独立的数据：
//!
//! - **菜单** (`catalog`): 菜单与菜品，按名称搜索，新增与编辑
//! - **订单** (`orders`): 只读订单列表，按状态筛选、按编号搜索、按金额排序
//! - **预订** (`reservations`): 预订列表，新增与编辑，按时间排序
//! - **外壳** (`shell`): 标签页、对话框、通知和登录门禁
//!
//! # 模块结构
//!
//! ```text
//! dashboard/src/
//! ├── core/          # 配置
//! ├── auth/          # 登录凭据 (argon2)
//! ├── catalog/       # 菜单与菜品
//! ├── orders/        # 订单列表
//! ├── reservations/  # 预订
//! ├── shell/         # 标签页、命令、通知
//! ├── dialog.rs      # 对话框状态
//! ├── seed.rs        # 演示数据
//! └── utils/         # 日志、校验
//! ```

pub mod auth;
pub mod catalog;
pub mod core;
pub mod dialog;
pub mod orders;
pub mod reservations;
pub mod seed;
pub mod shell;
pub mod utils;

// Re-export 公共类型
pub use auth::{AuthError, Authenticator, CredentialStore, Principal};
pub use catalog::{CatalogCommand, CatalogError, CatalogEvent, DishCatalog, PricePolicy};
pub use crate::core::Config;
pub use dialog::DialogState;
pub use orders::{OrderBook, OrderBookError, OrderQuery, SortDirection, StatusFilter};
pub use reservations::{ReservationBook, ReservationError, ReservationOrder};
pub use shell::{DashboardShell, Notification, NotificationVariant, ShellCommand, ShellView, Tab};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use shared::{ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 日志)
///
/// 返回加载后的配置
pub fn setup_environment() -> Config {
    // .env 不存在时忽略
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(e) = cleanup_old_logs(log_dir, config.log_retention_days) {
            tracing::warn!(error = %e, log_dir, "Failed to cleanup old logs");
        }
    }

    tracing::debug!(dotenv_loaded, environment = %config.environment, "Environment ready");
    config
}
