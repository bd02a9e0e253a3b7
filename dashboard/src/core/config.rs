use crate::catalog::PricePolicy;

/// 默认日志保留天数
pub const DEFAULT_LOG_RETENTION_DAYS: u64 = 7;

/// 仪表盘配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖（启动时先加载 `.env`）：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | 以 JSON 格式输出日志 |
/// | LOG_DIR | (未设置) | 按天滚动的日志文件目录 |
/// | LOG_RETENTION_DAYS | 7 | 日志文件保留天数 |
/// | ENVIRONMENT | development | 运行环境 |
/// | ALLOW_ZERO_PRICE | false | 是否允许价格为 0 的菜品 |
/// | SEED_DEMO_DATA | true | 启动时加载演示菜单和订单 |
/// | ADMIN_EMAIL | (未设置) | 管理员登录邮箱 |
/// | ADMIN_PASSWORD_HASH | (未设置) | 管理员密码的 argon2 PHC 哈希 |
///
/// # 示例
///
/// ```ignore
/// ADMIN_EMAIL=admin@example.com ADMIN_PASSWORD_HASH='$argon2id$...' cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
    /// JSON 日志
    pub log_json: bool,
    /// 日志文件目录，未设置时输出到 stderr
    pub log_dir: Option<String>,
    /// 启动时删除超过该天数的日志文件
    pub log_retention_days: u64,
    /// 运行环境: development | production
    pub environment: String,
    /// 价格为 0 的菜品是否视为已填写
    pub allow_zero_price: bool,
    /// 是否加载演示数据
    pub seed_demo_data: bool,
    /// 管理员邮箱
    pub admin_email: Option<String>,
    /// 管理员密码哈希 (argon2 PHC 字符串)
    pub admin_password_hash: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_flag("LOG_JSON", false),
            log_dir: non_empty_var("LOG_DIR"),
            log_retention_days: std::env::var("LOG_RETENTION_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LOG_RETENTION_DAYS),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            allow_zero_price: env_flag("ALLOW_ZERO_PRICE", false),
            seed_demo_data: env_flag("SEED_DEMO_DATA", true),
            admin_email: non_empty_var("ADMIN_EMAIL"),
            admin_password_hash: non_empty_var("ADMIN_PASSWORD_HASH"),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景，不读取环境变量
    pub fn with_overrides(seed_demo_data: bool, allow_zero_price: bool) -> Self {
        Self {
            seed_demo_data,
            allow_zero_price,
            ..Self::defaults()
        }
    }

    fn defaults() -> Self {
        Self {
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            log_retention_days: DEFAULT_LOG_RETENTION_DAYS,
            environment: "development".into(),
            allow_zero_price: false,
            seed_demo_data: true,
            admin_email: None,
            admin_password_hash: None,
        }
    }

    /// 菜品价格校验策略
    pub fn price_policy(&self) -> PricePolicy {
        if self.allow_zero_price {
            PricePolicy::AllowZero
        } else {
            PricePolicy::RejectZero
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides_ignores_env() {
        let config = Config::with_overrides(false, true);
        assert!(!config.seed_demo_data);
        assert!(config.allow_zero_price);
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_retention_days, DEFAULT_LOG_RETENTION_DAYS);
        assert_eq!(config.admin_email, None);
    }

    #[test]
    fn test_price_policy() {
        assert_eq!(
            Config::with_overrides(true, false).price_policy(),
            PricePolicy::RejectZero
        );
        assert_eq!(
            Config::with_overrides(true, true).price_policy(),
            PricePolicy::AllowZero
        );
    }
}
