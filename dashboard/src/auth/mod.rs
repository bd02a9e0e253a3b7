//! 认证模块
//!
//! 登录门禁：
//! - [`Authenticator`] - 凭据校验接口
//! - [`CredentialStore`] - 内存中的 email → argon2 哈希表
//! - [`Principal`] - 已登录身份

mod credential;

pub use credential::{CredentialStore, hash_password};

use serde::{Deserialize, Serialize};
use shared::AppError;
use thiserror::Error;

/// 已登录身份
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub email: String,
}

/// 认证错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Password hash error: {0}")]
    Hash(String),
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::Hash(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::invalid_credentials(),
            AuthError::NotAuthenticated => AppError::not_authenticated(),
            AuthError::Hash(msg) => AppError::internal(msg),
        }
    }
}

/// 凭据校验
pub trait Authenticator {
    fn authenticate(&self, email: &str, password: &str) -> Result<Principal, AuthError>;
}
