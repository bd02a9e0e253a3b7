//! 内存凭据表
//!
//! 只保存 argon2 PHC 哈希，不保存明文密码。

use super::{AuthError, Authenticator, Principal};
use crate::core::Config;
use std::collections::HashMap;

/// Hash password using argon2
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

/// Verify password against a PHC string
fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHash, PasswordVerifier},
    };

    let parsed_hash = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// email (小写) → argon2 哈希
///
/// 空表拒绝所有登录。
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    hashes: HashMap<String, String>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用 `ADMIN_EMAIL` / `ADMIN_PASSWORD_HASH` 构建
    ///
    /// 任一缺失或哈希格式错误时返回空表（记录警告）
    pub fn from_config(config: &Config) -> Self {
        let mut store = Self::new();
        match (&config.admin_email, &config.admin_password_hash) {
            (Some(email), Some(hash)) => {
                if let Err(e) = store.insert_hash(email, hash) {
                    tracing::warn!(error = %e, "ADMIN_PASSWORD_HASH rejected, login disabled");
                }
            }
            _ => {
                tracing::warn!("ADMIN_EMAIL or ADMIN_PASSWORD_HASH not set, login disabled");
            }
        }
        store
    }

    /// 添加已哈希的凭据，哈希必须是合法的 PHC 字符串
    pub fn insert_hash(&mut self, email: &str, hash: &str) -> Result<(), AuthError> {
        argon2::password_hash::PasswordHash::new(hash)?;
        self.hashes.insert(normalize(email), hash.to_string());
        Ok(())
    }

    /// 哈希明文密码后添加
    pub fn with_password(mut self, email: &str, password: &str) -> Result<Self, AuthError> {
        let hash = hash_password(password)?;
        self.hashes.insert(normalize(email), hash);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

impl Authenticator for CredentialStore {
    fn authenticate(&self, email: &str, password: &str) -> Result<Principal, AuthError> {
        let key = normalize(email);
        let Some(hash) = self.hashes.get(&key) else {
            return Err(AuthError::InvalidCredentials);
        };

        if verify_password(password, hash)? {
            Ok(Principal { email: key })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
