/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_ENV)
 * - 設定値のバリデーション (不正なら起動失敗)
 *
 * Notes
 * - このデモに設定可能なポリシーは無い。ロール・パスパターンはコード側で固定。
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = parse_port(std::env::var("PORT").ok())?;

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        Ok(Self { addr, app_env })
    }
}

/// 未指定なら 3000、指定があって u16 として読めなければ起動失敗
fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        Some(s) => s.parse().map_err(|_| ConfigError::Invalid("PORT")),
        None => Ok(3000),
    }
}
