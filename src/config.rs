use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

/// 設定読み込みのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// サーバーが利用する協力者の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollaboratorKind {
    /// 規則ベースのスタブ（ID > 0 を認可、偶数IDの書籍が貸出可能）
    #[default]
    Stub,
    /// 状態を持つインメモリ実装
    Mock,
}

impl FromStr for CollaboratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stub" => Ok(CollaboratorKind::Stub),
            "mock" => Ok(CollaboratorKind::Mock),
            _ => Err(format!("Invalid collaborator kind: {}", s)),
        }
    }
}

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub collaborators: CollaboratorKind,
    /// `mock` 協力者に事前登録する利用者ID
    pub authorized_users: Vec<u64>,
    /// `mock` 協力者に事前登録する書籍ID
    pub available_books: Vec<u64>,
}

impl Config {
    /// 環境変数から設定を読み込む
    ///
    /// - `HOST`（既定値 `0.0.0.0`）
    /// - `PORT`（既定値 `3000`）
    /// - `COLLABORATORS`（`stub` または `mock`、既定値 `stub`）
    /// - `AUTHORIZED_USERS` / `AVAILABLE_BOOKS`（カンマ区切りのID、`mock` 用）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or(&lookup, "HOST", DEFAULT_HOST)?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let collaborators = parse_or(&lookup, "COLLABORATORS", CollaboratorKind::default())?;
        let authorized_users = parse_id_list(&lookup, "AUTHORIZED_USERS")?;
        let available_books = parse_id_list(&lookup, "AVAILABLE_BOOKS")?;

        Ok(Self {
            host,
            port,
            collaborators,
            authorized_users,
            available_books,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

fn parse_id_list<F>(lookup: &F, key: &'static str) -> Result<Vec<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(Vec::new());
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key,
                value: value.clone(),
            })
        })
        .collect()
}
