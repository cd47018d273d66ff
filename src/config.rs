use crate::error::{CatalogError, Result};
use std::net::SocketAddr;

/// 바인드 주소 환경 변수
pub const ADDR_ENV: &str = "MUSECRAFT_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    /// 환경 변수로부터 설정 생성
    pub fn from_env() -> Result<Self> {
        let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        Self::with_addr(&addr)
    }

    pub fn with_addr(addr: &str) -> Result<Self> {
        let addr = addr
            .trim()
            .parse()
            .map_err(|e| CatalogError::Config(format!("{}={:?}: {}", ADDR_ENV, addr, e)))?;
        Ok(Self { addr })
    }
}
