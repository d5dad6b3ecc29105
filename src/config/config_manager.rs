// ==========================================
// Pressia 洗衣店管理系统 - 配置管理器
// ==========================================
// 职责: 运行期配置的读取、写入、快照
// 存储: settings 表 (key / value / updated_at)
// ==========================================

use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::row_codec::now_timestamp;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 订单
    pub const STRICT_STATUS_TRANSITIONS: &str = "orders.strict_status_transitions";
    pub const DEFAULT_PICKUP_DAYS: &str = "orders.default_pickup_days";

    // 追踪
    pub const URGENT_WINDOW_DAYS: &str = "tracking.urgent_window_days";

    // 店铺
    pub const BUSINESS_NAME: &str = "business.name";

    pub const ALL: [&str; 4] = [
        STRICT_STATUS_TRANSITIONS,
        DEFAULT_PICKUP_DAYS,
        URGENT_WINDOW_DAYS,
        BUSINESS_NAME,
    ];
}

pub const DEFAULT_PICKUP_DAYS: i64 = 3;
pub const DEFAULT_URGENT_WINDOW_DAYS: i64 = 3;
pub const DEFAULT_BUSINESS_NAME: &str = "Pressia";

// ==========================================
// AppConfig - 类型化配置快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub strict_status_transitions: bool,
    pub default_pickup_days: i64,
    pub urgent_window_days: i64,
    pub business_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            strict_status_transitions: false,
            default_pickup_days: DEFAULT_PICKUP_DAYS,
            urgent_window_days: DEFAULT_URGENT_WINDOW_DAYS,
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 从已有连接创建 ConfigManager
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 读取原始配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_value(&self, key: &str) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 写入配置值（UPSERT）
    pub fn set_value(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, now_timestamp()],
        )?;
        Ok(())
    }

    /// 全部已存储的配置（按键排序）
    pub fn get_all_values(&self) -> RepositoryResult<BTreeMap<String, String>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT key, value FROM settings ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut map = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            map.insert(key, value);
        }
        Ok(map)
    }

    fn get_parsed_or<T: std::str::FromStr>(&self, key: &str, default: T) -> RepositoryResult<T> {
        let Some(raw) = self.get_value(key)? else {
            return Ok(default);
        };
        match raw.trim().parse::<T>() {
            Ok(v) => Ok(v),
            Err(_) => {
                tracing::warn!(config_key = key, raw_value = %raw, "配置值格式错误，使用默认值");
                Ok(default)
            }
        }
    }

    // ===== 订单配置 =====

    pub fn strict_status_transitions(&self) -> RepositoryResult<bool> {
        self.get_parsed_or(config_keys::STRICT_STATUS_TRANSITIONS, false)
    }

    pub fn default_pickup_days(&self) -> RepositoryResult<i64> {
        let days = self.get_parsed_or(config_keys::DEFAULT_PICKUP_DAYS, DEFAULT_PICKUP_DAYS)?;
        Ok(days.max(0))
    }

    // ===== 追踪配置 =====

    pub fn urgent_window_days(&self) -> RepositoryResult<i64> {
        let days =
            self.get_parsed_or(config_keys::URGENT_WINDOW_DAYS, DEFAULT_URGENT_WINDOW_DAYS)?;
        Ok(days.max(1))
    }

    // ===== 店铺配置 =====

    pub fn business_name(&self) -> RepositoryResult<String> {
        Ok(self
            .get_value(config_keys::BUSINESS_NAME)?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BUSINESS_NAME.to_string()))
    }

    /// 类型化快照
    pub fn snapshot(&self) -> RepositoryResult<AppConfig> {
        Ok(AppConfig {
            strict_status_transitions: self.strict_status_transitions()?,
            default_pickup_days: self.default_pickup_days()?,
            urgent_window_days: self.urgent_window_days()?,
            business_name: self.business_name()?,
        })
    }
}
