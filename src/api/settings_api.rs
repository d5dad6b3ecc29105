// ==========================================
// Pressia 洗衣店管理系统 - 配置管理 API
// ==========================================
// 职责: 配置查询、更新
// 只接受已知配置键，写入前按类型校验
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::config::{config_keys, AppConfig, ConfigManager};

pub struct SettingsApi {
    config_manager: Arc<ConfigManager>,
}

impl SettingsApi {
    pub fn new(config_manager: Arc<ConfigManager>) -> Self {
        Self { config_manager }
    }

    /// 类型化配置快照（未设置的项取默认值）
    pub fn get_settings(&self) -> ApiResult<AppConfig> {
        Ok(self.config_manager.snapshot()?)
    }

    /// 读取单个配置的原始值
    pub fn get_setting(&self, key: &str) -> ApiResult<Option<String>> {
        let key = known_key(key)?;
        Ok(self.config_manager.get_value(key)?)
    }

    /// 写入单个配置
    pub fn set_setting(&self, key: &str, value: &str) -> ApiResult<AppConfig> {
        let key = known_key(key)?;
        let value = normalize_value(key, value)?;
        self.config_manager.set_value(key, &value)?;
        tracing::info!(config_key = key, value = %value, "配置已更新");
        self.get_settings()
    }
}

fn known_key(key: &str) -> ApiResult<&'static str> {
    let key = key.trim();
    config_keys::ALL
        .iter()
        .copied()
        .find(|k| *k == key)
        .ok_or_else(|| ApiError::InvalidInput(format!("paramètre inconnu: {}", key)))
}

fn normalize_value(key: &str, value: &str) -> ApiResult<String> {
    let value = value.trim();
    match key {
        config_keys::STRICT_STATUS_TRANSITIONS => value
            .parse::<bool>()
            .map(|b| b.to_string())
            .map_err(|_| ApiError::InvalidInput(format!("{} attend true ou false", key))),
        config_keys::DEFAULT_PICKUP_DAYS => match value.parse::<i64>() {
            Ok(days) if (0..=365).contains(&days) => Ok(days.to_string()),
            _ => Err(ApiError::InvalidInput(format!(
                "{} attend un nombre de jours entre 0 et 365",
                key
            ))),
        },
        config_keys::URGENT_WINDOW_DAYS => match value.parse::<i64>() {
            Ok(days) if (1..=30).contains(&days) => Ok(days.to_string()),
            _ => Err(ApiError::InvalidInput(format!(
                "{} attend un nombre de jours entre 1 et 30",
                key
            ))),
        },
        _ => {
            if value.is_empty() {
                return Err(ApiError::InvalidInput(format!("{} ne peut pas être vide", key)));
            }
            Ok(value.to_string())
        }
    }
}
