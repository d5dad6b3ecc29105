// ==========================================
// Pressia 洗衣店管理系统 - 数据库备份 API
// ==========================================
// 导出: 整库文件复制到用户选择的路径
// 导入: 校验文件头 → 整库替换 → 重新打开连接
// 路径为空表示用户取消了文件对话框
// ==========================================

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::db::{is_sqlite_file, Storage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupReport {
    pub path: String,
    pub bytes: u64,
}

/// 默认备份文件名: pressia-backup-YYYY-MM-DD.sqlite
pub fn default_backup_file_name(today: NaiveDate) -> String {
    format!("pressia-backup-{}.sqlite", today.format("%Y-%m-%d"))
}

pub struct BackupApi {
    storage: Arc<Storage>,
}

impl BackupApi {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// 导出数据库
    ///
    /// # 返回
    /// - Err(ApiError::Cancelled): 未选择路径
    /// - Err(ApiError::BackupError): 目标是当前数据库或复制失败
    pub fn export_database(&self, dest: Option<&Path>) -> ApiResult<BackupReport> {
        let dest = dest.ok_or(ApiError::Cancelled)?;

        let bytes = self
            .storage
            .export_to(dest)
            .map_err(|e| ApiError::BackupError(e.to_string()))?;

        Ok(BackupReport {
            path: dest.display().to_string(),
            bytes,
        })
    }

    /// 导入数据库（整体替换当前数据）
    pub fn import_database(&self, src: Option<&Path>) -> ApiResult<BackupReport> {
        let src = src.ok_or(ApiError::Cancelled)?;

        if !src.is_file() {
            return Err(ApiError::BackupError(format!(
                "fichier introuvable: {}",
                src.display()
            )));
        }
        let valid = is_sqlite_file(src).map_err(|e| ApiError::BackupError(e.to_string()))?;
        if !valid {
            tracing::warn!("拒绝导入非 SQLite 文件: {}", src.display());
            return Err(ApiError::BackupError(format!(
                "{} n'est pas une base Pressia valide",
                src.display()
            )));
        }

        self.storage
            .replace_from(src)
            .map_err(|e| ApiError::BackupError(e.to_string()))?;

        let bytes = std::fs::metadata(self.storage.db_path())
            .map(|m| m.len())
            .unwrap_or_default();

        Ok(BackupReport {
            path: src.display().to_string(),
            bytes,
        })
    }
}
