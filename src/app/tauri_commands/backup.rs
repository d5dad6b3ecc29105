use crate::api::{default_backup_file_name, ApiResponse, BackupReport};
use crate::app::state::AppState;
use chrono::Local;
use std::path::PathBuf;

use super::common::{pick_open_path, pick_save_path, respond};

// ==========================================
// 数据库备份相关命令
// ==========================================
// 未传路径时弹出系统文件对话框，用户取消返回 "cancelled"

#[tauri::command(rename_all = "snake_case")]
pub async fn export_database(
    state: tauri::State<'_, AppState>,
    path: Option<String>,
) -> Result<ApiResponse<BackupReport>, String> {
    let dest = match path.filter(|p| !p.trim().is_empty()) {
        Some(p) => Some(PathBuf::from(p)),
        None => pick_save_path(&default_backup_file_name(Local::now().date_naive())),
    };
    Ok(respond(state.backup_api.export_database(dest.as_deref())))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn import_database(
    state: tauri::State<'_, AppState>,
    path: Option<String>,
) -> Result<ApiResponse<BackupReport>, String> {
    let src = match path.filter(|p| !p.trim().is_empty()) {
        Some(p) => Some(PathBuf::from(p)),
        None => pick_open_path(),
    };
    Ok(respond(state.backup_api.import_database(src.as_deref())))
}
