use crate::api::{ApiResponse, ApiResult};
use std::path::PathBuf;
use tauri::api::dialog::blocking::FileDialogBuilder;

// ==========================================
// 公共工具：信封转换、文件对话框
// ==========================================

/// 将 API 结果包装为前端信封
pub(super) fn respond<T>(result: ApiResult<T>) -> ApiResponse<T> {
    result.into()
}

const BACKUP_EXTENSIONS: &[&str] = &["sqlite", "db"];

/// 保存对话框；用户取消时返回 None
pub(super) fn pick_save_path(default_name: &str) -> Option<PathBuf> {
    FileDialogBuilder::new()
        .set_title("Exporter la base de données")
        .set_file_name(default_name)
        .add_filter("Base Pressia", BACKUP_EXTENSIONS)
        .save_file()
}

/// 打开对话框；用户取消时返回 None
pub(super) fn pick_open_path() -> Option<PathBuf> {
    FileDialogBuilder::new()
        .set_title("Importer une base de données")
        .add_filter("Base Pressia", BACKUP_EXTENSIONS)
        .pick_file()
}
