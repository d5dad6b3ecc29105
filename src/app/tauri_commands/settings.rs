use crate::api::ApiResponse;
use crate::app::state::AppState;
use crate::config::AppConfig;

use super::common::respond;

// ==========================================
// 配置管理相关命令
// ==========================================

#[tauri::command(rename_all = "snake_case")]
pub async fn get_settings(
    state: tauri::State<'_, AppState>,
) -> Result<ApiResponse<AppConfig>, String> {
    Ok(respond(state.settings_api.get_settings()))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_setting(
    state: tauri::State<'_, AppState>,
    key: String,
) -> Result<ApiResponse<Option<String>>, String> {
    Ok(respond(state.settings_api.get_setting(&key)))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn set_setting(
    state: tauri::State<'_, AppState>,
    key: String,
    value: String,
) -> Result<ApiResponse<AppConfig>, String> {
    Ok(respond(state.settings_api.set_setting(&key, &value)))
}
