use crate::api::ApiResponse;
use crate::app::state::AppState;
use crate::domain::dashboard::DashboardStats;

use super::common::respond;

// ==========================================
// 驾驶舱相关命令
// ==========================================

#[tauri::command(rename_all = "snake_case")]
pub async fn get_dashboard_stats(
    state: tauri::State<'_, AppState>,
) -> Result<ApiResponse<DashboardStats>, String> {
    Ok(respond(state.dashboard_api.get_dashboard_stats()))
}
