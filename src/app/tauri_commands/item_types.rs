use crate::api::validator::parse_payload;
use crate::api::{ApiResponse, EntityRef};
use crate::app::state::AppState;
use crate::domain::item_type::{ItemType, ItemTypeInput};
use serde_json::Value;

use super::common::respond;

// ==========================================
// 价目表相关命令
// ==========================================

#[tauri::command(rename_all = "snake_case")]
pub async fn get_item_types(
    state: tauri::State<'_, AppState>,
) -> Result<ApiResponse<Vec<ItemType>>, String> {
    Ok(respond(state.item_type_api.get_item_types()))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn create_item_type(
    state: tauri::State<'_, AppState>,
    data: Value,
) -> Result<ApiResponse<ItemType>, String> {
    let result = parse_payload::<ItemTypeInput>(data)
        .and_then(|input| state.item_type_api.create_item_type(&input));
    Ok(respond(result))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn update_item_type(
    state: tauri::State<'_, AppState>,
    id: String,
    data: Value,
) -> Result<ApiResponse<EntityRef>, String> {
    let result = parse_payload::<ItemTypeInput>(data)
        .and_then(|input| state.item_type_api.update_item_type(&id, &input));
    Ok(respond(result))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn delete_item_type(
    state: tauri::State<'_, AppState>,
    id: String,
) -> Result<ApiResponse<EntityRef>, String> {
    Ok(respond(state.item_type_api.delete_item_type(&id)))
}
