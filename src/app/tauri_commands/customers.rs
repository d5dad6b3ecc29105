use crate::api::validator::parse_payload;
use crate::api::{ApiResponse, EntityRef};
use crate::app::state::AppState;
use crate::domain::customer::{Customer, CustomerInput};
use serde_json::Value;

use super::common::respond;

// ==========================================
// 客户通讯录相关命令
// ==========================================

#[tauri::command(rename_all = "snake_case")]
pub async fn get_customers(
    state: tauri::State<'_, AppState>,
) -> Result<ApiResponse<Vec<Customer>>, String> {
    Ok(respond(state.customer_api.get_customers()))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn search_customers(
    state: tauri::State<'_, AppState>,
    term: String,
) -> Result<ApiResponse<Vec<Customer>>, String> {
    Ok(respond(state.customer_api.search_customers(&term)))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn create_customer(
    state: tauri::State<'_, AppState>,
    data: Value,
) -> Result<ApiResponse<Customer>, String> {
    let result = parse_payload::<CustomerInput>(data)
        .and_then(|input| state.customer_api.create_customer(&input));
    Ok(respond(result))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn update_customer(
    state: tauri::State<'_, AppState>,
    id: String,
    data: Value,
) -> Result<ApiResponse<EntityRef>, String> {
    let result = parse_payload::<CustomerInput>(data)
        .and_then(|input| state.customer_api.update_customer(&id, &input));
    Ok(respond(result))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn delete_customer(
    state: tauri::State<'_, AppState>,
    id: String,
) -> Result<ApiResponse<EntityRef>, String> {
    Ok(respond(state.customer_api.delete_customer(&id)))
}
