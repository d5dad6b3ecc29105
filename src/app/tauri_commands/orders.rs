use crate::api::validator::{parse_optional_payload, parse_payload};
use crate::api::ApiResponse;
use crate::app::state::AppState;
use crate::domain::order::{CreateOrderRequest, Order, TrackedOrder, TrackingSummary};
use crate::engine::order_filter::OrderFilter;
use chrono::NaiveDate;
use serde_json::Value;

use super::common::respond;

// ==========================================
// 订单相关命令
// ==========================================

#[tauri::command(rename_all = "snake_case")]
pub async fn get_orders(
    state: tauri::State<'_, AppState>,
) -> Result<ApiResponse<Vec<Order>>, String> {
    Ok(respond(state.order_api.get_orders()))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_recent_orders(
    state: tauri::State<'_, AppState>,
    limit: Option<u32>,
) -> Result<ApiResponse<Vec<Order>>, String> {
    Ok(respond(state.order_api.get_recent_orders(limit)))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn create_order(
    state: tauri::State<'_, AppState>,
    data: Value,
) -> Result<ApiResponse<Order>, String> {
    let result = parse_payload::<CreateOrderRequest>(data)
        .and_then(|req| state.order_api.create_order(req));
    Ok(respond(result))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn update_order_status(
    state: tauri::State<'_, AppState>,
    order_id: String,
    status: String,
) -> Result<ApiResponse<Order>, String> {
    Ok(respond(state.order_api.update_order_status(&order_id, &status)))
}

/// 订单跟踪视图（带优先级，已排序）
#[tauri::command(rename_all = "snake_case")]
pub async fn get_tracked_orders(
    state: tauri::State<'_, AppState>,
    filter: Option<Value>,
) -> Result<ApiResponse<Vec<TrackedOrder>>, String> {
    let result = parse_optional_payload::<OrderFilter>(filter)
        .and_then(|filter| state.order_api.get_tracked_orders(&filter));
    Ok(respond(result))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_tracking_summary(
    state: tauri::State<'_, AppState>,
) -> Result<ApiResponse<TrackingSummary>, String> {
    Ok(respond(state.order_api.get_tracking_summary()))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_suggested_pickup_date(
    state: tauri::State<'_, AppState>,
) -> Result<ApiResponse<NaiveDate>, String> {
    Ok(respond(state.order_api.suggested_pickup_date()))
}
