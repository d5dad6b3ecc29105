use crate::api::validator::{parse_optional_payload, parse_payload};
use crate::api::{ApiResponse, EntityRef};
use crate::app::state::AppState;
use crate::domain::expense::{Expense, ExpenseFilter, ExpenseInput, ExpenseSummary};
use serde_json::Value;

use super::common::respond;

// ==========================================
// 支出相关命令
// ==========================================

#[tauri::command(rename_all = "snake_case")]
pub async fn get_expenses(
    state: tauri::State<'_, AppState>,
    filter: Option<Value>,
) -> Result<ApiResponse<Vec<Expense>>, String> {
    let result = parse_optional_payload::<ExpenseFilter>(filter)
        .and_then(|filter| state.expense_api.get_filtered_expenses(&filter));
    Ok(respond(result))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn create_expense(
    state: tauri::State<'_, AppState>,
    data: Value,
) -> Result<ApiResponse<Expense>, String> {
    let result = parse_payload::<ExpenseInput>(data)
        .and_then(|input| state.expense_api.create_expense(&input));
    Ok(respond(result))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn update_expense(
    state: tauri::State<'_, AppState>,
    id: String,
    data: Value,
) -> Result<ApiResponse<EntityRef>, String> {
    let result = parse_payload::<ExpenseInput>(data)
        .and_then(|input| state.expense_api.update_expense(&id, &input));
    Ok(respond(result))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn delete_expense(
    state: tauri::State<'_, AppState>,
    id: String,
) -> Result<ApiResponse<EntityRef>, String> {
    Ok(respond(state.expense_api.delete_expense(&id)))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_expense_summary(
    state: tauri::State<'_, AppState>,
    filter: Option<Value>,
) -> Result<ApiResponse<ExpenseSummary>, String> {
    let result = parse_optional_payload::<ExpenseFilter>(filter)
        .and_then(|filter| state.expense_api.get_expense_summary(&filter));
    Ok(respond(result))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_expense_categories(
    state: tauri::State<'_, AppState>,
) -> Result<ApiResponse<Vec<String>>, String> {
    Ok(ApiResponse::ok(state.expense_api.get_expense_categories()))
}
