// ==========================================
// Pressia 洗衣店管理系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 Tauri 命令调用
// ==========================================

pub mod backup_api;
pub mod customer_api;
pub mod dashboard_api;
pub mod error;
pub mod expense_api;
pub mod item_type_api;
pub mod order_api;
pub mod response;
pub mod settings_api;
pub mod validator;

// 重导出核心类型
pub use backup_api::{default_backup_file_name, BackupApi, BackupReport};
pub use customer_api::CustomerApi;
pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use expense_api::ExpenseApi;
pub use item_type_api::ItemTypeApi;
pub use order_api::OrderApi;
pub use response::{ApiResponse, EntityRef};
pub use settings_api::SettingsApi;
