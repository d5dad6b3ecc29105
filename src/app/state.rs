// ==========================================
// Pressia 洗衣店管理系统 - 应用状态
// ==========================================
// 职责: 持有唯一的存储句柄，构造所有仓储与 API 实例
// 所有仓储共享 Storage 的连接，导入数据库后无需重建
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{
    BackupApi, CustomerApi, DashboardApi, ExpenseApi, ItemTypeApi, OrderApi, SettingsApi,
};
use crate::config::ConfigManager;
use crate::db::Storage;
use crate::repository::{
    CustomerRepository, ExpenseRepository, ItemTypeRepository, OrderRepository,
};

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "PRESSIA_DB_PATH";

/// 应用状态
///
/// 作为 Tauri State 注入到每个命令
pub struct AppState {
    pub storage: Arc<Storage>,
    pub order_api: Arc<OrderApi>,
    pub expense_api: Arc<ExpenseApi>,
    pub item_type_api: Arc<ItemTypeApi>,
    pub customer_api: Arc<CustomerApi>,
    pub dashboard_api: Arc<DashboardApi>,
    pub backup_api: Arc<BackupApi>,
    pub settings_api: Arc<SettingsApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 说明
    /// 1. 打开（必要时创建）数据库并建表
    /// 2. 基于共享连接初始化所有Repository
    /// 3. 创建所有API实例
    pub fn new(db_path: impl Into<PathBuf>) -> Result<Self, String> {
        let db_path = db_path.into();
        tracing::info!("初始化AppState，数据库路径: {}", db_path.display());

        let storage = Arc::new(
            Storage::open(&db_path).map_err(|e| format!("无法打开数据库: {}", e))?,
        );
        Ok(Self::from_storage(storage))
    }

    /// 基于已打开的存储句柄装配
    pub fn from_storage(storage: Arc<Storage>) -> Self {
        let conn = storage.connection();

        // ==========================================
        // Repository层
        // ==========================================
        let order_repo = Arc::new(OrderRepository::from_connection(conn.clone()));
        let expense_repo = Arc::new(ExpenseRepository::from_connection(conn.clone()));
        let item_type_repo = Arc::new(ItemTypeRepository::from_connection(conn.clone()));
        let customer_repo = Arc::new(CustomerRepository::from_connection(conn.clone()));
        let config_manager = Arc::new(ConfigManager::from_connection(conn));

        // ==========================================
        // API层
        // ==========================================
        let order_api = Arc::new(OrderApi::new(
            order_repo.clone(),
            customer_repo.clone(),
            config_manager.clone(),
        ));
        let expense_api = Arc::new(ExpenseApi::new(expense_repo.clone()));
        let item_type_api = Arc::new(ItemTypeApi::new(item_type_repo));
        let customer_api = Arc::new(CustomerApi::new(customer_repo));
        let dashboard_api = Arc::new(DashboardApi::new(order_repo, expense_repo));
        let backup_api = Arc::new(BackupApi::new(storage.clone()));
        let settings_api = Arc::new(SettingsApi::new(config_manager));

        tracing::info!("AppState初始化完成");

        Self {
            storage,
            order_api,
            expense_api,
            item_type_api,
            customer_api,
            dashboard_api,
            backup_api,
            settings_api,
        }
    }
}

/// 默认数据库路径
///
/// 优先级: 环境变量 PRESSIA_DB_PATH > 用户数据目录 > 当前目录
pub fn get_default_db_path() -> PathBuf {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    let Some(data_dir) = dirs::data_dir() else {
        return PathBuf::from("./pressia.db");
    };

    // 开发环境使用独立目录，避免污染生产数据
    #[cfg(debug_assertions)]
    let dir = data_dir.join("pressia-dev");
    #[cfg(not(debug_assertions))]
    let dir = data_dir.join("pressia");

    dir.join("pressia.db")
}
