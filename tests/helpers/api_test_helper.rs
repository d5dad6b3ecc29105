// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层集成测试的通用辅助函数
// ==========================================

#![allow(dead_code)]

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::NamedTempFile;

use pressia::api::{
    BackupApi, CustomerApi, DashboardApi, ExpenseApi, ItemTypeApi, OrderApi, SettingsApi,
};
use pressia::app::AppState;
use pressia::db::Storage;

use crate::test_helpers::create_test_db;

// ==========================================
// API测试环境
// ==========================================

/// API测试环境
///
/// 通过 AppState 装配，与应用启动时的依赖关系一致
pub struct ApiTestEnv {
    _temp_file: NamedTempFile,
    pub db_path: PathBuf,
    pub storage: Arc<Storage>,
    pub order_api: Arc<OrderApi>,
    pub expense_api: Arc<ExpenseApi>,
    pub item_type_api: Arc<ItemTypeApi>,
    pub customer_api: Arc<CustomerApi>,
    pub dashboard_api: Arc<DashboardApi>,
    pub backup_api: Arc<BackupApi>,
    pub settings_api: Arc<SettingsApi>,
}

impl ApiTestEnv {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        pressia::logging::init_test();

        let (temp_file, db_path) = create_test_db()?;
        let state = AppState::new(&db_path)?;

        Ok(Self {
            _temp_file: temp_file,
            db_path,
            storage: state.storage,
            order_api: state.order_api,
            expense_api: state.expense_api,
            item_type_api: state.item_type_api,
            customer_api: state.customer_api,
            dashboard_api: state.dashboard_api,
            backup_api: state.backup_api,
            settings_api: state.settings_api,
        })
    }

    /// 在共享连接上执行原始 SQL 准备数据
    pub fn with_conn<T>(
        &self,
        f: impl FnOnce(&rusqlite::Connection) -> rusqlite::Result<T>,
    ) -> Result<T, Box<dyn Error>> {
        let conn = self.storage.connection();
        let guard = conn.lock().map_err(|e| e.to_string())?;
        Ok(f(&guard)?)
    }
}
