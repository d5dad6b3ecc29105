// ==========================================
// Pressia 洗衣店管理系统 - 配置层
// ==========================================
// 职责: 运行期配置管理
// 存储: settings 表
// ==========================================

pub mod config_manager;

pub use config_manager::{config_keys, AppConfig, ConfigManager};
