// ==========================================
// Pressia 洗衣店管理系统 - 核心库
// ==========================================
// 技术栈: Tauri + Rust + SQLite
// 系统定位: 单店桌面收银与后台管理
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 运行期配置
pub mod config;

// 数据库基础设施（连接初始化/建表/存储句柄）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DueWindow, OrderPriority, OrderStatus, TransitionMode};

// 领域实体
pub use domain::{
    Customer, DashboardStats, Expense, ItemType, LineItem, Order, TrackedOrder, TrackingSummary,
};

// 引擎
pub use engine::{DashboardAggregator, OrderFilter, OrderLifecycle, TrackingClassifier};

// API
pub use api::{ApiError, ApiResponse, ApiResult};

// 存储
pub use db::Storage;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Pressia";
