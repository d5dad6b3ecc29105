// ==========================================
// Pressia 洗衣店管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod customer;
pub mod dashboard;
pub mod expense;
pub mod item_type;
pub mod order;
pub mod types;

// 重导出核心类型
pub use customer::{Customer, CustomerInput};
pub use dashboard::DashboardStats;
pub use expense::{Expense, ExpenseFilter, ExpenseInput, ExpenseSummary, EXPENSE_CATEGORIES};
pub use item_type::{ItemType, ItemTypeInput, DEFAULT_ITEM_TYPES};
pub use order::{
    compute_total, CreateOrderRequest, LineItem, NewOrder, Order, TrackedOrder, TrackingSummary,
};
pub use types::{DueWindow, OrderPriority, OrderStatus, TransitionMode};
