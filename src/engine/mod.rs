// ==========================================
// Pressia 洗衣店管理系统 - 引擎层
// ==========================================
// 职责: 订单生命周期、驾驶舱汇总、取件优先级等业务规则
// 红线: Engine 不拼 SQL, 输入输出均为领域对象
// ==========================================

pub mod dashboard;
pub mod lifecycle;
pub mod order_filter;
pub mod tracking;

// 重导出核心引擎
pub use dashboard::DashboardAggregator;
pub use lifecycle::{OrderLifecycle, TransitionRejected};
pub use order_filter::OrderFilter;
pub use tracking::TrackingClassifier;
