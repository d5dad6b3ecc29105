// ==========================================
// Pressia 洗衣店管理系统 - 领域类型定义
// ==========================================
// 订单状态 / 取件优先级 / 取件时间窗口
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 订单状态 (Order Status)
// ==========================================
// 状态机: pending → completed → picked_up
//         pending → cancelled
// picked_up / cancelled 为终态
// 序列化格式: snake_case (与数据库一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,   // 待处理（初始状态）
    Completed, // 已洗好，待取
    PickedUp,  // 已取件
    Cancelled, // 已取消
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl OrderStatus {
    /// 全部状态（按生命周期顺序）
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::PickedUp,
        OrderStatus::Cancelled,
    ];

    /// 从字符串解析订单状态
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "completed" => Some(OrderStatus::Completed),
            "picked_up" => Some(OrderStatus::PickedUp),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// 是否为终态（不允许再流转）
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::PickedUp | OrderStatus::Cancelled)
    }
}

// ==========================================
// 取件优先级 (Order Priority)
// ==========================================
// 仅用于排序/高亮，不落库，每次列表渲染时重新计算
// 顺序: Overdue < Today < Tomorrow < Urgent < Normal（越靠前越紧急）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPriority {
    Overdue,  // 已逾期
    Today,    // 今日取件
    Tomorrow, // 明日取件
    Urgent,   // 即将到期（2~3 天内）
    Normal,   // 正常
}

impl fmt::Display for OrderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderPriority::Overdue => write!(f, "overdue"),
            OrderPriority::Today => write!(f, "today"),
            OrderPriority::Tomorrow => write!(f, "tomorrow"),
            OrderPriority::Urgent => write!(f, "urgent"),
            OrderPriority::Normal => write!(f, "normal"),
        }
    }
}

// ==========================================
// 取件时间窗口过滤 (Due Window)
// ==========================================
// 订单跟踪页的日期过滤器，仅作用于 pending 订单
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueWindow {
    Overdue,  // pickup_date < 今天
    Today,    // pickup_date = 今天
    Tomorrow, // pickup_date = 明天
    ThisWeek, // 今天 <= pickup_date <= 今天 + 7
}

// ==========================================
// 状态流转模式 (Transition Mode)
// ==========================================
// Permissive: 任意状态可设为任意状态（默认，保持现有行为）
// Strict: 仅允许状态机图中的边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionMode {
    #[default]
    Permissive,
    Strict,
}
