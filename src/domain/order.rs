// ==========================================
// Pressia 洗衣店管理系统 - 订单领域模型
// ==========================================
// 对齐: orders 表
// items 列以 JSON 数组存储: [{id, name, category, price, quantity}]
// ==========================================

use crate::domain::types::{OrderPriority, OrderStatus};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// LineItem - 订单明细行
// ==========================================
// 下单时从价目表按值拷贝，之后价目表改价不影响历史订单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// 来源价目表条目ID（手工录入的行可为空）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// 单价（存储字段名为 price）
    #[serde(rename = "price")]
    pub unit_price: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(
        id: Option<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            unit_price,
            quantity,
        }
    }

    /// 行小计 = 单价 × 数量
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// 订单总额 = Σ 单价 × 数量
pub fn compute_total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::line_total).sum()
}

// ==========================================
// Order - 订单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub items: Vec<LineItem>,
    /// 冗余存储的总额（创建时 = Σ items，之后不再校验）
    pub total_amount: f64,
    pub pickup_date: NaiveDate,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// ==========================================
// NewOrder - 已校验的待落库订单
// ==========================================
// ID / 状态 / 时间戳由仓储层分配
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub items: Vec<LineItem>,
    pub total_amount: f64,
    pub pickup_date: NaiveDate,
}

// ==========================================
// CreateOrderRequest - 下单请求（前端表单）
// ==========================================
// 前端以 camelCase 提交；同时兼容 snake_case
// 前端附带的 totalAmount 会被忽略，总额始终由后端重新计算
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(alias = "customer_name")]
    pub customer_name: String,
    #[serde(default, alias = "customer_phone")]
    pub customer_phone: Option<String>,
    pub items: Vec<LineItem>,
    #[serde(alias = "pickup_date")]
    pub pickup_date: NaiveDate,
}

// ==========================================
// TrackedOrder - 订单跟踪视图
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedOrder {
    #[serde(flatten)]
    pub order: Order,
    pub priority: OrderPriority,
}

/// 订单跟踪页顶部统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingSummary {
    pub overdue: usize,
    pub due_today: usize,
    pub due_tomorrow: usize,
    pub due_this_week: usize,
    pub pending: usize,
}
