// ==========================================
// Pressia 洗衣店管理系统 - 订单列表过滤
// ==========================================
// 订单跟踪页: 关键字 + 状态 + 取件时间窗口
// ==========================================

use crate::domain::order::Order;
use crate::domain::types::{DueWindow, OrderStatus};
use crate::engine::tracking::WEEK_WINDOW_DAYS;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    /// 关键字（客户名 / 电话 / 订单号，不区分大小写）
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub due: Option<DueWindow>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order, today: NaiveDate) -> bool {
        self.matches_search(order) && self.matches_status(order) && self.matches_due(order, today)
    }

    pub fn apply(&self, orders: Vec<Order>, today: NaiveDate) -> Vec<Order> {
        orders
            .into_iter()
            .filter(|o| self.matches(o, today))
            .collect()
    }

    fn matches_search(&self, order: &Order) -> bool {
        let needle = match self.search.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_lowercase(),
            _ => return true,
        };
        order.customer_name.to_lowercase().contains(&needle)
            || order
                .customer_phone
                .as_deref()
                .map(|p| p.to_lowercase().contains(&needle))
                .unwrap_or(false)
            || order.id.to_lowercase().contains(&needle)
    }

    fn matches_status(&self, order: &Order) -> bool {
        self.status.map_or(true, |s| order.status == s)
    }

    fn matches_due(&self, order: &Order, today: NaiveDate) -> bool {
        let Some(window) = self.due else {
            return true;
        };
        // 时间窗口只针对待处理订单
        if order.status != OrderStatus::Pending {
            return false;
        }
        let pickup = order.pickup_date;
        match window {
            DueWindow::Overdue => pickup < today,
            DueWindow::Today => pickup == today,
            DueWindow::Tomorrow => pickup == today + Duration::days(1),
            DueWindow::ThisWeek => {
                pickup >= today && pickup <= today + Duration::days(WEEK_WINDOW_DAYS)
            }
        }
    }
}
