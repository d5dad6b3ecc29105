// ==========================================
// Pressia 洗衣店管理系统 - 驾驶舱统计引擎
// ==========================================
// 输入: 全部订单 + 全部支出 + 今天的日期
// 输出: DashboardStats
// 红线: 纯计算，不读库，不缓存
// ==========================================

use crate::domain::dashboard::DashboardStats;
use crate::domain::expense::Expense;
use crate::domain::order::Order;
use crate::domain::types::OrderStatus;
use chrono::{Datelike, NaiveDate};
use tracing::instrument;

pub struct DashboardAggregator;

impl DashboardAggregator {
    /// 计算驾驶舱统计
    ///
    /// - 营业额按订单 created_at 的日历日归属（不是取件日）
    /// - 支出按支出 date 归属
    /// - 所有状态的订单都计入营业额
    #[instrument(skip(orders, expenses), fields(orders = orders.len(), expenses = expenses.len()))]
    pub fn compute(orders: &[Order], expenses: &[Expense], today: NaiveDate) -> DashboardStats {
        let mut stats = DashboardStats::default();

        for order in orders {
            let created = order.created_at.date();
            if created == today {
                stats.today_revenue += order.total_amount;
            }
            if same_month(created, today) {
                stats.monthly_revenue += order.total_amount;
            }
            if order.status == OrderStatus::Pending {
                stats.pending_orders += 1;
            }
        }

        stats.monthly_expenses = expenses
            .iter()
            .filter(|e| same_month(e.date, today))
            .map(|e| e.amount)
            .sum();

        stats.monthly_profit = stats.monthly_revenue - stats.monthly_expenses;
        stats
    }
}

pub(crate) fn same_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}
