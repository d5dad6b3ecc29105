// ==========================================
// Pressia 洗衣店管理系统 - 驾驶舱 API
// ==========================================
// 职责: 读取订单与支出，委托 DashboardAggregator 计算
// 每次调用完整重算，不缓存
// ==========================================

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::api::error::ApiResult;
use crate::domain::dashboard::DashboardStats;
use crate::engine::dashboard::DashboardAggregator;
use crate::repository::expense_repo::ExpenseRepository;
use crate::repository::order_repo::OrderRepository;

pub struct DashboardApi {
    order_repo: Arc<OrderRepository>,
    expense_repo: Arc<ExpenseRepository>,
}

impl DashboardApi {
    pub fn new(order_repo: Arc<OrderRepository>, expense_repo: Arc<ExpenseRepository>) -> Self {
        Self {
            order_repo,
            expense_repo,
        }
    }

    /// 驾驶舱统计（以本地日期为“今天”）
    pub fn get_dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.get_dashboard_stats_at(Local::now().date_naive())
    }

    pub fn get_dashboard_stats_at(&self, today: NaiveDate) -> ApiResult<DashboardStats> {
        let orders = self.order_repo.find_all()?;
        let expenses = self.expense_repo.find_all()?;
        let stats = DashboardAggregator::compute(&orders, &expenses, today);
        tracing::debug!(
            today = %today,
            monthly_revenue = stats.monthly_revenue,
            pending = stats.pending_orders,
            "驾驶舱统计已计算"
        );
        Ok(stats)
    }
}
