// ==========================================
// Pressia 洗衣店管理系统 - 驾驶舱统计
// ==========================================
// 派生数据，不落库，每次调用重新计算
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// 今日营业额（按 created_at 的日历日）
    pub today_revenue: f64,
    /// 本月营业额
    pub monthly_revenue: f64,
    /// 本月支出（按支出 date）
    pub monthly_expenses: f64,
    /// 本月利润 = 营业额 - 支出（可为负）
    pub monthly_profit: f64,
    /// 待处理订单数
    pub pending_orders: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_camel_case() {
        let stats = DashboardStats {
            today_revenue: 100.0,
            monthly_revenue: 800.0,
            monthly_expenses: 300.0,
            monthly_profit: 500.0,
            pending_orders: 2,
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["todayRevenue"], 100.0);
        assert_eq!(value["monthlyRevenue"], 800.0);
        assert_eq!(value["monthlyExpenses"], 300.0);
        assert_eq!(value["monthlyProfit"], 500.0);
        assert_eq!(value["pendingOrders"], 2);
    }
}
