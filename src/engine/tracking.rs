// ==========================================
// Pressia 洗衣店管理系统 - 取件优先级分类引擎
// ==========================================
// 红线: 优先级只用于排序/高亮，不落库，每次列表重新计算
// ==========================================
// 判定顺序（首条命中即返回，仅 pending 订单参与）:
// 1. overdue  : pickup_date < 今天
// 2. today    : pickup_date = 今天
// 3. tomorrow : pickup_date = 明天
// 4. urgent   : pickup_date <= 今天 + urgent_window_days
// 5. normal   : 其余（含全部非 pending 订单）
// ==========================================

use crate::domain::order::{Order, TrackedOrder, TrackingSummary};
use crate::domain::types::{OrderPriority, OrderStatus};
use chrono::{Duration, NaiveDate};
use tracing::instrument;

/// urgent 规则的默认窗口（天）
pub const DEFAULT_URGENT_WINDOW_DAYS: i64 = 3;

/// this_week 过滤/统计的窗口（天）
pub const WEEK_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy)]
pub struct TrackingClassifier {
    urgent_window_days: i64,
}

impl Default for TrackingClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_URGENT_WINDOW_DAYS)
    }
}

impl TrackingClassifier {
    pub fn new(urgent_window_days: i64) -> Self {
        Self { urgent_window_days }
    }

    /// 单个订单的优先级
    pub fn classify(&self, order: &Order, today: NaiveDate) -> OrderPriority {
        if order.status != OrderStatus::Pending {
            return OrderPriority::Normal;
        }

        let pickup = order.pickup_date;
        if pickup < today {
            OrderPriority::Overdue
        } else if pickup == today {
            OrderPriority::Today
        } else if pickup == today + Duration::days(1) {
            OrderPriority::Tomorrow
        } else if pickup <= today + Duration::days(self.urgent_window_days) {
            OrderPriority::Urgent
        } else {
            OrderPriority::Normal
        }
    }

    /// 批量分类并排序: 优先级 → 取件日 → 创建时间
    #[instrument(skip(self, orders), fields(count = orders.len()))]
    pub fn track(&self, orders: Vec<Order>, today: NaiveDate) -> Vec<TrackedOrder> {
        let mut tracked: Vec<TrackedOrder> = orders
            .into_iter()
            .map(|order| {
                let priority = self.classify(&order, today);
                TrackedOrder { order, priority }
            })
            .collect();

        tracked.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| a.order.pickup_date.cmp(&b.order.pickup_date))
                .then_with(|| a.order.created_at.cmp(&b.order.created_at))
        });
        tracked
    }

    /// 顶部统计卡片
    pub fn summarize(&self, orders: &[Order], today: NaiveDate) -> TrackingSummary {
        let tomorrow = today + Duration::days(1);
        let week_end = today + Duration::days(WEEK_WINDOW_DAYS);

        let mut summary = TrackingSummary::default();
        for order in orders.iter().filter(|o| o.status == OrderStatus::Pending) {
            let pickup = order.pickup_date;
            summary.pending += 1;
            if pickup < today {
                summary.overdue += 1;
            }
            if pickup == today {
                summary.due_today += 1;
            }
            if pickup == tomorrow {
                summary.due_tomorrow += 1;
            }
            if pickup >= today && pickup <= week_end {
                summary.due_this_week += 1;
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::LineItem;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn order(id: &str, pickup_offset: i64, status: OrderStatus) -> Order {
        let created = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Order {
            id: id.to_string(),
            customer_name: "Yao".to_string(),
            customer_phone: Some("90112233".to_string()),
            items: vec![LineItem::new(None, "Robe", "Vêtements Femme", 800.0, 1)],
            total_amount: 800.0,
            pickup_date: today() + Duration::days(pickup_offset),
            status,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_逾期订单取件后变为正常() {
        let c = TrackingClassifier::default();
        let pending = order("a", -1, OrderStatus::Pending);
        assert_eq!(c.classify(&pending, today()), OrderPriority::Overdue);

        let picked = order("a", -1, OrderStatus::PickedUp);
        assert_eq!(c.classify(&picked, today()), OrderPriority::Normal);
    }

    #[test]
    fn test_按日期分级() {
        let c = TrackingClassifier::default();
        let cases = [
            (0, OrderPriority::Today),
            (1, OrderPriority::Tomorrow),
            (2, OrderPriority::Urgent),
            (3, OrderPriority::Urgent),
            (4, OrderPriority::Normal),
        ];
        for (offset, expected) in cases {
            let o = order("x", offset, OrderStatus::Pending);
            assert_eq!(c.classify(&o, today()), expected, "offset={}", offset);
        }
    }

    #[test]
    fn test_非待处理订单一律正常() {
        let c = TrackingClassifier::default();
        for status in [OrderStatus::Completed, OrderStatus::Cancelled] {
            assert_eq!(c.classify(&order("x", 0, status), today()), OrderPriority::Normal);
        }
    }

    #[test]
    fn test_urgent_窗口可配置() {
        let c = TrackingClassifier::new(5);
        let o = order("x", 5, OrderStatus::Pending);
        assert_eq!(c.classify(&o, today()), OrderPriority::Urgent);
    }

    #[test]
    fn test_track_按优先级排序() {
        let c = TrackingClassifier::default();
        let orders = vec![
            order("normal", 10, OrderStatus::Pending),
            order("done", -5, OrderStatus::Completed),
            order("today", 0, OrderStatus::Pending),
            order("late", -2, OrderStatus::Pending),
        ];
        let ids: Vec<String> = c
            .track(orders, today())
            .into_iter()
            .map(|t| t.order.id)
            .collect();
        assert_eq!(ids, vec!["late", "today", "done", "normal"]);
    }

    #[test]
    fn test_summarize() {
        let c = TrackingClassifier::default();
        let orders = vec![
            order("a", -1, OrderStatus::Pending),
            order("b", 0, OrderStatus::Pending),
            order("c", 1, OrderStatus::Pending),
            order("d", 7, OrderStatus::Pending),
            order("e", 8, OrderStatus::Pending),
            order("f", 0, OrderStatus::Completed),
        ];
        let s = c.summarize(&orders, today());
        assert_eq!(s.overdue, 1);
        assert_eq!(s.due_today, 1);
        assert_eq!(s.due_tomorrow, 1);
        assert_eq!(s.due_this_week, 3);
        assert_eq!(s.pending, 5);
    }
}
