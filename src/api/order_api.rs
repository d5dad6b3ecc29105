// ==========================================
// Pressia 洗衣店管理系统 - 订单 API
// ==========================================
// 职责: 下单、状态变更、订单列表、订单跟踪视图
// 下单时顺带登记客户（尽力而为，不与订单写入同事务）
// ==========================================

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::{validate_id, validate_order};
use crate::config::ConfigManager;
use crate::domain::customer::CustomerInput;
use crate::domain::order::{CreateOrderRequest, Order, TrackedOrder, TrackingSummary};
use crate::domain::types::OrderStatus;
use crate::engine::lifecycle::OrderLifecycle;
use crate::engine::order_filter::OrderFilter;
use crate::engine::tracking::TrackingClassifier;
use crate::repository::customer_repo::CustomerRepository;
use crate::repository::order_repo::OrderRepository;

/// 最近订单的默认条数（驾驶舱）
pub const DEFAULT_RECENT_LIMIT: u32 = 5;

// ==========================================
// OrderApi - 订单 API
// ==========================================

/// 订单API
///
/// 职责：
/// 1. 下单（校验 → 重算总额 → 落库 → 登记客户）
/// 2. 状态变更（默认宽松，可配置严格模式）
/// 3. 订单列表 / 最近订单 / 跟踪视图
pub struct OrderApi {
    order_repo: Arc<OrderRepository>,
    customer_repo: Arc<CustomerRepository>,
    config_manager: Arc<ConfigManager>,
}

impl OrderApi {
    pub fn new(
        order_repo: Arc<OrderRepository>,
        customer_repo: Arc<CustomerRepository>,
        config_manager: Arc<ConfigManager>,
    ) -> Self {
        Self {
            order_repo,
            customer_repo,
            config_manager,
        }
    }

    /// 下单
    ///
    /// # 返回
    /// - Ok(Order): 新订单（status=pending，total_amount=Σ单价×数量）
    /// - Err(ApiError::InvalidInput): 校验失败，未落库
    pub fn create_order(&self, req: CreateOrderRequest) -> ApiResult<Order> {
        let new_order = validate_order(&req)?;
        let order = self.order_repo.insert(&new_order)?;

        tracing::info!(
            order_id = %order.id,
            total = order.total_amount,
            items = order.items.len(),
            "订单已创建"
        );

        self.register_customer(&order);
        Ok(order)
    }

    /// 按下单联系人登记客户；失败只记日志，不影响订单
    fn register_customer(&self, order: &Order) {
        let phone = order.customer_phone.as_deref().unwrap_or_default();
        let result = self
            .customer_repo
            .find_match(&order.customer_name, phone)
            .and_then(|existing| match existing {
                Some(_) => Ok(None),
                None => {
                    let input = CustomerInput::from_order_contact(
                        &order.customer_name,
                        order.customer_phone.as_deref(),
                    );
                    self.customer_repo.insert(&input).map(Some)
                }
            });

        match result {
            Ok(Some(customer)) => {
                tracing::info!(customer_id = %customer.id, order_id = %order.id, "已自动登记新客户")
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(order_id = %order.id, "自动登记客户失败: {}", e),
        }
    }

    /// 修改订单状态
    ///
    /// # 参数
    /// - order_id: 订单ID
    /// - status: pending / completed / picked_up / cancelled
    ///
    /// # 返回
    /// - Ok(Order): 更新后的订单
    /// - Err(ApiError::NotFound): 订单不存在
    /// - Err(ApiError::InvalidStateTransition): 严格模式下不允许的流转
    pub fn update_order_status(&self, order_id: &str, status: &str) -> ApiResult<Order> {
        let order_id = validate_id(order_id)?;
        let new_status = OrderStatus::from_str(status)
            .ok_or_else(|| ApiError::InvalidInput(format!("statut inconnu: {}", status)))?;

        let current = self
            .order_repo
            .find_by_id(order_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Commande (id={})", order_id)))?;

        let lifecycle =
            OrderLifecycle::from_strict_flag(self.config_manager.strict_status_transitions()?);
        lifecycle.check_transition(current.status, new_status)?;

        let affected = self.order_repo.update_status(order_id, new_status)?;
        if affected == 0 {
            return Err(ApiError::NotFound(format!("Commande (id={})", order_id)));
        }

        tracing::info!(
            order_id = order_id,
            from = %current.status,
            to = %new_status,
            mode = ?lifecycle.mode(),
            "订单状态已更新"
        );

        self.order_repo
            .find_by_id(order_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Commande (id={})", order_id)))
    }

    /// 全部订单（按创建时间倒序）
    pub fn get_orders(&self) -> ApiResult<Vec<Order>> {
        Ok(self.order_repo.find_all()?)
    }

    /// 最近订单
    pub fn get_recent_orders(&self, limit: Option<u32>) -> ApiResult<Vec<Order>> {
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_RECENT_LIMIT);
        Ok(self.order_repo.find_recent(limit)?)
    }

    pub fn get_order(&self, order_id: &str) -> ApiResult<Order> {
        let order_id = validate_id(order_id)?;
        self.order_repo
            .find_by_id(order_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Commande (id={})", order_id)))
    }

    // ==========================================
    // 订单跟踪
    // ==========================================

    fn classifier(&self) -> ApiResult<TrackingClassifier> {
        Ok(TrackingClassifier::new(
            self.config_manager.urgent_window_days()?,
        ))
    }

    /// 跟踪视图（今天）
    pub fn get_tracked_orders(&self, filter: &OrderFilter) -> ApiResult<Vec<TrackedOrder>> {
        self.get_tracked_orders_at(filter, Local::now().date_naive())
    }

    /// 跟踪视图（指定日期）
    pub fn get_tracked_orders_at(
        &self,
        filter: &OrderFilter,
        today: NaiveDate,
    ) -> ApiResult<Vec<TrackedOrder>> {
        let orders = filter.apply(self.order_repo.find_all()?, today);
        Ok(self.classifier()?.track(orders, today))
    }

    pub fn get_tracking_summary(&self) -> ApiResult<TrackingSummary> {
        self.get_tracking_summary_at(Local::now().date_naive())
    }

    pub fn get_tracking_summary_at(&self, today: NaiveDate) -> ApiResult<TrackingSummary> {
        let orders = self.order_repo.find_all()?;
        Ok(self.classifier()?.summarize(&orders, today))
    }

    /// 建议取件日期 = 今天 + orders.default_pickup_days
    pub fn suggested_pickup_date(&self) -> ApiResult<NaiveDate> {
        self.suggested_pickup_date_at(Local::now().date_naive())
    }

    pub fn suggested_pickup_date_at(&self, today: NaiveDate) -> ApiResult<NaiveDate> {
        let days = self.config_manager.default_pickup_days()?;
        Ok(today + Duration::days(days))
    }
}
