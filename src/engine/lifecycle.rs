// ==========================================
// Pressia 洗衣店管理系统 - 订单生命周期
// ==========================================
// 状态机: pending → completed → picked_up
//         pending → cancelled
// 默认宽松模式: 任意状态可改为任意状态（与历史数据行为一致）
// 严格模式: 仅允许上述边，由 orders.strict_status_transitions 开启
// ==========================================

use crate::domain::types::{OrderStatus, TransitionMode};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Transition de statut interdite: {from} → {to}")]
pub struct TransitionRejected {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

// ==========================================
// OrderLifecycle - 状态流转校验
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderLifecycle {
    mode: TransitionMode,
}

impl OrderLifecycle {
    pub fn new(mode: TransitionMode) -> Self {
        Self { mode }
    }

    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            Self::new(TransitionMode::Strict)
        } else {
            Self::new(TransitionMode::Permissive)
        }
    }

    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    /// 状态机图中的合法边
    pub fn is_graph_edge(from: OrderStatus, to: OrderStatus) -> bool {
        if from.is_terminal() {
            return false;
        }
        matches!(
            (from, to),
            (OrderStatus::Pending, OrderStatus::Completed)
                | (OrderStatus::Completed, OrderStatus::PickedUp)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
        )
    }

    /// 校验一次状态变更
    pub fn check_transition(
        &self,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<(), TransitionRejected> {
        match self.mode {
            TransitionMode::Permissive => Ok(()),
            TransitionMode::Strict if Self::is_graph_edge(from, to) => Ok(()),
            TransitionMode::Strict => Err(TransitionRejected { from, to }),
        }
    }
}
