// ==========================================
// Pressia 洗衣店管理系统 - 支出领域模型
// ==========================================
// 对齐: expenses 表
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// 支出分类（前端下拉框的固定选项）
pub const EXPENSE_CATEGORIES: [&str; 9] = [
    "Électricité",
    "Eau",
    "Produits de nettoyage",
    "Maintenance",
    "Salaire",
    "Transport",
    "Marketing",
    "Fournitures",
    "Autres",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// 新增/修改支出的表单数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

/// 支出列表过滤条件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// 精确分类（None = 全部）
    pub category: Option<String>,
    /// 精确日期（None = 全部）
    pub date: Option<NaiveDate>,
}

/// 支出页统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    /// 过滤后列表合计
    pub filtered_total: f64,
    /// 本月合计（不受过滤影响）
    pub month_total: f64,
    /// 出现过的分类数
    pub category_count: usize,
}
