// ==========================================
// Pressia 洗衣店管理系统 - 支出 API
// ==========================================
// 职责: 支出增删改查、过滤、本月统计
// ==========================================

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::api::error::ApiResult;
use crate::api::response::EntityRef;
use crate::api::validator::{validate_expense, validate_id};
use crate::domain::expense::{Expense, ExpenseFilter, ExpenseInput, ExpenseSummary, EXPENSE_CATEGORIES};
use crate::engine::dashboard::same_month;
use crate::repository::expense_repo::ExpenseRepository;

pub struct ExpenseApi {
    expense_repo: Arc<ExpenseRepository>,
}

impl ExpenseApi {
    pub fn new(expense_repo: Arc<ExpenseRepository>) -> Self {
        Self { expense_repo }
    }

    /// 全部支出（按日期倒序）
    pub fn get_expenses(&self) -> ApiResult<Vec<Expense>> {
        Ok(self.expense_repo.find_all()?)
    }

    /// 按分类 / 日期过滤
    pub fn get_filtered_expenses(&self, filter: &ExpenseFilter) -> ApiResult<Vec<Expense>> {
        let expenses = self.expense_repo.find_all()?;
        Ok(apply_filter(expenses, filter))
    }

    pub fn create_expense(&self, input: &ExpenseInput) -> ApiResult<Expense> {
        let input = validate_expense(input)?;
        let expense = self.expense_repo.insert(&input)?;
        tracing::info!(expense_id = %expense.id, amount = expense.amount, "支出已登记");
        Ok(expense)
    }

    /// 修改支出；未知 ID 视为成功（无变化）
    pub fn update_expense(&self, id: &str, input: &ExpenseInput) -> ApiResult<EntityRef> {
        let id = validate_id(id)?;
        let input = validate_expense(input)?;
        let affected = self.expense_repo.update(id, &input)?;
        if affected == 0 {
            tracing::debug!(expense_id = id, "修改支出: 记录不存在，未做变更");
        }
        Ok(EntityRef { id: id.to_string() })
    }

    pub fn delete_expense(&self, id: &str) -> ApiResult<EntityRef> {
        let id = validate_id(id)?;
        let affected = self.expense_repo.delete(id)?;
        if affected == 0 {
            tracing::debug!(expense_id = id, "删除支出: 记录不存在");
        }
        Ok(EntityRef { id: id.to_string() })
    }

    /// 固定分类列表
    pub fn get_expense_categories(&self) -> Vec<String> {
        EXPENSE_CATEGORIES.iter().map(|c| c.to_string()).collect()
    }

    pub fn get_expense_summary(&self, filter: &ExpenseFilter) -> ApiResult<ExpenseSummary> {
        self.get_expense_summary_at(filter, Local::now().date_naive())
    }

    /// 支出页统计
    ///
    /// - filtered_total: 过滤结果合计
    /// - month_total: 当月全部支出合计
    /// - category_count: 全部支出中出现过的分类数
    pub fn get_expense_summary_at(
        &self,
        filter: &ExpenseFilter,
        today: NaiveDate,
    ) -> ApiResult<ExpenseSummary> {
        let expenses = self.expense_repo.find_all()?;

        let month_total = expenses
            .iter()
            .filter(|e| same_month(e.date, today))
            .map(|e| e.amount)
            .sum();
        let category_count = expenses
            .iter()
            .map(|e| e.category.as_str())
            .collect::<HashSet<_>>()
            .len();
        let filtered_total = apply_filter(expenses, filter).iter().map(|e| e.amount).sum();

        Ok(ExpenseSummary {
            filtered_total,
            month_total,
            category_count,
        })
    }
}

fn apply_filter(expenses: Vec<Expense>, filter: &ExpenseFilter) -> Vec<Expense> {
    let category = filter
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    expenses
        .into_iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .filter(|e| filter.date.map_or(true, |d| e.date == d))
        .collect()
}
