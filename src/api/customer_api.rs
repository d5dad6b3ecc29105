// ==========================================
// Pressia 洗衣店管理系统 - 客户通讯录 API
// ==========================================

use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::response::EntityRef;
use crate::api::validator::{validate_customer, validate_id};
use crate::domain::customer::{Customer, CustomerInput};
use crate::repository::customer_repo::CustomerRepository;

pub struct CustomerApi {
    customer_repo: Arc<CustomerRepository>,
}

impl CustomerApi {
    pub fn new(customer_repo: Arc<CustomerRepository>) -> Self {
        Self { customer_repo }
    }

    pub fn get_customers(&self) -> ApiResult<Vec<Customer>> {
        Ok(self.customer_repo.find_all()?)
    }

    /// 名 / 姓 / 电话子串搜索，不区分大小写；空关键字返回全部
    pub fn search_customers(&self, term: &str) -> ApiResult<Vec<Customer>> {
        Ok(self.customer_repo.search(term)?)
    }

    pub fn create_customer(&self, input: &CustomerInput) -> ApiResult<Customer> {
        let input = validate_customer(input)?;
        let customer = self.customer_repo.insert(&input)?;
        tracing::info!(customer_id = %customer.id, "客户已新增");
        Ok(customer)
    }

    pub fn update_customer(&self, id: &str, input: &CustomerInput) -> ApiResult<EntityRef> {
        let id = validate_id(id)?;
        let input = validate_customer(input)?;
        if self.customer_repo.update(id, &input)? == 0 {
            tracing::debug!(customer_id = id, "修改客户: 记录不存在，未做变更");
        }
        Ok(EntityRef { id: id.to_string() })
    }

    pub fn delete_customer(&self, id: &str) -> ApiResult<EntityRef> {
        let id = validate_id(id)?;
        if self.customer_repo.delete(id)? == 0 {
            tracing::debug!(customer_id = id, "删除客户: 记录不存在");
        }
        Ok(EntityRef { id: id.to_string() })
    }
}
