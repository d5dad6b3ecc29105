// ==========================================
// Pressia 洗衣店管理系统 - 价目表 API
// ==========================================
// 改价不影响历史订单（订单明细按值拷贝）
// ==========================================

use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::response::EntityRef;
use crate::api::validator::{validate_id, validate_item_type};
use crate::domain::item_type::{ItemType, ItemTypeInput};
use crate::repository::item_type_repo::ItemTypeRepository;

pub struct ItemTypeApi {
    item_type_repo: Arc<ItemTypeRepository>,
}

impl ItemTypeApi {
    pub fn new(item_type_repo: Arc<ItemTypeRepository>) -> Self {
        Self { item_type_repo }
    }

    /// 全部条目（按分类、名称排序）
    pub fn get_item_types(&self) -> ApiResult<Vec<ItemType>> {
        Ok(self.item_type_repo.find_all()?)
    }

    pub fn create_item_type(&self, input: &ItemTypeInput) -> ApiResult<ItemType> {
        let input = validate_item_type(input)?;
        let item = self.item_type_repo.insert(&input)?;
        tracing::info!(item_type_id = %item.id, name = %item.name, price = item.price, "价目表条目已新增");
        Ok(item)
    }

    pub fn update_item_type(&self, id: &str, input: &ItemTypeInput) -> ApiResult<EntityRef> {
        let id = validate_id(id)?;
        let input = validate_item_type(input)?;
        if self.item_type_repo.update(id, &input)? == 0 {
            tracing::debug!(item_type_id = id, "修改价目表条目: 记录不存在，未做变更");
        }
        Ok(EntityRef { id: id.to_string() })
    }

    pub fn delete_item_type(&self, id: &str) -> ApiResult<EntityRef> {
        let id = validate_id(id)?;
        if self.item_type_repo.delete(id)? == 0 {
            tracing::debug!(item_type_id = id, "删除价目表条目: 记录不存在");
        }
        Ok(EntityRef { id: id.to_string() })
    }
}
