// ==========================================
// Pressia 洗衣店管理系统 - 表单输入校验
// ==========================================
// 红线: 校验在任何存储调用之前完成，失败时不落库
// 返回的字符串已 trim，调用方直接使用
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::customer::CustomerInput;
use crate::domain::expense::ExpenseInput;
use crate::domain::item_type::ItemTypeInput;
use crate::domain::order::{compute_total, CreateOrderRequest, NewOrder};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// 解析前端提交的原始表单
///
/// 结构不符（负数量、空日期、金额非数字等）按校验失败处理，不落库
pub fn parse_payload<T: DeserializeOwned>(payload: Value) -> ApiResult<T> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::InvalidInput(format!("formulaire mal formé: {}", e)))
}

/// 可选的过滤条件；缺省或 null 时取默认值
pub fn parse_optional_payload<T: DeserializeOwned + Default>(payload: Option<Value>) -> ApiResult<T> {
    match payload {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => parse_payload(value),
    }
}

fn required(value: &str, field: &str) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput(format!("le champ « {} » est obligatoire", field)));
    }
    Ok(trimmed.to_string())
}

fn positive_amount(value: f64, field: &str) -> ApiResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ApiError::InvalidInput(format!(
            "« {} » doit être supérieur à 0 (reçu {})",
            field, value
        )));
    }
    Ok(value)
}

/// 下单校验: 客户名必填、至少一条明细、数量 > 0、单价 > 0；总额由后端重算
pub fn validate_order(req: &CreateOrderRequest) -> ApiResult<NewOrder> {
    let customer_name = required(&req.customer_name, "nom du client")?;

    if req.items.is_empty() {
        return Err(ApiError::InvalidInput(
            "la commande doit contenir au moins un article".to_string(),
        ));
    }

    let mut items = Vec::with_capacity(req.items.len());
    for item in &req.items {
        let mut item = item.clone();
        item.name = required(&item.name, "article")?;
        if item.quantity == 0 {
            return Err(ApiError::InvalidInput(format!(
                "la quantité de « {} » doit être supérieure à 0",
                item.name
            )));
        }
        positive_amount(item.unit_price, &format!("prix de {}", item.name))?;
        items.push(item);
    }

    let customer_phone = req
        .customer_phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    Ok(NewOrder {
        customer_name,
        customer_phone,
        total_amount: compute_total(&items),
        items,
        pickup_date: req.pickup_date,
    })
}

pub fn validate_expense(input: &ExpenseInput) -> ApiResult<ExpenseInput> {
    Ok(ExpenseInput {
        description: required(&input.description, "description")?,
        amount: positive_amount(input.amount, "montant")?,
        category: required(&input.category, "catégorie")?,
        date: input.date,
    })
}

pub fn validate_item_type(input: &ItemTypeInput) -> ApiResult<ItemTypeInput> {
    Ok(ItemTypeInput {
        name: required(&input.name, "nom")?,
        price: positive_amount(input.price, "prix")?,
        category: required(&input.category, "catégorie")?,
    })
}

pub fn validate_customer(input: &CustomerInput) -> ApiResult<CustomerInput> {
    Ok(CustomerInput {
        first_name: required(&input.first_name, "prénom")?,
        last_name: required(&input.last_name, "nom")?,
        phone: required(&input.phone, "téléphone")?,
    })
}

/// 实体 ID 必须非空
pub fn validate_id(id: &str) -> ApiResult<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput("identifiant manquant".to_string()));
    }
    Ok(trimmed)
}
