// ==========================================
// Pressia 洗衣店管理系统 - 桥接响应信封
// ==========================================
// 成功: { "success": true,  "data": ... }
// 失败: { "success": false, "error": "...", "code": "..." }
// 桥接命令永远返回信封，不向前端抛错
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success {
        success: bool,
        data: T,
    },
    Failure {
        success: bool,
        error: String,
        code: String,
    },
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse::Success {
            success: true,
            data,
        }
    }

    pub fn fail(err: &ApiError) -> Self {
        ApiResponse::Failure {
            success: false,
            error: err.to_string(),
            code: err.code().to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success { data, .. } => Some(data),
            ApiResponse::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResponse::Success { .. } => None,
            ApiResponse::Failure { error, .. } => Some(error),
        }
    }
}

impl<T> From<ApiResult<T>> for ApiResponse<T> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => ApiResponse::ok(data),
            Err(err) => {
                if err.is_storage_failure() {
                    tracing::error!(code = err.code(), "请求失败: {}", err);
                } else {
                    tracing::warn!(code = err.code(), "请求失败: {}", err);
                }
                ApiResponse::fail(&err)
            }
        }
    }
}

/// 新建实体时返回的引用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
}
