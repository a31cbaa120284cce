//! 统一响应信封
//! 所有接口（包括错误）都返回 `{code, msg, data?}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

pub const CODE_SUCCESS: u16 = 200;

/// 通用返回结构
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse<()> {
    /// 仅返回成功消息
    pub fn ok_msg(msg: impl Into<String>) -> Self {
        Self {
            code: CODE_SUCCESS,
            msg: msg.into(),
            data: None,
        }
    }

    /// 自定义错误码与消息
    pub fn fail(code: u16, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// 返回成功数据
    pub fn ok_data(data: T) -> Self {
        Self {
            code: CODE_SUCCESS,
            msg: "success".to_string(),
            data: Some(data),
        }
    }

    /// 失败但仍附带数据（例如就绪探针的检查明细）
    pub fn fail_with(code: u16, msg: impl Into<String>, data: T) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: Some(data),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        // HTTP 状态码与 code 保持一致
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
