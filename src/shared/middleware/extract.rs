use std::str::FromStr;

use async_trait::async_trait;
use axum::{
    extract::{
        path::ErrorKind,
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, RawPathParams, Request,
    },
    http::{request::Parts, Uri},
    Json,
};
use serde::de::DeserializeOwned;

use crate::shared::errors::{AppError, ErrorResponse};

// =====================================================
// 요청 추출기
// =====================================================
// axum 기본 Json/Query/Path는 거부 시 평문 응답(415/422/400)을 돌려주므로,
// 거부 사유를 AppError::Validation(400, JSON 본문)으로 바꿔서 반환합니다.
// =====================================================

/// JSON 본문
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(json_rejection(rejection).into()),
        }
    }
}

/// 쿼리 스트링
#[derive(Debug, Clone, Copy, Default)]
pub struct AppQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::try_from_uri(&parts.uri) {
            Ok(Query(value)) => Ok(AppQuery(value)),
            Err(rejection) => Err(query_rejection::<T>(&parts.uri, rejection).into()),
        }
    }
}

/// 경로 파라미터
#[derive(Debug, Clone, Copy, Default)]
pub struct AppPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(AppPath(value)),
            Err(rejection) => {
                // 단일 값 파싱 실패에는 키가 없으므로 라우트의 파라미터 이름을 사용
                let single_key = RawPathParams::from_request_parts(parts, state)
                    .await
                    .ok()
                    .and_then(|params| {
                        let keys: Vec<String> = params.iter().map(|(key, _)| key.to_string()).collect();
                        (keys.len() == 1).then(|| keys[0].clone())
                    });
                Err(path_rejection(rejection, single_key).into())
            }
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    let text = rejection.body_text();
    let message = match &rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Request body must be JSON (Content-Type: application/json)".to_string()
        }
        _ => text.clone(),
    };

    AppError::Validation {
        field: field_from_serde_message(&text),
        message,
    }
}

/// 실패한 키를 찾기 위해 쿼리 쌍을 하나씩 다시 해석
/// Every query struct here has only optional fields, so a single pair parses on its own.
fn query_rejection<T: DeserializeOwned>(uri: &Uri, rejection: QueryRejection) -> AppError {
    let field = uri.query().and_then(|query| {
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .find(|pair| {
                Uri::from_str(&format!("/?{}", pair))
                    .map(|single| Query::<T>::try_from_uri(&single).is_err())
                    .unwrap_or(true)
            })
            .map(|pair| pair.split('=').next().unwrap_or(pair).to_string())
    });

    let message = match &field {
        Some(field) => format!("Invalid query parameter '{}': {}", field, rejection.body_text()),
        None => rejection.body_text(),
    };

    AppError::Validation { field, message }
}

fn path_rejection(rejection: PathRejection, single_key: Option<String>) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(e) => {
            let field = match e.kind() {
                ErrorKind::ParseErrorAtKey { key, .. } | ErrorKind::InvalidUtf8InPathParam { key } => {
                    Some(key.clone())
                }
                _ => single_key.or_else(|| Some("path".to_string())),
            };
            AppError::Validation {
                field,
                message: e.body_text(),
            }
        }
        other => AppError::Internal(anyhow::anyhow!("path extraction failed: {}", other.body_text())),
    }
}

/// serde 에러 메시지에서 필드 이름 추출
/// "missing field `reason`" → reason, "...target type: orderIds: invalid type" → orderIds
fn field_from_serde_message(text: &str) -> Option<String> {
    for marker in ["missing field `", "unknown field `"] {
        if let Some(start) = text.find(marker) {
            let rest = &text[start + marker.len()..];
            return rest.split('`').next().map(str::to_string);
        }
    }

    let detail = text.split("target type: ").nth(1)?;
    let (path, _) = detail.split_once(": ")?;
    let path = path.trim();
    if path.is_empty() || path == "." || path.contains(' ') {
        return None;
    }
    Some(path.to_string())
}
