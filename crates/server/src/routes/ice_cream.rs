use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use service::errors::ServiceError;
use service::ice_cream::{IceCream, IceCreamDraft};

use crate::errors::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/icecream", get(list_ice_cream).post(create_ice_cream))
        .route("/icecream/:id", get(get_ice_cream_by_id).put(update_ice_cream_by_id))
}

/// `true`/`false` in any letter case select a filter; anything else means "no filter".
pub fn parse_dairy_free(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some(v) if v.eq_ignore_ascii_case("true") => Some(true),
        Some(v) if v.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Filter selected by the raw query pairs. A repeated `dairy_free` is never
/// a single literal, so it selects no filter.
pub fn dairy_free_filter(params: &[(String, String)]) -> Option<bool> {
    let mut values = params.iter().filter(|(k, _)| k == "dairy_free").map(|(_, v)| v.as_str());
    match (values.next(), values.next()) {
        (Some(only), None) => parse_dairy_free(Some(only)),
        _ => None,
    }
}

/// 创建冰淇淋记录（id 由存储分配）
#[utoipa::path(
    post,
    path = "/icecream",
    tag = "icecream",
    request_body = crate::openapi::IceCreamInputDoc,
    responses((status = 200, body = crate::openapi::IceCreamDoc))
)]
pub async fn create_ice_cream(
    State(state): State<AppState>,
    Json(input): Json<IceCreamDraft>,
) -> Result<Json<IceCream>, ApiError> {
    let saved = state.ice_creams.create_new_ice_cream(input).await?;
    Ok(Json(saved))
}

/// 获取指定记录
#[utoipa::path(
    get,
    path = "/icecream/{id}",
    tag = "icecream",
    params(("id" = i32, Path, description = "Ice cream id")),
    responses((status = 200, body = crate::openapi::IceCreamDoc), (status = 404, description = "No record with this id"))
)]
pub async fn get_ice_cream_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<IceCream>, ApiError> {
    match state.ice_creams.get_ice_cream_by_id(id).await {
        Ok(rec) => Ok(Json(rec)),
        Err(ServiceError::NotFound(_)) => Err(ApiError::NotFound),
        Err(e) => Err(e.into()),
    }
}

/// 整体替换指定记录；不存在时返回 404，不会新建
#[utoipa::path(
    put,
    path = "/icecream/{id}",
    tag = "icecream",
    params(("id" = i32, Path, description = "Ice cream id")),
    request_body = crate::openapi::IceCreamInputDoc,
    responses((status = 200, body = crate::openapi::IceCreamDoc), (status = 404, description = "No record with this id"))
)]
pub async fn update_ice_cream_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<IceCreamDraft>,
) -> Result<Json<IceCream>, ApiError> {
    match state.ice_creams.update_ice_cream_by_id(id, input).await {
        Ok(rec) => Ok(Json(rec)),
        Err(ServiceError::NotFound(_)) => Err(ApiError::NotFound),
        Err(e) => Err(e.into()),
    }
}

/// 列出记录，可按 dairy_free 过滤
#[utoipa::path(
    get,
    path = "/icecream",
    tag = "icecream",
    params(("dairy_free" = Option<String>, Query, description = "`true` or `false`, case-insensitive; other values are ignored")),
    responses((status = 200, body = [crate::openapi::IceCreamDoc]))
)]
pub async fn list_ice_cream(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<IceCream>>, ApiError> {
    let rows = match dairy_free_filter(&params) {
        Some(flag) => state.ice_creams.get_all_ice_cream_by_dairy_free(flag).await?,
        None => state.ice_creams.get_all_ice_cream().await?,
    };
    Ok(Json(rows))
}
