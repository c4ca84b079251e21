use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

/// Schema of `common::types::Health`; keep the fields identical.
#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// A stored ice cream.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IceCreamDoc {
    pub id: i32,
    pub name: Option<String>,
    pub flavor: Option<String>,
    pub category: Option<String>,
    pub dairy_free: bool,
}

/// Body for create and replace. `id` is ignored on replace; omitted fields are cleared.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IceCreamInputDoc {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub flavor: Option<String>,
    pub category: Option<String>,
    pub dairy_free: Option<bool>,
}

/// Any JSON object. Fields other than `id` are stored verbatim.
#[derive(ToSchema)]
pub struct PersonDoc { pub id: Option<i32> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::ice_cream::create_ice_cream,
        crate::routes::ice_cream::get_ice_cream_by_id,
        crate::routes::ice_cream::update_ice_cream_by_id,
        crate::routes::ice_cream::list_ice_cream,
        crate::routes::person::add_person,
    ),
    components(
        schemas(
            HealthResponse,
            IceCreamDoc,
            IceCreamInputDoc,
            PersonDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "icecream"),
        (name = "person"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/icecream", "/icecream/{id}", "/addPerson"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn health_schema_matches_health_body() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let props = doc["components"]["schemas"]["HealthResponse"]["properties"]
            .as_object()
            .expect("HealthResponse properties");
        let mut documented: Vec<&str> = props.keys().map(String::as_str).collect();
        documented.sort_unstable();

        let body = serde_json::to_value(common::types::Health::ok()).unwrap();
        let mut actual: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        actual.sort_unstable();

        assert_eq!(documented, actual);
    }
}
