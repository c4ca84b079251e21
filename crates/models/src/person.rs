use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ModelError;

/// A registry entry. Everything besides the key is kept verbatim in
/// `attributes`, which serializes flattened next to `id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "JsonBinary")]
    #[serde(flatten)]
    pub attributes: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Person = Model;

/// Request-side person: an optional id plus whatever other fields were sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonDraft {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl PersonDraft {
    pub fn into_record(self, id: i32) -> Model {
        Model { id, attributes: Value::Object(self.attributes) }
    }
}

/// Same save semantics as `ice_cream::save`.
pub async fn save(db: &DatabaseConnection, draft: PersonDraft) -> Result<Model, ModelError> {
    let attributes = Value::Object(draft.attributes);
    if let Some(id) = draft.id {
        if let Some(found) = Entity::find_by_id(id).one(db).await? {
            let mut am: ActiveModel = found.into();
            am.attributes = Set(attributes);
            return Ok(am.update(db).await?);
        }
    }
    let am = ActiveModel { id: NotSet, attributes: Set(attributes) };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}
