use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A catalog entry as stored. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ice_cream")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub flavor: Option<String>,
    pub category: Option<String>,
    pub dairy_free: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type IceCream = Model;

/// Request-side shape of an ice cream: same fields, `id` optional.
///
/// Missing text fields deserialize to `None` and a missing `dairyFree` to
/// `false`, so saving a draft over an existing record replaces every field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IceCreamDraft {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub flavor: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub dairy_free: bool,
}

impl IceCreamDraft {
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    /// Materialize the draft under a known id.
    pub fn into_record(self, id: i32) -> Model {
        Model {
            id,
            name: self.name,
            flavor: self.flavor,
            category: self.category,
            dairy_free: self.dairy_free,
        }
    }

    fn apply(self, am: &mut ActiveModel) {
        am.name = Set(self.name);
        am.flavor = Set(self.flavor);
        am.category = Set(self.category);
        am.dairy_free = Set(self.dairy_free);
    }
}

/// Insert or overwrite.
///
/// A draft whose `id` names an existing row overwrites that row. Any other
/// draft is inserted and the database assigns the id.
pub async fn save(db: &DatabaseConnection, draft: IceCreamDraft) -> Result<Model, ModelError> {
    if let Some(id) = draft.id {
        if let Some(found) = Entity::find_by_id(id).one(db).await? {
            let mut am: ActiveModel = found.into();
            draft.apply(&mut am);
            return Ok(am.update(db).await?);
        }
    }
    let mut am = ActiveModel {
        id: NotSet,
        name: NotSet,
        flavor: NotSet,
        category: NotSet,
        dairy_free: NotSet,
    };
    draft.apply(&mut am);
    Ok(am.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_all_by_dairy_free(db: &DatabaseConnection, dairy_free: bool) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::DairyFree.eq(dairy_free))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_defaults_missing_fields() {
        let d: IceCreamDraft = serde_json::from_str(r#"{"name":"Vanilla"}"#).unwrap();
        assert_eq!(d.id, None);
        assert_eq!(d.name.as_deref(), Some("Vanilla"));
        assert_eq!(d.flavor, None);
        assert!(!d.dairy_free);
    }

    #[test]
    fn draft_reads_camel_case() {
        let d: IceCreamDraft =
            serde_json::from_str(r#"{"id":7,"name":"Sorbet","category":"fruit","dairyFree":true}"#).unwrap();
        assert_eq!(d.id, Some(7));
        assert_eq!(d.category.as_deref(), Some("fruit"));
        assert!(d.dairy_free);
    }

    #[test]
    fn record_writes_camel_case() {
        let rec = IceCreamDraft { name: Some("Mint".into()), dairy_free: true, ..Default::default() }.into_record(3);
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["id"], 3);
        assert_eq!(v["dairyFree"], true);
        assert!(v["flavor"].is_null());
        assert!(v.get("dairy_free").is_none());
    }

    #[test]
    fn into_record_ignores_draft_id() {
        let rec = IceCreamDraft::default().with_id(99).into_record(4);
        assert_eq!(rec.id, 4);
    }
}
