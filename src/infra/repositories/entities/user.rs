//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Credentials, User, UserInDb};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub salt: String,
    pub hashed_password: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub image: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain record
impl From<Model> for UserInDb {
    fn from(model: Model) -> Self {
        UserInDb {
            id: model.id,
            user: User {
                username: model.username,
                email: model.email,
                bio: model.bio,
                image: model.image,
            },
            credentials: Credentials::from_parts(model.salt, model.hashed_password),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
