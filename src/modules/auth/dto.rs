use crate::database::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// The two static roles of the dashboard, stored on the `role` column
/// of the user table. Staff members handle the day to day bookkeeping,
/// destructive and administrative operations are admin only.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Staff,
}

#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(title = "User")]
pub struct UserDto {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub role: UserRole,
}

impl From<models::User> for UserDto {
    fn from(user: models::User) -> Self {
        UserDto {
            id: user.id,
            created_at: user.created_at,
            email: user.email,
            // unknown roles in old rows degrade to the least privileged one
            role: UserRole::from_str(&user.role).unwrap_or(UserRole::Staff),
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct SignIn {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct SignInResponse {
    pub user: UserDto,
}
