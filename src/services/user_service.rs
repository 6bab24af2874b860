use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

use crate::{
    dto::users::UserPayload,
    entity::users::{ActiveModel, Column, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    models::User,
    state::AppState,
};

pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    let users = Users::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(user_from_entity)
        .collect();
    Ok(users)
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<User> {
    let user = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;
    Ok(user_from_entity(user))
}

pub async fn create_user(state: &AppState, payload: UserPayload) -> AppResult<User> {
    let user = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(user_id = user.id, "user created");
    Ok(user_from_entity(user))
}

pub async fn update_user(state: &AppState, id: i32, payload: UserPayload) -> AppResult<User> {
    let existing = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    let user = active.update(&state.orm).await?;

    Ok(user_from_entity(user))
}

/// Deleting a user that does not exist is not an error; the returned message says so.
pub async fn delete_user(state: &AppState, id: i32) -> AppResult<String> {
    let exists = Users::find_by_id(id).count(&state.orm).await? > 0;
    if !exists {
        return Ok(format!("User not found with id {id}"));
    }

    Users::delete_by_id(id).exec(&state.orm).await?;
    tracing::info!(user_id = id, "user deleted");
    Ok(format!("User deleted with id {id}"))
}

fn user_from_entity(model: UserModel) -> User {
    User {
        id: model.id,
        name: model.name,
    }
}
