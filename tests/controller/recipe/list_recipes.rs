//! Tests for the list_recipes endpoint.
//!
//! Verifies the login requirement, that responses match the serialized store query
//! field-for-field, newest-first ordering, and that users only ever see their own recipes.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use recipe_api::{
    model::{api::ErrorDto, recipe::RecipeDto},
    server::{
        controller::recipe::list_recipes,
        data::recipe::{NewRecipe, RecipeRepository},
        model::{
            app::AppState,
            session::user::{SessionUserId, SESSION_USER_ID_KEY},
        },
    },
};
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};

use super::*;

/// Tests that login is required for retrieving recipes.
///
/// Expected: Err with 401 UNAUTHORIZED response containing only an error message
#[tokio::test]
async fn unauthorized_when_user_not_logged_in() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user(TEST_USER_EMAIL).await?;
    create_recipe(&test.db, user_model.id, NewRecipe::default()).await;

    let result = list_recipes(State(test.to_app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = body_json(resp).await;
    assert!(serde_json::from_value::<ErrorDto>(body.clone()).is_ok());
    assert!(!body.is_array());

    Ok(())
}

/// Tests that login is required even when the store is empty.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_with_empty_store() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let result = list_recipes(State(test.to_app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests retrieving the logged in user's recipes.
///
/// The response must equal every stored recipe, ordered by descending ID, serialized
/// through `RecipeDto`.
///
/// Expected: Ok with 200 OK response containing both recipes, newest first
#[tokio::test]
async fn retrieves_recipes_newest_first() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user(TEST_USER_EMAIL).await?;
    let first = create_recipe(&test.db, user_model.id, NewRecipe::default()).await;
    let second = create_recipe(&test.db, user_model.id, NewRecipe::default()).await;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = list_recipes(State(test.to_app_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let recipes: Vec<RecipeDto> = body_json(resp).await;

    let expected: Vec<RecipeDto> = entity::prelude::Recipe::find()
        .order_by_desc(entity::recipe::Column::Id)
        .all(&test.db)
        .await?
        .into_iter()
        .map(RecipeDto::from)
        .collect();
    assert_eq!(recipes, expected);
    assert_eq!(
        recipes.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );

    Ok(())
}

/// Tests that each recipe is serialized with exactly id, title, time_minutes & price.
///
/// Expected: Ok with 200 OK response whose single object has only the four fields
#[tokio::test]
async fn serializes_recipe_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user(TEST_USER_EMAIL).await?;
    let recipe_model = create_recipe(&test.db, user_model.id, NewRecipe::default()).await;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = list_recipes(State(test.to_app_state()), test.session).await;

    let resp = result.unwrap().into_response();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!([{
            "id": recipe_model.id,
            "title": "Sample recipe",
            "time_minutes": 10,
            "price": "5.99"
        }])
    );

    Ok(())
}

/// Tests that recipes returned are only for the authenticated user.
///
/// Another user's recipe is created before the logged in user's recipe.
///
/// Expected: Ok with 200 OK response containing exactly the logged in user's recipe
#[tokio::test]
async fn returns_only_recipes_for_logged_in_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user(TEST_USER_EMAIL).await?;
    let user_two_model = test.user().insert_user(TEST_USER_TWO_EMAIL).await?;
    create_recipe(
        &test.db,
        user_two_model.id,
        NewRecipe {
            title: "Recipe for user2".to_string(),
            ..Default::default()
        },
    )
    .await;
    let own_recipe = create_recipe(&test.db, user_model.id, NewRecipe::default()).await;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let state: AppState = test.to_app_state();
    let result = list_recipes(State(state.clone()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let recipes: Vec<RecipeDto> = body_json(resp).await;

    let expected: Vec<RecipeDto> = RecipeRepository::new(&state.db)
        .get_by_user_id(user_model.id)
        .await?
        .into_iter()
        .map(RecipeDto::from)
        .collect();
    assert_eq!(recipes, expected);
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, own_recipe.id);
    assert_eq!(recipes[0].title, own_recipe.title);

    Ok(())
}

/// Tests that another user's recipes created after the logged in user's are also excluded.
///
/// Expected: Ok with 200 OK response containing only the logged in user's recipes
#[tokio::test]
async fn excludes_recipes_created_later_by_other_users() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user(TEST_USER_EMAIL).await?;
    let user_two_model = test.user().insert_user(TEST_USER_TWO_EMAIL).await?;
    let own_first = create_recipe(&test.db, user_model.id, NewRecipe::default()).await;
    create_recipe(&test.db, user_two_model.id, NewRecipe::default()).await;
    let own_second = create_recipe(&test.db, user_model.id, NewRecipe::default()).await;
    create_recipe(&test.db, user_two_model.id, NewRecipe::default()).await;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = list_recipes(State(test.to_app_state()), test.session).await;

    let resp = result.unwrap().into_response();
    let recipes: Vec<RecipeDto> = body_json(resp).await;
    assert_eq!(
        recipes.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![own_second.id, own_first.id]
    );

    Ok(())
}

/// Tests that a logged in user without recipes receives an empty list.
///
/// Expected: Ok with 200 OK response containing an empty list
#[tokio::test]
async fn empty_list_for_user_without_recipes() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user(TEST_USER_EMAIL).await?;
    let user_two_model = test.user().insert_user(TEST_USER_TWO_EMAIL).await?;
    create_recipe(&test.db, user_two_model.id, NewRecipe::default()).await;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = list_recipes(State(test.to_app_state()), test.session).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let recipes: Vec<RecipeDto> = body_json(resp).await;
    assert!(recipes.is_empty());

    Ok(())
}

/// Tests that listing recipes does not change the store.
///
/// Expected: Recipe count unchanged after the request
#[tokio::test]
async fn does_not_modify_store() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user(TEST_USER_EMAIL).await?;
    create_recipe(&test.db, user_model.id, NewRecipe::default()).await;
    create_recipe(&test.db, user_model.id, NewRecipe::default()).await;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = list_recipes(State(test.to_app_state()), test.session).await;
    assert!(result.is_ok());

    let count = entity::prelude::Recipe::find().count(&test.db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests 401 response and session cleanup when the session user no longer exists.
///
/// Expected: Err with 401 UNAUTHORIZED response and session cleared
#[tokio::test]
async fn unauthorized_when_user_not_in_database() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let non_existent_user_id = 999;
    SessionUserId::insert(&test.session, non_existent_user_id)
        .await
        .unwrap();

    let result = list_recipes(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let session_user_id = SessionUserId::get(&test.session).await;
    assert!(matches!(session_user_id, Ok(None)));

    Ok(())
}

/// Tests that a session holding something other than a user ID is rejected like no login.
///
/// Expected: Err with 401 UNAUTHORIZED response, no recipe data, and session cleared
#[tokio::test]
async fn unauthorized_for_corrupt_session_user_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user(TEST_USER_EMAIL).await?;
    create_recipe(&test.db, user_model.id, NewRecipe::default()).await;
    test.session
        .insert(SESSION_USER_ID_KEY, "not-a-number")
        .await?;

    let result = list_recipes(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = body_json(resp).await;
    assert!(serde_json::from_value::<ErrorDto>(body.clone()).is_ok());
    assert!(!body.is_array());

    let session_user_id = SessionUserId::get(&test.session).await;
    assert!(matches!(session_user_id, Ok(None)));

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = list_recipes(State(test.to_app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
