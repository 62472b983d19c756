use axum::{extract::State, http::StatusCode, response::IntoResponse};
use recipe_api::{
    model::user::UserDto,
    server::{controller::user::get_me, model::session::user::SessionUserId},
};

use super::*;

/// Tests retrieving the logged in user.
///
/// Expected: Ok with 200 OK response containing the session user
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test.user().insert_user(TEST_USER_EMAIL).await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = get_me(State(test.to_app_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.id, user_model.id);
    assert_eq!(user.email, TEST_USER_EMAIL);

    Ok(())
}

/// Tests that login is required.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_when_user_not_logged_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_me(State(test.to_app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
