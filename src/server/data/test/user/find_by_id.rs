use super::*;

/// Tests finding an existing user by id.
///
/// Verifies that the repository retrieves a user record with its role
/// attachment when queried with an id that exists in the database.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .username("mentor_jane")
        .role(UserRole::Mentor)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.username, "mentor_jane");
    assert_eq!(user.role, UserRole::Mentor);

    Ok(())
}

/// Tests querying for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(999999).await?;

    assert!(user.is_none());

    Ok(())
}
