use super::*;
use chrono::{Duration, Utc};

/// Tests fetching a matched pair's conversation.
///
/// Both directions come back in ascending timestamp order.
///
/// Expected: Ok(Vec) ordered oldest first
#[tokio::test]
async fn returns_conversation_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, mentor, _) = create_matched_pair(db).await?;

    let base = Utc::now();
    MessageFactory::new(db, student.id, mentor.id)
        .content(Some("First".to_string()))
        .timestamp(base)
        .build()
        .await?;
    MessageFactory::new(db, mentor.id, student.id)
        .content(Some("Second".to_string()))
        .timestamp(base + Duration::seconds(10))
        .build()
        .await?;

    let service = MessageService::new(db);
    let messages = service
        .fetch_history(&User::from_entity(student), mentor.id)
        .await?;

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content.as_deref(), Some("First"));
    assert_eq!(messages[1].content.as_deref(), Some("Second"));
    assert!(messages[0].timestamp <= messages[1].timestamp);

    Ok(())
}

/// Tests that the mentor side may also read the conversation.
///
/// The accepted link authorizes both directions.
///
/// Expected: Ok(Vec)
#[tokio::test]
async fn mentor_can_fetch_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, mentor, _) = create_matched_pair(db).await?;

    MessageFactory::new(db, student.id, mentor.id).build().await?;

    let service = MessageService::new(db);
    let messages = service
        .fetch_history(&User::from_entity(mentor), student.id)
        .await?;

    assert_eq!(messages.len(), 1);

    Ok(())
}

/// Tests fetching a conversation with an unrelated user.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn unrelated_pair_is_forbidden() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = create_student(db).await?;
    let (mentor, _) = create_mentor(db).await?;

    let service = MessageService::new(db);
    let result = service
        .fetch_history(&User::from_entity(student), mentor.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::MessageErr(MessageError::Forbidden(_)))
    ));

    Ok(())
}

/// Tests fetching a conversation with a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_counterpart_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = create_student(db).await?;

    let service = MessageService::new(db);
    let result = service
        .fetch_history(&User::from_entity(student), 999999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
