use super::*;

fn pdf_attachment(size_bytes: u64) -> Attachment {
    Attachment {
        name: "notes.pdf".to_string(),
        size_bytes,
        mime_type: "application/pdf".to_string(),
    }
}

/// Tests sending a text message between a matched pair.
///
/// Expected: Ok(Message) with the content stored
#[tokio::test]
async fn student_can_message_matched_mentor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, mentor, _) = create_matched_pair(db).await?;

    let service = MessageService::new(db);
    let message = service
        .send_message(
            &User::from_entity(student.clone()),
            mentor.id,
            Some("When can we schedule our first call?".to_string()),
            None,
        )
        .await?;

    assert_eq!(message.sender_id, student.id);
    assert_eq!(message.receiver_id, mentor.id);
    assert_eq!(
        message.content.as_deref(),
        Some("When can we schedule our first call?")
    );

    Ok(())
}

/// Tests sending to a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_receiver_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = create_student(db).await?;

    let service = MessageService::new(db);
    let result = service
        .send_message(
            &User::from_entity(student),
            999999,
            Some("hello".to_string()),
            None,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests sending between two students.
///
/// Expected: Err(InvalidRolePair)
#[tokio::test]
async fn same_role_pair_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student_a, _) = create_student(db).await?;
    let (student_b, _) = create_student(db).await?;

    let service = MessageService::new(db);
    let result = service
        .send_message(
            &User::from_entity(student_a),
            student_b.id,
            Some("hello".to_string()),
            None,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::MessageErr(MessageError::InvalidRolePair))
    ));

    Ok(())
}

/// Tests sending between an unrelated student and mentor.
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
        .send_message(
            &User::from_entity(student),
            mentor.id,
            Some("hello".to_string()),
            None,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::MessageErr(MessageError::Forbidden(_)))
    ));

    Ok(())
}

/// Tests the capacity guard with six accepted mentees.
///
/// The guard fires on strictly-greater-than five, so a sixth accepted
/// mentorship exists but blocks the mentor from sending.
///
/// Expected: Err(CapacityExceeded)
#[tokio::test]
async fn mentor_with_six_mentees_is_blocked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor, _) = create_mentor(db).await?;
    let mut mentees = Vec::new();
    for _ in 0..6 {
        let (student, _) = create_student(db).await?;
        MentorshipRequestFactory::new(db, student.id, mentor.id)
            .status(RequestStatus::Accepted)
            .build()
            .await?;
        mentees.push(student);
    }

    let service = MessageService::new(db);
    let result = service
        .send_message(
            &User::from_entity(mentor),
            mentees[0].id,
            Some("hello".to_string()),
            None,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::MessageErr(MessageError::CapacityExceeded))
    ));

    Ok(())
}

/// Tests the capacity boundary with exactly five accepted mentees.
///
/// Five accepted mentees is within the limit; sending succeeds.
///
/// Expected: Ok(Message)
#[tokio::test]
async fn mentor_with_five_mentees_can_send() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor, _) = create_mentor(db).await?;
    let mut mentees = Vec::new();
    for _ in 0..5 {
        let (student, _) = create_student(db).await?;
        MentorshipRequestFactory::new(db, student.id, mentor.id)
            .status(RequestStatus::Accepted)
            .build()
            .await?;
        mentees.push(student);
    }

    let service = MessageService::new(db);
    let message = service
        .send_message(
            &User::from_entity(mentor),
            mentees[4].id,
            Some("hello".to_string()),
            None,
        )
        .await?;

    assert_eq!(message.receiver_id, mentees[4].id);

    Ok(())
}

/// Tests that the capacity guard only applies to mentor senders.
///
/// A student may still message their over-capacity mentor.
///
/// Expected: Ok(Message)
#[tokio::test]
async fn student_can_message_over_capacity_mentor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor, _) = create_mentor(db).await?;
    let mut mentees = Vec::new();
    for _ in 0..6 {
        let (student, _) = create_student(db).await?;
        MentorshipRequestFactory::new(db, student.id, mentor.id)
            .status(RequestStatus::Accepted)
            .build()
            .await?;
        mentees.push(student);
    }

    let service = MessageService::new(db);
    let message = service
        .send_message(
            &User::from_entity(mentees[5].clone()),
            mentor.id,
            Some("hello".to_string()),
            None,
        )
        .await?;

    assert_eq!(message.sender_id, mentees[5].id);

    Ok(())
}

/// Tests sending with neither content nor attachment.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn empty_payload_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, mentor, _) = create_matched_pair(db).await?;

    let service = MessageService::new(db);
    let result = service
        .send_message(&User::from_entity(student), mentor.id, None, None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::MessageErr(MessageError::Validation(_)))
    ));

    Ok(())
}

/// Tests that an empty content string counts as absent.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn blank_content_without_file_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, mentor, _) = create_matched_pair(db).await?;

    let service = MessageService::new(db);
    let result = service
        .send_message(
            &User::from_entity(student),
            mentor.id,
            Some(String::new()),
            None,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::MessageErr(MessageError::Validation(_)))
    ));

    Ok(())
}

/// Tests sending an attachment without text content.
///
/// Expected: Ok(Message) with the attachment reference stored
#[tokio::test]
async fn attachment_alone_is_sufficient() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, mentor, _) = create_matched_pair(db).await?;

    let service = MessageService::new(db);
    let message = service
        .send_message(
            &User::from_entity(student),
            mentor.id,
            None,
            Some(pdf_attachment(4096)),
        )
        .await?;

    assert!(message.content.is_none());
    assert_eq!(message.file_name.as_deref(), Some("notes.pdf"));
    assert_eq!(message.file_mime.as_deref(), Some("application/pdf"));

    Ok(())
}

/// Tests sending an oversized attachment.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn oversized_attachment_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, mentor, _) = create_matched_pair(db).await?;

    let service = MessageService::new(db);
    let result = service
        .send_message(
            &User::from_entity(student),
            mentor.id,
            None,
            Some(pdf_attachment(2 * 1024 * 1024 + 1)),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::MessageErr(MessageError::Validation(_)))
    ));

    Ok(())
}

/// Tests sending an attachment with a disallowed MIME type.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn disallowed_mime_type_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, mentor, _) = create_matched_pair(db).await?;

    let service = MessageService::new(db);
    let result = service
        .send_message(
            &User::from_entity(student),
            mentor.id,
            None,
            Some(Attachment {
                name: "payload.exe".to_string(),
                size_bytes: 1024,
                mime_type: "application/x-msdownload".to_string(),
            }),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::MessageErr(MessageError::Validation(_)))
    ));

    Ok(())
}
