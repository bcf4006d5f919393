use super::*;

/// Tests declining a pending request with a reason.
///
/// Expected: Ok(MentorshipRequest) with status declined and the stored reason
#[tokio::test]
async fn decline_stores_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentorship_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = create_student(db).await?;
    let (mentor, _) = create_mentor(db).await?;

    let request = MentorshipRequestFactory::new(db, student.id, mentor.id)
        .build()
        .await?;

    let service = MentorshipService::new(db);
    let declined = service
        .decline_request(
            &User::from_entity(mentor),
            request.id,
            "My mentee roster is full".to_string(),
        )
        .await?;

    assert_eq!(declined.status, RequestStatus::Declined);
    assert_eq!(declined.rejection_reason, "My mentee roster is full");

    Ok(())
}

/// Tests declining a request addressed to a different mentor.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn non_target_mentor_is_forbidden() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentorship_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = create_student(db).await?;
    let (mentor_a, _) = create_mentor(db).await?;
    let (mentor_b, _) = create_mentor(db).await?;

    let request = MentorshipRequestFactory::new(db, student.id, mentor_a.id)
        .build()
        .await?;

    let service = MentorshipService::new(db);
    let result = service
        .decline_request(&User::from_entity(mentor_b), request.id, String::new())
        .await;

    assert!(matches!(
        result,
        Err(AppError::RequestErr(RequestError::Forbidden(_)))
    ));

    Ok(())
}

/// Tests declining an already-declined request.
///
/// Expected: Err(InvalidStateTransition)
#[tokio::test]
async fn declined_request_cannot_be_declined_again() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentorship_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = create_student(db).await?;
    let (mentor, _) = create_mentor(db).await?;

    let request = MentorshipRequestFactory::new(db, student.id, mentor.id)
        .status(RequestStatus::Declined)
        .build()
        .await?;

    let service = MentorshipService::new(db);
    let result = service
        .decline_request(&User::from_entity(mentor), request.id, String::new())
        .await;

    assert!(matches!(
        result,
        Err(AppError::RequestErr(
            RequestError::InvalidStateTransition { .. }
        ))
    ));

    Ok(())
}
