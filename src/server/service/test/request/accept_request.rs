use super::*;

/// Tests accepting a pending request as the target mentor.
///
/// A competing pending request of the same student (constructed directly at
/// the store, bypassing the create invariant) must be auto-declined.
///
/// Expected: target accepted, competitor declined
#[tokio::test]
async fn accept_cascades_to_competing_pendings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentorship_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = create_student(db).await?;
    let (mentor_a, _) = create_mentor(db).await?;
    let (mentor_b, _) = create_mentor(db).await?;

    let target = MentorshipRequestFactory::new(db, student.id, mentor_a.id)
        .build()
        .await?;
    let competitor = MentorshipRequestFactory::new(db, student.id, mentor_b.id)
        .build()
        .await?;

    let service = MentorshipService::new(db);
    let accepted = service
        .accept_request(&User::from_entity(mentor_a), target.id)
        .await?;

    assert_eq!(accepted.status, RequestStatus::Accepted);

    let requests = service
        .list_for_mentor(&User::from_entity(mentor_b))
        .await?;
    let declined = requests
        .iter()
        .find(|r| r.request.id == competitor.id)
        .unwrap();
    assert_eq!(declined.request.status, RequestStatus::Declined);
    assert!(declined.request.rejection_reason.is_empty());

    Ok(())
}

/// Tests accepting a request addressed to a different mentor.
///
/// Expected: Err(Forbidden), request stays pending
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
        .accept_request(&User::from_entity(mentor_b), request.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::RequestErr(RequestError::Forbidden(_)))
    ));

    Ok(())
}

/// Tests accepting a request that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_request_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentorship_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor, _) = create_mentor(db).await?;

    let service = MentorshipService::new(db);
    let result = service
        .accept_request(&User::from_entity(mentor), 999999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests accepting a request that is no longer pending.
///
/// A double accept (or accept after decline) must not re-trigger the
/// cascade on a terminal request.
///
/// Expected: Err(InvalidStateTransition)
#[tokio::test]
async fn non_pending_request_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentorship_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = create_student(db).await?;
    let (mentor, _) = create_mentor(db).await?;

    let request = MentorshipRequestFactory::new(db, student.id, mentor.id)
        .status(RequestStatus::Accepted)
        .build()
        .await?;

    let service = MentorshipService::new(db);
    let result = service
        .accept_request(&User::from_entity(mentor), request.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::RequestErr(
            RequestError::InvalidStateTransition { .. }
        ))
    ));

    Ok(())
}
