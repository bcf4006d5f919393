use super::*;

/// Tests declining a request with a rejection reason.
///
/// Expected: Ok(MentorshipRequest) with status declined and the stored reason
#[tokio::test]
async fn declines_and_stores_reason() -> Result<(), DbErr> {
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

    let repo = MentorshipRequestRepository::new(db);
    let declined = repo
        .decline(request.id, "Not taking new mentees right now".to_string())
        .await?;

    assert_eq!(declined.status, RequestStatus::Declined);
    assert_eq!(declined.rejection_reason, "Not taking new mentees right now");

    Ok(())
}

/// Tests declining with an empty reason.
///
/// Expected: Ok(MentorshipRequest) with a blank rejection reason
#[tokio::test]
async fn declines_with_empty_reason() -> Result<(), DbErr> {
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

    let repo = MentorshipRequestRepository::new(db);
    let declined = repo.decline(request.id, String::new()).await?;

    assert_eq!(declined.status, RequestStatus::Declined);
    assert!(declined.rejection_reason.is_empty());

    Ok(())
}
