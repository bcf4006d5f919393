use super::*;

/// Tests accepting a request when it is the student's only one.
///
/// Expected: Ok(MentorshipRequest) with status accepted
#[tokio::test]
async fn accepts_sole_request() -> Result<(), DbErr> {
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
    let accepted = repo.accept_with_cascade(request.id, student.id).await?;

    assert_eq!(accepted.id, request.id);
    assert_eq!(accepted.status, RequestStatus::Accepted);

    Ok(())
}

/// Tests the cascade against a student with several pending requests.
///
/// Two simultaneously pending requests violate the application invariant and
/// can only be constructed through direct store manipulation; the cascade
/// must still repair the state by declining every competitor with a blank
/// rejection reason, leaving the accepted request as the sole active one.
///
/// Expected: competitor declined, accepted request is the only active row
#[tokio::test]
async fn declines_competing_pending_requests() -> Result<(), DbErr> {
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

    let repo = MentorshipRequestRepository::new(db);
    let accepted = repo.accept_with_cascade(target.id, student.id).await?;

    assert_eq!(accepted.status, RequestStatus::Accepted);

    let declined = repo.find_by_id(competitor.id).await?.unwrap();
    assert_eq!(declined.status, RequestStatus::Declined);
    assert!(declined.rejection_reason.is_empty());

    let remaining = repo.list_by_student(student.id).await?;
    let active: Vec<_> = remaining
        .iter()
        .filter(|r| r.status != RequestStatus::Declined)
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, target.id);

    Ok(())
}

/// Tests that the cascade only touches the accepting student's rows.
///
/// Another student's pending request to the same mentor must stay pending.
///
/// Expected: unrelated pending request unchanged
#[tokio::test]
async fn leaves_other_students_requests_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentorship_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student_a, _) = create_student(db).await?;
    let (student_b, _) = create_student(db).await?;
    let (mentor, _) = create_mentor(db).await?;

    let target = MentorshipRequestFactory::new(db, student_a.id, mentor.id)
        .build()
        .await?;
    let unrelated = MentorshipRequestFactory::new(db, student_b.id, mentor.id)
        .build()
        .await?;

    let repo = MentorshipRequestRepository::new(db);
    repo.accept_with_cascade(target.id, student_a.id).await?;

    let untouched = repo.find_by_id(unrelated.id).await?.unwrap();
    assert_eq!(untouched.status, RequestStatus::Pending);

    Ok(())
}

/// Tests that already-declined requests keep their rejection reason.
///
/// The cascade filters on pending status, so a previously declined request
/// with a mentor-written reason must not be rewritten.
///
/// Expected: declined request unchanged
#[tokio::test]
async fn does_not_rewrite_declined_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentorship_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = create_student(db).await?;
    let (mentor_a, _) = create_mentor(db).await?;
    let (mentor_b, _) = create_mentor(db).await?;

    let declined = MentorshipRequestFactory::new(db, student.id, mentor_b.id)
        .status(RequestStatus::Declined)
        .rejection_reason("Full up this semester")
        .build()
        .await?;
    let target = MentorshipRequestFactory::new(db, student.id, mentor_a.id)
        .build()
        .await?;

    let repo = MentorshipRequestRepository::new(db);
    repo.accept_with_cascade(target.id, student.id).await?;

    let unchanged = repo.find_by_id(declined.id).await?.unwrap();
    assert_eq!(unchanged.status, RequestStatus::Declined);
    assert_eq!(unchanged.rejection_reason, "Full up this semester");

    Ok(())
}
