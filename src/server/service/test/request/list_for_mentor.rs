use super::*;

/// Tests listing a mentor's incoming requests enriched with student summaries.
///
/// Expected: Ok(Vec) with each student's profile summary attached
#[tokio::test]
async fn enriches_with_student_summary() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentorship_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, student_profile) = create_student(db).await?;
    let (mentor, _) = create_mentor(db).await?;

    MentorshipRequestFactory::new(db, student.id, mentor.id)
        .message("Interested in embedded work")
        .build()
        .await?;

    let service = MentorshipService::new(db);
    let requests = service.list_for_mentor(&User::from_entity(mentor)).await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].request.message, "Interested in embedded work");
    let counterpart = requests[0].counterpart.as_ref().unwrap();
    assert_eq!(counterpart.user_id, student.id);
    assert_eq!(counterpart.name, student_profile.name);

    Ok(())
}

/// Tests listing for a mentor with no incoming requests.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn empty_without_incoming_requests() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentorship_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor, _) = create_mentor(db).await?;

    let service = MentorshipService::new(db);
    let requests = service.list_for_mentor(&User::from_entity(mentor)).await?;

    assert!(requests.is_empty());

    Ok(())
}
