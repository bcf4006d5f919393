use super::*;

/// Tests fetching mentor profile summaries for a set of user ids.
///
/// Expected: Ok(Vec) containing only users with a mentor profile
#[tokio::test]
async fn returns_summaries_for_profiled_mentors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentorship_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = create_student(db).await?;
    let (mentor, profile) = create_mentor(db).await?;

    let repo = ProfileRepository::new(db);
    let summaries = repo.find_mentor_summaries(&[student.id, mentor.id]).await?;

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].user_id, mentor.id);
    assert_eq!(summaries[0].name, profile.name);
    assert!(!summaries[0].tags.is_empty());

    Ok(())
}
