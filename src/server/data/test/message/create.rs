use super::*;

/// Tests appending a text message to the delivery log.
///
/// Verifies the stored message carries a server-assigned timestamp.
///
/// Expected: Ok(Message) with content and no attachment
#[tokio::test]
async fn creates_text_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, mentor, _) = create_matched_pair(db).await?;
    let before = Utc::now();

    let repo = MessageRepository::new(db);
    let message = repo
        .create(SendMessageParam {
            sender_id: student.id,
            receiver_id: mentor.id,
            content: Some("Hi, thanks for accepting!".to_string()),
            attachment: None,
        })
        .await?;

    assert_eq!(message.sender_id, student.id);
    assert_eq!(message.receiver_id, mentor.id);
    assert_eq!(message.content.as_deref(), Some("Hi, thanks for accepting!"));
    assert!(message.file_name.is_none());
    assert!(message.timestamp >= before);

    Ok(())
}

/// Tests appending a message with an attachment reference.
///
/// Expected: Ok(Message) with file name and MIME type stored
#[tokio::test]
async fn creates_message_with_attachment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, mentor, _) = create_matched_pair(db).await?;

    let repo = MessageRepository::new(db);
    let message = repo
        .create(SendMessageParam {
            sender_id: mentor.id,
            receiver_id: student.id,
            content: None,
            attachment: Some(Attachment {
                name: "reading-list.pdf".to_string(),
                size_bytes: 4096,
                mime_type: "application/pdf".to_string(),
            }),
        })
        .await?;

    assert!(message.content.is_none());
    assert_eq!(message.file_name.as_deref(), Some("reading-list.pdf"));
    assert_eq!(message.file_mime.as_deref(), Some("application/pdf"));

    Ok(())
}
