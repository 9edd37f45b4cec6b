use chrono::{DateTime, Duration, Utc};

use chatline::application::ports::{ConversationRepository, RepositoryError};
use chatline::domain::{Conversation, ConversationId, Message, SenderType};
use chatline::infrastructure::persistence::InMemoryConversationRepository;

fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_714_564_800 + seconds, 0).unwrap()
}

fn message(conversation: &Conversation, text: &str, timestamp: DateTime<Utc>) -> Message {
    Message::new(
        conversation.id.clone(),
        text.to_string(),
        SenderType::User,
        conversation.owner_id.clone(),
        conversation.display_name.clone(),
        timestamp,
    )
}

#[tokio::test]
async fn given_new_conversation_when_created_then_readable_with_empty_history() {
    let repository = InMemoryConversationRepository::new();
    let conversation = Conversation::new("owner".to_string(), None, None, at(0));

    repository.create_conversation(&conversation).await.unwrap();

    let stored = repository.get_conversation(&conversation.id).await.unwrap();
    assert_eq!(stored, Some(conversation.clone()));
    assert!(repository.get_messages(&conversation.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn given_duplicate_id_when_creating_then_constraint_violation() {
    let repository = InMemoryConversationRepository::new();
    let conversation = Conversation::new("owner".to_string(), None, None, at(0));
    repository.create_conversation(&conversation).await.unwrap();

    let result = repository.create_conversation(&conversation).await;

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}

#[tokio::test]
async fn given_unknown_conversation_when_appending_then_not_found() {
    let repository = InMemoryConversationRepository::new();
    let orphan = Conversation::new("owner".to_string(), None, None, at(0));

    let result = repository.append_message(&message(&orphan, "hi", at(1))).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
async fn given_appends_when_reading_then_arrival_order_is_kept() {
    let repository = InMemoryConversationRepository::new();
    let conversation = Conversation::new("owner".to_string(), None, None, at(0));
    repository.create_conversation(&conversation).await.unwrap();

    let later = message(&conversation, "later", at(10));
    let earlier = message(&conversation, "earlier", at(5));
    repository.append_message(&later).await.unwrap();
    repository.append_message(&earlier).await.unwrap();

    let texts: Vec<String> = repository
        .get_messages(&conversation.id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.text)
        .collect();
    assert_eq!(texts, vec!["later", "earlier"]);
}

#[tokio::test]
async fn given_touch_when_reading_conversation_then_updated_at_advances_only() {
    let repository = InMemoryConversationRepository::new();
    let conversation = Conversation::new("owner".to_string(), None, None, at(0));
    repository.create_conversation(&conversation).await.unwrap();

    repository
        .touch_conversation(&conversation.id, at(0) + Duration::seconds(30))
        .await
        .unwrap();

    let stored = repository
        .get_conversation(&conversation.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.created_at, at(0));
    assert_eq!(stored.updated_at, at(30));
}

#[tokio::test]
async fn given_unknown_conversation_when_touching_then_not_found() {
    let repository = InMemoryConversationRepository::new();

    let result = repository
        .touch_conversation(&ConversationId::from_string("conv_missing"), at(0))
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_concurrent_appends_when_reading_then_no_message_is_lost() {
    let repository = std::sync::Arc::new(InMemoryConversationRepository::new());
    let conversation = Conversation::new("owner".to_string(), None, None, at(0));
    repository.create_conversation(&conversation).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..100 {
        let repository = std::sync::Arc::clone(&repository);
        let msg = message(&conversation, &format!("m{}", i), at(i));
        handles.push(tokio::spawn(async move {
            repository.append_message(&msg).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(repository.get_messages(&conversation.id).await.unwrap().len(), 100);
}
