//! Behavioral tests for the conversation buffer
//!
//! These tests drive `ConversationBuffer` through a mocked completion client
//! and check the context invariants: fixed system message, bounded size,
//! eviction order, and request contents.

mod common;

use ares_chat::memory::{ConversationBuffer, DEFAULT_INITIAL_CONTEXT};
use ares_chat::types::{AppError, Message, MessageRole};
use common::mocks::MockLLMClient;
use rstest::rstest;

fn roles(buffer: &ConversationBuffer) -> Vec<MessageRole> {
    buffer.messages().iter().map(|m| m.role).collect()
}

// =============================================================================
// Append and eviction
// =============================================================================

#[rstest]
#[case(1)]
#[case(19)]
#[case(20)]
#[case(21)]
#[case(57)]
fn test_system_message_survives_appends(#[case] appends: usize) {
    let mut buffer = ConversationBuffer::new(DEFAULT_INITIAL_CONTEXT);
    let original = buffer.system_message().clone();

    for i in 0..appends {
        let role = if i % 2 == 0 {
            MessageRole::User
        } else {
            MessageRole::Assistant
        };
        buffer.append(role, format!("message {}", i));

        assert_eq!(buffer.messages()[0], original);
        assert!(buffer.len() <= 20);
    }
}

#[test]
fn test_twenty_first_message_evicts_index_one() {
    let mut buffer = ConversationBuffer::new("sys");
    for i in 1..20 {
        buffer.append(MessageRole::User, format!("m{}", i));
    }
    assert_eq!(buffer.len(), 20);

    let before = buffer.messages().to_vec();
    buffer.append(MessageRole::User, "m20");

    assert_eq!(buffer.len(), 20);
    assert_eq!(buffer.messages()[0], before[0]);
    // "m1" (old index 1) is gone, everything else shifted down by one
    assert_eq!(&buffer.messages()[1..19], &before[2..20]);
    assert_eq!(buffer.messages()[19], Message::user("m20"));
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(5)]
#[case(50)]
fn test_custom_capacity_is_respected(#[case] capacity: usize) {
    let mut buffer = ConversationBuffer::with_capacity("sys", capacity).unwrap();

    for i in 0..(capacity * 3) {
        buffer.append(MessageRole::User, i.to_string());
        assert!(buffer.len() <= capacity);
    }

    assert_eq!(buffer.len(), capacity);
    assert_eq!(buffer.system_message().content, "sys");
    assert_eq!(
        buffer.messages().last().unwrap().content,
        (capacity * 3 - 1).to_string()
    );
}

#[rstest]
#[case(0)]
#[case(1)]
fn test_capacity_too_small(#[case] capacity: usize) {
    let result = ConversationBuffer::with_capacity("sys", capacity);
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_buffers_are_independent() {
    let mut first = ConversationBuffer::new("first");
    let second = ConversationBuffer::new("second");

    first.append(MessageRole::User, "only in first");

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert_eq!(second.system_message().content, "second");
}

// =============================================================================
// Ask
// =============================================================================

#[tokio::test]
async fn test_ask_echo_round_trip() {
    let client = MockLLMClient::echo();
    let mut buffer = ConversationBuffer::new(DEFAULT_INITIAL_CONTEXT);

    let reply = buffer.ask(&client, "hello").await.unwrap();

    assert_eq!(reply, "ECHO:hello");
    let messages = buffer.messages();
    assert_eq!(messages[messages.len() - 2], Message::user("hello"));
    assert_eq!(messages[messages.len() - 1], Message::assistant("ECHO:hello"));
}

#[tokio::test]
async fn test_ask_appends_user_then_assistant() {
    let client = MockLLMClient::new("ok");
    let mut buffer = ConversationBuffer::new("sys");

    buffer.ask(&client, "question").await.unwrap();

    assert_eq!(
        roles(&buffer),
        vec![MessageRole::System, MessageRole::User, MessageRole::Assistant]
    );
}

#[tokio::test]
async fn test_ask_two_plus_two_scenario() {
    let client = MockLLMClient::new("4");
    let mut buffer = ConversationBuffer::new(DEFAULT_INITIAL_CONTEXT);

    let reply = buffer.ask(&client, "2+2?").await.unwrap();

    assert_eq!(reply, "4");
    assert_eq!(
        buffer.messages(),
        &[
            Message::system(DEFAULT_INITIAL_CONTEXT),
            Message::user("2+2?"),
            Message::assistant("4"),
        ]
    );
}

#[tokio::test]
async fn test_twenty_five_asks_stay_bounded() {
    let client = MockLLMClient::new("constant");
    let mut buffer = ConversationBuffer::new(DEFAULT_INITIAL_CONTEXT);

    for i in 0..25 {
        buffer.ask(&client, &format!("prompt {}", i)).await.unwrap();
    }

    assert_eq!(buffer.len(), 20);
    assert_eq!(buffer.messages()[0], Message::system(DEFAULT_INITIAL_CONTEXT));
    assert_eq!(client.call_count(), 25);
}

#[tokio::test]
async fn test_request_starts_with_system_and_ends_with_prompt() {
    let client = MockLLMClient::new("reply");
    let mut buffer = ConversationBuffer::new("sys");

    for i in 0..15 {
        buffer.ask(&client, &format!("prompt {}", i)).await.unwrap();
    }

    for (i, request) in client.requests().iter().enumerate() {
        assert_eq!(request.first(), Some(&Message::system("sys")));
        assert_eq!(request.last(), Some(&Message::user(format!("prompt {}", i))));
        assert!(request.len() <= 20);
    }
}

#[tokio::test]
async fn test_request_carries_prior_turns() {
    let client = MockLLMClient::echo();
    let mut buffer = ConversationBuffer::new("sys");

    buffer.ask(&client, "first").await.unwrap();
    buffer.ask(&client, "second").await.unwrap();

    let requests = client.requests();
    assert_eq!(
        requests[1],
        vec![
            Message::system("sys"),
            Message::user("first"),
            Message::assistant("ECHO:first"),
            Message::user("second"),
        ]
    );
}

#[tokio::test]
async fn test_ask_failure_propagates() {
    let client = MockLLMClient::failing();
    let mut buffer = ConversationBuffer::new("sys");

    let result = buffer.ask(&client, "hello").await;

    match result {
        Err(AppError::LLM(msg)) => assert!(msg.contains("Mock LLM failure")),
        other => panic!("expected LLM error, got {:?}", other),
    }
    // user turn was recorded before the request, no assistant turn after it
    assert_eq!(roles(&buffer), vec![MessageRole::System, MessageRole::User]);
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_ask_after_failure_recovers() {
    let client = MockLLMClient::scripted(vec![Err("rate limited"), Ok("fine now")]);
    let mut buffer = ConversationBuffer::new("sys");

    assert!(buffer.ask(&client, "one").await.is_err());
    let reply = buffer.ask(&client, "two").await.unwrap();

    assert_eq!(reply, "fine now");
    assert_eq!(buffer.messages().last(), Some(&Message::assistant("fine now")));
}

// =============================================================================
// Inspection
// =============================================================================

#[tokio::test]
async fn test_inspection_does_not_mutate() {
    let client = MockLLMClient::echo();
    let mut buffer = ConversationBuffer::new("sys");
    buffer.ask(&client, "a").await.unwrap();
    buffer.ask(&client, "b").await.unwrap();

    let before = buffer.clone();
    let first: Vec<(usize, Message)> = buffer
        .context_entries()
        .map(|(i, m)| (i, m.clone()))
        .collect();
    let _ = buffer.format_context();
    let second: Vec<(usize, Message)> = buffer
        .context_entries()
        .map(|(i, m)| (i, m.clone()))
        .collect();

    assert_eq!(buffer, before);
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            (0, Message::system("sys")),
            (1, Message::user("a")),
            (3, Message::user("b")),
        ]
    );
}
