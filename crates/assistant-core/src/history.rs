//! Selecting which part of a conversation is sent with a request.
//!
//! The session log itself is append-only; these helpers only choose a
//! borrowed slice of it.

use crate::message::{ChatMessage, Role};

/// Drop display-only model messages (greetings) that precede the first
/// user message. The result always starts with a user turn or is empty.
pub fn forwardable(history: &[ChatMessage]) -> &[ChatMessage] {
    let start = history
        .iter()
        .position(|m| m.role == Role::User)
        .unwrap_or(history.len());
    &history[start..]
}

/// Keep only the last `max_turns` turns, where a turn starts at a user
/// message. `0` keeps everything.
pub fn window(history: &[ChatMessage], max_turns: usize) -> &[ChatMessage] {
    if max_turns == 0 {
        return history;
    }

    let mut turns = 0;
    for (index, message) in history.iter().enumerate().rev() {
        if message.role == Role::User {
            turns += 1;
            if turns == max_turns {
                return &history[index..];
            }
        }
    }

    history
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation(turns: usize) -> Vec<ChatMessage> {
        let mut history = vec![ChatMessage::model("Greetings!")];
        for i in 1..=turns {
            history.push(ChatMessage::user(format!("question {}", i)));
            history.push(ChatMessage::model(format!("answer {}", i)));
        }
        history
    }

    #[test]
    fn test_forwardable_skips_greeting() {
        let history = conversation(2);
        let forwarded = forwardable(&history);
        assert_eq!(forwarded.len(), 4);
        assert_eq!(forwarded[0].role, Role::User);
    }

    #[test]
    fn test_forwardable_only_greeting() {
        let history = vec![ChatMessage::model("Greetings!")];
        assert!(forwardable(&history).is_empty());
        assert!(forwardable(&[]).is_empty());
    }

    #[test]
    fn test_window_keeps_last_turns() {
        let history = conversation(5);
        let windowed = window(forwardable(&history), 2);
        assert_eq!(windowed.len(), 4);
        assert_eq!(windowed[0].text, "question 4");
        assert_eq!(windowed[3].text, "answer 5");
    }

    #[test]
    fn test_window_zero_is_unbounded() {
        let history = conversation(5);
        assert_eq!(window(&history, 0).len(), history.len());
    }

    #[test]
    fn test_window_larger_than_history() {
        let history = conversation(2);
        assert_eq!(window(&history, 10).len(), history.len());
    }
}
