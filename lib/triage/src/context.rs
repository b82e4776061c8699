//! Conversation context assembly.
//!
//! Pure mapping from stored history to the message list sent to the
//! model: fixed system instruction first, replayed turns in order, new
//! user turn last. Rebuilt on every call, never persisted.

use samaritan_ai::ChatMessage;
use samaritan_conversation::HistoryEntry;

/// Maps a stored sender label to a model role.
///
/// Logs written by earlier frontends labelled assistant turns `"ai"`,
/// which chat-completion APIs reject; every other label passes through
/// unchanged.
#[must_use]
pub fn normalize_sender(sender: &str) -> &str {
    if sender == "ai" { "assistant" } else { sender }
}

/// Assembles the message list for one completion.
#[must_use]
pub fn assemble(system: &str, history: &[HistoryEntry], user_text: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(system));
    messages.extend(
        history
            .iter()
            .map(|entry| ChatMessage::new(normalize_sender(&entry.sender), entry.text.clone())),
    );
    messages.push(ChatMessage::user(user_text));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_history() -> Vec<HistoryEntry> {
        vec![
            HistoryEntry::new("user", "I have a fever"),
            HistoryEntry::new("ai", "How long have you had it?"),
            HistoryEntry::new("user", "Two days"),
        ]
    }

    #[test]
    fn system_first_new_turn_last() {
        let messages = assemble("instruction", &sample_history(), "It is getting worse");
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0], ChatMessage::system("instruction"));
        assert_eq!(
            messages.last().expect("non-empty"),
            &ChatMessage::user("It is getting worse")
        );
    }

    #[test]
    fn ai_label_normalizes_to_assistant() {
        let messages = assemble("instruction", &sample_history(), "next");
        assert_eq!(messages[2].role, "assistant");
        assert_eq!(messages[2].content, "How long have you had it?");
    }

    #[test]
    fn other_labels_pass_through() {
        let history = vec![HistoryEntry::new("observer", "noted")];
        let messages = assemble("instruction", &history, "next");
        assert_eq!(messages[1].role, "observer");
    }

    #[test]
    fn assembly_is_pure() {
        let history = sample_history();
        let first = assemble("instruction", &history, "next");
        let second = assemble("instruction", &history, "next");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_history_yields_system_and_user_only() {
        let messages = assemble("instruction", &[], "I have a fever");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], ChatMessage::user("I have a fever"));
    }
}
