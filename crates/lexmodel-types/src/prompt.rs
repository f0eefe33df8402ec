//! Messages the bot speaks: prompts that expect an answer and statements
//! that do not.

use serde::{Deserialize, Serialize};

use crate::enums::ContentType;

/// One candidate message. The runtime picks one message per group.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Messages sharing a group number are alternatives; groups are sent in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_number: Option<i32>,
}

sparse_debug!(Message { content_type, content, group_number });

impl Message {
    /// A plain-text message in no particular group.
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self::default()
            .content_type(ContentType::PlainText)
            .content(content)
    }
}

fluent_setters!(Message {
    content_type / set_content_type: ContentType,
    content / set_content: String,
    group_number / set_group_number: i32,
});

/// Elicits information from the user, retrying up to `max_attempts` times.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<i32>,
    /// Response card template, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_card: Option<String>,
}

sparse_debug!(Prompt { messages, max_attempts, response_card });

fluent_setters!(Prompt {
    max_attempts / set_max_attempts: i32,
    response_card / set_response_card: String,
});

list_appenders!(Prompt {
    messages / set_messages: Message,
});

/// Information conveyed to the user without expecting a reply.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_card: Option<String>,
}

sparse_debug!(Statement { messages, response_card });

fluent_setters!(Statement {
    response_card / set_response_card: String,
});

list_appenders!(Statement {
    messages / set_messages: Message,
});

/// Asked after fulfillment to offer a follow-on intent.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpPrompt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Prompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_statement: Option<Statement>,
}

sparse_debug!(FollowUpPrompt { prompt, rejection_statement });

fluent_setters!(FollowUpPrompt {
    prompt / set_prompt: Prompt,
    rejection_statement / set_rejection_statement: Statement,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_wire_shape() {
        let prompt = Prompt::default()
            .messages(Message::plain_text("Which city?").group_number(1))
            .messages(Message::plain_text("Where to?").group_number(1))
            .max_attempts(2);

        let json = serde_json::to_value(&prompt).unwrap();
        assert_eq!(json["maxAttempts"], 2);
        assert_eq!(json["messages"][0]["contentType"], "PlainText");
        assert_eq!(json["messages"][1]["content"], "Where to?");
        assert!(json.get("responseCard").is_none());
    }

    #[test]
    fn test_unset_and_empty_messages_differ() {
        let unset = Statement::default();
        let empty = Statement::default().set_messages(Some(Vec::new()));
        assert_ne!(unset, empty);
        assert_eq!(serde_json::to_string(&unset).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"messages":[]}"#);
    }

    #[test]
    fn test_message_order_matters_for_equality() {
        let a = Prompt::default()
            .messages(Message::plain_text("one"))
            .messages(Message::plain_text("two"));
        let b = Prompt::default()
            .messages(Message::plain_text("two"))
            .messages(Message::plain_text("one"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_follow_up_prompt_deserialize() {
        let json = r#"{
            "prompt": {"messages": [{"contentType": "SSML", "content": "<speak>More?</speak>"}], "maxAttempts": 1},
            "rejectionStatement": {"messages": [{"contentType": "PlainText", "content": "OK, bye."}]}
        }"#;
        let follow_up: FollowUpPrompt = serde_json::from_str(json).unwrap();
        let prompt = follow_up.prompt.unwrap();
        assert_eq!(prompt.max_attempts, Some(1));
        assert_eq!(
            prompt.messages.unwrap()[0].content_type,
            Some(ContentType::Ssml)
        );
        assert!(follow_up.rejection_statement.is_some());
    }
}
