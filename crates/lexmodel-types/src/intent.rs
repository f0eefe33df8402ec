//! Intents: a user goal with its slots, prompts and fulfillment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::FulfillmentActivityType;
use crate::prompt::{FollowUpPrompt, Prompt, Statement};
use crate::slot::Slot;

/// A Lambda function invoked during the conversation.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeHook {
    /// Lambda function ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Version of the request-response protocol the function expects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,
}

sparse_debug!(CodeHook { uri, message_version });

fluent_setters!(CodeHook {
    uri / set_uri: String,
    message_version / set_message_version: String,
});

/// How the intent is fulfilled once every required slot is filled.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<FulfillmentActivityType>,
    /// Only meaningful when `type` is `CodeHook`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_hook: Option<CodeHook>,
}

sparse_debug!(FulfillmentActivity { r#type, code_hook });

fluent_setters!(FulfillmentActivity {
    r#type / set_type: FulfillmentActivityType,
    code_hook / set_code_hook: CodeHook,
});

/// Binds the built-in `AMAZON.KendraSearchIntent` to a Kendra index.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KendraConfiguration {
    /// ARN of the Kendra index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kendra_index: Option<String>,
    /// Kendra attribute filter applied to every query, as JSON text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_filter_string: Option<String>,
    /// IAM role ARN the bot assumes to search the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

sparse_debug!(KendraConfiguration { kendra_index, query_filter_string, role });

fluent_setters!(KendraConfiguration {
    kendra_index / set_kendra_index: String,
    query_filter_string / set_query_filter_string: String,
    role / set_role: String,
});

/// A reference from a bot to one version of an intent.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_version: Option<String>,
}

sparse_debug!(Intent { intent_name, intent_version });

impl Intent {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            intent_name: Some(name.into()),
            intent_version: Some(version.into()),
        }
    }
}

fluent_setters!(Intent {
    intent_name / set_intent_name: String,
    intent_version / set_intent_version: String,
});

// --- GetIntent ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIntentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `$LATEST` or a numbered version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

sparse_debug!(GetIntentRequest { name, version });

fluent_setters!(GetIntentRequest {
    name / set_name: String,
    version / set_version: String,
});

/// Full definition of one intent version.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIntentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<Slot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_utterances: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_prompt: Option<Prompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_statement: Option<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_prompt: Option<FollowUpPrompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion_statement: Option<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_code_hook: Option<CodeHook>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_activity: Option<FulfillmentActivity>,
    /// Built-in intent this intent extends, e.g. `AMAZON.FallbackIntent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_intent_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kendra_configuration: Option<KendraConfiguration>,
}

sparse_debug!(GetIntentResult {
    name,
    description,
    slots,
    sample_utterances,
    confirmation_prompt,
    rejection_statement,
    follow_up_prompt,
    conclusion_statement,
    dialog_code_hook,
    fulfillment_activity,
    parent_intent_signature,
    last_updated_date,
    created_date,
    version,
    checksum,
    kendra_configuration,
});

fluent_setters!(GetIntentResult {
    name / set_name: String,
    description / set_description: String,
    confirmation_prompt / set_confirmation_prompt: Prompt,
    rejection_statement / set_rejection_statement: Statement,
    follow_up_prompt / set_follow_up_prompt: FollowUpPrompt,
    conclusion_statement / set_conclusion_statement: Statement,
    dialog_code_hook / set_dialog_code_hook: CodeHook,
    fulfillment_activity / set_fulfillment_activity: FulfillmentActivity,
    parent_intent_signature / set_parent_intent_signature: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    version / set_version: String,
    checksum / set_checksum: String,
    kendra_configuration / set_kendra_configuration: KendraConfiguration,
});

list_appenders!(GetIntentResult {
    slots / set_slots: Slot,
    sample_utterances / set_sample_utterances: String,
});

// --- PutIntent ---

/// Creates an intent or replaces its `$LATEST` version.
///
/// Updating an existing intent requires the `checksum` of its current
/// `$LATEST`; the service rejects the call when it does not match.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutIntentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<Slot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_utterances: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_prompt: Option<Prompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_statement: Option<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_prompt: Option<FollowUpPrompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion_statement: Option<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_code_hook: Option<CodeHook>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_activity: Option<FulfillmentActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_intent_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// Also publish a numbered version after saving `$LATEST`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kendra_configuration: Option<KendraConfiguration>,
}

sparse_debug!(PutIntentRequest {
    name,
    description,
    slots,
    sample_utterances,
    confirmation_prompt,
    rejection_statement,
    follow_up_prompt,
    conclusion_statement,
    dialog_code_hook,
    fulfillment_activity,
    parent_intent_signature,
    checksum,
    create_version,
    kendra_configuration,
});

fluent_setters!(PutIntentRequest {
    name / set_name: String,
    description / set_description: String,
    confirmation_prompt / set_confirmation_prompt: Prompt,
    rejection_statement / set_rejection_statement: Statement,
    follow_up_prompt / set_follow_up_prompt: FollowUpPrompt,
    conclusion_statement / set_conclusion_statement: Statement,
    dialog_code_hook / set_dialog_code_hook: CodeHook,
    fulfillment_activity / set_fulfillment_activity: FulfillmentActivity,
    parent_intent_signature / set_parent_intent_signature: String,
    checksum / set_checksum: String,
    create_version / set_create_version: bool,
    kendra_configuration / set_kendra_configuration: KendraConfiguration,
});

list_appenders!(PutIntentRequest {
    slots / set_slots: Slot,
    sample_utterances / set_sample_utterances: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutIntentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<Slot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_utterances: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_prompt: Option<Prompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_statement: Option<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_prompt: Option<FollowUpPrompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion_statement: Option<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_code_hook: Option<CodeHook>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_activity: Option<FulfillmentActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_intent_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kendra_configuration: Option<KendraConfiguration>,
}

sparse_debug!(PutIntentResult {
    name,
    description,
    slots,
    sample_utterances,
    confirmation_prompt,
    rejection_statement,
    follow_up_prompt,
    conclusion_statement,
    dialog_code_hook,
    fulfillment_activity,
    parent_intent_signature,
    last_updated_date,
    created_date,
    version,
    checksum,
    create_version,
    kendra_configuration,
});

fluent_setters!(PutIntentResult {
    name / set_name: String,
    description / set_description: String,
    confirmation_prompt / set_confirmation_prompt: Prompt,
    rejection_statement / set_rejection_statement: Statement,
    follow_up_prompt / set_follow_up_prompt: FollowUpPrompt,
    conclusion_statement / set_conclusion_statement: Statement,
    dialog_code_hook / set_dialog_code_hook: CodeHook,
    fulfillment_activity / set_fulfillment_activity: FulfillmentActivity,
    parent_intent_signature / set_parent_intent_signature: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    version / set_version: String,
    checksum / set_checksum: String,
    create_version / set_create_version: bool,
    kendra_configuration / set_kendra_configuration: KendraConfiguration,
});

list_appenders!(PutIntentResult {
    slots / set_slots: Slot,
    sample_utterances / set_sample_utterances: String,
});

/// Summary of one intent version, as listed by `GetIntents` and `GetIntentVersions`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

sparse_debug!(IntentMetadata { name, description, last_updated_date, created_date, version });

fluent_setters!(IntentMetadata {
    name / set_name: String,
    description / set_description: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    version / set_version: String,
});

// --- GetIntents ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIntentsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
}

sparse_debug!(GetIntentsRequest { next_token, max_results, name_contains });

fluent_setters!(GetIntentsRequest {
    next_token / set_next_token: String,
    max_results / set_max_results: i32,
    name_contains / set_name_contains: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIntentsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<IntentMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

sparse_debug!(GetIntentsResult { intents, next_token });

fluent_setters!(GetIntentsResult {
    next_token / set_next_token: String,
});

list_appenders!(GetIntentsResult {
    intents / set_intents: IntentMetadata,
});

// --- GetIntentVersions ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIntentVersionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

sparse_debug!(GetIntentVersionsRequest { name, next_token, max_results });

fluent_setters!(GetIntentVersionsRequest {
    name / set_name: String,
    next_token / set_next_token: String,
    max_results / set_max_results: i32,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIntentVersionsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<IntentMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

sparse_debug!(GetIntentVersionsResult { intents, next_token });

fluent_setters!(GetIntentVersionsResult {
    next_token / set_next_token: String,
});

list_appenders!(GetIntentVersionsResult {
    intents / set_intents: IntentMetadata,
});

// --- CreateIntentVersion ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentVersionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Checksum of `$LATEST`; the version is only created if it matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

sparse_debug!(CreateIntentVersionRequest { name, checksum });

fluent_setters!(CreateIntentVersionRequest {
    name / set_name: String,
    checksum / set_checksum: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentVersionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<Slot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_utterances: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_prompt: Option<Prompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_statement: Option<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_prompt: Option<FollowUpPrompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion_statement: Option<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_code_hook: Option<CodeHook>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_activity: Option<FulfillmentActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_intent_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kendra_configuration: Option<KendraConfiguration>,
}

sparse_debug!(CreateIntentVersionResult {
    name,
    description,
    slots,
    sample_utterances,
    confirmation_prompt,
    rejection_statement,
    follow_up_prompt,
    conclusion_statement,
    dialog_code_hook,
    fulfillment_activity,
    parent_intent_signature,
    last_updated_date,
    created_date,
    version,
    checksum,
    kendra_configuration,
});

fluent_setters!(CreateIntentVersionResult {
    name / set_name: String,
    description / set_description: String,
    confirmation_prompt / set_confirmation_prompt: Prompt,
    rejection_statement / set_rejection_statement: Statement,
    follow_up_prompt / set_follow_up_prompt: FollowUpPrompt,
    conclusion_statement / set_conclusion_statement: Statement,
    dialog_code_hook / set_dialog_code_hook: CodeHook,
    fulfillment_activity / set_fulfillment_activity: FulfillmentActivity,
    parent_intent_signature / set_parent_intent_signature: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    version / set_version: String,
    checksum / set_checksum: String,
    kendra_configuration / set_kendra_configuration: KendraConfiguration,
});

list_appenders!(CreateIntentVersionResult {
    slots / set_slots: Slot,
    sample_utterances / set_sample_utterances: String,
});

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hash, Hasher};

    use super::*;
    use crate::enums::SlotConstraint;
    use crate::prompt::Message;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn order_pizza() -> GetIntentResult {
        GetIntentResult::default()
            .name("OrderPizza")
            .version("$LATEST")
            .slots(
                Slot::default()
                    .name("crust")
                    .slot_type("PizzaCrust")
                    .slot_constraint(SlotConstraint::Required),
            )
            .sample_utterances("I want a pizza")
            .confirmation_prompt(
                Prompt::default()
                    .messages(Message::plain_text("Place the order?"))
                    .max_attempts(1),
            )
            .fulfillment_activity(
                FulfillmentActivity::default().r#type(FulfillmentActivityType::ReturnIntent),
            )
    }

    #[test]
    fn test_set_slots_none_clears_to_unset() {
        let intent = order_pizza().set_slots(None);
        assert!(intent.slots.is_none());
    }

    #[test]
    fn test_equality_is_reflexive_and_symmetric() {
        let a = order_pizza();
        let b = order_pizza();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(GetIntentResult::default(), GetIntentResult::default());
        assert_ne!(a, GetIntentResult::default());
    }

    #[test]
    fn test_equal_values_hash_equally() {
        assert_eq!(hash_of(&order_pizza()), hash_of(&order_pizza()));
        assert_eq!(
            hash_of(&PutIntentRequest::default()),
            hash_of(&PutIntentRequest::default())
        );
    }

    #[test]
    fn test_get_intent_result_deserialize() {
        let json = r#"{
            "name": "OrderPizza",
            "version": "3",
            "checksum": "f0e1d2",
            "createdDate": 1588291200.5,
            "lastUpdatedDate": 1588291300,
            "parentIntentSignature": "AMAZON.KendraSearchIntent",
            "kendraConfiguration": {
                "kendraIndex": "arn:aws:kendra:us-east-1:123456789012:index/abc-123",
                "role": "arn:aws:iam::123456789012:role/lex-kendra"
            },
            "dialogCodeHook": {"uri": "arn:aws:lambda:us-east-1:123456789012:function:pizza", "messageVersion": "1.0"}
        }"#;
        let intent: GetIntentResult = serde_json::from_str(json).unwrap();
        assert_eq!(intent.version.as_deref(), Some("3"));
        assert_eq!(intent.created_date.unwrap().timestamp_subsec_millis(), 500);
        assert_eq!(intent.last_updated_date.unwrap().timestamp(), 1_588_291_300);
        assert_eq!(
            intent.dialog_code_hook.unwrap().message_version.as_deref(),
            Some("1.0")
        );
        assert!(intent.kendra_configuration.unwrap().query_filter_string.is_none());
    }

    #[test]
    fn test_fulfillment_activity_type_member_name() {
        let activity = FulfillmentActivity::default()
            .r#type(FulfillmentActivityType::CodeHook)
            .code_hook(CodeHook::default().uri("arn:aws:lambda:us-east-1:123456789012:function:f"));
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "CodeHook");
        assert!(json["codeHook"]["uri"].is_string());
    }

    #[test]
    fn test_put_intent_request_omits_unset_members() {
        let request = PutIntentRequest::default()
            .name("OrderPizza")
            .sample_utterances("pizza please")
            .create_version(false);
        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(json["createVersion"], false);
    }

    #[test]
    fn test_create_intent_version_result_matches_definition() {
        let json = r#"{
            "name": "OrderPizza",
            "version": "4",
            "checksum": "c4",
            "sampleUtterances": ["I want a pizza"],
            "slots": [{"name": "crust", "slotConstraint": "Required", "slotType": "PizzaCrust"}]
        }"#;
        let result: CreateIntentVersionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.version.as_deref(), Some("4"));
        assert_eq!(
            result.slots.unwrap()[0].slot_constraint,
            Some(SlotConstraint::Required)
        );
    }

    #[test]
    fn test_intent_versions_result() {
        let result = GetIntentVersionsResult::default()
            .intents(IntentMetadata::default().name("OrderPizza").version("$LATEST"))
            .intents(IntentMetadata::default().name("OrderPizza").version("1"));
        assert_eq!(result.intents.as_ref().map(Vec::len), Some(2));
        assert!(result.next_token.is_none());
    }
}
