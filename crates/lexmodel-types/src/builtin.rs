//! Built-in intents and slot types (`AMAZON.*`) offered by the service.

use serde::{Deserialize, Serialize};

use crate::enums::Locale;

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltinIntentMetadata {
    /// Unique identifier, e.g. `AMAZON.HelpIntent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_locales: Option<Vec<Locale>>,
}

sparse_debug!(BuiltinIntentMetadata { signature, supported_locales });

fluent_setters!(BuiltinIntentMetadata {
    signature / set_signature: String,
});

list_appenders!(BuiltinIntentMetadata {
    supported_locales / set_supported_locales: Locale,
});

/// A slot defined by a built-in intent.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltinIntentSlot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

sparse_debug!(BuiltinIntentSlot { name });

fluent_setters!(BuiltinIntentSlot {
    name / set_name: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltinSlotTypeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_locales: Option<Vec<Locale>>,
}

sparse_debug!(BuiltinSlotTypeMetadata { signature, supported_locales });

fluent_setters!(BuiltinSlotTypeMetadata {
    signature / set_signature: String,
});

list_appenders!(BuiltinSlotTypeMetadata {
    supported_locales / set_supported_locales: Locale,
});

// --- GetBuiltinIntent ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBuiltinIntentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

sparse_debug!(GetBuiltinIntentRequest { signature });

fluent_setters!(GetBuiltinIntentRequest {
    signature / set_signature: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBuiltinIntentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_locales: Option<Vec<Locale>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<BuiltinIntentSlot>>,
}

sparse_debug!(GetBuiltinIntentResult { signature, supported_locales, slots });

fluent_setters!(GetBuiltinIntentResult {
    signature / set_signature: String,
});

list_appenders!(GetBuiltinIntentResult {
    supported_locales / set_supported_locales: Locale,
    slots / set_slots: BuiltinIntentSlot,
});

// --- GetBuiltinIntents ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBuiltinIntentsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// Substring the signature must contain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

sparse_debug!(GetBuiltinIntentsRequest { locale, signature_contains, next_token, max_results });

fluent_setters!(GetBuiltinIntentsRequest {
    locale / set_locale: Locale,
    signature_contains / set_signature_contains: String,
    next_token / set_next_token: String,
    max_results / set_max_results: i32,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBuiltinIntentsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<BuiltinIntentMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

sparse_debug!(GetBuiltinIntentsResult { intents, next_token });

fluent_setters!(GetBuiltinIntentsResult {
    next_token / set_next_token: String,
});

list_appenders!(GetBuiltinIntentsResult {
    intents / set_intents: BuiltinIntentMetadata,
});

// --- GetBuiltinSlotTypes ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBuiltinSlotTypesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// Substring the signature must contain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

sparse_debug!(GetBuiltinSlotTypesRequest { locale, signature_contains, next_token, max_results });

fluent_setters!(GetBuiltinSlotTypesRequest {
    locale / set_locale: Locale,
    signature_contains / set_signature_contains: String,
    next_token / set_next_token: String,
    max_results / set_max_results: i32,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBuiltinSlotTypesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_types: Option<Vec<BuiltinSlotTypeMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

sparse_debug!(GetBuiltinSlotTypesResult { slot_types, next_token });

fluent_setters!(GetBuiltinSlotTypesResult {
    next_token / set_next_token: String,
});

list_appenders!(GetBuiltinSlotTypesResult {
    slot_types / set_slot_types: BuiltinSlotTypeMetadata,
});
