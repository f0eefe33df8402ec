//! Slot definitions: the parameters an intent needs filled.

use serde::{Deserialize, Serialize};

use crate::enums::{ObfuscationSetting, SlotConstraint};
use crate::prompt::Prompt;

/// One parameter of an intent, e.g. `departureCity`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_constraint: Option<SlotConstraint>,
    /// Built-in (`AMAZON.*`) or custom slot type name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_type_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_elicitation_prompt: Option<Prompt>,
    /// Elicitation order; lower values are asked first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_utterances: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscation_setting: Option<ObfuscationSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value_spec: Option<SlotDefaultValueSpec>,
}

sparse_debug!(Slot {
    name,
    description,
    slot_constraint,
    slot_type,
    slot_type_version,
    value_elicitation_prompt,
    priority,
    sample_utterances,
    response_card,
    obfuscation_setting,
    default_value_spec,
});

fluent_setters!(Slot {
    name / set_name: String,
    description / set_description: String,
    slot_constraint / set_slot_constraint: SlotConstraint,
    slot_type / set_slot_type: String,
    slot_type_version / set_slot_type_version: String,
    value_elicitation_prompt / set_value_elicitation_prompt: Prompt,
    priority / set_priority: i32,
    response_card / set_response_card: String,
    obfuscation_setting / set_obfuscation_setting: ObfuscationSetting,
    default_value_spec / set_default_value_spec: SlotDefaultValueSpec,
});

list_appenders!(Slot {
    sample_utterances / set_sample_utterances: String,
});

/// Values used when the user does not supply one.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDefaultValueSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value_list: Option<Vec<SlotDefaultValue>>,
}

sparse_debug!(SlotDefaultValueSpec { default_value_list });

list_appenders!(SlotDefaultValueSpec {
    default_value_list / set_default_value_list: SlotDefaultValue,
});

/// A literal, a `#context.slot` reference or a `{attribute}` reference.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDefaultValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

sparse_debug!(SlotDefaultValue { default_value });

impl From<&str> for SlotDefaultValue {
    fn from(value: &str) -> Self {
        Self {
            default_value: Some(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_utterances_append_lazily() {
        let slot = Slot::default()
            .sample_utterances("book a flight")
            .sample_utterances("reserve a seat");
        assert_eq!(
            slot.sample_utterances,
            Some(vec!["book a flight".to_string(), "reserve a seat".to_string()])
        );
    }

    #[test]
    fn test_append_after_bulk_set_extends_the_set_list() {
        let slot = Slot::default()
            .set_sample_utterances(Some(vec!["first".to_string()]))
            .sample_utterances("second");
        assert_eq!(slot.sample_utterances.unwrap().len(), 2);
    }

    #[test]
    fn test_append_after_clear_starts_a_new_list() {
        let slot = Slot::default()
            .sample_utterances("dropped")
            .set_sample_utterances(None)
            .sample_utterances("kept");
        assert_eq!(slot.sample_utterances, Some(vec!["kept".to_string()]));
    }

    #[test]
    fn test_fluent_matches_field_assignment() {
        let fluent = Slot::default()
            .name("departureCity")
            .slot_constraint(SlotConstraint::Required)
            .priority(1);

        let mut assigned = Slot::default();
        assigned.name = Some("departureCity".to_string());
        assigned.slot_constraint = Some(SlotConstraint::Required);
        assigned.priority = Some(1);

        assert_eq!(fluent, assigned);
    }

    #[test]
    fn test_debug_lists_only_set_members() {
        assert_eq!(format!("{:?}", Slot::default()), "Slot");

        let slot = Slot::default()
            .name("size")
            .priority(2)
            .sample_utterances("a {size} pizza");
        assert_eq!(
            format!("{slot:?}"),
            r#"Slot { name: "size", priority: 2, sample_utterances: ["a {size} pizza"] }"#
        );

        let spec = SlotDefaultValueSpec::default().default_value_list("small");
        let rendered = format!("{spec:?}");
        assert!(rendered.contains(r#"SlotDefaultValue { default_value: "small" }"#));
        assert!(!rendered.contains("None"));
    }

    #[test]
    fn test_slot_deserialize_service_payload() {
        let json = r##"{
            "name": "departureCity",
            "slotConstraint": "Required",
            "slotType": "AMAZON.US_CITY",
            "valueElicitationPrompt": {
                "messages": [{"contentType": "PlainText", "content": "From where?"}],
                "maxAttempts": 3
            },
            "priority": 1,
            "obfuscationSetting": "DEFAULT_OBFUSCATION",
            "defaultValueSpec": {"defaultValueList": [{"defaultValue": "#home.city"}]}
        }"##;
        let slot: Slot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.slot_type.as_deref(), Some("AMAZON.US_CITY"));
        assert_eq!(
            slot.obfuscation_setting,
            Some(ObfuscationSetting::DefaultObfuscation)
        );
        assert_eq!(
            slot.default_value_spec.unwrap().default_value_list.unwrap()[0],
            SlotDefaultValue::from("#home.city")
        );
        assert!(slot.sample_utterances.is_none());
    }
}
