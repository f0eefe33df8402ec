//! Custom slot types: the values a slot of that type can take.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::SlotValueSelectionStrategy;

/// One value of a slot type, with the synonyms that resolve to it.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumerationValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
}

sparse_debug!(EnumerationValue { value, synonyms });

fluent_setters!(EnumerationValue {
    value / set_value: String,
});

list_appenders!(EnumerationValue {
    synonyms / set_synonyms: String,
});

impl From<&str> for EnumerationValue {
    fn from(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            synonyms: None,
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotTypeRegexConfiguration {
    /// Regular expression a slot value must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

sparse_debug!(SlotTypeRegexConfiguration { pattern });

fluent_setters!(SlotTypeRegexConfiguration {
    pattern / set_pattern: String,
});

/// Extra restrictions on a slot type derived from a built-in one.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotTypeConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex_configuration: Option<SlotTypeRegexConfiguration>,
}

sparse_debug!(SlotTypeConfiguration { regex_configuration });

fluent_setters!(SlotTypeConfiguration {
    regex_configuration / set_regex_configuration: SlotTypeRegexConfiguration,
});

/// Summary of one slot type version, as listed by `GetSlotTypes`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotTypeMetadata {
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

sparse_debug!(SlotTypeMetadata { name, description, last_updated_date, created_date, version });

fluent_setters!(SlotTypeMetadata {
    name / set_name: String,
    description / set_description: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    version / set_version: String,
});

// --- PutSlotType ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutSlotTypeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enumeration_values: Option<Vec<EnumerationValue>>,
    /// Required when updating an existing slot type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_selection_strategy: Option<SlotValueSelectionStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_version: Option<bool>,
    /// Built-in slot type this one extends, e.g. `AMAZON.AlphaNumeric`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_slot_type_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_type_configurations: Option<Vec<SlotTypeConfiguration>>,
}

sparse_debug!(PutSlotTypeRequest {
    name,
    description,
    enumeration_values,
    checksum,
    value_selection_strategy,
    create_version,
    parent_slot_type_signature,
    slot_type_configurations,
});

fluent_setters!(PutSlotTypeRequest {
    name / set_name: String,
    description / set_description: String,
    checksum / set_checksum: String,
    value_selection_strategy / set_value_selection_strategy: SlotValueSelectionStrategy,
    create_version / set_create_version: bool,
    parent_slot_type_signature / set_parent_slot_type_signature: String,
});

list_appenders!(PutSlotTypeRequest {
    enumeration_values / set_enumeration_values: EnumerationValue,
    slot_type_configurations / set_slot_type_configurations: SlotTypeConfiguration,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutSlotTypeResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enumeration_values: Option<Vec<EnumerationValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_selection_strategy: Option<SlotValueSelectionStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_slot_type_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_type_configurations: Option<Vec<SlotTypeConfiguration>>,
}

sparse_debug!(PutSlotTypeResult {
    name,
    description,
    enumeration_values,
    last_updated_date,
    created_date,
    version,
    checksum,
    value_selection_strategy,
    parent_slot_type_signature,
    create_version,
    slot_type_configurations,
});

fluent_setters!(PutSlotTypeResult {
    name / set_name: String,
    description / set_description: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    version / set_version: String,
    checksum / set_checksum: String,
    value_selection_strategy / set_value_selection_strategy: SlotValueSelectionStrategy,
    parent_slot_type_signature / set_parent_slot_type_signature: String,
    create_version / set_create_version: bool,
});

list_appenders!(PutSlotTypeResult {
    enumeration_values / set_enumeration_values: EnumerationValue,
    slot_type_configurations / set_slot_type_configurations: SlotTypeConfiguration,
});

// --- GetSlotType ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSlotTypeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

sparse_debug!(GetSlotTypeRequest { name, version });

fluent_setters!(GetSlotTypeRequest {
    name / set_name: String,
    version / set_version: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSlotTypeResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enumeration_values: Option<Vec<EnumerationValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_selection_strategy: Option<SlotValueSelectionStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_slot_type_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_type_configurations: Option<Vec<SlotTypeConfiguration>>,
}

sparse_debug!(GetSlotTypeResult {
    name,
    description,
    enumeration_values,
    last_updated_date,
    created_date,
    version,
    checksum,
    value_selection_strategy,
    parent_slot_type_signature,
    slot_type_configurations,
});

fluent_setters!(GetSlotTypeResult {
    name / set_name: String,
    description / set_description: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    version / set_version: String,
    checksum / set_checksum: String,
    value_selection_strategy / set_value_selection_strategy: SlotValueSelectionStrategy,
    parent_slot_type_signature / set_parent_slot_type_signature: String,
});

list_appenders!(GetSlotTypeResult {
    enumeration_values / set_enumeration_values: EnumerationValue,
    slot_type_configurations / set_slot_type_configurations: SlotTypeConfiguration,
});

// --- GetSlotTypes ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSlotTypesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
}

sparse_debug!(GetSlotTypesRequest { next_token, max_results, name_contains });

fluent_setters!(GetSlotTypesRequest {
    next_token / set_next_token: String,
    max_results / set_max_results: i32,
    name_contains / set_name_contains: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSlotTypesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_types: Option<Vec<SlotTypeMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

sparse_debug!(GetSlotTypesResult { slot_types, next_token });

fluent_setters!(GetSlotTypesResult {
    next_token / set_next_token: String,
});

list_appenders!(GetSlotTypesResult {
    slot_types / set_slot_types: SlotTypeMetadata,
});

// --- GetSlotTypeVersions ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSlotTypeVersionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

sparse_debug!(GetSlotTypeVersionsRequest { name, next_token, max_results });

fluent_setters!(GetSlotTypeVersionsRequest {
    name / set_name: String,
    next_token / set_next_token: String,
    max_results / set_max_results: i32,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSlotTypeVersionsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_types: Option<Vec<SlotTypeMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

sparse_debug!(GetSlotTypeVersionsResult { slot_types, next_token });

fluent_setters!(GetSlotTypeVersionsResult {
    next_token / set_next_token: String,
});

list_appenders!(GetSlotTypeVersionsResult {
    slot_types / set_slot_types: SlotTypeMetadata,
});

// --- CreateSlotTypeVersion ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlotTypeVersionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Checksum of `$LATEST`; the version is only created if it matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

sparse_debug!(CreateSlotTypeVersionRequest { name, checksum });

fluent_setters!(CreateSlotTypeVersionRequest {
    name / set_name: String,
    checksum / set_checksum: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlotTypeVersionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enumeration_values: Option<Vec<EnumerationValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_selection_strategy: Option<SlotValueSelectionStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_slot_type_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_type_configurations: Option<Vec<SlotTypeConfiguration>>,
}

sparse_debug!(CreateSlotTypeVersionResult {
    name,
    description,
    enumeration_values,
    last_updated_date,
    created_date,
    version,
    checksum,
    value_selection_strategy,
    parent_slot_type_signature,
    slot_type_configurations,
});

fluent_setters!(CreateSlotTypeVersionResult {
    name / set_name: String,
    description / set_description: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    version / set_version: String,
    checksum / set_checksum: String,
    value_selection_strategy / set_value_selection_strategy: SlotValueSelectionStrategy,
    parent_slot_type_signature / set_parent_slot_type_signature: String,
});

list_appenders!(CreateSlotTypeVersionResult {
    enumeration_values / set_enumeration_values: EnumerationValue,
    slot_type_configurations / set_slot_type_configurations: SlotTypeConfiguration,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_slot_type_request_body() {
        let request = PutSlotTypeRequest::default()
            .name("PizzaSize")
            .enumeration_values(
                EnumerationValue::from("large")
                    .synonyms("big")
                    .synonyms("family"),
            )
            .enumeration_values("small")
            .value_selection_strategy(SlotValueSelectionStrategy::TopResolution)
            .create_version(true);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["enumerationValues"][0]["synonyms"][1], "family");
        assert!(json["enumerationValues"][1].get("synonyms").is_none());
        assert_eq!(json["valueSelectionStrategy"], "TOP_RESOLUTION");
        assert_eq!(json["createVersion"], true);
    }

    #[test]
    fn test_get_slot_type_result_deserialize() {
        let json = r#"{
            "name": "AccountId",
            "version": "2",
            "parentSlotTypeSignature": "AMAZON.AlphaNumeric",
            "slotTypeConfigurations": [{"regexConfiguration": {"pattern": "[0-9]{8}"}}],
            "valueSelectionStrategy": "CLOSEST_MATCH",
            "createdDate": 1588291200.0
        }"#;
        let result: GetSlotTypeResult = serde_json::from_str(json).unwrap();
        let regex = result.slot_type_configurations.as_ref().unwrap()[0]
            .regex_configuration
            .as_ref()
            .unwrap();
        assert_eq!(regex.pattern.as_deref(), Some("[0-9]{8}"));
        assert_eq!(
            result.value_selection_strategy,
            Some(SlotValueSelectionStrategy::Unknown("CLOSEST_MATCH".to_string()))
        );
        assert_eq!(result.created_date.unwrap().timestamp(), 1_588_291_200);
        assert!(result.enumeration_values.is_none());
    }

    #[test]
    fn test_list_result_appends_metadata() {
        let result = GetSlotTypesResult::default()
            .slot_types(SlotTypeMetadata::default().name("PizzaSize"))
            .slot_types(SlotTypeMetadata::default().name("Crust"))
            .next_token("page2");
        let names: Vec<_> = result
            .slot_types
            .iter()
            .flatten()
            .filter_map(|t| t.name.as_deref())
            .collect();
        assert_eq!(names, ["PizzaSize", "Crust"]);
    }
}
