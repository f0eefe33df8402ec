//! Associations between a bot alias and an external messaging channel.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{ChannelStatus, ChannelType};
use crate::error::ModelError;

/// Binds a bot alias to a messaging platform such as Slack or Facebook.
///
/// `bot_configuration` holds the platform credentials. The service masks
/// secret values in responses.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotChannelAssociation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ChannelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_configuration: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ChannelStatus>,
    /// Set when `status` is `FAILED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

sparse_debug!(BotChannelAssociation {
    name,
    description,
    bot_alias,
    bot_name,
    created_date,
    r#type,
    bot_configuration,
    status,
    failure_reason,
});

fluent_setters!(BotChannelAssociation {
    name / set_name: String,
    description / set_description: String,
    bot_alias / set_bot_alias: String,
    bot_name / set_bot_name: String,
    created_date / set_created_date: DateTime<Utc>,
    r#type / set_type: ChannelType,
    bot_configuration / set_bot_configuration: BTreeMap<String, String>,
    status / set_status: ChannelStatus,
    failure_reason / set_failure_reason: String,
});

impl BotChannelAssociation {
    /// Adds one `bot_configuration` entry, creating the map if unset.
    ///
    /// Fails without touching the map when `key` is already present.
    pub fn add_bot_configuration_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, ModelError> {
        let key = key.into();
        let entries = self.bot_configuration.get_or_insert_with(BTreeMap::new);
        if entries.contains_key(&key) {
            return Err(ModelError::DuplicateKey {
                field: "botConfiguration",
                key,
            });
        }
        entries.insert(key, value.into());
        Ok(self)
    }

    /// Returns `bot_configuration` to unset.
    pub fn clear_bot_configuration_entries(&mut self) -> &mut Self {
        self.bot_configuration = None;
        self
    }
}

// --- GetBotChannelAssociation ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBotChannelAssociationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_alias: Option<String>,
}

sparse_debug!(GetBotChannelAssociationRequest { name, bot_name, bot_alias });

fluent_setters!(GetBotChannelAssociationRequest {
    name / set_name: String,
    bot_name / set_bot_name: String,
    bot_alias / set_bot_alias: String,
});

pub type GetBotChannelAssociationResult = BotChannelAssociation;

// --- GetBotChannelAssociations ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBotChannelAssociationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
    /// Alias to list; `-` lists associations of every alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
}

sparse_debug!(GetBotChannelAssociationsRequest {
    bot_name,
    bot_alias,
    next_token,
    max_results,
    name_contains,
});

fluent_setters!(GetBotChannelAssociationsRequest {
    bot_name / set_bot_name: String,
    bot_alias / set_bot_alias: String,
    next_token / set_next_token: String,
    max_results / set_max_results: i32,
    name_contains / set_name_contains: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBotChannelAssociationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_channel_associations: Option<Vec<BotChannelAssociation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

sparse_debug!(GetBotChannelAssociationsResult { bot_channel_associations, next_token });

fluent_setters!(GetBotChannelAssociationsResult {
    next_token / set_next_token: String,
});

list_appenders!(GetBotChannelAssociationsResult {
    bot_channel_associations / set_bot_channel_associations: BotChannelAssociation,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_configuration_key_is_rejected() {
        let mut association = BotChannelAssociation::default();
        association
            .add_bot_configuration_entry("apiKey", "v1")
            .unwrap();

        let err = association
            .add_bot_configuration_entry("apiKey", "v2")
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                field: "botConfiguration",
                key: "apiKey".to_string(),
            }
        );

        let config = association.bot_configuration.as_ref().unwrap();
        assert_eq!(config.get("apiKey").map(String::as_str), Some("v1"));
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_configuration_entries_chain() {
        let mut association = BotChannelAssociation::default().r#type(ChannelType::Slack);
        association
            .add_bot_configuration_entry("clientId", "123")
            .and_then(|a| a.add_bot_configuration_entry("clientSecret", "s3cr3t"))
            .unwrap();
        assert_eq!(association.bot_configuration.as_ref().unwrap().len(), 2);

        association.clear_bot_configuration_entries();
        assert!(association.bot_configuration.is_none());
    }

    #[test]
    fn test_enum_and_string_type_are_equal() {
        let from_enum = BotChannelAssociation::default().r#type(ChannelType::Slack);
        let from_str = BotChannelAssociation::default().r#type("Slack");
        assert_eq!(from_enum, from_str);
        assert_eq!(
            format!("{from_enum:?}"),
            "BotChannelAssociation { type: Slack }"
        );
    }

    #[test]
    fn test_configuration_equality_ignores_insertion_order() {
        let mut a = BotChannelAssociation::default();
        a.add_bot_configuration_entry("x", "1").unwrap();
        a.add_bot_configuration_entry("y", "2").unwrap();

        let mut b = BotChannelAssociation::default();
        b.add_bot_configuration_entry("y", "2").unwrap();
        b.add_bot_configuration_entry("x", "1").unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_association_deserialize() {
        let json = r#"{
            "name": "slack_ordering",
            "botName": "PizzaBot",
            "botAlias": "prod",
            "type": "Slack",
            "status": "FAILED",
            "failureReason": "invalid verification token",
            "botConfiguration": {"clientId": "123", "verificationToken": "*****"}
        }"#;
        let association: GetBotChannelAssociationResult = serde_json::from_str(json).unwrap();
        assert_eq!(association.r#type, Some(ChannelType::Slack));
        assert!(association.status.as_ref().unwrap().is_terminal());
        assert_eq!(association.bot_configuration.unwrap().len(), 2);
    }
}
