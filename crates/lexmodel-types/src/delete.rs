//! Delete operations. Success responses carry no members.

use serde::{Deserialize, Serialize};

/// Result of an operation whose success response has no members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmptyResult {}

/// Deletes every version of a bot, `$LATEST` included.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBotRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

sparse_debug!(DeleteBotRequest { name });

fluent_setters!(DeleteBotRequest {
    name / set_name: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBotAliasRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
}

sparse_debug!(DeleteBotAliasRequest { name, bot_name });

fluent_setters!(DeleteBotAliasRequest {
    name / set_name: String,
    bot_name / set_bot_name: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBotChannelAssociationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_alias: Option<String>,
}

sparse_debug!(DeleteBotChannelAssociationRequest { name, bot_name, bot_alias });

fluent_setters!(DeleteBotChannelAssociationRequest {
    name / set_name: String,
    bot_name / set_bot_name: String,
    bot_alias / set_bot_alias: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBotVersionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// A numbered version; use `DeleteBot` to remove `$LATEST`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

sparse_debug!(DeleteBotVersionRequest { name, version });

fluent_setters!(DeleteBotVersionRequest {
    name / set_name: String,
    version / set_version: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteIntentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

sparse_debug!(DeleteIntentRequest { name });

fluent_setters!(DeleteIntentRequest {
    name / set_name: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteIntentVersionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

sparse_debug!(DeleteIntentVersionRequest { name, version });

fluent_setters!(DeleteIntentVersionRequest {
    name / set_name: String,
    version / set_version: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSlotTypeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

sparse_debug!(DeleteSlotTypeRequest { name });

fluent_setters!(DeleteSlotTypeRequest {
    name / set_name: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSlotTypeVersionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

sparse_debug!(DeleteSlotTypeVersionRequest { name, version });

fluent_setters!(DeleteSlotTypeVersionRequest {
    name / set_name: String,
    version / set_version: String,
});

/// Removes the stored utterances of one user.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUtterancesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
    /// Identifier the client application sent with the utterances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

sparse_debug!(DeleteUtterancesRequest { bot_name, user_id });

fluent_setters!(DeleteUtterancesRequest {
    bot_name / set_bot_name: String,
    user_id / set_user_id: String,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_reads_any_object() {
        let empty: EmptyResult = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, EmptyResult {});

        let extra: EmptyResult = serde_json::from_str(r#"{"requestId": "r-1"}"#).unwrap();
        assert_eq!(extra, EmptyResult::default());

        assert_eq!(serde_json::to_string(&EmptyResult {}).unwrap(), "{}");
    }

    #[test]
    fn test_delete_utterances_members() {
        let request = DeleteUtterancesRequest::default()
            .bot_name("PizzaBot")
            .user_id("user-42");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["botName"], "PizzaBot");
        assert_eq!(json["userId"], "user-42");
        assert_eq!(
            format!("{request:?}"),
            r#"DeleteUtterancesRequest { bot_name: "PizzaBot", user_id: "user-42" }"#
        );
    }
}
