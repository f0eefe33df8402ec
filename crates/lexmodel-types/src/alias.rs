//! Bot aliases and their conversation-log settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Destination, LogType};
use crate::tag::Tag;

/// Where one kind of conversation log is delivered, as sent in `PutBotAlias`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_type: Option<LogType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    /// KMS key for encrypting audio logs in S3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<String>,
    /// CloudWatch Logs log group or S3 bucket ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

sparse_debug!(LogSettingsRequest { log_type, destination, kms_key_arn, resource_arn });

fluent_setters!(LogSettingsRequest {
    log_type / set_log_type: LogType,
    destination / set_destination: Destination,
    kms_key_arn / set_kms_key_arn: String,
    resource_arn / set_resource_arn: String,
});

/// Log settings as reported back by the service.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSettingsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_type: Option<LogType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// Prefix of the S3 objects or log streams the service writes to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_prefix: Option<String>,
}

sparse_debug!(LogSettingsResponse {
    log_type,
    destination,
    kms_key_arn,
    resource_arn,
    resource_prefix,
});

fluent_setters!(LogSettingsResponse {
    log_type / set_log_type: LogType,
    destination / set_destination: Destination,
    kms_key_arn / set_kms_key_arn: String,
    resource_arn / set_resource_arn: String,
    resource_prefix / set_resource_prefix: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationLogsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_settings: Option<Vec<LogSettingsRequest>>,
    /// Role the service assumes to write the logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_arn: Option<String>,
}

sparse_debug!(ConversationLogsRequest { log_settings, iam_role_arn });

fluent_setters!(ConversationLogsRequest {
    iam_role_arn / set_iam_role_arn: String,
});

list_appenders!(ConversationLogsRequest {
    log_settings / set_log_settings: LogSettingsRequest,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationLogsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_settings: Option<Vec<LogSettingsResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_arn: Option<String>,
}

sparse_debug!(ConversationLogsResponse { log_settings, iam_role_arn });

fluent_setters!(ConversationLogsResponse {
    iam_role_arn / set_iam_role_arn: String,
});

list_appenders!(ConversationLogsResponse {
    log_settings / set_log_settings: LogSettingsResponse,
});

/// A named pointer from an alias to one bot version.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotAliasMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_logs: Option<ConversationLogsResponse>,
}

sparse_debug!(BotAliasMetadata {
    name,
    description,
    bot_version,
    bot_name,
    last_updated_date,
    created_date,
    checksum,
    conversation_logs,
});

fluent_setters!(BotAliasMetadata {
    name / set_name: String,
    description / set_description: String,
    bot_version / set_bot_version: String,
    bot_name / set_bot_name: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    checksum / set_checksum: String,
    conversation_logs / set_conversation_logs: ConversationLogsResponse,
});

// --- GetBotAlias ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBotAliasRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
}

sparse_debug!(GetBotAliasRequest { name, bot_name });

fluent_setters!(GetBotAliasRequest {
    name / set_name: String,
    bot_name / set_bot_name: String,
});

/// `GetBotAlias` returns exactly the alias metadata.
pub type GetBotAliasResult = BotAliasMetadata;

// --- GetBotAliases ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBotAliasesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
    /// Token from the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Substring filter on alias names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
}

sparse_debug!(GetBotAliasesRequest { bot_name, next_token, max_results, name_contains });

fluent_setters!(GetBotAliasesRequest {
    bot_name / set_bot_name: String,
    next_token / set_next_token: String,
    max_results / set_max_results: i32,
    name_contains / set_name_contains: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBotAliasesResult {
    #[serde(rename = "BotAliases", skip_serializing_if = "Option::is_none")]
    pub bot_aliases: Option<Vec<BotAliasMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

sparse_debug!(GetBotAliasesResult { bot_aliases, next_token });

fluent_setters!(GetBotAliasesResult {
    next_token / set_next_token: String,
});

list_appenders!(GetBotAliasesResult {
    bot_aliases / set_bot_aliases: BotAliasMetadata,
});

// --- PutBotAlias ---

/// Creates an alias or repoints an existing one.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutBotAliasRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
    /// Checksum of the alias being replaced; omit when creating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_logs: Option<ConversationLogsRequest>,
    /// Only honoured when the alias is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

sparse_debug!(PutBotAliasRequest {
    name,
    description,
    bot_version,
    bot_name,
    checksum,
    conversation_logs,
    tags,
});

fluent_setters!(PutBotAliasRequest {
    name / set_name: String,
    description / set_description: String,
    bot_version / set_bot_version: String,
    bot_name / set_bot_name: String,
    checksum / set_checksum: String,
    conversation_logs / set_conversation_logs: ConversationLogsRequest,
});

list_appenders!(PutBotAliasRequest {
    tags / set_tags: Tag,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutBotAliasResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_logs: Option<ConversationLogsResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

sparse_debug!(PutBotAliasResult {
    name,
    description,
    bot_version,
    bot_name,
    last_updated_date,
    created_date,
    checksum,
    conversation_logs,
    tags,
});

fluent_setters!(PutBotAliasResult {
    name / set_name: String,
    description / set_description: String,
    bot_version / set_bot_version: String,
    bot_name / set_bot_name: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    checksum / set_checksum: String,
    conversation_logs / set_conversation_logs: ConversationLogsResponse,
});

list_appenders!(PutBotAliasResult {
    tags / set_tags: Tag,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bot_aliases_result_uses_capitalised_member() {
        let json = r#"{
            "BotAliases": [
                {"name": "prod", "botName": "PizzaBot", "botVersion": "4", "checksum": "a1"},
                {"name": "beta", "botName": "PizzaBot", "botVersion": "$LATEST"}
            ],
            "nextToken": "page-2"
        }"#;
        let result: GetBotAliasesResult = serde_json::from_str(json).unwrap();
        let aliases = result.bot_aliases.unwrap();
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases[1].bot_version.as_deref(), Some("$LATEST"));
        assert_eq!(result.next_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn test_get_bot_alias_result_is_alias_metadata() {
        let json = r#"{
            "name": "prod",
            "botName": "PizzaBot",
            "botVersion": "4",
            "createdDate": 1590000000,
            "conversationLogs": {
                "iamRoleArn": "arn:aws:iam::123456789012:role/lex-logs",
                "logSettings": [{
                    "logType": "TEXT",
                    "destination": "CLOUDWATCH_LOGS",
                    "resourceArn": "arn:aws:logs:us-east-1:123456789012:log-group:lex",
                    "resourcePrefix": "aws/lex/PizzaBot/prod/4/"
                }]
            }
        }"#;
        let alias: GetBotAliasResult = serde_json::from_str(json).unwrap();
        let settings = alias.conversation_logs.unwrap().log_settings.unwrap();
        assert_eq!(settings[0].log_type, Some(LogType::Text));
        assert_eq!(settings[0].destination, Some(Destination::CloudwatchLogs));
        assert_eq!(
            settings[0].resource_prefix.as_deref(),
            Some("aws/lex/PizzaBot/prod/4/")
        );
    }

    #[test]
    fn test_put_bot_alias_request_builds_nested_logs() {
        let request = PutBotAliasRequest::default()
            .name("prod")
            .bot_name("PizzaBot")
            .bot_version("4")
            .conversation_logs(
                ConversationLogsRequest::default()
                    .iam_role_arn("arn:aws:iam::123456789012:role/lex-logs")
                    .log_settings(
                        LogSettingsRequest::default()
                            .log_type(LogType::Audio)
                            .destination("S3")
                            .resource_arn("arn:aws:s3:::pizza-audio"),
                    ),
            )
            .tags(("team", "ordering"));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["conversationLogs"]["logSettings"][0]["destination"], "S3");
        assert_eq!(json["tags"][0]["key"], "team");
    }
}
