//! Bots: the top-level definition grouping intents and prompts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{BotStatus, Locale, ProcessBehavior};
use crate::intent::Intent;
use crate::prompt::{Prompt, Statement};
use crate::tag::Tag;

// --- GetBot ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBotRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// A version number, `$LATEST`, or an alias name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_or_alias: Option<String>,
}

sparse_debug!(GetBotRequest { name, version_or_alias });

fluent_setters!(GetBotRequest {
    name / set_name: String,
    version_or_alias / set_version_or_alias: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBotResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,
    /// Asked when the bot cannot tell which intent the user means.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarification_prompt: Option<Prompt>,
    /// Said when the conversation is abandoned after too many retries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_statement: Option<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BotStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "idleSessionTTLInSeconds", skip_serializing_if = "Option::is_none")]
    pub idle_session_ttl_in_seconds: Option<i32>,
    /// Amazon Polly voice used for speech responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// COPPA declaration; the service requires it on every `PutBot`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_directed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detect_sentiment: Option<bool>,
}

sparse_debug!(GetBotResult {
    name,
    description,
    intents,
    clarification_prompt,
    abort_statement,
    status,
    failure_reason,
    last_updated_date,
    created_date,
    idle_session_ttl_in_seconds,
    voice_id,
    checksum,
    version,
    locale,
    child_directed,
    detect_sentiment,
});

fluent_setters!(GetBotResult {
    name / set_name: String,
    description / set_description: String,
    clarification_prompt / set_clarification_prompt: Prompt,
    abort_statement / set_abort_statement: Statement,
    status / set_status: BotStatus,
    failure_reason / set_failure_reason: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    idle_session_ttl_in_seconds / set_idle_session_ttl_in_seconds: i32,
    voice_id / set_voice_id: String,
    checksum / set_checksum: String,
    version / set_version: String,
    locale / set_locale: Locale,
    child_directed / set_child_directed: bool,
    detect_sentiment / set_detect_sentiment: bool,
});

list_appenders!(GetBotResult {
    intents / set_intents: Intent,
});

// --- PutBot ---

/// Creates a bot or replaces its `$LATEST` version.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutBotRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarification_prompt: Option<Prompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_statement: Option<Statement>,
    #[serde(rename = "idleSessionTTLInSeconds", skip_serializing_if = "Option::is_none")]
    pub idle_session_ttl_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_behavior: Option<ProcessBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_directed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detect_sentiment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

sparse_debug!(PutBotRequest {
    name,
    description,
    intents,
    clarification_prompt,
    abort_statement,
    idle_session_ttl_in_seconds,
    voice_id,
    checksum,
    process_behavior,
    locale,
    child_directed,
    detect_sentiment,
    create_version,
    tags,
});

fluent_setters!(PutBotRequest {
    name / set_name: String,
    description / set_description: String,
    clarification_prompt / set_clarification_prompt: Prompt,
    abort_statement / set_abort_statement: Statement,
    idle_session_ttl_in_seconds / set_idle_session_ttl_in_seconds: i32,
    voice_id / set_voice_id: String,
    checksum / set_checksum: String,
    process_behavior / set_process_behavior: ProcessBehavior,
    locale / set_locale: Locale,
    child_directed / set_child_directed: bool,
    detect_sentiment / set_detect_sentiment: bool,
    create_version / set_create_version: bool,
});

list_appenders!(PutBotRequest {
    intents / set_intents: Intent,
    tags / set_tags: Tag,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutBotResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarification_prompt: Option<Prompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_statement: Option<Statement>,
    /// `BUILDING` when `processBehavior` was `BUILD`, otherwise `NOT_BUILT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BotStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "idleSessionTTLInSeconds", skip_serializing_if = "Option::is_none")]
    pub idle_session_ttl_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_directed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detect_sentiment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

sparse_debug!(PutBotResult {
    name,
    description,
    intents,
    clarification_prompt,
    abort_statement,
    status,
    failure_reason,
    last_updated_date,
    created_date,
    idle_session_ttl_in_seconds,
    voice_id,
    checksum,
    version,
    locale,
    child_directed,
    create_version,
    detect_sentiment,
    tags,
});

fluent_setters!(PutBotResult {
    name / set_name: String,
    description / set_description: String,
    clarification_prompt / set_clarification_prompt: Prompt,
    abort_statement / set_abort_statement: Statement,
    status / set_status: BotStatus,
    failure_reason / set_failure_reason: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    idle_session_ttl_in_seconds / set_idle_session_ttl_in_seconds: i32,
    voice_id / set_voice_id: String,
    checksum / set_checksum: String,
    version / set_version: String,
    locale / set_locale: Locale,
    child_directed / set_child_directed: bool,
    create_version / set_create_version: bool,
    detect_sentiment / set_detect_sentiment: bool,
});

list_appenders!(PutBotResult {
    intents / set_intents: Intent,
    tags / set_tags: Tag,
});

// --- CreateBotVersion ---

/// Snapshots `$LATEST` into a new numbered version.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBotVersionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Checksum of `$LATEST`; the call fails if it changed since it was read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

sparse_debug!(CreateBotVersionRequest { name, checksum });

fluent_setters!(CreateBotVersionRequest {
    name / set_name: String,
    checksum / set_checksum: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBotVersionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarification_prompt: Option<Prompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_statement: Option<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BotStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "idleSessionTTLInSeconds", skip_serializing_if = "Option::is_none")]
    pub idle_session_ttl_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_directed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detect_sentiment: Option<bool>,
}

sparse_debug!(CreateBotVersionResult {
    name,
    description,
    intents,
    clarification_prompt,
    abort_statement,
    status,
    failure_reason,
    last_updated_date,
    created_date,
    idle_session_ttl_in_seconds,
    voice_id,
    checksum,
    version,
    locale,
    child_directed,
    detect_sentiment,
});

fluent_setters!(CreateBotVersionResult {
    name / set_name: String,
    description / set_description: String,
    clarification_prompt / set_clarification_prompt: Prompt,
    abort_statement / set_abort_statement: Statement,
    status / set_status: BotStatus,
    failure_reason / set_failure_reason: String,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    idle_session_ttl_in_seconds / set_idle_session_ttl_in_seconds: i32,
    voice_id / set_voice_id: String,
    checksum / set_checksum: String,
    version / set_version: String,
    locale / set_locale: Locale,
    child_directed / set_child_directed: bool,
    detect_sentiment / set_detect_sentiment: bool,
});

list_appenders!(CreateBotVersionResult {
    intents / set_intents: Intent,
});

/// Summary of one bot version, as listed by `GetBots` and `GetBotVersions`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BotStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

sparse_debug!(BotMetadata { name, description, status, last_updated_date, created_date, version });

fluent_setters!(BotMetadata {
    name / set_name: String,
    description / set_description: String,
    status / set_status: BotStatus,
    last_updated_date / set_last_updated_date: DateTime<Utc>,
    created_date / set_created_date: DateTime<Utc>,
    version / set_version: String,
});

// --- GetBots ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBotsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
}

sparse_debug!(GetBotsRequest { next_token, max_results, name_contains });

fluent_setters!(GetBotsRequest {
    next_token / set_next_token: String,
    max_results / set_max_results: i32,
    name_contains / set_name_contains: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBotsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bots: Option<Vec<BotMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

sparse_debug!(GetBotsResult { bots, next_token });

fluent_setters!(GetBotsResult {
    next_token / set_next_token: String,
});

list_appenders!(GetBotsResult {
    bots / set_bots: BotMetadata,
});

// --- GetBotVersions ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBotVersionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

sparse_debug!(GetBotVersionsRequest { name, next_token, max_results });

fluent_setters!(GetBotVersionsRequest {
    name / set_name: String,
    next_token / set_next_token: String,
    max_results / set_max_results: i32,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBotVersionsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bots: Option<Vec<BotMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

sparse_debug!(GetBotVersionsResult { bots, next_token });

fluent_setters!(GetBotVersionsResult {
    next_token / set_next_token: String,
});

list_appenders!(GetBotVersionsResult {
    bots / set_bots: BotMetadata,
});
