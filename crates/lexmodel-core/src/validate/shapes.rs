use lexmodel_types::alias::{
    ConversationLogsRequest, GetBotAliasRequest, GetBotAliasesRequest, LogSettingsRequest,
    PutBotAliasRequest,
};
use lexmodel_types::bot::{
    CreateBotVersionRequest, GetBotRequest, GetBotVersionsRequest, GetBotsRequest, PutBotRequest,
};
use lexmodel_types::builtin::{
    GetBuiltinIntentRequest, GetBuiltinIntentsRequest, GetBuiltinSlotTypesRequest,
};
use lexmodel_types::channel::{GetBotChannelAssociationRequest, GetBotChannelAssociationsRequest};
use lexmodel_types::constraints::*;
use lexmodel_types::delete::{
    DeleteBotAliasRequest, DeleteBotChannelAssociationRequest, DeleteBotRequest,
    DeleteBotVersionRequest, DeleteIntentRequest, DeleteIntentVersionRequest,
    DeleteSlotTypeRequest, DeleteSlotTypeVersionRequest, DeleteUtterancesRequest,
};
use lexmodel_types::import_export::{GetExportRequest, GetImportRequest, StartImportRequest};
use lexmodel_types::intent::{
    CodeHook, CreateIntentVersionRequest, FulfillmentActivity, GetIntentRequest,
    GetIntentVersionsRequest, GetIntentsRequest, Intent, KendraConfiguration, PutIntentRequest,
};
use lexmodel_types::prompt::{FollowUpPrompt, Message, Prompt, Statement};
use lexmodel_types::slot::{Slot, SlotDefaultValue, SlotDefaultValueSpec};
use lexmodel_types::slot_type::{
    CreateSlotTypeVersionRequest, EnumerationValue, GetSlotTypeRequest,
    GetSlotTypeVersionsRequest, GetSlotTypesRequest, PutSlotTypeRequest, SlotTypeConfiguration,
    SlotTypeRegexConfiguration,
};
use lexmodel_types::tag::{
    ListTagsForResourceRequest, Tag, TagResourceRequest, UntagResourceRequest,
};
use lexmodel_types::utterance::GetUtterancesViewRequest;

use super::{Validate, Validator};

// --- Nested shapes ---

impl Validate for Message {
    fn validate_into(&self, v: &mut Validator) {
        v.required("contentType", &self.content_type)
            .required("content", &self.content)
            .length("content", self.content.as_deref(), &MESSAGE_CONTENT_LENGTH)
            .range("groupNumber", self.group_number, &GROUP_NUMBER_RANGE);
    }
}

impl Validate for Prompt {
    fn validate_into(&self, v: &mut Validator) {
        v.required("messages", &self.messages)
            .items("messages", self.messages.as_deref(), &MESSAGES_ITEMS)
            .each("messages", self.messages.as_deref())
            .required("maxAttempts", &self.max_attempts)
            .range("maxAttempts", self.max_attempts, &MAX_ATTEMPTS_RANGE)
            .length("responseCard", self.response_card.as_deref(), &RESPONSE_CARD_LENGTH);
    }
}

impl Validate for Statement {
    fn validate_into(&self, v: &mut Validator) {
        v.required("messages", &self.messages)
            .items("messages", self.messages.as_deref(), &MESSAGES_ITEMS)
            .each("messages", self.messages.as_deref())
            .length("responseCard", self.response_card.as_deref(), &RESPONSE_CARD_LENGTH);
    }
}

impl Validate for FollowUpPrompt {
    fn validate_into(&self, v: &mut Validator) {
        v.required("prompt", &self.prompt)
            .nested("prompt", self.prompt.as_ref())
            .required("rejectionStatement", &self.rejection_statement)
            .nested("rejectionStatement", self.rejection_statement.as_ref());
    }
}

impl Validate for Tag {
    fn validate_into(&self, v: &mut Validator) {
        v.required("key", &self.key)
            .length("key", self.key.as_deref(), &TAG_KEY_LENGTH)
            .required("value", &self.value)
            .length("value", self.value.as_deref(), &TAG_VALUE_LENGTH);
    }
}

impl Validate for CodeHook {
    fn validate_into(&self, v: &mut Validator) {
        v.required("uri", &self.uri)
            .length("uri", self.uri.as_deref(), &ARN_LENGTH)
            .pattern("uri", self.uri.as_deref(), LAMBDA_ARN_PATTERN)
            .required("messageVersion", &self.message_version)
            .length(
                "messageVersion",
                self.message_version.as_deref(),
                &CODE_HOOK_MESSAGE_VERSION_LENGTH,
            );
    }
}

impl Validate for FulfillmentActivity {
    fn validate_into(&self, v: &mut Validator) {
        v.required("type", &self.r#type)
            .nested("codeHook", self.code_hook.as_ref());
    }
}

impl Validate for KendraConfiguration {
    fn validate_into(&self, v: &mut Validator) {
        v.required("kendraIndex", &self.kendra_index)
            .length("kendraIndex", self.kendra_index.as_deref(), &ARN_LENGTH)
            .pattern("kendraIndex", self.kendra_index.as_deref(), KENDRA_INDEX_ARN_PATTERN)
            .required("role", &self.role)
            .length("role", self.role.as_deref(), &ARN_LENGTH)
            .pattern("role", self.role.as_deref(), KENDRA_ROLE_ARN_PATTERN);
    }
}

impl Validate for Intent {
    fn validate_into(&self, v: &mut Validator) {
        v.required("intentName", &self.intent_name)
            .length("intentName", self.intent_name.as_deref(), &INTENT_NAME_LENGTH)
            .pattern("intentName", self.intent_name.as_deref(), INTENT_NAME_PATTERN)
            .required("intentVersion", &self.intent_version)
            .length("intentVersion", self.intent_version.as_deref(), &VERSION_LENGTH)
            .pattern("intentVersion", self.intent_version.as_deref(), VERSION_PATTERN);
    }
}

impl Validate for SlotDefaultValue {
    fn validate_into(&self, v: &mut Validator) {
        v.required("defaultValue", &self.default_value).length(
            "defaultValue",
            self.default_value.as_deref(),
            &SLOT_DEFAULT_VALUE_LENGTH,
        );
    }
}

impl Validate for SlotDefaultValueSpec {
    fn validate_into(&self, v: &mut Validator) {
        v.required("defaultValueList", &self.default_value_list)
            .items(
                "defaultValueList",
                self.default_value_list.as_deref(),
                &SLOT_DEFAULT_VALUES_ITEMS,
            )
            .each("defaultValueList", self.default_value_list.as_deref());
    }
}

impl Validate for Slot {
    fn validate_into(&self, v: &mut Validator) {
        v.required("name", &self.name)
            .length("name", self.name.as_deref(), &SLOT_NAME_LENGTH)
            .pattern("name", self.name.as_deref(), SLOT_NAME_PATTERN)
            .length("description", self.description.as_deref(), &DESCRIPTION_LENGTH)
            .required("slotConstraint", &self.slot_constraint)
            .length("slotType", self.slot_type.as_deref(), &SLOT_TYPE_NAME_LENGTH)
            .pattern("slotType", self.slot_type.as_deref(), SLOT_TYPE_NAME_PATTERN)
            .length("slotTypeVersion", self.slot_type_version.as_deref(), &VERSION_LENGTH)
            .pattern("slotTypeVersion", self.slot_type_version.as_deref(), VERSION_PATTERN)
            .nested("valueElicitationPrompt", self.value_elicitation_prompt.as_ref())
            .range("priority", self.priority, &SLOT_PRIORITY_RANGE)
            .items(
                "sampleUtterances",
                self.sample_utterances.as_deref(),
                &SLOT_SAMPLE_UTTERANCES_ITEMS,
            )
            .each_str(
                "sampleUtterances",
                self.sample_utterances.as_deref(),
                &SAMPLE_UTTERANCE_LENGTH,
                None,
            )
            .length("responseCard", self.response_card.as_deref(), &RESPONSE_CARD_LENGTH)
            .nested("defaultValueSpec", self.default_value_spec.as_ref());
    }
}

impl Validate for LogSettingsRequest {
    fn validate_into(&self, v: &mut Validator) {
        v.required("logType", &self.log_type)
            .required("destination", &self.destination)
            .length("kmsKeyArn", self.kms_key_arn.as_deref(), &ARN_LENGTH)
            .pattern("kmsKeyArn", self.kms_key_arn.as_deref(), KMS_KEY_ARN_PATTERN)
            .required("resourceArn", &self.resource_arn)
            .length("resourceArn", self.resource_arn.as_deref(), &LOG_RESOURCE_ARN_LENGTH)
            .pattern("resourceArn", self.resource_arn.as_deref(), LOG_RESOURCE_ARN_PATTERN);
    }
}

impl Validate for ConversationLogsRequest {
    fn validate_into(&self, v: &mut Validator) {
        v.required("logSettings", &self.log_settings)
            .each("logSettings", self.log_settings.as_deref())
            .required("iamRoleArn", &self.iam_role_arn)
            .length("iamRoleArn", self.iam_role_arn.as_deref(), &ARN_LENGTH)
            .pattern("iamRoleArn", self.iam_role_arn.as_deref(), IAM_ROLE_ARN_PATTERN);
    }
}

impl Validate for EnumerationValue {
    fn validate_into(&self, v: &mut Validator) {
        v.required("value", &self.value)
            .length("value", self.value.as_deref(), &ENUMERATION_VALUE_LENGTH)
            .each_str(
                "synonyms",
                self.synonyms.as_deref(),
                &ENUMERATION_VALUE_LENGTH,
                None,
            );
    }
}

impl Validate for SlotTypeRegexConfiguration {
    fn validate_into(&self, v: &mut Validator) {
        v.required("pattern", &self.pattern).length(
            "pattern",
            self.pattern.as_deref(),
            &REGEX_PATTERN_LENGTH,
        );
    }
}

impl Validate for SlotTypeConfiguration {
    fn validate_into(&self, v: &mut Validator) {
        v.nested("regexConfiguration", self.regex_configuration.as_ref());
    }
}

fn bot_name(v: &mut Validator, member: &'static str, value: &Option<String>) {
    v.required(member, value)
        .length(member, value.as_deref(), &BOT_NAME_LENGTH)
        .pattern(member, value.as_deref(), BOT_NAME_PATTERN);
}

fn alias_name(v: &mut Validator, member: &'static str, value: &Option<String>) {
    v.required(member, value)
        .length(member, value.as_deref(), &ALIAS_NAME_LENGTH)
        .pattern(member, value.as_deref(), ALIAS_NAME_PATTERN);
}

fn version(v: &mut Validator, member: &'static str, value: &Option<String>) {
    v.required(member, value)
        .length(member, value.as_deref(), &VERSION_LENGTH)
        .pattern(member, value.as_deref(), VERSION_PATTERN);
}

fn page(v: &mut Validator, max_results: Option<i32>, name_contains: Option<&str>) {
    v.range("maxResults", max_results, &MAX_RESULTS_RANGE)
        .length("nameContains", name_contains, &NAME_FILTER_LENGTH)
        .pattern("nameContains", name_contains, NAME_FILTER_PATTERN);
}

fn tags(v: &mut Validator, value: Option<&[Tag]>) {
    v.items("tags", value, &TAGS_ITEMS).each("tags", value);
}

fn intent_name(v: &mut Validator, member: &'static str, value: &Option<String>) {
    v.required(member, value)
        .length(member, value.as_deref(), &INTENT_NAME_LENGTH)
        .pattern(member, value.as_deref(), INTENT_NAME_PATTERN);
}

fn slot_type_name(v: &mut Validator, member: &'static str, value: &Option<String>) {
    v.required(member, value)
        .length(member, value.as_deref(), &CUSTOM_SLOT_TYPE_NAME_LENGTH)
        .pattern(member, value.as_deref(), CUSTOM_SLOT_TYPE_NAME_PATTERN);
}

/// Deletes address a numbered version; `$LATEST` goes away with the resource.
fn numbered_version(v: &mut Validator, member: &'static str, value: &Option<String>) {
    v.required(member, value)
        .length(member, value.as_deref(), &VERSION_LENGTH)
        .pattern(member, value.as_deref(), NUMBERED_VERSION_PATTERN);
}

fn resource_arn(v: &mut Validator, value: &Option<String>) {
    v.required("resourceArn", value)
        .length("resourceArn", value.as_deref(), &TAGGABLE_ARN_LENGTH);
}

// --- Requests ---

impl Validate for GetBotRequest {
    fn validate_into(&self, v: &mut Validator) {
        bot_name(v, "name", &self.name);
        v.required("versionOrAlias", &self.version_or_alias)
            .length(
                "versionOrAlias",
                self.version_or_alias.as_deref(),
                &VERSION_OR_ALIAS_LENGTH,
            )
            .pattern(
                "versionOrAlias",
                self.version_or_alias.as_deref(),
                VERSION_OR_ALIAS_PATTERN,
            );
    }
}

impl Validate for PutBotRequest {
    fn validate_into(&self, v: &mut Validator) {
        bot_name(v, "name", &self.name);
        v.length("description", self.description.as_deref(), &DESCRIPTION_LENGTH)
            .each("intents", self.intents.as_deref())
            .nested("clarificationPrompt", self.clarification_prompt.as_ref())
            .nested("abortStatement", self.abort_statement.as_ref())
            .range(
                "idleSessionTTLInSeconds",
                self.idle_session_ttl_in_seconds,
                &IDLE_SESSION_TTL_RANGE,
            )
            .required("locale", &self.locale)
            .required("childDirected", &self.child_directed);
        tags(v, self.tags.as_deref());
    }
}

impl Validate for CreateBotVersionRequest {
    fn validate_into(&self, v: &mut Validator) {
        bot_name(v, "name", &self.name);
    }
}

impl Validate for GetBotAliasRequest {
    fn validate_into(&self, v: &mut Validator) {
        alias_name(v, "name", &self.name);
        bot_name(v, "botName", &self.bot_name);
    }
}

impl Validate for GetBotAliasesRequest {
    fn validate_into(&self, v: &mut Validator) {
        bot_name(v, "botName", &self.bot_name);
        page(v, self.max_results, self.name_contains.as_deref());
    }
}

impl Validate for PutBotAliasRequest {
    fn validate_into(&self, v: &mut Validator) {
        alias_name(v, "name", &self.name);
        v.length("description", self.description.as_deref(), &DESCRIPTION_LENGTH);
        version(v, "botVersion", &self.bot_version);
        bot_name(v, "botName", &self.bot_name);
        v.nested("conversationLogs", self.conversation_logs.as_ref());
        tags(v, self.tags.as_deref());
    }
}

impl Validate for GetBotChannelAssociationRequest {
    fn validate_into(&self, v: &mut Validator) {
        v.required("name", &self.name)
            .length("name", self.name.as_deref(), &CHANNEL_NAME_LENGTH)
            .pattern("name", self.name.as_deref(), CHANNEL_NAME_PATTERN);
        bot_name(v, "botName", &self.bot_name);
        alias_name(v, "botAlias", &self.bot_alias);
    }
}

impl Validate for GetBotChannelAssociationsRequest {
    fn validate_into(&self, v: &mut Validator) {
        bot_name(v, "botName", &self.bot_name);
        alias_name(v, "botAlias", &self.bot_alias);
        page(v, self.max_results, self.name_contains.as_deref());
    }
}

impl Validate for GetIntentRequest {
    fn validate_into(&self, v: &mut Validator) {
        intent_name(v, "name", &self.name);
        version(v, "version", &self.version);
    }
}

impl Validate for PutIntentRequest {
    fn validate_into(&self, v: &mut Validator) {
        v.required("name", &self.name)
            .length("name", self.name.as_deref(), &INTENT_NAME_LENGTH)
            .pattern("name", self.name.as_deref(), INTENT_NAME_PATTERN)
            .length("description", self.description.as_deref(), &DESCRIPTION_LENGTH)
            .items("slots", self.slots.as_deref(), &INTENT_SLOTS_ITEMS)
            .each("slots", self.slots.as_deref())
            .items(
                "sampleUtterances",
                self.sample_utterances.as_deref(),
                &INTENT_SAMPLE_UTTERANCES_ITEMS,
            )
            .each_str(
                "sampleUtterances",
                self.sample_utterances.as_deref(),
                &SAMPLE_UTTERANCE_LENGTH,
                None,
            )
            .nested("confirmationPrompt", self.confirmation_prompt.as_ref())
            .nested("rejectionStatement", self.rejection_statement.as_ref())
            .nested("followUpPrompt", self.follow_up_prompt.as_ref())
            .nested("conclusionStatement", self.conclusion_statement.as_ref())
            .nested("dialogCodeHook", self.dialog_code_hook.as_ref())
            .nested("fulfillmentActivity", self.fulfillment_activity.as_ref())
            .nested("kendraConfiguration", self.kendra_configuration.as_ref());
    }
}

impl Validate for GetUtterancesViewRequest {
    fn validate_into(&self, v: &mut Validator) {
        bot_name(v, "botName", &self.bot_name);
        v.required("botVersions", &self.bot_versions)
            .items("botVersions", self.bot_versions.as_deref(), &BOT_VERSIONS_ITEMS)
            .each_str(
                "botVersions",
                self.bot_versions.as_deref(),
                &VERSION_LENGTH,
                Some(VERSION_PATTERN),
            )
            .required("statusType", &self.status_type);
    }
}

impl Validate for StartImportRequest {
    fn validate_into(&self, v: &mut Validator) {
        v.required("payload", &self.payload)
            .required("resourceType", &self.resource_type)
            .required("mergeStrategy", &self.merge_strategy);
        tags(v, self.tags.as_deref());
    }
}

impl Validate for GetImportRequest {
    fn validate_into(&self, v: &mut Validator) {
        v.required("importId", &self.import_id);
    }
}

impl Validate for GetExportRequest {
    fn validate_into(&self, v: &mut Validator) {
        v.required("name", &self.name)
            .length("name", self.name.as_deref(), &EXPORT_NAME_LENGTH)
            .pattern("name", self.name.as_deref(), EXPORT_NAME_PATTERN)
            .required("version", &self.version)
            .length("version", self.version.as_deref(), &VERSION_LENGTH)
            .pattern("version", self.version.as_deref(), EXPORT_VERSION_PATTERN)
            .required("resourceType", &self.resource_type)
            .required("exportType", &self.export_type);
    }
}

impl Validate for GetBotsRequest {
    fn validate_into(&self, v: &mut Validator) {
        page(v, self.max_results, self.name_contains.as_deref());
    }
}

impl Validate for GetBotVersionsRequest {
    fn validate_into(&self, v: &mut Validator) {
        bot_name(v, "name", &self.name);
        page(v, self.max_results, None);
    }
}

impl Validate for DeleteBotRequest {
    fn validate_into(&self, v: &mut Validator) {
        bot_name(v, "name", &self.name);
    }
}

impl Validate for DeleteBotVersionRequest {
    fn validate_into(&self, v: &mut Validator) {
        bot_name(v, "name", &self.name);
        numbered_version(v, "version", &self.version);
    }
}

impl Validate for DeleteBotAliasRequest {
    fn validate_into(&self, v: &mut Validator) {
        alias_name(v, "name", &self.name);
        bot_name(v, "botName", &self.bot_name);
    }
}

impl Validate for DeleteBotChannelAssociationRequest {
    fn validate_into(&self, v: &mut Validator) {
        v.required("name", &self.name)
            .length("name", self.name.as_deref(), &CHANNEL_NAME_LENGTH)
            .pattern("name", self.name.as_deref(), CHANNEL_NAME_PATTERN);
        bot_name(v, "botName", &self.bot_name);
        alias_name(v, "botAlias", &self.bot_alias);
    }
}

impl Validate for GetIntentsRequest {
    fn validate_into(&self, v: &mut Validator) {
        page(v, self.max_results, self.name_contains.as_deref());
    }
}

impl Validate for GetIntentVersionsRequest {
    fn validate_into(&self, v: &mut Validator) {
        intent_name(v, "name", &self.name);
        page(v, self.max_results, None);
    }
}

impl Validate for CreateIntentVersionRequest {
    fn validate_into(&self, v: &mut Validator) {
        intent_name(v, "name", &self.name);
    }
}

impl Validate for DeleteIntentRequest {
    fn validate_into(&self, v: &mut Validator) {
        intent_name(v, "name", &self.name);
    }
}

impl Validate for DeleteIntentVersionRequest {
    fn validate_into(&self, v: &mut Validator) {
        intent_name(v, "name", &self.name);
        numbered_version(v, "version", &self.version);
    }
}

impl Validate for GetSlotTypeRequest {
    fn validate_into(&self, v: &mut Validator) {
        slot_type_name(v, "name", &self.name);
        version(v, "version", &self.version);
    }
}

impl Validate for GetSlotTypesRequest {
    fn validate_into(&self, v: &mut Validator) {
        page(v, self.max_results, self.name_contains.as_deref());
    }
}

impl Validate for GetSlotTypeVersionsRequest {
    fn validate_into(&self, v: &mut Validator) {
        slot_type_name(v, "name", &self.name);
        page(v, self.max_results, None);
    }
}

impl Validate for PutSlotTypeRequest {
    fn validate_into(&self, v: &mut Validator) {
        slot_type_name(v, "name", &self.name);
        v.length("description", self.description.as_deref(), &DESCRIPTION_LENGTH)
            .items(
                "enumerationValues",
                self.enumeration_values.as_deref(),
                &ENUMERATION_VALUES_ITEMS,
            )
            .each("enumerationValues", self.enumeration_values.as_deref())
            .length(
                "parentSlotTypeSignature",
                self.parent_slot_type_signature.as_deref(),
                &PARENT_SLOT_TYPE_SIGNATURE_LENGTH,
            )
            .pattern(
                "parentSlotTypeSignature",
                self.parent_slot_type_signature.as_deref(),
                PARENT_SLOT_TYPE_SIGNATURE_PATTERN,
            )
            .items(
                "slotTypeConfigurations",
                self.slot_type_configurations.as_deref(),
                &SLOT_TYPE_CONFIGURATIONS_ITEMS,
            )
            .each(
                "slotTypeConfigurations",
                self.slot_type_configurations.as_deref(),
            );
    }
}

impl Validate for CreateSlotTypeVersionRequest {
    fn validate_into(&self, v: &mut Validator) {
        slot_type_name(v, "name", &self.name);
    }
}

impl Validate for DeleteSlotTypeRequest {
    fn validate_into(&self, v: &mut Validator) {
        slot_type_name(v, "name", &self.name);
    }
}

impl Validate for DeleteSlotTypeVersionRequest {
    fn validate_into(&self, v: &mut Validator) {
        slot_type_name(v, "name", &self.name);
        numbered_version(v, "version", &self.version);
    }
}

impl Validate for GetBuiltinIntentRequest {
    fn validate_into(&self, v: &mut Validator) {
        v.required("signature", &self.signature);
    }
}

impl Validate for GetBuiltinIntentsRequest {
    fn validate_into(&self, v: &mut Validator) {
        v.range("maxResults", self.max_results, &MAX_RESULTS_RANGE);
    }
}

impl Validate for GetBuiltinSlotTypesRequest {
    fn validate_into(&self, v: &mut Validator) {
        v.range("maxResults", self.max_results, &MAX_RESULTS_RANGE);
    }
}

impl Validate for DeleteUtterancesRequest {
    fn validate_into(&self, v: &mut Validator) {
        bot_name(v, "botName", &self.bot_name);
        v.required("userId", &self.user_id)
            .length("userId", self.user_id.as_deref(), &USER_ID_LENGTH);
    }
}

impl Validate for ListTagsForResourceRequest {
    fn validate_into(&self, v: &mut Validator) {
        resource_arn(v, &self.resource_arn);
    }
}

impl Validate for TagResourceRequest {
    fn validate_into(&self, v: &mut Validator) {
        resource_arn(v, &self.resource_arn);
        v.required("tags", &self.tags);
        tags(v, self.tags.as_deref());
    }
}

impl Validate for UntagResourceRequest {
    fn validate_into(&self, v: &mut Validator) {
        resource_arn(v, &self.resource_arn);
        v.required("tagKeys", &self.tag_keys)
            .items("tagKeys", self.tag_keys.as_deref(), &TAG_KEYS_ITEMS)
            .each_str("tagKeys", self.tag_keys.as_deref(), &TAG_KEY_LENGTH, None);
    }
}

#[cfg(test)]
mod tests {
    use lexmodel_types::enums::{
        ContentType, ExportType, Locale, ResourceType, SlotConstraint, StatusType,
    };

    use super::*;
    use crate::validate::{ViolationKind, validate};

    fn prompt() -> Prompt {
        Prompt::default()
            .messages(Message::plain_text("What size pizza?"))
            .max_attempts(2)
    }

    #[test]
    fn test_put_bot_minimal_is_valid() {
        let request = PutBotRequest::default()
            .name("PizzaBot")
            .locale(Locale::EnUs)
            .child_directed(false)
            .intents(Intent::new("OrderPizza", "$LATEST"));
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_put_bot_reports_nested_paths() {
        let request = PutBotRequest::default()
            .name("P")
            .locale(Locale::EnUs)
            .child_directed(false)
            .idle_session_ttl_in_seconds(30)
            .intents(Intent::new("OrderPizza", "latest"))
            .clarification_prompt(prompt().max_attempts(9));
        let report = validate(&request).unwrap_err();
        assert!(report.has("name"));
        assert!(report.has("idleSessionTTLInSeconds"));
        assert!(report.has("intents[0].intentVersion"));
        assert!(report.has("clarificationPrompt.maxAttempts"));
        assert_eq!(report.violations.len(), 4);
    }

    #[test]
    fn test_put_intent_slot_checks() {
        let slot = Slot::default()
            .name("size")
            .slot_constraint(SlotConstraint::Required)
            .slot_type("AMAZON.NUMBER")
            .slot_type_version("1")
            .value_elicitation_prompt(prompt())
            .priority(101);
        let request = PutIntentRequest::default()
            .name("OrderPizza")
            .slots(slot)
            .sample_utterances("I want a pizza")
            .sample_utterances("");
        let report = validate(&request).unwrap_err();
        assert!(report.has("slots[0].priority"));
        assert!(report.has("sampleUtterances[1]"));
        assert_eq!(report.violations.len(), 2);
    }

    #[test]
    fn test_get_bot_version_or_alias() {
        for accepted in ["$LATEST", "12", "prod", "beta_two"] {
            let request = GetBotRequest::default()
                .name("PizzaBot")
                .version_or_alias(accepted);
            assert!(validate(&request).is_ok(), "{accepted} rejected");
        }

        let report = validate(&GetBotRequest::default().name("PizzaBot").version_or_alias("v-1"))
            .unwrap_err();
        assert_eq!(report.violations.len(), 1);
        assert!(matches!(
            report.violations[0].kind,
            ViolationKind::Pattern { .. }
        ));

        let report = validate(&GetBotRequest::default().name("PizzaBot").version_or_alias(""))
            .unwrap_err();
        assert!(matches!(
            report.violations[0].kind,
            ViolationKind::Length { actual: 0, .. }
        ));
    }

    #[test]
    fn test_put_slot_type_checks_values_and_regex() {
        let request = PutSlotTypeRequest::default()
            .name("PizzaSize")
            .enumeration_values(EnumerationValue::from("large").synonyms("big").synonyms(""))
            .enumeration_values(EnumerationValue::default())
            .slot_type_configurations(SlotTypeConfiguration::default().regex_configuration(
                SlotTypeRegexConfiguration::default(),
            ));
        let report = validate(&request).unwrap_err();
        assert!(report.has("enumerationValues[0].synonyms[1]"));
        assert!(report.has("enumerationValues[1].value"));
        assert!(report.has("slotTypeConfigurations[0].regexConfiguration.pattern"));
        assert_eq!(report.violations.len(), 3);
    }

    #[test]
    fn test_slot_type_names_reject_builtin_prefix() {
        let request = GetSlotTypeRequest::default()
            .name("AMAZON.Number")
            .version("1");
        let report = validate(&request).unwrap_err();
        assert!(report.has("name"));

        let request = PutSlotTypeRequest::default()
            .name("Crust")
            .parent_slot_type_signature("AMAZON.AlphaNumeric");
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_delete_versions_must_be_numbered() {
        let request = DeleteIntentVersionRequest::default()
            .name("OrderPizza")
            .version("$LATEST");
        let report = validate(&request).unwrap_err();
        assert!(matches!(
            report.violations[0].kind,
            ViolationKind::Pattern { .. }
        ));

        let request = DeleteBotVersionRequest::default().name("PizzaBot").version("7");
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_delete_utterances_user_id_length() {
        let request = DeleteUtterancesRequest::default()
            .bot_name("PizzaBot")
            .user_id("u");
        let report = validate(&request).unwrap_err();
        assert_eq!(
            report.violations[0].kind,
            ViolationKind::Length {
                min: 2,
                max: 100,
                actual: 1
            }
        );
    }

    #[test]
    fn test_untag_checks_each_key() {
        let long_key = "k".repeat(129);
        let request = UntagResourceRequest::default()
            .resource_arn("arn:aws:lex:us-east-1:123456789012:bot:PizzaBot")
            .tag_keys("env")
            .tag_keys(long_key.as_str());
        let report = validate(&request).unwrap_err();
        assert!(report.has("tagKeys[1]"));
        assert_eq!(report.violations.len(), 1);

        let report = validate(&UntagResourceRequest::default()).unwrap_err();
        assert!(report.has("resourceArn"));
        assert!(report.has("tagKeys"));
    }

    #[test]
    fn test_tag_resource_requires_tags() {
        let request = TagResourceRequest::default()
            .resource_arn("arn:aws:lex:us-east-1:123456789012:bot:PizzaBot");
        let report = validate(&request).unwrap_err();
        assert!(report.has("tags"));

        let request = request.tags(Tag::new("env", "prod"));
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_list_requests_check_paging() {
        assert!(validate(&GetBotsRequest::default()).is_ok());

        let report = validate(&GetIntentsRequest::default().max_results(0)).unwrap_err();
        assert!(report.has("maxResults"));

        let report = validate(&GetBuiltinIntentsRequest::default().max_results(51)).unwrap_err();
        assert!(report.has("maxResults"));

        let report = validate(&GetBuiltinIntentRequest::default()).unwrap_err();
        assert!(report.has("signature"));
    }

    #[test]
    fn test_message_without_content_type() {
        let statement = Statement::default().messages(Message::default().content("bye"));
        let mut v = Validator::new();
        statement.validate_into(&mut v);
        assert_eq!(v.violations().len(), 1);
        assert_eq!(v.violations()[0].path, "messages[0].contentType");
        assert_eq!(v.violations()[0].kind, ViolationKind::Required);
    }

    #[test]
    fn test_code_hook_requires_lambda_arn() {
        let hook = CodeHook::default()
            .uri("arn:aws:lambda:us-east-1:123456789012:function:OrderPizza")
            .message_version("1.0");
        assert!(validate(&hook).is_ok());

        let hook = hook.uri("https://example.com/hook");
        let report = validate(&hook).unwrap_err();
        assert!(matches!(
            report.violations[0].kind,
            ViolationKind::Pattern { .. }
        ));
    }

    #[test]
    fn test_utterances_view_version_limits() {
        let mut request = GetUtterancesViewRequest::default()
            .bot_name("PizzaBot")
            .status_type(StatusType::Detected);
        for version in ["1", "2", "3", "4", "5", "6"] {
            request = request.bot_versions(version);
        }
        let report = validate(&request).unwrap_err();
        assert_eq!(
            report.violations[0].kind,
            ViolationKind::Items {
                min: 1,
                max: 5,
                actual: 6
            }
        );
    }

    #[test]
    fn test_get_export_requires_every_member() {
        let report = validate(&GetExportRequest::default()).unwrap_err();
        for member in ["name", "version", "resourceType", "exportType"] {
            assert!(report.has(member), "missing violation for {member}");
        }

        let request = GetExportRequest::default()
            .name("PizzaBot")
            .version("3")
            .resource_type(ResourceType::Bot)
            .export_type(ExportType::Lex);
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_conversation_logs() {
        let logs = ConversationLogsRequest::default()
            .log_settings(
                LogSettingsRequest::default()
                    .log_type("TEXT")
                    .destination("CLOUDWATCH_LOGS")
                    .resource_arn("arn:aws:logs:us-east-1:123456789012:log-group:lex-logs"),
            )
            .iam_role_arn("arn:aws:iam::123456789012:role/LexLogs");
        assert!(validate(&logs).is_ok());
    }

    #[test]
    fn test_unknown_enum_values_are_not_violations() {
        let message = Message::default()
            .content_type(ContentType::Unknown("Markdown".to_string()))
            .content("hello");
        assert!(validate(&message).is_ok());
    }
}
