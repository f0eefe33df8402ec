use lexmodel_types::alias::{
    GetBotAliasRequest, GetBotAliasResult, GetBotAliasesRequest, GetBotAliasesResult,
    PutBotAliasRequest, PutBotAliasResult,
};
use lexmodel_types::bot::{
    CreateBotVersionRequest, CreateBotVersionResult, GetBotRequest, GetBotResult,
    GetBotVersionsRequest, GetBotVersionsResult, GetBotsRequest, GetBotsResult, PutBotRequest,
    PutBotResult,
};
use lexmodel_types::builtin::{
    GetBuiltinIntentRequest, GetBuiltinIntentResult, GetBuiltinIntentsRequest,
    GetBuiltinIntentsResult, GetBuiltinSlotTypesRequest, GetBuiltinSlotTypesResult,
};
use lexmodel_types::channel::{
    GetBotChannelAssociationRequest, GetBotChannelAssociationResult,
    GetBotChannelAssociationsRequest, GetBotChannelAssociationsResult,
};
use lexmodel_types::delete::{
    DeleteBotAliasRequest, DeleteBotChannelAssociationRequest, DeleteBotRequest,
    DeleteBotVersionRequest, DeleteIntentRequest, DeleteIntentVersionRequest,
    DeleteSlotTypeRequest, DeleteSlotTypeVersionRequest, DeleteUtterancesRequest, EmptyResult,
};
use lexmodel_types::enums::Locale;
use lexmodel_types::import_export::{
    GetExportRequest, GetExportResult, GetImportRequest, GetImportResult, StartImportRequest,
    StartImportResult,
};
use lexmodel_types::intent::{
    CreateIntentVersionRequest, CreateIntentVersionResult, GetIntentRequest, GetIntentResult,
    GetIntentVersionsRequest, GetIntentVersionsResult, GetIntentsRequest, GetIntentsResult,
    PutIntentRequest, PutIntentResult,
};
use lexmodel_types::slot_type::{
    CreateSlotTypeVersionRequest, CreateSlotTypeVersionResult, GetSlotTypeRequest,
    GetSlotTypeResult, GetSlotTypeVersionsRequest, GetSlotTypeVersionsResult,
    GetSlotTypesRequest, GetSlotTypesResult, PutSlotTypeRequest, PutSlotTypeResult,
};
use lexmodel_types::tag::{
    ListTagsForResourceRequest, ListTagsForResourceResult, TagResourceRequest,
    TagResourceResult, UntagResourceRequest, UntagResourceResult,
};
use lexmodel_types::utterance::{GetUtterancesViewRequest, GetUtterancesViewResult};

use super::{HttpMethod, LexOperation, label};
use crate::error::BindingError;

const LATEST: &str = "$LATEST";

fn push_opt(query: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<String>) {
    if let Some(value) = value {
        query.push((key, value));
    }
}

fn page_query(
    next_token: &Option<String>,
    max_results: Option<i32>,
    name_contains: &Option<String>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    push_opt(&mut query, "nextToken", next_token.clone());
    push_opt(&mut query, "maxResults", max_results.map(|n| n.to_string()));
    push_opt(&mut query, "nameContains", name_contains.clone());
    query
}

fn builtin_query(
    locale: &Option<Locale>,
    signature_contains: &Option<String>,
    next_token: &Option<String>,
    max_results: Option<i32>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    push_opt(&mut query, "locale", locale.as_ref().map(|l| l.as_str().to_string()));
    push_opt(&mut query, "signatureContains", signature_contains.clone());
    push_opt(&mut query, "nextToken", next_token.clone());
    push_opt(&mut query, "maxResults", max_results.map(|n| n.to_string()));
    query
}

// --- Bots ---

impl LexOperation for GetBotRequest {
    const NAME: &'static str = "GetBot";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/bots/{name}/versions/{versionoralias}";
    type Output = GetBotResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("name", &self.name)?,
            "versions".into(),
            label("versionOrAlias", &self.version_or_alias)?,
        ])
    }
}

impl LexOperation for PutBotRequest {
    const NAME: &'static str = "PutBot";
    const METHOD: HttpMethod = HttpMethod::Put;
    const PATH: &'static str = "/bots/{name}/versions/$LATEST";
    const URI_MEMBERS: &'static [&'static str] = &["name"];
    type Output = PutBotResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("name", &self.name)?,
            "versions".into(),
            LATEST.into(),
        ])
    }
}

impl LexOperation for CreateBotVersionRequest {
    const NAME: &'static str = "CreateBotVersion";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/bots/{name}/versions";
    const URI_MEMBERS: &'static [&'static str] = &["name"];
    type Output = CreateBotVersionResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["bots".into(), label("name", &self.name)?, "versions".into()])
    }
}

impl LexOperation for GetBotsRequest {
    const NAME: &'static str = "GetBots";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/bots/";
    type Output = GetBotsResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["bots".into(), String::new()])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(&self.next_token, self.max_results, &self.name_contains)
    }
}

impl LexOperation for GetBotVersionsRequest {
    const NAME: &'static str = "GetBotVersions";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/bots/{name}/versions/";
    type Output = GetBotVersionsResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("name", &self.name)?,
            "versions".into(),
            String::new(),
        ])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(&self.next_token, self.max_results, &None)
    }
}

impl LexOperation for DeleteBotRequest {
    const NAME: &'static str = "DeleteBot";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/bots/{name}";
    type Output = EmptyResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["bots".into(), label("name", &self.name)?])
    }
}

impl LexOperation for DeleteBotVersionRequest {
    const NAME: &'static str = "DeleteBotVersion";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/bots/{name}/versions/{version}";
    type Output = EmptyResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("name", &self.name)?,
            "versions".into(),
            label("version", &self.version)?,
        ])
    }
}

// --- Aliases ---

impl LexOperation for GetBotAliasRequest {
    const NAME: &'static str = "GetBotAlias";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/bots/{botName}/aliases/{name}";
    type Output = GetBotAliasResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("botName", &self.bot_name)?,
            "aliases".into(),
            label("name", &self.name)?,
        ])
    }
}

impl LexOperation for GetBotAliasesRequest {
    const NAME: &'static str = "GetBotAliases";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/bots/{botName}/aliases/";
    type Output = GetBotAliasesResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("botName", &self.bot_name)?,
            "aliases".into(),
            String::new(),
        ])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(&self.next_token, self.max_results, &self.name_contains)
    }
}

impl LexOperation for PutBotAliasRequest {
    const NAME: &'static str = "PutBotAlias";
    const METHOD: HttpMethod = HttpMethod::Put;
    const PATH: &'static str = "/bots/{botName}/aliases/{name}";
    const URI_MEMBERS: &'static [&'static str] = &["name", "botName"];
    type Output = PutBotAliasResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("botName", &self.bot_name)?,
            "aliases".into(),
            label("name", &self.name)?,
        ])
    }
}

impl LexOperation for DeleteBotAliasRequest {
    const NAME: &'static str = "DeleteBotAlias";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/bots/{botName}/aliases/{name}";
    type Output = EmptyResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("botName", &self.bot_name)?,
            "aliases".into(),
            label("name", &self.name)?,
        ])
    }
}

// --- Channel associations ---

impl LexOperation for GetBotChannelAssociationRequest {
    const NAME: &'static str = "GetBotChannelAssociation";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/bots/{botName}/aliases/{aliasName}/channels/{name}";
    type Output = GetBotChannelAssociationResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("botName", &self.bot_name)?,
            "aliases".into(),
            label("botAlias", &self.bot_alias)?,
            "channels".into(),
            label("name", &self.name)?,
        ])
    }
}

impl LexOperation for GetBotChannelAssociationsRequest {
    const NAME: &'static str = "GetBotChannelAssociations";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/bots/{botName}/aliases/{aliasName}/channels/";
    type Output = GetBotChannelAssociationsResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("botName", &self.bot_name)?,
            "aliases".into(),
            label("botAlias", &self.bot_alias)?,
            "channels".into(),
            String::new(),
        ])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(&self.next_token, self.max_results, &self.name_contains)
    }
}

impl LexOperation for DeleteBotChannelAssociationRequest {
    const NAME: &'static str = "DeleteBotChannelAssociation";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/bots/{botName}/aliases/{aliasName}/channels/{name}";
    type Output = EmptyResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("botName", &self.bot_name)?,
            "aliases".into(),
            label("botAlias", &self.bot_alias)?,
            "channels".into(),
            label("name", &self.name)?,
        ])
    }
}

// --- Intents ---

impl LexOperation for GetIntentRequest {
    const NAME: &'static str = "GetIntent";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/intents/{name}/versions/{version}";
    type Output = GetIntentResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "intents".into(),
            label("name", &self.name)?,
            "versions".into(),
            label("version", &self.version)?,
        ])
    }
}

impl LexOperation for PutIntentRequest {
    const NAME: &'static str = "PutIntent";
    const METHOD: HttpMethod = HttpMethod::Put;
    const PATH: &'static str = "/intents/{name}/versions/$LATEST";
    const URI_MEMBERS: &'static [&'static str] = &["name"];
    type Output = PutIntentResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "intents".into(),
            label("name", &self.name)?,
            "versions".into(),
            LATEST.into(),
        ])
    }
}

impl LexOperation for GetIntentsRequest {
    const NAME: &'static str = "GetIntents";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/intents/";
    type Output = GetIntentsResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["intents".into(), String::new()])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(&self.next_token, self.max_results, &self.name_contains)
    }
}

impl LexOperation for GetIntentVersionsRequest {
    const NAME: &'static str = "GetIntentVersions";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/intents/{name}/versions/";
    type Output = GetIntentVersionsResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "intents".into(),
            label("name", &self.name)?,
            "versions".into(),
            String::new(),
        ])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(&self.next_token, self.max_results, &None)
    }
}

impl LexOperation for CreateIntentVersionRequest {
    const NAME: &'static str = "CreateIntentVersion";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/intents/{name}/versions";
    const URI_MEMBERS: &'static [&'static str] = &["name"];
    type Output = CreateIntentVersionResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["intents".into(), label("name", &self.name)?, "versions".into()])
    }
}

impl LexOperation for DeleteIntentRequest {
    const NAME: &'static str = "DeleteIntent";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/intents/{name}";
    type Output = EmptyResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["intents".into(), label("name", &self.name)?])
    }
}

impl LexOperation for DeleteIntentVersionRequest {
    const NAME: &'static str = "DeleteIntentVersion";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/intents/{name}/versions/{version}";
    type Output = EmptyResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "intents".into(),
            label("name", &self.name)?,
            "versions".into(),
            label("version", &self.version)?,
        ])
    }
}

// --- Slot types ---

impl LexOperation for GetSlotTypeRequest {
    const NAME: &'static str = "GetSlotType";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/slottypes/{name}/versions/{version}";
    type Output = GetSlotTypeResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "slottypes".into(),
            label("name", &self.name)?,
            "versions".into(),
            label("version", &self.version)?,
        ])
    }
}

impl LexOperation for GetSlotTypesRequest {
    const NAME: &'static str = "GetSlotTypes";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/slottypes/";
    type Output = GetSlotTypesResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["slottypes".into(), String::new()])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(&self.next_token, self.max_results, &self.name_contains)
    }
}

impl LexOperation for GetSlotTypeVersionsRequest {
    const NAME: &'static str = "GetSlotTypeVersions";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/slottypes/{name}/versions/";
    type Output = GetSlotTypeVersionsResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "slottypes".into(),
            label("name", &self.name)?,
            "versions".into(),
            String::new(),
        ])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(&self.next_token, self.max_results, &None)
    }
}

impl LexOperation for PutSlotTypeRequest {
    const NAME: &'static str = "PutSlotType";
    const METHOD: HttpMethod = HttpMethod::Put;
    const PATH: &'static str = "/slottypes/{name}/versions/$LATEST";
    const URI_MEMBERS: &'static [&'static str] = &["name"];
    type Output = PutSlotTypeResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "slottypes".into(),
            label("name", &self.name)?,
            "versions".into(),
            LATEST.into(),
        ])
    }
}

impl LexOperation for CreateSlotTypeVersionRequest {
    const NAME: &'static str = "CreateSlotTypeVersion";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/slottypes/{name}/versions";
    const URI_MEMBERS: &'static [&'static str] = &["name"];
    type Output = CreateSlotTypeVersionResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["slottypes".into(), label("name", &self.name)?, "versions".into()])
    }
}

impl LexOperation for DeleteSlotTypeRequest {
    const NAME: &'static str = "DeleteSlotType";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/slottypes/{name}";
    type Output = EmptyResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["slottypes".into(), label("name", &self.name)?])
    }
}

// The service spells this one path with a singular `version`.
impl LexOperation for DeleteSlotTypeVersionRequest {
    const NAME: &'static str = "DeleteSlotTypeVersion";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/slottypes/{name}/version/{version}";
    type Output = EmptyResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "slottypes".into(),
            label("name", &self.name)?,
            "version".into(),
            label("version", &self.version)?,
        ])
    }
}

// --- Built-ins ---

impl LexOperation for GetBuiltinIntentRequest {
    const NAME: &'static str = "GetBuiltinIntent";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/builtins/intents/{signature}";
    type Output = GetBuiltinIntentResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "builtins".into(),
            "intents".into(),
            label("signature", &self.signature)?,
        ])
    }
}

impl LexOperation for GetBuiltinIntentsRequest {
    const NAME: &'static str = "GetBuiltinIntents";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/builtins/intents/";
    type Output = GetBuiltinIntentsResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["builtins".into(), "intents".into(), String::new()])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        builtin_query(
            &self.locale,
            &self.signature_contains,
            &self.next_token,
            self.max_results,
        )
    }
}

impl LexOperation for GetBuiltinSlotTypesRequest {
    const NAME: &'static str = "GetBuiltinSlotTypes";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/builtins/slottypes/";
    type Output = GetBuiltinSlotTypesResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["builtins".into(), "slottypes".into(), String::new()])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        builtin_query(
            &self.locale,
            &self.signature_contains,
            &self.next_token,
            self.max_results,
        )
    }
}

// --- Utterances ---

impl LexOperation for GetUtterancesViewRequest {
    const NAME: &'static str = "GetUtterancesView";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/bots/{botname}/utterances?view=aggregation";
    type Output = GetUtterancesViewResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("botName", &self.bot_name)?,
            "utterances".into(),
        ])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("view", "aggregation".to_string())];
        for version in self.bot_versions.iter().flatten() {
            query.push(("bot_versions", version.clone()));
        }
        push_opt(
            &mut query,
            "status_type",
            self.status_type.as_ref().map(|s| s.as_str().to_string()),
        );
        query
    }
}

impl LexOperation for DeleteUtterancesRequest {
    const NAME: &'static str = "DeleteUtterances";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/bots/{botName}/utterances/{userId}";
    type Output = EmptyResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec![
            "bots".into(),
            label("botName", &self.bot_name)?,
            "utterances".into(),
            label("userId", &self.user_id)?,
        ])
    }
}

// --- Import and export ---

impl LexOperation for StartImportRequest {
    const NAME: &'static str = "StartImport";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/imports/";
    type Output = StartImportResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["imports".into(), String::new()])
    }
}

impl LexOperation for GetImportRequest {
    const NAME: &'static str = "GetImport";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/imports/{importId}";
    type Output = GetImportResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["imports".into(), label("importId", &self.import_id)?])
    }
}

impl LexOperation for GetExportRequest {
    const NAME: &'static str = "GetExport";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/exports/";
    type Output = GetExportResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["exports".into(), String::new()])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_opt(&mut query, "name", self.name.clone());
        push_opt(&mut query, "version", self.version.clone());
        push_opt(
            &mut query,
            "resourceType",
            self.resource_type.as_ref().map(|t| t.as_str().to_string()),
        );
        push_opt(
            &mut query,
            "exportType",
            self.export_type.as_ref().map(|t| t.as_str().to_string()),
        );
        query
    }
}

// --- Tags ---

impl LexOperation for ListTagsForResourceRequest {
    const NAME: &'static str = "ListTagsForResource";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/tags/{resourceArn}";
    type Output = ListTagsForResourceResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["tags".into(), label("resourceArn", &self.resource_arn)?])
    }
}

impl LexOperation for TagResourceRequest {
    const NAME: &'static str = "TagResource";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/tags/{resourceArn}";
    const URI_MEMBERS: &'static [&'static str] = &["resourceArn"];
    type Output = TagResourceResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["tags".into(), label("resourceArn", &self.resource_arn)?])
    }
}

impl LexOperation for UntagResourceRequest {
    const NAME: &'static str = "UntagResource";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/tags/{resourceArn}";
    type Output = UntagResourceResult;

    fn path_segments(&self) -> Result<Vec<String>, BindingError> {
        Ok(vec!["tags".into(), label("resourceArn", &self.resource_arn)?])
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        self.tag_keys
            .iter()
            .flatten()
            .map(|key| ("tagKeys", key.clone()))
            .collect()
    }
}
