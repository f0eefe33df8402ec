//! Every supported operation, addressable by name.

use lexmodel_types::alias::{GetBotAliasRequest, GetBotAliasesRequest, PutBotAliasRequest};
use lexmodel_types::bot::{
    CreateBotVersionRequest, GetBotRequest, GetBotVersionsRequest, GetBotsRequest, PutBotRequest,
};
use lexmodel_types::builtin::{
    GetBuiltinIntentRequest, GetBuiltinIntentsRequest, GetBuiltinSlotTypesRequest,
};
use lexmodel_types::channel::{GetBotChannelAssociationRequest, GetBotChannelAssociationsRequest};
use lexmodel_types::config::ClientConfig;
use lexmodel_types::delete::{
    DeleteBotAliasRequest, DeleteBotChannelAssociationRequest, DeleteBotRequest,
    DeleteBotVersionRequest, DeleteIntentRequest, DeleteIntentVersionRequest,
    DeleteSlotTypeRequest, DeleteSlotTypeVersionRequest, DeleteUtterancesRequest,
};
use lexmodel_types::import_export::{GetExportRequest, GetImportRequest, StartImportRequest};
use lexmodel_types::intent::{
    CreateIntentVersionRequest, GetIntentRequest, GetIntentVersionsRequest, GetIntentsRequest,
    PutIntentRequest,
};
use lexmodel_types::slot_type::{
    CreateSlotTypeVersionRequest, GetSlotTypeRequest, GetSlotTypeVersionsRequest,
    GetSlotTypesRequest, PutSlotTypeRequest,
};
use lexmodel_types::tag::{ListTagsForResourceRequest, TagResourceRequest, UntagResourceRequest};
use lexmodel_types::utterance::GetUtterancesViewRequest;
use thiserror::Error;

use super::{HttpMethod, LexOperation, PreparedRequest, prepare};
use crate::error::PrepareError;
use crate::validate::{ValidationReport, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationInfo {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown operation '{0}' (see `lexm operations`)")]
    UnknownOperation(String),

    #[error("invalid {operation} request: {source}")]
    Parse {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// `GetBot`, `get-bot` and `get_bot` all name the same operation.
fn same_operation(given: &str, name: &str) -> bool {
    let given = given.chars().filter(|c| *c != '-' && *c != '_');
    given
        .map(|c| c.to_ascii_lowercase())
        .eq(name.chars().map(|c| c.to_ascii_lowercase()))
}

macro_rules! operations {
    ($($variant:ident => $request:ty,)+) => {
        /// A request of any supported operation.
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyRequest {
            $($variant($request),)+
        }

        impl AnyRequest {
            /// Parse a JSON request document for the operation named `operation`.
            pub fn from_json(operation: &str, json: &str) -> Result<Self, DispatchError> {
                $(
                    if same_operation(operation, <$request as LexOperation>::NAME) {
                        return serde_json::from_str(json)
                            .map(Self::$variant)
                            .map_err(|source| DispatchError::Parse {
                                operation: <$request as LexOperation>::NAME,
                                source,
                            });
                    }
                )+
                Err(DispatchError::UnknownOperation(operation.to_string()))
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$request as LexOperation>::NAME,)+
                }
            }

            pub fn validate(&self) -> Result<(), ValidationReport> {
                match self {
                    $(Self::$variant(request) => validate(request),)+
                }
            }

            pub fn prepare(&self, config: &ClientConfig) -> Result<PreparedRequest, PrepareError> {
                match self {
                    $(Self::$variant(request) => prepare(config, request),)+
                }
            }
        }

        /// Name, method and path template of every supported operation.
        pub const OPERATIONS: &[OperationInfo] = &[
            $(OperationInfo {
                name: <$request as LexOperation>::NAME,
                method: <$request as LexOperation>::METHOD,
                path: <$request as LexOperation>::PATH,
            },)+
        ];
    };
}

operations! {
    GetBot => GetBotRequest,
    GetBots => GetBotsRequest,
    GetBotVersions => GetBotVersionsRequest,
    PutBot => PutBotRequest,
    CreateBotVersion => CreateBotVersionRequest,
    DeleteBot => DeleteBotRequest,
    DeleteBotVersion => DeleteBotVersionRequest,
    GetBotAlias => GetBotAliasRequest,
    GetBotAliases => GetBotAliasesRequest,
    PutBotAlias => PutBotAliasRequest,
    DeleteBotAlias => DeleteBotAliasRequest,
    GetBotChannelAssociation => GetBotChannelAssociationRequest,
    GetBotChannelAssociations => GetBotChannelAssociationsRequest,
    DeleteBotChannelAssociation => DeleteBotChannelAssociationRequest,
    GetIntent => GetIntentRequest,
    GetIntents => GetIntentsRequest,
    GetIntentVersions => GetIntentVersionsRequest,
    PutIntent => PutIntentRequest,
    CreateIntentVersion => CreateIntentVersionRequest,
    DeleteIntent => DeleteIntentRequest,
    DeleteIntentVersion => DeleteIntentVersionRequest,
    GetSlotType => GetSlotTypeRequest,
    GetSlotTypes => GetSlotTypesRequest,
    GetSlotTypeVersions => GetSlotTypeVersionsRequest,
    PutSlotType => PutSlotTypeRequest,
    CreateSlotTypeVersion => CreateSlotTypeVersionRequest,
    DeleteSlotType => DeleteSlotTypeRequest,
    DeleteSlotTypeVersion => DeleteSlotTypeVersionRequest,
    GetBuiltinIntent => GetBuiltinIntentRequest,
    GetBuiltinIntents => GetBuiltinIntentsRequest,
    GetBuiltinSlotTypes => GetBuiltinSlotTypesRequest,
    GetUtterancesView => GetUtterancesViewRequest,
    DeleteUtterances => DeleteUtterancesRequest,
    StartImport => StartImportRequest,
    GetImport => GetImportRequest,
    GetExport => GetExportRequest,
    ListTagsForResource => ListTagsForResourceRequest,
    TagResource => TagResourceRequest,
    UntagResource => UntagResourceRequest,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_is_complete_and_unique() {
        assert_eq!(OPERATIONS.len(), 39);
        let names: HashSet<_> = OPERATIONS.iter().map(|op| op.name).collect();
        assert_eq!(names.len(), OPERATIONS.len());
    }

    #[test]
    fn test_operation_name_forms() {
        assert!(same_operation("GetBot", "GetBot"));
        assert!(same_operation("get-bot", "GetBot"));
        assert!(same_operation("get_bot", "GetBot"));
        assert!(!same_operation("get-bots", "GetBot"));
    }

    #[test]
    fn test_from_json_dispatches_by_name() {
        let request =
            AnyRequest::from_json("get-bot", r#"{"name": "PizzaBot", "versionOrAlias": "prod"}"#)
                .unwrap();
        assert_eq!(request.name(), "GetBot");
        assert!(request.validate().is_ok());

        let prepared = request.prepare(&ClientConfig::default()).unwrap();
        assert_eq!(prepared.url.path(), "/bots/PizzaBot/versions/prod");
    }

    #[test]
    fn test_unknown_operation() {
        let err = AnyRequest::from_json("DescribeBot", "{}").unwrap_err();
        assert!(matches!(err, DispatchError::UnknownOperation(name) if name == "DescribeBot"));
    }

    #[test]
    fn test_list_and_single_names_stay_distinct() {
        let request = AnyRequest::from_json("get-bots", "{}").unwrap();
        assert_eq!(request.name(), "GetBots");

        let json = r#"{"signature": "AMAZON.HelpIntent"}"#;
        let request = AnyRequest::from_json("get-builtin-intent", json).unwrap();
        assert_eq!(request.name(), "GetBuiltinIntent");
    }

    #[test]
    fn test_delete_dispatch_prepares_delete() {
        let request =
            AnyRequest::from_json("delete-intent", r#"{"name": "OrderPizza"}"#).unwrap();
        let prepared = request.prepare(&ClientConfig::default()).unwrap();
        assert_eq!(prepared.method, HttpMethod::Delete);
        assert_eq!(prepared.url.path(), "/intents/OrderPizza");
        assert!(prepared.body.is_none());
    }

    #[test]
    fn test_malformed_document() {
        let err = AnyRequest::from_json("GetIntent", r#"{"name": 3}"#).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Parse {
                operation: "GetIntent",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_enum_value_survives_dispatch() {
        let request = AnyRequest::from_json(
            "GetUtterancesView",
            r#"{"botName": "PizzaBot", "botVersions": ["1"], "statusType": "Ignored"}"#,
        )
        .unwrap();
        let prepared = request.prepare(&ClientConfig::default()).unwrap();
        assert_eq!(
            prepared.url.query(),
            Some("view=aggregation&bot_versions=1&status_type=Ignored")
        );
    }
}
