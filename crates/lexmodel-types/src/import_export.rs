//! Import and export jobs.
//!
//! Both are asynchronous on the service side: `StartImport` returns at once
//! with `IN_PROGRESS` and callers poll `GetImport`; `GetExport` reports
//! `IN_PROGRESS` until the archive URL is ready.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{ExportStatus, ExportType, ImportStatus, MergeStrategy, ResourceType};
use crate::tag::Tag;

// --- StartImport ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartImportRequest {
    /// Zip archive in the export format. Opaque to this crate.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::blob")]
    pub payload: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_strategy: Option<MergeStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

sparse_debug!(StartImportRequest { payload, resource_type, merge_strategy, tags });

fluent_setters!(StartImportRequest {
    payload / set_payload: Vec<u8>,
    resource_type / set_resource_type: ResourceType,
    merge_strategy / set_merge_strategy: MergeStrategy,
});

list_appenders!(StartImportRequest {
    tags / set_tags: Tag,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartImportResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_strategy: Option<MergeStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_status: Option<ImportStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
}

sparse_debug!(StartImportResult {
    name,
    resource_type,
    merge_strategy,
    import_id,
    import_status,
    tags,
    created_date,
});

fluent_setters!(StartImportResult {
    name / set_name: String,
    resource_type / set_resource_type: ResourceType,
    merge_strategy / set_merge_strategy: MergeStrategy,
    import_id / set_import_id: String,
    import_status / set_import_status: ImportStatus,
    created_date / set_created_date: DateTime<Utc>,
});

list_appenders!(StartImportResult {
    tags / set_tags: Tag,
});

// --- GetImport ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetImportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_id: Option<String>,
}

sparse_debug!(GetImportRequest { import_id });

fluent_setters!(GetImportRequest {
    import_id / set_import_id: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetImportResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_strategy: Option<MergeStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_status: Option<ImportStatus>,
    /// One entry per problem found while importing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub created_date: Option<DateTime<Utc>>,
}

sparse_debug!(GetImportResult {
    name,
    resource_type,
    merge_strategy,
    import_id,
    import_status,
    failure_reason,
    created_date,
});

fluent_setters!(GetImportResult {
    name / set_name: String,
    resource_type / set_resource_type: ResourceType,
    merge_strategy / set_merge_strategy: MergeStrategy,
    import_id / set_import_id: String,
    import_status / set_import_status: ImportStatus,
    created_date / set_created_date: DateTime<Utc>,
});

list_appenders!(GetImportResult {
    failure_reason / set_failure_reason: String,
});

// --- GetExport ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetExportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_type: Option<ExportType>,
}

sparse_debug!(GetExportRequest { name, version, resource_type, export_type });

fluent_setters!(GetExportRequest {
    name / set_name: String,
    version / set_version: String,
    resource_type / set_resource_type: ResourceType,
    export_type / set_export_type: ExportType,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetExportResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_type: Option<ExportType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_status: Option<ExportStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Pre-signed S3 URL of the archive, valid for a short time once `READY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

sparse_debug!(GetExportResult {
    name,
    version,
    resource_type,
    export_type,
    export_status,
    failure_reason,
    url,
});

fluent_setters!(GetExportResult {
    name / set_name: String,
    version / set_version: String,
    resource_type / set_resource_type: ResourceType,
    export_type / set_export_type: ExportType,
    export_status / set_export_status: ExportStatus,
    failure_reason / set_failure_reason: String,
    url / set_url: String,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_import_payload_is_base64_on_the_wire() {
        let request = StartImportRequest::default()
            .payload(b"PK\x03\x04".as_slice())
            .resource_type(ResourceType::Bot)
            .merge_strategy(MergeStrategy::FailOnConflict);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["payload"], "UEsDBA==");
        assert_eq!(json["resourceType"], "BOT");
        assert_eq!(json["mergeStrategy"], "FAIL_ON_CONFLICT");

        let parsed: StartImportRequest = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.payload.as_deref(), Some(b"PK\x03\x04".as_slice()));
    }

    #[test]
    fn test_get_import_failure_reasons() {
        let json = r#"{
            "importId": "imp-1",
            "importStatus": "FAILED",
            "failureReason": ["intent OrderPizza already exists", "slot type Crust already exists"]
        }"#;
        let result: GetImportResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.import_status, Some(ImportStatus::Failed));
        assert_eq!(result.failure_reason.unwrap().len(), 2);
    }

    #[test]
    fn test_get_export_ready() {
        let json = r#"{
            "name": "PizzaBot",
            "version": "4",
            "resourceType": "BOT",
            "exportType": "ALEXA_SKILLS_KIT",
            "exportStatus": "READY",
            "url": "https://example-bucket.s3.amazonaws.com/export.zip"
        }"#;
        let result: GetExportResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.export_type, Some(ExportType::AlexaSkillsKit));
        assert!(result.export_status.unwrap().is_terminal());
    }
}
