use serde::{Deserialize, Serialize};

use crate::delete::EmptyResult;

/// A key/value label attached to a bot, alias or channel association.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

sparse_debug!(Tag { key, value });

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Tag {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

fluent_setters!(Tag {
    key / set_key: String,
    value / set_value: String,
});

// --- ListTagsForResource ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

sparse_debug!(ListTagsForResourceRequest { resource_arn });

fluent_setters!(ListTagsForResourceRequest {
    resource_arn / set_resource_arn: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

sparse_debug!(ListTagsForResourceResult { tags });

list_appenders!(ListTagsForResourceResult {
    tags / set_tags: Tag,
});

// --- TagResource ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// Added to the resource; an existing key gets the new value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

sparse_debug!(TagResourceRequest { resource_arn, tags });

fluent_setters!(TagResourceRequest {
    resource_arn / set_resource_arn: String,
});

list_appenders!(TagResourceRequest {
    tags / set_tags: Tag,
});

pub type TagResourceResult = EmptyResult;

// --- UntagResource ---

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

sparse_debug!(UntagResourceRequest { resource_arn, tag_keys });

fluent_setters!(UntagResourceRequest {
    resource_arn / set_resource_arn: String,
});

list_appenders!(UntagResourceRequest {
    tag_keys / set_tag_keys: String,
});

pub type UntagResourceResult = EmptyResult;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_pair() {
        assert_eq!(Tag::from(("env", "prod")), Tag::new("env", "prod"));
    }

    #[test]
    fn test_untag_keys_append() {
        let request = UntagResourceRequest::default()
            .resource_arn("arn:aws:lex:us-east-1:123456789012:bot:PizzaBot")
            .tag_keys("env")
            .tag_keys("team");
        assert_eq!(
            request.tag_keys,
            Some(vec!["env".to_string(), "team".to_string()])
        );
    }

    #[test]
    fn test_list_tags_result_deserialize() {
        let json = r#"{"tags": [{"key": "env", "value": "prod"}]}"#;
        let result: ListTagsForResourceResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.tags, Some(vec![Tag::new("env", "prod")]));
    }
}
