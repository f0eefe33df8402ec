//! Utterance statistics reported by `GetUtterancesView`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::StatusType;

/// Usage of one distinct utterance.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtteranceData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utterance_string: Option<String>,
    /// Number of times the utterance was processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct_users: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub first_uttered_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    pub last_uttered_date: Option<DateTime<Utc>>,
}

sparse_debug!(UtteranceData {
    utterance_string,
    count,
    distinct_users,
    first_uttered_date,
    last_uttered_date,
});

fluent_setters!(UtteranceData {
    utterance_string / set_utterance_string: String,
    count / set_count: i32,
    distinct_users / set_distinct_users: i32,
    first_uttered_date / set_first_uttered_date: DateTime<Utc>,
    last_uttered_date / set_last_uttered_date: DateTime<Utc>,
});

/// Utterances recorded against one bot version.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtteranceList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utterances: Option<Vec<UtteranceData>>,
}

sparse_debug!(UtteranceList { bot_version, utterances });

fluent_setters!(UtteranceList {
    bot_version / set_bot_version: String,
});

list_appenders!(UtteranceList {
    utterances / set_utterances: UtteranceData,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUtterancesViewRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
    /// Up to five bot versions to report on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_versions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_type: Option<StatusType>,
}

sparse_debug!(GetUtterancesViewRequest { bot_name, bot_versions, status_type });

fluent_setters!(GetUtterancesViewRequest {
    bot_name / set_bot_name: String,
    status_type / set_status_type: StatusType,
});

list_appenders!(GetUtterancesViewRequest {
    bot_versions / set_bot_versions: String,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUtterancesViewResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utterances: Option<Vec<UtteranceList>>,
}

sparse_debug!(GetUtterancesViewResult { bot_name, utterances });

fluent_setters!(GetUtterancesViewResult {
    bot_name / set_bot_name: String,
});

list_appenders!(GetUtterancesViewResult {
    utterances / set_utterances: UtteranceList,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utterances_view_deserialize() {
        let json = r#"{
            "botName": "PizzaBot",
            "utterances": [{
                "botVersion": "3",
                "utterances": [{
                    "utteranceString": "large pepperoni",
                    "count": 42,
                    "distinctUsers": 17,
                    "firstUtteredDate": 1590000000.0,
                    "lastUtteredDate": 1590086400.0
                }]
            }]
        }"#;
        let view: GetUtterancesViewResult = serde_json::from_str(json).unwrap();
        let versions = view.utterances.unwrap();
        let data = &versions[0].utterances.as_ref().unwrap()[0];
        assert_eq!(data.count, Some(42));
        assert_eq!(data.distinct_users, Some(17));
        let span = data.last_uttered_date.unwrap() - data.first_uttered_date.unwrap();
        assert_eq!(span.num_hours(), 24);
    }

    #[test]
    fn test_bot_versions_append() {
        let request = GetUtterancesViewRequest::default()
            .bot_name("PizzaBot")
            .bot_versions("1")
            .bot_versions("2")
            .status_type(StatusType::Missed);
        assert_eq!(request.bot_versions.as_ref().unwrap().len(), 2);
        assert_eq!(request.status_type.unwrap().as_str(), "Missed");
    }
}
