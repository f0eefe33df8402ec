//! Enumerated members of the Lex Model Building Service.
//!
//! The service sends these as plain strings and may add values at any time,
//! so every enum is open: unrecognised strings land in `Unknown` instead of
//! failing deserialization. Setting a member through the enum or through its
//! wire string produces equal shapes.

open_enum! {
    /// Messaging platform a bot alias is associated with.
    pub enum ChannelType {
        Facebook => "Facebook",
        Slack => "Slack",
        TwilioSms => "Twilio-Sms",
        Kik => "Kik",
    }
}

open_enum! {
    /// Provisioning state of a channel association.
    pub enum ChannelStatus {
        InProgress => "IN_PROGRESS",
        Created => "CREATED",
        Failed => "FAILED",
    }
}

impl ChannelStatus {
    /// The service has finished provisioning, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Created | Self::Failed)
    }
}

open_enum! {
    /// Whether a slot must be filled before the intent is fulfilled.
    pub enum SlotConstraint {
        Required => "Required",
        Optional => "Optional",
    }
}

open_enum! {
    /// How slot values are masked in conversation logs.
    pub enum ObfuscationSetting {
        None => "NONE",
        DefaultObfuscation => "DEFAULT_OBFUSCATION",
    }
}

open_enum! {
    /// Format of a [`Message`](crate::prompt::Message) body.
    pub enum ContentType {
        PlainText => "PlainText",
        Ssml => "SSML",
        CustomPayload => "CustomPayload",
    }
}

open_enum! {
    /// How an intent is fulfilled once all slots are elicited.
    pub enum FulfillmentActivityType {
        ReturnIntent => "ReturnIntent",
        CodeHook => "CodeHook",
    }
}

open_enum! {
    /// Kind of conversation log.
    pub enum LogType {
        Audio => "AUDIO",
        Text => "TEXT",
    }
}

open_enum! {
    /// Where conversation logs are delivered. Text logs go to CloudWatch Logs,
    /// audio logs to S3; the service rejects other pairings.
    pub enum Destination {
        CloudwatchLogs => "CLOUDWATCH_LOGS",
        S3 => "S3",
    }
}

open_enum! {
    pub enum ResourceType {
        Bot => "BOT",
        Intent => "INTENT",
        SlotType => "SLOT_TYPE",
    }
}

open_enum! {
    /// Archive format of an export.
    pub enum ExportType {
        AlexaSkillsKit => "ALEXA_SKILLS_KIT",
        Lex => "LEX",
    }
}

open_enum! {
    pub enum ExportStatus {
        InProgress => "IN_PROGRESS",
        Ready => "READY",
        Failed => "FAILED",
    }
}

impl ExportStatus {
    /// The export archive is ready or the export has failed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }
}

open_enum! {
    /// Conflict policy applied when an import collides with existing resources.
    pub enum MergeStrategy {
        OverwriteLatest => "OVERWRITE_LATEST",
        FailOnConflict => "FAIL_ON_CONFLICT",
        Append => "APPEND",
    }
}

open_enum! {
    pub enum ImportStatus {
        InProgress => "IN_PROGRESS",
        Complete => "COMPLETE",
        Failed => "FAILED",
    }
}

impl ImportStatus {
    /// The import job has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }
}

open_enum! {
    /// Which utterances an utterance view reports.
    pub enum StatusType {
        Detected => "Detected",
        Missed => "Missed",
    }
}

open_enum! {
    /// Language and region of a bot.
    pub enum Locale {
        DeDe => "de-DE",
        EnAu => "en-AU",
        EnGb => "en-GB",
        EnIn => "en-IN",
        EnUs => "en-US",
        Es419 => "es-419",
        EsEs => "es-ES",
        EsUs => "es-US",
        FrFr => "fr-FR",
        FrCa => "fr-CA",
        ItIt => "it-IT",
        JaJp => "ja-JP",
        KoKr => "ko-KR",
    }
}

open_enum! {
    /// Build state of a bot.
    pub enum BotStatus {
        Building => "BUILDING",
        Ready => "READY",
        ReadyBasicTesting => "READY_BASIC_TESTING",
        Failed => "FAILED",
        NotBuilt => "NOT_BUILT",
    }
}

impl BotStatus {
    /// Anything but `BUILDING` is a resting state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Ready | Self::ReadyBasicTesting | Self::Failed | Self::NotBuilt
        )
    }
}

open_enum! {
    /// Which value a custom slot type resolves a user's input to.
    pub enum SlotValueSelectionStrategy {
        OriginalValue => "ORIGINAL_VALUE",
        TopResolution => "TOP_RESOLUTION",
    }
}

open_enum! {
    /// Whether `PutBot` only saves the definition or also builds it.
    pub enum ProcessBehavior {
        Save => "SAVE",
        Build => "BUILD",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value_maps_to_variant() {
        assert_eq!(ChannelType::from("Twilio-Sms"), ChannelType::TwilioSms);
        assert_eq!(ChannelType::TwilioSms.as_str(), "Twilio-Sms");
        assert_eq!(Locale::from("es-419"), Locale::Es419);
    }

    #[test]
    fn test_unknown_value_is_preserved() {
        let channel = ChannelType::from("Line");
        assert_eq!(channel, ChannelType::Unknown("Line".to_string()));
        assert!(!channel.is_known());
        assert_eq!(channel.to_string(), "Line");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(
            ChannelType::from("slack"),
            ChannelType::Unknown("slack".to_string())
        );
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&Destination::CloudwatchLogs).unwrap();
        assert_eq!(json, "\"CLOUDWATCH_LOGS\"");

        let parsed: MergeStrategy = serde_json::from_str("\"FAIL_ON_CONFLICT\"").unwrap();
        assert_eq!(parsed, MergeStrategy::FailOnConflict);

        let future: ImportStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(future, ImportStatus::Unknown("CANCELLED".to_string()));
        assert_eq!(serde_json::to_string(&future).unwrap(), "\"CANCELLED\"");
    }

    #[test]
    fn test_from_str_roundtrip_for_every_known_value() {
        for wire in BotStatus::values() {
            let status: BotStatus = wire.parse().unwrap();
            assert!(status.is_known());
            assert_eq!(status.as_str(), *wire);
        }
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!ImportStatus::InProgress.is_terminal());
        assert!(ImportStatus::Complete.is_terminal());
        assert!(ExportStatus::Failed.is_terminal());
        assert!(!ChannelStatus::InProgress.is_terminal());
        assert!(ChannelStatus::Created.is_terminal());
        assert!(!BotStatus::Building.is_terminal());
        assert!(BotStatus::NotBuilt.is_terminal());
        assert!(!ImportStatus::Unknown("PAUSED".to_string()).is_terminal());
    }
}
