//! Constraint metadata from the service model.
//!
//! Shapes never enforce these; they are carried so a caller or binding layer
//! can check a request before sending it. Patterns follow the service model
//! and must match the whole value.

use std::ops::RangeInclusive;

// --- Names ---

pub const BOT_NAME_PATTERN: &str = r"^([A-Za-z]_?)+$";
pub const BOT_NAME_LENGTH: RangeInclusive<usize> = 2..=50;

pub const ALIAS_NAME_PATTERN: &str = r"^([A-Za-z]_?)+$";
pub const ALIAS_NAME_LENGTH: RangeInclusive<usize> = 1..=100;

pub const INTENT_NAME_PATTERN: &str = r"^([A-Za-z]_?)+$";
pub const INTENT_NAME_LENGTH: RangeInclusive<usize> = 1..=100;

pub const SLOT_NAME_PATTERN: &str = r"^([A-Za-z](-|_|.)?)+$";
pub const SLOT_NAME_LENGTH: RangeInclusive<usize> = 1..=100;

pub const SLOT_TYPE_NAME_PATTERN: &str = r"^((AMAZON\.)_?|[A-Za-z]_?)+";
pub const SLOT_TYPE_NAME_LENGTH: RangeInclusive<usize> = 1..=100;

/// Names of custom slot types, which cannot use the `AMAZON.` prefix.
pub const CUSTOM_SLOT_TYPE_NAME_PATTERN: &str = r"^([A-Za-z]_?)+$";
pub const CUSTOM_SLOT_TYPE_NAME_LENGTH: RangeInclusive<usize> = 1..=100;

pub const PARENT_SLOT_TYPE_SIGNATURE_PATTERN: &str = r"^((AMAZON\.)_?|[A-Za-z]_?)+";
pub const PARENT_SLOT_TYPE_SIGNATURE_LENGTH: RangeInclusive<usize> = 1..=100;

pub const CHANNEL_NAME_PATTERN: &str = r"^([A-Za-z]_?)+$";
pub const CHANNEL_NAME_LENGTH: RangeInclusive<usize> = 1..=100;

/// `nameContains` filters on list operations.
pub const NAME_FILTER_PATTERN: &str = r"^([A-Za-z]_?)+$";
pub const NAME_FILTER_LENGTH: RangeInclusive<usize> = 1..=100;

pub const EXPORT_NAME_PATTERN: &str = r"[a-zA-Z_]+";
pub const EXPORT_NAME_LENGTH: RangeInclusive<usize> = 1..=100;

// --- Versions ---

pub const VERSION_PATTERN: &str = r"\$LATEST|[0-9]+";
pub const VERSION_LENGTH: RangeInclusive<usize> = 1..=64;

/// Deleting a version takes a number; `$LATEST` goes with the resource.
pub const NUMBERED_VERSION_PATTERN: &str = r"[0-9]+";

pub const EXPORT_VERSION_PATTERN: &str = r"[0-9]+|\$LATEST";

/// `GetBot` takes a version or an alias name in the same path label.
pub const VERSION_OR_ALIAS_PATTERN: &str = r"\$LATEST|[0-9]+|([A-Za-z]_?)+";
pub const VERSION_OR_ALIAS_LENGTH: RangeInclusive<usize> = 1..=100;

// --- Free text ---

pub const DESCRIPTION_LENGTH: RangeInclusive<usize> = 0..=200;
pub const MESSAGE_CONTENT_LENGTH: RangeInclusive<usize> = 1..=1000;
pub const RESPONSE_CARD_LENGTH: RangeInclusive<usize> = 1..=50_000;
pub const SAMPLE_UTTERANCE_LENGTH: RangeInclusive<usize> = 1..=200;
pub const SLOT_DEFAULT_VALUE_LENGTH: RangeInclusive<usize> = 1..=202;
pub const UTTERANCE_STRING_LENGTH: RangeInclusive<usize> = 1..=2000;
pub const CODE_HOOK_MESSAGE_VERSION_LENGTH: RangeInclusive<usize> = 1..=5;

pub const ENUMERATION_VALUE_LENGTH: RangeInclusive<usize> = 1..=140;
pub const REGEX_PATTERN_LENGTH: RangeInclusive<usize> = 1..=100;
pub const USER_ID_LENGTH: RangeInclusive<usize> = 2..=100;

pub const TAG_KEY_LENGTH: RangeInclusive<usize> = 1..=128;
pub const TAG_VALUE_LENGTH: RangeInclusive<usize> = 0..=256;

// --- ARNs ---

pub const ARN_LENGTH: RangeInclusive<usize> = 20..=2048;

pub const LAMBDA_ARN_PATTERN: &str = r"arn:aws[a-zA-Z-]*:lambda:[a-z]+-[a-z]+(-[a-z]+)*-[0-9]:[0-9]{12}:function:[a-zA-Z0-9_-]+(/[0-9a-f]{32})?(:[a-zA-Z0-9_-]+)?";
pub const KENDRA_INDEX_ARN_PATTERN: &str = r"arn:aws:kendra:[a-z]+-[a-z]+-[0-9]:[0-9]{12}:index/[a-zA-Z0-9][a-zA-Z0-9_-]*";
pub const KENDRA_ROLE_ARN_PATTERN: &str = r"arn:aws:iam::[0-9]{12}:role/.*";
pub const IAM_ROLE_ARN_PATTERN: &str = r"^arn:[\w\-]+:iam::[\d]{12}:role/[\w+=,\.@\-]{1,64}$";
pub const KMS_KEY_ARN_PATTERN: &str = r"^arn:[\w\-]+:kms:[\w\-]+:[\d]{12}:(?:key/[\w\-]+|alias/[a-zA-Z0-9:/_\-]{1,256})$";
pub const LOG_RESOURCE_ARN_PATTERN: &str = r"^arn:[\w\-]+:(?:logs:[\w\-]+:[\d]{12}:log-group:[\.\-_/#A-Za-z0-9]{1,512}(?::\*)?|s3:::[a-z0-9][\.\-a-z0-9]{1,61}[a-z0-9])$";
pub const LOG_RESOURCE_ARN_LENGTH: RangeInclusive<usize> = 1..=2048;

/// ARN of a taggable bot, alias or channel association.
pub const TAGGABLE_ARN_LENGTH: RangeInclusive<usize> = 1..=1011;

// --- Numeric ranges ---

pub const MAX_ATTEMPTS_RANGE: RangeInclusive<i32> = 1..=5;
pub const GROUP_NUMBER_RANGE: RangeInclusive<i32> = 1..=5;
pub const SLOT_PRIORITY_RANGE: RangeInclusive<i32> = 0..=100;
pub const IDLE_SESSION_TTL_RANGE: RangeInclusive<i32> = 60..=86_400;
pub const MAX_RESULTS_RANGE: RangeInclusive<i32> = 1..=50;

// --- Collection sizes ---

pub const MESSAGES_ITEMS: RangeInclusive<usize> = 1..=15;
pub const INTENT_SLOTS_ITEMS: RangeInclusive<usize> = 0..=100;
pub const INTENT_SAMPLE_UTTERANCES_ITEMS: RangeInclusive<usize> = 0..=1500;
pub const SLOT_SAMPLE_UTTERANCES_ITEMS: RangeInclusive<usize> = 0..=10;
pub const SLOT_DEFAULT_VALUES_ITEMS: RangeInclusive<usize> = 0..=10;
pub const BOT_VERSIONS_ITEMS: RangeInclusive<usize> = 1..=5;
pub const TAGS_ITEMS: RangeInclusive<usize> = 0..=200;
pub const TAG_KEYS_ITEMS: RangeInclusive<usize> = 0..=200;
pub const ENUMERATION_VALUES_ITEMS: RangeInclusive<usize> = 0..=10_000;
pub const SLOT_TYPE_CONFIGURATIONS_ITEMS: RangeInclusive<usize> = 0..=10;
