//! Shapes of the Amazon Lex Model Building Service.
//!
//! Every request, result and nested structure of the service is a plain value
//! type here: optional members, builder-style setters, structural equality
//! and hashing, and serde mappings to the service's REST-JSON wire format.
//!
//! Nothing in this crate talks to the network or checks constraints on
//! assignment. The only local failure is a duplicate key added to a map
//! member (see [`channel::BotChannelAssociation::add_bot_configuration_entry`]).
//!
//! ```
//! use lexmodel_types::channel::BotChannelAssociation;
//! use lexmodel_types::enums::ChannelType;
//!
//! let by_enum = BotChannelAssociation::default().r#type(ChannelType::Slack);
//! let by_wire = BotChannelAssociation::default().r#type("Slack");
//! assert_eq!(by_enum, by_wire);
//! ```

#[macro_use]
mod macros;

pub mod alias;
pub mod bot;
pub mod builtin;
pub mod channel;
pub mod config;
pub mod constraints;
pub mod delete;
pub mod enums;
pub mod error;
pub mod import_export;
pub mod intent;
pub mod prompt;
pub mod slot;
pub mod slot_type;
pub mod tag;
pub mod utterance;
pub mod wire;
