use crate::error::ParsingError;
use crate::few::few;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::text::number::nat;
use crate::verbatim::verbatim;
use serde::Serialize;
use std::fmt;

/// Largest id the chat platform hands out
pub const MAX_SNOWFLAKE: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    User,
    Channel,
}

/// A `<@id>` or `<#id>` reference to a user or channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Mention {
    pub kind: MentionKind,
    pub id: u64,
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MentionKind::User => write!(f, "<@{}>", self.id),
            MentionKind::Channel => write!(f, "<#{}>", self.id),
        }
    }
}

/// A platform id: a natural number no larger than `i64::MAX`
pub fn snowflake() -> impl Parser<Output = u64> {
    nat().map("snowflake", |_, id| {
        if id <= MAX_SNOWFLAKE {
            Ok(id)
        } else {
            Err(ParsingError::custom("Snowflake is out of bounds"))
        }
    })
}

fn mention(kind: MentionKind, opener: &'static str) -> impl Parser<Output = Mention> {
    verbatim(few((opener, snowflake(), ">"))).map("mention", move |_, (_, id, _)| {
        Ok(Mention { kind, id })
    })
}

pub fn user_mention() -> impl Parser<Output = Mention> {
    mention(MentionKind::User, "<@")
}

pub fn channel_mention() -> impl Parser<Output = Mention> {
    mention(MentionKind::Channel, "<#")
}
