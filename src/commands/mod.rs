// src/commands/mod.rs
// Declares the command modules and resolves message text into a command.

pub mod economy;
pub mod help;
pub mod relationship;
pub mod test;

use crate::error::BotResult;
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::str::FromStr;

/// Every text command the bot answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Test,
    Profile,
    Daily,
    Shop,
    Love,
    Check,
    Divorce,
    AddCash,
    AddPic,
    Marry,
    Help,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test" => Ok(Command::Test),
            "profile" => Ok(Command::Profile),
            "daily" => Ok(Command::Daily),
            "shop" => Ok(Command::Shop),
            "olove" => Ok(Command::Love),
            "ocheck" => Ok(Command::Check),
            "odivorce" => Ok(Command::Divorce),
            "oaddcash" => Ok(Command::AddCash),
            "oaddpic" => Ok(Command::AddPic),
            "marry" => Ok(Command::Marry),
            "help" | "h" => Ok(Command::Help),
            _ => Ok(Command::Unknown),
        }
    }
}

/// Splits a message into its command and positional arguments.
///
/// Returns `None` when the message does not start with `prefix` or is blank.
/// The command token is matched case-insensitively; arguments keep their case.
pub fn parse_command<'a>(content: &'a str, prefix: &str) -> Option<(Command, Vec<&'a str>)> {
    let body = content.trim().strip_prefix(prefix)?;
    let mut tokens = body.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    let command = Command::from_str(&name).unwrap_or(Command::Unknown);
    Some((command, tokens.collect()))
}

/// Replies to `msg` with a single embed.
pub(crate) async fn reply_embed(ctx: &Context, msg: &Message, embed: CreateEmbed) -> BotResult {
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await?;
    Ok(())
}
