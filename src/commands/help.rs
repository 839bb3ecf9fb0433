//! The `help` command: a categorized list of commands, or the details of one.

use crate::AppState;
use crate::commands::reply_embed;
use crate::constants::{COLOR_ERROR, COLOR_INFO};
use crate::error::BotResult;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::channel::Message;
use serenity::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum CommandCategory {
    General,
    Economy,
    Marriage,
    Admin,
}

impl CommandCategory {
    fn name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Economy => "Economy & Shop",
            Self::Marriage => "Marriage",
            Self::Admin => "Admin",
        }
    }
    fn emoji(&self) -> &'static str {
        match self {
            Self::General => "🔧",
            Self::Economy => "💰",
            Self::Marriage => "💍",
            Self::Admin => "🛡️",
        }
    }
}

struct CommandInfo {
    name: &'static str,
    description: &'static str,
    usage: &'static [&'static str],
    details: &'static str,
    category: CommandCategory,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "test",
        description: "Checks that the bot is alive.",
        usage: &["test"],
        details: "Replies with a liveness message and the gateway heartbeat latency when known.",
        category: CommandCategory::General,
    },
    CommandInfo {
        name: "help",
        description: "Shows this help menu.",
        usage: &["help", "h", "help <command>"],
        details: "Lists every command, or shows the details of one command.",
        category: CommandCategory::General,
    },
    CommandInfo {
        name: "profile",
        description: "Shows your balance, affection and relationship status.",
        usage: &["profile"],
        details: "Displays your balance, affection points, the rings you own and, if married, your partner, wedding date and days together.",
        category: CommandCategory::Economy,
    },
    CommandInfo {
        name: "daily",
        description: "Claim 50,000$ once a day.",
        usage: &["daily"],
        details: "Grants 50,000$ once per rolling 24 hours. If you claim too early the bot tells you how many hours remain.",
        category: CommandCategory::Economy,
    },
    CommandInfo {
        name: "shop",
        description: "Opens the wedding ring shop.",
        usage: &["shop"],
        details: "Shows every ring with its price. Pick one from the menu to buy it. You need a ring to propose.",
        category: CommandCategory::Economy,
    },
    CommandInfo {
        name: "marry",
        description: "Propose to another user.",
        usage: &["marry @user"],
        details: "Proposes with one of your rings. If you own several kinds you choose which one first. The ring is used up only when the proposal is accepted.",
        category: CommandCategory::Marriage,
    },
    CommandInfo {
        name: "olove",
        description: "Spend time together for +50 affection (once per hour).",
        usage: &["olove"],
        details: "You and your partner both gain 50 affection points. Each partner has their own one hour cooldown.",
        category: CommandCategory::Marriage,
    },
    CommandInfo {
        name: "ocheck",
        description: "Shows your couple information.",
        usage: &["ocheck"],
        details: "Displays your partner, wedding date, days together, affection points and your couple photo.",
        category: CommandCategory::Marriage,
    },
    CommandInfo {
        name: "oaddpic",
        description: "Sets your couple photo (attachment or link).",
        usage: &["oaddpic <image attachment>", "oaddpic <https://link>"],
        details: "Saves the photo on both partners. It is shown by `ocheck`.",
        category: CommandCategory::Marriage,
    },
    CommandInfo {
        name: "odivorce",
        description: "Ask for a divorce.",
        usage: &["odivorce"],
        details: "Opens a confirmation prompt. Only you can confirm it. Divorcing clears the wedding date, affection points and couple photo of both partners.",
        category: CommandCategory::Marriage,
    },
    CommandInfo {
        name: "oaddcash",
        description: "Credits money to a user (admin only).",
        usage: &["oaddcash <amount> [@user]"],
        details: "Adds a positive amount to the mentioned user, or to yourself if nobody is mentioned. Only configured administrators may use it.",
        category: CommandCategory::Admin,
    },
];

/// All primary help command names, in display order.
pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

fn create_help_embed(prefix: &str, command_name_opt: Option<&str>) -> CreateEmbed {
    let footer_text = if prefix.is_empty() {
        "No prefix needed, just type the command!".to_string()
    } else {
        format!("Current Prefix: {}", prefix)
    };
    let mut embed = CreateEmbed::new()
        .footer(CreateEmbedFooter::new(footer_text))
        .color(COLOR_INFO);

    match command_name_opt {
        Some(name) => {
            let name = name.to_lowercase();
            let name = if name == "h" { "help".to_string() } else { name };
            if let Some(cmd) = COMMANDS.iter().find(|c| c.name == name) {
                let usage_string = cmd
                    .usage
                    .iter()
                    .map(|u| format!("`{}{}`", prefix, u))
                    .collect::<Vec<_>>()
                    .join("\n");
                embed = embed
                    .title(format!("{} Command: {}", cmd.category.emoji(), cmd.name))
                    .field("Description", cmd.description, false)
                    .field("Usage", usage_string, false)
                    .field("Details", cmd.details, false);
            } else {
                embed = embed
                    .title("Command Not Found")
                    .description(format!("Sorry, I don't know a command called `{}`.", name))
                    .color(COLOR_ERROR);
            }
        }
        None => {
            embed = embed.title("📋 Command List").description(format!(
                "For more details, use `{}help <command>`.",
                prefix
            ));
            let categories = [
                CommandCategory::General,
                CommandCategory::Economy,
                CommandCategory::Marriage,
                CommandCategory::Admin,
            ];
            for category in categories {
                let command_list = get_commands_in_category(category, prefix);
                if !command_list.is_empty() {
                    embed = embed.field(
                        format!("{} {}", category.emoji(), category.name()),
                        command_list,
                        false,
                    );
                }
            }
        }
    }
    embed
}

fn get_commands_in_category(category: CommandCategory, prefix: &str) -> String {
    COMMANDS
        .iter()
        .filter(|c| c.category == category)
        .map(|c| format!("`{}{}` - {}", prefix, c.usage[0], c.description))
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) -> BotResult {
    let app_state = AppState::from_ctx(ctx).await?;
    let embed = create_help_embed(&app_state.prefix, args.first().copied());
    reply_embed(ctx, msg, embed).await
}
