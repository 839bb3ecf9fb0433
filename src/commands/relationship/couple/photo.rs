//! `oaddpic`: stores one photo on both partners.

use super::ui::create_photo_saved_embed;
use crate::AppState;
use crate::commands::reply_embed;
use crate::database::store::AccountStore;
use crate::error::BotResult;
use crate::services::relationship::set_couple_photo;
use crate::ui::style::error_embed;
use serenity::model::channel::Message;
use serenity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    Url(String),
    /// An attachment was given but its content type is not an image.
    NotAnImage,
    /// Neither an attachment nor an http(s) link.
    Missing,
}

/// Picks the photo from the first attachment, falling back to a link argument.
/// `attachment` is `(url, content_type)`.
pub fn resolve_photo(attachment: Option<(&str, Option<&str>)>, arg: Option<&str>) -> PhotoSource {
    if let Some((url, content_type)) = attachment {
        return match content_type {
            Some(kind) if !kind.starts_with("image/") => PhotoSource::NotAnImage,
            _ => PhotoSource::Url(url.to_string()),
        };
    }
    match arg {
        Some(link) if link.starts_with("http://") || link.starts_with("https://") => {
            PhotoSource::Url(link.to_string())
        }
        _ => PhotoSource::Missing,
    }
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) -> BotResult {
    let app_state = AppState::from_ctx(ctx).await?;
    let prefix = &app_state.prefix;
    let not_married = || {
        error_embed(
            "Not Married",
            "You need to be married before adding a couple photo!",
        )
    };

    let account = app_state.store.get_or_create(msg.author.id).await?;
    if !account.is_married() {
        return reply_embed(ctx, msg, not_married()).await;
    }

    let attachment = msg
        .attachments
        .first()
        .map(|a| (a.url.as_str(), a.content_type.as_deref()));
    let url = match resolve_photo(attachment, args.first().copied()) {
        PhotoSource::Url(url) => url,
        PhotoSource::NotAnImage => {
            return reply_embed(
                ctx,
                msg,
                error_embed("Not an Image", "The attachment must be an image (jpg, png, gif, webp)!"),
            )
            .await;
        }
        PhotoSource::Missing => {
            let usage = format!(
                "1️⃣ Attach an image: `{prefix}oaddpic` + upload\n2️⃣ Use a link: `{prefix}oaddpic https://i.imgur.com/abc.jpg`\n\n💡 *The photo is shown by `{prefix}ocheck`.*"
            );
            return reply_embed(ctx, msg, error_embed("Usage", usage)).await;
        }
    };

    match set_couple_photo(&app_state.store, msg.author.id, &url).await? {
        Some(partner) => reply_embed(ctx, msg, create_photo_saved_embed(partner, &url)).await,
        None => reply_embed(ctx, msg, not_married()).await,
    }
}
