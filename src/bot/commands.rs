//! The three chat commands.
//!
//! Each handler answers failures itself with an apology; only errors while
//! talking to the chat platform reach the framework's `on_error`.

use super::embeds::to_embed;
use super::{Context, Error};
use crate::core::{Listing, list_events};
use crate::errors::ErrorKind;
use crate::models::Action;
use crate::ui::messages::{CommandKind, NO_RECORDS, clock_confirmation, failure_text, listing_pages};
use poise::serenity_prelude as serenity;
use tracing::{error, warn};

/// Clock in
#[poise::command(prefix_command, rename = "baterponto")]
pub async fn clock_in(ctx: Context<'_>) -> Result<(), Error> {
    punch(ctx, Action::Entry).await
}

/// Clock out
#[poise::command(prefix_command, rename = "finalizarponto")]
pub async fn clock_out(ctx: Context<'_>) -> Result<(), Error> {
    punch(ctx, Action::Exit).await
}

/// List recorded events, optionally of a single user
#[poise::command(prefix_command, rename = "verpontos")]
pub async fn list(ctx: Context<'_>, user: Option<serenity::User>) -> Result<(), Error> {
    let target = user.as_ref().map(|u| u.id.get());
    let store = ctx.data().recorder.store();

    match list_events(&**store, target).await {
        Ok(Listing::Empty) => {
            ctx.say(NO_RECORDS).await?;
        }
        Ok(Listing::Rows(rows)) => {
            for page in listing_pages(&rows) {
                let reply = poise::CreateReply::default().embed(to_embed(&page, None));
                if let Err(e) = ctx.send(reply).await {
                    error!(error = %e, "Could not send listing page");
                    ctx.say(failure_text(CommandKind::List, ErrorKind::Chat)).await?;
                    return Ok(());
                }
            }
            delete_trigger(ctx).await;
        }
        Err(e) => {
            ctx.say(failure_text(CommandKind::List, e.kind())).await?;
        }
    }

    Ok(())
}

async fn punch(ctx: Context<'_>, action: Action) -> Result<(), Error> {
    let author = ctx.author();
    let display_name = author.global_name.as_deref().unwrap_or(&author.name);
    let recorder = &ctx.data().recorder;

    match recorder.punch(display_name, author.id.get(), action).await {
        Ok(event) => {
            let icon = bot_avatar(ctx);
            let embed = to_embed(&clock_confirmation(&event), icon.as_deref());
            if let Err(e) = ctx.send(poise::CreateReply::default().embed(embed)).await {
                // The row is already stored; tell the user something went wrong anyway.
                error!(error = %e, id = event.id, "Could not send clock confirmation");
                ctx.say(failure_text(CommandKind::from(action), ErrorKind::Chat))
                    .await?;
                return Ok(());
            }
            delete_trigger(ctx).await;
        }
        Err(e) => {
            error!(
                error = %e,
                user_id = author.id.get(),
                action = action.to_db_str(),
                "Clock command failed"
            );
            ctx.say(failure_text(CommandKind::from(action), e.kind())).await?;
        }
    }

    Ok(())
}

fn bot_avatar(ctx: Context<'_>) -> Option<String> {
    ctx.serenity_context().cache.current_user().avatar_url()
}

/// Remove the command message from the channel. Failure (usually a missing
/// Manage Messages permission) is only logged.
async fn delete_trigger(ctx: Context<'_>) {
    if let poise::Context::Prefix(prefix) = ctx
        && let Err(e) = prefix.msg.delete(ctx.serenity_context()).await
    {
        warn!(
            error = %e,
            message_id = prefix.msg.id.get(),
            "Could not delete command message"
        );
    }
}

pub fn all() -> Vec<poise::Command<super::Data, Error>> {
    vec![clock_in(), clock_out(), list()]
}
