//! Chat framework wiring.

pub mod commands;
pub mod embeds;

use crate::config::Config;
use crate::core::EventRecorder;
use crate::errors::AppError;
use crate::ui::messages::USAGE_LIST;
use poise::serenity_prelude as serenity;
use tracing::{error, info, warn};

/// State shared by every command invocation.
pub struct Data {
    pub recorder: EventRecorder,
}

pub type Error = AppError;
pub type Context<'a> = poise::Context<'a, Data, Error>;

pub fn intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT
}

pub fn framework(prefix: String, recorder: EventRecorder) -> poise::Framework<Data, Error> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                info!(user = %ready.user.name, "Bot connected and ready");
                Ok(Data { recorder })
            })
        })
        .build()
}

/// Build the chat client. Connecting happens in `Client::start`.
pub async fn client(cfg: &Config, recorder: EventRecorder) -> Result<serenity::Client, AppError> {
    let client = serenity::ClientBuilder::new(&cfg.token, intents())
        .framework(framework(cfg.prefix.clone(), recorder))
        .await?;
    Ok(client)
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::ArgumentParse { error, input, ctx, .. } => {
            warn!(%error, ?input, command = %ctx.command().name, "Invalid command argument");
            if let Err(e) = ctx.say(USAGE_LIST).await {
                error!(error = %e, "Failed to send usage hint");
            }
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(error = %error, command = %ctx.command().name, "Command failed");
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!(error = %e, "Error while handling framework error");
            }
        }
    }
}
