//! Replies sent back into the channel.
//!
//! Everything here is platform-neutral; `bot::embeds` turns a [`Reply`] into
//! an embed at the very edge.

use crate::errors::ErrorKind;
use crate::models::{Action, ClockEvent};

/// Accent colours
pub const GREEN: u32 = 0x2ECC71;
pub const RED: u32 = 0xE74C3C;
pub const BLURPLE: u32 = 0x5865F2;

/// Max fields the chat platform accepts in one embed.
pub const MAX_FIELDS_PER_REPLY: usize = 25;

pub const NO_RECORDS: &str = "Nenhum registro encontrado.";
pub const USAGE_LIST: &str = "Uso: `!verpontos` ou `!verpontos @usuário`.";
const MISCONFIGURED: &str = "O bot está mal configurado. Avise um administrador.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub title: String,
    pub colour: u32,
    pub fields: Vec<Field>,
    pub footer: Option<String>,
}

impl Reply {
    fn new(title: &str, colour: u32) -> Self {
        Self {
            title: title.to_string(),
            colour,
            fields: Vec::new(),
            footer: None,
        }
    }

    fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }
}

/// Which command a failure message is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    ClockIn,
    ClockOut,
    List,
}

impl From<Action> for CommandKind {
    fn from(action: Action) -> Self {
        match action {
            Action::Entry => CommandKind::ClockIn,
            Action::Exit => CommandKind::ClockOut,
        }
    }
}

pub fn mention(user_id: u64) -> String {
    format!("<@{}>", user_id)
}

/// Confirmation for a freshly recorded clock-in or clock-out.
pub fn clock_confirmation(event: &ClockEvent) -> Reply {
    let (title, colour, footer) = match event.action {
        Action::Entry => ("📥 Ponto Registrado", GREEN, "Entrada registrada com sucesso!"),
        Action::Exit => ("📤 Ponto Finalizado", RED, "Saída registrada com sucesso!"),
    };

    Reply::new(title, colour)
        .field("Usuário", mention(event.user_id), true)
        .field("Data", event.date_str(), true)
        .field(format!("Hora de {}", event.action.label()), event.time_str(), true)
        .footer(footer)
}

/// Render a non-empty listing, 25 rows per reply.
pub fn listing_pages(rows: &[ClockEvent]) -> Vec<Reply> {
    let chunks: Vec<&[ClockEvent]> = rows.chunks(MAX_FIELDS_PER_REPLY).collect();
    let total = chunks.len();

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let mut reply = Reply::new("📜 Registros de Ponto", BLURPLE);
            for ev in chunk {
                reply = reply.field(
                    format!("{} ({})", ev.user_display_name, ev.user_id),
                    format!(
                        "**Data:** {}\n**Hora:** {}\n**Ação:** {}",
                        ev.date_str(),
                        ev.time_str(),
                        ev.action.to_db_str()
                    ),
                    false,
                );
            }
            if total > 1 {
                reply = reply.footer(format!("Página {}/{}", i + 1, total));
            }
            reply
        })
        .collect()
}

/// User-facing text for a failed command. Never includes error internals.
pub fn failure_text(command: CommandKind, kind: ErrorKind) -> &'static str {
    if kind == ErrorKind::Config {
        return MISCONFIGURED;
    }
    match command {
        CommandKind::ClockIn => {
            "Ocorreu um erro ao registrar seu ponto. Tente novamente mais tarde."
        }
        CommandKind::ClockOut => {
            "Ocorreu um erro ao finalizar seu ponto. Tente novamente mais tarde."
        }
        CommandKind::List => "Erro ao visualizar os pontos.",
    }
}
