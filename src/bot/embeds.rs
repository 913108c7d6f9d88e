use crate::ui::Reply;
use poise::serenity_prelude as serenity;

/// Convert a rendered reply into an embed.
pub fn to_embed(reply: &Reply, footer_icon: Option<&str>) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(&reply.title)
        .colour(serenity::Colour::new(reply.colour));

    for field in &reply.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    if let Some(text) = &reply.footer {
        let mut footer = serenity::CreateEmbedFooter::new(text);
        if let Some(url) = footer_icon {
            footer = footer.icon_url(url);
        }
        embed = embed.footer(footer);
    }

    embed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, ClockEvent};
    use crate::ui::messages::{GREEN, clock_confirmation};
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::Value;

    fn confirmation() -> Reply {
        clock_confirmation(&ClockEvent {
            id: 1,
            user_display_name: "ana".into(),
            user_id: 42,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            action: Action::Entry,
        })
    }

    fn json(embed: &serenity::CreateEmbed) -> Value {
        serde_json::to_value(embed).unwrap()
    }

    #[test]
    fn embed_carries_title_colour_and_fields() {
        let embed = json(&to_embed(&confirmation(), None));
        assert_eq!(embed["title"], "📥 Ponto Registrado");
        assert_eq!(embed["color"], GREEN);

        let fields = embed["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0]["name"], "Usuário");
        assert_eq!(fields[0]["value"], "<@42>");
        assert_eq!(fields[0]["inline"], true);
        assert_eq!(fields[2]["name"], "Hora de Entrada");
    }

    #[test]
    fn footer_icon_is_set_when_available() {
        let url = "https://cdn.example.com/avatar.png";
        let embed = json(&to_embed(&confirmation(), Some(url)));
        assert_eq!(embed["footer"]["text"], "Entrada registrada com sucesso!");
        assert_eq!(embed["footer"]["icon_url"], url);
    }

    #[test]
    fn footer_has_no_icon_without_avatar() {
        let embed = json(&to_embed(&confirmation(), None));
        assert_eq!(embed["footer"]["text"], "Entrada registrada com sucesso!");
        let icon = embed["footer"].get("icon_url");
        assert!(icon.is_none() || icon == Some(&Value::Null));
    }
}
