//! WhatsApp and mail deep links. Delivery is never verified.

use serde::{Deserialize, Serialize};
use url::form_urlencoded::byte_serialize;

use super::i18n::Lang;
use crate::database::models::TeamInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    pub whatsapp: String,
    pub email: String,
}

// mailto handlers expect %20, not the form encoding's '+'
fn encode_component(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn whatsapp_link(phone: &str, text: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}?text={}", digits, encode_component(text))
}

pub fn mailto_link(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        email.trim(),
        encode_component(subject),
        encode_component(body)
    )
}

/// Links a team uses to reach `receiver` with a scrim offer.
pub fn offer_links(sender: &TeamInfo, receiver: &TeamInfo, lang: Lang) -> ContactLinks {
    let body = lang.offer_body(&sender.team_name, &receiver.team_name);

    ContactLinks {
        whatsapp: whatsapp_link(&receiver.whatsapp, &body),
        email: mailto_link(&receiver.email, lang.labels().offer_subject, &body),
    }
}
