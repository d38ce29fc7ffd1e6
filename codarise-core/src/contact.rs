/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Contact channels offered in the contact section.

use crate::config::PageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    WhatsApp,
    Call,
    Email,
}

impl ContactChannel {
    pub const ALL: [ContactChannel; 3] = [
        ContactChannel::WhatsApp,
        ContactChannel::Call,
        ContactChannel::Email,
    ];

    /// Catalog key prefix (`contact.<key>.title`).
    pub fn key(&self) -> &'static str {
        match self {
            ContactChannel::WhatsApp => "whatsapp",
            ContactChannel::Call => "call",
            ContactChannel::Email => "email",
        }
    }

    /// Link opened by the card, or `None` when the page has no value for
    /// this channel.
    pub fn href(&self, config: &PageConfig) -> Option<String> {
        match self {
            ContactChannel::WhatsApp => {
                let digits: String = config
                    .contact_phone
                    .as_deref()?
                    .chars()
                    .filter(char::is_ascii_digit)
                    .collect();
                (!digits.is_empty()).then(|| format!("https://wa.me/{digits}"))
            }
            ContactChannel::Call => {
                let phone = config.contact_phone.as_deref()?.trim();
                (!phone.is_empty()).then(|| format!("tel:{phone}"))
            }
            ContactChannel::Email => {
                let email = config.contact_email.as_deref()?.trim();
                (!email.is_empty()).then(|| format!("mailto:{email}"))
            }
        }
    }
}
