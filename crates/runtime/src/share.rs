//! Shareable character links.
//!
//! A link carries the whole character as JSON, base64-encoded with the
//! URL-safe alphabet and no padding, after a `#char=` fragment marker. The
//! fragment never reaches a server, so the character stays client-side.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use loremaster_core::{Character, CharacterError, RulesEnv, check_character};
use thiserror::Error;

/// Marker preceding the payload in a share URL.
pub const SHARE_FRAGMENT: &str = "#char=";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("share link is empty")]
    Empty,

    #[error("share link is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("share link does not contain a character: {0}")]
    Json(#[from] serde_json::Error),

    #[error("shared character rejected: {0}")]
    Rejected(#[from] CharacterError),
}

/// Encodes `character` as a link payload.
///
/// The roster id is left out: it only means something on the sharer's host.
pub fn encode_share_link(character: &Character) -> Result<String, ShareError> {
    let shared = Character {
        roster_id: None,
        ..character.clone()
    };
    let json = serde_json::to_vec(&shared)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Full share URL: `base` with the payload fragment appended.
pub fn share_url(base: &str, character: &Character) -> Result<String, ShareError> {
    let base = base.split('#').next().unwrap_or(base);
    Ok(format!("{base}{SHARE_FRAGMENT}{}", encode_share_link(character)?))
}

/// Decodes a link or bare payload, then checks the character against `env`.
pub fn decode_share_link(link: &str, env: &RulesEnv<'_>) -> Result<Character, ShareError> {
    let payload = match link.find(SHARE_FRAGMENT) {
        Some(pos) => &link[pos + SHARE_FRAGMENT.len()..],
        None => link,
    };
    // Tolerate padding added by other encoders.
    let payload = payload.trim().trim_end_matches('=');
    if payload.is_empty() {
        return Err(ShareError::Empty);
    }

    let json = URL_SAFE_NO_PAD.decode(payload)?;
    let mut character: Character = serde_json::from_slice(&json)?;
    character.roster_id = None;
    check_character(&character, env)?;

    tracing::debug!(name = %character.display_name(), "decoded share link");
    Ok(character)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loremaster_core::ReferenceData;

    fn hero() -> Character {
        let mut c = Character::new();
        c.identity.name = "Éowyn?&=/+".into();
        c.wizard_step = 9;
        c.roster_id = Some("local-id".into());
        c
    }

    #[test]
    fn links_survive_a_round_trip() {
        let data = ReferenceData::default();
        let url = share_url("https://example.org/tor/#old", &hero()).unwrap();
        assert!(url.starts_with("https://example.org/tor/#char="));

        let payload = &url[url.find(SHARE_FRAGMENT).unwrap() + SHARE_FRAGMENT.len()..];
        assert!(
            payload
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );

        let decoded = decode_share_link(&url, &data.env()).unwrap();
        assert_eq!(decoded.identity.name, "Éowyn?&=/+");
        assert_eq!(decoded.wizard_step, 9);
        assert_eq!(decoded.roster_id, None);

        let bare = decode_share_link(payload, &data.env()).unwrap();
        assert_eq!(bare, decoded);
    }

    #[test]
    fn malformed_links_are_errors() {
        let data = ReferenceData::default();
        let env = data.env();
        assert!(matches!(decode_share_link("#char=", &env), Err(ShareError::Empty)));
        assert!(matches!(decode_share_link("%%%", &env), Err(ShareError::Base64(_))));
        let not_json = URL_SAFE_NO_PAD.encode("hello");
        assert!(matches!(decode_share_link(&not_json, &env), Err(ShareError::Json(_))));
    }

    #[test]
    fn shared_characters_are_checked() {
        let data = ReferenceData::default();
        let mut c = hero();
        c.culture_id = Some("ents".into());
        let payload = encode_share_link(&c).unwrap();
        assert!(matches!(
            decode_share_link(&payload, &data.env()),
            Err(ShareError::Rejected(CharacterError::UnknownCulture(_)))
        ));
    }
}
