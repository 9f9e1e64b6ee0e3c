//! WhatsApp deep-link construction.
//!
//! Two addressing modes: an untargeted share through
//! `api.whatsapp.com/send` (opens the sender's contact picker) and a
//! targeted send through `wa.me/<phone>`. The message text is the caller's
//! template with the referral link appended; encoding is plain
//! percent-encoding of the concatenation.

/// Strips everything but digits and prepends the Colombian country code
/// unless the number already carries it.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.starts_with("57") {
        digits
    } else {
        format!("57{digits}")
    }
}

/// Untargeted share: `https://api.whatsapp.com/send?text=...`.
pub fn share_url(message: &str, target_url: &str) -> String {
    format!("https://api.whatsapp.com/send?text={}", encode(message, target_url))
}

/// Targeted send: `https://wa.me/<phone>?text=...`.
pub fn send_url(phone: &str, message: &str, target_url: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        normalize_phone(phone),
        encode(message, target_url)
    )
}

fn encode(message: &str, target_url: &str) -> String {
    urlencoding::encode(&format!("{message}{target_url}")).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_url_percent_encodes_message_and_link() {
        assert_eq!(
            share_url("Hello ", "https://x.com"),
            "https://api.whatsapp.com/send?text=Hello%20https%3A%2F%2Fx.com"
        );
    }

    #[test]
    fn send_url_targets_the_normalized_number() {
        let url = send_url("300 123 4567", "Hola: ", "https://x.com");
        assert!(url.starts_with("https://wa.me/573001234567?text="));
    }

    #[test]
    fn normalize_phone_prepends_country_code() {
        assert_eq!(normalize_phone("300 123 4567"), "573001234567");
    }

    #[test]
    fn normalize_phone_keeps_existing_country_code() {
        assert_eq!(normalize_phone("573001234567"), "573001234567");
        assert_eq!(normalize_phone("+57 300 123 4567"), "573001234567");
    }
}
