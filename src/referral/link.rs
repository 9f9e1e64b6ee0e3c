//! Personalized tool URLs for referral attribution.

use crate::account::domain::profile::UserProfile;
use url::Url;

use super::slug::distributor_slug;

/// Decorates a tool destination with the member's referral attribution:
/// `distribuidor=<slug>` when the name produces a usable slug, otherwise
/// `socio=<id>`. Existing query parameters survive; a same-named parameter
/// is replaced. An unparseable base URL is returned unchanged so a bad
/// configuration value can never break the page.
pub fn personalized_tool_url(base_url: &str, profile: Option<&UserProfile>) -> String {
    let Some(profile) = profile else {
        return base_url.to_string();
    };

    let mut url = match Url::parse(base_url) {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!("unparseable tool URL '{base_url}': {err}");
            return base_url.to_string();
        },
    };

    let slug = distributor_slug(profile.full_name.as_deref().unwrap_or(""));
    if slug.is_empty() {
        set_query_param(&mut url, "socio", &profile.id);
    } else {
        set_query_param(&mut url, "distribuidor", &slug);
    }

    url.to_string()
}

fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (k, v) in &retained {
        pairs.append_pair(k, v);
    }
    pairs.append_pair(key, value);
    drop(pairs);

    // clear() leaves an empty query ("?") when nothing was appended; that
    // cannot happen here since we always append, but normalize anyway.
    if url.query() == Some("") {
        url.set_query(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::domain::session::{AuthUser, UserMetadata};
    use chrono::Utc;

    fn profile(full_name: &str) -> UserProfile {
        let user = AuthUser {
            id: "u1".to_string(),
            email: "m@x.com".to_string(),
            metadata: UserMetadata {
                full_name: if full_name.is_empty() {
                    None
                } else {
                    Some(full_name.to_string())
                },
                whatsapp: None,
            },
            created_at: Utc::now(),
        };
        UserProfile::merge(&user, None)
    }

    #[test]
    fn named_profile_gets_distributor_slug() {
        let url = personalized_tool_url(
            "https://catalogo.4millones.com/",
            Some(&profile("María José Pérez")),
        );
        assert_eq!(url, "https://catalogo.4millones.com/?distribuidor=maria-jose");
    }

    #[test]
    fn nameless_profile_falls_back_to_socio_id() {
        let url = personalized_tool_url("https://catalogo.4millones.com/", Some(&profile("")));
        assert_eq!(url, "https://catalogo.4millones.com/?socio=u1");
    }

    #[test]
    fn no_profile_returns_base_unchanged() {
        let url = personalized_tool_url("https://catalogo.4millones.com/", None);
        assert_eq!(url, "https://catalogo.4millones.com/");
    }

    #[test]
    fn existing_query_parameters_are_preserved() {
        let url = personalized_tool_url(
            "https://oportunidad.4millones.com/?utm_source=portal",
            Some(&profile("Ana Lucía")),
        );
        assert_eq!(
            url,
            "https://oportunidad.4millones.com/?utm_source=portal&distribuidor=ana-lucia"
        );
    }

    #[test]
    fn stale_attribution_is_replaced_not_duplicated() {
        let url = personalized_tool_url(
            "https://catalogo.4millones.com/?distribuidor=old-slug",
            Some(&profile("Ana Lucía")),
        );
        assert_eq!(url, "https://catalogo.4millones.com/?distribuidor=ana-lucia");
    }

    #[test]
    fn invalid_base_url_is_returned_unchanged() {
        let url = personalized_tool_url("not a url", Some(&profile("Ana Lucía")));
        assert_eq!(url, "not a url");
    }
}
