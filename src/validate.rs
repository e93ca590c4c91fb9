use url::Url;

use crate::error::ScrapeError;

/// True when `input` is an absolute http(s) URL with a host.
pub fn validate(input: &str) -> bool {
    parse_target(input).is_ok()
}

/// Parse the page URL, rejecting anything that is not absolute http(s).
pub fn parse_target(input: &str) -> Result<Url, ScrapeError> {
    // Url::parse silently trims surrounding whitespace; a form field would not.
    if input.is_empty() || input.trim() != input {
        return Err(ScrapeError::InvalidUrl(input.to_string()));
    }

    // Url::parse also repairs `http:host`, `http:/host` and `http:\\host`.
    if !has_authority(input) {
        return Err(ScrapeError::InvalidUrl(input.to_string()));
    }

    let url = Url::parse(input).map_err(|_| ScrapeError::InvalidUrl(input.to_string()))?;

    let scheme_ok = matches!(url.scheme(), "http" | "https");
    let host_ok = url.host_str().is_some_and(|h| !h.is_empty());
    if scheme_ok && host_ok {
        Ok(url)
    } else {
        Err(ScrapeError::InvalidUrl(input.to_string()))
    }
}

/// `http://` or `https://` (any case) followed by a non-empty authority.
fn has_authority(input: &str) -> bool {
    let rest = ["http://", "https://"].iter().find_map(|prefix| {
        input
            .get(..prefix.len())
            .filter(|head| head.eq_ignore_ascii_case(prefix))
            .map(|_| &input[prefix.len()..])
    });
    let Some(rest) = rest else {
        return false;
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    !authority.is_empty() && !authority.contains('\\')
}
