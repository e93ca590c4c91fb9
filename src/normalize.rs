use tracing::warn;
use url::Url;

/// Resolve `candidate` against the page URL unless it is already absolute http(s).
///
/// Falls back to the candidate unchanged when the base or the join is unusable.
pub fn normalize(candidate: &str, base_url: &str) -> String {
    if candidate.starts_with("http://") || candidate.starts_with("https://") {
        return candidate.to_string();
    }

    let resolved = Url::parse(base_url).and_then(|base| base.join(candidate));
    match resolved {
        Ok(url) => url.to_string(),
        Err(e) => {
            warn!(candidate, base_url, error = %e, "Could not resolve relative URL");
            candidate.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "http://site.com/dir/page.html";

    #[test]
    fn absolute_unchanged() {
        assert_eq!(normalize("http://ex.com/y", PAGE), "http://ex.com/y");
        assert_eq!(normalize("https://ex.com/a b", PAGE), "https://ex.com/a b");
    }

    #[test]
    fn relative_forms() {
        assert_eq!(normalize("pic.png", PAGE), "http://site.com/dir/pic.png");
        assert_eq!(normalize("/abs/path.png", PAGE), "http://site.com/abs/path.png");
        assert_eq!(normalize("img/a.png", PAGE), "http://site.com/dir/img/a.png");
        assert_eq!(normalize("../up.png", PAGE), "http://site.com/up.png");
        assert_eq!(normalize("//cdn.net/x.png", PAGE), "http://cdn.net/x.png");
        assert_eq!(normalize("?v=2", PAGE), "http://site.com/dir/page.html?v=2");
        assert_eq!(normalize("#top", PAGE), "http://site.com/dir/page.html#top");
    }

    #[test]
    fn bare_host_base() {
        assert_eq!(normalize("pic.png", "http://site.com"), "http://site.com/pic.png");
        assert_eq!(normalize("/x", "https://site.com"), "https://site.com/x");
    }

    #[test]
    fn unusable_base_returns_candidate() {
        assert_eq!(normalize("pic.png", "not a url"), "pic.png");
    }

    #[test]
    fn idempotent() {
        for x in ["pic.png", "/a/b.png", "../c.png", "//cdn.net/d.png", "?q=1", "http://ex.com/e"] {
            let once = normalize(x, PAGE);
            assert_eq!(normalize(&once, PAGE), once, "not idempotent for {x}");
        }
    }

    #[test]
    fn strip_base_round_trip() {
        let dir = "http://site.com/dir/";
        for rel in ["pic.png", "img/a.png", "a/b/c.gif"] {
            let abs = normalize(rel, PAGE);
            assert_eq!(abs.strip_prefix(dir), Some(rel));
        }
    }
}
