use tracing::trace;

use super::{ExtractedRecord, ImageRecord, NO_ALT_TEXT};
use crate::document::Document;
use crate::normalize::normalize;

/// Every image with a `src`, resolved against `base_url`.
pub fn extract(doc: &Document, base_url: &str) -> Vec<ExtractedRecord> {
    doc.images()
        .filter_map(|img| {
            let el = img.value();
            let src = match el.attr("src") {
                Some(src) if !src.is_empty() => src,
                _ => {
                    trace!("Skipping image without src");
                    return None;
                }
            };
            let alt_text = el
                .attr("alt")
                .filter(|alt| !alt.is_empty())
                .unwrap_or(NO_ALT_TEXT)
                .to_string();

            Some(ExtractedRecord::Image(ImageRecord {
                absolute_url: normalize(src, base_url),
                alt_text,
            }))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse;

    fn images(html: &str, base: &str) -> Vec<ImageRecord> {
        let doc = parse(html.as_bytes()).unwrap();
        extract(&doc, base)
            .into_iter()
            .filter_map(|r| r.as_image().cloned())
            .collect()
    }

    #[test]
    fn resolves_relative_src() {
        let imgs = images(r#"<img src="pic.png" alt="Cat">"#, "http://site.com/dir/page.html");
        assert_eq!(
            imgs,
            vec![ImageRecord {
                absolute_url: "http://site.com/dir/pic.png".into(),
                alt_text: "Cat".into(),
            }]
        );
    }

    #[test]
    fn alt_defaults() {
        let imgs = images(r#"<img src="/a.png"><img src="/b.png" alt="">"#, "https://site.com");
        assert_eq!(imgs.len(), 2);
        assert!(imgs.iter().all(|i| i.alt_text == NO_ALT_TEXT));
        assert_eq!(imgs[0].absolute_url, "https://site.com/a.png");
    }

    #[test]
    fn absolute_src_untouched() {
        let imgs = images(r#"<img src="https://cdn.net/x.jpg" alt="X">"#, "http://site.com");
        assert_eq!(imgs[0].absolute_url, "https://cdn.net/x.jpg");
    }

    #[test]
    fn skips_missing_src() {
        let imgs = images(r#"<img alt="ghost"><img src=""><img src="ok.gif">"#, "http://site.com/");
        assert_eq!(imgs.len(), 1);
        assert_eq!(imgs[0].absolute_url, "http://site.com/ok.gif");
    }
}
