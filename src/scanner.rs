use crate::ImageRecord;
use lazy_static::lazy_static;
use scraper::{Html, Selector};

lazy_static! {
    static ref TITLE_SELECTOR: Selector = Selector::parse("title").unwrap();
    static ref IMG_SELECTOR: Selector = Selector::parse("img").unwrap();
}

/// Title and images extracted from one fetched page.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: Option<String>,
    pub images: Vec<ImageRecord>,
}

/// Parse page content and enumerate its `<img>` elements in document order.
pub fn scan(content: &str) -> Page {
    let document = Html::parse_document(content);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    let images = document
        .select(&IMG_SELECTOR)
        .map(|el| ImageRecord {
            src: el.value().attr("src").map(|s| s.to_string()),
            alt: el.value().attr("alt").map(|s| s.to_string()),
            raw_tag: el.html(),
        })
        .collect();

    Page { title, images }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html>
        <head><title> Example Gallery </title></head>
        <body>
            <img src="/a.png" alt="A red arrow">
            <img src="/b.png" alt="">
            <img src="/c.png">
            <p>no images here</p>
        </body>
    </html>"#;

    #[test]
    fn test_title_extracted_and_trimmed() {
        let page = scan(PAGE);
        assert_eq!(page.title.as_deref(), Some("Example Gallery"));
    }

    #[test]
    fn test_images_in_document_order() {
        let page = scan(PAGE);
        assert_eq!(page.images.len(), 3);
        assert_eq!(page.images[0].src.as_deref(), Some("/a.png"));
        assert_eq!(page.images[0].alt.as_deref(), Some("A red arrow"));
        assert_eq!(page.images[1].alt.as_deref(), Some(""));
        assert_eq!(page.images[2].src.as_deref(), Some("/c.png"));
        assert!(page.images[2].alt.is_none());
    }

    #[test]
    fn test_raw_tag_preserved() {
        let page = scan(PAGE);
        assert!(page.images[0].raw_tag.starts_with("<img"));
        assert!(page.images[0].raw_tag.contains("alt=\"A red arrow\""));
    }

    #[test]
    fn test_missing_title() {
        let page = scan("<html><body><img src=\"x.png\"></body></html>");
        assert!(page.title.is_none());
        assert_eq!(page.images.len(), 1);
    }

    #[test]
    fn test_no_images() {
        let page = scan("<html><head><title>t</title></head><body></body></html>");
        assert!(page.images.is_empty());
    }
}
