use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::article::{Article, ImageAttribution};
use crate::error::GeneratorError;

/// YAML frontmatter prepended to each generated document. Field declaration
/// order is the key order in the emitted header.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_attribution: Option<ImageAttribution>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    pub authors: Vec<FrontmatterAuthor>,
}

#[derive(Debug, Serialize)]
pub struct FrontmatterAuthor {
    pub name: String,
    pub url: String,
    pub avatar: String,
}

impl Frontmatter {
    pub fn from_article(article: &Article) -> Self {
        let authors = article
            .authors
            .data
            .iter()
            .map(|entry| FrontmatterAuthor {
                name: entry.attributes.name.clone(),
                url: entry.attributes.url.clone(),
                avatar: entry.attributes.avatar.clone(),
            })
            .collect();

        Self {
            slug: article.slug.clone(),
            title: article.title.clone(),
            summary: article.summary.clone(),
            image: article.image.clone(),
            image_attribution: article.image_attribution.clone(),
            // Unpublished drafts fall back to their creation time so the
            // header never carries a null date.
            published_at: article.published_at.unwrap_or(article.created_at),
            updated_at: article.updated_at,
            read_time: article.read_time.clone(),
            authors,
        }
    }
}

/// Renders one article as a complete MDX document: a `---`-delimited YAML
/// header followed by a blank line and the body text verbatim.
pub fn render_document(article: &Article) -> Result<Vec<u8>, GeneratorError> {
    let frontmatter = Frontmatter::from_article(article);
    let header = serde_yaml::to_string(&frontmatter)
        .map_err(|err| GeneratorError::Serialize(err.to_string()))?;
    let body = article.content.as_deref().unwrap_or_default();

    let mut document = Vec::with_capacity(header.len() + body.len() + 16);
    document.extend_from_slice(b"---\n");
    document.extend_from_slice(header.as_bytes());
    document.extend_from_slice(b"---\n\n");
    document.extend_from_slice(body.as_bytes());
    Ok(document)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::article::{Author, Collection, Entry};

    fn article() -> Article {
        Article {
            content: Some("Body text.".to_string()),
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap(),
            title: "Hello".to_string(),
            summary: "A greeting".to_string(),
            slug: "hello".to_string(),
            image: "https://cdn.example/hello.png".to_string(),
            ..Article::default()
        }
    }

    fn author(name: &str) -> Entry<Author> {
        Entry {
            id: 0,
            attributes: Author {
                name: name.to_string(),
                url: format!("https://example.com/{name}"),
                avatar: format!("https://cdn.example/{name}.png"),
                ..Author::default()
            },
        }
    }

    #[test]
    fn publish_date_falls_back_to_creation_date() {
        let draft = article();
        let frontmatter = Frontmatter::from_article(&draft);
        assert_eq!(frontmatter.published_at, draft.created_at);

        let mut published = article();
        published.published_at = Some(Utc.with_ymd_and_hms(2023, 3, 4, 5, 6, 7).unwrap());
        let frontmatter = Frontmatter::from_article(&published);
        assert_eq!(frontmatter.published_at, published.published_at.unwrap());
    }

    #[test]
    fn author_order_is_preserved() {
        let mut article = article();
        article.authors = Collection {
            data: vec![author("zoe"), author("amir"), author("mid")],
        };

        let frontmatter = Frontmatter::from_article(&article);
        let names: Vec<&str> = frontmatter
            .authors
            .iter()
            .map(|author| author.name.as_str())
            .collect();
        assert_eq!(names, vec!["zoe", "amir", "mid"]);
    }

    #[test]
    fn empty_author_list_stays_present() {
        let document = render_document(&article()).unwrap();
        let text = String::from_utf8(document).unwrap();
        assert!(text.contains("authors: []"), "header was: {text}");
    }

    #[test]
    fn attribution_is_omitted_when_absent() {
        let document = render_document(&article()).unwrap();
        let text = String::from_utf8(document).unwrap();
        assert!(!text.contains("imageAttribution"), "header was: {text}");
    }

    #[test]
    fn attribution_is_carried_through_when_present() {
        let mut article = article();
        article.image_attribution = Some(ImageAttribution {
            author: "Jane".to_string(),
            author_url: "https://unsplash.com/@jane".to_string(),
            platform: "Unsplash".to_string(),
            platform_url: "https://unsplash.com".to_string(),
        });

        let document = render_document(&article).unwrap();
        let text = String::from_utf8(document).unwrap();
        assert!(text.contains("imageAttribution:"), "header was: {text}");
        assert!(
            text.contains("authorUrl: https://unsplash.com/@jane"),
            "header was: {text}"
        );
        assert!(text.contains("platform: Unsplash"), "header was: {text}");
    }

    #[test]
    fn body_follows_header_verbatim() {
        let mut article = article();
        article.content = Some("# Title\n\nParagraph with `code`.\n".to_string());

        let document = render_document(&article).unwrap();
        let text = String::from_utf8(document).unwrap();
        assert!(text.starts_with("---\n"));

        let (_, body) = text.split_once("---\n\n").unwrap();
        assert_eq!(body, "# Title\n\nParagraph with `code`.\n");
    }

    #[test]
    fn missing_body_renders_empty_document_tail() {
        let mut article = article();
        article.content = None;

        let document = render_document(&article).unwrap();
        let text = String::from_utf8(document).unwrap();
        let (_, body) = text.split_once("---\n\n").unwrap();
        assert_eq!(body, "");
    }

    #[test]
    fn header_serializes_resolved_publish_date() {
        let document = render_document(&article()).unwrap();
        let text = String::from_utf8(document).unwrap();
        assert!(
            text.contains("publishedAt: 2023-01-01T00:00:00Z"),
            "header was: {text}"
        );
        assert!(
            text.contains("updatedAt: 2023-01-02T00:00:00Z"),
            "header was: {text}"
        );
    }
}
