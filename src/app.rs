use std::collections::HashSet;

use serde::Serialize;
use tracing::{info, warn};

use crate::article::{Article, Collection};
use crate::document;
use crate::error::GeneratorError;
use crate::store::OutputStore;
use crate::strapi::StrapiClient;

#[derive(Debug, Clone, Serialize)]
pub struct GenerateSummary {
    pub documents: Vec<GeneratedDocument>,
    pub index_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedDocument {
    pub slug: String,
    pub path: String,
}

pub struct App<C: StrapiClient> {
    store: OutputStore,
    client: C,
}

impl<C: StrapiClient> App<C> {
    pub fn new(store: OutputStore, client: C) -> Self {
        Self { store, client }
    }

    /// Runs the whole pipeline: reset the output directory, fetch and decode
    /// the article collection, write one document per article, then write the
    /// aggregate index with the bodies stripped. Any failure aborts the run;
    /// documents already written stay on disk.
    pub fn generate(&self) -> Result<GenerateSummary, GeneratorError> {
        info!(root = %self.store.root(), "resetting output directory");
        self.store.reset()?;

        info!("fetching articles");
        let mut articles = self.client.fetch_articles()?;
        info!(count = articles.data.len(), "decoded articles");

        let mut seen = HashSet::new();
        let mut documents = Vec::with_capacity(articles.data.len());
        for entry in &articles.data {
            let article = &entry.attributes;
            if !seen.insert(article.slug.clone()) {
                warn!(slug = %article.slug, "duplicate slug overwrites an earlier document");
            }

            let rendered = document::render_document(article)?;
            let path = self.store.article_path(&article.slug);
            self.store.write_document(&path, &rendered)?;
            documents.push(GeneratedDocument {
                slug: article.slug.clone(),
                path: path.into_string(),
            });
        }

        // The index must not duplicate every body, so content is dropped
        // before the collection is serialized back out.
        for entry in &mut articles.data {
            entry.attributes.content = None;
        }
        self.store.write_index(&encode_index(&articles)?)?;
        info!(path = %self.store.index_path(), "wrote index");

        Ok(GenerateSummary {
            documents,
            index_path: self.store.index_path().into_string(),
        })
    }
}

fn encode_index(articles: &Collection<Article>) -> Result<Vec<u8>, GeneratorError> {
    let mut encoded = serde_json::to_vec(articles)
        .map_err(|err| GeneratorError::Serialize(err.to_string()))?;
    encoded.push(b'\n');
    Ok(encoded)
}
