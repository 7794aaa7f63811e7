//! Tier 4: Configuration and corpus files

use docsearch::{
    open_store, DocsearchConfig, DocumentProvider, Error, JsonFileProvider, RankingConfig,
    SiteProvider, CONFIG_FILE_NAME,
};
use std::path::PathBuf;
use tempfile::TempDir;

const DOCS: &str = r#"[
    {"title": "Alpha", "url": "/alpha/", "content": "helm helm helm helm helm"},
    {"title": "Helm", "url": "/helm/", "content": "charts"}
]"#;

fn write_corpus(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("docs.json");
    std::fs::write(&path, DOCS).unwrap();
    path
}

#[test]
fn default_config_uses_site_pages() {
    let config = DocsearchConfig::default();
    let store = open_store(&config).unwrap();
    assert_eq!(store.len(), SiteProvider.load().unwrap().len());
}

#[test]
fn corpus_from_config_file() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir);
    let config_path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&config_path, "corpus = \"docs.json\"\n").unwrap();

    let config = DocsearchConfig::from_file(&config_path).unwrap();
    let store = open_store(&config).unwrap();
    store.ensure_built();
    assert_eq!(store.len(), 2);
    assert_eq!(store.url_for("Helm"), Some("/helm/"));
}

#[test]
fn title_boost_decides_between_title_and_body() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let boosted = DocsearchConfig {
        corpus: Some(corpus.clone()),
        ranking: RankingConfig {
            title_boost: 10.0,
            ..RankingConfig::default()
        },
    };
    let store = open_store(&boosted).unwrap();
    store.ensure_built();
    assert_eq!(store.search("helm").unwrap()[0].title, "Helm");

    let flat = DocsearchConfig {
        corpus: Some(corpus),
        ranking: RankingConfig {
            title_boost: 0.01,
            ..RankingConfig::default()
        },
    };
    let store = open_store(&flat).unwrap();
    store.ensure_built();
    assert_eq!(store.search("helm").unwrap()[0].title, "Alpha");
}

#[test]
fn invalid_ranking_is_rejected_before_loading() {
    let config = DocsearchConfig {
        corpus: Some(PathBuf::from("/nonexistent/docs.json")),
        ranking: RankingConfig {
            b: 2.0,
            ..RankingConfig::default()
        },
    };
    assert!(matches!(open_store(&config), Err(Error::Config(_))));
}

#[test]
fn malformed_corpus_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        JsonFileProvider::new(&path).load(),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn empty_title_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    std::fs::write(&path, r#"[{"title": "  ", "url": "/x/"}]"#).unwrap();
    assert!(matches!(
        JsonFileProvider::new(&path).load(),
        Err(Error::InvalidDocument(_))
    ));
}
