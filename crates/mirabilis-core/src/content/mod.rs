//! Static content loading
//!
//! The archive ships four JSON resources, one per content category (major
//! works, essays, letters, papers), each holding an ordered array of
//! records. `ContentLibrary` deserializes them into the typed models and
//! offers point lookup by identifier.
//!
//! ## Sources
//!
//! - **Bundled** (default): the resources compiled into this crate with
//!   `include_str!`. Fixed at build time, never missing.
//! - **Directory**: the same four file names read from a directory on disk.
//!   Used by tests and by deployments that override the bundled content.
//!
//! Every load re-reads and re-parses its resource; there is no cache.
//! Operations are independent and share no mutable state, so concurrent
//! calls need no coordination.

pub mod error;

pub use error::{ContentError, ContentResult};

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::models::{Essay, Letter, MajorWork, Paper};

const BUNDLED_MAJOR_WORKS: &str = include_str!("../../assets/major_works.json");
const BUNDLED_ESSAYS: &str = include_str!("../../assets/essays.json");
const BUNDLED_LETTERS: &str = include_str!("../../assets/letters.json");
const BUNDLED_PAPERS: &str = include_str!("../../assets/papers.json");

/// The four content categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MajorWorks,
    Essays,
    Letters,
    Papers,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 4] = [
        Category::MajorWorks,
        Category::Essays,
        Category::Letters,
        Category::Papers,
    ];

    /// The fixed resource file name for this category
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::MajorWorks => "major_works.json",
            Category::Essays => "essays.json",
            Category::Letters => "letters.json",
            Category::Papers => "papers.json",
        }
    }

    fn bundled_json(&self) -> &'static str {
        match self {
            Category::MajorWorks => BUNDLED_MAJOR_WORKS,
            Category::Essays => BUNDLED_ESSAYS,
            Category::Letters => BUNDLED_LETTERS,
            Category::Papers => BUNDLED_PAPERS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::MajorWorks => "major works",
            Category::Essays => "essays",
            Category::Letters => "letters",
            Category::Papers => "papers",
        };
        write!(f, "{}", name)
    }
}

/// A typed record belonging to a content category
///
/// Ties each model type to its resource and exposes the identifier used for
/// point lookup. Identifiers are unique within a category; lookup returns
/// the first match in array order and does not detect duplicates.
pub trait ContentRecord: DeserializeOwned {
    /// The category this record type belongs to
    const CATEGORY: Category;

    /// The record's identifier
    fn id(&self) -> &str;
}

impl ContentRecord for MajorWork {
    const CATEGORY: Category = Category::MajorWorks;

    fn id(&self) -> &str {
        &self.id
    }
}

impl ContentRecord for Essay {
    const CATEGORY: Category = Category::Essays;

    fn id(&self) -> &str {
        &self.id
    }
}

impl ContentRecord for Letter {
    const CATEGORY: Category = Category::Letters;

    fn id(&self) -> &str {
        &self.id
    }
}

impl ContentRecord for Paper {
    const CATEGORY: Category = Category::Papers;

    fn id(&self) -> &str {
        &self.id
    }
}

enum ContentSource {
    Bundled,
    Dir(PathBuf),
}

/// Loader for the archive's static content
///
/// Stateless apart from its source; cheap to share by reference across
/// concurrent callers.
pub struct ContentLibrary {
    source: ContentSource,
}

impl ContentLibrary {
    /// Library over the resources compiled into this crate
    pub fn bundled() -> Self {
        Self {
            source: ContentSource::Bundled,
        }
    }

    /// Library over resource files in the given directory
    ///
    /// The directory must contain the fixed file names from
    /// [`Category::file_name`]; missing or malformed files surface as typed
    /// errors at load time.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: ContentSource::Dir(dir.into()),
        }
    }

    /// Load every record of a category, in resource order
    ///
    /// Re-reads and re-parses the resource on every call.
    pub async fn load_all<C: ContentRecord>(&self) -> ContentResult<Vec<C>> {
        match &self.source {
            ContentSource::Bundled => parse(C::CATEGORY, C::CATEGORY.bundled_json()),
            ContentSource::Dir(dir) => {
                let path = dir.join(C::CATEGORY.file_name());
                let text = match tokio::fs::read_to_string(&path).await {
                    Ok(text) => text,
                    Err(source) if source.kind() == io::ErrorKind::NotFound => {
                        return Err(ContentError::NotFound {
                            category: C::CATEGORY,
                            path,
                        });
                    }
                    Err(source) => {
                        return Err(ContentError::Read {
                            category: C::CATEGORY,
                            path,
                            source,
                        });
                    }
                };
                parse(C::CATEGORY, &text)
            }
        }
    }

    /// Load every record of a category, swallowing failures
    ///
    /// On any load failure the error is logged and an empty vector
    /// returned, so callers cannot tell "empty category" from "load
    /// failed". Prefer [`ContentLibrary::load_all`] where the distinction
    /// matters.
    pub async fn load_all_or_empty<C: ContentRecord>(&self) -> Vec<C> {
        match self.load_all().await {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to load {}: {}", C::CATEGORY, e);
                Vec::new()
            }
        }
    }

    /// Look up a record by identifier
    ///
    /// Reloads the category and returns the first record whose id matches,
    /// or `None` when no record does.
    pub async fn get_by_id<C: ContentRecord>(&self, id: &str) -> ContentResult<Option<C>> {
        let records = self.load_all::<C>().await?;
        Ok(records.into_iter().find(|record| record.id() == id))
    }
}

fn parse<C: DeserializeOwned>(category: Category, text: &str) -> ContentResult<Vec<C>> {
    serde_json::from_str(text).map_err(|source| ContentError::Malformed { category, source })
}
