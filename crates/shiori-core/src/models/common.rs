use serde::Serialize;

/// Medium and large image URLs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Picture {
    pub medium: Option<String>,
    pub large: Option<String>,
}

/// Alternative titles of an anime or manga.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlternativeTitles {
    pub synonyms: Vec<String>,
    pub en: Option<String>,
    pub ja: Option<String>,
}

/// An `{id, name}` pair: genres, studios, magazines, forum users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamedRef {
    pub id: Option<u64>,
    pub name: Option<String>,
}

/// Minimal stand-in for a related or recommended title.
///
/// Deliberately shallower than [`Anime`](super::Anime) / [`Manga`](super::Manga)
/// so that related titles never expand recursively.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReferenceNode {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub main_picture: Option<Picture>,
}

/// A title related to the parent one (sequel, adaptation, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RelatedMedia {
    pub node: ReferenceNode,
    /// Raw relation label, e.g. `side_story`.
    pub relation_type: Option<String>,
    /// Display relation label, e.g. `Side story`.
    pub relation_type_formatted: Option<String>,
}

/// A title recommended by users alongside the parent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recommendation {
    pub node: ReferenceNode,
    pub num_recommendations: Option<u32>,
}

/// An item together with its position in a ranking list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking<T> {
    pub item: T,
    pub rank: u32,
}
