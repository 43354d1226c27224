//! The typed domain model produced by the serializer.

mod anime;
mod common;
mod forum;
mod http;
mod manga;
mod user;

pub use anime::{Anime, AnimeRanking, AnimeStatistics, Broadcast, Season, StatusCounts};
pub use common::{
    AlternativeTitles, NamedRef, Picture, Ranking, Recommendation, ReferenceNode, RelatedMedia,
};
pub use forum::{
    Forum, ForumBoard, ForumPost, ForumSubBoard, ForumTopic, ForumTopicDetails, PostCreator,
};
pub use http::{HttpErrorResponse, HttpSuccessResponse};
pub use manga::{Author, AuthorName, Manga, MangaRanking};
pub use user::{
    AnimeListEntry, AnimeListStatus, AnimeListUpdate, MangaListEntry, MangaListStatus,
    MangaListUpdate,
};
