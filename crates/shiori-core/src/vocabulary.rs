//! Closed sets of symbolic values exchanged with the API.
//!
//! Every symbol has a fixed wire form (a string or a small integer). The wire
//! forms are part of the API contract and must never be renumbered.

use std::fmt;

use chrono::Datelike;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::CoreError;

/// Wire representation of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wire {
    Str(&'static str),
    Int(u8),
}

impl Wire {
    fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (Self::Str(wire), Value::String(s)) => wire == s,
            (Self::Int(wire), Value::Number(n)) => n.as_u64() == Some(u64::from(wire)),
            _ => false,
        }
    }

    fn matches_str(self, s: &str) -> bool {
        match self {
            Self::Str(wire) => wire == s,
            Self::Int(wire) => s.parse::<u8>() == Ok(wire),
        }
    }
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for Wire {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Int(n) => serializer.serialize_u8(*n),
        }
    }
}

/// A closed vocabulary with strict and permissive conversions from wire values.
pub trait Vocabulary: Sized + Copy + 'static {
    /// Human-readable category name, used in error messages.
    const CATEGORY: &'static str;

    /// Every symbol of the category, in declaration order.
    const ALL: &'static [Self];

    fn wire(self) -> Wire;

    /// Permissive conversion: `None` for anything that is not a known wire value.
    fn try_from_wire(value: &Value) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.wire().matches(value))
    }

    /// Strict conversion: unknown wire values are an [`CoreError::UnknownSymbol`].
    fn strict_from_wire(value: &Value) -> Result<Self, CoreError> {
        Self::try_from_wire(value).ok_or_else(|| CoreError::UnknownSymbol {
            category: Self::CATEGORY,
            value: match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        })
    }

    /// Permissive conversion from the textual wire form (`"2"` matches `Int(2)`).
    fn try_from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.wire().matches_str(s))
    }
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident: $category:literal => $kind:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Vocabulary for $name {
            const CATEGORY: &'static str = $category;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn wire(self) -> Wire {
                match self {
                    $( Self::$variant => Wire::$kind($wire), )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.wire().fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from_str(s).ok_or_else(|| CoreError::UnknownSymbol {
                    category: $category,
                    value: s.to_string(),
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.wire().serialize(serializer)
            }
        }
    };
}

// ── HTTP ────────────────────────────────────────────────────────

vocabulary! {
    /// Request method of a route.
    HttpMethod: "http method" => Str {
        Get = "GET",
        Post = "POST",
        Put = "PUT",
        Patch = "PATCH",
        Delete = "DELETE",
    }
}

// ── Shared ──────────────────────────────────────────────────────

vocabulary! {
    /// Content maturity level of an anime or manga.
    NsfwLevel: "nsfw level" => Str {
        /// Not safe for work.
        Black = "black",
        /// May be not safe for work.
        Gray = "gray",
        /// Safe for work.
        White = "white",
    }
}

vocabulary! {
    /// Priority of an entry in a user's list.
    ListPriority: "list priority" => Int {
        Low = 0,
        Medium = 1,
        High = 2,
    }
}

// ── Anime ───────────────────────────────────────────────────────

vocabulary! {
    /// Airing status of an anime.
    AnimeStatus: "anime status" => Str {
        Airing = "currently_airing",
        Finished = "finished_airing",
        NotAired = "not_yet_aired",
    }
}

vocabulary! {
    AnimeType: "anime type" => Str {
        Unknown = "unknown",
        Tv = "tv",
        Ova = "ova",
        Movie = "movie",
        Special = "special",
        Ona = "ona",
        Music = "music",
    }
}

vocabulary! {
    /// Anime season (quarter of the year).
    AnimeSeason: "anime season" => Str {
        /// January, February, March.
        Winter = "winter",
        /// April, May, June.
        Spring = "spring",
        /// July, August, September.
        Summer = "summer",
        /// October, November, December.
        Fall = "fall",
    }
}

impl AnimeSeason {
    /// The season a calendar month (1-12) falls in.
    pub fn from_month(month: u32) -> Self {
        match month {
            1..=3 => Self::Winter,
            4..=6 => Self::Spring,
            7..=9 => Self::Summer,
            _ => Self::Fall,
        }
    }

    /// Determine the current anime season from the current month.
    pub fn current() -> Self {
        Self::from_month(chrono::Utc::now().month())
    }
}

vocabulary! {
    AnimeRankingType: "anime ranking type" => Str {
        All = "all",
        Airing = "airing",
        Upcoming = "upcoming",
        Tv = "tv",
        Ova = "ova",
        Movie = "movie",
        Special = "special",
        ByPopularity = "bypopularity",
        Favorite = "favorite",
    }
}

vocabulary! {
    /// Sort order for seasonal anime. Both sort descending.
    AnimeSortType: "anime sort type" => Str {
        AnimeScore = "anime_score",
        NumberOfUsers = "anime_num_list_users",
    }
}

vocabulary! {
    /// Status of an anime in a user's list.
    AnimeWatchStatus: "anime watch status" => Str {
        Watching = "watching",
        Completed = "completed",
        OnHold = "on_hold",
        Dropped = "dropped",
        PlanToWatch = "plan_to_watch",
    }
}

vocabulary! {
    AnimeListSortType: "anime list sort type" => Str {
        /// Score, descending.
        ListScore = "list_score",
        /// Last update, descending.
        ListUpdatedAt = "list_updated_at",
        /// Title, ascending.
        AnimeTitle = "anime_title",
        /// Start date, descending.
        AnimeStartDate = "anime_start_date",
    }
}

vocabulary! {
    AnimeRewatchValue: "anime rewatch value" => Int {
        Empty = 0,
        VeryLow = 1,
        Low = 2,
        Medium = 3,
        High = 4,
        VeryHigh = 5,
    }
}

// ── Manga ───────────────────────────────────────────────────────

vocabulary! {
    /// Publishing status of a manga.
    MangaStatus: "manga status" => Str {
        Finished = "finished",
        Publishing = "currently_publishing",
        NotPublished = "not_yet_published",
        OnHiatus = "on_hiatus",
        Discontinued = "discontinued",
    }
}

vocabulary! {
    MangaType: "manga type" => Str {
        Unknown = "unknown",
        Manga = "manga",
        Novel = "novel",
        LightNovel = "light_novel",
        OneShot = "one_shot",
        Doujinshi = "doujinshi",
        Manhwa = "manhwa",
        Manhua = "manhua",
        Oel = "oel",
    }
}

vocabulary! {
    MangaRankingType: "manga ranking type" => Str {
        /// Every series, including novels and manhwa.
        All = "all",
        Manga = "manga",
        Novels = "novels",
        Oneshots = "oneshots",
        Doujin = "doujin",
        Manhwa = "manhwa",
        Manhua = "manhua",
        ByPopularity = "bypopularity",
        Favorite = "favorite",
    }
}

vocabulary! {
    /// Status of a manga in a user's list.
    MangaReadStatus: "manga read status" => Str {
        Reading = "reading",
        Completed = "completed",
        OnHold = "on_hold",
        Dropped = "dropped",
        PlanToRead = "plan_to_read",
    }
}

vocabulary! {
    MangaListSortType: "manga list sort type" => Str {
        ListScore = "list_score",
        ListUpdatedAt = "list_updated_at",
        MangaTitle = "manga_title",
        MangaStartDate = "manga_start_date",
    }
}

vocabulary! {
    MangaRereadValue: "manga reread value" => Int {
        Empty = 0,
        VeryLow = 1,
        Low = 2,
        Medium = 3,
        High = 4,
        VeryHigh = 5,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_try_from_wire_string() {
        assert_eq!(
            AnimeStatus::try_from_wire(&json!("finished_airing")),
            Some(AnimeStatus::Finished)
        );
        assert_eq!(AnimeStatus::try_from_wire(&json!("cancelled")), None);
        assert_eq!(AnimeStatus::try_from_wire(&Value::Null), None);
        // Wire values are case sensitive.
        assert_eq!(AnimeSeason::try_from_wire(&json!("Winter")), None);
    }

    #[test]
    fn test_try_from_wire_int() {
        assert_eq!(
            ListPriority::try_from_wire(&json!(2)),
            Some(ListPriority::High)
        );
        assert_eq!(ListPriority::try_from_wire(&json!(7)), None);
        assert_eq!(ListPriority::try_from_wire(&json!("2")), None);
        assert_eq!(
            AnimeRewatchValue::try_from_str("5"),
            Some(AnimeRewatchValue::VeryHigh)
        );
    }

    #[test]
    fn test_strict_from_wire_rejects_unknown() {
        let err = MangaReadStatus::strict_from_wire(&json!("rereading")).unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownSymbol {
                category: "manga read status",
                value: "rereading".into(),
            }
        );

        let err = MangaRereadValue::strict_from_wire(&json!(9)).unwrap_err();
        assert!(matches!(err, CoreError::UnknownSymbol { value, .. } if value == "9"));
    }

    /// Every category degrades to `None` on the same junk input and fails strictly.
    #[test]
    fn test_unknown_value_across_categories() {
        fn check<V: Vocabulary + fmt::Debug>() {
            let junk = json!("definitely-not-a-symbol");
            assert!(V::try_from_wire(&junk).is_none(), "{}", V::CATEGORY);
            assert!(V::strict_from_wire(&junk).is_err(), "{}", V::CATEGORY);
        }

        check::<HttpMethod>();
        check::<NsfwLevel>();
        check::<ListPriority>();
        check::<AnimeStatus>();
        check::<AnimeType>();
        check::<AnimeSeason>();
        check::<AnimeRankingType>();
        check::<AnimeSortType>();
        check::<AnimeWatchStatus>();
        check::<AnimeListSortType>();
        check::<AnimeRewatchValue>();
        check::<MangaStatus>();
        check::<MangaType>();
        check::<MangaRankingType>();
        check::<MangaReadStatus>();
        check::<MangaListSortType>();
        check::<MangaRereadValue>();
    }

    #[test]
    fn test_every_symbol_roundtrips_through_its_wire_form() {
        for status in AnimeWatchStatus::ALL {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(AnimeWatchStatus::strict_from_wire(&wire).unwrap(), *status);
        }
        for value in MangaRereadValue::ALL {
            let parsed: MangaRereadValue = value.to_string().parse().unwrap();
            assert_eq!(parsed, *value);
        }
    }

    #[test]
    fn test_wire_forms_are_stable() {
        assert_eq!(ListPriority::Medium.wire(), Wire::Int(1));
        assert_eq!(AnimeRewatchValue::Empty.wire(), Wire::Int(0));
        assert_eq!(AnimeSortType::NumberOfUsers.to_string(), "anime_num_list_users");
        assert_eq!(MangaType::LightNovel.to_string(), "light_novel");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(serde_json::to_value(ListPriority::High).unwrap(), json!(2));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("fall".parse::<AnimeSeason>().unwrap(), AnimeSeason::Fall);
        assert!("autumn".parse::<AnimeSeason>().is_err());
    }

    #[test]
    fn test_season_from_month() {
        assert_eq!(AnimeSeason::from_month(1), AnimeSeason::Winter);
        assert_eq!(AnimeSeason::from_month(4), AnimeSeason::Spring);
        assert_eq!(AnimeSeason::from_month(9), AnimeSeason::Summer);
        assert_eq!(AnimeSeason::from_month(12), AnimeSeason::Fall);
    }
}
