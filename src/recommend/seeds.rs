use std::fmt;

use crate::types::SeedSelection;

/// Maximum number of seeds of one category the catalog accepts.
pub const SEED_LIMIT: usize = 5;

/// Genre used when a request carries no seeds at all.
pub const DEFAULT_GENRE: &str = "pop";

/// Prefix marking an artist seed that is a display name rather than an id.
pub const NAME_SEED_PREFIX: &str = "name:";

/// An artist hint for the recommendation engine.
///
/// Artists without a resolvable catalog id (for instance the made-up artists
/// produced by the theme generators) are carried by name and searched for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArtistSeed {
    Id(String),
    Name(String),
}

impl ArtistSeed {
    /// Parses the raw seed form: `name:<display name>` or a bare catalog id.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(NAME_SEED_PREFIX) {
            Some(name) => ArtistSeed::Name(name.trim().to_string()),
            None => ArtistSeed::Id(raw.trim().to_string()),
        }
    }

    pub fn is_name(&self) -> bool {
        matches!(self, ArtistSeed::Name(_))
    }
}

impl From<&str> for ArtistSeed {
    fn from(raw: &str) -> Self {
        ArtistSeed::parse(raw)
    }
}

impl From<String> for ArtistSeed {
    fn from(raw: String) -> Self {
        ArtistSeed::parse(&raw)
    }
}

/// Renders the raw seed form, i.e. the inverse of [`ArtistSeed::parse`].
impl fmt::Display for ArtistSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtistSeed::Id(id) => write!(f, "{}", id),
            ArtistSeed::Name(name) => write!(f, "{}{}", NAME_SEED_PREFIX, name),
        }
    }
}

/// Seeds of every category supplied with a recommendation request.
///
/// The primary recommendation call uses a single category (see
/// [`SeedSet::primary_selection`]) while the search fallback uses every
/// non-empty category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedSet {
    pub tracks: Vec<String>,
    pub genres: Vec<String>,
    pub artists: Vec<ArtistSeed>,
}

impl SeedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tracks<I, S>(mut self, tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tracks.extend(tracks.into_iter().map(Into::into));
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(genres.into_iter().map(Into::into));
        self
    }

    pub fn with_artists<I, S>(mut self, artists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ArtistSeed>,
    {
        self.artists.extend(artists.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.genres.is_empty() && self.artists.is_empty()
    }

    /// Picks the seed category for the primary recommendation call.
    ///
    /// Precedence is tracks, then genres, then artists; the chosen list is cut
    /// to [`SEED_LIMIT`] entries. Without any seed the genre [`DEFAULT_GENRE`]
    /// is used.
    pub fn primary_selection(&self) -> SeedSelection {
        if !self.tracks.is_empty() {
            SeedSelection::Tracks(self.tracks.iter().take(SEED_LIMIT).cloned().collect())
        } else if !self.genres.is_empty() {
            SeedSelection::Genres(self.genres.iter().take(SEED_LIMIT).cloned().collect())
        } else if !self.artists.is_empty() {
            SeedSelection::Artists(
                self.artists
                    .iter()
                    .take(SEED_LIMIT)
                    .map(ToString::to_string)
                    .collect(),
            )
        } else {
            SeedSelection::Genres(vec![DEFAULT_GENRE.to_string()])
        }
    }
}
