use std::fmt;

/// The five fields of the movie form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Title,
    Description,
    ImgUrl,
    ImdbUrl,
    ImdbId,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Title,
        FieldName::Description,
        FieldName::ImgUrl,
        FieldName::ImdbUrl,
        FieldName::ImdbId,
    ];

    /// Key used for the input's `name` and in the emitted record.
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::ImgUrl => "imgUrl",
            Self::ImdbUrl => "imdbUrl",
            Self::ImdbId => "imdbId",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::ImgUrl => "Image URL",
            Self::ImdbUrl => "IMDB URL",
            Self::ImdbId => "IMDB ID",
        }
    }

    pub fn test_id(self) -> &'static str {
        match self {
            Self::Title => "movie-title",
            Self::Description => "movie-description",
            Self::ImgUrl => "movie-imgUrl",
            Self::ImdbUrl => "movie-imdbUrl",
            Self::ImdbId => "movie-imdbId",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_test_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.test_id() == id)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
