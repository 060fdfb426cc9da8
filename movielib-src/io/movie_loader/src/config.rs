/// Which columns hold the movie fields, and how the files are laid out.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoaderConfig {
    pub title_column: String,
    pub rating_column: String,
    pub year_column: String,
    pub genre_column: String,
    pub delimiter: char,
    /// Directory loading only picks files with this extension.
    pub extension: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            title_column: "Title".to_owned(),
            rating_column: "IMDB Score".to_owned(),
            year_column: "Premiere".to_owned(),
            genre_column: "Genre".to_owned(),
            delimiter: ',',
            extension: "csv".to_owned(),
        }
    }
}

impl LoaderConfig {
    pub fn with_columns(
        self,
        title: impl Into<String>,
        rating: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title_column: title.into(),
            rating_column: rating.into(),
            year_column: year.into(),
            genre_column: genre.into(),
            ..self
        }
    }
    pub fn with_delimiter(self, delimiter: char) -> Self {
        Self { delimiter, ..self }
    }
    pub fn with_extension(self, extension: impl Into<String>) -> Self {
        Self { extension: extension.into(), ..self }
    }
}
