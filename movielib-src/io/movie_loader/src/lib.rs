//! Loads movies from delimited text files.
//!
//! The first line of a file is a header naming the columns; the columns
//! holding the title, rating, premiere date and genre are looked up by name
//! (see [`LoaderConfig`]). Rows that cannot be turned into a movie are
//! skipped with a warning.
//!
//! ```
//! use std::path::Path;
//!
//! use movie_loader::{LoaderConfig, MovieLoader};
//!
//! let src = "\
//! Title,Genre,Premiere,Runtime,IMDB Score,Language
//! Enter the Anime,Documentary,\"August 5, 2019\",58,2.5,English/Japanese
//! ";
//! let loader = MovieLoader::new(LoaderConfig::default());
//! let movies = loader.load_reader(src.as_bytes(), Path::new("inline")).unwrap();
//! assert_eq!(movies.len(), 1);
//! assert_eq!(movies[0].title(), "Enter the Anime");
//! assert_eq!(movies[0].year(), 2019);
//! assert_eq!(movies[0].rating(), 2.5);
//! ```

use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader},
    path::Path,
};

use movie::Movie;

mod config;
mod error;
mod split;

pub use config::LoaderConfig;
pub use error::{Error, Result};
pub use split::split_record;

pub trait MovieSource {
    fn load_file(&self, path: &Path) -> Result<Vec<Movie>>;
    fn load_files_in_directory(&self, path: &Path) -> Result<Vec<Movie>>;
}

pub struct MovieLoader {
    config: LoaderConfig,
}

struct Columns {
    title: usize,
    rating: usize,
    year: usize,
    genre: usize,
}

impl MovieLoader {
    pub fn new(config: LoaderConfig) -> Self { Self { config } }
    pub fn config(&self) -> &LoaderConfig { &self.config }

    /// `origin` names the source in errors and log messages.
    pub fn load_reader<R: BufRead>(
        &self,
        reader: R,
        origin: &Path,
    ) -> Result<Vec<Movie>> {
        let io_err =
            |source: io::Error| Error::Io { path: origin.to_owned(), source };
        let delimiter = self.config.delimiter;

        let mut lines = reader.split(b'\n').zip(1..);
        let header = match lines.next() {
            Some((line, lineno)) => decode_line(line.map_err(io_err)?, origin, lineno),
            None => return Err(Error::EmptySource { path: origin.to_owned() }),
        };
        let header = split_record(header.trim_start_matches('\u{feff}'), delimiter);
        let columns = self.columns(&header, origin)?;

        let mut movies = vec![];
        let mut skipped = 0;
        for (line, lineno) in lines {
            let line = decode_line(line.map_err(io_err)?, origin, lineno);
            if line.trim().is_empty() {
                continue;
            }
            if let Some(movie) = parse_row(&split_record(&line, delimiter), &columns)
            {
                movies.push(movie);
            } else {
                log::warn!("{}:{lineno}: skipped a malformed row", origin.display());
                skipped += 1;
            }
        }
        log::debug!(
            "{}: loaded {} movies, skipped {skipped} rows",
            origin.display(),
            movies.len()
        );
        Ok(movies)
    }

    fn columns(&self, header: &[String], origin: &Path) -> Result<Columns> {
        let find = |name: &str| {
            header.iter().position(|col| col.trim() == name).ok_or_else(|| {
                Error::MissingColumn {
                    path: origin.to_owned(),
                    column: name.to_owned(),
                }
            })
        };
        Ok(Columns {
            title: find(self.config.title_column.as_str())?,
            rating: find(self.config.rating_column.as_str())?,
            year: find(self.config.year_column.as_str())?,
            genre: find(self.config.genre_column.as_str())?,
        })
    }
}

impl MovieSource for MovieLoader {
    fn load_file(&self, path: &Path) -> Result<Vec<Movie>> {
        if !path.is_file() {
            return Err(Error::SourceNotFound { path: path.to_owned() });
        }
        let file = File::open(path)
            .map_err(|source| Error::Io { path: path.to_owned(), source })?;
        self.load_reader(BufReader::new(file), path)
    }

    /// Loads every file with the configured extension, in path order.
    fn load_files_in_directory(&self, path: &Path) -> Result<Vec<Movie>> {
        if !path.is_dir() {
            return Err(Error::SourceNotFound { path: path.to_owned() });
        }
        let io_err =
            |source: io::Error| Error::Io { path: path.to_owned(), source };

        let mut files = vec![];
        for entry in fs::read_dir(path).map_err(io_err)? {
            let file = entry.map_err(io_err)?.path();
            let ext = self.config.extension.as_str();
            if file.is_file() && file.extension().is_some_and(|e| e == ext) {
                files.push(file);
            }
        }
        files.sort_unstable();

        let mut movies = vec![];
        for file in &files {
            movies.extend(self.load_file(file)?);
        }
        log::info!(
            "{}: loaded {} movies from {} files",
            path.display(),
            movies.len(),
            files.len()
        );
        Ok(movies)
    }
}

fn parse_row(fields: &[String], columns: &Columns) -> Option<Movie> {
    let field = |i: usize| fields.get(i).map(|f| f.trim());
    let title = field(columns.title).filter(|title| !title.is_empty())?;
    let genre = field(columns.genre)?;
    let year = parse_year(field(columns.year)?)?;
    let rating = field(columns.rating)?
        .parse::<f64>()
        .ok()
        .filter(|rating| rating.is_finite())?;
    Some(Movie::new(title, rating, year, genre))
}

/// Strips the line terminator left by `split`. Bytes that are not UTF-8
/// (Latin-1 exports, typically) become U+FFFD.
fn decode_line(mut raw: Vec<u8>, origin: &Path, lineno: usize) -> String {
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }
    match String::from_utf8(raw) {
        Ok(line) => line,
        Err(e) => {
            log::warn!("{}:{lineno}: replaced bytes that are not UTF-8", origin.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// The four trailing digits of a premiere date: `"August 5, 2019"` is 2019.
fn parse_year(premiere: &str) -> Option<i32> {
    let start = premiere.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let digits = &premiere[start..];
    if digits.len() == 4 { digits.parse().ok() } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    const NETFLIX: &str = "\
Title,Genre,Premiere,Runtime,IMDB Score,Language
Enter the Anime,Documentary,\"August 5, 2019\",58,2.5,English/Japanese
\"Dark Forces\",Thriller,\"August 21, 2020\",81,2.6,Spanish
\"The Open House\",Horror,\"January 19, 2018\",94,3.2,English
\"Kung Fu Panda, Legends\",Animation,\"March 9, 2020\",60,6.1,English
";

    fn loader() -> MovieLoader { MovieLoader::new(LoaderConfig::default()) }

    fn load(src: &str) -> Result<Vec<Movie>> {
        loader().load_reader(src.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn header_columns() {
        let movies = load(NETFLIX).unwrap();
        let titles: Vec<_> = movies.iter().map(|m| m.title()).collect();
        assert_eq!(
            titles,
            ["Enter the Anime", "Dark Forces", "The Open House", "Kung Fu Panda, Legends"]
        );
        assert_eq!(movies[1].genre(), "Thriller");
        assert_eq!(movies[1].year(), 2020);
        assert_eq!(movies[1].rating(), 2.6);
        assert_eq!(movies[3].year(), 2020);
        assert_eq!(movies[3].rating(), 6.1);
    }

    #[test]
    fn column_order_follows_header() {
        let src = "\
IMDB Score;Premiere;Genre;Title
7.5;2016;Drama;Spotlight
";
        let loader = MovieLoader::new(LoaderConfig::default().with_delimiter(';'));
        let movies = loader.load_reader(src.as_bytes(), Path::new("x")).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title(), "Spotlight");
        assert_eq!(movies[0].year(), 2016);
        assert_eq!(movies[0].genre(), "Drama");
    }

    #[test]
    fn custom_columns() {
        let src = "name,score,released,kind\nHeat,8.3,1995,Crime\n";
        let config =
            LoaderConfig::default().with_columns("name", "score", "released", "kind");
        let movies = MovieLoader::new(config)
            .load_reader(src.as_bytes(), Path::new("x"))
            .unwrap();
        assert_eq!(movies, [Movie::new("Heat", 8.3, 1995, "Crime")]);
    }

    #[test]
    fn malformed_rows() {
        let src = "\
Title,Genre,Premiere,IMDB Score
Good,Drama,2001,7.0
,Drama,2001,7.0
No Year,Drama,someday,7.0
No Rating,Drama,2001,n/a
Short,Drama

Also Good,Comedy,2002,6.0
";
        let movies = load(src).unwrap();
        let titles: Vec<_> = movies.iter().map(|m| m.title()).collect();
        assert_eq!(titles, ["Good", "Also Good"]);
    }

    #[test]
    fn header_errors() {
        assert!(matches!(load(""), Err(Error::EmptySource { .. })));
        assert!(matches!(
            load("Title,Genre,Premiere\nx,y,2000\n"),
            Err(Error::MissingColumn { column, .. }) if column == "IMDB Score"
        ));
        assert!(load("Title,Genre,Premiere,IMDB Score\n").unwrap().is_empty());
        // byte order mark before the first column name
        assert!(load("\u{feff}Title,Genre,Premiere,IMDB Score\n").unwrap().is_empty());
    }

    #[test]
    fn latin1_row() {
        let src = b"\
Title,Genre,Premiere,IMDB Score\r
Good,Drama,2001,7.0\r
Caf\xe9,Drama,2002,6.0
Also Good,Comedy,2002,6.0
";
        let movies = loader().load_reader(&src[..], Path::new("x.csv")).unwrap();
        let titles: Vec<_> = movies.iter().map(|m| m.title()).collect();
        assert_eq!(titles, ["Good", "Caf\u{fffd}", "Also Good"]);
        assert_eq!(movies[0].rating(), 7.0);

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.csv"), src).unwrap();
        assert_eq!(loader().load_files_in_directory(dir.path()).unwrap().len(), 3);
    }

    #[test]
    fn short_dates() {
        let src = "\
Title,Genre,Premiere,IMDB Score
Iso,Drama,2019-08-05,7.0
Short,Drama,5/8/19,7.0
Long,Drama,\"August 5, 2019\",7.0
";
        let movies = load(src).unwrap();
        assert_eq!(movies, [Movie::new("Long", 7.0, 2019, "Drama")]);
    }

    #[test]
    fn year() {
        assert_eq!(parse_year("August 5, 2019"), Some(2019));
        assert_eq!(parse_year("2019"), Some(2019));
        assert_eq!(parse_year("5/8/19"), None);
        assert_eq!(parse_year("2019-08-05"), None);
        assert_eq!(parse_year("Premiered 12019"), None);
        assert_eq!(parse_year("TBA"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netflix.csv");
        fs::write(&path, NETFLIX).unwrap();

        assert_eq!(loader().load_file(&path).unwrap().len(), 4);

        let missing = dir.path().join("missing.csv");
        assert!(matches!(
            loader().load_file(&missing),
            Err(Error::SourceNotFound { path }) if path == missing
        ));
        assert!(matches!(
            loader().load_file(dir.path()),
            Err(Error::SourceNotFound { .. })
        ));
    }

    #[test]
    fn directory() {
        let dir = tempfile::tempdir().unwrap();
        let header = "Title,Genre,Premiere,IMDB Score\n";
        fs::write(dir.path().join("b.csv"), format!("{header}B,Drama,2001,7.0\n"))
            .unwrap();
        fs::write(dir.path().join("a.csv"), format!("{header}A,Drama,2000,6.0\n"))
            .unwrap();
        fs::write(dir.path().join("notes.txt"), "not a table").unwrap();
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let movies = loader().load_files_in_directory(dir.path()).unwrap();
        let titles: Vec<_> = movies.iter().map(|m| m.title()).collect();
        assert_eq!(titles, ["A", "B"]);

        let tsv = MovieLoader::new(LoaderConfig::default().with_extension("txt"));
        assert!(matches!(
            tsv.load_files_in_directory(dir.path()),
            Err(Error::MissingColumn { .. })
        ));

        let missing: PathBuf = dir.path().join("missing");
        assert!(matches!(
            loader().load_files_in_directory(&missing),
            Err(Error::SourceNotFound { .. })
        ));
        let file = dir.path().join("a.csv");
        assert!(matches!(
            loader().load_files_in_directory(&file),
            Err(Error::SourceNotFound { .. })
        ));
    }

    #[test]
    fn empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(loader().load_files_in_directory(dir.path()).unwrap().is_empty());
    }
}
