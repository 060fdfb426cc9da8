//! Ranks the movies of a CSV file, or of a directory of CSV files, best
//! rated first.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use movie::Movie;
use movie_loader::{LoaderConfig, MovieLoader, MovieSource};
use rb_tree::{debug::visualize, RbTree};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "movie_search")]
#[command(about = "Ranks movies loaded from CSV files, best rated first")]
struct Cli {
    /// A CSV file, or a directory holding CSV files
    path: PathBuf,

    /// Print at most this many movies
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Only movies whose genre contains this text (case-insensitive)
    #[arg(short, long)]
    genre: Option<String>,

    /// Only movies released in this year
    #[arg(short, long)]
    year: Option<i32>,

    /// Only movies rated at least this much
    #[arg(long)]
    min_rating: Option<f64>,

    /// Field delimiter of the input files
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Draw the tree instead of listing the movies
    #[arg(long)]
    tree: bool,

    /// Log more; repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn accepts(&self, movie: &Movie) -> bool {
        let genre = self.genre.as_ref().map_or(true, |genre| {
            movie.genre().to_lowercase().contains(&genre.to_lowercase())
        });
        let year = self.year.map_or(true, |year| movie.year() == year);
        let rating =
            self.min_rating.map_or(true, |rating| movie.rating() >= rating);
        genre && year && rating
    }
}

fn initialize_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

/// Duplicates (same rating and title) keep the first movie seen.
fn index(movies: Vec<Movie>) -> Result<RbTree<Movie>> {
    let mut tree = RbTree::new();
    for movie in movies {
        let title = movie.title().to_owned();
        match tree.insert(movie) {
            Ok(()) => {}
            Err(rb_tree::Error::DuplicateValue) => {
                log::info!("skipped a duplicate of {title:?}")
            }
            Err(e) => return Err(e).context("the movie index is broken"),
        }
    }
    log::info!("indexed {} movies, tree height {}", tree.len(), tree.height());
    Ok(tree)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.verbose)?;

    let loader =
        MovieLoader::new(LoaderConfig::default().with_delimiter(cli.delimiter));
    let movies = if cli.path.is_dir() {
        loader.load_files_in_directory(&cli.path)
    } else {
        loader.load_file(&cli.path)
    }
    .with_context(|| format!("cannot load movies from {}", cli.path.display()))?;

    let tree = index(movies)?;
    if cli.tree {
        print!("{}", visualize(&tree));
        return Ok(());
    }

    let top = cli.top.unwrap_or(usize::MAX);
    for movie in tree.iter().filter(|movie| cli.accepts(movie)).take(top) {
        println!("{movie}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli() {
        Cli::command().debug_assert();

        let cli = Cli::parse_from(["movie_search", "data", "-n", "3", "-vv"]);
        assert_eq!(cli.path, PathBuf::from("data"));
        assert_eq!(cli.top, Some(3));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.delimiter, ',');
        assert!(!cli.tree);
    }

    #[test]
    fn filters() {
        let movie = Movie::new("Heat", 8.3, 1995, "Crime/Thriller");
        let parse = |args: &[&str]| {
            Cli::parse_from(["movie_search", "data"].iter().chain(args))
        };

        assert!(parse(&[]).accepts(&movie));
        assert!(parse(&["--genre", "thriller"]).accepts(&movie));
        assert!(!parse(&["--genre", "comedy"]).accepts(&movie));
        assert!(parse(&["--year", "1995"]).accepts(&movie));
        assert!(!parse(&["--year", "1996"]).accepts(&movie));
        assert!(parse(&["--min-rating", "8.3"]).accepts(&movie));
        assert!(!parse(&["--min-rating", "8.4", "-g", "crime"]).accepts(&movie));
    }

    #[test]
    fn ranking() {
        let movies = vec![
            Movie::new("Warner Bros Movie", 6.6, 2021, "Thriller/Science Fiction"),
            Movie::new("Marvel Studio's Movie", 8.7, 2019, "Action/Science Fiction"),
            Movie::new("Fox Studio's Movie", 5.3, 2019, "Family/Comedy"),
            Movie::new("Marvel Studio's Movie", 8.7, 2020, "Action"),
        ];
        let tree = index(movies).unwrap();
        assert_eq!(tree.len(), 3);
        let ranked: Vec<_> = tree.iter().map(|movie| movie.rating()).collect();
        assert_eq!(ranked, [8.7, 6.6, 5.3]);
        assert_eq!(tree.iter().next().map(|movie| movie.year()), Some(2019));
    }
}
