//! A movie and its ranking order.
//!
//! Movies are ordered best first: by rating descending, then by title
//! descending. Two movies are equal exactly when neither ranks before the
//! other, so the year and the genre take no part in comparisons.
//!
//! ```
//! use movie::Movie;
//!
//! let a = Movie::new("Alien", 8.5, 1979, "Horror");
//! let b = Movie::new("Brazil", 7.9, 1985, "Comedy");
//! let c = Movie::new("Casablanca", 8.5, 1942, "Drama");
//!
//! let mut movies = vec![a.clone(), b.clone(), c.clone()];
//! movies.sort();
//! assert_eq!(movies, [c, a, b]);
//! ```

use std::{cmp::Ordering, fmt};

use ordered_float::OrderedFloat;

#[derive(Clone, Debug)]
pub struct Movie {
    title: String,
    rating: OrderedFloat<f64>,
    year: i32,
    genre: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        rating: f64,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            rating: OrderedFloat(rating),
            year,
            genre: genre.into(),
        }
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn rating(&self) -> f64 { self.rating.into_inner() }
    pub fn year(&self) -> i32 { self.year }
    pub fn genre(&self) -> &str { &self.genre }
}

impl Ord for Movie {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rating
            .cmp(&self.rating)
            .then_with(|| other.title.cmp(&self.title))
    }
}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool { self.cmp(other).is_eq() }
}

impl Eq for Movie {}

impl fmt::Display for Movie {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt,
            "{} ({}) [{}] {:.1}",
            self.title,
            self.year,
            self.genre,
            self.rating()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_first() {
        let hi = Movie::new("A", 8.7, 2019, "Action");
        let lo = Movie::new("Z", 6.6, 2021, "Thriller");
        assert!(hi < lo);
        assert_eq!(hi.cmp(&lo), Ordering::Less);
        assert_eq!(lo.cmp(&hi), Ordering::Greater);
    }

    #[test]
    fn title_tie_break() {
        let a = Movie::new("A", 7.0, 2000, "Drama");
        let b = Movie::new("B", 7.0, 2000, "Drama");
        assert!(b < a);
        assert_ne!(a, b);
    }

    #[test]
    fn equality_ignores_year_and_genre() {
        let fst = Movie::new("Heat", 8.3, 1995, "Crime");
        let snd = Movie::new("Heat", 8.3, 1986, "Thriller");
        assert_eq!(fst, snd);
        assert_eq!(fst.cmp(&snd), Ordering::Equal);
    }

    #[test]
    fn accessors() {
        let movie = Movie::new(
            "Marvel Studio's Movie",
            8.7,
            2019,
            "Action/Science Fiction",
        );
        assert_eq!(movie.title(), "Marvel Studio's Movie");
        assert_eq!(movie.rating(), 8.7);
        assert_eq!(movie.year(), 2019);
        assert_eq!(movie.genre(), "Action/Science Fiction");
        assert_eq!(
            movie.to_string(),
            "Marvel Studio's Movie (2019) [Action/Science Fiction] 8.7"
        );
    }
}
