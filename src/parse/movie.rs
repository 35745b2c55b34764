//! Parsing of an upstream movie overview page.
//!
//! Fields are extracted twice: first from the page markup via CSS
//! selectors, then from the JSON-LD `Movie` block, which is the more
//! reliable source and overrides the markup-derived values when present.

use crate::error::{MovietimeError, Result};
use crate::models::MovieDetails;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).expect("valid selector"));
    };
}

selector!(
    TITLE_SEL,
    "h1.subnav__title, .movie-details__title, .hero-text__title, .mop-detail-header__title"
);
selector!(
    RATING_SEL,
    ".movie-details__rating, .mop-detail-header__badge, .hero-text__rating, .mop-ratings-row__badge"
);
selector!(
    RUNTIME_SEL,
    ".movie-details__runtime, .mop-detail-header__meta, .hero-text__runtime"
);
selector!(
    SYNOPSIS_SEL,
    ".movie-details__synopsis, .mop-detail-header__synopsis, #movie-detail-synopsis, .js-mop-synopsis"
);
selector!(
    CAST_SEL,
    ".movie-details__cast a, .mop-detail-header__cast a, .movie-cast__actor-name"
);
selector!(DIRECTOR_SEL, ".movie-details__director, .movie-cast__director");
selector!(GENRE_SEL, ".movie-details__genre a, .mop-detail-header__genre a");
selector!(
    POSTER_SEL,
    ".movie-details__poster img, .hero-image img, .mop-detail-header__poster img"
);
selector!(LD_SEL, r#"script[type="application/ld+json"]"#);

/// Parse a movie overview page into a details record.
///
/// The structural anchor is the movie title block: either one of the
/// title selectors or a JSON-LD `Movie` object must be present, otherwise
/// the page is not a movie page and the extraction fails with
/// `ParseFailure`. Optional fields (cast, poster, director, ...) are
/// omitted when absent.
pub fn parse_movie_details(html: &str, url: &str) -> Result<MovieDetails> {
    let document = Html::parse_document(html);

    let mut details = MovieDetails {
        url: url.to_string(),
        title: String::new(),
        synopsis: select_text(&document, &SYNOPSIS_SEL),
        rating: select_text(&document, &RATING_SEL),
        runtime: select_text(&document, &RUNTIME_SEL),
        genres: select_all_text(&document, &GENRE_SEL),
        release_date: None,
        director: select_text(&document, &DIRECTOR_SEL),
        cast: select_all_text(&document, &CAST_SEL),
        poster: document
            .select(&POSTER_SEL)
            .next()
            .and_then(|img| img.value().attr("src").or_else(|| img.value().attr("data-src")))
            .map(str::to_string),
    };

    let mut anchored = false;
    if let Some(title) = select_text(&document, &TITLE_SEL) {
        details.title = title;
        anchored = true;
    }

    if apply_json_ld(&document, &mut details) {
        anchored = true;
    }

    if !anchored || details.title.is_empty() {
        return Err(MovietimeError::ParseFailure(
            "movie title block missing from page".into(),
        ));
    }

    Ok(details)
}

/// Find the JSON-LD `Movie` object and fold its fields over the
/// markup-derived ones. Returns whether such an object was found.
fn apply_json_ld(document: &Html, details: &mut MovieDetails) -> bool {
    for script in document.select(&LD_SEL) {
        let raw = script.text().collect::<String>();
        let Ok(ld) = serde_json::from_str::<Value>(&raw) else {
            continue;
        };
        if ld.get("@type").and_then(Value::as_str) != Some("Movie") {
            continue;
        }

        if let Some(name) = ld.get("name").and_then(Value::as_str) {
            details.title = name.to_string();
        }
        if let Some(description) = ld.get("description").and_then(Value::as_str) {
            details.synopsis = Some(description.to_string());
        }
        if let Some(duration) = ld.get("duration").and_then(Value::as_str) {
            details.runtime = Some(duration.to_string());
        }
        if let Some(rating) = ld.get("contentRating").and_then(Value::as_str) {
            details.rating = Some(rating.to_string());
        }
        match ld.get("genre") {
            Some(Value::String(genre)) => details.genres = vec![genre.clone()],
            Some(Value::Array(genres)) => {
                details.genres = genres
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect();
            }
            _ => {}
        }
        if let Some(image) = ld.get("image") {
            match image {
                Value::String(src) => details.poster = Some(src.clone()),
                Value::Object(obj) => {
                    if let Some(src) = obj.get("url").and_then(Value::as_str) {
                        details.poster = Some(src.to_string());
                    }
                }
                _ => {}
            }
        }
        if let Some(published) = ld.get("datePublished").and_then(Value::as_str) {
            details.release_date = Some(published.to_string());
        }
        match ld.get("director") {
            Some(Value::Object(d)) => {
                if let Some(name) = d.get("name").and_then(Value::as_str) {
                    details.director = Some(name.to_string());
                }
            }
            Some(Value::Array(directors)) => {
                let names: Vec<&str> = directors
                    .iter()
                    .filter_map(|d| d.get("name").and_then(Value::as_str))
                    .collect();
                if !names.is_empty() {
                    details.director = Some(names.join(", "));
                }
            }
            _ => {}
        }
        if let Some(Value::Array(actors)) = ld.get("actor") {
            let cast: Vec<String> = actors
                .iter()
                .filter_map(|a| a.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect();
            if !cast.is_empty() {
                details.cast = cast;
            }
        }

        return true;
    }

    false
}

fn select_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(element_text)
        .filter(|s| !s.is_empty())
}

fn select_all_text(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(element_text)
        .filter(|s| !s.is_empty())
        .collect()
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.fandango.com/thunderbolts-2025-234498/movie-overview";

    #[test]
    fn extracts_fields_from_markup() {
        let html = r#"<html><body>
            <h1 class="subnav__title">Thunderbolts</h1>
            <span class="movie-details__rating">PG-13</span>
            <span class="movie-details__runtime">2 hr 7 min</span>
            <p class="movie-details__synopsis">A team of antiheroes.</p>
            <div class="movie-details__cast">
              <a>Florence Pugh</a><a>Sebastian Stan</a>
            </div>
            <span class="movie-details__director">Jake Schreier</span>
            <div class="movie-details__genre"><a>Action</a><a>Adventure</a></div>
          </body></html>"#;

        let details = parse_movie_details(html, URL).unwrap();
        assert_eq!(details.title, "Thunderbolts");
        assert_eq!(details.rating.as_deref(), Some("PG-13"));
        assert_eq!(details.runtime.as_deref(), Some("2 hr 7 min"));
        assert_eq!(details.synopsis.as_deref(), Some("A team of antiheroes."));
        assert_eq!(details.cast, vec!["Florence Pugh", "Sebastian Stan"]);
        assert_eq!(details.director.as_deref(), Some("Jake Schreier"));
        assert_eq!(details.genres, vec!["Action", "Adventure"]);
        assert_eq!(details.url, URL);
    }

    #[test]
    fn json_ld_overrides_markup_fields() {
        let html = r#"<html><body>
            <h1 class="subnav__title">Thunderbolts (stale)</h1>
            <script type="application/ld+json">
            {
              "@type": "Movie",
              "name": "Thunderbolts*",
              "description": "A team of antiheroes on a dangerous mission.",
              "contentRating": "PG-13",
              "duration": "PT2H7M",
              "genre": ["Action", "Adventure"],
              "datePublished": "2025-05-02",
              "director": {"name": "Jake Schreier"},
              "actor": [
                {"name": "Florence Pugh"},
                {"name": "Sebastian Stan"},
                {"name": "David Harbour"}
              ],
              "image": "https://images.fandango.com/thunderbolts.jpg"
            }
            </script>
          </body></html>"#;

        let details = parse_movie_details(html, URL).unwrap();
        assert_eq!(details.title, "Thunderbolts*");
        assert_eq!(
            details.synopsis.as_deref(),
            Some("A team of antiheroes on a dangerous mission.")
        );
        assert_eq!(details.runtime.as_deref(), Some("PT2H7M"));
        assert_eq!(details.release_date.as_deref(), Some("2025-05-02"));
        assert_eq!(details.director.as_deref(), Some("Jake Schreier"));
        assert_eq!(
            details.cast,
            vec!["Florence Pugh", "Sebastian Stan", "David Harbour"]
        );
        assert_eq!(
            details.poster.as_deref(),
            Some("https://images.fandango.com/thunderbolts.jpg")
        );
    }

    #[test]
    fn json_ld_alone_anchors_the_page() {
        let html = r#"<html><body>
            <script type="application/ld+json">
              {"@type": "Movie", "name": "Thunderbolts*", "genre": "Action"}
            </script>
          </body></html>"#;

        let details = parse_movie_details(html, URL).unwrap();
        assert_eq!(details.title, "Thunderbolts*");
        assert_eq!(details.genres, vec!["Action"]);
    }

    #[test]
    fn non_movie_page_is_a_parse_failure() {
        let html = r#"<html><head><title>Page not found | Fandango</title></head>
            <body><p>We can't find that page.</p></body></html>"#;

        let err = parse_movie_details(html, URL).unwrap_err();
        assert!(matches!(err, MovietimeError::ParseFailure(_)), "got: {err:?}");
    }

    #[test]
    fn non_movie_json_ld_does_not_anchor() {
        let html = r#"<html><body>
            <script type="application/ld+json">
              {"@type": "BreadcrumbList", "name": "not a movie"}
            </script>
          </body></html>"#;

        let err = parse_movie_details(html, URL).unwrap_err();
        assert!(matches!(err, MovietimeError::ParseFailure(_)), "got: {err:?}");
    }
}
