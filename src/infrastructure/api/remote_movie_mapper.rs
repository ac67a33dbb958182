//! Maps now-playing responses into domain movies.

use chrono::NaiveDate;
use tracing::{debug, trace};

use super::dto::{NowPlayingResponse, RemoteMovie};
use crate::domain::entities::Movie;
use crate::domain::errors::MovieLoadError;
use crate::domain::ports::HttpResponse;

const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates and decodes catalog responses.
pub struct RemoteMovieMapper;

impl RemoteMovieMapper {
    /// Decodes `response` into movies.
    ///
    /// # Errors
    /// Returns `InvalidData` unless the status is 200 and the body is a
    /// `{"results": [...]}` envelope.
    pub fn map(response: &HttpResponse) -> Result<Vec<Movie>, MovieLoadError> {
        if !response.is_ok() {
            debug!(status = response.status, "Unexpected catalog status");
            return Err(MovieLoadError::InvalidData);
        }

        let envelope: NowPlayingResponse = serde_json::from_slice(&response.body).map_err(|e| {
            debug!(error = %e, "Undecodable catalog body");
            MovieLoadError::InvalidData
        })?;

        let received = envelope.results.len();
        let movies: Vec<Movie> = envelope
            .results
            .into_iter()
            .filter_map(RemoteMovie::into_movie)
            .collect();

        if movies.len() < received {
            debug!(
                dropped = received - movies.len(),
                "Dropped catalog entries without id or with blank title"
            );
        }

        Ok(movies)
    }
}

impl RemoteMovie {
    fn into_movie(self) -> Option<Movie> {
        let title = self.title.filter(|t| !t.trim().is_empty());
        let (Some(id), Some(title)) = (self.id, title) else {
            trace!("Skipping incomplete catalog entry");
            return None;
        };

        let release_date = self
            .release_date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, RELEASE_DATE_FORMAT).ok());

        Some(Movie::new(
            id,
            title,
            self.poster_path,
            self.overview,
            release_date,
            self.vote_average,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn response(status: u16, body: &serde_json::Value) -> HttpResponse {
        HttpResponse::new(status, serde_json::to_vec(body).unwrap())
    }

    #[test_case(199 ; "below_ok")]
    #[test_case(201 ; "created")]
    #[test_case(300 ; "redirect")]
    #[test_case(400 ; "bad_request")]
    #[test_case(500 ; "server_error")]
    fn test_non_200_is_invalid_data(status: u16) {
        let body = json!({ "results": [] });
        assert_eq!(
            RemoteMovieMapper::map(&response(status, &body)),
            Err(MovieLoadError::InvalidData)
        );
    }

    #[test]
    fn test_500_with_empty_body_is_invalid_data() {
        let result = RemoteMovieMapper::map(&HttpResponse::new(500, ""));
        assert_eq!(result, Err(MovieLoadError::InvalidData));
    }

    #[test_case(b"" ; "empty")]
    #[test_case(b"not json" ; "garbage")]
    #[test_case(b"{\"page\":1}" ; "missing_results")]
    #[test_case(b"{\"results\":{}}" ; "results_not_a_list")]
    fn test_undecodable_200_body_is_invalid_data(body: &'static [u8]) {
        let result = RemoteMovieMapper::map(&HttpResponse::new(200, body));
        assert_eq!(result, Err(MovieLoadError::InvalidData));
    }

    #[test]
    fn test_empty_results_maps_to_no_movies() {
        let result = RemoteMovieMapper::map(&response(200, &json!({ "results": [] })));
        assert_eq!(result, Ok(Vec::new()));
    }

    #[test]
    fn test_drops_entries_without_id_or_title() {
        let body = json!({
            "results": [
                { "title": "No id" },
                { "id": 2 },
                { "id": 3, "title": "Complete" }
            ]
        });

        let movies = RemoteMovieMapper::map(&response(200, &body)).unwrap();

        assert_eq!(movies, vec![Movie::new(3, "Complete", None, None, None, None)]);
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace")]
    fn test_drops_entries_with_blank_title(title: &str) {
        let body = json!({
            "results": [
                { "id": 1, "title": title },
                { "id": 2, "title": "Kept" }
            ]
        });

        let movies = RemoteMovieMapper::map(&response(200, &body)).unwrap();

        assert_eq!(movies, vec![Movie::new(2, "Kept", None, None, None, None)]);
    }

    #[test]
    fn test_maps_all_fields() {
        let body = json!({
            "page": 1,
            "results": [{
                "id": 76600,
                "title": "Avatar: The Way of Water",
                "poster_path": "/t6HIqrRAclMCA60NsSmeqe9RmNV.jpg",
                "overview": "Set more than a decade after the events of the first film.",
                "release_date": "2022-12-14",
                "vote_average": 7.7,
                "adult": false
            }]
        });

        let movies = RemoteMovieMapper::map(&response(200, &body)).unwrap();

        assert_eq!(
            movies,
            vec![Movie::new(
                76600,
                "Avatar: The Way of Water",
                Some("/t6HIqrRAclMCA60NsSmeqe9RmNV.jpg".to_string()),
                Some("Set more than a decade after the events of the first film.".to_string()),
                NaiveDate::from_ymd_opt(2022, 12, 14),
                Some(7.7),
            )]
        );
    }

    #[test_case("14-12-2022" ; "day_first")]
    #[test_case("2022/12/14" ; "slashes")]
    #[test_case("" ; "empty")]
    #[test_case("2022-13-40" ; "out_of_range")]
    fn test_unparsable_release_date_maps_to_none(raw: &str) {
        let body = json!({ "results": [{ "id": 1, "title": "Any", "release_date": raw }] });

        let movies = RemoteMovieMapper::map(&response(200, &body)).unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].release_date(), None);
    }

    #[test]
    fn test_null_optional_fields_are_accepted() {
        let body = json!({
            "results": [{
                "id": 1,
                "title": "Sparse",
                "poster_path": null,
                "overview": null,
                "release_date": null,
                "vote_average": null
            }]
        });

        let movies = RemoteMovieMapper::map(&response(200, &body)).unwrap();

        assert_eq!(movies, vec![Movie::new(1, "Sparse", None, None, None, None)]);
    }
}
