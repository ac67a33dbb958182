use serde::Deserialize;

/// Envelope of the now-playing endpoint.
#[derive(Debug, Deserialize)]
pub struct NowPlayingResponse {
    /// Catalog entries; may contain incomplete items.
    pub results: Vec<RemoteMovie>,
}

/// Catalog entry as sent over the wire. Every field is optional here.
#[derive(Debug, Deserialize)]
pub struct RemoteMovie {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
}
