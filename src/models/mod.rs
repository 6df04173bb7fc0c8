use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    pub shorturl: String,
}

#[derive(Debug, Serialize)]
pub struct LongUrlResponse {
    pub longurl: String,
}
