use bytes::Bytes;
use tracing::debug;

use crate::domain::errors::ImageLoadError;
use crate::domain::ports::HttpResponse;

/// Validates poster image responses.
pub struct RemoteMovieImageDataMapper;

impl RemoteMovieImageDataMapper {
    /// Returns the body of a 200 response with a non-empty payload.
    ///
    /// # Errors
    /// Returns `InvalidData` for any other status or an empty body.
    pub fn map(response: HttpResponse) -> Result<Bytes, ImageLoadError> {
        if !response.is_ok() || response.body.is_empty() {
            debug!(
                status = response.status,
                bytes = response.body.len(),
                "Rejected image response"
            );
            return Err(ImageLoadError::InvalidData);
        }

        Ok(response.body)
    }
}
