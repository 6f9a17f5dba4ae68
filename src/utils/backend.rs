use staffee_client::ClientError;
use staffee_core::AppError;

use crate::metrics::track_backend_error;

/// Maps a failed backend call onto the response error, counting the ones
/// that surface as a bad gateway.
pub fn upstream(error: ClientError) -> AppError {
    let status = error.status();
    if status.is_none_or(|s| !s.is_client_error()) {
        track_backend_error(status.map(|s| s.as_u16()));
    }
    error.into_app_error()
}
