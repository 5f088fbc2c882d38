//! Helpers for the web layer that sits in front of [`apply`](crate::apply).
//!
//! The web layer stores each upload on disk, calls `apply`, and relays the
//! returned string. These helpers cover the conventions it relies on.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Public static-asset prefix under which uploads and outputs are served.
pub const PUBLIC_UPLOADS_PREFIX: &str = "/static/uploads/";

/// File type tag reported for meshes.
pub const MESH_FILE_TYPE: &str = "3d";

/// Whether a dispatcher result is a failure message rather than a path.
#[must_use]
pub fn is_error(result: &str) -> bool {
    result.starts_with("Error")
}

/// Rewrite a successful result into a public URL.
///
/// The output's file name is placed under `prefix`. Failure messages are
/// returned unchanged.
///
/// ```
/// use mesh_augment::{PUBLIC_UPLOADS_PREFIX, public_url};
///
/// let url = public_url("/srv/app/uploads/centered_cube.off", PUBLIC_UPLOADS_PREFIX);
/// assert_eq!(url, "/static/uploads/centered_cube.off");
///
/// let err = public_url("Error in centering: mesh has no vertices", PUBLIC_UPLOADS_PREFIX);
/// assert!(err.starts_with("Error"));
/// ```
#[must_use]
pub fn public_url(result: &str, prefix: &str) -> String {
    if is_error(result) {
        return result.to_string();
    }
    let name = Path::new(result)
        .file_name()
        .map_or_else(|| result.into(), |n| n.to_string_lossy());
    if prefix.ends_with('/') {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}/{name}")
    }
}

/// Whether an uploaded file should be routed to the mesh pipeline.
#[must_use]
pub fn is_mesh_upload<P: AsRef<Path>>(path: P) -> bool {
    mesh_io::is_off_path(path)
}

/// JSON body returned to the client after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyResponse {
    /// Public URL of the output, or the failure message.
    pub output: String,
    /// File type tag, `"3d"` for meshes.
    pub file_type: String,
}

impl ApplyResponse {
    /// Response for a mesh operation result.
    #[must_use]
    pub fn mesh(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            file_type: MESH_FILE_TYPE.to_string(),
        }
    }

    /// Whether the response carries a failure message.
    #[must_use]
    pub fn is_error(&self) -> bool {
        is_error(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detection() {
        assert!(is_error("Error in scaling: boom"));
        assert!(is_error("Error: invalid option selected: Blur"));
        assert!(!is_error("uploads/scaled_a.off"));
        assert!(!is_error(""));
    }

    #[test]
    fn public_url_uses_base_name() {
        assert_eq!(
            public_url("uploads/noisy_a.off", PUBLIC_UPLOADS_PREFIX),
            "/static/uploads/noisy_a.off"
        );
        assert_eq!(public_url("noisy_a.off", "/files"), "/files/noisy_a.off");
    }

    #[test]
    fn mesh_upload_detection() {
        assert!(is_mesh_upload("uploads/a.off"));
        assert!(is_mesh_upload("uploads/A.OFF"));
        assert!(!is_mesh_upload("uploads/a.wav"));
    }

    #[test]
    fn response_json_shape() {
        let response = ApplyResponse::mesh("/static/uploads/rotated_a.off");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"output": "/static/uploads/rotated_a.off", "file_type": "3d"})
        );
        assert!(!response.is_error());
    }
}
