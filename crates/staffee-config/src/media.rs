use std::env;

/// Image host configuration. Profile photos and company logos are stored
/// there by the backend; the gateway only builds delivery URLs.
#[derive(Clone, Debug)]
pub struct MediaConfig {
    pub cloud_name: String,
}

impl MediaConfig {
    pub fn from_env() -> Self {
        Self {
            cloud_name: env::var("CLOUDINARY_CLOUD_NAME").unwrap_or_else(|_| "staffee".to_string()),
        }
    }

    /// Delivery URL for an uploaded image. Values that already are URLs are
    /// returned unchanged.
    pub fn image_url(&self, public_id: &str) -> String {
        if public_id.starts_with("http://") || public_id.starts_with("https://") {
            return public_id.to_string();
        }
        format!(
            "https://res.cloudinary.com/{}/image/upload/{}",
            self.cloud_name,
            public_id.trim_start_matches('/')
        )
    }
}
