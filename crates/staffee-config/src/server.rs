use std::env;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Public origin of the gateway; `NEXT_PUBLIC_URL` is honoured for
    /// deployments that still export the old name.
    pub public_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("APP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            public_url: env::var("PUBLIC_URL")
                .or_else(|_| env::var("NEXT_PUBLIC_URL"))
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
