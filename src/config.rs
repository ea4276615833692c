use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_days: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoCodeConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub geocode: GeoCodeConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "mycommute".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "mycommute-employees".into()),
            ttl_days: std::env::var("JWT_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(90),
        };
        let geocode = GeoCodeConfig {
            base_url: std::env::var("GEOCODE_BASE_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".into()),
            user_agent: std::env::var("GEOCODE_USER_AGENT")
                .unwrap_or_else(|_| "mycommute/0.1".into()),
            timeout_secs: std::env::var("GEOCODE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(10),
        };
        Ok(Self {
            database_url,
            jwt,
            geocode,
        })
    }
}
