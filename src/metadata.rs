use crate::error::MetadataError;
use crate::model::record::{ClientMetadata, UNKNOWN};

pub trait MetadataSource {
    fn fetch(&self) -> Result<ClientMetadata, MetadataError>;
}

/// Values handed over by the caller; missing fields read as `unknown`.
#[derive(Debug, Clone, Default)]
pub struct ProvidedMetadata {
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl MetadataSource for ProvidedMetadata {
    fn fetch(&self) -> Result<ClientMetadata, MetadataError> {
        Ok(ClientMetadata {
            user_agent: or_unknown(self.user_agent.as_deref()),
            ip: or_unknown(self.ip.as_deref()),
        })
    }
}

/// CGI-style request environment (`HTTP_USER_AGENT`, `REMOTE_ADDR`).
pub struct EnvMetadata<F> {
    lookup: F,
}

impl EnvMetadata<fn(&str) -> Option<String>> {
    pub fn process() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }
}

impl<F> EnvMetadata<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }
}

impl<F> MetadataSource for EnvMetadata<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn fetch(&self) -> Result<ClientMetadata, MetadataError> {
        let user_agent = (self.lookup)("HTTP_USER_AGENT");
        let ip = (self.lookup)("REMOTE_ADDR");
        if user_agent.is_none() && ip.is_none() {
            return Err(MetadataError::Unavailable(
                "HTTP_USER_AGENT and REMOTE_ADDR are not set".to_string(),
            ));
        }
        Ok(ClientMetadata {
            user_agent: or_unknown(user_agent.as_deref()),
            ip: or_unknown(ip.as_deref()),
        })
    }
}

fn or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/metadata.rs"]
mod tests;
