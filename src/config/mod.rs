//! Configuration module

mod client;

pub use client::resolve_api_url;
pub use client::ClientConfig;
pub use client::RenderConfig;
pub use client::DEFAULT_API_URL;
