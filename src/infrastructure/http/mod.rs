//! HTTP transport adapters.

mod authenticated_client;
mod reqwest_client;

pub use authenticated_client::AuthenticatedHttpClient;
pub use reqwest_client::ReqwestHttpClient;
