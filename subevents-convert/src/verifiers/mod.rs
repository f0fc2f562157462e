pub mod playstore_http;

pub use playstore_http::HttpPlayStoreVerifier;
