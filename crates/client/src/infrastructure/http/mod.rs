//! HTTP adapters for the static definition-file host

pub mod static_asset_client;

pub use static_asset_client::StaticAssetClient;
