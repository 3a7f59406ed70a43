pub mod cms_client;
pub mod variant_source;

pub use cms_client::CmsClient;
pub use variant_source::VariantSource;
