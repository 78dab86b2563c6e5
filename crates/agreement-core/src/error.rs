use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to load branding asset: {0}")]
    AssetLoad(String),

    #[error("Failed to assemble document: {0}")]
    Document(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field is blank: {0}")]
    BlankField(&'static str),
}
