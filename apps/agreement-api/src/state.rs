//! Shared application state

use agreement_core::AgreementRenderer;

pub struct AppState {
    pub renderer: AgreementRenderer,
}

impl AppState {
    /// Build the renderer, honouring a `LETTERHEAD_PATH` override for
    /// deployments that ship their own banner.
    pub fn new() -> Self {
        let renderer = match std::env::var("LETTERHEAD_PATH") {
            Ok(path) if !path.trim().is_empty() => {
                tracing::info!("Using letterhead from {}", path);
                AgreementRenderer::with_letterhead_path(path)
            }
            _ => AgreementRenderer::new(),
        };
        Self { renderer }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
