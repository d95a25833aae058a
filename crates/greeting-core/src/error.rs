use thiserror::Error;

/// Failures the scene can run into while building or feeding sprites.
///
/// None of these abort the experience: callers log them and carry on with
/// fewer objects on screen.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid greeting data: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid range for {field}: [{min}, {max}]")]
    InvalidRange { field: String, min: f32, max: f32 },

    #[error("failed to load {locator}: {reason}")]
    AssetLoad { locator: String, reason: String },

    #[error("no {what} drawing context available")]
    MissingContext { what: &'static str },

    #[error("render backend error: {0}")]
    Backend(String),
}
