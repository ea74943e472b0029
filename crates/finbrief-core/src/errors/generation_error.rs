/// Summary generation errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("missing credential: set {env_var}")]
    MissingCredential { env_var: String },

    #[error("generation request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("model unavailable: {model}: {reason}")]
    ModelUnavailable { model: String, reason: String },

    #[error("model {model} returned an empty response")]
    EmptyResponse { model: String },
}
