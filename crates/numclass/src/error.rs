/// Reasons a fun fact could not be fetched
///
/// None of these reach an HTTP client; the resolver logs them and falls back
/// to a locally synthesized fact.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Fact service returned HTTP {0}")]
    Status(u16),

    #[error("Failed to decode fact: {0}")]
    Decode(String),

    #[error("Fact service returned an empty fact")]
    EmptyFact,

    #[error("Fact lookup disabled")]
    Offline,
}
