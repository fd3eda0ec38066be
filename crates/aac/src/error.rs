/// The only error surfaced to callers of the board. Container-level lookup
/// misses are translated into this at the category/board boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("no element for image location `{0}`")]
    ElementNotFound(String),
}
