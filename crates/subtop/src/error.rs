#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Nothing to display in human-readable mode
    #[error("No posts found or an error occurred.")]
    NoPosts,
}
