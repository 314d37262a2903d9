/// Caller contract violations detected before a sort touches any element.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SortError {
    /// The scratch buffer cannot hold one merge pass over the data.
    #[error("scratch buffer holds {actual} elements but the data needs {required}")]
    BufferTooShort { required: usize, actual: usize },
}

pub type SortResult<T> = Result<T, SortError>;
