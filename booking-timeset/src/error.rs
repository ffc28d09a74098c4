#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{start}` is not before `{end}`")]
    InvalidSpan { start: String, end: String },

    #[error("span #{index} `{left}` is not before the next span `{right}`")]
    Unsorted { index: usize, left: String, right: String },
}
