use thiserror::Error;

use crate::model::{ChapterError, ProblemError, ProgressError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Problem(#[from] ProblemError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Chapter(#[from] ChapterError),
}
