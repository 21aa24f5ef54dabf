use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum VideoFileError {
    #[error("Error creating video file: filename must not be empty.")]
    EmptyFilename,
}
