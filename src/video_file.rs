use std::fmt::Display;
use serde::Serialize;
use crate::error::VideoFileError;
use crate::formats::VideoFormat;

/// A named video with an opaque, possibly codec-tagged buffer.
///
/// The format is derived from the filename when the value is built and is
/// never recomputed afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VideoFile {
    filename: String,
    format: VideoFormat,
    buffer: String,
}

impl VideoFile {
    pub fn new(filename: &str, buffer: &str) -> Result<Self, VideoFileError> {
        if filename.is_empty() {
            return Err(VideoFileError::EmptyFilename);
        }

        Ok(VideoFile::from_parts(String::from(filename), String::from(buffer)))
    }

    pub(crate) fn from_parts(filename: String, buffer: String) -> Self {
        VideoFile {
            format: VideoFormat::from_filename(&filename),
            filename,
            buffer,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn format(&self) -> VideoFormat {
        self.format
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

impl Display for VideoFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.filename, self.format, self.buffer)
    }
}
