use std::fmt::Display;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    Ogg,
    Mp4,
    Unknown,
}

impl VideoFormat {
    /// Resolves the format from the text after the last `.` in `filename`.
    /// Names without a `.` or with an unrecognised extension are `Unknown`.
    pub fn from_filename(filename: &str) -> Self {
        match filename.rsplit_once('.') {
            Some((_, extension)) => VideoFormat::from_name(extension),
            None => VideoFormat::Unknown,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            "OGG" => VideoFormat::Ogg,
            "MP4" => VideoFormat::Mp4,
            _ => VideoFormat::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoFormat::Ogg => "ogg",
            VideoFormat::Mp4 => "mp4",
            VideoFormat::Unknown => "unknown",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            VideoFormat::Ogg => "[OGG]",
            VideoFormat::Mp4 => "[MP4]",
            VideoFormat::Unknown => "[UNKNOWN]",
        }
    }
}

impl Display for VideoFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_filename_known_extensions() {
        assert_eq!(VideoFormat::from_filename("a.ogg"), VideoFormat::Ogg);
        assert_eq!(VideoFormat::from_filename("a.mp4"), VideoFormat::Mp4);
        assert_eq!(VideoFormat::from_filename("A.OGG"), VideoFormat::Ogg);
        assert_eq!(VideoFormat::from_filename("clip.Mp4"), VideoFormat::Mp4);
        assert_eq!(VideoFormat::from_filename("archive.tar.ogg"), VideoFormat::Ogg);
        assert_eq!(VideoFormat::from_filename(".ogg"), VideoFormat::Ogg);
    }

    #[test]
    fn test_from_filename_falls_back_to_unknown() {
        assert_eq!(VideoFormat::from_filename("movie.avi"), VideoFormat::Unknown);
        assert_eq!(VideoFormat::from_filename("mp4"), VideoFormat::Unknown);
        assert_eq!(VideoFormat::from_filename("noextension"), VideoFormat::Unknown);
        assert_eq!(VideoFormat::from_filename("clip."), VideoFormat::Unknown);
        assert_eq!(VideoFormat::from_filename("clip.mp4.bak"), VideoFormat::Unknown);
        assert_eq!(VideoFormat::from_filename("clip.unknown"), VideoFormat::Unknown);
        assert_eq!(VideoFormat::from_filename(""), VideoFormat::Unknown);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(VideoFormat::from_name("mp4"), VideoFormat::Mp4);
        assert_eq!(VideoFormat::from_name("OGG"), VideoFormat::Ogg);
        assert_eq!(VideoFormat::from_name("mkv"), VideoFormat::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", VideoFormat::Ogg), "ogg");
        assert_eq!(format!("{}", VideoFormat::Mp4), "mp4");
        assert_eq!(format!("{}", VideoFormat::Unknown), "unknown");
    }

    #[test]
    fn test_marker() {
        assert_eq!(VideoFormat::Ogg.marker(), "[OGG]");
        assert_eq!(VideoFormat::Mp4.marker(), "[MP4]");
    }
}
