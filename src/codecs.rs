use crate::formats::VideoFormat;
pub mod mpeg4;
pub mod ogg;

/// Tags raw buffers with a codec marker and strips it back off.
pub trait CompressionCodec {
    fn format(&self) -> VideoFormat;

    fn marker(&self) -> &'static str {
        self.format().marker()
    }

    fn code(&self, raw: &str) -> String {
        format!("{}{}", self.marker(), raw)
    }

    /// Removes this codec's marker if the buffer starts with it, otherwise
    /// returns the buffer untouched.
    fn decode(&self, tagged: &str) -> String {
        String::from(tagged.strip_prefix(self.marker()).unwrap_or(tagged))
    }
}
