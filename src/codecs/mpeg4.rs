use crate::formats::VideoFormat;
use super::CompressionCodec;

pub struct Mpeg4CompressionCodec {
}

impl Mpeg4CompressionCodec {
    pub fn new() -> Self {
        Mpeg4CompressionCodec { }
    }
}

impl CompressionCodec for Mpeg4CompressionCodec {
    fn format(&self) -> VideoFormat {
        VideoFormat::Mp4
    }
}
