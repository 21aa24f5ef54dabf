use crate::formats::VideoFormat;
use super::CompressionCodec;

pub struct OggCompressionCodec {
}

impl OggCompressionCodec {
    pub fn new() -> Self {
        OggCompressionCodec { }
    }
}

impl CompressionCodec for OggCompressionCodec {
    fn format(&self) -> VideoFormat {
        VideoFormat::Ogg
    }
}
