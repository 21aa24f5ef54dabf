use std::collections::HashMap;
use tracing::warn;
use crate::codecs::CompressionCodec;
use crate::codecs::mpeg4::Mpeg4CompressionCodec;
use crate::codecs::ogg::OggCompressionCodec;
use crate::formats::VideoFormat;
use crate::video_file::VideoFile;

/// Fixed table from format to codec. Lookups that miss resolve to the Ogg
/// codec instead of failing.
pub struct CodecFactory {
    codecs: HashMap<VideoFormat, Box<dyn CompressionCodec>>,
    fallback: Box<dyn CompressionCodec>,
}

impl CodecFactory {
    pub fn new() -> Self {
        let codecs: Vec<Box<dyn CompressionCodec>> = vec![
            Box::new(OggCompressionCodec::new()),
            Box::new(Mpeg4CompressionCodec::new()),
        ];
        CodecFactory::from_codecs(codecs)
    }

    pub fn from_codecs(codecs: Vec<Box<dyn CompressionCodec>>) -> Self {
        CodecFactory {
            codecs: codecs.into_iter().map(|codec| (codec.format(), codec)).collect(),
            fallback: Box::new(OggCompressionCodec::new()),
        }
    }

    pub fn get_codec(&self, format: VideoFormat) -> &dyn CompressionCodec {
        match self.codecs.get(&format) {
            Some(codec) => &**codec,
            None => {
                warn!("No codec for {}, falling back to {}.", format, self.fallback.format());
                &*self.fallback
            },
        }
    }

    pub fn codec_for_file(&self, file: &VideoFile) -> &dyn CompressionCodec {
        self.get_codec(file.format())
    }
}

impl Default for CodecFactory {
    fn default() -> Self {
        CodecFactory::new()
    }
}
