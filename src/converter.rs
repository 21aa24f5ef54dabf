use tracing::debug;
use crate::audio_mixer::AudioMixer;
use crate::bitrate_reader;
use crate::codec_factory::CodecFactory;
use crate::formats::VideoFormat;
use crate::video_file::VideoFile;

/// Single entry point for converting a video file to another format.
pub struct VideoConverter {
    codecs: CodecFactory,
    mixer: AudioMixer,
}

impl VideoConverter {
    pub fn new() -> Self {
        VideoConverter {
            codecs: CodecFactory::new(),
            mixer: AudioMixer::new(),
        }
    }

    /// Re-tags the buffer of `input` for `destination` and returns it as a new
    /// file. Every occurrence of the source format's text in the filename is
    /// replaced, not only the extension.
    pub fn convert_video(&self, input: &VideoFile, destination: VideoFormat) -> VideoFile {
        let source_codec = self.codecs.codec_for_file(input);
        let destination_codec = self.codecs.get_codec(destination);
        debug!("converting {} from {} to {}", input.filename(), source_codec.format(), destination_codec.format());

        let raw = bitrate_reader::read(input, source_codec);
        let buffer = bitrate_reader::convert(&raw, destination_codec);
        self.mixer.fix(input);

        let filename = input.filename().replace(input.format().as_str(), destination.as_str());
        VideoFile::from_parts(filename, buffer)
    }
}

impl Default for VideoConverter {
    fn default() -> Self {
        VideoConverter::new()
    }
}
