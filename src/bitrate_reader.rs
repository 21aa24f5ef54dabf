use human_repr::HumanCount;
use tracing::debug;
use crate::codecs::CompressionCodec;
use crate::video_file::VideoFile;

/// Returns the file's buffer with the source codec's marker removed.
pub fn read(file: &VideoFile, source_codec: &dyn CompressionCodec) -> String {
    debug!("reading {} ({})", file.filename(), file.buffer().len().human_count_bytes());
    source_codec.decode(file.buffer())
}

/// Tags a raw buffer with the destination codec's marker.
pub fn convert(raw: &str, destination_codec: &dyn CompressionCodec) -> String {
    debug!("converting {} to {}", raw.len().human_count_bytes(), destination_codec.format());
    destination_codec.code(raw)
}
