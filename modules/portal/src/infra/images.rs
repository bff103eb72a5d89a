use std::fs;
use std::path::Path;

use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::ports::ImageReader;

/// Reads a local file into a `data:` URL. Nothing is uploaded anywhere;
/// the encoded bytes are embedded directly into the owning record.
pub struct DataUrlReader;

impl ImageReader for DataUrlReader {
    fn read_data_url(&self, path: &Path) -> anyhow::Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("reading image {}", path.display()))?;
        let mime = mime_for(path);
        Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_file_as_data_url() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("avatar.png");
        fs::write(&path, [0x89, b'P', b'N', b'G']).expect("write image");

        let url = DataUrlReader.read_data_url(&path).expect("encode");
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(mime_for(Path::new("x.bin")), "application/octet-stream");
        assert_eq!(mime_for(Path::new("photo.JPEG")), "image/jpeg");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(DataUrlReader
            .read_data_url(Path::new("/definitely/not/here.png"))
            .is_err());
    }
}
