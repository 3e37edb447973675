/// Session-local image attachments, keyed by tier id
///
/// Attachments come from two places:
/// - a local file, read and embedded as a `data:` URL
/// - an external URL pasted by the user, stored verbatim
///
/// Nothing here is persisted. Closing the window drops every attachment.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use iced::widget::image;
use image_rs::ImageFormat;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use super::data::TierId;

/// Fallback MIME type when neither the bytes nor the file name identify the image
const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone, Error)]
pub enum AttachError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },
}

/// Where an attached image comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Inline `data:<mime>;base64,...` URL from a local upload
    DataUrl(String),
    /// External URL pasted by the user, unvalidated
    External(String),
}

impl ImageSource {
    /// Short name for log lines (never the payload)
    pub fn kind(&self) -> &'static str {
        match self {
            ImageSource::DataUrl(_) => "upload",
            ImageSource::External(_) => "url",
        }
    }
}

/// An attached image plus its decoded preview
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub source: ImageSource,
    /// Ready-to-draw handle, only available for embedded uploads
    pub preview: Option<image::Handle>,
}

impl Attachment {
    /// Build an attachment, decoding the preview once up front
    pub fn new(source: ImageSource) -> Self {
        let preview = match &source {
            ImageSource::DataUrl(url) => decode_data_url(url).map(image::Handle::from_bytes),
            ImageSource::External(_) => None,
        };
        Self { source, preview }
    }
}

/// The tier id -> attachment map
#[derive(Debug, Default)]
pub struct Attachments {
    entries: HashMap<TierId, Attachment>,
}

impl Attachments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an image to a tier, replacing whatever was there before
    pub fn attach(&mut self, id: TierId, attachment: Attachment) {
        let kind = attachment.source.kind();
        self.entries.insert(id, attachment);
        info!(
            "🖼️  Attached {} image to tier {} ({} tiers with images)",
            kind,
            id,
            self.len()
        );
    }

    pub fn get(&self, id: TierId) -> Option<&Attachment> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Turn user input from the URL prompt into a source.
/// Blank input means the prompt was abandoned and yields `None`.
pub fn external(input: &str) -> Option<ImageSource> {
    let url = input.trim();
    if url.is_empty() {
        None
    } else {
        Some(ImageSource::External(url.to_string()))
    }
}

/// Encode raw file bytes as an inline `data:` URL.
///
/// The MIME type comes from the magic bytes first, then the file
/// extension. Unknown content is still encoded; nothing is rejected.
pub fn encode_data_url(bytes: &[u8], file_name: &Path) -> String {
    let mime = image_rs::guess_format(bytes)
        .ok()
        .or_else(|| {
            file_name
                .extension()
                .and_then(|ext| ImageFormat::from_extension(ext))
        })
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME);

    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Decode the payload of a base64 `data:` URL
pub fn decode_data_url(url: &str) -> Option<Vec<u8>> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload).ok()
}

/// Read a local file and embed it as a `data:` URL
pub async fn read_as_data_url(path: PathBuf) -> Result<String, AttachError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| AttachError::Io {
        path: path.clone(),
        source: Arc::new(e),
    })?;

    Ok(encode_data_url(&bytes, &path))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// First bytes of any PNG file
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn test_attach_is_per_tier() {
        let mut attachments = Attachments::new();
        attachments.attach(
            TierId(2),
            Attachment::new(ImageSource::External("https://example.com/a.png".into())),
        );

        assert!(attachments.get(TierId(3)).is_none());
        assert_eq!(
            attachments.get(TierId(2)).map(|a| &a.source),
            Some(&ImageSource::External("https://example.com/a.png".into()))
        );
    }

    #[test]
    fn test_reattach_overwrites() {
        let mut attachments = Attachments::new();
        attachments.attach(TierId(5), Attachment::new(ImageSource::External("first".into())));
        attachments.attach(TierId(5), Attachment::new(ImageSource::External("second".into())));

        assert_eq!(attachments.len(), 1);
        assert_eq!(
            attachments.get(TierId(5)).unwrap().source,
            ImageSource::External("second".into())
        );
    }

    #[test]
    fn test_blank_url_is_ignored() {
        assert_eq!(external(""), None);
        assert_eq!(external("   "), None);
        assert_eq!(
            external("  not even a url "),
            Some(ImageSource::External("not even a url".into()))
        );
    }

    #[test]
    fn test_mime_sniffed_from_bytes() {
        let url = encode_data_url(PNG_MAGIC, Path::new("photo.jpg"));
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_mime_from_extension_then_fallback() {
        let url = encode_data_url(b"plain text", Path::new("scan.webp"));
        assert!(url.starts_with("data:image/webp;base64,"));

        let url = encode_data_url(b"plain text", Path::new("notes"));
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_decode_data_url() {
        let url = encode_data_url(b"hello", Path::new("x.png"));
        assert_eq!(decode_data_url(&url), Some(b"hello".to_vec()));
        assert_eq!(decode_data_url("https://example.com/x.png"), None);
        assert_eq!(decode_data_url("data:text/plain,hello"), None);
    }

    #[test]
    fn test_external_has_no_preview() {
        let attachment = Attachment::new(ImageSource::External("https://example.com".into()));
        assert!(attachment.preview.is_none());

        let attachment = Attachment::new(ImageSource::DataUrl(encode_data_url(
            PNG_MAGIC,
            Path::new("a.png"),
        )));
        assert!(attachment.preview.is_some());
    }

    #[tokio::test]
    async fn test_read_as_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badge.png");
        std::fs::write(&path, PNG_MAGIC).unwrap();

        let url = read_as_data_url(path).await.unwrap();
        assert_eq!(decode_data_url(&url), Some(PNG_MAGIC.to_vec()));
    }

    #[tokio::test]
    async fn test_read_missing_file_fails() {
        let result = read_as_data_url(PathBuf::from("/nonexistent/badge.png")).await;
        assert!(matches!(result, Err(AttachError::Io { .. })));
    }
}
