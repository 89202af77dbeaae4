use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;

#[derive(Error, Debug)]
pub enum ImageStoreError {
    #[error("Malformed data URL")]
    Malformed,

    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),

    #[error("Image exceeds {max} bytes ({actual} bytes)")]
    TooLarge { max: usize, actual: usize },

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Decoded `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

pub fn parse_data_url(data_url: &str) -> Result<DataUrl, ImageStoreError> {
    let rest = data_url
        .trim()
        .strip_prefix("data:")
        .ok_or(ImageStoreError::Malformed)?;
    let (metadata, payload) = rest.split_once(',').ok_or(ImageStoreError::Malformed)?;
    let mime = metadata
        .strip_suffix(";base64")
        .ok_or(ImageStoreError::Malformed)?;

    // Browsers may omit the mime type entirely
    let mime = if mime.is_empty() { "image/jpeg" } else { mime };

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|_| ImageStoreError::Malformed)?;

    Ok(DataUrl {
        mime: mime.to_ascii_lowercase(),
        bytes,
    })
}

fn extension_for_mime(mime: &str) -> Option<&'static str> {
    match mime {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

pub fn mime_for_file(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn slug(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();

    if slug.is_empty() {
        "team".to_string()
    } else {
        slug.to_ascii_lowercase()
    }
}

/// Stores uploaded images on local disk and hands out public URLs for them.
#[derive(Clone)]
pub struct ImageStore {
    media_dir: PathBuf,
    base_url: String,
    max_bytes: usize,
}

impl ImageStore {
    pub fn new(
        media_dir: impl Into<PathBuf>,
        base_url: impl Into<String>,
        max_bytes: usize,
    ) -> Self {
        Self {
            media_dir: media_dir.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.media_dir, &config.media_base_url, config.max_body_bytes)
    }

    /// Writes the image and returns its public URL.
    pub async fn store(&self, name_hint: &str, data_url: &str) -> Result<String, ImageStoreError> {
        let image = parse_data_url(data_url)?;
        let extension = extension_for_mime(&image.mime)
            .ok_or_else(|| ImageStoreError::UnsupportedType(image.mime.clone()))?;

        if image.bytes.len() > self.max_bytes {
            return Err(ImageStoreError::TooLarge {
                max: self.max_bytes,
                actual: image.bytes.len(),
            });
        }

        let file_name = format!("{}-{}.{}", slug(name_hint), Uuid::new_v4(), extension);

        tokio::fs::create_dir_all(&self.media_dir).await?;
        tokio::fs::write(self.media_dir.join(&file_name), &image.bytes).await?;

        log::info!("Stored image {} ({} bytes)", file_name, image.bytes.len());

        Ok(format!("{}/{}", self.base_url, file_name))
    }

    /// Reads a previously stored image by its file name.
    pub async fn read(&self, file_name: &str) -> Result<Vec<u8>, ImageStoreError> {
        let valid = !file_name.is_empty()
            && !file_name.starts_with('.')
            && file_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
        if !valid {
            return Err(ImageStoreError::InvalidName(file_name.to_string()));
        }

        Ok(tokio::fs::read(self.media_dir.join(file_name)).await?)
    }
}
