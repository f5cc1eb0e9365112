use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] oxidize_pdf::PdfError),

    #[error("Version string must not be empty")]
    EmptyVersion,

    #[error("Asset not found: {}", .0.display())]
    MissingAsset(PathBuf),

    #[error("Invalid image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, LabelError>;
