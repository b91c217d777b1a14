use eframe::egui;
use thiserror::Error;

use crate::id::SurfaceObject;

/// Most objects one side can hold
pub const MAX_OBJECTS_PER_SIDE: usize = 4;

/// Errors that can occur while turning a dropped file into an object
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("{0} is not a supported image type")]
    Unsupported(String),
    #[error("{0} has no readable data")]
    NoData(String),
    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// A decoded upload: the object for the engine plus the pixels for the host.
pub struct Upload {
    pub object: SurfaceObject,
    pub image: egui::ColorImage,
}

impl std::fmt::Debug for Upload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Upload")
            .field("object", &self.object)
            .field("size", &self.image.size)
            .finish()
    }
}

/// Collects files dropped onto the window and decodes the images among them.
#[derive(Debug, Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks up this frame's dropped files. Returns true if there were any.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if i.raw.dropped_files.is_empty() {
                false
            } else {
                self.dropped_files.extend(i.raw.dropped_files.iter().cloned());
                true
            }
        })
    }

    /// Decodes queued files, keeping at most `room` of them.
    ///
    /// Files past the cap are dropped with a warning.
    pub fn take_uploads(&mut self, room: usize) -> Vec<Upload> {
        let mut uploads = Vec::new();
        for file in self.dropped_files.drain(..) {
            let name = file_name(&file);
            if uploads.len() >= room {
                log::warn!("Side is full ({MAX_OBJECTS_PER_SIDE} objects), skipping {name}");
                continue;
            }
            match load_dropped_file(&file, &name) {
                Ok(image) => {
                    log::info!("Loaded {name} ({}x{})", image.size[0], image.size[1]);
                    uploads.push(Upload {
                        object: SurfaceObject::new(name),
                        image,
                    });
                }
                Err(err) => log::warn!("Skipping dropped file: {err}"),
            }
        }
        uploads
    }

    /// Dims the window while files hover over it
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        let hovered = ctx.input(|i| i.raw.hovered_files.len());
        if hovered == 0 {
            return;
        }

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            format!("Drop {hovered} image(s) onto the active side"),
            FontId::proportional(22.0),
            Color32::WHITE,
        );
    }
}

fn file_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    file.path
        .as_ref()
        .and_then(|path| path.extension())
        .is_some_and(|ext| is_image_extension(&ext.to_string_lossy()))
}

pub fn is_image_extension(ext: &str) -> bool {
    matches!(
        ext.to_lowercase().as_str(),
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp"
    )
}

fn load_dropped_file(file: &egui::DroppedFile, name: &str) -> Result<egui::ColorImage, UploadError> {
    if !is_image_file(file) {
        return Err(UploadError::Unsupported(name.to_owned()));
    }
    if let Some(bytes) = &file.bytes {
        return decode_image(bytes);
    }

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = &file.path {
        let bytes = std::fs::read(path).map_err(|source| UploadError::Read {
            name: name.to_owned(),
            source,
        })?;
        return decode_image(&bytes);
    }

    Err(UploadError::NoData(name.to_owned()))
}

/// Decodes encoded image bytes into straight RGBA pixels.
pub fn decode_image(bytes: &[u8]) -> Result<egui::ColorImage, UploadError> {
    let img = image::load_from_memory(bytes)?;
    log::debug!("Decoded image: {}x{}", img.width(), img.height());
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_flat_samples().as_slice()))
}
