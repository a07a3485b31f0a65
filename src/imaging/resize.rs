use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};
use tracing::{debug, info};

use crate::core::error::ComphyError;

const CANVAS_FILL: Rgba<u8> = Rgba([0, 0, 0, 0xff]);

/// Largest RGBA canvas, in bytes, the resizer will allocate (1 GiB).
pub const MAX_CANVAS_BYTES: u64 = 1 << 30;

/// Compute the canvas size that gives `width x height` the requested aspect ratio.
///
/// Sources narrower than the target are widened, everything else (including an
/// exact match) is heightened. The untouched axis is never shrunk, and sizes
/// whose RGBA canvas would exceed [`MAX_CANVAS_BYTES`] are rejected.
pub fn target_dimensions(width: u32, height: u32, ratio: f64) -> Result<(u32, u32), ComphyError> {
    check_ratio(ratio)?;
    if width == 0 || height == 0 {
        return Err(ComphyError::invalid(format!(
            "source image has no pixels ({width}x{height})"
        )));
    }
    let current = width as f64 / height as f64;
    let (new_width, new_height) = if current < ratio {
        (to_dimension(ratio * height as f64)?, height)
    } else {
        (width, to_dimension(width as f64 / ratio)?)
    };
    let canvas_bytes = new_width as u64 * new_height as u64 * 4;
    if canvas_bytes > MAX_CANVAS_BYTES {
        return Err(ComphyError::invalid(format!(
            "aspect ratio {ratio} would need a {new_width}x{new_height} canvas \
             ({canvas_bytes} bytes, limit {MAX_CANVAS_BYTES})"
        )));
    }
    Ok((new_width, new_height))
}

/// Stretch `image` to the target aspect ratio and composite it onto a black canvas.
pub fn fit_to_aspect(image: &DynamicImage, ratio: f64) -> Result<DynamicImage, ComphyError> {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = target_dimensions(width, height, ratio)?;
    debug!(width, height, new_width, new_height, "resampling with lanczos3");

    let resized = image.resize_exact(new_width, new_height, FilterType::Lanczos3);
    // The canvas matches the resized size, so the paste at the origin covers it fully.
    let mut canvas = RgbaImage::from_pixel(new_width, new_height, CANVAS_FILL);
    imageops::overlay(&mut canvas, &resized.to_rgba8(), 0, 0);
    Ok(DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).to_rgb8()))
}

/// Load `source`, fit it to `ratio` and write the result to `output`.
///
/// The output format follows the extension of `output`. Nothing is written
/// unless encoding succeeds. Returns the dimensions of the written image.
pub fn resize_to_aspect(
    source: &Path,
    ratio: f64,
    output: &Path,
) -> Result<(u32, u32), ComphyError> {
    check_ratio(ratio)?;
    let format = ImageFormat::from_path(output).map_err(|_| ComphyError::UnsupportedFormat {
        path: output.to_path_buf(),
    })?;
    let decode_err = |source_err| ComphyError::Decode {
        path: source.to_path_buf(),
        source: source_err,
    };
    // Size the canvas from the header before paying for a full decode.
    let (width, height) = image::image_dimensions(source).map_err(decode_err)?;
    target_dimensions(width, height, ratio)?;
    let image = image::open(source).map_err(decode_err)?;

    let fitted = fit_to_aspect(&image, ratio)?;
    write_atomically(&fitted, output, format)?;

    info!(
        source = %source.display(),
        output = %output.display(),
        width = fitted.width(),
        height = fitted.height(),
        "resized image"
    );
    Ok(fitted.dimensions())
}

fn check_ratio(ratio: f64) -> Result<(), ComphyError> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(ComphyError::invalid(format!(
            "aspect ratio must be a positive number (got {ratio})"
        )));
    }
    Ok(())
}

fn to_dimension(value: f64) -> Result<u32, ComphyError> {
    let rounded = value.round().max(1.0);
    if !rounded.is_finite() || rounded > u32::MAX as f64 {
        return Err(ComphyError::invalid(format!(
            "computed dimension {value} is out of range"
        )));
    }
    Ok(rounded as u32)
}

/// Encode into a temporary sibling of `output`, then rename it into place.
fn write_atomically(
    image: &DynamicImage,
    output: &Path,
    format: ImageFormat,
) -> Result<(), ComphyError> {
    let io_err = |source| ComphyError::Io {
        path: output.to_path_buf(),
        source,
    };
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".comphy-").suffix(".part");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Same mode a plain create gets: 0o666 filtered through the umask.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    // Dropping the staged file on an early return deletes it.
    let mut staged = builder.tempfile_in(dir).map_err(io_err)?;
    if let Ok(existing) = fs::metadata(output) {
        staged
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(io_err)?;
    }
    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        image
            .write_to(&mut writer, format)
            .map_err(|source| ComphyError::Encode {
                path: output.to_path_buf(),
                source,
            })?;
        writer.flush().map_err(io_err)?;
    }
    staged.persist(output).map_err(|err| io_err(err.error))?;
    Ok(())
}
