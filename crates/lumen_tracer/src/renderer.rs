//! Frame rendering into caller-owned pixel memory.
//!
//! Every pixel is an independent function of `(x, y, scene)`, so the
//! parallel path only has to hand each worker its own rows.

use crate::error::{RenderError, RenderResult};
use crate::pixel::{color_to_pixel, PixelFormat, Rgb8};
use crate::{trace_ray, Scene};
use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use std::time::Instant;

/// Check that `len` bytes with `stride` bytes per row can hold the frame.
///
/// Returns the length of the addressed region, `stride * height`.
fn checked_region(
    width: u32,
    height: u32,
    len: usize,
    stride: usize,
    format: PixelFormat,
) -> RenderResult<usize> {
    let overflow = || RenderError::SizeOverflow {
        width,
        height,
        stride,
    };

    let row_bytes = (width as usize)
        .checked_mul(format.bytes_per_pixel())
        .ok_or_else(overflow)?;
    if stride < row_bytes {
        return Err(RenderError::StrideTooSmall {
            stride,
            required: row_bytes,
        });
    }

    let required = stride.checked_mul(height as usize).ok_or_else(overflow)?;
    if len < required {
        return Err(RenderError::BufferTooSmall { len, required });
    }

    Ok(required)
}

/// Trace and write one scanline. `row` starts at pixel `(0, y)`.
fn render_row(scene: &Scene, y: u32, width: u32, height: u32, row: &mut [u8], format: PixelFormat) {
    let bpp = format.bytes_per_pixel();
    let camera = scene.camera();

    for (x, dst) in (0..width).zip(row.chunks_exact_mut(bpp)) {
        let ray = camera.get_ray(x, y, width, height);
        let color = trace_ray(&ray, scene, 0);
        format.write(color_to_pixel(color), dst);
    }
}

/// Render `scene` into `buffer`, one scanline after another.
///
/// Row `y` starts at byte `y * stride`. Bytes past `width` pixels in a row
/// and past `stride * height` in the buffer are left untouched. The buffer
/// is validated before anything is written.
pub fn render_frame(
    scene: &Scene,
    width: u32,
    height: u32,
    buffer: &mut [u8],
    stride: usize,
    format: PixelFormat,
) -> RenderResult<()> {
    let region = validate(width, height, buffer.len(), stride, format)?;
    if region == 0 {
        return Ok(());
    }

    let start = Instant::now();
    let row_bytes = width as usize * format.bytes_per_pixel();
    for (y, row) in (0..height).zip(buffer[..region].chunks_mut(stride)) {
        render_row(scene, y, width, height, &mut row[..row_bytes], format);
    }

    log::debug!("Rendered {}x{} frame in {:?}", width, height, start.elapsed());
    Ok(())
}

/// Same output as [`render_frame`], with scanlines spread across the rayon
/// thread pool. Each worker owns a disjoint set of rows.
pub fn render_frame_parallel(
    scene: &Scene,
    width: u32,
    height: u32,
    buffer: &mut [u8],
    stride: usize,
    format: PixelFormat,
) -> RenderResult<()> {
    let region = validate(width, height, buffer.len(), stride, format)?;
    if region == 0 {
        return Ok(());
    }

    let start = Instant::now();
    let row_bytes = width as usize * format.bytes_per_pixel();
    buffer[..region]
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            render_row(scene, y as u32, width, height, &mut row[..row_bytes], format);
        });

    log::debug!(
        "Rendered {}x{} frame on {} threads in {:?}",
        width,
        height,
        rayon::current_num_threads(),
        start.elapsed()
    );
    Ok(())
}

fn validate(
    width: u32,
    height: u32,
    len: usize,
    stride: usize,
    format: PixelFormat,
) -> RenderResult<usize> {
    let region = checked_region(width, height, len, stride, format).inspect_err(|e| {
        log::warn!("Rejected frame buffer: {}", e);
    })?;

    // An empty row count or zero-width rows leave nothing to write.
    if width == 0 || height == 0 {
        return Ok(0);
    }
    Ok(region)
}

/// Owned, tightly packed pixel buffer.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create a zeroed buffer for a `width` x `height` frame.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> RenderResult<Self> {
        let overflow = RenderError::SizeOverflow {
            width,
            height,
            stride: 0,
        };
        let stride = (width as usize)
            .checked_mul(format.bytes_per_pixel())
            .ok_or_else(|| overflow.clone())?;
        let len = stride.checked_mul(height as usize).ok_or(overflow)?;

        Ok(Self {
            width,
            height,
            stride,
            format,
            data: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw pixel bytes, `stride * height` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Render the whole frame on the calling thread.
    pub fn render(&mut self, scene: &Scene) -> RenderResult<()> {
        render_frame(scene, self.width, self.height, &mut self.data, self.stride, self.format)
    }

    /// Render the whole frame across the rayon thread pool.
    pub fn render_parallel(&mut self, scene: &Scene) -> RenderResult<()> {
        render_frame_parallel(
            scene,
            self.width,
            self.height,
            &mut self.data,
            self.stride,
            self.format,
        )
    }

    /// Get the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        let bpp = self.format.bytes_per_pixel();
        let offset = y as usize * self.stride + x as usize * bpp;
        self.format.read(&self.data[offset..offset + bpp])
    }

    /// Convert to an RGBA image (for display or saving).
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let px = self.pixel(x, y);
            Rgba([px.r, px.g, px.b, 255])
        })
    }
}
