use rayon::prelude::*;
use yuv::{YuvPackedImage, YuvRange, YuvStandardMatrix, yuyv422_to_rgba};

use crate::{
    error::{Error, Result},
    types::{ColorFrame, ColorImageFormat},
};

/// Fixed-size RGBA buffer that color frames are copied into for display.
#[derive(Debug)]
pub struct ColorDisplay {
    rgba: Vec<u8>,
    width: u32,
    height: u32,
}

impl ColorDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            rgba: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Copies `frame` into the display. Frames of another size are skipped.
    pub fn accept(&mut self, frame: &ColorFrame) -> Result<bool> {
        if frame.width != self.width || frame.height != self.height {
            log::debug!(
                "ignoring {}x{} color frame for {}x{} display",
                frame.width,
                frame.height,
                self.width,
                self.height
            );
            return Ok(false);
        }

        match frame.format {
            ColorImageFormat::Rgba => copy_rgba(&frame.data, &mut self.rgba)?,
            ColorImageFormat::Bgra => bgra_to_rgba(&frame.data, &mut self.rgba)?,
            ColorImageFormat::Yuy2 => {
                yuy2_to_rgba(&frame.data, frame.width, frame.height, &mut self.rgba)?
            }
        }
        Ok(true)
    }
}

fn check_len(format: &str, data: &[u8], expected: usize) -> Result<()> {
    if data.len() < expected {
        return Err(Error::ColorBuffer(format!(
            "{format} buffer too small: got {}, expected {expected}",
            data.len()
        )));
    }
    Ok(())
}

fn copy_rgba(data: &[u8], dst: &mut [u8]) -> Result<()> {
    check_len("RGBA", data, dst.len())?;
    dst.copy_from_slice(&data[..dst.len()]);
    Ok(())
}

fn bgra_to_rgba(data: &[u8], dst: &mut [u8]) -> Result<()> {
    check_len("BGRA", data, dst.len())?;
    dst.par_chunks_mut(4)
        .zip(data.par_chunks_exact(4))
        .for_each(|(out, src)| {
            out[0] = src[2];
            out[1] = src[1];
            out[2] = src[0];
            out[3] = src[3];
        });
    Ok(())
}

fn yuy2_to_rgba(data: &[u8], width: u32, height: u32, dst: &mut [u8]) -> Result<()> {
    check_len("YUY2", data, width as usize * height as usize * 2)?;

    let packed = YuvPackedImage {
        yuy: data,
        yuy_stride: width * 2,
        width,
        height,
    };

    yuyv422_to_rgba(
        &packed,
        dst,
        width * 4,
        YuvRange::Full,
        YuvStandardMatrix::Bt709,
    )
    .map_err(|err| Error::ColorBuffer(format!("YUY2→RGBA failed: {err:?}")))
}
