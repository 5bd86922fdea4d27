use std::fmt;

use async_trait::async_trait;
use auto_impl::auto_impl;

/// Pixel layout of a [`RawFrame`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Encoding {
    Rgb8,
    Bgr8,
    Mono8,
    /// PNG or JPEG bytes; `width` and `height` of the frame are informational.
    Compressed,
}

impl Encoding {
    /// Number of interleaved channels, or `None` for compressed data.
    pub fn channels(self) -> Option<u8> {
        match self {
            Encoding::Rgb8 | Encoding::Bgr8 => Some(3),
            Encoding::Mono8 => Some(1),
            Encoding::Compressed => None,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Rgb8 => "rgb8",
            Encoding::Bgr8 => "bgr8",
            Encoding::Mono8 => "mono8",
            Encoding::Compressed => "compressed",
        })
    }
}

/// One frame as delivered by the sensor stream, before decoding.
#[derive(Clone, PartialEq, Eq)]
pub struct RawFrame {
    pub width: u32,
    pub height: u32,
    pub encoding: Encoding,
    pub data: Vec<u8>,
}

impl RawFrame {
    pub fn new(width: u32, height: u32, encoding: Encoding, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            encoding,
            data,
        }
    }

    pub fn compressed(data: Vec<u8>) -> Self {
        Self::new(0, 0, Encoding::Compressed, data)
    }
}

// Pixel data is omitted; frames are large.
impl fmt::Debug for RawFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("encoding", &self.encoding)
            .field("len", &self.data.len())
            .finish()
    }
}

#[async_trait]
#[auto_impl(Box, Arc)]
pub trait FrameSource: Send + Sync {
    /// Returns `None` once the stream has ended.
    async fn next_frame(&self) -> Option<RawFrame>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding() {
        assert_eq!(Encoding::Rgb8.channels(), Some(3));
        assert_eq!(Encoding::Bgr8.channels(), Some(3));
        assert_eq!(Encoding::Mono8.channels(), Some(1));
        assert_eq!(Encoding::Compressed.channels(), None);
        assert_eq!(Encoding::Bgr8.to_string(), "bgr8");
    }

    #[test]
    fn test_debug_omits_data() {
        let frame = RawFrame::new(2, 1, Encoding::Rgb8, vec![0; 6]);
        assert_eq!(
            format!("{frame:?}"),
            "RawFrame { width: 2, height: 1, encoding: Rgb8, len: 6 }"
        );
    }
}
