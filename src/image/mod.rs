pub mod field;
pub mod io;
pub mod pixel;
pub mod rgba;

pub use self::field::{GradientCell, GradientField};
pub use self::io::{Codec, DecodedRaster, PngCodec};
pub use self::pixel::{Channel, Pixel};
pub use self::rgba::RgbaBuffer;
