pub mod error;
pub mod bits;
pub mod walk;
pub mod histogram;
pub mod charset;
pub mod render;

pub use render::render;
