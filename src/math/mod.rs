pub mod color;

mod ray;
mod vec;

pub use color::*;
pub use ray::*;
pub use vec::*;
