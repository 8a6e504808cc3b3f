// Not every utils is used in every test, so we allow dead code
#![allow(unused_imports, dead_code)]

mod image_store;
pub use image_store::*;
mod test_setup;
pub use test_setup::*;
