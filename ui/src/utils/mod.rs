pub mod colors;
pub mod highlight;
