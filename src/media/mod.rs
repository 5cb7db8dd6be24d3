pub mod kind;
pub mod select;

pub use kind::MediaKind;
