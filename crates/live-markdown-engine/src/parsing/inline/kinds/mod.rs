pub mod autolink;
pub mod code_span;
pub mod emphasis;
pub mod hard_break;
pub mod image;
pub mod link;
pub mod strikethrough;

pub use autolink::Autolink;
pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use hard_break::HardBreak;
pub use image::Image;
pub use link::Link;
pub use strikethrough::Strikethrough;
