pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod indented_code;
pub mod list_item;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuoteRule;
pub use code_fence::CodeFenceRule;
pub use heading::HeadingRule;
pub use indented_code::IndentedCodeRule;
pub use list_item::ListItemRule;
pub use paragraph::ParagraphRule;
pub use thematic_break::ThematicBreakRule;
