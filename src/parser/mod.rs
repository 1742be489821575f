//! Resume text parsing module.

mod builder;
mod classifier;
mod ids;
mod scanner;

pub use builder::DocumentBuilder;
pub use classifier::{
    classify_content, is_date_fragment, match_section_header, split_header, split_skill,
    strip_markup, ContentClass,
};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use scanner::LineScanner;
