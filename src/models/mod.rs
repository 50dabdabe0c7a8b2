pub mod genre;
pub mod question;

pub use genre::Genre;
pub use question::{LocalizedText, QuestionRecord};
