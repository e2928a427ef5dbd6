pub mod analysis;
pub mod completion;
pub mod extract;
pub mod guard;
pub mod language;
pub mod prompt;
pub mod validation;
