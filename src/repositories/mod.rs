mod directory;

pub use directory::{ContactDirectory, UpsertOutcome};
