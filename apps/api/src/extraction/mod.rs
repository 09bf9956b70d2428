// Heuristic text extraction: each submodule is an independent pattern matcher
// over plain text. Nothing here returns an error; unstructured input degrades
// to empty values.

pub mod contact;
pub mod education;
pub mod experience;
pub mod jd_parser;
pub mod lexicon;
pub mod resume_parser;
pub mod seniority;
pub mod skills;
