//! Command-line front end for the cardbridge converters.
//!
//! The format core is pure text-in/text-out; this crate supplies the
//! side-effecting collaborators around it: reading the selected file,
//! saving the generated document, and packaging split output into a zip
//! archive.

pub mod archive;
pub mod cli;
