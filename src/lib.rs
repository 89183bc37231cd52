//! Terminal RFC reader
//!
//! This crate fetches Request-for-Comments documents from the IETF, keeps a
//! locally cached copy of the master RFC index, and renders documents and
//! search results with ANSI highlighting.
//!
//! # Features
//!
//! - Free-text, case-insensitive search over the RFC index
//! - On-disk index snapshot with a 30-day freshness policy
//! - Full-text and metadata views of individual RFCs
//! - RFC-number underlining and configurable match colouring
//!
//! # Modules
//!
//! - [`client`]: HTTP access to the IETF index, document and metadata endpoints
//! - [`index`]: index snapshot caching and entry extraction
//! - [`search`]: query compilation and entry filtering
//! - [`highlight`]: ANSI annotation passes
//! - [`render`]: document, summary and search-result output

pub mod client;
pub mod error;
pub mod highlight;
pub mod index;
pub mod render;
pub mod search;
