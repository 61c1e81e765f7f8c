//! Output generation for the host page.
//!
//! # Submodules
//!
//! - [`cards`]: Renders articles and endpoint errors as HTML fragments
//! - [`page`]: The host page, its display container, and writing it to disk
//!
//! # Output Structure
//!
//! ```text
//! <!DOCTYPE html>
//! └── body
//!     └── div#articles
//!         ├── p              (error reported by an endpoint)
//!         ├── div.card       (one per article, in endpoint order)
//!         └── ...
//! ```

pub mod cards;
pub mod page;
