//! Utility functions for text shown in the terminal.
//!
//! - **Text**: Unicode-aware width, truncation, sentence case and control
//!   character stripping
//! - **Dates**: display formatting of ISO fixture dates
//!
//! # Examples
//!
//! ```
//! use magstand::util::{format_issue_date, sentence_case, truncate_to_width};
//!
//! assert_eq!(format_issue_date("2025-11-01"), "November 2025");
//! assert_eq!(sentence_case("FEATURE"), "Feature");
//! assert_eq!(truncate_to_width("Supermarket prices", 10), "Superma...");
//! ```

mod date;
mod text;

pub use date::{format_article_date, format_issue_date};
pub use text::{display_width, sentence_case, strip_control_chars, truncate_to_width};

/// Maximum search query length accepted from the search field.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 256;
