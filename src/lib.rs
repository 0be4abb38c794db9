/*!
 * # tgquery - TextGrid annotation parser and query tool
 *
 * A Rust library for reading Praat TextGrid files and querying their tiers.
 *
 * ## Features
 *
 * - Parse the long TextGrid text format (interval and point tiers)
 * - List tiers with their kinds and time bounds
 * - Retrieve a tier's labeled boundaries and derived spans
 * - Find every occurrence of a label with its duration
 * - Lenient or strict handling of malformed records
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `textgrid`: TextGrid parsing and querying:
 *   - `textgrid::fields`: Field extraction from `<label> = <value>` lines
 *   - `textgrid::records`: Interval, point and tier header readers
 *   - `textgrid::parser`: Tier and document parsers
 *   - `textgrid::model`: The parsed annotation document
 *   - `textgrid::query`: Read-only queries
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## Example
 *
 * ```no_run
 * use tgquery::TextGrid;
 *
 * let grid = TextGrid::from_path("speech.TextGrid")?;
 * if let Some(found) = grid.label_occurrences("a", "phones")? {
 *     println!("{} occurrences, {:.3}s in total", found.count(), found.total_duration());
 * }
 * # Ok::<(), tgquery::TextGridError>(())
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod file_utils;
pub mod textgrid;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, TextGridError};
pub use textgrid::{
    Entry, LabelOccurrences, ParseWarning, RecordPolicy, Span, TextGrid, TextGridParser, Tier,
    TierKind,
};
