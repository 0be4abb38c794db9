/*!
 * Praat TextGrid parsing and querying.
 *
 * - `fields`: `<label> = <value>` extraction
 * - `cursor`: forward-only line cursor
 * - `records`: interval, point and tier header readers
 * - `parser`: tier and document parsers
 * - `model`: the parsed annotation document
 * - `query`: read-only queries over the document
 */

pub mod cursor;
pub mod fields;
pub mod model;
pub mod parser;
pub mod query;
pub mod records;

pub use model::{Entry, LabelOccurrences, ParseWarning, Span, TextGrid, Tier, TierKind};
pub use parser::{RecordPolicy, TextGridParser};
