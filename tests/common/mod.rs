/*!
 * Common test utilities for the tgquery test suite
 */

#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

/// Routes library log output through the test harness (RUST_LOG controls the level)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Tier description used to generate TextGrid fixtures
pub enum TestTier<'a> {
    Interval {
        name: &'a str,
        start: f64,
        end: f64,
        intervals: Vec<(f64, f64, &'a str)>,
    },
    Point {
        name: &'a str,
        start: f64,
        end: f64,
        points: Vec<(f64, &'a str)>,
    },
}

/// Renders a long-format TextGrid the way Praat writes it
pub fn build_textgrid(xmin: f64, xmax: f64, tiers: &[TestTier<'_>]) -> String {
    let mut out = String::new();
    writeln!(out, "File type = \"ooTextFile\"").unwrap();
    writeln!(out, "Object class = \"TextGrid\"").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "xmin = {} ", xmin).unwrap();
    writeln!(out, "xmax = {} ", xmax).unwrap();
    writeln!(out, "tiers? <exists> ").unwrap();
    writeln!(out, "size = {} ", tiers.len()).unwrap();
    writeln!(out, "item []: ").unwrap();

    for (i, tier) in tiers.iter().enumerate() {
        writeln!(out, "    item [{}]:", i + 1).unwrap();
        match tier {
            TestTier::Interval { name, start, end, intervals } => {
                writeln!(out, "        class = \"IntervalTier\" ").unwrap();
                writeln!(out, "        name = \"{}\" ", name).unwrap();
                writeln!(out, "        xmin = {} ", start).unwrap();
                writeln!(out, "        xmax = {} ", end).unwrap();
                writeln!(out, "        intervals: size = {} ", intervals.len()).unwrap();
                for (k, (from, to, text)) in intervals.iter().enumerate() {
                    writeln!(out, "        intervals [{}]:", k + 1).unwrap();
                    writeln!(out, "            xmin = {} ", from).unwrap();
                    writeln!(out, "            xmax = {} ", to).unwrap();
                    writeln!(out, "            text = \"{}\" ", text).unwrap();
                }
            }
            TestTier::Point { name, start, end, points } => {
                writeln!(out, "        class = \"TextTier\" ").unwrap();
                writeln!(out, "        name = \"{}\" ", name).unwrap();
                writeln!(out, "        xmin = {} ", start).unwrap();
                writeln!(out, "        xmax = {} ", end).unwrap();
                writeln!(out, "        points: size = {} ", points.len()).unwrap();
                for (k, (time, mark)) in points.iter().enumerate() {
                    writeln!(out, "        points [{}]:", k + 1).unwrap();
                    writeln!(out, "            number = {} ", time).unwrap();
                    writeln!(out, "            mark = \"{}\" ", mark).unwrap();
                }
            }
        }
    }
    out
}

/// Document with one interval tier "phones": (0, 5, "a"), (5, 13.664, "b")
pub fn phones_textgrid() -> String {
    build_textgrid(
        0.0,
        13.664,
        &[TestTier::Interval {
            name: "phones",
            start: 0.0,
            end: 13.664,
            intervals: vec![(0.0, 5.0, "a"), (5.0, 13.664, "b")],
        }],
    )
}

/// Document with an interval tier "phones" and a point tier "events"
pub fn mixed_textgrid() -> String {
    build_textgrid(
        0.0,
        10.0,
        &[
            TestTier::Interval {
                name: "phones",
                start: 0.0,
                end: 10.0,
                intervals: vec![
                    (0.0, 1.5, "sil"),
                    (1.5, 3.0, "a"),
                    (3.0, 4.25, "b"),
                    (4.25, 7.0, "a"),
                    (7.0, 10.0, "sil"),
                ],
            },
            TestTier::Point {
                name: "events",
                start: 0.0,
                end: 10.0,
                points: vec![(2.5, "ep"), (6.0, "click")],
            },
        ],
    )
}
