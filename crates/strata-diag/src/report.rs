//! Shared report-file plumbing: overwrite warnings and the common
//! header line.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use strata_core::{DiagSink, Level, Rank, SimClock};

/// Create `path` for writing, emitting one overwrite warning on the
/// err stream when the file already exists. The file is truncated
/// either way.
pub(crate) fn create_report(path: &Path, diag: &mut DiagSink<'_>) -> io::Result<File> {
    if path.exists() {
        let _ = writeln!(
            diag.err(),
            "WARNING : the file \"{}\" already exists and will be overwritten !!",
            path.display()
        );
    }
    File::create(path)
}

/// Header line every exchange report starts with, followed by a blank
/// line.
pub(crate) fn write_report_header<W: Write>(
    w: &mut W,
    clock: SimClock,
    rank: Rank,
    level: Level,
) -> io::Result<()> {
    writeln!(
        w,
        "Time = {:13.7e}  Step = {}  Rank = {}  Level = {}",
        clock.time, clock.step, rank, level
    )?;
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_all_four_context_values() {
        let mut buf = Vec::new();
        write_report_header(&mut buf, SimClock::new(0.5, 12), Rank(3), Level(1)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("Time = "));
        assert!(header.contains("Step = 12"));
        assert!(header.contains("Rank = 3"));
        assert!(header.ends_with("Level = 1"));
        assert_eq!(lines.next(), Some(""));
    }
}
