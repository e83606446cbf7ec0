//! Single pass over the input stream.

use crate::allowlist::AllowList;
use crate::error::ExtCountError;
use crate::extract::extract_extension;
use crate::tally::ExtensionTally;
use std::io::BufRead;

/// Per-run counters, logged but never printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessStats {
    pub lines_read: u64,
    pub lines_matched: u64,
}

/// Read `reader` to end of stream and tally the allow-listed extension of each line.
///
/// Lines end at `\n`; one trailing `\r` is dropped. Input is read as bytes and
/// decoded lossily, so non-UTF-8 lines simply fail to match. Any read error
/// aborts the whole run: the partial tally is discarded.
pub fn process_lines<R: BufRead>(
    mut reader: R,
    allowed: &AllowList,
) -> Result<(ExtensionTally, ProcessStats), ExtCountError> {
    let mut tally = ExtensionTally::new();
    let mut stats = ProcessStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(ExtCountError::StreamRead)?;
        if n == 0 {
            break;
        }
        stats.lines_read += 1;

        let line = strip_line_ending(&buf);
        let url = String::from_utf8_lossy(line);
        if let Some(ext) = extract_extension(&url, allowed) {
            tracing::trace!(%url, %ext, "matched");
            stats.lines_matched += 1;
            tally.record(ext);
        }
    }

    Ok((tally, stats))
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Read};

    fn allowed() -> AllowList {
        [".jpg", ".png", ".gif"].into_iter().collect()
    }

    #[test]
    fn end_to_end_tally() {
        let input = "a.jpg\nb.jpg\nc.png\nd.gif\ne.txt\n";
        let (tally, stats) = process_lines(input.as_bytes(), &allowed()).unwrap();
        assert_eq!(tally.get(".jpg"), 2);
        assert_eq!(tally.get(".png"), 1);
        assert_eq!(tally.get(".gif"), 1);
        assert_eq!(tally.get(".txt"), 0);
        assert_eq!(tally.len(), 3);
        assert_eq!(stats, ProcessStats { lines_read: 5, lines_matched: 4 });

        let report = tally.into_report();
        assert_eq!(report[0].extension, ".jpg");
        assert_eq!(report[0].count, 2);
    }

    #[test]
    fn empty_input() {
        let (tally, stats) = process_lines(io::empty(), &allowed()).unwrap();
        assert!(tally.is_empty());
        assert_eq!(stats.lines_read, 0);
    }

    #[test]
    fn crlf_and_missing_final_newline() {
        let input = "a.JPG\r\nb.png\r\nc.gif";
        let (tally, stats) = process_lines(input.as_bytes(), &allowed()).unwrap();
        assert_eq!(stats.lines_read, 3);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.get(".jpg"), 1);
    }

    #[test]
    fn invalid_utf8_line_is_skipped_not_fatal() {
        let input: &[u8] = b"\xff\xfe.jpg\xff\nok.png\n";
        let (tally, stats) = process_lines(input, &allowed()).unwrap();
        assert_eq!(stats.lines_read, 2);
        assert_eq!(tally.get(".png"), 1);
        assert_eq!(tally.get(".jpg"), 0);
    }

    #[test]
    fn long_line_is_fine() {
        let mut input = "x".repeat(1 << 20);
        input.push_str(".gif\n");
        let (tally, _) = process_lines(input.as_bytes(), &allowed()).unwrap();
        assert_eq!(tally.get(".gif"), 1);
    }

    /// Yields some data, then fails.
    struct FailAfter {
        data: &'static [u8],
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::Other, "device gone"));
            }
            let n = self.data.len().min(buf.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn read_error_aborts() {
        let reader = BufReader::new(FailAfter { data: b"a.jpg\nb.png\n" });
        let err = process_lines(reader, &allowed()).unwrap_err();
        assert!(matches!(err, ExtCountError::StreamRead(_)));
        assert_eq!(err.to_string(), "Error reading from stdin: device gone");
    }
}
