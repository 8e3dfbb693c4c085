use crate::domain::model::{ProjectedRecord, ProjectionSummary};
use crate::utils::error::{FilterError, Result};
use csv::{QuoteStyle, StringRecord, Terminator};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::time::Instant;

const PROGRESS_INTERVAL: u64 = 100_000;

/// Project the gazetteer at `input_path` into a 4-column CSV at `output_path`.
///
/// The input is opened before the output is created, so a missing input
/// never truncates an existing output. On error the output may hold the
/// records written before the failing line.
pub fn project(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<ProjectionSummary> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();
    let input_label = input_path.display().to_string();
    let output_label = output_path.display().to_string();

    let input = File::open(input_path).map_err(|source| FilterError::FileNotFound {
        path: input_label.clone(),
        source,
    })?;
    let output = File::create(output_path).map_err(|source| FilterError::Io {
        path: output_label.clone(),
        source,
    })?;

    tracing::debug!("Projecting {} -> {}", input_label, output_label);
    run(input, output, &input_label, &output_label)
}

/// Same transform as [`project`] over arbitrary streams.
///
/// # Example
/// ```
/// # use gazetteer_filter::project_stream;
/// let source = "1\tLondon\tLON\tx\t51.5\t-0.1\tx\tx\tGB\tx\tx\n";
/// let mut sink = vec![];
///
/// let summary = project_stream(source.as_bytes(), &mut sink).unwrap();
///
/// assert_eq!(summary.records_written, 1);
/// assert_eq!(String::from_utf8(sink).unwrap(), "London,51.5,-0.1,GB\n");
/// ```
pub fn project_stream(source: impl Read, sink: impl Write) -> Result<ProjectionSummary> {
    run(source, sink, "<input>", "<output>")
}

fn run(
    source: impl Read,
    sink: impl Write,
    input_label: &str,
    output_label: &str,
) -> Result<ProjectionSummary> {
    let started = Instant::now();

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    let mut record = StringRecord::new();
    let mut records_written = 0u64;

    // 每一個實體行都是一筆紀錄，空行也不例外
    for (index, raw) in BufReader::new(source).split(b'\n').enumerate() {
        let line = index as u64 + 1;
        let mut raw = raw.map_err(|source| FilterError::Io {
            path: input_label.to_string(),
            source,
        })?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        let text = std::str::from_utf8(&raw).map_err(|_| FilterError::InvalidEncoding { line })?;
        split_fields(text, &mut record);

        let projected = ProjectedRecord::from_record(&record, line)?;
        writer
            .serialize(&projected)
            .map_err(|e| write_error(e, output_label))?;

        records_written += 1;
        if records_written % PROGRESS_INTERVAL == 0 {
            tracing::debug!("Projected {} records", records_written);
        }
    }

    writer.flush().map_err(|source| FilterError::Io {
        path: output_label.to_string(),
        source,
    })?;

    Ok(ProjectionSummary {
        records_written,
        elapsed: started.elapsed(),
    })
}

/// Raw tab split, no quoting. An empty line has no fields at all.
fn split_fields(text: &str, record: &mut StringRecord) {
    record.clear();
    if text.is_empty() {
        return;
    }
    for field in text.split('\t') {
        record.push_field(field);
    }
}

fn write_error(err: csv::Error, output_label: &str) -> FilterError {
    if !err.is_io_error() {
        return FilterError::Csv(err);
    }

    let source = match err.into_kind() {
        csv::ErrorKind::Io(source) => source,
        kind => std::io::Error::other(format!("{:?}", kind)),
    };
    FilterError::Io {
        path: output_label.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_str(input: &[u8]) -> Result<(ProjectionSummary, String)> {
        let mut sink = Vec::new();
        let summary = project_stream(input, &mut sink)?;
        Ok((summary, String::from_utf8(sink).unwrap()))
    }

    #[test]
    fn test_london_line() {
        let (summary, output) =
            project_str(b"1\tLondon\tLON\tx\t51.5\t-0.1\tx\tx\tGB\tx\tx\n").unwrap();
        assert_eq!(summary.records_written, 1);
        assert_eq!(output, "London,51.5,-0.1,GB\n");
    }

    #[test]
    fn test_last_line_without_newline() {
        let (_, output) = project_str(b"1\tLondon\tLON\tx\t51.5\t-0.1\tx\tx\tGB").unwrap();
        assert_eq!(output, "London,51.5,-0.1,GB\n");
    }

    #[test]
    fn test_empty_input() {
        let (summary, output) = project_str(b"").unwrap();
        assert_eq!(summary.records_written, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let input = "\
1\tParis\tx\tx\t48.85\t2.35\tx\tx\tFR\n\
2\tBerlin\tx\tx\t52.52\t13.40\tx\tx\tDE\n\
3\tParis\tx\tx\t48.85\t2.35\tx\tx\tFR\n";
        let (summary, output) = project_str(input.as_bytes()).unwrap();
        assert_eq!(summary.records_written, 3);
        assert_eq!(
            output,
            "Paris,48.85,2.35,FR\nBerlin,52.52,13.40,DE\nParis,48.85,2.35,FR\n"
        );
    }

    #[test]
    fn test_comma_in_name_is_quoted() {
        let (_, output) =
            project_str("1\tSaint-Denis, Réunion\tx\tx\t-20.88\t55.45\tx\tx\tRE\n".as_bytes())
                .unwrap();
        assert_eq!(output, "\"Saint-Denis, Réunion\",-20.88,55.45,RE\n");
    }

    #[test]
    fn test_quote_in_input_is_literal() {
        let (_, output) =
            project_str(b"1\tThe \"Hook\"\tx\tx\t1.0\t2.0\tx\tx\tUS\n").unwrap();
        assert_eq!(output, "\"The \"\"Hook\"\"\",1.0,2.0,US\n");
    }

    #[test]
    fn test_crlf_input_gives_lf_output() {
        let (_, output) = project_str(
            b"1\tA\tx\tx\t1\t2\tx\tx\tAA\r\n2\tB\tx\tx\t3\t4\tx\tx\tBB\r\n",
        )
        .unwrap();
        assert_eq!(output, "A,1,2,AA\nB,3,4,BB\n");
    }

    #[test]
    fn test_short_line_reports_line_number() {
        let input = "\
1\tA\tx\tx\t1\t2\tx\tx\tAA\n\
2\tB\tx\tx\t3\t4\tx\tx\n";
        match project_str(input.as_bytes()) {
            Err(FilterError::MalformedRecord { line, found, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 8);
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_reports_line_number() {
        let mut input = b"1\tA\tx\tx\t1\t2\tx\tx\tAA\n".to_vec();
        input.extend_from_slice(b"2\tB\xff\tx\tx\t3\t4\tx\tx\tBB\n");
        match project_str(&input) {
            Err(FilterError::InvalidEncoding { line }) => assert_eq!(line, 2),
            other => panic!("expected InvalidEncoding, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let input = b"1\tA\tx\tx\t1\t2\tx\tx\tAA\n\n2\tB\tx\tx\t3\t4\tx\tx\tBB\n";
        match project_str(input) {
            Err(FilterError::MalformedRecord { line, found, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 0);
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_blank_line_is_malformed() {
        let input = b"1\tA\tx\tx\t1\t2\tx\tx\tAA\n\n";
        assert!(matches!(
            project_str(input),
            Err(FilterError::MalformedRecord { line: 2, found: 0, .. })
        ));
    }

    #[test]
    fn test_blank_crlf_line_is_malformed() {
        let input = b"1\tA\tx\tx\t1\t2\tx\tx\tAA\r\n\r\n";
        assert!(matches!(
            project_str(input),
            Err(FilterError::MalformedRecord { line: 2, found: 0, .. })
        ));
    }

    #[test]
    fn test_whitespace_line_is_malformed() {
        let input = b"1\tA\tx\tx\t1\t2\tx\tx\tAA\n   \n";
        assert!(matches!(
            project_str(input),
            Err(FilterError::MalformedRecord { line: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_tab_only_line_projects_empty_fields() {
        let (summary, output) = project_str(b"\t\t\t\t\t\t\t\t\n").unwrap();
        assert_eq!(summary.records_written, 1);
        assert_eq!(output, ",,,\n");
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let input = b"1\tA\tx\tx\t1\t2\tx\tx\tAA\n\n\n2\tB\tx\n";
        // 第 2 行就會失敗，但錯誤行號必須是實體行號
        assert!(matches!(
            project_str(input),
            Err(FilterError::MalformedRecord { line: 2, .. })
        ));

        let mut input = b"1\tA\tx\tx\t1\t2\tx\tx\tAA\n".to_vec();
        input.extend_from_slice(b"2\tB\tx\tx\t3\t4\tx\tx\tBB\r\n");
        input.extend_from_slice(b"3\tC\tx\tx\t5\t6\tx\tx\tCC\n");
        input.extend_from_slice(b"4\tD\xff\tx\tx\t7\t8\tx\tx\tDD\n");
        match project_str(&input) {
            Err(FilterError::InvalidEncoding { line }) => assert_eq!(line, 4),
            other => panic!("expected InvalidEncoding, got {:?}", other),
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        struct FullDisk;

        impl Write for FullDisk {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = project_stream(
            &b"1\tLondon\tLON\tx\t51.5\t-0.1\tx\tx\tGB\n"[..],
            FullDisk,
        );
        assert!(matches!(result, Err(FilterError::Io { .. })));
    }
}
