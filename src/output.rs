use crate::config::OutputFormat;
use crate::error::Result;
use crate::form::MovieRecord;
use std::io::Write;

/// Writes the records collected during a session to `out`. Nothing is
/// written when no record was added.
pub fn write_records(format: OutputFormat, records: &[MovieRecord], out: &mut impl Write) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    match format {
        OutputFormat::Json => {
            for record in records {
                serde_json::to_writer(&mut *out, record)?;
                out.write_all(b"\n")?;
            }
        }
        OutputFormat::JsonPretty => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            out.write_all(b"\n")?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, records)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_records;
    use crate::config::OutputFormat;
    use crate::form::MovieRecord;

    fn records() -> Vec<MovieRecord> {
        vec![
            MovieRecord {
                title: "Inception".to_string(),
                img_url: "https://img".to_string(),
                imdb_url: "https://imdb".to_string(),
                imdb_id: "tt1".to_string(),
                ..MovieRecord::default()
            },
            MovieRecord {
                title: "Heat".to_string(),
                description: "LA crime".to_string(),
                img_url: "https://img2".to_string(),
                imdb_url: "https://imdb2".to_string(),
                imdb_id: "tt2".to_string(),
            },
        ]
    }

    fn render(format: OutputFormat, records: &[MovieRecord]) -> String {
        let mut out = Vec::new();
        write_records(format, records, &mut out).expect("write");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn json_writes_one_line_per_record() {
        let text = render(OutputFormat::Json, &records());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: MovieRecord = serde_json::from_str(lines[0]).expect("parse");
        assert_eq!(first, records()[0]);
        assert!(lines[1].contains("\"imdbId\":\"tt2\""));
    }

    #[test]
    fn pretty_json_and_yaml_parse_back() {
        let pretty = render(OutputFormat::JsonPretty, &records());
        let parsed: Vec<MovieRecord> = serde_json::from_str(&pretty).expect("json");
        assert_eq!(parsed, records());

        let yaml = render(OutputFormat::Yaml, &records());
        let parsed: Vec<MovieRecord> = serde_yaml::from_str(&yaml).expect("yaml");
        assert_eq!(parsed, records());
    }

    #[test]
    fn empty_session_prints_nothing() {
        assert_eq!(render(OutputFormat::JsonPretty, &[]), "");
    }
}
