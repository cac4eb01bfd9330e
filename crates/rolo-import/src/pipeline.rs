use crate::error::{ImportError, Result};
use csv::ReaderBuilder;
use serde::Serialize;

/// Columns that must appear in the header line, exactly as written here.
pub const REQUIRED_HEADERS: [&str; 3] = ["name", "email", "phone"];

const OPTIONAL_HEADERS: [&str; 4] = ["company", "title", "address", "notes"];

/// The downloadable template: the full header line and nothing else.
pub const TEMPLATE: &str = "name,email,phone,company,title,address,notes\n";

pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Destination for validated rows. One insert per call, in batch order.
pub trait ContactSink {
    fn insert_contact(&mut self, row: &ImportRow) -> std::result::Result<(), SinkError>;
}

/// One validated line of the uploaded file, phone already canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportProgress {
    pub imported: usize,
    pub total: usize,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub total: usize,
    pub skipped: usize,
    pub warnings: Vec<String>,
}

/// Canonical form for imported phones: a leading `+` followed by every digit
/// of the input, all other characters dropped. Already-canonical values pass
/// through unchanged.
pub fn format_import_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push('+');
    for ch in trimmed.chars() {
        if ch.is_ascii_digit() {
            out.push(ch);
        }
    }
    out
}

/// Run one import over the uploaded file contents: parse, validate the
/// header, drop invalid rows, then insert the survivors one at a time in
/// file order, reporting progress after every successful insert.
///
/// A failed insert aborts the run; rows inserted before the failure stay
/// committed. The batch is deliberately not transactional so that the
/// progress a caller has observed always matches what is in storage.
pub fn run_import<S, F>(data: &str, sink: &mut S, mut on_progress: F) -> Result<ImportSummary>
where
    S: ContactSink,
    F: FnMut(ImportProgress),
{
    let batch = parse_batch(data)?;
    if batch.rows.is_empty() {
        return Err(ImportError::NoValidRows);
    }

    let total = batch.rows.len();
    let mut imported = 0;

    for row in &batch.rows {
        sink.insert_contact(row).map_err(ImportError::Insert)?;
        imported += 1;
        on_progress(ImportProgress {
            imported,
            total,
            percent: percent_of(imported, total),
        });
    }

    Ok(ImportSummary {
        imported,
        total,
        skipped: batch.skipped,
        warnings: batch.warnings,
    })
}

struct ParsedBatch {
    rows: Vec<ImportRow>,
    skipped: usize,
    warnings: Vec<String>,
}

fn parse_batch(data: &str) -> Result<ParsedBatch> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.to_string())
        .collect();
    validate_headers(&headers)?;

    let column = |name: &str| headers.iter().position(|header| header == name);
    let name_col = column("name").expect("validated header");
    let email_col = column("email").expect("validated header");
    let phone_col = column("phone").expect("validated header");
    let optional_cols: Vec<(usize, &str)> = OPTIONAL_HEADERS
        .iter()
        .filter_map(|header| column(header).map(|index| (index, *header)))
        .collect();

    let mut rows = Vec::new();
    let mut skipped = 0;
    let mut warnings = Vec::new();

    for (index, record) in reader.records().enumerate() {
        // Structural errors (ragged rows, broken quoting) abort the file.
        let record = record?;
        let field = |col: usize| record.get(col).unwrap_or("").trim();

        let mut missing: Vec<&str> = Vec::new();
        for (col, label) in [
            (name_col, "name"),
            (email_col, "email"),
            (phone_col, "phone"),
        ] {
            if field(col).is_empty() {
                missing.push(label);
            }
        }

        if !missing.is_empty() {
            skipped += 1;
            warnings.push(format!("row {}: missing {}", index + 1, missing.join(", ")));
            continue;
        }

        let mut row = ImportRow {
            name: field(name_col).to_string(),
            email: field(email_col).to_string(),
            phone: format_import_phone(field(phone_col)),
            company: None,
            title: None,
            address: None,
            notes: None,
        };
        for (col, header) in &optional_cols {
            let value = field(*col);
            if value.is_empty() {
                continue;
            }
            let slot = match *header {
                "company" => &mut row.company,
                "title" => &mut row.title,
                "address" => &mut row.address,
                _ => &mut row.notes,
            };
            *slot = Some(value.to_string());
        }
        rows.push(row);
    }

    Ok(ParsedBatch {
        rows,
        skipped,
        warnings,
    })
}

fn validate_headers(headers: &[String]) -> Result<()> {
    let missing: Vec<String> = REQUIRED_HEADERS
        .iter()
        .filter(|required| !headers.iter().any(|header| header == *required))
        .map(|required| required.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportError::MissingHeaders(missing))
    }
}

fn percent_of(imported: usize, total: usize) -> u8 {
    ((imported * 100) as f64 / total as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::{
        format_import_phone, run_import, ContactSink, ImportProgress, ImportRow, SinkError,
        TEMPLATE,
    };
    use crate::error::ImportError;

    #[derive(Default)]
    struct MemorySink {
        inserted: Vec<ImportRow>,
        fail_on: Option<usize>,
    }

    impl ContactSink for MemorySink {
        fn insert_contact(&mut self, row: &ImportRow) -> Result<(), SinkError> {
            if self.fail_on == Some(self.inserted.len() + 1) {
                return Err("storage unreachable".into());
            }
            self.inserted.push(row.clone());
            Ok(())
        }
    }

    fn run_with_progress(
        data: &str,
        sink: &mut MemorySink,
    ) -> (
        Result<super::ImportSummary, ImportError>,
        Vec<ImportProgress>,
    ) {
        let mut events = Vec::new();
        let result = run_import(data, sink, |progress| events.push(progress));
        (result, events)
    }

    #[test]
    fn format_phone_prepends_plus_to_bare_digits() {
        assert_eq!(format_import_phone("1234567890"), "+1234567890");
    }

    #[test]
    fn format_phone_strips_separators() {
        assert_eq!(format_import_phone("+44 123-456"), "+44123456");
        assert_eq!(format_import_phone("  (415) 555-1234 "), "+4155551234");
    }

    #[test]
    fn format_phone_is_idempotent_on_canonical_input() {
        assert_eq!(format_import_phone("+1234567890"), "+1234567890");
    }

    #[test]
    fn missing_header_aborts_before_any_insert() {
        let mut sink = MemorySink::default();
        let data = "email,phone\na@x.com,123\n";
        let (result, events) = run_with_progress(data, &mut sink);
        let err = result.unwrap_err();
        match err {
            ImportError::MissingHeaders(missing) => assert_eq!(missing, vec!["name".to_string()]),
            other => panic!("expected MissingHeaders, got {other:?}"),
        }
        assert!(sink.inserted.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn rows_missing_required_fields_are_dropped_with_warnings() {
        let mut sink = MemorySink::default();
        let data = "name,email,phone\nA,a@x.com,123\n,b@x.com,456\n";
        let (result, _) = run_with_progress(data, &mut sink);
        let summary = result.expect("summary");
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.warnings, vec!["row 2: missing name".to_string()]);
        assert_eq!(sink.inserted.len(), 1);
        assert_eq!(sink.inserted[0].name, "A");
    }

    #[test]
    fn all_rows_invalid_aborts_without_inserts() {
        let mut sink = MemorySink::default();
        let data = "name,email,phone\n,a@x.com,123\nB,,456\n";
        let (result, _) = run_with_progress(data, &mut sink);
        assert!(matches!(result.unwrap_err(), ImportError::NoValidRows));
        assert!(sink.inserted.is_empty());
    }

    #[test]
    fn progress_is_reported_in_order_after_each_insert() {
        let mut sink = MemorySink::default();
        let data = "name,email,phone\n\
                    A,a@x.com,1\n\
                    B,b@x.com,2\n\
                    C,c@x.com,3\n\
                    D,d@x.com,4\n";
        let (result, events) = run_with_progress(data, &mut sink);
        result.expect("summary");
        let percents: Vec<u8> = events.iter().map(|event| event.percent).collect();
        assert_eq!(percents, vec![25, 50, 75, 100]);
        let counts: Vec<usize> = events.iter().map(|event| event.imported).collect();
        assert_eq!(counts, vec![1, 2, 3, 4]);
    }

    #[test]
    fn failed_insert_keeps_committed_prefix_and_stops() {
        let mut sink = MemorySink {
            fail_on: Some(2),
            ..Default::default()
        };
        let data = "name,email,phone\n\
                    A,a@x.com,1\n\
                    B,b@x.com,2\n\
                    C,c@x.com,3\n";
        let (result, events) = run_with_progress(data, &mut sink);
        assert!(matches!(result.unwrap_err(), ImportError::Insert(_)));
        assert_eq!(sink.inserted.len(), 1);
        assert_eq!(sink.inserted[0].name, "A");
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn ragged_rows_abort_the_whole_file() {
        let mut sink = MemorySink::default();
        let data = "name,email,phone\nA,a@x.com,123\nB,b@x.com\n";
        let (result, _) = run_with_progress(data, &mut sink);
        assert!(matches!(result.unwrap_err(), ImportError::Csv(_)));
    }

    #[test]
    fn single_row_import_end_to_end() {
        let mut sink = MemorySink::default();
        let data = "name,email,phone\nJane Doe,jane@x.com,+14155551234\n";
        let (result, events) = run_with_progress(data, &mut sink);
        let summary = result.expect("summary");
        assert_eq!(summary.imported, 1);
        assert_eq!(events, vec![ImportProgress {
            imported: 1,
            total: 1,
            percent: 100,
        }]);
        assert_eq!(sink.inserted.len(), 1);
        assert_eq!(sink.inserted[0].phone, "+14155551234");
        assert_eq!(sink.inserted[0].email, "jane@x.com");
    }

    #[test]
    fn optional_columns_are_carried_through() {
        let mut sink = MemorySink::default();
        let data = "name,email,phone,company,notes\nJane,j@x.com,123,Acme,VIP\n";
        let (result, _) = run_with_progress(data, &mut sink);
        result.expect("summary");
        assert_eq!(sink.inserted[0].company.as_deref(), Some("Acme"));
        assert_eq!(sink.inserted[0].notes.as_deref(), Some("VIP"));
        assert_eq!(sink.inserted[0].title, None);
    }

    #[test]
    fn template_is_the_header_line_only() {
        assert_eq!(TEMPLATE.lines().count(), 1);
        assert!(TEMPLATE.starts_with("name,email,phone"));
    }
}
