// Positional CSV codec for address book rows: id,first,last,email,phone.
// No header, no quoting. A comma inside a field shifts every later column.

use crate::modules::address_book::core::record::Record;

pub fn to_csv_line(record: &Record) -> String {
    [
        record.id.as_str(),
        record.first_name.as_str(),
        record.last_name.as_str(),
        record.email.as_str(),
        record.phone.as_str(),
    ]
    .join(",")
}

/// Parses one row. Missing trailing columns stay empty; columns past the fifth are dropped.
pub fn parse_csv_line(line: &str) -> Record {
    let mut record = Record::default();
    for (column, value) in line.split(',').enumerate() {
        let value = value.to_string();
        match column {
            0 => record.id = value,
            1 => record.first_name = value,
            2 => record.last_name = value,
            3 => record.email = value,
            4 => record.phone = value,
            _ => {
                tracing::debug!(column, line, "ignoring extra csv column");
            }
        }
    }
    record
}
