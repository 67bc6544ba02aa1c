//! Linkage-table CSV interchange: the hand-off artifact an external
//! dendrogram renderer consumes. Operates on caller-supplied readers and
//! writers; this crate opens no files.

use crate::error::{PhyloError, PhyloResult};
use crate::phylo::linkage::LinkageRow;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::io::{Read, Write};
use std::str::FromStr;

const HEADERS: [&str; 4] = ["left", "right", "height", "count"];

pub fn write_linkage<W: Write>(writer: W, rows: &[LinkageRow]) -> PhyloResult<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.write_record(&[
            row.left.to_string(),
            row.right.to_string(),
            format!("{:.5}", row.height),
            row.size.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn read_linkage<R: Read>(reader: R) -> PhyloResult<Vec<LinkageRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let row = idx + 1;
        rows.push(LinkageRow {
            left: field(&record, 0, row, "left")?,
            right: field(&record, 1, row, "right")?,
            height: field(&record, 2, row, "height")?,
            size: field(&record, 3, row, "count")?,
        });
    }
    Ok(rows)
}

fn field<T: FromStr>(
    record: &StringRecord,
    idx: usize,
    row: usize,
    name: &'static str,
) -> PhyloResult<T> {
    record
        .get(idx)
        .and_then(|s| s.trim().parse().ok())
        .ok_or(PhyloError::LinkageField { row, field: name })
}
