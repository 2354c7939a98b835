//! CSV output.
//!
//! UTF-8 with a byte-order mark so spreadsheet tools pick up the Korean
//! header text. Column order is fixed.

use crate::{
    error::GenResult,
    types::{Amount, PaymentRecord, TIMESTAMP_FORMAT},
};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const HEADER: [&str; 8] = [
    "매장명", "승인번호", "금액", "결제수단", "상태", "배달여부", "승인일시", "취소일시",
];

/// One CSV row. Field names become the header row.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "매장명")]
    store_name: &'a str,
    #[serde(rename = "승인번호")]
    authorization_code: &'a str,
    #[serde(rename = "금액")]
    amount: Amount,
    #[serde(rename = "결제수단")]
    payment_method: &'static str,
    #[serde(rename = "상태")]
    status: &'static str,
    #[serde(rename = "배달여부")]
    order_type: &'static str,
    #[serde(rename = "승인일시")]
    approval_time: String,
    #[serde(rename = "취소일시")]
    canceled_at: String,
}

impl<'a> From<&'a PaymentRecord> for CsvRow<'a> {
    fn from(r: &'a PaymentRecord) -> Self {
        Self {
            store_name: &r.store_name,
            authorization_code: &r.authorization_code,
            amount: r.amount,
            payment_method: r.payment_method.code(),
            status: r.status.code(),
            order_type: r.order_type.label(),
            approval_time: r.approval_time.format(TIMESTAMP_FORMAT).to_string(),
            canceled_at: r
                .canceled_at
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}

/// Write BOM, header and one row per record to `out`.
pub fn write_records<W: Write>(records: &[PaymentRecord], mut out: W) -> GenResult<()> {
    out.write_all(UTF8_BOM)?;
    let mut table = csv::Writer::from_writer(out);
    if records.is_empty() {
        // serialize() only emits the header alongside the first row.
        table.write_record(HEADER)?;
    }
    for record in records {
        table.serialize(CsvRow::from(record))?;
    }
    table.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the table. The file is flushed
/// and closed before this returns.
pub fn write_csv_file(path: impl AsRef<Path>, records: &[PaymentRecord]) -> GenResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_records(records, BufWriter::new(file))?;
    log::info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderType, PaymentMethod, PaymentStatus};
    use chrono::NaiveDate;

    fn record(canceled: bool) -> PaymentRecord {
        let approval = NaiveDate::from_ymd_opt(2024, 7, 4)
            .unwrap()
            .and_hms_opt(18, 5, 9)
            .unwrap();
        PaymentRecord {
            store_name: "카카온 테스트 매장".into(),
            authorization_code: "24070400042".into(),
            amount: 23_000,
            payment_method: PaymentMethod::KakaoPay,
            status: if canceled { PaymentStatus::Canceled } else { PaymentStatus::Approved },
            order_type: OrderType::Delivery,
            approval_time: approval,
            canceled_at: canceled.then(|| approval + chrono::Duration::hours(2)),
        }
    }

    fn render(records: &[PaymentRecord]) -> Vec<u8> {
        let mut buf = Vec::new();
        write_records(records, &mut buf).unwrap();
        buf
    }

    #[test]
    fn starts_with_bom_and_korean_header() {
        let buf = render(&[record(false)]);
        assert!(buf.starts_with(UTF8_BOM));
        let text = String::from_utf8(buf[UTF8_BOM.len()..].to_vec()).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, HEADER.join(","));
    }

    #[test]
    fn row_layout() {
        let buf = render(&[record(false), record(true)]);
        let text = String::from_utf8(buf[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "카카온 테스트 매장,24070400042,23000,KAKAOPAY,APPROVED,배달,2024-07-04 18:05:09,"
        );
        assert_eq!(
            lines[2],
            "카카온 테스트 매장,24070400042,23000,KAKAOPAY,CANCELED,배달,2024-07-04 18:05:09,2024-07-04 20:05:09"
        );
    }

    #[test]
    fn empty_table_still_has_header() {
        let buf = render(&[]);
        let text = String::from_utf8(buf[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text.trim_end(), HEADER.join(","));
    }
}
