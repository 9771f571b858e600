//! Fixed-layout printable report assembly.
//!
//! The document is fully self-contained: inline styles, a static logo
//! reference, and an immediate print trigger. Output is byte-identical for
//! identical (records, report date, render time) inputs.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::models::WeldingRecord;

const DOCUMENT_HEAD: &str = r#"<html>
  <head>
    <title>Cetak Data</title>
    <style>
      body { font-family: Arial, sans-serif; padding: 40px; }
      .kop { display: flex; align-items: center; border-bottom: 2.5px solid #000; padding-bottom: 10px; margin-bottom: 40px; }
      .kop img { width: 80px; height: 80px; margin-right: 20px; }
      .kop-info h1 { font-size: 22px; color: #003366; margin: 0; }
      .kop-info h2 { font-size: 16px; margin: 0; color: #003366; font-weight: normal; }
      .kop-info p { font-size: 12px; margin: 0; }
      .kop-info a { color: blue; text-decoration: none; }
      table { border-collapse: collapse; margin-top: 10px; }
      th, td { border: 1px solid #000; padding: 6px; font-size: 12px; text-align: center; }
      th { background-color: #f2f2f2; }
      .footer { margin-top: 60px; font-size: 12px; text-align: right; }
    </style>
  </head>
  <body>
"#;

const LETTERHEAD: &str = r#"    <div class="kop">
      <img src="poltek.png" alt="Logo" />
      <div class="kop-info">
        <h1>POLITEKNIK PURBAYA</h1>
        <h2>POLITEKNIK TEKNOPRENEUR</h2>
        <p>
          Kampus I: Jl. Pancakarya No.1 Kajen, Talang &ndash; Tegal 52193<br />
          Kampus II: Jl. Supriyadi No. 72 Trayeman, Slawi &ndash; Tegal 52414<br />
          Telp. (0283) 4546201, HP: 0821 1146 0080<br />
          Laman: <a href="http://www.purbaya.ac.id">www.purbaya.ac.id</a>, Email: <a href="mailto:info@purbaya.ac.id">info@purbaya.ac.id</a>
        </p>
      </div>
    </div>
"#;

const TABLE_HEADER: &str = r#"    <table style="width: 100%;">
      <thead>
        <tr>
          <th>ID</th>
          <th>Waktu</th>
          <th>Min (V)</th>
          <th>Max (V)</th>
          <th>Rata-rata (V)</th>
          <th>Durasi</th>
          <th>Operator</th>
        </tr>
      </thead>
      <tbody>
"#;

const ANNOTATION_TABLE: &str = r#"    <table style="width: 100%; margin-top: 40px; border-collapse: collapse;">
      <thead>
        <tr>
          <th style="width: 80%; border: 1px solid #000; padding: 10px; text-align: center;">Catatan</th>
          <th style="width: 20%; border: 1px solid #000; padding: 10px; text-align: center;">Penggunaan Ampere</th>
        </tr>
      </thead>
      <tbody>
        <tr style="height: 150px;">
          <td style="border: 1px solid #000;"></td>
          <td style="border: 1px solid #000;"></td>
        </tr>
      </tbody>
    </table>
"#;

const PRINT_TRIGGER: &str = r#"    <script>window.onload = () => window.print();</script>
  </body>
</html>
"#;

const MONTH_NAMES_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Build the complete printable report.
///
/// The title block carries the SELECTED date; the footer carries the render
/// time. Rows appear in the order given, timestamps shown in the wall-clock
/// time of `rendered_at`'s timezone, voltages to one decimal place.
pub fn render_report<Tz: TimeZone>(
    records: &[WeldingRecord],
    report_date: NaiveDate,
    rendered_at: &DateTime<Tz>,
) -> String {
    let mut doc = String::new();
    doc.push_str(DOCUMENT_HEAD);
    doc.push_str(LETTERHEAD);

    doc.push_str("    <h3 style=\"text-align:center;\">Laporan Monitoring Tegangan Pengelasan</h3>\n");
    doc.push_str(&format!(
        "    <p><strong>Tanggal:</strong> {}</p>\n",
        report_date.format("%d/%m/%Y")
    ));

    doc.push_str(TABLE_HEADER);
    for record in records {
        let shown_at = record
            .timestamp
            .with_timezone(&rendered_at.timezone())
            .naive_local();
        doc.push_str(&format!(
            "        <tr>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{:.1}</td>\n          <td>{:.1}</td>\n          <td>{:.1}</td>\n          <td>{}</td>\n          <td>{}</td>\n        </tr>\n",
            record.id,
            shown_at.format("%d/%m/%Y %H:%M:%S"),
            record.min_voltage,
            record.max_voltage,
            record.avg_voltage,
            record.duration,
            record.operator,
        ));
    }
    doc.push_str("      </tbody>\n    </table>\n");

    doc.push_str(ANNOTATION_TABLE);

    let footer_date = rendered_at.naive_local().date();
    doc.push_str(&format!(
        "    <div class=\"footer\">\n      <p>Tegal, {:02} {} {}</p>\n      <p>Operator Praktik Pengelasan</p>\n      <br /><br /><br />\n      <p><strong>(______________________)</strong></p>\n      <p>NUPTK. .....................................</p>\n    </div>\n",
        footer_date.day(),
        MONTH_NAMES_ID[footer_date.month0() as usize],
        footer_date.year(),
    ));

    doc.push_str(PRINT_TRIGGER);
    doc
}
