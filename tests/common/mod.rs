//! Builds small but genuine xlsx packages for the integration tests.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
    /// Excel serial date, stored with the built-in `m/d/yyyy` number format.
    Date(f64),
    Blank,
}

pub type Sheet<'a> = (&'a str, Vec<Vec<Value<'a>>>);

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const DOC_REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Writes an xlsx workbook with the given sheets, in order.
pub fn write_xlsx(path: &Path, sheets: &[Sheet<'_>]) -> anyhow::Result<()> {
    let mut zip = ZipWriter::new(File::create(path)?);
    let overrides: String = (1..=sheets.len())
        .map(|i| {
            format!(
                r#"<Override PartName="/xl/worksheets/sheet{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
            )
        })
        .collect();
    zip.start_file("[Content_Types].xml", SimpleFileOptions::default())?;
    write!(
        zip,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>{overrides}</Types>"#
    )?;

    zip.start_file("_rels/.rels", SimpleFileOptions::default())?;
    write!(
        zip,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="{REL_NS}"><Relationship Id="rId1" Type="{DOC_REL_NS}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
    )?;

    let sheet_entries: String = sheets
        .iter()
        .enumerate()
        .map(|(i, (name, _))| {
            let n = i + 1;
            format!(r#"<sheet name="{}" sheetId="{n}" r:id="rId{n}"/>"#, escape(name))
        })
        .collect();
    zip.start_file("xl/workbook.xml", SimpleFileOptions::default())?;
    write!(
        zip,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="{MAIN_NS}" xmlns:r="{DOC_REL_NS}"><sheets>{sheet_entries}</sheets></workbook>"#
    )?;

    let sheet_rels: String = (1..=sheets.len())
        .map(|n| {
            format!(
                r#"<Relationship Id="rId{n}" Type="{DOC_REL_NS}/worksheet" Target="worksheets/sheet{n}.xml"/>"#
            )
        })
        .collect();
    let styles_id = sheets.len() + 1;
    zip.start_file("xl/_rels/workbook.xml.rels", SimpleFileOptions::default())?;
    write!(
        zip,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="{REL_NS}">{sheet_rels}<Relationship Id="rId{styles_id}" Type="{DOC_REL_NS}/styles" Target="styles.xml"/></Relationships>"#
    )?;

    // style 1 is the built-in short date format
    zip.start_file("xl/styles.xml", SimpleFileOptions::default())?;
    write!(
        zip,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><styleSheet xmlns="{MAIN_NS}"><cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/><xf numFmtId="14" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/></cellXfs></styleSheet>"#
    )?;

    for (i, (_, rows)) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), SimpleFileOptions::default())?;
        write!(
            zip,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="{MAIN_NS}"><sheetData>{}</sheetData></worksheet>"#,
            sheet_data(rows)
        )?;
    }

    zip.finish()?;
    Ok(())
}

fn sheet_data(rows: &[Vec<Value<'_>>]) -> String {
    let mut xml = String::new();
    for (r, row) in rows.iter().enumerate() {
        let row_num = r + 1;
        xml.push_str(&format!(r#"<row r="{row_num}">"#));
        for (c, value) in row.iter().enumerate() {
            let cell_ref = format!("{}{row_num}", column_name(c));
            match value {
                Value::Text(s) => xml.push_str(&format!(
                    r#"<c r="{cell_ref}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                    escape(s)
                )),
                Value::Number(v) => {
                    xml.push_str(&format!(r#"<c r="{cell_ref}"><v>{v}</v></c>"#))
                }
                Value::Date(v) => {
                    xml.push_str(&format!(r#"<c r="{cell_ref}" s="1"><v>{v}</v></c>"#))
                }
                Value::Blank => {}
            }
        }
        xml.push_str("</row>");
    }
    xml
}

fn column_name(idx: usize) -> String {
    let mut idx = idx + 1;
    let mut name = Vec::new();
    while idx > 0 {
        let rem = (idx - 1) % 26;
        name.push(b'A' + rem as u8);
        idx = (idx - 1) / 26;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Splits a produced CSV file into its BOM and the parsed records.
pub fn read_csv(path: &Path) -> anyhow::Result<(Vec<u8>, Vec<Vec<String>>)> {
    let bytes = std::fs::read(path)?;
    let bom = bytes.iter().take(3).copied().collect::<Vec<_>>();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(&bytes[bom.len()..]);
    let records = reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_owned).collect()))
        .collect::<Result<Vec<Vec<String>>, _>>()?;
    Ok((bom, records))
}
