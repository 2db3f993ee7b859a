//! Zip packaging for split output.

use std::io::{Seek, Write};

use anyhow::Context;

use cardbridge_format::split::VcfPart;

/// Writes each part as a deflated zip entry, in part order.
///
/// A packaging failure leaves the in-memory parts untouched, so the caller
/// can retry the save.
///
/// ## Errors
/// Returns an error when a zip entry cannot be started or written.
pub fn write_zip<W: Write + Seek>(out: W, parts: &[VcfPart]) -> anyhow::Result<()> {
    let mut zip = zip::ZipWriter::new(out);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for part in parts {
        zip.start_file(part.file_name.as_str(), options)
            .with_context(|| format!("zip start_file {}", part.file_name))?;
        zip.write_all(part.content.as_bytes())
            .with_context(|| format!("zip write {}", part.file_name))?;
    }

    zip.finish().context("zip finish")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use super::*;

    fn part(name: &str, content: &str) -> VcfPart {
        VcfPart {
            file_name: name.to_string(),
            content: content.to_string(),
        }
    }

    #[test_log::test]
    fn archive_contains_parts_in_order() {
        let parts = vec![
            part("contacts_part_1.vcf", "BEGIN:VCARD\nEND:VCARD\n"),
            part("contacts_part_2.vcf", "BEGIN:VCARD\nFN:B\nEND:VCARD\n"),
        ];

        let mut buffer = Cursor::new(Vec::new());
        write_zip(&mut buffer, &parts).expect("write zip");

        buffer.set_position(0);
        let mut archive = zip::ZipArchive::new(buffer).expect("open zip");
        assert_eq!(archive.len(), 2);

        for (index, expected) in parts.iter().enumerate() {
            let mut entry = archive.by_index(index).expect("entry");
            assert_eq!(entry.name(), expected.file_name);

            let mut content = String::new();
            entry.read_to_string(&mut content).expect("read entry");
            assert_eq!(content, expected.content);
        }
    }

    #[test]
    fn empty_part_list_produces_valid_empty_archive() {
        let mut buffer = Cursor::new(Vec::new());
        write_zip(&mut buffer, &[]).expect("write zip");

        buffer.set_position(0);
        let archive = zip::ZipArchive::new(buffer).expect("open zip");
        assert_eq!(archive.len(), 0);
    }
}
