use anyhow::Result;
use common::FieldKey;
use std::io::Write;

/// Print one line per form field: wire name, label and input kind
pub fn list_fields<W: Write>(out: &mut W) -> Result<()> {
    for key in FieldKey::ALL {
        writeln!(out, "{:<10} {:<10} {}", key.name(), key.label(), key.input_kind().html_type())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_field_in_order() {
        let mut out = Vec::new();
        list_fields(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Category"));
        assert_eq!(lines[2], "AgeGroup   Age Group  text");
        assert!(lines[3].ends_with("number"));
        assert!(lines[6].starts_with("Condition"));
    }
}
