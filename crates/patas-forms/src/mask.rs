//! Input masks
//!
//! Each mask strips everything that is not a digit, truncates to the field's
//! maximum, and reformats progressively so separators appear as the user
//! types rather than only on a complete value.

/// Masked field kinds, keyed by the stable ids the markup uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    DocumentNumber,
    Phone,
    PostalCode,
}

impl MaskKind {
    /// Mask for a field id, if that field is masked at all.
    pub fn for_field(id: &str) -> Option<MaskKind> {
        match id {
            "document-number" => Some(MaskKind::DocumentNumber),
            "phone" => Some(MaskKind::Phone),
            "postal-code" => Some(MaskKind::PostalCode),
            _ => None,
        }
    }

    pub fn field_id(&self) -> &'static str {
        match self {
            MaskKind::DocumentNumber => "document-number",
            MaskKind::Phone => "phone",
            MaskKind::PostalCode => "postal-code",
        }
    }

    pub fn apply(&self, value: &str) -> String {
        match self {
            MaskKind::DocumentNumber => mask_document_number(value),
            MaskKind::Phone => mask_phone(value),
            MaskKind::PostalCode => mask_postal_code(value),
        }
    }
}

fn digits(value: &str, max: usize) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max)
        .collect()
}

/// `000.000.000-00`
pub fn mask_document_number(value: &str) -> String {
    let d = digits(value, 11);
    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// `(00) 00000-0000`
pub fn mask_phone(value: &str) -> String {
    let d = digits(value, 11);
    if d.len() <= 2 {
        return d;
    }

    let (area, rest) = d.split_at(2);
    if rest.len() <= 4 {
        format!("({}) {}", area, rest)
    } else {
        let split = rest.len() - 4;
        format!("({}) {}-{}", area, &rest[..split], &rest[split..])
    }
}

/// `00000-000`
pub fn mask_postal_code(value: &str) -> String {
    let d = digits(value, 8);
    if d.len() <= 5 {
        d
    } else {
        format!("{}-{}", &d[..5], &d[5..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_number_progressive() {
        assert_eq!(mask_document_number("123"), "123");
        assert_eq!(mask_document_number("12345"), "123.45");
        assert_eq!(mask_document_number("12345678"), "123.456.78");
        assert_eq!(mask_document_number("12345678909"), "123.456.789-09");
    }

    #[test]
    fn test_document_number_strips_junk_and_truncates() {
        assert_eq!(mask_document_number("123.456.789-09"), "123.456.789-09");
        assert_eq!(mask_document_number("12a34b5"), "123.45");
        assert_eq!(mask_document_number("999999999999999"), "999.999.999-99");
    }

    #[test]
    fn test_phone() {
        assert_eq!(mask_phone("11"), "11");
        assert_eq!(mask_phone("119"), "(11) 9");
        assert_eq!(mask_phone("1198765"), "(11) 9-8765");
        assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(mask_phone("(11) 98765-4321"), "(11) 98765-4321");
    }

    #[test]
    fn test_postal_code() {
        assert_eq!(mask_postal_code("12345"), "12345");
        assert_eq!(mask_postal_code("12345678"), "12345-678");
        assert_eq!(mask_postal_code("12345-678"), "12345-678");
        assert_eq!(mask_postal_code("123456789"), "12345-678");
    }

    #[test]
    fn test_mask_kind_for_field() {
        assert_eq!(
            MaskKind::for_field("document-number"),
            Some(MaskKind::DocumentNumber)
        );
        assert_eq!(MaskKind::for_field("phone"), Some(MaskKind::Phone));
        assert_eq!(
            MaskKind::for_field("postal-code"),
            Some(MaskKind::PostalCode)
        );
        assert_eq!(MaskKind::for_field("name"), None);
    }

    #[test]
    fn test_apply_is_idempotent() {
        for (kind, raw) in [
            (MaskKind::DocumentNumber, "12345678909"),
            (MaskKind::Phone, "11987654321"),
            (MaskKind::PostalCode, "12345678"),
        ] {
            let once = kind.apply(raw);
            assert_eq!(kind.apply(&once), once);
        }
    }
}
