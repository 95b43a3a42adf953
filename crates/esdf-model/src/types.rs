//! Data-type tags used by attribute and dataset records.

use std::fmt;

/// Interpreted data type of an attribute or dataset.
///
/// Schema records carry a free-form tag string (for example
/// `ESDF_DT_DOUBLE`); the tag is matched by substring so that qualified or
/// decorated spellings still resolve. Anything unrecognized maps to
/// [`DataType::Unknown`] rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Unsigned integer.
    Uint,
    /// Boolean flag.
    Bool,
    /// Double-precision float.
    Double,
    /// Fixed-length text; the record's string length gives the capacity.
    FixedString,
    /// Unrecognized tag.
    Unknown,
}

impl DataType {
    /// Resolve a raw schema tag into a data type.
    pub fn from_tag(tag: &str) -> Self {
        if tag.contains("ESDF_DT_UINT") {
            DataType::Uint
        } else if tag.contains("ESDF_DT_BOOL") {
            DataType::Bool
        } else if tag.contains("ESDF_DT_DOUBLE") {
            DataType::Double
        } else if tag.contains("ESDF_DT_STRING") {
            DataType::FixedString
        } else {
            DataType::Unknown
        }
    }

    /// Parenthesized annotation used in rendered documentation.
    pub fn annotation(&self, string_length: u64) -> String {
        match self {
            DataType::Uint => "(unsigned int)".to_string(),
            DataType::Bool => "(bool)".to_string(),
            DataType::Double => "(double)".to_string(),
            DataType::FixedString => format!("(char({string_length}))"),
            DataType::Unknown => "(unknown)".to_string(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Uint => "unsigned int",
            DataType::Bool => "bool",
            DataType::Double => "double",
            DataType::FixedString => "char",
            DataType::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::DataType;

    #[test]
    fn resolves_known_tags() {
        assert_eq!(DataType::from_tag("ESDF_DT_UINT"), DataType::Uint);
        assert_eq!(DataType::from_tag("ESDF_DT_BOOL"), DataType::Bool);
        assert_eq!(DataType::from_tag("ESDF_DT_DOUBLE"), DataType::Double);
        assert_eq!(DataType::from_tag("ESDF_DT_STRING"), DataType::FixedString);
    }

    #[test]
    fn unknown_tag_is_not_an_error() {
        assert_eq!(DataType::from_tag("ESDF_DT_COMPLEX"), DataType::Unknown);
        assert_eq!(DataType::Unknown.annotation(0), "(unknown)");
    }

    #[test]
    fn string_annotation_carries_length() {
        assert_eq!(DataType::FixedString.annotation(80), "(char(80))");
    }
}
