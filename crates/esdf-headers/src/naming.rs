//! C identifier derivation from schema names.

/// `#define` identifier for a record.
pub fn id_name(name: &str) -> String {
    name.to_uppercase()
}

/// Name of a record's specification table.
pub fn specs_name(name: &str) -> String {
    format!("{}_specs", name.to_lowercase())
}

/// Name of an attribute's dimension pointer array.
pub fn dims_name(name: &str) -> String {
    format!("{}_dims", name.to_lowercase())
}

/// Name of a group's attribute pointer array.
pub fn attributes_name(name: &str) -> String {
    format!("{}_attributes", name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{attributes_name, dims_name, id_name, specs_name};

    #[test]
    fn derives_identifiers() {
        assert_eq!(id_name("number_of_atoms"), "NUMBER_OF_ATOMS");
        assert_eq!(specs_name("Energy"), "energy_specs");
        assert_eq!(dims_name("forces"), "forces_dims");
        assert_eq!(attributes_name("System"), "system_attributes");
    }
}
