//! Attribute identifier and specification-table headers.

use esdf_model::Schema;

use crate::naming::{dims_name, id_name, specs_name};

/// `#define` constants numbering every attribute in declaration order.
pub fn render_attribute_ids(schema: &Schema) -> String {
    let mut buf = String::new();
    buf.push_str("#ifndef ESDF_ATTRIBUTES_ID_H\n#define ESDF_ATTRIBUTES_ID_H\n\n");
    for (ordinal, attribute) in schema.attributes.iter().enumerate() {
        buf.push_str(&format!("#define {} {ordinal}\n", id_name(&attribute.name)));
    }
    buf.push_str("\n#endif\n");
    buf
}

/// One specification table per attribute, referencing the identifier
/// constants. Attributes with array extents get a dimension pointer array
/// first; scalars carry a `NULL` dimension pointer.
pub fn render_attribute_specs(schema: &Schema) -> String {
    let mut buf = String::new();
    buf.push_str("#ifndef ESDF_ATTRIBUTES_SPECS_H\n#define ESDF_ATTRIBUTES_SPECS_H\n\n");
    buf.push_str("#include \"esdf_attributes_ID.h\"\n\n");

    for attribute in &schema.attributes {
        let dims_pointer = if attribute.dimensions == 0 || attribute.dims.is_empty() {
            "NULL".to_string()
        } else {
            let array = dims_name(&attribute.name);
            buf.push_str(&format!(
                "const esdf_attribute_specs_t *{array}[] = {{\n"
            ));
            for dim in &attribute.dims {
                buf.push_str(&format!("    &{},\n", specs_name(dim)));
            }
            buf.push_str("};\n\n");
            array
        };

        buf.push_str(&format!(
            "const esdf_attribute_specs_t {} = {{\n    {}, \"{}\", {}, {}, {}, {}\n}};\n\n",
            specs_name(&attribute.name),
            id_name(&attribute.name),
            attribute.name,
            attribute.data_type,
            attribute.string_length,
            attribute.dimensions,
            dims_pointer
        ));
    }

    buf.push_str("#endif\n");
    buf
}
