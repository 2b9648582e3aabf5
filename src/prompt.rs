//! Rendering of the generation instruction handed to Cursor.
//!
//! Pure string formatting over a [`Classification`]; no decisions are made
//! here. The wording mirrors what the provider team feeds the composer by
//! hand, including the OneOf flattening guidance the generator otherwise
//! gets wrong.

use std::fmt::Write;
use std::path::Path;

use crate::classify::{Classification, Resource};

const DATASOURCE_GUIDANCE: &str = "\
IMPORTANT for DataSources:
1. If Get*ById methods are present, please build the datasource using the response_struct from the sdk_info.json file for the api method, it's a module for fetching a single resource by id.
2. If List* methods are present, please build the datasource using the response_struct from the sdk_info.json file for the api method, it's a module for fetching a list of resources.
";

const RESOURCE_GUIDANCE: &str = "\
IMPORTANT for Resources:
- If a receiver has Create, Update, Delete methods, they should all be in the SAME resource file with Create, Read, Update, Delete contexts. Build the schema for the resource using the request_struct and response_struct from the sdk_info.json file for the api method.
- Create context should use the Create API method
- Read context should use the GetById API method (if available)
- Update context should use the Update API method
- Delete context should use the Delete API method
- Other methods (not Get/List/Create/Update/Delete) should be considered as separate resources
";

const ONEOF_GUIDANCE: &str = r#"IMPORTANT - OneOf Type Handling:
When flattening OneOf types (e.g., OneOfMetricDetailMetricValue, OneOfParameterParamValue), the OneOfTypeX fields are PRIVATE and cannot be accessed directly. Use this pattern:

func flattenOneOfValue(oneOfValue *import1.OneOfSomeValue) []map[string]interface{} {
    if oneOfValue != nil && oneOfValue.ObjectType_ != nil {
        valueMap := make(map[string]interface{})
        value := oneOfValue.GetValue()
        if value != nil {
            switch *oneOfValue.ObjectType_ {
            case "monitoring.v4.common.StringValue":
                if strVal, ok := value.(import1.StringValue); ok && strVal.StringValue != nil {
                    valueMap["string_value"] = utils.StringValue(strVal.StringValue)
                }
            case "monitoring.v4.common.BoolValue":
                if boolVal, ok := value.(import1.BoolValue); ok && boolVal.BoolValue != nil {
                    valueMap["bool_value"] = utils.BoolValue(boolVal.BoolValue)
                }
            case "monitoring.v4.common.IntValue":
                if intVal, ok := value.(import1.IntValue); ok && intVal.IntValue != nil {
                    valueMap["int_value"] = utils.Int64Value(intVal.IntValue)
                }
            case "monitoring.v4.common.DoubleValue":
                if doubleVal, ok := value.(import1.DoubleValue); ok && doubleVal.DoubleValue != nil {
                    valueMap["double_value"] = utils.Float64Value(doubleVal.DoubleValue)
                }
            }
        }
        return []map[string]interface{}{valueMap}
    }
    return nil
}

DO NOT try to access OneOfType0, OneOfType1, etc. directly - they are private fields. Always use GetValue() and check ObjectType_ field.
"#;

/// Render the full generation prompt.
pub fn render(namespace: &str, classification: &Classification, sdk_info_path: &Path) -> String {
    let datasource_list = if classification.datasources.is_empty() {
        "N/A".to_string()
    } else {
        classification
            .datasources
            .iter()
            .map(|ds| ds.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let resource_section = if classification.resources.is_empty() {
        "N/A".to_string()
    } else {
        classification
            .resources
            .iter()
            .map(resource_detail)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Generate complete Terraform provider code for {namespace} namespace using {}.",
        sdk_info_path.display()
    );
    let _ = writeln!(prompt, "Generate:");
    let _ = writeln!(
        prompt,
        "1. SDK client: nutanix/sdks/v4/{namespace}/{namespace}.go (pattern: networking.go), if client is already present please update the client with the new api methods or receivers."
    );
    let _ = writeln!(
        prompt,
        "2. Update nutanix/config.go: add {}API client init + field",
        capitalize(namespace)
    );
    let _ = writeln!(
        prompt,
        "3. Datasources in nutanix/services/{namespace}v2/: {datasource_list}:"
    );
    prompt.push_str(DATASOURCE_GUIDANCE);
    let _ = writeln!(prompt, "4. Resources in nutanix/services/{namespace}v2/:");
    let _ = writeln!(prompt, "{resource_section}");
    prompt.push_str(RESOURCE_GUIDANCE);
    let _ = writeln!(
        prompt,
        "5. Tests: Build the test files for the datasource and resource files by analyzing the api method and the response_struct or request_struct from the sdk_info.json file."
    );
    let _ = writeln!(prompt, "6. Examples: examples/{namespace}_v2/");
    let _ = writeln!(prompt, "7. Docs: website/docs/d/ and website/docs/r/");
    let _ = writeln!(prompt, "8. Register in nutanix/provider/provider.go");
    prompt.push('\n');
    let _ = writeln!(
        prompt,
        "Reference: datapoliciesv2, networkingv2 just for file structures. Use sdk_info.json for exact field mappings, import paths and request/response structs."
    );
    prompt.push('\n');
    prompt.push_str(ONEOF_GUIDANCE);

    prompt
}

fn resource_detail(resource: &Resource) -> String {
    match resource {
        Resource::Crud {
            name,
            create,
            read,
            update,
            delete,
            ..
        } => {
            let mut detail = format!("Resource: {name} (CRUD)");
            for (label, method) in [
                ("Create", create),
                ("Read", read),
                ("Update", update),
                ("Delete", delete),
            ] {
                if let Some(method) = method {
                    let _ = write!(detail, "\n  - {label} context: {method}");
                }
            }
            detail
        }
        Resource::Action { name, method, .. } => {
            format!("Resource: {name} (method: {method})")
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
