use crate::types::Metadata;

/// Renders `message` followed by a blank line and the JSON of the
/// non-reserved metadata fields, or `message` alone if there are none.
pub(super) fn render(message: &str, metadata: Option<&Metadata>, expand: bool) -> String {
    let Some(fields) = metadata.and_then(Metadata::displayable_fields) else {
        return message.to_owned();
    };

    let json = if expand {
        serde_json::to_string_pretty(&fields)
    } else {
        serde_json::to_string(&fields)
    };

    match json {
        Ok(json) => format!("{message}\n\n{json}"),
        // a `Map<String, Value>` always serializes
        Err(_) => message.to_owned(),
    }
}
