use crate::model::document::Document;

/// Serializes a document to the JSON shape downstream emitters consume:
/// field names mirror the model, entities as `{"type", "value"}` objects,
/// image data as byte arrays, image formats as their names.
pub fn to_json_string(document: &Document) -> serde_json::Result<String> {
    serde_json::to_string(document)
}
