use appcat::MetadataError;

/// Pull the revision identifier out of a commit-history response.
///
/// The response is expected to be a JSON array of commit objects ordered
/// most-recent-first; only the first element's `sha` is trusted. Every way
/// the shape can disappoint maps to its own `MetadataError` variant.
pub fn extract_revision(body: &str) -> Result<String, MetadataError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| MetadataError::Json(e.to_string()))?;

    let entries = value.as_array().ok_or(MetadataError::NotAnArray)?;
    let first = entries.first().ok_or(MetadataError::Empty)?;
    let entry = first.as_object().ok_or(MetadataError::EntryNotAnObject)?;
    let sha = entry
        .get("sha")
        .and_then(|v| v.as_str())
        .ok_or(MetadataError::MissingSha)?;

    Ok(sha.to_owned())
}
