use super::ConfigError;

pub(crate) const CONFIG_SCHEMA: &str = include_str!("../../../res/config.schema.json");

pub(crate) fn validate_toml(
    schema: &str,
    toml_input: &str,
    name: &str,
) -> Result<(), ConfigError> {
    let schema_json: serde_json::Value = serde_json::from_str(schema)
        .map_err(|e| ConfigError::Invalid(format!("schema parse error: {e}")))?;

    let compiled = jsonschema::validator_for(&schema_json)
        .map_err(|e| ConfigError::Invalid(format!("schema compile error: {e}")))?;

    let toml_value: toml::Value = toml::from_str(toml_input)?;

    let json_value =
        serde_json::to_value(toml_value).map_err(|e| ConfigError::Invalid(e.to_string()))?;

    let mut errors = compiled.iter_errors(&json_value);

    if let Some(err) = errors.next() {
        let mut messages = vec![err.to_string()];
        for e in errors.take(4) {
            messages.push(e.to_string());
        }
        return Err(ConfigError::Invalid(format!(
            "schema validation failed for {name}: {}",
            messages.join("; ")
        )));
    }

    Ok(())
}
