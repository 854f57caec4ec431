/// Name used when the caller supplies none.
pub const DEFAULT_NAME: &str = "World";

/// Build the greeting text, falling back to [`DEFAULT_NAME`] for a missing or
/// empty name.
pub fn salutation(name: Option<&str>) -> String {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_NAME,
    };
    format!("Hello, {name}!")
}
