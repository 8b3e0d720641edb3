//! Derivation of schema names from collection keys.

/// Derives the item type name for a top-level key.
///
/// Strips a single trailing `s` and upper-cases the first character, so `users`
/// becomes `User`. This is not a real singularizer: `categories` becomes `Categorie`.
pub fn item_type_name(key: &str) -> String {
    let singular = key.strip_suffix('s').unwrap_or(key);
    let mut chars = singular.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
