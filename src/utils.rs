// see https://stackoverflow.com/questions/38406793/why-is-capitalizing-the-first-letter-of-a-string-so-convoluted-in-rust
pub fn apply_to_first<F>(string: &str, func: F) -> String
where
    F: Fn(char) -> String,
{
    let mut c = string.chars();
    match c.next() {
        None => String::new(),
        Some(first) => func(first) + c.as_str(),
    }
}

pub fn starts_uppercase(string: &str) -> bool {
    string.chars().next().map_or(false, char::is_uppercase)
}

/// Carries the capitalization of the first character of `template` over to `word`.
pub fn match_first_case(template: &str, word: &str) -> String {
    if starts_uppercase(template) {
        apply_to_first(word, |c| c.to_uppercase().collect())
    } else {
        apply_to_first(word, |c| c.to_lowercase().collect())
    }
}

/// Toggles the case of the first character. Returns `None` if the first character has no distinct
/// case form or if the toggle would not be reversible (e.g. `ß` uppercases to `SS`).
pub fn toggle_first_case(string: &str) -> Option<String> {
    let first = string.chars().next()?;

    let toggled: String = if first.is_uppercase() {
        first.to_lowercase().collect()
    } else {
        first.to_uppercase().collect()
    };

    let mut toggled_chars = toggled.chars();
    let toggled_first = match (toggled_chars.next(), toggled_chars.next()) {
        (Some(c), None) => c,
        _ => return None,
    };

    let back: String = if toggled_first.is_uppercase() {
        toggled_first.to_lowercase().collect()
    } else {
        toggled_first.to_uppercase().collect()
    };

    if toggled_first == first || back.chars().ne(std::iter::once(first)) {
        return None;
    }

    Some(toggled_first.to_string() + &string[first.len_utf8()..])
}

#[inline]
pub fn splitting_chars() -> &'static str {
    r##"«»'’`´‘],.:;!?/\()<=>„“”"+#…*"##
}
