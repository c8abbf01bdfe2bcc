//! Key-format conversions between canonical keys and environment variables
//!
//! Canonical keys are lowercase and dot separated (`camel.component.seda.queueSize`),
//! environment variables are uppercase and underscore separated
//! (`CAMEL_COMPONENT_SEDA_QUEUESIZE`). All functions here are total and pure.

/// Convert a canonical key into its environment variable form
///
/// Uppercases the input, replaces every character outside `[A-Za-z0-9_]`
/// with `-` and then every `-` with `_`. Applying it twice yields the same
/// result as applying it once.
///
/// # Example
///
/// ```rust
/// use confbind::naming::to_env_var;
///
/// assert_eq!(to_env_var("camel.component.seda.queueSize"), "CAMEL_COMPONENT_SEDA_QUEUESIZE");
/// assert_eq!(to_env_var("camel.component.coap+tcp"), "CAMEL_COMPONENT_COAP_TCP");
/// ```
pub fn to_env_var(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .map(|c| if is_word_char(c) { c } else { '-' })
        .map(|c| if c == '-' { '_' } else { c })
        .collect()
}

/// Canonical option form of a dash or underscore delimited key
///
/// Option names are matched ignoring case by the binder, so they are stored
/// camel cased and without separators.
///
/// # Example
///
/// ```rust
/// use confbind::naming::option_key;
///
/// assert_eq!(option_key("queue-size"), "queueSize");
/// assert_eq!(option_key("queueSize"), "queueSize");
/// ```
pub fn option_key(key: &str) -> String {
    dash_to_camel_case(key)
}

/// Turn `foo-bar_baz` into `fooBarBaz`
///
/// Leading separators are dropped, repeated separators collapse and
/// characters that are not after a separator keep their case.
pub fn dash_to_camel_case(text: &str) -> String {
    if !text.contains(['-', '_']) {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut upper_next = false;
    for c in text.chars() {
        if c == '-' || c == '_' {
            upper_next = !result.is_empty();
            continue;
        }
        if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
