// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, &str slices, consts
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// `Vec<String>` from a list of string-ish expressions.
#[macro_export]
macro_rules! strings {
    ($($item:expr),* $(,)?) => {
        vec![$( ::std::string::String::from($item) ),*]
    };
}
