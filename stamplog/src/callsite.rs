//! Call-site capture and caller-tag formatting.
//!
//! Every filtered line carries a tag identifying where the call came from:
//!
//! ```text
//! session.rs#server::handle(L: 42)
//!     => connection closed
//! ```
//!
//! The location is a plain value, [`CallSite`], captured by the
//! [`callsite!`](crate::callsite!) macro at the point of expansion. Because
//! the macro expands in the caller's function, the tag always reports the
//! immediate call site; there is no stack depth to keep in sync. Tests
//! construct fixed `CallSite` values by hand to make output deterministic.

/// Source location of a logging call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Source file path as reported by `file!()`.
    pub file: &'static str,
    /// Fully qualified path of the enclosing function.
    pub function: &'static str,
    /// 1-based line number.
    pub line: u32,
}

impl CallSite {
    /// Create a call site from explicit parts.
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Render the tag prepended to a log line.
    ///
    /// The file is reduced to its final path segment and the function to its
    /// last two `::` segments, keeping tags short while still unambiguous
    /// within a module.
    pub fn tag(&self) -> String {
        format!(
            "{}#{}(L: {})\n\t => ",
            basename(self.file),
            short_function(self.function),
            self.line
        )
    }
}

/// Final path segment of a source file path.
fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Last two `::` segments of a fully qualified function path.
fn short_function(path: &str) -> &str {
    let mut separators = path.rmatch_indices("::").map(|(index, _)| index);
    let _innermost = separators.next();
    match separators.next() {
        Some(index) => &path[index + 2..],
        None => path,
    }
}

/// Capture the current call site.
///
/// Expands to a [`CallSite`] carrying `file!()`, the enclosing function's
/// qualified path, and `line!()`. The function path is derived from the type
/// name of a nested function, so capture cannot fail at runtime.
#[macro_export]
macro_rules! callsite {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let __name = __type_name_of(__here);
        $crate::CallSite::new(
            ::std::file!(),
            match __name.strip_suffix("::__here") {
                ::std::option::Option::Some(stripped) => stripped,
                ::std::option::Option::None => __name,
            },
            ::std::line!(),
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_strips_directories() {
        assert_eq!(basename("src/server/session.rs"), "session.rs");
        assert_eq!(basename("/abs/path/main.rs"), "main.rs");
        assert_eq!(basename(r"src\windows\paths.rs"), "paths.rs");
    }

    #[test]
    fn test_basename_passes_bare_names_through() {
        assert_eq!(basename("lib.rs"), "lib.rs");
    }

    #[test]
    fn test_short_function_keeps_last_two_segments() {
        assert_eq!(
            short_function("myapp::server::session::handle"),
            "session::handle"
        );
        assert_eq!(short_function("a::b::c"), "b::c");
    }

    #[test]
    fn test_short_function_passes_short_paths_through() {
        assert_eq!(short_function("main"), "main");
        assert_eq!(short_function("server::handle"), "server::handle");
    }

    #[test]
    fn test_tag_format() {
        let site = CallSite::new("src/server/session.rs", "myapp::server::session::handle", 42);
        assert_eq!(site.tag(), "session.rs#session::handle(L: 42)\n\t => ");
    }

    #[test]
    fn test_callsite_macro_captures_this_file() {
        let site = callsite!();
        assert!(site.file.ends_with("callsite.rs"), "file: {}", site.file);
    }

    #[test]
    fn test_callsite_macro_captures_enclosing_function() {
        let site = callsite!();
        assert!(
            site.function
                .ends_with("test_callsite_macro_captures_enclosing_function"),
            "function: {}",
            site.function
        );
    }

    #[test]
    fn test_callsite_macro_captures_line_number() {
        let expected = line!() + 1;
        let site = callsite!();
        assert_eq!(site.line, expected);
    }
}
