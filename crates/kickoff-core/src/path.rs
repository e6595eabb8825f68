//! Path normalization between separator conventions.
//!
//! Paths cross this crate as plain strings in one of two equivalent
//! forms: the canonical form (forward slashes, what callers and the
//! entry opener see) and the platform form (what the filesystem port
//! sees). All separator-sensitive behavior is keyed on a single
//! [`SeparatorStyle`] value instead of `cfg` checks scattered through
//! the orchestration code.
//!
//! Every function here is pure: no I/O, no failure modes.

/// The separator convention a path is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorStyle {
    /// Forward slash, the canonical form (and native on unix).
    Slash,
    /// Backslash, native on Windows.
    Backslash,
}

impl SeparatorStyle {
    /// The style native to the platform this binary was compiled for.
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Backslash
        } else {
            Self::Slash
        }
    }

    /// The separator character for this style.
    pub const fn separator(self) -> char {
        match self {
            Self::Slash => '/',
            Self::Backslash => '\\',
        }
    }

    /// Convert a canonical (forward-slash) path into this style.
    ///
    /// Identity for [`SeparatorStyle::Slash`].
    pub fn to_platform(self, path: &str) -> String {
        match self {
            Self::Slash => path.to_owned(),
            Self::Backslash => path.replace('/', "\\"),
        }
    }

    /// Convert a path in this style back to canonical form.
    ///
    /// Inverse of [`SeparatorStyle::to_platform`] for paths that only
    /// contain this style's separator.
    pub fn to_canonical(self, path: &str) -> String {
        match self {
            Self::Slash => path.to_owned(),
            Self::Backslash => path.replace('\\', "/"),
        }
    }

    /// Append this style's separator unless the path is empty or
    /// already ends with it. Idempotent.
    ///
    /// Directory paths must end with a separator before being composed
    /// with an entry name; file paths never do.
    pub fn ensure_trailing(self, path: &str) -> String {
        if path.is_empty() || path.ends_with(self.separator()) {
            path.to_owned()
        } else {
            let mut out = String::with_capacity(path.len() + 1);
            out.push_str(path);
            out.push(self.separator());
            out
        }
    }

    /// The substring after the last separator, or the whole string if
    /// no separator is present.
    pub fn base_name(self, path: &str) -> &str {
        match path.rfind(self.separator()) {
            Some(idx) => &path[idx + self.separator().len_utf8()..],
            None => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_style_matches_target() {
        #[cfg(windows)]
        assert_eq!(SeparatorStyle::native(), SeparatorStyle::Backslash);
        #[cfg(not(windows))]
        assert_eq!(SeparatorStyle::native(), SeparatorStyle::Slash);
    }

    #[test]
    fn to_platform_is_identity_for_slash() {
        let p = "/home/me/Documents/project";
        assert_eq!(SeparatorStyle::Slash.to_platform(p), p);
    }

    #[test]
    fn to_platform_rewrites_every_slash_for_backslash() {
        assert_eq!(
            SeparatorStyle::Backslash.to_platform("C:/Users/me/Documents"),
            "C:\\Users\\me\\Documents"
        );
    }

    #[test]
    fn round_trip_restores_platform_separators() {
        let style = SeparatorStyle::Backslash;
        let original = "C:\\Users\\me\\Documents";
        assert_eq!(style.to_platform(&style.to_canonical(original)), original);

        let style = SeparatorStyle::Slash;
        let original = "/home/me/Documents";
        assert_eq!(style.to_platform(&style.to_canonical(original)), original);
    }

    #[test]
    fn ensure_trailing_appends_once() {
        assert_eq!(SeparatorStyle::Slash.ensure_trailing("/tmp/x"), "/tmp/x/");
        assert_eq!(
            SeparatorStyle::Backslash.ensure_trailing("C:\\tmp"),
            "C:\\tmp\\"
        );
    }

    #[test]
    fn ensure_trailing_is_idempotent() {
        for style in [SeparatorStyle::Slash, SeparatorStyle::Backslash] {
            for p in ["", "a", "/usr/share", "C:\\Users", "trailing/"] {
                let once = style.ensure_trailing(p);
                assert_eq!(style.ensure_trailing(&once), once, "style {style:?}, input {p:?}");
            }
        }
    }

    #[test]
    fn ensure_trailing_leaves_empty_alone() {
        assert_eq!(SeparatorStyle::Slash.ensure_trailing(""), "");
        assert_eq!(SeparatorStyle::Backslash.ensure_trailing(""), "");
    }

    #[test]
    fn base_name_takes_last_component() {
        assert_eq!(
            SeparatorStyle::Slash.base_name("/templates/index.html"),
            "index.html"
        );
        assert_eq!(
            SeparatorStyle::Backslash.base_name("C:\\templates\\index.html"),
            "index.html"
        );
    }

    #[test]
    fn base_name_without_separator_is_whole_string() {
        assert_eq!(SeparatorStyle::Slash.base_name("index.html"), "index.html");
        assert_eq!(SeparatorStyle::Backslash.base_name("plain"), "plain");
    }

    #[test]
    fn base_name_of_directory_path_is_empty() {
        // A trailing separator means the "file name" is the empty string.
        assert_eq!(SeparatorStyle::Slash.base_name("/templates/"), "");
    }
}
