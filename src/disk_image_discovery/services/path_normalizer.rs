/// PathNormalizer service for lexical path cleanup
///
/// All operations are purely syntactic: nothing touches the filesystem and
/// `/` is the only separator, matching how tar stores member names.
pub struct PathNormalizer;

impl PathNormalizer {
    /// Normalizes a host path the way a lexical `clean` does.
    ///
    /// Repeated separators and `.` segments are removed and `..` consumes the
    /// previous segment. Leading `..` segments of a relative path are kept;
    /// on an absolute path they are dropped. An empty result becomes `.`.
    pub fn clean(path: &str) -> String {
        let rooted = path.starts_with('/');
        let mut parts: Vec<&str> = Vec::new();
        for part in path.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    if parts.last().is_some_and(|last| *last != "..") {
                        parts.pop();
                    } else if !rooted {
                        parts.push("..");
                    }
                }
                segment => parts.push(segment),
            }
        }

        let joined = parts.join("/");
        match (rooted, joined.is_empty()) {
            (true, _) => format!("/{}", joined),
            (false, true) => ".".to_string(),
            (false, false) => joined,
        }
    }

    /// Normalizes an archive member name relative to the archive root.
    ///
    /// `..` can never climb above the root, so `../../escape.vmdk` becomes
    /// `escape.vmdk`. Leading slashes are stripped. May return an empty
    /// string for names such as `/` or `./..`.
    pub fn clean_entry_name(name: &str) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for part in name.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                segment => parts.push(segment),
            }
        }
        parts.join("/")
    }

    /// Joins the container path and a cleaned member name into
    /// `<archivePath>/<entryName>` addressing.
    pub fn compose_location(archive_path: &str, cleaned_entry: &str) -> String {
        let container = Self::clean(archive_path);
        if cleaned_entry.is_empty() {
            return container;
        }
        match container.as_str() {
            "." => cleaned_entry.to_string(),
            "/" => format!("/{}", cleaned_entry),
            _ => format!("{}/{}", container, cleaned_entry),
        }
    }
}
