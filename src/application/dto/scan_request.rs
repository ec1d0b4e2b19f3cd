use std::io::Read;

/// ScanRequest - input of a single archive scan
///
/// `path` is the logical path used for eligibility and for composing record
/// locations; `reader` yields the archive's full contents.
pub struct ScanRequest<R> {
    pub path: String,
    pub reader: R,
}

impl<R: Read> ScanRequest<R> {
    pub fn new(path: impl Into<String>, reader: R) -> Self {
        Self {
            path: path.into(),
            reader,
        }
    }
}

impl<'a> ScanRequest<&'a [u8]> {
    /// Request over an in-memory buffer
    pub fn from_bytes(path: impl Into<String>, bytes: &'a [u8]) -> Self {
        Self::new(path, bytes)
    }
}
