/// Offset of the magic field inside a tar header block
pub const TAR_MAGIC_OFFSET: usize = 257;

/// Magic shared by POSIX ustar (`ustar\0`) and GNU (`ustar `) headers
pub const TAR_MAGIC: &[u8; 5] = b"ustar";

/// Size of one tar header block; only the first block is inspected
const HEADER_BLOCK_SIZE: usize = 512;

/// FormatSniffer service for recognising tar streams by magic bytes
pub struct FormatSniffer;

impl FormatSniffer {
    /// Returns true if `buffer` starts with a tar header.
    ///
    /// Needs at least 262 bytes; no checksum or version check is done.
    pub fn looks_like_tar(buffer: &[u8]) -> bool {
        let header = &buffer[..buffer.len().min(HEADER_BLOCK_SIZE)];
        header
            .get(TAR_MAGIC_OFFSET..TAR_MAGIC_OFFSET + TAR_MAGIC.len())
            .is_some_and(|magic| magic == TAR_MAGIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_with_magic(len: usize, magic: &[u8]) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        buf[TAR_MAGIC_OFFSET..TAR_MAGIC_OFFSET + magic.len()].copy_from_slice(magic);
        buf
    }

    #[test]
    fn test_minimal_buffer_with_magic() {
        let buf = header_with_magic(262, b"ustar");
        assert!(FormatSniffer::looks_like_tar(&buf));
    }

    #[test]
    fn test_gnu_and_posix_magic() {
        assert!(FormatSniffer::looks_like_tar(&header_with_magic(512, b"ustar ")));
        assert!(FormatSniffer::looks_like_tar(&header_with_magic(512, b"ustar\0")));
    }

    #[test]
    fn test_buffer_too_short() {
        let buf = header_with_magic(262, b"ustar");
        assert!(!FormatSniffer::looks_like_tar(&buf[..261]));
        assert!(!FormatSniffer::looks_like_tar(&[]));
        assert!(!FormatSniffer::looks_like_tar(b"not a tar file"));
    }

    #[test]
    fn test_wrong_magic() {
        assert!(!FormatSniffer::looks_like_tar(&header_with_magic(512, b"USTAR")));
        assert!(!FormatSniffer::looks_like_tar(&header_with_magic(512, b"ustr\0")));
        assert!(!FormatSniffer::looks_like_tar(&vec![0u8; 1024]));
    }

    #[test]
    fn test_magic_outside_first_block_is_ignored() {
        let mut buf = vec![0u8; 1024];
        buf[512 + TAR_MAGIC_OFFSET..512 + TAR_MAGIC_OFFSET + 5].copy_from_slice(b"ustar");
        assert!(!FormatSniffer::looks_like_tar(&buf));
    }
}
