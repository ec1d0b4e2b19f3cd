//! In-memory OVA (tar) fixtures

/// Builder for tar streams with full control over names and typeflags
pub struct OvaFixture {
    builder: tar::Builder<Vec<u8>>,
}

impl OvaFixture {
    pub fn new() -> Self {
        Self {
            builder: tar::Builder::new(Vec::new()),
        }
    }

    /// Regular file (typeflag '0')
    pub fn file(self, name: &str, data: &[u8]) -> Self {
        self.raw(name, b'0', data)
    }

    /// Directory (typeflag '5')
    pub fn dir(self, name: &str) -> Self {
        self.raw(name, b'5', b"")
    }

    /// Symbolic link (typeflag '2')
    pub fn symlink(self, name: &str) -> Self {
        self.raw(name, b'2', b"")
    }

    /// Entry whose name and typeflag are written verbatim into a ustar header
    pub fn raw(mut self, name: &str, typeflag: u8, data: &[u8]) -> Self {
        let mut header = tar::Header::new_ustar();
        header.as_old_mut().name[..name.len()].copy_from_slice(name.as_bytes());
        header.as_old_mut().linkflag = [typeflag];
        header.set_mode(0o644);
        header.set_size(data.len() as u64);
        header.set_cksum();
        self.builder.append(&header, data).unwrap();
        self
    }

    /// Regular file with a name longer than the ustar name field
    pub fn long_file(mut self, name: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Regular);
        self.builder.append_data(&mut header, name, data).unwrap();
        self
    }

    /// Regular file named through a PAX `path` record; the ustar header
    /// itself only carries a short placeholder name
    pub fn pax_file(self, name: &str, data: &[u8]) -> Self {
        self.raw("PaxHeaders/placeholder", b'x', &pax_record("path", name))
            .raw("placeholder", b'0', data)
    }

    pub fn build(self) -> Vec<u8> {
        self.builder.into_inner().unwrap()
    }

    /// Archive whose last entry announces more body bytes than are present
    pub fn build_truncated(self, name: &str) -> Vec<u8> {
        let mut content = self.build();
        // Drop the two end-of-archive blocks
        content.truncate(content.len() - 1024);
        let cut = OvaFixture::new().file(name, &[0u8; 4096]).build();
        content.extend_from_slice(&cut[..512 + 100]);
        content
    }
}

impl Default for OvaFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes one `<len> <key>=<value>\n` extended header record
fn pax_record(key: &str, value: &str) -> Vec<u8> {
    let payload = format!(" {}={}\n", key, value);
    let mut len = payload.len() + 1;
    while format!("{}{}", len, payload).len() != len {
        len += 1;
    }
    format!("{}{}", len, payload).into_bytes()
}
