/// Identity of the OVA extractor within the inventory pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorInfo {
    pub name: &'static str,
    pub version: u32,
    pub requirements: Requirements,
}

/// Host capabilities an extractor needs to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Requirements {
    pub os: Option<&'static str>,
    pub network: bool,
    pub direct_filesystem: bool,
}

impl Requirements {
    /// Runs anywhere on host-supplied bytes
    pub const NONE: Requirements = Requirements {
        os: None,
        network: false,
        direct_filesystem: false,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl ExtractorInfo {
    /// Registered name and schema version of the OVA disk image extractor
    pub const OVA: ExtractorInfo = ExtractorInfo {
        name: "embeddedfs/ova",
        version: 0,
        requirements: Requirements::NONE,
    };
}

impl std::fmt::Display for ExtractorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}
