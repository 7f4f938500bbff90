/// Host architecture family, as far as stack sizing cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    /// aarch64 and sparc64 need deeper stacks.
    LargeStack,
    Standard,
}

impl Arch {
    pub fn current() -> Self {
        Self::from_name(std::env::consts::ARCH)
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "aarch64" | "sparc64" | "sparcv9" => Arch::LargeStack,
            _ => Arch::Standard,
        }
    }

    /// Stack size for interactive launches.
    pub fn default_stack_size(self) -> &'static str {
        match self {
            Arch::LargeStack => "24m",
            Arch::Standard => "16m",
        }
    }
}
