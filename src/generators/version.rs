use rand::Rng;

use crate::extension::{Extension, VersionExtension};
use crate::helper::{random_element, random_hex};

const PRE_RELEASE_LABELS: &[&str] = &["alpha", "beta", "rc"];

/// Semantic version strings such as `1.24.3-beta.2+git.3fa85f6`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Version;

impl Version {
    pub fn new() -> Self {
        Self
    }
}

impl Extension for Version {}

impl VersionExtension for Version {
    fn semver(&self, pre_release: bool, build: bool) -> String {
        let mut rng = rand::thread_rng();
        let mut version = format!(
            "{}.{}.{}",
            rng.gen_range(0..=9),
            rng.gen_range(0..=99),
            rng.gen_range(0..=99)
        );
        if pre_release {
            version.push('-');
            version.push_str(random_element(PRE_RELEASE_LABELS));
            version.push_str(&format!(".{}", rng.gen_range(1..=9)));
        }
        if build {
            version.push_str("+git.");
            version.push_str(&random_hex(7));
        }
        version
    }
}
