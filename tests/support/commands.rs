//! Command helper methods for Test.

use super::fixtures::SOIREE_ENV;
use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a soiree command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    /// - All `SOIREE_*` variables removed and colors off
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("soiree").expect("failed to find soiree binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        for var in SOIREE_ENV {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `soiree hash <passphrase>`.
    pub fn hash(&self, passphrase: &str) -> Output {
        self.cmd()
            .args(["hash", passphrase])
            .output()
            .expect("failed to run soiree hash")
    }

    /// Shortcut for `soiree hash --stdin`.
    pub fn hash_stdin(&self, input: &str) -> Output {
        self.cmd()
            .args(["hash", "--stdin"])
            .write_stdin(input)
            .output()
            .expect("failed to run soiree hash --stdin")
    }

    /// Shortcut for `soiree unlock --stdin`.
    pub fn unlock(&self, input: &str) -> Output {
        self.cmd()
            .args(["unlock", "--stdin"])
            .write_stdin(input)
            .output()
            .expect("failed to run soiree unlock")
    }

    /// Shortcut for `soiree status`.
    pub fn status(&self) -> Output {
        self.cmd()
            .arg("status")
            .output()
            .expect("failed to run soiree status")
    }

    /// Shortcut for `soiree images <folder>`.
    pub fn images(&self, folder: &str) -> Output {
        self.cmd()
            .args(["images", folder])
            .output()
            .expect("failed to run soiree images")
    }

    /// Shortcut for `soiree page --stdin`.
    pub fn page(&self, input: &str) -> Output {
        self.cmd()
            .args(["page", "--stdin"])
            .write_stdin(input)
            .output()
            .expect("failed to run soiree page")
    }
}
