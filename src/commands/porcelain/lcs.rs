use crate::areas::session::Session;
use crate::artifacts::diff::text_diff::{TextDiff, TextDiffOptions};
use std::io::Write;
use std::path::Path;

impl Session {
    pub fn lcs(&self, old: &Path, new: &Path, options: TextDiffOptions) -> anyhow::Result<()> {
        let old_lines = self.workspace().read_lines(old)?;
        let new_lines = self.workspace().read_lines(new)?;

        let common = TextDiff::new(options).common_lines(&old_lines, &new_lines);
        tracing::debug!(common = common.len(), "computed longest common subsequence");

        let mut writer = self.writer();
        for line in common {
            writeln!(writer, "{}", line)?;
        }

        Ok(())
    }
}
