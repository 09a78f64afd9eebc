use crate::areas::session::Session;
use crate::artifacts::diff::text_diff::{TextDiff, TextDiffOptions};
use std::io::Write;
use std::path::Path;

impl Session {
    pub fn similarity(
        &self,
        old: &Path,
        new: &Path,
        options: TextDiffOptions,
    ) -> anyhow::Result<()> {
        let old_lines = self.workspace().read_lines(old)?;
        let new_lines = self.workspace().read_lines(new)?;

        let similarity = TextDiff::new(options).similarity(&old_lines, &new_lines);
        tracing::debug!(similarity, "computed similarity");

        writeln!(self.writer(), "{:.3}", similarity)?;

        Ok(())
    }
}
