use crate::areas::session::Session;
use crate::artifacts::diff::edit_script::{Edit, EditType};
use crate::artifacts::diff::text_diff::{TextDiff, TextDiffOptions};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

impl Session {
    pub fn diff(&self, old: &Path, new: &Path, options: TextDiffOptions) -> anyhow::Result<()> {
        let old_lines = self.workspace().read_lines(old)?;
        let new_lines = self.workspace().read_lines(new)?;

        tracing::debug!(
            old = %old.display(),
            new = %new.display(),
            hash_type = %options.hash_type,
            "diffing files"
        );

        let script = TextDiff::new(options).diff_lines(&old_lines, &new_lines);

        for edit in &script {
            self.print_edit(edit)?;
        }

        writeln!(
            self.writer(),
            "edits: {}, total edit length: {}, similarity: {:.3}",
            script.len(),
            script.total_edit_length(),
            script.similarity()
        )?;

        Ok(())
    }

    fn print_edit(&self, edit: &Edit) -> anyhow::Result<()> {
        let record = edit.to_string();
        let record = match edit.edit_type {
            EditType::Delete => record.red(),
            EditType::Insert => record.green(),
            EditType::Change => record.yellow(),
        };

        writeln!(self.writer(), "{}", record)?;

        Ok(())
    }
}
