use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Everything a command needs: where input files are resolved and where the
/// report is written
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Session {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        if !path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", path);
        }

        let workspace = Workspace::new(path.into_boxed_path());

        Ok(Session {
            writer: RefCell::new(writer),
            workspace,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
