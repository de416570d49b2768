use crate::executor::{FileSystem, RealFileSystem, RealShell, ShellExecutor};

/// Collaborators every adapter operation runs against.
pub struct Context<S: ShellExecutor = RealShell, F: FileSystem = RealFileSystem> {
    shell: S,
    fs: F,
}

impl Context<RealShell, RealFileSystem> {
    pub fn new() -> Self {
        Self {
            shell: RealShell::new(),
            fs: RealFileSystem,
        }
    }
}

impl Default for Context<RealShell, RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ShellExecutor, F: FileSystem> Context<S, F> {
    pub fn with_parts(shell: S, fs: F) -> Self {
        Self { shell, fs }
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }
}
