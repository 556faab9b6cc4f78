//! Surface selection: decides once per process start whether to present the
//! command-line surface or the interactive form.
//!
//! Double-click launches from a desktop shell have no attached console, so
//! silently running the CLI would be invisible; terminal launches default to
//! the CLI for scriptability, with an explicit override token to force the
//! form.

use sysinfo::{Pid, ProcessesToUpdate, System};

/// The chosen interface surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Cli,
    Form,
}

/// Desktop shells whose child processes are treated as double-click launches.
pub const DESKTOP_SHELLS: &[&str] = &["explorer.exe", "Finder", "nautilus", "plasmashell"];

/// Read-only launch-origin signals: the image names of the current process,
/// its parent, and its grandparent.
#[derive(Debug, Clone)]
pub struct LaunchOrigin {
    pub current: String,
    pub parent: Option<String>,
    pub grandparent: Option<String>,
}

impl LaunchOrigin {
    /// Inspect the process table for the three image names. Missing entries
    /// (short-lived parents, restricted proc tables) degrade to `None`, which
    /// biases the decision toward the CLI surface.
    pub fn detect() -> Self {
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::All, true);

        let image_name = |pid: Pid| {
            system
                .process(pid)
                .map(|p| p.name().to_string_lossy().into_owned())
        };

        let own_pid = Pid::from_u32(std::process::id());
        let current = image_name(own_pid).unwrap_or_else(argv0_image_name);
        let parent_pid = system.process(own_pid).and_then(|p| p.parent());
        let parent = parent_pid.and_then(image_name);
        let grandparent = parent_pid
            .and_then(|pid| system.process(pid))
            .and_then(|p| p.parent())
            .and_then(image_name);

        Self {
            current,
            parent,
            grandparent,
        }
    }

    /// True when the process looks double-clicked: the parent carries the same
    /// image name and the grandparent is a known desktop shell.
    pub fn prefers_form(&self) -> bool {
        match (&self.parent, &self.grandparent) {
            (Some(parent), Some(grandparent)) => {
                parent == &self.current && DESKTOP_SHELLS.contains(&grandparent.as_str())
            }
            _ => false,
        }
    }
}

fn argv0_image_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg| {
            std::path::Path::new(arg)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}

/// Pick the surface for this run. An override token anywhere in the argument
/// list is removed and forces the form; otherwise the launch origin decides.
pub fn select_surface(
    mut args: Vec<String>,
    origin: &LaunchOrigin,
    override_token: &str,
) -> (Surface, Vec<String>) {
    if let Some(position) = args.iter().position(|arg| arg == override_token) {
        args.remove(position);
        return (Surface::Form, args);
    }
    if origin.prefers_form() {
        (Surface::Form, args)
    } else {
        (Surface::Cli, args)
    }
}
