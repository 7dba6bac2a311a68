//! Plan data model: resource specs, typed edges, and the resolved strategy.

use std::path::PathBuf;

use serde::Serialize;

use super::params::InstallMethod;
use super::settings::SettingsSet;

/// Derived install strategy: the chosen method plus its working path. The
/// path is only consulted by the `Vcs` method; it is carried regardless so
/// the install spec always has a destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedStrategy {
    pub method: InstallMethod,
    pub path: PathBuf,
}

/// Desired install state handed to an `Installer` executor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InstallSpec {
    pub method: InstallMethod,
    pub package_name: String,
    pub package_ensure: Option<String>,
    pub repo: String,
    pub version: String,
    pub path: PathBuf,
    pub manage_dependencies: bool,
    pub configure_epel: bool,
}

/// Desired config-file state handed to a `ConfigWriter` executor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigFileSpec {
    pub path: PathBuf,
    pub settings: SettingsSet,
}

/// One-shot initialization run handed to an `ActionRunner` executor.
/// `search_path` is the PATH the command should be resolved against, taken
/// from the shell-path fact when present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InitSpec {
    pub command: String,
    pub search_path: Option<PathBuf>,
}

/// Plan resources addressable by edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    EpelRepo,
    Install,
    Config,
    Init,
}

impl Node {
    /// Stable label used for deterministic spec IDs and facts emission.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EpelRepo => "epel",
            Self::Install => "install",
            Self::Config => "config",
            Self::Init => "init",
        }
    }
}

/// Relation kinds between resources. `Before` constrains ordering only;
/// `Notifies` additionally re-triggers the downstream resource whenever the
/// upstream one changed. The two must never be conflated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Before,
    Notifies,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    pub kind: EdgeKind,
}

/// Complete output of one resolution: specs plus dependency edges.
/// Immutable once returned; carries no run-state between resolutions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub install: Option<InstallSpec>,
    pub config: Option<ConfigFileSpec>,
    pub init: InitSpec,
    pub edges: Vec<Edge>,
}

impl Plan {
    #[must_use]
    pub fn has_edge(&self, from: Node, to: Node, kind: EdgeKind) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to && e.kind == kind)
    }

    /// Present resources in stable order, prerequisites first.
    #[must_use]
    pub fn nodes(&self) -> Vec<Node> {
        let mut out = Vec::new();
        if self.install.as_ref().is_some_and(|s| s.configure_epel) {
            out.push(Node::EpelRepo);
        }
        if self.install.is_some() {
            out.push(Node::Install);
        }
        if self.config.is_some() {
            out.push(Node::Config);
        }
        out.push(Node::Init);
        out
    }
}
