//! api/plan.rs — plan assembly from the resolved stages.

use crate::constants::{PACKAGE_COMMAND, PACKAGE_NAME, VCS_COMMAND};
use crate::types::{
    ConfigFileSpec, Edge, EdgeKind, InitSpec, InstallMethod, InstallSpec, Node, NormalizedFacts,
    OsFamily, Parameters, Plan, ResolvedStrategy, SettingsSet,
};

/// Assemble the final plan: resource specs plus typed edges, honoring the
/// manage toggles. Deterministic for identical inputs.
pub(super) fn build(
    facts: &NormalizedFacts,
    strategy: &ResolvedStrategy,
    settings: SettingsSet,
    params: &Parameters,
) -> Plan {
    let install = params.manage_install.then(|| InstallSpec {
        method: strategy.method,
        package_name: PACKAGE_NAME.to_string(),
        package_ensure: params.package_ensure.clone(),
        repo: params.repo.clone(),
        version: params.version.clone(),
        path: strategy.path.clone(),
        manage_dependencies: params.manage_dependencies,
        // EPEL only exists on RedHat-family systems.
        configure_epel: params.configure_epel && facts.family == OsFamily::RedHat,
    });

    let config = params.manage_config.then(|| ConfigFileSpec {
        path: params.config_file.clone(),
        settings,
    });

    let init = InitSpec {
        command: init_command(strategy),
        search_path: facts.shell_path.clone(),
    };

    // Edge kinds are distinct on purpose: `Notifies` re-triggers init when
    // the install changed; `Before` only constrains ordering.
    let mut edges = Vec::new();
    if let Some(spec) = &install {
        if spec.configure_epel {
            edges.push(Edge {
                from: Node::EpelRepo,
                to: Node::Install,
                kind: EdgeKind::Before,
            });
        }
        edges.push(Edge {
            from: Node::Install,
            to: Node::Init,
            kind: EdgeKind::Notifies,
        });
    }
    if config.is_some() {
        edges.push(Edge {
            from: Node::Config,
            to: Node::Init,
            kind: EdgeKind::Before,
        });
    }

    Plan {
        install,
        config,
        init,
        edges,
    }
}

/// Strategy-dependent initialization command; `-h` verifies the tool runs
/// without touching account state.
fn init_command(strategy: &ResolvedStrategy) -> String {
    match strategy.method {
        InstallMethod::Package => format!("{PACKAGE_COMMAND} -h"),
        InstallMethod::Vcs => format!("{}/{} -h", strategy.path.display(), VCS_COMMAND),
    }
}
