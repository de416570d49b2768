//! Registry of the external CLIs each adapter operation shells out to.
//!
//! Cluster lifecycle goes through `gcloud`, while the location and VM-size
//! lookups go through `az`. Keeping that mapping in one table makes it
//! visible and replaceable per operation.

/// Logical operation performed by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListProjects,
    SetProject,
    ListClusters,
    CreateCluster,
    GetCredentials,
    ListLocations,
    ListVmSizes,
}

/// An external command-line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalTool {
    Gcloud,
    Az,
}

impl ExternalTool {
    pub fn program(self) -> &'static str {
        match self {
            Self::Gcloud => "gcloud",
            Self::Az => "az",
        }
    }
}

/// One registry entry: which tool an operation uses and how its command
/// line is shaped.
///
/// `{name}` placeholders in `template` are filled by [`ToolCommand::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCommand {
    pub operation: Operation,
    pub tool: ExternalTool,
    pub template: &'static str,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::ListProjects,
        Operation::SetProject,
        Operation::ListClusters,
        Operation::CreateCluster,
        Operation::GetCredentials,
        Operation::ListLocations,
        Operation::ListVmSizes,
    ];
}

/// Look up the registry entry for an operation.
pub fn command_for(operation: Operation) -> ToolCommand {
    let (tool, template) = match operation {
        Operation::ListProjects => (ExternalTool::Gcloud, "projects list --format json"),
        Operation::SetProject => (ExternalTool::Gcloud, "config set project {project}"),
        Operation::ListClusters => (
            ExternalTool::Gcloud,
            "container clusters list --format json",
        ),
        Operation::CreateCluster => (
            ExternalTool::Gcloud,
            "container clusters create {cluster} --zone {zone} --async",
        ),
        Operation::GetCredentials => (
            ExternalTool::Gcloud,
            "container clusters get-credentials {cluster}",
        ),
        Operation::ListLocations => (
            ExternalTool::Az,
            "account list-locations --query {query} -ojson",
        ),
        Operation::ListVmSizes => (ExternalTool::Az, "vm list-sizes -l {location} -ojson"),
    };
    ToolCommand {
        operation,
        tool,
        template,
    }
}

/// The full registry, one entry per operation.
pub fn registry() -> impl Iterator<Item = ToolCommand> {
    Operation::ALL.into_iter().map(command_for)
}

impl ToolCommand {
    /// Build the full command line, quoting each parameter for the shell
    /// flavor.
    ///
    /// Substitution is single-pass: braces inside a parameter value are
    /// never treated as placeholders. A placeholder without a matching
    /// parameter is left as-is.
    pub fn render(&self, unix: bool, params: &[(&str, &str)]) -> String {
        let mut line = String::with_capacity(self.template.len() + 32);
        line.push_str(self.tool.program());
        line.push(' ');

        let mut rest = self.template;
        while let Some(open) = rest.find('{') {
            line.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                line.push_str(&rest[open..]);
                rest = "";
                break;
            };
            let key = &after[..close];
            match params.iter().find(|(k, _)| *k == key) {
                Some((_, value)) => line.push_str(&quote(value, unix)),
                None => {
                    tracing::warn!(placeholder = key, "unfilled command placeholder");
                    line.push_str(&rest[open..open + close + 2]);
                }
            }
            rest = &after[close + 1..];
        }
        line.push_str(rest);
        line
    }
}

/// Quote a single argument for `sh` (single quotes) or `cmd` (double quotes).
///
/// `cmd` itself has no escape for `"`; the `\"` form relies on the invoked
/// tool's own argument parser (MSVC rules, as used by `gcloud` and `az`).
pub fn quote(value: &str, unix: bool) -> String {
    if unix {
        format!("'{}'", value.replace('\'', r"'\''"))
    } else {
        format!("\"{}\"", value.replace('"', "\\\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_one_entry_per_operation() {
        let entries: Vec<_> = registry().collect();
        assert_eq!(entries.len(), Operation::ALL.len());
        for (entry, op) in entries.iter().zip(Operation::ALL) {
            assert_eq!(entry.operation, op);
        }
    }

    #[test]
    fn lookups_use_az_and_lifecycle_uses_gcloud() {
        assert_eq!(command_for(Operation::ListLocations).tool, ExternalTool::Az);
        assert_eq!(command_for(Operation::ListVmSizes).tool, ExternalTool::Az);
        assert_eq!(
            command_for(Operation::CreateCluster).tool,
            ExternalTool::Gcloud
        );
    }

    #[test]
    fn render_quotes_for_unix() {
        let line = command_for(Operation::ListLocations)
            .render(true, &[("query", "[].{name:name,displayName:displayName}")]);
        assert_eq!(
            line,
            "az account list-locations --query '[].{name:name,displayName:displayName}' -ojson"
        );
    }

    #[test]
    fn render_quotes_for_cmd() {
        let line = command_for(Operation::ListLocations)
            .render(false, &[("query", "[].{name:name,displayName:displayName}")]);
        assert_eq!(
            line,
            "az account list-locations --query \"[].{name:name,displayName:displayName}\" -ojson"
        );
    }

    #[test]
    fn render_fills_multiple_placeholders() {
        let line = command_for(Operation::CreateCluster)
            .render(true, &[("cluster", "demo"), ("zone", "us-central1-a")]);
        assert_eq!(
            line,
            "gcloud container clusters create 'demo' --zone 'us-central1-a' --async"
        );
    }

    #[test]
    fn render_leaves_missing_placeholder() {
        let line = command_for(Operation::SetProject).render(true, &[]);
        assert_eq!(line, "gcloud config set project {project}");
    }

    #[test]
    fn quote_escapes_embedded_quotes() {
        assert_eq!(quote("it's", true), r"'it'\''s'");
        assert_eq!(quote("say \"hi\"", false), r#""say \"hi\"""#);
    }
}
