//! Builds a configuration tree from a JSON document.
//!
//! ```json
//! {
//!   "checks": [{ "name": "health", "assert": [{ "condition": "...", "error_message": "..." }] }],
//!   "resources": [{ "address": "data.http.x", "container": "health" }],
//!   "modules": { "network": { "checks": [], "resources": [] } }
//! }
//! ```
//!
//! A module call mapped to `null` yields a child whose body is not loaded.

use super::{validate_call_name, Check, CheckRule, Config, ConfigError, Container, Module, Resource};
use crate::addrs::{CheckAddr, ModuleAddr, ResourceAddr};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModuleDoc {
    #[serde(default)]
    checks: Vec<CheckDoc>,
    #[serde(default)]
    resources: Vec<ResourceDoc>,
    #[serde(default)]
    modules: BTreeMap<String, Option<ModuleDoc>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CheckDoc {
    name: String,
    #[serde(default, rename = "assert")]
    asserts: Vec<CheckRule>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResourceDoc {
    address: String,
    /// Local name of the check this resource is embedded in.
    container: Option<String>,
}

pub fn from_json(src: &str) -> Result<Config, ConfigError> {
    let doc: ModuleDoc = serde_json::from_str(src)?;
    build(ModuleAddr::root(), Some(doc))
}

pub fn from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let src = std::fs::read_to_string(path)?;
    from_json(&src)
}

fn build(path: ModuleAddr, doc: Option<ModuleDoc>) -> Result<Config, ConfigError> {
    let Some(doc) = doc else {
        return Ok(Config { path, module: None, children: BTreeMap::new() });
    };

    let mut module = Module::new();
    for check in doc.checks {
        module.add_check(Check { addr: CheckAddr::new(check.name), asserts: check.asserts })?;
    }

    for res in doc.resources {
        let addr: ResourceAddr = res.address.parse().map_err(ConfigError::InvalidResourceAddr)?;
        let mut resource = Resource::new(addr);
        if let Some(name) = res.container {
            let check = module.check_by_name(&name).ok_or_else(|| ConfigError::UnknownContainer {
                resource: res.address.clone(),
                check: name.clone(),
            })?;
            let container: Arc<dyn Container> = Arc::clone(check) as Arc<dyn Container>;
            resource = resource.within(container);
        }
        module.add_resource(resource)?;
    }

    let mut children = BTreeMap::new();
    for (name, child) in doc.modules {
        validate_call_name(&name)?;
        let child_path = path.child(name.clone());
        children.insert(name, build(child_path, child)?);
    }

    Ok(Config { path, module: Some(module), children })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    const DOC: &str = r#"{
        "checks": [
            { "name": "health", "assert": [{ "condition": "data.http.x.status == 200", "error_message": "down" }] }
        ],
        "resources": [
            { "address": "data.http.x", "container": "health" },
            { "address": "aws_instance.web" }
        ],
        "modules": {
            "network": { "checks": [{ "name": "cidr" }] },
            "broken": null
        }
    }"#;

    #[test]
    fn test_load_tree() {
        let cfg = from_json(DOC).unwrap();
        let module = cfg.module().unwrap();

        assert_eq!(module.checks.len(), 1);
        assert_eq!(module.checks[0].asserts[0].error_message, "down");

        let embedded = module.resource_by_addr(&ResourceAddr::data("http", "x")).unwrap();
        let container = embedded.container.as_ref().unwrap();
        assert!(container.accessible(&CheckAddr::new("health")));
        assert!(!container.accessible(&CheckAddr::new("cidr")));

        let free = module.resource_by_addr(&ResourceAddr::managed("aws_instance", "web")).unwrap();
        assert!(free.container.is_none());

        let network = &cfg.children["network"];
        assert_eq!(network.path, ModuleAddr::root().child("network"));
        assert_eq!(network.module().unwrap().checks[0].addr, CheckAddr::new("cidr"));
        assert!(cfg.children["broken"].module.is_none());
    }

    #[rstest]
    #[case(r#"{ "resources": [{ "address": "data.http.x", "container": "nope" }] }"#, "unknown check")]
    #[case(r#"{ "checks": [{ "name": "a" }, { "name": "a" }] }"#, "Duplicate check")]
    #[case(r#"{ "resources": [{ "address": "a.b" }, { "address": "a.b" }] }"#, "Duplicate resource")]
    #[case(r#"{ "resources": [{ "address": "nonsense" }] }"#, "Invalid resource address")]
    #[case(r#"{ "variables": [] }"#, "Malformed configuration")]
    #[case(r#"{ "modules": { "a.module.b": {} } }"#, "Invalid module call name")]
    fn test_load_errors(#[case] src: &str, #[case] expected: &str) {
        let err = from_json(src).unwrap_err();
        assert!(err.to_string().contains(expected), "Msg: {}", err);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOC.as_bytes()).unwrap();

        let cfg = from_file(file.path()).unwrap();
        assert_eq!(cfg.descendants().len(), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
