//! The generated `package.json` manifest.
//!
//! Everything except the `name` field is a fixed literal from the express
//! starter; field declaration order is the serialization order, which keeps
//! the rendered document stable across runs.

use anyhow::{Context, Result};
use serde::Serialize;

/// The generated `package.json` document.
#[derive(Serialize)]
pub struct PackageManifest {
    name: String,
    version: &'static str,
    private: bool,
    scripts: Scripts,
    dependencies: Dependencies,
    #[serde(rename = "devDependencies")]
    dev_dependencies: DevDependencies,
}

#[derive(Serialize)]
struct Scripts {
    clean: &'static str,
    build: &'static str,
    #[serde(rename = "ts:watch")]
    ts_watch: &'static str,
    server: &'static str,
    start: &'static str,
    seed: &'static str,
    test: &'static str,
}

#[derive(Serialize)]
struct Dependencies {
    #[serde(rename = "activeql-server")]
    activeql_server: &'static str,
    #[serde(rename = "apollo-server-express")]
    apollo_server_express: &'static str,
    express: &'static str,
    graphql: &'static str,
    #[serde(rename = "js-yaml")]
    js_yaml: &'static str,
    lodash: &'static str,
}

#[derive(Serialize)]
struct DevDependencies {
    #[serde(rename = "@types/express")]
    types_express: &'static str,
    #[serde(rename = "@types/node")]
    types_node: &'static str,
    concurrently: &'static str,
    mocha: &'static str,
    rimraf: &'static str,
    #[serde(rename = "ts-node")]
    ts_node: &'static str,
    typescript: &'static str,
}

impl PackageManifest {
    /// Build the manifest for a derived application name. The name is the
    /// sanitized project name, never the raw destination path.
    pub fn new(app_name: &str) -> Self {
        Self {
            name: app_name.to_string(),
            version: "0.0.0",
            private: true,
            scripts: Scripts {
                clean: "rimraf dist",
                build: "tsc -p express",
                ts_watch: "tsc -p express --watch",
                server: "ts-node express/impl/app.ts",
                start: "ts-node express/impl/app.ts",
                seed: "ts-node express/impl/seed.ts",
                test: "mocha -r ts-node/register express/impl/**/*.spec.ts",
            },
            dependencies: Dependencies {
                activeql_server: "^1.0.0",
                apollo_server_express: "^2.25.2",
                express: "^4.17.1",
                graphql: "^15.5.1",
                js_yaml: "^4.1.0",
                lodash: "^4.17.21",
            },
            dev_dependencies: DevDependencies {
                types_express: "^4.17.13",
                types_node: "^16.4.0",
                concurrently: "^6.2.0",
                mocha: "^9.0.2",
                rimraf: "^3.0.2",
                ts_node: "^10.1.0",
                typescript: "^4.3.5",
            },
        }
    }

    /// Render as 2-space-indented JSON with a trailing newline.
    pub fn render(&self) -> Result<String> {
        let mut rendered =
            serde_json::to_string_pretty(self).context("failed to render package.json")?;
        rendered.push('\n');
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_field_carries_the_derived_name() {
        let rendered = PackageManifest::new("demo-app").render().unwrap();
        assert!(rendered.contains("\"name\": \"demo-app\""));
    }

    #[test]
    fn version_is_the_fixed_literal() {
        let rendered = PackageManifest::new("demo").render().unwrap();
        assert!(rendered.contains("\"version\": \"0.0.0\""));
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = PackageManifest::new("demo").render().unwrap();
        let b = PackageManifest::new("demo").render().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn keys_render_in_schema_order() {
        let rendered = PackageManifest::new("demo").render().unwrap();
        let pos = |needle: &str| rendered.find(needle).unwrap();
        assert!(pos("\"name\"") < pos("\"version\""));
        assert!(pos("\"version\"") < pos("\"scripts\""));
        assert!(pos("\"scripts\"") < pos("\"dependencies\""));
        assert!(pos("\"dependencies\"") < pos("\"devDependencies\""));
    }

    #[test]
    fn document_is_indented_and_newline_terminated() {
        let rendered = PackageManifest::new("demo").render().unwrap();
        assert!(rendered.starts_with("{\n  \"name\""));
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn scripts_cover_the_starter_workflows() {
        let rendered = PackageManifest::new("demo").render().unwrap();
        for script in ["clean", "build", "ts:watch", "server", "seed", "test"] {
            assert!(
                rendered.contains(&format!("\"{script}\"")),
                "missing script {script}"
            );
        }
    }
}
