//! Declaration manifest: the JSON hand-off from a host parser.

use anyhow::Context;
use declguard_domain::DeclarationError;
use declguard_domain::model::{DeclarationKind, DeclarationNode, ProjectModel, SourceFileModel};
use declguard_types::SourcePath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeclarationManifest {
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FileEntry {
    pub path: String,
    #[serde(default)]
    pub declarations: Vec<DeclarationEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeclarationEntry {
    /// `interface` or `type-alias` (`type` is accepted too).
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub exported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
}

pub fn parse_manifest_json(text: &str) -> anyhow::Result<DeclarationManifest> {
    serde_json::from_str(text).context("parse declaration manifest")
}

impl DeclarationManifest {
    /// Convert into the domain model, failing fast on an unknown kind or an empty name.
    pub fn into_model(self) -> anyhow::Result<ProjectModel> {
        let files = self
            .files
            .into_iter()
            .map(|file| {
                let declarations = file
                    .declarations
                    .into_iter()
                    .map(|d| {
                        let kind = DeclarationKind::parse(&d.kind).with_context(|| {
                            format!("unknown declaration kind `{}` in {}", d.kind, file.path)
                        })?;
                        if d.name.is_empty() {
                            return Err(anyhow::Error::new(DeclarationError::MissingName { kind })
                                .context(format!("declaration in {}", file.path)));
                        }
                        Ok(DeclarationNode {
                            kind,
                            name: d.name,
                            exported: d.exported,
                            line: d.line,
                            col: d.col,
                        })
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?;
                Ok(SourceFileModel {
                    path: SourcePath::new(&file.path),
                    declarations,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(ProjectModel { files })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_defaults_to_false_and_type_alias_is_accepted() {
        let manifest = parse_manifest_json(
            r#"{"files":[{"path":"src\\a.ts","declarations":[
                {"kind":"type","name":"Id"},
                {"kind":"interface","name":"User","exported":true,"line":2,"col":18}
            ]}]}"#,
        )
        .expect("parse");
        let model = manifest.into_model().expect("model");

        let file = &model.files[0];
        assert_eq!(file.path.as_str(), "src/a.ts");
        assert_eq!(file.declarations[0].kind, DeclarationKind::TypeAlias);
        assert!(!file.declarations[0].exported);
        assert_eq!(file.declarations[1].line, Some(2));
        assert_eq!(model.declaration_count(), 2);
    }

    #[test]
    fn unknown_kind_names_the_file() {
        let manifest = parse_manifest_json(
            r#"{"files":[{"path":"src/a.ts","declarations":[{"kind":"enum","name":"Color"}]}]}"#,
        )
        .expect("parse");
        let err = manifest.into_model().expect_err("enum is not a type declaration");
        let msg = format!("{err:#}");
        assert!(msg.contains("enum"));
        assert!(msg.contains("src/a.ts"));
    }

    #[test]
    fn empty_manifest_is_valid() {
        let model = parse_manifest_json("{}").expect("parse").into_model().expect("model");
        assert!(model.files.is_empty());
    }

    #[test]
    fn malformed_manifest_errors() {
        assert!(parse_manifest_json(r#"{"files": 3}"#).is_err());
    }

    #[test]
    fn empty_name_fails_conversion() {
        let manifest = parse_manifest_json(
            r#"{"files":[{"path":"src/a.ts","declarations":[{"kind":"interface","name":"","exported":true}]}]}"#,
        )
        .expect("parse");
        let err = manifest.into_model().expect_err("empty name");
        let text = format!("{err:#}");
        assert!(text.contains("in src/a.ts"));
        assert!(text.contains("interface declaration has no identifier name"));
    }
}
