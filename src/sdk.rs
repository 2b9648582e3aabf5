//! Loading and interpretation of `sdk_info.json`.
//!
//! The SDK extractor emits a JSON description of an API surface: the Go
//! package it came from plus one entry per API method. Only the method name
//! and receiver matter here; request/response structs are consumed by the
//! downstream generator, not by this tool.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Error;

static NAMESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/([a-z0-9-]+)-go-client/").expect("Invalid namespace pattern")
});

/// One API method discovered by the SDK extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMethod {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub receiver: String,
}

impl ApiMethod {
    pub fn new(name: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: receiver.into(),
        }
    }
}

/// One entry of `api_request_response_struct`. The extractor attaches
/// request/response type details alongside `api_method`; those fields are
/// ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiEntry {
    #[serde(default)]
    pub api_method: ApiMethod,
}

/// Parsed `sdk_info.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SdkInfo {
    #[serde(default)]
    pub package_path: String,
    #[serde(default)]
    pub api_request_response_struct: Vec<ApiEntry>,
}

impl SdkInfo {
    /// Load and parse the SDK description.
    ///
    /// A missing file and malformed JSON are distinct fatal errors; callers
    /// never see a partially parsed description.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                Error::MissingInput(path.to_path_buf())
            } else {
                Error::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&raw).map_err(|source| Error::InvalidInput {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Namespace embedded in the SDK package path, e.g.
    /// `github.com/.../monitoring-go-client/v4` yields `monitoring`.
    pub fn namespace(&self) -> String {
        NAMESPACE_RE
            .captures(&self.package_path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// The ordered method list the classifier consumes.
    pub fn methods(&self) -> Vec<ApiMethod> {
        self.api_request_response_struct
            .iter()
            .map(|entry| entry.api_method.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn namespace_extracted_from_package_path() {
        let info = SdkInfo {
            package_path: "github.com/nutanix/monitoring-go-client/v4".to_string(),
            ..Default::default()
        };
        assert_eq!(info.namespace(), "monitoring");
    }

    #[test]
    fn namespace_falls_back_to_unknown() {
        let info = SdkInfo {
            package_path: "something/else".to_string(),
            ..Default::default()
        };
        assert_eq!(info.namespace(), "unknown");
    }

    #[test]
    fn load_parses_methods_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "package_path": "x/networking-go-client/v4",
                "api_request_response_struct": [
                    {{"api_method": {{"name": "CreateSubnet", "receiver": "SubnetApi"}}}},
                    {{"api_method": {{"name": "ListSubnets", "receiver": "SubnetApi"}}}}
                ]
            }}"#
        )
        .unwrap();

        let info = SdkInfo::load(file.path()).unwrap();
        assert_eq!(info.namespace(), "networking");
        assert_eq!(
            info.methods(),
            vec![
                ApiMethod::new("CreateSubnet", "SubnetApi"),
                ApiMethod::new("ListSubnets", "SubnetApi"),
            ]
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SdkInfo::load(Path::new("/nonexistent/sdk_info.json")).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }

    #[test]
    fn load_reports_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = SdkInfo::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn extra_fields_are_tolerated() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "package_path": "x/iam-go-client/v4",
                "api_request_response_struct": [
                    {{
                        "api_method": {{"name": "CreateUser", "receiver": "UserApi", "args": []}},
                        "request_struct": {{"name": "User"}},
                        "response_struct": {{"name": "UserResponse"}}
                    }}
                ]
            }}"#
        )
        .unwrap();

        let info = SdkInfo::load(file.path()).unwrap();
        assert_eq!(info.methods(), vec![ApiMethod::new("CreateUser", "UserApi")]);
    }
}
