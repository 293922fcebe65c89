use crate::shared::error::PublishError;
use crate::shared::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default REST endpoint of the Dependency-Track BOM upload API.
pub const DEFAULT_REALM: &str = "api/v1/bom";

/// Default location of the generated BOM, relative to the working directory.
pub const DEFAULT_BOM_FILE: &str = "build/reports/bom.xml";

/// PublishConfig - the parameters of a single publish call
///
/// Validity is checked once by the publish use case before any file or
/// network access. The API key is masked in `Debug` and `Display` output.
#[derive(Clone, PartialEq, Eq)]
pub struct PublishConfig {
    use_https: bool,
    host: String,
    realm: String,
    api_key: String,
    project_uuid: String,
    bom_file: PathBuf,
}

impl PublishConfig {
    pub fn new(
        use_https: bool,
        host: impl Into<String>,
        realm: impl Into<String>,
        api_key: impl Into<String>,
        project_uuid: impl Into<String>,
        bom_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            use_https,
            host: host.into(),
            realm: realm.into(),
            api_key: api_key.into(),
            project_uuid: project_uuid.into(),
            bom_file: bom_file.into(),
        }
    }

    pub fn builder() -> PublishConfigBuilder {
        PublishConfigBuilder::default()
    }

    pub fn use_https(&self) -> bool {
        self.use_https
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn project_uuid(&self) -> &str {
        &self.project_uuid
    }

    pub fn bom_file(&self) -> &Path {
        &self.bom_file
    }

    /// Returns true when every required parameter is set.
    pub fn is_valid(&self) -> bool {
        self.missing_parameters().is_empty()
    }

    /// Names of the required parameters that are empty, in declaration order.
    pub fn missing_parameters(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.host.is_empty() {
            missing.push("host");
        }
        if self.realm.is_empty() {
            missing.push("realm");
        }
        if self.api_key.is_empty() {
            missing.push("apiKey");
        }
        if self.project_uuid.is_empty() {
            missing.push("projectUuid");
        }
        if self.bom_file.as_os_str().is_empty() {
            missing.push("bomFile");
        }
        missing
    }

    /// Fails with `ConfigValidation` when a required parameter is empty.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_parameters();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PublishError::ConfigValidation { missing }.into())
        }
    }

    /// Whether the project identifier has UUID syntax.
    ///
    /// The server is the authority on project identifiers, so a mismatch is
    /// only worth a notice.
    pub fn project_uuid_is_well_formed(&self) -> bool {
        uuid::Uuid::parse_str(&self.project_uuid).is_ok()
    }

    /// Hint logged for a missing parameter.
    pub fn hint_for(parameter: &str) -> &'static str {
        match parameter {
            "host" => "'host' is not set. Set the hostname of the dependency-track server. Syntax: 'host[:port]' e.g. localhost:8080. Port 80 is default",
            "realm" => "Wrong value for the 'realm' property.",
            "apiKey" => "'apiKey' is not set. Set the 'apiKey' to access the dependency-track server.",
            "projectUuid" => "'projectUuid' is not set. This is the uuid of the associated dependency-track project. It can be found in the address bar of your browser when the project is open.",
            "bomFile" => "'bomFile' is not set. Point it at the generated BOM.",
            _ => "Unknown parameter.",
        }
    }

    fn masked_api_key(&self) -> &'static str {
        if self.api_key.is_empty() {
            ""
        } else {
            "****"
        }
    }
}

impl fmt::Debug for PublishConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishConfig")
            .field("use_https", &self.use_https)
            .field("host", &self.host)
            .field("realm", &self.realm)
            .field("api_key", &self.masked_api_key())
            .field("project_uuid", &self.project_uuid)
            .field("bom_file", &self.bom_file)
            .finish()
    }
}

impl fmt::Display for PublishConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PublishConfig(useHttps={}, host='{}', realm='{}', apiKey='{}', projectUuid='{}', bomFile={})",
            self.use_https,
            self.host,
            self.realm,
            self.masked_api_key(),
            self.project_uuid,
            self.bom_file.display()
        )
    }
}

/// Builder for `PublishConfig`.
///
/// `realm` and `bom_file` start at their defaults; the other string
/// parameters start empty and are reported by `is_valid` until set.
#[derive(Debug, Clone)]
pub struct PublishConfigBuilder {
    use_https: bool,
    host: String,
    realm: String,
    api_key: String,
    project_uuid: String,
    bom_file: PathBuf,
}

impl Default for PublishConfigBuilder {
    fn default() -> Self {
        Self {
            use_https: false,
            host: String::new(),
            realm: DEFAULT_REALM.to_string(),
            api_key: String::new(),
            project_uuid: String::new(),
            bom_file: PathBuf::from(DEFAULT_BOM_FILE),
        }
    }
}

impl PublishConfigBuilder {
    pub fn use_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = realm.into();
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn project_uuid(mut self, project_uuid: impl Into<String>) -> Self {
        self.project_uuid = project_uuid.into();
        self
    }

    pub fn bom_file(mut self, bom_file: impl Into<PathBuf>) -> Self {
        self.bom_file = bom_file.into();
        self
    }

    pub fn build(self) -> PublishConfig {
        PublishConfig {
            use_https: self.use_https,
            host: self.host,
            realm: self.realm,
            api_key: self.api_key,
            project_uuid: self.project_uuid,
            bom_file: self.bom_file,
        }
    }
}
