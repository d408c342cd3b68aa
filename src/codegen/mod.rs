// twirp typescript codegen module

use prost_types::FileDescriptorProto;
use prost_types::compiler::code_generator_response::File;

use crate::error::Result;
use crate::options::Library;

pub mod ast;
pub mod code_writer;
pub mod context;
pub mod names;
pub mod printer;
pub mod template;

use context::RenderContext;
use template::{ClientTemplate, Helpers};

/// Generates one Twirp client module per schema file.
///
/// Holds configuration only; every call to [`Generator::generate`] starts from
/// scratch.
#[derive(Debug, Clone)]
pub struct Generator {
    version: String,
    library: Library,
    helpers: Helpers,
}

impl Generator {
    /// `version` is the Twirp protocol version; `"v6"` drops the `/twirp`
    /// route prefix.
    pub fn new(version: impl Into<String>) -> Self {
        Generator {
            version: version.into(),
            library: Library::default(),
            helpers: Helpers::default(),
        }
    }

    pub fn with_library(mut self, library: Library) -> Self {
        self.library = library;
        self
    }

    pub fn with_helpers(mut self, helpers: Helpers) -> Self {
        self.helpers = helpers;
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn library(&self) -> Library {
        self.library
    }

    /// Generate the client for `file`. Returns no files for the Timestamp
    /// well-known type and exactly one otherwise.
    pub fn generate(&self, file: &FileDescriptorProto) -> Result<Vec<File>> {
        let Some(ingested) = context::ingest(file) else {
            tracing::debug!(file = file.name(), "skipping well-known type");
            return Ok(Vec::new());
        };

        let ctx = RenderContext::assemble(file, ingested, &self.version);
        let template = ClientTemplate::new(self.helpers, self.library);
        let module = template.expand(&ctx)?;
        let content = printer::print(&module)?;

        let name = names::output_file_name(file);
        tracing::debug!(
            file = file.name(),
            output = %name,
            services = ctx.services.len(),
            "generated twirp client"
        );

        Ok(vec![File {
            name: Some(name),
            content: Some(content),
            ..Default::default()
        }])
    }
}
