// Descriptor ingestion and render context assembly.
//
// The template only ever sees a `RenderContext`; raw prost descriptor types
// stop here.

use prost_types::FileDescriptorProto;

use super::names;

/// Schema of the Timestamp well-known type. Clients need nothing generated
/// for it.
pub const TIMESTAMP_PROTO: &str = "google/protobuf/timestamp.proto";

/// One RPC service, with methods in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub package: String,
    pub methods: Vec<String>,
}

/// Everything the client template consumes for one schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Schema path the context was built from, for diagnostics.
    pub source: String,
    pub package: String,
    pub import_path: String,
    pub twirp_prefix: &'static str,
    pub services: Vec<Service>,
}

/// Package and services pulled out of a descriptor, before naming rules apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingested {
    pub package: String,
    pub services: Vec<Service>,
}

/// Returns `None` for files that produce no output.
pub fn ingest(file: &FileDescriptorProto) -> Option<Ingested> {
    if file.name() == TIMESTAMP_PROTO {
        return None;
    }

    let package = file.package().to_string();
    let services = file
        .service
        .iter()
        .map(|service| Service {
            name: service.name().to_string(),
            package: package.clone(),
            methods: service
                .method
                .iter()
                .map(|method| method.name().to_string())
                .collect(),
        })
        .collect();

    Some(Ingested { package, services })
}

impl RenderContext {
    pub fn assemble(file: &FileDescriptorProto, ingested: Ingested, version: &str) -> Self {
        RenderContext {
            source: file.name().to_string(),
            package: ingested.package,
            import_path: names::import_path(file).to_string(),
            twirp_prefix: names::twirp_path_prefix(version),
            services: ingested.services,
        }
    }
}
