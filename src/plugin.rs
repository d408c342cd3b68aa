// protoc plugin host: CodeGeneratorRequest in, CodeGeneratorResponse out.

use prost::Message;
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::{FileDescriptorProto, FileDescriptorSet};

use crate::codegen::Generator;
use crate::error::{Error, Result};
use crate::options::Options;

/// Generate every file the request asks for, in `file_to_generate` order.
/// An empty `file_to_generate` means every file in `proto_file`.
pub fn generate_request(request: &CodeGeneratorRequest) -> Result<Vec<File>> {
    let options: Options = request.parameter().parse()?;
    let library = options.library;
    let generator = Generator::new(options.version).with_library(library);

    let files: Vec<&FileDescriptorProto> = if request.file_to_generate.is_empty() {
        request.proto_file.iter().collect()
    } else {
        request
            .file_to_generate
            .iter()
            .map(|name| {
                request
                    .proto_file
                    .iter()
                    .find(|file| file.name() == name)
                    .ok_or_else(|| Error::MissingFile(name.clone()))
            })
            .collect::<Result<_>>()?
    };

    generate_all(&generator, files)
}

/// Standalone mode: generate every file of a descriptor set.
pub fn generate_set(set: &FileDescriptorSet, options: &Options) -> Result<Vec<File>> {
    let library = options.library;
    let generator = Generator::new(&options.version).with_library(library);
    generate_all(&generator, set.file.iter())
}

fn generate_all<'a>(
    generator: &Generator,
    files: impl IntoIterator<Item = &'a FileDescriptorProto>,
) -> Result<Vec<File>> {
    let mut out = Vec::new();
    for file in files {
        out.extend(generator.generate(file)?);
    }
    Ok(out)
}

/// Failures are reported in `error`, the way protoc expects from a plugin.
/// No files are returned alongside an error.
pub fn respond(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let mut response = CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    };
    match generate_request(request) {
        Ok(files) => response.file = files,
        Err(e) => {
            tracing::error!(error = %e, "generation failed");
            response.error = Some(e.to_string());
        }
    }
    response
}

/// Decode a serialized request, generate, and encode the response.
pub fn respond_bytes(input: &[u8]) -> Vec<u8> {
    let response = match CodeGeneratorRequest::decode(input) {
        Ok(request) => respond(&request),
        Err(e) => {
            let e = Error::from(e);
            tracing::error!(error = %e, "bad CodeGeneratorRequest");
            CodeGeneratorResponse {
                error: Some(format!("{e}; make sure this is run as a protoc plugin")),
                ..Default::default()
            }
        }
    };
    response.encode_to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost_types::{MethodDescriptorProto, ServiceDescriptorProto};

    fn proto(
        name: &str,
        package: &str,
        service: Option<(&str, &[&str])>,
    ) -> FileDescriptorProto {
        FileDescriptorProto {
            name: Some(name.to_string()),
            package: Some(package.to_string()),
            service: service
                .into_iter()
                .map(|(svc, methods)| ServiceDescriptorProto {
                    name: Some(svc.to_string()),
                    method: methods
                        .iter()
                        .map(|m| MethodDescriptorProto {
                            name: Some(m.to_string()),
                            ..Default::default()
                        })
                        .collect(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn request(parameter: Option<&str>, to_generate: &[&str]) -> CodeGeneratorRequest {
        CodeGeneratorRequest {
            file_to_generate: to_generate.iter().map(|s| s.to_string()).collect(),
            parameter: parameter.map(str::to_string),
            proto_file: vec![
                proto("google/protobuf/timestamp.proto", "google.protobuf", None),
                proto(
                    "users.proto",
                    "acme.users",
                    Some(("Users", &["Get", "List"])),
                ),
                proto("orders.proto", "acme.orders", Some(("Orders", &["Place"]))),
            ],
            ..Default::default()
        }
    }

    fn names(files: &[File]) -> Vec<&str> {
        files.iter().map(|f| f.name()).collect()
    }

    #[test]
    fn test_follows_file_to_generate_order() {
        let files = generate_request(&request(None, &["orders.proto", "users.proto"])).unwrap();
        assert_eq!(names(&files), ["orders.twirp.ts", "users.twirp.ts"]);
    }

    #[test]
    fn test_empty_file_to_generate_means_all_files() {
        let files = generate_request(&request(Some("version=v6"), &[])).unwrap();
        assert_eq!(names(&files), ["users.twirp.ts", "orders.twirp.ts"]);
        assert!(files[0].content().contains("'/acme.users.Users/'"));
    }

    #[test]
    fn test_version_parameter_is_honoured() {
        let files = generate_request(&request(Some("version=v5"), &["users.proto"])).unwrap();
        assert!(files[0].content().contains("'/twirp/acme.users.Users/'"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = generate_request(&request(None, &["nope.proto"])).unwrap_err();
        let Error::MissingFile(ref name) = err else {
            panic!("expected a missing file error, got {err:?}");
        };
        assert_eq!(name, "nope.proto");
    }

    #[test]
    fn test_respond_reports_errors_without_files() {
        let response = respond(&request(Some("flavour=x"), &["users.proto"]));
        assert!(response.file.is_empty());
        assert!(response.error().contains("unknown option `flavour`"));
    }

    #[test]
    fn test_respond_declares_proto3_optional() {
        let response = respond(&request(None, &["users.proto"]));
        assert_eq!(response.error, None);
        let proto3_optional = Feature::Proto3Optional as u64;
        assert_eq!(response.supported_features(), proto3_optional);
    }

    #[test]
    fn test_respond_bytes_rejects_garbage() {
        let out = respond_bytes(&[0xff, 0xff, 0xff]);
        let response = CodeGeneratorResponse::decode(out.as_slice()).unwrap();
        assert!(response.error().contains("protoc plugin"));
    }

    #[test]
    fn test_generate_set() {
        let set = FileDescriptorSet {
            file: request(None, &[]).proto_file,
        };
        let options: Options = "version=v6".parse().unwrap();
        let files = generate_set(&set, &options).unwrap();
        assert_eq!(names(&files), ["users.twirp.ts", "orders.twirp.ts"]);
    }
}
