use prost_types::compiler::CodeGeneratorRequest;
use prost_types::{FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto};

pub fn service(name: &str, methods: &[&str]) -> ServiceDescriptorProto {
    ServiceDescriptorProto {
        name: Some(name.to_string()),
        method: methods
            .iter()
            .map(|m| MethodDescriptorProto {
                name: Some(m.to_string()),
                input_type: Some(format!(".{m}Request")),
                output_type: Some(format!(".{m}Response")),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

pub fn file(
    name: &str,
    package: &str,
    services: Vec<ServiceDescriptorProto>,
) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(name.to_string()),
        package: Some(package.to_string()),
        syntax: Some("proto3".to_string()),
        service: services,
        ..Default::default()
    }
}

pub fn make_greeter() -> FileDescriptorProto {
    file(
        "service.proto",
        "example.api",
        vec![service("Greeter", &["SayHello"])],
    )
}

pub fn make_multi() -> FileDescriptorProto {
    let mut f = file(
        "acme/shop/v1/shop.proto",
        "acme.shop.v1",
        vec![
            service("Catalog", &["ListProducts", "GetProduct"]),
            service("Checkout", &["PlaceOrder"]),
            service("Health", &[]),
        ],
    );
    f.dependency = vec!["google/protobuf/timestamp.proto".to_string()];
    f
}

pub fn make_timestamp() -> FileDescriptorProto {
    file("google/protobuf/timestamp.proto", "google.protobuf", vec![])
}

/// Request shaped like the one protoc sends: dependencies first, only the
/// last file requested.
pub fn make_request(parameter: Option<&str>) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: vec!["acme/shop/v1/shop.proto".to_string()],
        parameter: parameter.map(str::to_string),
        proto_file: vec![make_timestamp(), make_multi()],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use prost_types::compiler::CodeGeneratorResponse;
    use twirp_typescript::{Generator, plugin};

    fn roundtrip(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
        let bytes = plugin::respond_bytes(&request.encode_to_vec());
        CodeGeneratorResponse::decode(bytes.as_slice()).expect("response should decode")
    }

    #[test]
    fn test_greeter_v6_end_to_end() {
        let request = CodeGeneratorRequest {
            file_to_generate: vec!["service.proto".to_string()],
            parameter: Some("version=v6".to_string()),
            proto_file: vec![make_greeter()],
            ..Default::default()
        };
        let response = roundtrip(&request);

        assert_eq!(response.error, None);
        assert_eq!(response.file.len(), 1);
        let file = &response.file[0];
        assert_eq!(file.name(), "service.twirp.ts");
        assert!(file.content().contains("'/example.api.Greeter/'"));
        assert!(file.content().contains("export const createGreeter = "));
    }

    #[test]
    fn test_greeter_v5_end_to_end() {
        let request = CodeGeneratorRequest {
            file_to_generate: vec!["service.proto".to_string()],
            parameter: Some("version=v5".to_string()),
            proto_file: vec![make_greeter()],
            ..Default::default()
        };
        let response = roundtrip(&request);

        let file = &response.file[0];
        assert_eq!(file.name(), "service.twirp.ts");
        assert!(file.content().contains("'/twirp/example.api.Greeter/'"));
        assert!(file.content().contains("export const createGreeter = "));
    }

    #[test]
    fn test_multi_service_file() {
        let response = roundtrip(&make_request(None));
        assert_eq!(response.error, None);
        assert_eq!(response.file.len(), 1);

        let file = &response.file[0];
        assert_eq!(file.name(), "shop.twirp.ts");

        let content = file.content();
        let header = "// Generated by protoc-gen-twirp_typescript. DO NOT EDIT\n";
        assert!(content.starts_with(header));
        assert!(content.contains("import {acme} from './shop.pb';"));

        let order = [
            "fn === acme.shop.v1.Catalog.prototype.listProducts",
            "fn === acme.shop.v1.Catalog.prototype.getProduct",
            "fn === acme.shop.v1.Checkout.prototype.placeOrder",
            "throw new Error('Unknown Method')",
            "export const CatalogPathPrefix = '/twirp/acme.shop.v1.Catalog/';",
            "export const createCatalog = (baseURL: string): acme.shop.v1.Catalog => {",
            "export const CheckoutPathPrefix = '/twirp/acme.shop.v1.Checkout/';",
            "export const HealthPathPrefix = '/twirp/acme.shop.v1.Health/';",
            "export const createHealth = ",
        ];
        let mut last = 0;
        for needle in order {
            let Some(at) = content[last..].find(needle) else {
                panic!("{needle:?} missing or out of order in:\n{content}");
            };
            last += at + needle.len();
        }

        assert_eq!(content.matches("return '").count(), 3);
        assert!(content.contains("return 'ListProducts';"));
        let adapter = "createTwirpAdapter(axios, getServiceMethodName)";
        assert_eq!(content.matches(adapter).count(), 3);
    }

    #[test]
    fn test_requested_timestamp_produces_nothing() {
        let request = CodeGeneratorRequest {
            file_to_generate: vec!["google/protobuf/timestamp.proto".to_string()],
            proto_file: vec![make_timestamp()],
            ..Default::default()
        };
        let response = roundtrip(&request);
        assert_eq!(response.error, None);
        assert!(response.file.is_empty());
    }

    #[test]
    fn test_bad_parameter_reported_in_response() {
        let response = roundtrip(&make_request(Some("version")));
        assert!(response.file.is_empty());
        assert!(response.error().contains("expected key=value"));
    }

    #[test]
    fn test_plugin_matches_library_output() {
        let response = roundtrip(&make_request(Some("version=v6")));
        let direct = Generator::new("v6").generate(&make_multi()).unwrap();
        assert_eq!(response.file, direct);
    }
}
