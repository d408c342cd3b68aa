// The Twirp client template, expressed as a syntax tree builder.

use super::ast::{BinOp, Expr, Item, Module, Param, Stmt};
use super::context::{RenderContext, Service};
use super::names;
use crate::error::{Error, Result};
use crate::options::Library;

pub const HEADER: &str = "Generated by protoc-gen-twirp_typescript. DO NOT EDIT";

/// Name of the private helper mapping a prototype method back to its RPC name.
pub const METHOD_NAME_RESOLVER: &str = "getServiceMethodName";

const ADAPTER_FACTORY: &str = "createTwirpAdapter";
const HTTP_CLIENT: &str = "Axios";
const HTTP_CLIENT_MODULE: &str = "axios";
const CONTENT_TYPE: &str = "application/protobuf";

/// Value transforms the template calls while expanding.
#[derive(Debug, Clone, Copy)]
pub struct Helpers {
    pub lower_initial: fn(&str) -> String,
    pub import_binding: fn(&str) -> String,
}

impl Default for Helpers {
    fn default() -> Self {
        Helpers {
            lower_initial: names::lower_initial,
            import_binding: names::import_binding,
        }
    }
}

pub struct ClientTemplate {
    helpers: Helpers,
    library: Library,
}

impl ClientTemplate {
    pub fn new(helpers: Helpers, library: Library) -> Self {
        ClientTemplate { helpers, library }
    }

    /// Build the client module. Fails without output when a method name
    /// cannot be turned into a prototype property.
    pub fn expand(&self, ctx: &RenderContext) -> Result<Module> {
        check_shape(ctx)?;

        let mut items = vec![
            Item::Comment(HEADER.to_string()),
            Item::Import {
                binding: (self.helpers.import_binding)(&ctx.package),
                from: self.library.message_module(&ctx.import_path),
            },
            Item::Import {
                binding: format!("{{{ADAPTER_FACTORY}}}"),
                from: self.library.adapter_module().to_string(),
            },
            Item::Import {
                binding: HTTP_CLIENT.to_string(),
                from: HTTP_CLIENT_MODULE.to_string(),
            },
            self.method_name_resolver(&ctx.services),
        ];

        for service in &ctx.services {
            tracing::trace!(
                service = %service.name,
                methods = service.methods.len(),
                "expanding service"
            );
            items.push(path_prefix(service, ctx.twirp_prefix));
            items.push(factory(service));
        }

        Ok(Module { items })
    }

    fn method_name_resolver(&self, services: &[Service]) -> Item {
        let mut body = Vec::new();
        for service in services {
            for method in &service.methods {
                body.push(self.method_check(service, method));
            }
        }

        if !body.is_empty() {
            body.push(Stmt::Blank);
        }
        body.push(Stmt::Throw(Expr::New {
            class: "Error".to_string(),
            args: vec![Expr::str("Unknown Method")],
        }));

        Item::Const {
            export: false,
            name: METHOD_NAME_RESOLVER.to_string(),
            value: Expr::Arrow {
                params: vec![Param::new("fn", "any")],
                ret: Some("string".to_string()),
                body,
            },
        }
    }

    /// `if (fn === <pkg>.<Service>.prototype.<method>) { return '<Method>'; }`
    fn method_check(&self, service: &Service, method: &str) -> Stmt {
        let property = (self.helpers.lower_initial)(method);
        let target = service_namespace(service)
            .member("prototype")
            .member(property);
        Stmt::If {
            cond: Expr::ident("fn").binary(BinOp::StrictEq, target),
            then: vec![Stmt::Return(Expr::str(method))],
        }
    }
}

/// `<package>.<Service>`, kept verbatim even when the package is empty.
fn service_namespace(service: &Service) -> Expr {
    let package = Expr::ident(service.package.as_str());
    package.member(service.name.as_str())
}

fn path_prefix_name(service: &Service) -> String {
    format!("{}PathPrefix", service.name)
}

fn path_prefix(service: &Service, twirp_prefix: &str) -> Item {
    let path = format!("{twirp_prefix}/{}.{}/", service.package, service.name);
    Item::Const {
        export: true,
        name: path_prefix_name(service),
        value: Expr::str(path),
    }
}

fn factory(service: &Service) -> Item {
    let prefix = Expr::ident(path_prefix_name(service));
    let base_url = Expr::ident("baseURL").binary(BinOp::Add, prefix);
    let headers = Expr::Object(vec![("Accept".to_string(), Expr::str(CONTENT_TYPE))]);
    let config = Expr::Object(vec![
        ("baseURL".to_string(), base_url),
        ("headers".to_string(), headers),
    ]);
    let create_http_client = Expr::ident(HTTP_CLIENT).member("create");

    let adapter_args = vec![Expr::ident("axios"), Expr::ident(METHOD_NAME_RESOLVER)];
    let adapter = Expr::ident(ADAPTER_FACTORY).call(adapter_args);
    let create_client = service_namespace(service).member("create");

    Item::Const {
        export: true,
        name: format!("create{}", service.name),
        value: Expr::Arrow {
            params: vec![Param::new("baseURL", "string")],
            ret: Some(format!("{}.{}", service.package, service.name)),
            body: vec![
                Stmt::Const {
                    name: "axios".to_string(),
                    value: create_http_client.call(vec![config]),
                },
                Stmt::Blank,
                Stmt::Return(create_client.call(vec![adapter])),
            ],
        },
    }
}

/// Service names are used verbatim, even empty ones. An empty method name
/// has no prototype property to compare against.
fn check_shape(ctx: &RenderContext) -> Result<()> {
    for service in &ctx.services {
        if service.methods.iter().any(String::is_empty) {
            return Err(Error::expansion(
                &ctx.source,
                format!("service {} has a method without a name", service.name),
            ));
        }
    }
    Ok(())
}
