//! Generates promise-based [Twirp](https://twitchtv.github.io/twirp/) clients
//! in TypeScript for protobufjs message code.
//!
//! For every schema file, `<name>.twirp.ts` is emitted next to the
//! protobufjs module `<name>.pb`. It exports `<Service>PathPrefix` and
//! `create<Service>(baseURL)` for each service in the file.
//!
//! ```
//! use prost_types::{FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto};
//! use twirp_typescript::Generator;
//!
//! let file = FileDescriptorProto {
//!     name: Some("service.proto".into()),
//!     package: Some("example.api".into()),
//!     service: vec![ServiceDescriptorProto {
//!         name: Some("Greeter".into()),
//!         method: vec![MethodDescriptorProto {
//!             name: Some("SayHello".into()),
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let files = Generator::new("v6").generate(&file).unwrap();
//! assert_eq!(files[0].name(), "service.twirp.ts");
//! assert!(files[0].content().contains("'/example.api.Greeter/'"));
//! ```

pub mod codegen;
pub mod error;
pub mod options;
pub mod plugin;

pub use codegen::Generator;
pub use error::{Error, Result};
pub use options::{Library, Options};
