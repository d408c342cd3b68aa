// Naming rules shared by the context assembler and the client template.

use prost_types::FileDescriptorProto;

/// Path prefix Twirp servers mount services under, before protocol v6.
pub const TWIRP_PREFIX: &str = "/twirp";

/// The only protocol version that serves routes without [`TWIRP_PREFIX`].
pub const PREFIXLESS_VERSION: &str = "v6";

/// File name of the schema without directories and without anything after
/// its first dot: `"api/v1/service.proto"` becomes `"service"`.
pub fn import_path(file: &FileDescriptorProto) -> &str {
    base_name(file.name())
}

/// Name of the generated client module, e.g. `service.twirp.ts`.
pub fn output_file_name(file: &FileDescriptorProto) -> String {
    format!("{}.twirp.ts", base_name(file.name()))
}

fn base_name(path: &str) -> &str {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name.split('.').next().unwrap_or(file_name)
}

/// Lower-cases the first character only. protobufjs exposes `SayHello` on the
/// service prototype as `sayHello`.
pub fn lower_initial(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
    }
}

/// Named-import binding for the root namespace of a package:
/// `"foo.bar"` becomes `"{foo}"`. An empty package yields an empty binding.
pub fn import_binding(package: &str) -> String {
    if package.is_empty() {
        return String::new();
    }
    let root = package.split('.').next().unwrap_or(package);
    format!("{{{root}}}")
}

/// `"v6"` routes without a prefix, every other version under `/twirp`.
pub fn twirp_path_prefix(version: &str) -> &'static str {
    if version == PREFIXLESS_VERSION {
        ""
    } else {
        TWIRP_PREFIX
    }
}
