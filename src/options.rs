// Plugin parameter parsing.
//
// protoc passes everything after `--twirp_typescript_out=` and before the
// colon as one string, e.g. `version=v6,library=pbjs`.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Message library the generated client is written against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Library {
    /// protobufjs static code, imported from `./<name>.pb`.
    #[default]
    Pbjs,
}

impl Library {
    /// Relative module holding the generated messages for `import_path`.
    pub fn message_module(self, import_path: &str) -> String {
        match self {
            Library::Pbjs => format!("./{import_path}.pb"),
        }
    }

    /// npm package providing `createTwirpAdapter`.
    pub fn adapter_module(self) -> &'static str {
        match self {
            Library::Pbjs => "pbjs-twirp",
        }
    }
}

impl FromStr for Library {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pbjs" => Ok(Library::Pbjs),
            other => Err(Error::Config(format!("unsupported library `{other}`"))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Twirp protocol version. Only `v6` changes the output.
    pub version: String,
    pub library: Library,
}

impl FromStr for Options {
    type Err = Error;

    fn from_str(parameter: &str) -> Result<Self> {
        let mut options = Options::default();

        let opts = parameter.split(',').map(str::trim);
        for opt in opts.filter(|opt| !opt.is_empty()) {
            let Some((key, value)) = opt.split_once('=') else {
                return Err(Error::Config(format!("expected key=value, got `{opt}`")));
            };
            match key.trim() {
                "version" => options.version = value.trim().to_string(),
                "library" => options.library = value.trim().parse()?,
                unknown => return Err(Error::Config(format!("unknown option `{unknown}`"))),
            }
        }

        Ok(options)
    }
}
