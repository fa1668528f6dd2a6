use tern_eval::{DigestAlgorithm, Interpreter, InterpreterBuilder, Value};

/// Flags accepted by `tern run`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOptions {
    /// Script file to execute.
    pub path: Option<String>,
    /// Value handed to the script through `input()`.
    pub input: Option<String>,
    pub seed: Option<u64>,
    pub digest: Option<DigestAlgorithm>,
    pub max_depth: Option<usize>,
}

impl RunOptions {
    /// Interpreter configured from these flags, printing to stdout.
    pub fn builder(&self) -> InterpreterBuilder {
        let mut builder = Interpreter::builder();
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        if let Some(digest) = self.digest {
            builder = builder.digest(digest);
        }
        if let Some(depth) = self.max_depth {
            builder = builder.max_call_depth(depth);
        }
        builder
    }

    pub fn input_value(&self) -> Option<Value> {
        self.input.as_deref().map(Value::from)
    }
}

/// Parse the arguments that follow `run`.
///
/// The first bare argument is the script path; later bare arguments are
/// rejected, as are unknown flags.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--input=") {
            options.input = Some(value.to_string());
        } else if let Some(value) = arg.strip_prefix("--seed=") {
            let seed = value
                .parse()
                .map_err(|_| format!("invalid seed '{value}' (expected an unsigned integer)"))?;
            options.seed = Some(seed);
        } else if let Some(value) = arg.strip_prefix("--digest=") {
            options.digest = Some(value.parse()?);
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            let depth = value
                .parse()
                .map_err(|_| format!("invalid max depth '{value}' (expected an unsigned integer)"))?;
            options.max_depth = Some(depth);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if options.path.is_none() {
            options.path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }
    Ok(options)
}
