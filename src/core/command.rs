//! Mapping from user-facing operations to external program invocations.
//!
//! Arguments are kept as an argument vector and handed to the child
//! directly, so nothing a user types is ever interpreted by a shell.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::core::error::ComphyError;
use crate::core::resolution::Resolution;
use crate::core::settings::Settings;

/// A program plus the exact arguments it will receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new<P: Into<OsString>>(program: P) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg<A: Into<OsString>>(mut self, arg: A) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Build an invocation from raw tokens; a lone token is split on whitespace.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ComphyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.len() == 1 {
            tokens = tokens[0].split_whitespace().map(str::to_string).collect();
        }
        let mut iter = tokens.into_iter();
        let program = iter
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ComphyError::invalid("custom command cannot be empty"))?;
        Ok(Self {
            program: program.into(),
            args: iter.map(OsString::from).collect(),
        })
    }

    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {arg:?}")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Operations forwarded to the external UI or generator binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Start { gpu: bool },
    Stop,
    Status,
    LoadModel(PathBuf),
    LoadWorkflow(PathBuf),
    Refresh(String),
    LoadFromImage(PathBuf),
    SaveWorkflow(PathBuf),
    SetConfig(PathBuf),
    Generate {
        prompt: String,
        resolution: Resolution,
        output: PathBuf,
    },
}

impl UiCommand {
    pub fn invocation(&self, settings: &Settings) -> Invocation {
        let ui = || Invocation::new(&settings.ui_program);
        match self {
            UiCommand::Start { gpu } => {
                let inv = ui().arg("start");
                if *gpu { inv } else { inv.arg("--cpu") }
            }
            UiCommand::Stop => ui().arg("stop"),
            UiCommand::Status => ui().arg("status"),
            UiCommand::LoadModel(path) => ui().arg("load_model").arg(path),
            UiCommand::LoadWorkflow(path) => ui().arg("load_workflow").arg(path),
            UiCommand::Refresh(component) => ui().arg("refresh").arg(component),
            UiCommand::LoadFromImage(path) => ui().arg("load_from_image").arg(path),
            UiCommand::SaveWorkflow(path) => ui().arg("save_workflow").arg(path),
            UiCommand::SetConfig(path) => ui().arg("set_config").arg(path),
            UiCommand::Generate {
                prompt,
                resolution,
                output,
            } => Invocation::new(&settings.generator_program)
                .arg("generate")
                .arg("--prompt")
                .arg(prompt)
                .arg("--width")
                .arg(resolution.width.to_string())
                .arg("--height")
                .arg(resolution.height.to_string())
                .arg("--output")
                .arg(output),
        }
    }
}
