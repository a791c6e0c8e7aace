//! Speech synthesis through an external program
//!
//! The program is spawned directly, never through a shell, with `{text}`
//! and `{output}` substituted into its arguments. It must write the audio
//! to the `{output}` path; the file is read back and removed afterwards.

use async_trait::async_trait;
use tokio::process::Command;

use crate::{
    error::TtsError,
    types::{SpeechResponse, extension_for_content_type},
};

use super::TtsProvider;

const DEFAULT_CONTENT_TYPE: &str = "audio/wav";

/// Runs an external synthesis program per script
pub struct CommandProvider {
    name: String,
    program: String,
    args: Vec<String>,
    content_type: String,
}

impl CommandProvider {
    pub fn new(name: String, config: &reels_config::TtsProviderConfig) -> crate::error::Result<Self> {
        let program = config
            .program
            .clone()
            .filter(|program| !program.is_empty())
            .ok_or_else(|| TtsError::ConfigError(format!("program required for TTS provider '{name}'")))?;

        Ok(Self {
            name,
            program,
            args: config.args.clone(),
            content_type: config
                .content_type
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        })
    }

    fn render_args(&self, text: &str, output: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace("{output}", output).replace("{text}", text))
            .collect()
    }
}

#[async_trait]
impl TtsProvider for CommandProvider {
    async fn synthesize(&self, text: &str) -> crate::error::Result<SpeechResponse> {
        let output = tempfile::Builder::new()
            .prefix("reels-tts-")
            .suffix(&format!(".{}", extension_for_content_type(&self.content_type)))
            .tempfile()
            .map_err(|e| TtsError::CommandFailed(format!("failed to create output file: {e}")))?;
        let output_path = output.path().to_string_lossy().into_owned();

        tracing::debug!(provider = %self.name, program = %self.program, input_len = text.len(), "running TTS command");

        let result = Command::new(&self.program)
            .args(self.render_args(text, &output_path))
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "failed to spawn TTS command");
                TtsError::CommandFailed(format!("failed to spawn '{}': {e}", self.program))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_owned();
            tracing::error!(provider = %self.name, status = %result.status, %stderr, "TTS command failed");
            return Err(TtsError::CommandFailed(format!("'{}' exited with {}", self.program, result.status)));
        }

        let audio = tokio::fs::read(output.path())
            .await
            .map_err(|e| TtsError::InvalidAudio(format!("failed to read {output_path}: {e}")))?;

        if audio.is_empty() {
            return Err(TtsError::InvalidAudio(format!("'{}' wrote no audio", self.program)));
        }

        tracing::debug!(provider = %self.name, bytes = audio.len(), "TTS command complete");

        Ok(SpeechResponse::Audio {
            bytes: audio,
            content_type: self.content_type.clone(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
